use anyhow::{Context, Result};
use std::path::PathBuf;

/// Resolve the server home directory to an absolute path.
///
/// `requested` wins when provided (a leading `~` expands to the user home);
/// otherwise the platform default is `%APPDATA%/<subdir>` on Windows and
/// `$HOME/<subdir>` elsewhere. The directory is created when `create` is set.
pub fn resolve_home_dir(
    requested: Option<String>,
    default_subdir: &str,
    create: bool,
) -> Result<PathBuf> {
    let mut path = match requested {
        Some(raw) => expand_user(&raw)?,
        None => platform_base()?.join(default_subdir),
    };

    if path.is_relative() {
        let cwd = std::env::current_dir().context("cannot determine current directory")?;
        path = cwd.join(path);
    }

    if create {
        std::fs::create_dir_all(&path)
            .with_context(|| format!("cannot create home dir {}", path.display()))?;
    }

    Ok(path)
}

fn expand_user(raw: &str) -> Result<PathBuf> {
    if let Some(rest) = raw.strip_prefix("~/").or_else(|| raw.strip_prefix("~\\")) {
        return Ok(user_home()?.join(rest));
    }
    if raw == "~" {
        return user_home();
    }
    Ok(PathBuf::from(raw))
}

fn user_home() -> Result<PathBuf> {
    #[cfg(target_os = "windows")]
    let var = "USERPROFILE";
    #[cfg(not(target_os = "windows"))]
    let var = "HOME";

    std::env::var_os(var)
        .map(PathBuf::from)
        .with_context(|| format!("{var} is not set"))
}

fn platform_base() -> Result<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA")
            .map(PathBuf::from)
            .context("APPDATA is not set")
    }
    #[cfg(not(target_os = "windows"))]
    {
        user_home()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_absolute_path_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let requested = dir.path().join("ub").to_string_lossy().to_string();
        let resolved = resolve_home_dir(Some(requested.clone()), ".userbase", true).unwrap();
        assert_eq!(resolved, PathBuf::from(requested));
        assert!(resolved.exists());
    }

    #[test]
    fn tilde_expands_to_user_home() {
        let dir = tempfile::tempdir().unwrap();
        #[cfg(not(target_os = "windows"))]
        std::env::set_var("HOME", dir.path());
        #[cfg(target_os = "windows")]
        std::env::set_var("USERPROFILE", dir.path());

        let resolved = resolve_home_dir(Some("~/.ub_test".into()), ".userbase", false).unwrap();
        assert!(resolved.starts_with(dir.path()));
        assert!(resolved.ends_with(".ub_test"));
    }
}
