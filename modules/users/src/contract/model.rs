use chrono::{DateTime, Utc};

/// Pure user model (no serde). The password is write-only: it never leaves
/// the module through the REST layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Externally supplied identifier, globally unique.
    pub id: String,
    pub name: String,
    /// Globally unique.
    pub email: String,
    pub password: String,
    /// Assigned by the system at creation, immutable afterwards.
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new user. The creation timestamp is assigned by the
/// service, not supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Partial update data for a user. `None` fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserPatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}
