//! Process-level runtime concerns: configuration loading and logging setup.

pub mod config;
pub mod logging;
mod paths;

pub use config::{AppConfig, CliArgs, DatabaseConfig, LoggingConfig, Section, ServerConfig};
