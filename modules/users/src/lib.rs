//! User resource module: REST API, domain service and storage for user
//! records.
//!
//! Layering follows the module convention used across this workspace:
//! - `contract` — pure models shared across layers (no serde);
//! - `domain` — business service, failure taxonomy and the repository port;
//! - `api::rest` — DTOs, schema validation, handlers and error translation;
//! - `infra::storage` — SeaORM-backed repository and migrations.

pub mod api;
pub mod contract;
pub mod domain;
pub mod infra;
