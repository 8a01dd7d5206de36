use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Build the users router. The service is injected once at construction;
/// handlers never build their own collaborators.
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/users", get(handlers::get_users).post(handlers::create_user))
        .route(
            "/users/{id}",
            put(handlers::edit_user).delete(handlers::delete_user),
        )
        .with_state(service)
}
