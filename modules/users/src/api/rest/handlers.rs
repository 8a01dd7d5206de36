use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info};

use crate::api::rest::dto::{CreateUserResponse, DeleteUserResponse, ListUsersQuery, UserDto};
use crate::api::rest::error::{map_domain_error, map_schema_error};
use crate::api::rest::schema;
use crate::domain::service::Service;
use http_problem::ProblemResponse;

/// Create a new user.
pub async fn create_user(
    State(svc): State<Arc<Service>>,
    uri: Uri,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<CreateUserResponse>), ProblemResponse> {
    info!("Creating user");

    let input = schema::parse_create_user(&body).map_err(|e| map_schema_error(&e, uri.path()))?;

    match svc.create_user(input).await {
        Ok(user) => Ok((
            StatusCode::CREATED,
            Json(CreateUserResponse {
                message: "User created successfully".to_string(),
                user: UserDto::from(user),
            }),
        )),
        Err(e) => {
            error!("Failed to create user: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// List users, optionally filtered by `q`.
pub async fn get_users(
    State(svc): State<Arc<Service>>,
    Query(query): Query<ListUsersQuery>,
    uri: Uri,
) -> Result<Json<Vec<UserDto>>, ProblemResponse> {
    info!("Listing users with query: {:?}", query.q);

    match svc.get_users(query.q.as_deref()).await {
        Ok(users) => Ok(Json(users.into_iter().map(UserDto::from).collect())),
        Err(e) => {
            error!("Failed to list users: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Edit an existing user with a partial body.
pub async fn edit_user(
    State(svc): State<Arc<Service>>,
    Path(id): Path<String>,
    uri: Uri,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<UserDto>, ProblemResponse> {
    info!("Editing user {}", id);

    let patch = schema::parse_edit_user(&body).map_err(|e| map_schema_error(&e, uri.path()))?;

    match svc.edit_user(&id, patch).await {
        Ok(user) => Ok(Json(UserDto::from(user))),
        Err(e) => {
            error!("Failed to edit user {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Delete a user by id.
pub async fn delete_user(
    State(svc): State<Arc<Service>>,
    Path(id): Path<String>,
    uri: Uri,
) -> Result<Json<DeleteUserResponse>, ProblemResponse> {
    info!("Deleting user {}", id);

    match svc.delete_user(&id).await {
        Ok(()) => Ok(Json(DeleteUserResponse {
            message: "User deleted successfully".to_string(),
        })),
        Err(e) => {
            error!("Failed to delete user {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}
