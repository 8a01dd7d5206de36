//! The single failure-translation point for the users REST surface.
//!
//! Handlers never map failures themselves: schema errors and domain errors
//! both land here and come out as RFC 9457 problems with the status bound to
//! their kind. Anything not covered by the closed taxonomy is logged and
//! degraded to a generic 500 so internal details never reach the caller.

use axum::http::StatusCode;
use http_problem::{Problem, ProblemResponse, Violation};

use crate::api::rest::schema::SchemaError;
use crate::domain::error::DomainError;

/// Build a ProblemResponse with less boilerplate.
pub fn from_parts(
    status: StatusCode,
    code: &str,
    title: &str,
    detail: impl Into<String>,
    instance: &str,
) -> ProblemResponse {
    let problem = Problem::new(status, title, detail)
        .with_type(format!("https://errors.userbase.dev/{}", code))
        .with_code(code)
        .with_instance(instance);

    // Correlate with the current tracing span when one is active
    let problem = if let Some(id) = tracing::Span::current().id() {
        problem.with_request_id(id.into_u64().to_string())
    } else {
        problem
    };

    ProblemResponse(problem)
}

/// Map a schema validation failure to a 400 problem carrying the complete
/// ordered violation list.
pub fn map_schema_error(e: &SchemaError, instance: &str) -> ProblemResponse {
    let errors: Vec<Violation> = e
        .violations
        .iter()
        .map(|v| Violation {
            detail: v.detail.clone(),
            pointer: format!("/{}", v.field),
        })
        .collect();

    let ProblemResponse(problem) = from_parts(
        StatusCode::BAD_REQUEST,
        "USERS_VALIDATION",
        "Validation failed",
        "Request validation failed",
        instance,
    );

    ProblemResponse(problem.with_errors(errors))
}

/// Map a domain error to its bound status, matching the closed taxonomy
/// exhaustively.
pub fn map_domain_error(e: &DomainError, instance: &str) -> ProblemResponse {
    match e {
        DomainError::UserNotFound { id } => from_parts(
            StatusCode::NOT_FOUND,
            "USERS_NOT_FOUND",
            "User not found",
            format!("User with id '{}' was not found", id),
            instance,
        ),
        DomainError::IdAlreadyExists { id } => from_parts(
            StatusCode::CONFLICT,
            "USERS_ID_CONFLICT",
            "Id already exists",
            format!("Id '{}' is already in use", id),
            instance,
        ),
        DomainError::EmailAlreadyExists { email } => from_parts(
            StatusCode::CONFLICT,
            "USERS_EMAIL_CONFLICT",
            "Email already exists",
            format!("Email '{}' is already in use", email),
            instance,
        ),
        DomainError::Database { .. } => {
            // Log the internal details, never expose them to the client
            tracing::error!(error = ?e, "Database error occurred");
            from_parts(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL",
                "Internal error",
                "Unexpected error",
                instance,
            )
        }
    }
}
