//! RFC 9457 Problem Details for HTTP APIs.
//!
//! Every non-2xx response in this workspace is a `Problem` body rendered
//! with the `application/problem+json` content type.

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Content type for Problem Details as per RFC 9457.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// RFC 9457 Problem Details body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(title = "Problem", description = "RFC 9457 Problem Details for HTTP APIs")]
pub struct Problem {
    /// URI reference identifying the problem type.
    #[serde(rename = "type")]
    pub type_url: String,
    /// Short, human-readable summary of the problem type.
    pub title: String,
    /// HTTP status code for this occurrence.
    pub status: u16,
    /// Human-readable explanation specific to this occurrence.
    pub detail: String,
    /// URI reference identifying the specific occurrence (the request path).
    pub instance: String,
    /// Machine-readable application error code.
    pub code: String,
    /// Request id for correlation, when one is available.
    pub request_id: Option<String>,
    /// Field-level violations for 400 responses.
    pub errors: Option<Vec<Violation>>,
}

/// One field-level violation inside a validation Problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(title = "Violation")]
pub struct Violation {
    /// Human-readable message for this violation.
    pub detail: String,
    /// JSON Pointer to the offending field (e.g. "/email").
    pub pointer: String,
}

impl Problem {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            type_url: "about:blank".to_string(),
            title: title.into(),
            status: status.as_u16(),
            detail: detail.into(),
            instance: String::new(),
            code: String::new(),
            request_id: None,
            errors: None,
        }
    }

    pub fn with_type(mut self, type_url: impl Into<String>) -> Self {
        self.type_url = type_url.into();
        self
    }

    pub fn with_instance(mut self, uri: impl Into<String>) -> Self {
        self.instance = uri.into();
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = Some(id.into());
        self
    }

    pub fn with_errors(mut self, errors: Vec<Violation>) -> Self {
        self.errors = Some(errors);
        self
    }
}

/// Axum responder that renders a `Problem` with its status and content type.
#[derive(Debug, Clone)]
pub struct ProblemResponse(pub Problem);

impl From<Problem> for ProblemResponse {
    fn from(p: Problem) -> Self {
        Self(p)
    }
}

impl IntoResponse for ProblemResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut resp = axum::Json(self.0).into_response();
        *resp.status_mut() = status;
        resp.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
        );
        resp
    }
}

pub fn bad_request(detail: impl Into<String>) -> ProblemResponse {
    Problem::new(StatusCode::BAD_REQUEST, "Bad Request", detail).into()
}

pub fn not_found(detail: impl Into<String>) -> ProblemResponse {
    Problem::new(StatusCode::NOT_FOUND, "Not Found", detail).into()
}

pub fn conflict(detail: impl Into<String>) -> ProblemResponse {
    Problem::new(StatusCode::CONFLICT, "Conflict", detail).into()
}

pub fn internal_error(detail: impl Into<String>) -> ProblemResponse {
    Problem::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
        detail,
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn response_carries_status_and_problem_content_type() {
        let p = Problem::new(StatusCode::CONFLICT, "Conflict", "id already taken");
        let resp = ProblemResponse(p).into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let ct = resp
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        assert_eq!(ct, APPLICATION_PROBLEM_JSON);
    }

    #[test]
    fn builder_fills_all_fields() {
        let p = Problem::new(StatusCode::BAD_REQUEST, "Validation failed", "bad input")
            .with_type("https://errors.userbase.dev/USERS_VALIDATION")
            .with_code("USERS_VALIDATION")
            .with_instance("/users")
            .with_request_id("req-1")
            .with_errors(vec![Violation {
                detail: "'id' is required".to_string(),
                pointer: "/id".to_string(),
            }]);

        assert_eq!(p.status, 400);
        assert_eq!(p.code, "USERS_VALIDATION");
        assert_eq!(p.instance, "/users");
        assert_eq!(p.request_id.as_deref(), Some("req-1"));
        assert_eq!(p.errors.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn violations_serialize_in_order() {
        let p = Problem::new(StatusCode::BAD_REQUEST, "Validation failed", "bad input")
            .with_errors(vec![
                Violation {
                    detail: "'id' is required".to_string(),
                    pointer: "/id".to_string(),
                },
                Violation {
                    detail: "'name' must be at least 2 characters long".to_string(),
                    pointer: "/name".to_string(),
                },
            ]);

        let v = serde_json::to_value(&p).expect("serialize");
        let errors = v["errors"].as_array().expect("errors array");
        assert_eq!(errors[0]["pointer"], "/id");
        assert_eq!(errors[1]["pointer"], "/name");
    }

    #[test]
    fn convenience_constructors_bind_statuses() {
        assert_eq!(bad_request("x").0.status, 400);
        assert_eq!(not_found("x").0.status, 404);
        assert_eq!(conflict("x").0.status, 409);
        assert_eq!(internal_error("x").0.status, 500);
    }
}
