//! Declarative request-body validation.
//!
//! Pure functions from a raw JSON body to normalized contract models. Rules
//! are applied per field and evaluated independently, so one pass surfaces
//! every violation instead of stopping at the first.

use crate::contract::model::{NewUser, UserPatch};
use serde_json::Value;
use thiserror::Error;
use validator::ValidateEmail;

const MIN_ID_LEN: usize = 1;
const MIN_NAME_LEN: usize = 2;
const MIN_PASSWORD_LEN: usize = 4;

/// One field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub detail: String,
}

/// Validation failure carrying the complete ordered set of violations.
#[derive(Error, Debug)]
#[error("request validation failed with {} violation(s)", .violations.len())]
pub struct SchemaError {
    pub violations: Vec<FieldViolation>,
}

/// Validate the create-user body: id, name, email and password are all
/// required strings; id ≥1 char, name ≥2 chars, password ≥4 chars, email
/// must be syntactically valid.
pub fn parse_create_user(body: &Value) -> Result<NewUser, SchemaError> {
    let mut violations = Vec::new();

    let id = required_string(body, "id", &mut violations)
        .and_then(|s| min_len(s, "id", MIN_ID_LEN, &mut violations));
    let name = required_string(body, "name", &mut violations)
        .and_then(|s| min_len(s, "name", MIN_NAME_LEN, &mut violations));
    let email = required_string(body, "email", &mut violations)
        .and_then(|s| email_format(s, "email", &mut violations));
    let password = required_string(body, "password", &mut violations)
        .and_then(|s| min_len(s, "password", MIN_PASSWORD_LEN, &mut violations));

    match (id, name, email, password) {
        (Some(id), Some(name), Some(email), Some(password)) => Ok(NewUser {
            id,
            name,
            email,
            password,
        }),
        _ => Err(SchemaError { violations }),
    }
}

/// Validate the edit-user body: every field is optional, but a provided
/// field must satisfy the same rule as in create. Absent fields are left
/// out of the patch.
pub fn parse_edit_user(body: &Value) -> Result<UserPatch, SchemaError> {
    let mut violations = Vec::new();

    let id = provided_string(body, "id", &mut violations)
        .map(|s| min_len(s, "id", MIN_ID_LEN, &mut violations));
    let name = provided_string(body, "name", &mut violations)
        .map(|s| min_len(s, "name", MIN_NAME_LEN, &mut violations));
    let email = provided_string(body, "email", &mut violations)
        .map(|s| email_format(s, "email", &mut violations));
    let password = provided_string(body, "password", &mut violations)
        .map(|s| min_len(s, "password", MIN_PASSWORD_LEN, &mut violations));

    if violations.is_empty() {
        Ok(UserPatch {
            id: id.flatten(),
            name: name.flatten(),
            email: email.flatten(),
            password: password.flatten(),
        })
    } else {
        Err(SchemaError { violations })
    }
}

// --- per-field rules ---

fn required_string(
    body: &Value,
    field: &'static str,
    out: &mut Vec<FieldViolation>,
) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => {
            out.push(FieldViolation {
                field,
                detail: format!("'{field}' is required"),
            });
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            out.push(FieldViolation {
                field,
                detail: format!("'{field}' must be a string"),
            });
            None
        }
    }
}

/// Like `required_string`, but an absent field is not a violation.
fn provided_string(
    body: &Value,
    field: &'static str,
    out: &mut Vec<FieldViolation>,
) -> Option<String> {
    match body.get(field) {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            out.push(FieldViolation {
                field,
                detail: format!("'{field}' must be a string"),
            });
            None
        }
    }
}

fn min_len(
    value: String,
    field: &'static str,
    min: usize,
    out: &mut Vec<FieldViolation>,
) -> Option<String> {
    if value.chars().count() < min {
        let unit = if min == 1 { "character" } else { "characters" };
        out.push(FieldViolation {
            field,
            detail: format!("'{field}' must be at least {min} {unit} long"),
        });
        return None;
    }
    Some(value)
}

fn email_format(
    value: String,
    field: &'static str,
    out: &mut Vec<FieldViolation>,
) -> Option<String> {
    if !value.validate_email() {
        out.push(FieldViolation {
            field,
            detail: format!("'{field}' must be a valid email address"),
        });
        return None;
    }
    Some(value)
}
