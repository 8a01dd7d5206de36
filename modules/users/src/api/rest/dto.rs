use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::contract::model::User;

/// Public view of a user. The password is deliberately absent: this is the
/// only user shape that crosses the API boundary.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Response body for a successful create.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserResponse {
    pub message: String,
    pub user: UserDto,
}

/// Response body for a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteUserResponse {
    pub message: String,
}

/// Query parameters for listing users.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ListUsersQuery {
    pub q: Option<String>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_user() -> User {
        User {
            id: "u1".to_string(),
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            password: "pass1".to_string(),
            created_at: chrono::Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn public_view_drops_the_password() {
        let dto = UserDto::from(sample_user());
        let v = serde_json::to_value(&dto).expect("serialize");

        assert_eq!(v["id"], "u1");
        assert_eq!(v["name"], "Ann");
        assert_eq!(v["email"], "ann@x.com");
        assert!(v.get("createdAt").is_some(), "camelCase timestamp");
        assert!(v.get("password").is_none());
        assert_eq!(v.as_object().unwrap().len(), 4);
    }

    #[test]
    fn create_response_envelope_shape() {
        let resp = CreateUserResponse {
            message: "User created successfully".to_string(),
            user: UserDto::from(sample_user()),
        };
        let v = serde_json::to_value(&resp).expect("serialize");
        assert_eq!(v["message"], "User created successfully");
        assert_eq!(v["user"]["id"], "u1");
    }

    #[test]
    fn list_query_deserializes_with_and_without_q() {
        let q: ListUsersQuery = serde_json::from_str(r#"{"q":"ann"}"#).unwrap();
        assert_eq!(q.q.as_deref(), Some("ann"));

        let q: ListUsersQuery = serde_json::from_str("{}").unwrap();
        assert!(q.q.is_none());
    }
}
