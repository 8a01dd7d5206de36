use std::sync::Arc;

use crate::contract::model::{NewUser, User, UserPatch};
use crate::domain::error::DomainError;
use crate::domain::repo::UsersRepository;
use chrono::Utc;
use tracing::{debug, info, instrument};

/// Domain service with the business rules for user management.
/// Stateless across requests; depends only on the repository port.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn UsersRepository>,
}

impl Service {
    pub fn new(repo: Arc<dyn UsersRepository>) -> Self {
        Self { repo }
    }

    #[instrument(
        name = "users.service.create_user",
        skip(self, new_user),
        fields(user_id = %new_user.id, email = %new_user.email)
    )]
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, DomainError> {
        info!("Creating new user");

        // Uniqueness: id first, then email
        if self
            .repo
            .find_by_id(&new_user.id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .is_some()
        {
            return Err(DomainError::id_already_exists(new_user.id));
        }

        if self
            .repo
            .find_by_email(&new_user.email)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .is_some()
        {
            return Err(DomainError::email_already_exists(new_user.email));
        }

        let user = User {
            id: new_user.id,
            name: new_user.name,
            email: new_user.email,
            password: new_user.password,
            created_at: Utc::now(),
        };

        self.repo
            .insert(user.clone())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Successfully created user with id={}", user.id);
        Ok(user)
    }

    /// List users, optionally filtered by a case-insensitive substring match
    /// on name or email. An empty result is a valid success, never a failure.
    #[instrument(name = "users.service.get_users", skip(self))]
    pub async fn get_users(&self, query: Option<&str>) -> Result<Vec<User>, DomainError> {
        debug!("Listing users");

        let users = self
            .repo
            .search(query)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        debug!("Found {} users", users.len());
        Ok(users)
    }

    #[instrument(
        name = "users.service.edit_user",
        skip(self, patch),
        fields(user_id = %id_to_edit)
    )]
    pub async fn edit_user(
        &self,
        id_to_edit: &str,
        patch: UserPatch,
    ) -> Result<User, DomainError> {
        info!("Editing user");

        let mut current = self
            .repo
            .find_by_id(id_to_edit)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::user_not_found(id_to_edit))?;

        // Uniqueness for an id change: a collision with a *different* user
        if let Some(ref new_id) = patch.id {
            if new_id != &current.id
                && self
                    .repo
                    .find_by_id(new_id)
                    .await
                    .map_err(|e| DomainError::database(e.to_string()))?
                    .is_some()
            {
                return Err(DomainError::id_already_exists(new_id.clone()));
            }
        }

        // Uniqueness for an email change
        if let Some(ref new_email) = patch.email {
            let holder = self
                .repo
                .find_by_email(new_email)
                .await
                .map_err(|e| DomainError::database(e.to_string()))?;
            if matches!(holder, Some(ref u) if u.id != current.id) {
                return Err(DomainError::email_already_exists(new_email.clone()));
            }
        }

        // Apply the patch; omitted fields stay as they are, created_at never
        // changes.
        if let Some(id) = patch.id {
            current.id = id;
        }
        if let Some(name) = patch.name {
            current.name = name;
        }
        if let Some(email) = patch.email {
            current.email = email;
        }
        if let Some(password) = patch.password {
            current.password = password;
        }

        self.repo
            .update(id_to_edit, current.clone())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Successfully edited user");
        Ok(current)
    }

    #[instrument(name = "users.service.delete_user", skip(self), fields(user_id = %id))]
    pub async fn delete_user(&self, id: &str) -> Result<(), DomainError> {
        info!("Deleting user");

        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        // Deliberately not idempotent: deleting an absent id is a failure.
        if !deleted {
            return Err(DomainError::user_not_found(id));
        }

        info!("Successfully deleted user");
        Ok(())
    }
}
