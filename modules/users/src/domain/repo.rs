use crate::contract::model::User;
use async_trait::async_trait;

/// Port for the domain layer: the persistence operations the service needs.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Load a user by id.
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<User>>;
    /// Load a user by email (uniqueness checks).
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
    /// Insert a fully-formed user.
    ///
    /// Service computes the timestamp and runs invariant checks; repo persists.
    async fn insert(&self, u: User) -> anyhow::Result<()>;
    /// Replace the record currently stored under `id` with `u`.
    /// `u.id` may differ from `id` when the caller renames the user.
    async fn update(&self, id: &str, u: User) -> anyhow::Result<()>;
    /// Delete by id. Returns true if a row was deleted.
    async fn delete(&self, id: &str) -> anyhow::Result<bool>;
    /// List users. `query` filters by case-insensitive substring on name or
    /// email; `None` returns every user.
    async fn search(&self, query: Option<&str>) -> anyhow::Result<Vec<User>>;
}
