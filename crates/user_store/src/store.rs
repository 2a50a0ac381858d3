//! User store trait

use async_trait::async_trait;
use entities::User;

use crate::UserStoreResult;

/// Trait for user storage operations
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Lists all users in the store's natural order
    async fn find_all(&self) -> UserStoreResult<Vec<User>>;

    /// Gets a user by ID
    async fn find_by_id(&self, id: i64) -> UserStoreResult<Option<User>>;

    /// Returns true if a user with the given ID exists
    async fn exists_by_id(&self, id: i64) -> UserStoreResult<bool>;

    /// Persists a user.
    ///
    /// Inserts when the user has no assigned id or the id is not present,
    /// otherwise replaces the stored record. Returns the stored record with
    /// its id populated.
    async fn save(&self, user: User) -> UserStoreResult<User>;

    /// Deletes a user by ID. Deleting a missing id is a no-op.
    async fn delete_by_id(&self, id: i64) -> UserStoreResult<()>;
}
