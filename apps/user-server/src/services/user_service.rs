//! User service.
//!
//! Thin layer over a [`UserStore`] that turns missing records into
//! [`UserServiceError::NotFound`] and implements merge-on-update.

use entities::{NewUser, User, UserUpdate};
use user_store::{UserStore, UserStoreError};

/// Errors returned by [`UserService`].
#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
    /// No user has the requested id.
    #[error("User not found with id: {0}")]
    NotFound(i64),

    /// The store failed.
    #[error(transparent)]
    Store(#[from] UserStoreError),
}

/// Result type alias for user service operations.
pub type UserServiceResult<T> = Result<T, UserServiceError>;

/// User management operations over a store.
pub struct UserService<S: UserStore> {
    store: S,
}

impl<S: UserStore> UserService<S> {
    /// Creates a new user service.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Lists all users in store order.
    pub async fn list(&self) -> UserServiceResult<Vec<User>> {
        let users = self.store.find_all().await?;
        tracing::debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    /// Gets a user by id.
    pub async fn get_by_id(&self, id: i64) -> UserServiceResult<User> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(UserServiceError::NotFound(id))
    }

    /// Creates a user. The store assigns the id.
    pub async fn create(&self, new_user: NewUser) -> UserServiceResult<User> {
        let user = self.store.save(new_user.into_user()).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Replaces the name and email of an existing user.
    pub async fn update(&self, id: i64, update: UserUpdate) -> UserServiceResult<User> {
        let existing = self.get_by_id(id).await?;
        let user = self.store.save(existing.merged_with(&update)).await?;
        tracing::info!(user_id = user.id, "User updated");
        Ok(user)
    }

    /// Deletes an existing user.
    pub async fn delete(&self, id: i64) -> UserServiceResult<()> {
        if !self.store.exists_by_id(id).await? {
            return Err(UserServiceError::NotFound(id));
        }

        self.store.delete_by_id(id).await?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashSet,
        sync::atomic::{AtomicUsize, Ordering},
    };

    use async_trait::async_trait;
    use user_store::{MemoryUserStore, UserStoreResult};

    use super::*;

    /// Memory store that counts mutating calls.
    #[derive(Default)]
    struct RecordingStore {
        inner: MemoryUserStore,
        saves: AtomicUsize,
        deletes: AtomicUsize,
    }

    #[async_trait]
    impl UserStore for RecordingStore {
        async fn find_all(&self) -> UserStoreResult<Vec<User>> {
            self.inner.find_all().await
        }

        async fn find_by_id(&self, id: i64) -> UserStoreResult<Option<User>> {
            self.inner.find_by_id(id).await
        }

        async fn exists_by_id(&self, id: i64) -> UserStoreResult<bool> {
            self.inner.exists_by_id(id).await
        }

        async fn save(&self, user: User) -> UserStoreResult<User> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            self.inner.save(user).await
        }

        async fn delete_by_id(&self, id: i64) -> UserStoreResult<()> {
            self.deletes.fetch_add(1, Ordering::SeqCst);
            self.inner.delete_by_id(id).await
        }
    }

    fn service() -> UserService<MemoryUserStore> {
        UserService::new(MemoryUserStore::new())
    }

    async fn seed<S: UserStore>(service: &UserService<S>) -> (User, User) {
        let john = service
            .create(NewUser::new("John Doe", "john@example.com"))
            .await
            .unwrap();
        let jane = service
            .create(NewUser::new("Jane Smith", "jane@example.com"))
            .await
            .unwrap();
        (john, jane)
    }

    #[tokio::test]
    async fn test_list_returns_all_users() {
        let service = service();
        let (john, jane) = seed(&service).await;

        let users = service.list().await.unwrap();

        assert_eq!(users, vec![john, jane]);
    }

    #[tokio::test]
    async fn test_list_on_empty_store() {
        assert!(service().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id_returns_created_user() {
        let service = service();

        let created = service
            .create(NewUser::new("New User", "new@example.com"))
            .await
            .unwrap();
        let fetched = service.get_by_id(created.id).await.unwrap();

        assert!(created.has_assigned_id());
        assert_eq!(fetched, User::new(created.id, "New User", "new@example.com"));
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let err = service().get_by_id(999).await.unwrap_err();

        assert!(matches!(err, UserServiceError::NotFound(999)));
        assert_eq!(err.to_string(), "User not found with id: 999");
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_id() {
        let service = service();
        let (john, _) = seed(&service).await;
        let update = UserUpdate::new("Updated Name", "updated@example.com");

        let updated = service.update(john.id, update.clone()).await.unwrap();
        assert_eq!(updated, User::new(john.id, "Updated Name", "updated@example.com"));
        assert_eq!(service.get_by_id(john.id).await.unwrap(), updated);

        // Applying the same update again yields the same state.
        let again = service.update(john.id, update).await.unwrap();
        assert_eq!(again, updated);
        assert_eq!(service.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_not_found_does_not_save() {
        let service = UserService::new(RecordingStore::default());

        let err = service
            .update(999, UserUpdate::new("Updated Name", "updated@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, UserServiceError::NotFound(999)));
        assert_eq!(service.store.saves.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_delete_removes_user() {
        let service = service();
        let (john, jane) = seed(&service).await;

        service.delete(john.id).await.unwrap();

        assert!(matches!(
            service.get_by_id(john.id).await,
            Err(UserServiceError::NotFound(_))
        ));
        assert_eq!(service.list().await.unwrap(), vec![jane]);
    }

    #[tokio::test]
    async fn test_delete_twice_fails() {
        let service = service();
        let (john, _) = seed(&service).await;

        service.delete(john.id).await.unwrap();
        let err = service.delete(john.id).await.unwrap_err();

        assert!(matches!(err, UserServiceError::NotFound(id) if id == john.id));
    }

    #[tokio::test]
    async fn test_delete_not_found_does_not_delete() {
        let service = UserService::new(RecordingStore::default());

        let err = service.delete(999).await.unwrap_err();

        assert_eq!(err.to_string(), "User not found with id: 999");
        assert_eq!(service.store.deletes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_list_has_no_duplicates_after_mutations() {
        let service = service();
        let (john, jane) = seed(&service).await;
        let extra = service
            .create(NewUser::new("Extra", "extra@example.com"))
            .await
            .unwrap();

        service
            .update(jane.id, UserUpdate::new("Jane Doe", "jane.doe@example.com"))
            .await
            .unwrap();
        service.delete(john.id).await.unwrap();

        let users = service.list().await.unwrap();
        let ids: HashSet<i64> = users.iter().map(|u| u.id).collect();

        assert_eq!(users.len(), 2);
        assert_eq!(ids, HashSet::from([jane.id, extra.id]));
    }
}
