//! In-memory user store implementation.

use std::{
    collections::BTreeMap,
    sync::atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use entities::User;
use tokio::sync::RwLock;

use crate::{UserStore, UserStoreResult};

/// In-memory user store.
///
/// Users are kept ordered by id. Ids come from a monotonically increasing
/// sequence starting at 1 and are never reused after a delete.
#[derive(Debug)]
pub struct MemoryUserStore {
    users: RwLock<BTreeMap<i64, User>>,
    next_id: AtomicI64,
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self {
            users: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl MemoryUserStore {
    /// Creates a new in-memory user store.
    pub fn new() -> Self {
        Self::default()
    }

    fn assign_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_all(&self) -> UserStoreResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> UserStoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> UserStoreResult<bool> {
        let users = self.users.read().await;
        Ok(users.contains_key(&id))
    }

    async fn save(&self, user: User) -> UserStoreResult<User> {
        let mut users = self.users.write().await;
        let user = if user.has_assigned_id() && users.contains_key(&user.id) {
            user
        } else {
            user.with_id(self.assign_id())
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete_by_id(&self, id: i64) -> UserStoreResult<()> {
        let mut users = self.users.write().await;
        users.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_user_crud() {
        let store = MemoryUserStore::new();

        // Create
        let created = store
            .save(User::new(0, "John Doe", "john@example.com"))
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        // Get
        let fetched = store.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert!(store.exists_by_id(created.id).await.unwrap());

        // Update in place
        let renamed = User::new(created.id, "Johnny", "johnny@example.com");
        let saved = store.save(renamed.clone()).await.unwrap();
        assert_eq!(saved, renamed);
        assert_eq!(store.find_all().await.unwrap(), vec![renamed]);

        // Delete
        store.delete_by_id(created.id).await.unwrap();
        assert!(store.find_by_id(created.id).await.unwrap().is_none());
        assert!(!store.exists_by_id(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_ids_are_assigned_in_order_and_not_reused() {
        let store = MemoryUserStore::new();

        let first = store.save(User::new(0, "A", "a@example.com")).await.unwrap();
        let second = store.save(User::new(0, "B", "b@example.com")).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        store.delete_by_id(second.id).await.unwrap();
        let third = store.save(User::new(0, "C", "c@example.com")).await.unwrap();
        assert_eq!(third.id, 3);

        let ids: Vec<i64> = store.find_all().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_save_with_unknown_id_inserts_with_assigned_id() {
        let store = MemoryUserStore::new();

        let saved = store
            .save(User::new(999, "Ghost", "ghost@example.com"))
            .await
            .unwrap();

        assert_eq!(saved.id, 1);
        assert!(store.find_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        let store = MemoryUserStore::new();
        store.delete_by_id(42).await.unwrap();
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
