//! Application state.

use std::sync::Arc;

use user_store::UserStore;

use crate::services::UserService;

/// Shared application state.
pub struct AppState<S: UserStore> {
    /// User service.
    pub users: UserService<S>,
}

impl<S: UserStore> AppState<S> {
    /// Creates new application state.
    pub fn new(store: S) -> Self {
        Self {
            users: UserService::new(store),
        }
    }
}

/// Type alias for shared state.
pub type SharedState<S> = Arc<AppState<S>>;

/// Creates shared state around a store.
pub fn create_shared_state<S: UserStore>(store: S) -> SharedState<S> {
    Arc::new(AppState::new(store))
}
