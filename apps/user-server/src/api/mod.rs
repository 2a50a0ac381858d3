//! API endpoints.

pub mod users;

use axum::{Router, routing::get};
use user_store::UserStore;

use crate::state::SharedState;

/// Creates the API router with all endpoints.
pub fn create_router<S: UserStore + 'static>() -> Router<SharedState<S>> {
    Router::new()
        // User endpoints
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        // Health check
        .route("/health", get(health_check))
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
