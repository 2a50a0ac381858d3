//! User Server
//!
//! REST API for managing user records. Requests are routed to the
//! [`services::UserService`], which works against any [`UserStore`].

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use user_store::UserStore;

use crate::state::{SharedState, create_shared_state};

/// Creates the application router with all routes configured.
pub fn create_app<S: UserStore + 'static>(state: SharedState<S>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::create_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Creates the application state around the given store.
pub fn create_state<S: UserStore>(store: S) -> SharedState<S> {
    create_shared_state(store)
}

/// Initializes tracing with the given log level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
