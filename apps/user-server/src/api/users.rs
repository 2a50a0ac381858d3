//! User API endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use entities::{NewUser, User, UserUpdate};
use user_store::UserStore;

use crate::error::ServerResult;
use crate::state::SharedState;

/// Lists all users.
pub async fn list_users<S: UserStore>(
    State(state): State<SharedState<S>>,
) -> ServerResult<Json<Vec<User>>> {
    let users = state.users.list().await?;
    Ok(Json(users))
}

/// Gets a user by ID.
pub async fn get_user<S: UserStore>(
    State(state): State<SharedState<S>>,
    Path(id): Path<i64>,
) -> ServerResult<Json<User>> {
    let user = state.users.get_by_id(id).await?;
    Ok(Json(user))
}

/// Creates a user.
pub async fn create_user<S: UserStore>(
    State(state): State<SharedState<S>>,
    Json(request): Json<NewUser>,
) -> ServerResult<(StatusCode, Json<User>)> {
    let user = state.users.create(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Replaces a user's name and email.
pub async fn update_user<S: UserStore>(
    State(state): State<SharedState<S>>,
    Path(id): Path<i64>,
    Json(request): Json<UserUpdate>,
) -> ServerResult<Json<User>> {
    let user = state.users.update(id, request).await?;
    Ok(Json(user))
}

/// Deletes a user.
pub async fn delete_user<S: UserStore>(
    State(state): State<SharedState<S>>,
    Path(id): Path<i64>,
) -> ServerResult<StatusCode> {
    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
