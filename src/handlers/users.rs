//! User HTTP handlers.
//!
//! This module implements the user-related API endpoints:
//! - POST /users/ - Create new user
//! - GET /users/{user_id} - Get user with its transactions
//! - GET /users/ - List all users with their transactions

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::{
    error::AppError,
    extract::{ValidPath, ValidatedJson},
    models::user::{CreateUserRequest, UserIdResponse, UserResponse},
    services::ledger_service,
    store::SharedStore,
};

/// Create a new user.
///
/// # Request Body
///
/// ```json
/// { "username": "alice" }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: `{ "id": 1 }`
/// - **Error (409)**: Username already exists
/// - **Error (422)**: Missing or blank username
pub async fn create_user(
    State(store): State<SharedStore>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserIdResponse>), AppError> {
    let username = request.username();
    tracing::debug!(username, "creating user");

    let user = store.create_user(username).await.inspect_err(|err| {
        if matches!(err, AppError::UsernameTaken) {
            tracing::warn!(username, "username already taken");
        }
    })?;

    tracing::info!(user_id = user.id, "user created");

    Ok((StatusCode::CREATED, Json(UserIdResponse { id: user.id })))
}

/// Get a user and its transactions.
///
/// This is also the endpoint for listing one user's transactions; they are
/// embedded in creation order without `user_id`.
///
/// # Response
///
/// - **Success (200 OK)**: User with embedded transactions
/// - **Error (404)**: No user with this id
/// - **Error (422)**: `user_id` is not an integer
pub async fn get_user(
    State(store): State<SharedStore>,
    ValidPath(user_id): ValidPath<i64>,
) -> Result<Json<UserResponse>, AppError> {
    let user = ledger_service::user_with_transactions(store.as_ref(), user_id)
        .await
        .inspect_err(|err| {
            if matches!(err, AppError::UserNotFound) {
                tracing::warn!(user_id, "user not found");
            }
        })?;

    Ok(Json(user))
}

/// List all users, each with its transactions embedded.
///
/// No pagination; the whole table is returned ordered by id.
pub async fn list_users(
    State(store): State<SharedStore>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = ledger_service::users_with_transactions(store.as_ref()).await?;
    tracing::debug!(count = users.len(), "listed users");

    Ok(Json(users))
}
