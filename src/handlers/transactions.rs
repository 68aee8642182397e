//! Transaction HTTP handlers.
//!
//! This module implements transaction-related API endpoints:
//! - POST /transactions/ - Record a transaction for a user
//!
//! A user's transactions are read back through `GET /users/{user_id}`.

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    error::AppError,
    extract::ValidatedJson,
    models::transaction::{CreateTransactionRequest, Transaction},
    store::SharedStore,
};

/// Record a transaction.
///
/// # Request Body
///
/// ```json
/// {
///   "user_id": 1,
///   "type": "credit",
///   "amount": 100.0
/// }
/// ```
///
/// # Response (201)
///
/// ```json
/// {
///   "id": 1,
///   "user_id": 1,
///   "type": "credit",
///   "amount": 100.0,
///   "timestamp": "2024-09-12T21:43:39.752782Z"
/// }
/// ```
///
/// # Errors
///
/// - **404**: `user_id` does not reference an existing user (nothing is inserted)
/// - **422**: Missing or mistyped field, blank type, non-finite amount
pub async fn create_transaction(
    State(store): State<SharedStore>,
    ValidatedJson(request): ValidatedJson<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<Transaction>), AppError> {
    tracing::debug!(
        user_id = request.user_id,
        kind = %request.kind,
        amount = request.amount,
        "adding transaction"
    );

    let transaction = store
        .create_transaction(request.user_id, &request.kind, request.amount)
        .await
        .inspect_err(|err| {
            if matches!(err, AppError::UserNotFound) {
                tracing::warn!(user_id = request.user_id, "transaction for unknown user");
            }
        })?;

    tracing::info!(transaction_id = transaction.id, "transaction added");

    Ok((StatusCode::CREATED, Json(transaction)))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::app::test_support::{send, test_router};

    #[tokio::test]
    async fn records_transaction_for_existing_user() {
        let app = test_router();
        send(app.clone(), Method::POST, "/users/", Some(json!({"username": "alice"}))).await;

        let (status, body) = send(
            app,
            Method::POST,
            "/transactions/",
            Some(json!({"user_id": 1, "type": "credit", "amount": 100.0})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 1);
        assert_eq!(body["user_id"], 1);
        assert_eq!(body["type"], "credit");
        assert_eq!(body["amount"], 100.0);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn unknown_user_is_not_found_and_nothing_is_inserted() {
        let app = test_router();

        let (status, body) = send(
            app.clone(),
            Method::POST,
            "/transactions/",
            Some(json!({"user_id": 5, "type": "debit", "amount": 1.0})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "user_not_found");

        let (_, summary) = send(app, Method::GET, "/admin/summary", None).await;
        assert_eq!(summary["total_transactions"], 0);
    }

    #[tokio::test]
    async fn missing_amount_is_a_validation_error() {
        let app = test_router();

        let (status, body) = send(
            app,
            Method::POST,
            "/transactions",
            Some(json!({"user_id": 1, "type": "credit"})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "validation_error");
    }

    #[tokio::test]
    async fn mistyped_amount_is_a_validation_error() {
        let app = test_router();

        let (status, _) = send(
            app,
            Method::POST,
            "/transactions/",
            Some(json!({"user_id": 1, "type": "credit", "amount": "lots"})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
