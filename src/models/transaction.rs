//! Transaction data models and API request/response types.
//!
//! This module defines:
//! - `Transaction`: Database entity representing a transaction
//! - `CreateTransactionRequest`: Request body for recording a transaction
//! - `UserTransaction`: The view embedded in a user, without `user_id`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, extract::Validate, models::MAX_TEXT_LEN};

/// Represents a transaction record from the database.
///
/// # Database Table
///
/// Maps to the `transactions` table. Each transaction:
/// - Belongs to exactly one user (`user_id` is a foreign key)
/// - Has a free-text type such as "credit" or "debit"
/// - Gets its timestamp from the database at insertion time
///
/// The struct is also the response body of `POST /transactions/`.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 7,
///   "user_id": 1,
///   "type": "credit",
///   "amount": 100.0,
///   "timestamp": "2024-09-12T21:43:39Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,

    pub user_id: i64,

    /// Transaction type, e.g. "credit" or "debit"
    ///
    /// No enumeration is enforced beyond request validation.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,

    /// Amount moved by the transaction
    ///
    /// The sign is not tied to `kind`; no balance is derived from it.
    pub amount: f64,

    pub timestamp: DateTime<Utc>,
}

/// Request to record a transaction for a user.
///
/// # JSON Example
///
/// ```json
/// {
///   "user_id": 1,
///   "type": "credit",
///   "amount": 100.0
/// }
/// ```
///
/// # Validation
///
/// - `type`: Required, not blank, at most 255 characters
/// - `amount`: Required, must be a finite number
/// - `user_id`: Must reference an existing user (checked by the store)
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    pub user_id: i64,

    #[serde(rename = "type")]
    pub kind: String,

    pub amount: f64,
}

impl Validate for CreateTransactionRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.kind.trim().is_empty() {
            return Err(AppError::Validation("type must not be empty".to_string()));
        }

        if self.kind.chars().count() > MAX_TEXT_LEN {
            return Err(AppError::Validation(format!(
                "type must be at most {MAX_TEXT_LEN} characters"
            )));
        }

        if !self.amount.is_finite() {
            return Err(AppError::Validation(
                "amount must be a finite number".to_string(),
            ));
        }

        Ok(())
    }
}

/// A transaction as embedded in a user response.
///
/// Same as [`Transaction`] minus `user_id`, which the enclosing user already
/// identifies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTransaction {
    pub id: i64,

    #[serde(rename = "type")]
    pub kind: String,

    pub amount: f64,

    pub timestamp: DateTime<Utc>,
}

impl From<Transaction> for UserTransaction {
    fn from(transaction: Transaction) -> Self {
        Self {
            id: transaction.id,
            kind: transaction.kind,
            amount: transaction.amount,
            timestamp: transaction.timestamp,
        }
    }
}
