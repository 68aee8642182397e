//! User data models and API request/response types.
//!
//! This module defines:
//! - `User`: Database entity representing a user
//! - `CreateUserRequest`: Request body for creating users
//! - `UserIdResponse` and `UserResponse`: Response bodies returned to clients

use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    extract::Validate,
    models::{MAX_TEXT_LEN, transaction::UserTransaction},
};

/// Represents a user record from the database.
///
/// Maps to the `users` table. Usernames are unique (enforced by a UNIQUE
/// constraint) and neither column changes after insertion.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// Request body for creating a new user.
///
/// # JSON Example
///
/// ```json
/// { "username": "alice" }
/// ```
///
/// # Validation
///
/// - `username`: Required, not blank, at most 255 characters once
///   surrounding whitespace is trimmed. Uniqueness is checked by the store.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
}

impl CreateUserRequest {
    /// The username as stored, without surrounding whitespace.
    pub fn username(&self) -> &str {
        self.username.trim()
    }
}

impl Validate for CreateUserRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.username().is_empty() {
            return Err(AppError::Validation(
                "username must not be empty".to_string(),
            ));
        }

        if self.username().chars().count() > MAX_TEXT_LEN {
            return Err(AppError::Validation(format!(
                "username must be at most {MAX_TEXT_LEN} characters"
            )));
        }

        Ok(())
    }
}

/// Response body for `POST /users/`.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserIdResponse {
    pub id: i64,
}

/// A user together with the transactions recorded for it.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "username": "alice",
///   "transactions": [
///     { "id": 1, "type": "credit", "amount": 100.0, "timestamp": "2024-09-12T21:43:39Z" }
///   ]
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub transactions: Vec<UserTransaction>,
}

impl UserResponse {
    pub fn new(user: User, transactions: Vec<UserTransaction>) -> Self {
        Self {
            id: user.id,
            username: user.username,
            transactions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_regular_username() {
        let request = CreateUserRequest {
            username: "alice".to_string(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn rejects_blank_username() {
        let request = CreateUserRequest {
            username: "   ".to_string(),
        };

        assert!(matches!(request.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn padding_does_not_count_towards_length() {
        let request = CreateUserRequest {
            username: format!("  {}  ", "a".repeat(MAX_TEXT_LEN)),
        };

        assert!(request.validate().is_ok());
        assert_eq!(request.username().len(), MAX_TEXT_LEN);
    }

    #[test]
    fn rejects_overlong_username() {
        let request = CreateUserRequest {
            username: "a".repeat(MAX_TEXT_LEN + 1),
        };

        assert!(matches!(request.validate(), Err(AppError::Validation(_))));
    }
}
