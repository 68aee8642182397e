//! Data access layer.
//!
//! Handlers and services talk to storage only through the [`Store`] trait, so
//! the PostgreSQL backend and the in-memory backend are interchangeable.
//! Both keep the same guarantees:
//! - usernames are unique; a duplicate insert fails with `UsernameTaken`
//! - a transaction can only be recorded for an existing user (`UserNotFound`)
//! - rows are never updated or deleted, and lists come back in creation order

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::{transaction::Transaction, user::User},
};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Store handle shared by every handler through axum `State`.
pub type SharedStore = Arc<dyn Store>;

#[async_trait]
pub trait Store: Send + Sync {
    /// Insert a user with the given username.
    ///
    /// Returns [`AppError::UsernameTaken`] if the username is already in use.
    async fn create_user(&self, username: &str) -> Result<User, AppError>;

    /// Fetch a user by id, or [`AppError::UserNotFound`].
    async fn get_user(&self, user_id: i64) -> Result<User, AppError>;

    /// All users, ordered by id.
    async fn list_users(&self) -> Result<Vec<User>, AppError>;

    /// Record a transaction for `user_id`, stamped with the current time.
    ///
    /// Returns [`AppError::UserNotFound`] without inserting anything if the
    /// user does not exist.
    async fn create_transaction(
        &self,
        user_id: i64,
        kind: &str,
        amount: f64,
    ) -> Result<Transaction, AppError>;

    /// Transactions of one user in creation order, or
    /// [`AppError::UserNotFound`] if the user does not exist.
    async fn list_transactions_for_user(&self, user_id: i64) -> Result<Vec<Transaction>, AppError> {
        self.get_user(user_id).await?;
        self.transactions_by_user(user_id).await
    }

    /// Transactions of one user in creation order.
    ///
    /// Does not check that the user exists; an unknown id yields an empty list.
    async fn transactions_by_user(&self, user_id: i64) -> Result<Vec<Transaction>, AppError>;

    /// Every transaction, ordered by id.
    async fn list_transactions(&self) -> Result<Vec<Transaction>, AppError>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<(), AppError>;

    /// Short backend name reported by the health check.
    fn backend(&self) -> &'static str;
}
