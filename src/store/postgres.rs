//! PostgreSQL store backed by a sqlx connection pool.
//!
//! Every operation is a single statement, so each call either fully applies
//! or leaves the tables untouched. Uniqueness and referential integrity are
//! enforced by the schema in `migrations/` and translated into `AppError`s.

use async_trait::async_trait;

use crate::{
    db::DbPool,
    error::AppError,
    models::{transaction::Transaction, user::User},
    store::Store,
};

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map constraint violations onto domain errors.
///
/// - UNIQUE on `users.username` → `UsernameTaken`
/// - FOREIGN KEY `transactions.user_id` → `UserNotFound`
fn classify(err: sqlx::Error) -> AppError {
    match err {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::UsernameTaken
        }
        sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
            AppError::UserNotFound
        }
        err => AppError::Database(err),
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_user(&self, username: &str) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username)
            VALUES ($1)
            RETURNING id, username
            "#,
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(classify)?;

        Ok(user)
    }

    async fn get_user(&self, user_id: i64) -> Result<User, AppError> {
        sqlx::query_as::<_, User>("SELECT id, username FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::UserNotFound)
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>("SELECT id, username FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    async fn create_transaction(
        &self,
        user_id: i64,
        kind: &str,
        amount: f64,
    ) -> Result<Transaction, AppError> {
        // A missing user surfaces as a foreign key violation, so the insert
        // itself is the existence check.
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (user_id, "type", amount)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, "type", amount, "timestamp"
            "#,
        )
        .bind(user_id)
        .bind(kind)
        .bind(amount)
        .fetch_one(&self.pool)
        .await
        .map_err(classify)?;

        Ok(transaction)
    }

    async fn transactions_by_user(&self, user_id: i64) -> Result<Vec<Transaction>, AppError> {
        let transactions = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, user_id, "type", amount, "timestamp"
            FROM transactions
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>, AppError> {
        let transactions = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, user_id, "type", amount, "timestamp"
            FROM transactions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
