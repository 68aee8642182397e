//! In-memory store used when no `DATABASE_URL` is configured, and by the tests.
//!
//! Data lives only as long as the process. Ids are assigned sequentially
//! starting at 1, mirroring the BIGSERIAL columns of the PostgreSQL schema.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    error::AppError,
    models::{transaction::Transaction, user::User},
    store::Store,
};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    transactions: Vec<Transaction>,
}

impl Tables {
    fn has_user(&self, user_id: i64) -> bool {
        self.users.iter().any(|user| user.id == user_id)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, username: &str) -> Result<User, AppError> {
        // Uniqueness is checked and the row inserted under one write lock.
        let mut tables = self.tables.write().await;

        if tables.users.iter().any(|user| user.username == username) {
            return Err(AppError::UsernameTaken);
        }

        let user = User {
            id: tables.users.len() as i64 + 1,
            username: username.to_string(),
        };
        tables.users.push(user.clone());

        Ok(user)
    }

    async fn get_user(&self, user_id: i64) -> Result<User, AppError> {
        self.tables
            .read()
            .await
            .users
            .iter()
            .find(|user| user.id == user_id)
            .cloned()
            .ok_or(AppError::UserNotFound)
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.tables.read().await.users.clone())
    }

    async fn create_transaction(
        &self,
        user_id: i64,
        kind: &str,
        amount: f64,
    ) -> Result<Transaction, AppError> {
        let mut tables = self.tables.write().await;

        if !tables.has_user(user_id) {
            return Err(AppError::UserNotFound);
        }

        let transaction = Transaction {
            id: tables.transactions.len() as i64 + 1,
            user_id,
            kind: kind.to_string(),
            amount,
            timestamp: Utc::now(),
        };
        tables.transactions.push(transaction.clone());

        Ok(transaction)
    }

    async fn transactions_by_user(&self, user_id: i64) -> Result<Vec<Transaction>, AppError> {
        Ok(self
            .tables
            .read()
            .await
            .transactions
            .iter()
            .filter(|transaction| transaction.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>, AppError> {
        Ok(self.tables.read().await.transactions.clone())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn created_user_is_retrievable_by_id() {
        let store = MemoryStore::new();

        let user = store.create_user("alice").await.unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(store.get_user(user.id).await.unwrap(), user);
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let store = MemoryStore::new();

        store.create_user("alice").await.unwrap();

        assert!(matches!(
            store.create_user("alice").await,
            Err(AppError::UsernameTaken)
        ));
        assert_eq!(store.list_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn concurrent_duplicate_creation_has_one_winner() {
        let store = Arc::new(MemoryStore::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.create_user("bob").await })
            })
            .collect();

        let mut created = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => created += 1,
                Err(AppError::UsernameTaken) => conflicts += 1,
                Err(err) => panic!("unexpected error: {err}"),
            }
        }

        assert_eq!(created, 1);
        assert_eq!(conflicts, 7);
    }

    #[tokio::test]
    async fn unknown_user_lookup_fails() {
        let store = MemoryStore::new();

        assert!(matches!(store.get_user(42).await, Err(AppError::UserNotFound)));
        assert!(matches!(
            store.list_transactions_for_user(42).await,
            Err(AppError::UserNotFound)
        ));
    }

    #[tokio::test]
    async fn unchecked_listing_of_unknown_user_is_empty() {
        let store = MemoryStore::new();

        assert!(store.transactions_by_user(42).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn transaction_for_unknown_user_is_not_inserted() {
        let store = MemoryStore::new();

        assert!(matches!(
            store.create_transaction(7, "credit", 10.0).await,
            Err(AppError::UserNotFound)
        ));
        assert!(store.list_transactions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn lists_only_the_users_transactions_in_creation_order() {
        let store = MemoryStore::new();
        let alice = store.create_user("alice").await.unwrap();
        let bob = store.create_user("bob").await.unwrap();

        let first = store.create_transaction(alice.id, "credit", 100.0).await.unwrap();
        store.create_transaction(bob.id, "debit", 5.0).await.unwrap();
        let second = store.create_transaction(alice.id, "debit", 40.0).await.unwrap();

        let transactions = store.list_transactions_for_user(alice.id).await.unwrap();

        assert_eq!(transactions, vec![first, second]);
    }
}
