//! Ledger service - composes store reads into the views the API returns.
//!
//! This service handles:
//! - Embedding a user's transactions in the user view
//! - Grouping every transaction under its user for the user listing
//! - Aggregating totals and chart series for the admin dashboard

use std::collections::HashMap;

use crate::{
    error::AppError,
    models::{
        summary::{ChartData, SummaryResponse, UserSummary},
        transaction::{Transaction, UserTransaction},
        user::UserResponse,
    },
    store::Store,
};

/// Fetch one user with its transactions in creation order.
///
/// # Errors
///
/// - `UserNotFound`: No user has this id
/// - `Database`: Database error occurred
pub async fn user_with_transactions(
    store: &dyn Store,
    user_id: i64,
) -> Result<UserResponse, AppError> {
    let user = store.get_user(user_id).await?;
    // get_user already established that the user exists
    let transactions = store.transactions_by_user(user_id).await?;

    Ok(UserResponse::new(
        user,
        transactions.into_iter().map(UserTransaction::from).collect(),
    ))
}

/// Fetch every user with its transactions embedded.
///
/// Issues two queries (users, then all transactions) and groups in memory
/// rather than one query per user. Users come back ordered by id.
pub async fn users_with_transactions(store: &dyn Store) -> Result<Vec<UserResponse>, AppError> {
    let users = store.list_users().await?;
    let mut by_user = group_by_user(store.list_transactions().await?);

    Ok(users
        .into_iter()
        .map(|user| {
            let transactions = by_user.remove(&user.id).unwrap_or_default();
            UserResponse::new(
                user,
                transactions.into_iter().map(UserTransaction::from).collect(),
            )
        })
        .collect())
}

/// Build the admin dashboard aggregate.
///
/// Chart points follow the same order as the user listing: by user, then by
/// creation within each user.
pub async fn summary(store: &dyn Store) -> Result<SummaryResponse, AppError> {
    let users = users_with_transactions(store).await?;

    let mut chart = ChartData::default();
    let mut summaries = Vec::with_capacity(users.len());

    for user in users {
        for transaction in &user.transactions {
            chart.dates.push(transaction.timestamp.to_rfc3339());
            chart.amounts.push(transaction.amount);
        }

        summaries.push(UserSummary {
            id: user.id,
            username: user.username,
            transaction_count: user.transactions.len(),
        });
    }

    Ok(SummaryResponse {
        users: summaries,
        total_transactions: chart.amounts.len(),
        total_amount: chart.amounts.iter().sum(),
        transaction_data: chart,
    })
}

fn group_by_user(transactions: Vec<Transaction>) -> HashMap<i64, Vec<Transaction>> {
    let mut grouped: HashMap<i64, Vec<Transaction>> = HashMap::new();
    for transaction in transactions {
        grouped
            .entry(transaction.user_id)
            .or_default()
            .push(transaction);
    }
    grouped
}
