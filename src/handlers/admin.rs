//! Admin dashboard data.
//!
//! - GET /admin/summary - Per-user counts, totals, and the chart series

use axum::{Json, extract::State};

use crate::{
    error::AppError, models::summary::SummaryResponse, services::ledger_service,
    store::SharedStore,
};

/// Aggregate view over all users and transactions.
///
/// `transaction_data` is the payload `static/js/chart.js` plots: parallel
/// `dates` and `amounts` arrays of equal length.
pub async fn summary(State(store): State<SharedStore>) -> Result<Json<SummaryResponse>, AppError> {
    let summary = ledger_service::summary(store.as_ref()).await?;
    tracing::debug!(
        users = summary.users.len(),
        transactions = summary.total_transactions,
        "built admin summary"
    );

    Ok(Json(summary))
}
