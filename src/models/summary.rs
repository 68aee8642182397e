//! Aggregate view over every user, served to the admin dashboard chart.

use serde::{Deserialize, Serialize};

/// One row of the dashboard's user table.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub transaction_count: usize,
}

/// Series plotted by `static/js/chart.js`.
///
/// `dates[i]` is the RFC 3339 timestamp of the transaction whose amount is
/// `amounts[i]`; both vectors always have the same length.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub dates: Vec<String>,
    pub amounts: Vec<f64>,
}

/// Response body for `GET /admin/summary`.
///
/// # JSON Example
///
/// ```json
/// {
///   "users": [{ "id": 1, "username": "alice", "transaction_count": 2 }],
///   "total_transactions": 2,
///   "total_amount": 150.0,
///   "transaction_data": {
///     "dates": ["2024-09-12T21:43:39Z", "2024-09-13T08:00:00Z"],
///     "amounts": [100.0, 50.0]
///   }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub users: Vec<UserSummary>,
    pub total_transactions: usize,
    pub total_amount: f64,
    pub transaction_data: ChartData,
}
