//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Calls the store or a service
//! 3. Returns HTTP response (JSON, status code)

/// Admin dashboard data
pub mod admin;
/// Service health
pub mod health;
/// Transaction endpoints
pub mod transactions;
/// User endpoints
pub mod users;
