//! Business logic services.
//!
//! Services sit between HTTP handlers and the store. They combine store calls
//! into the shapes the API returns.

pub mod ledger_service;
