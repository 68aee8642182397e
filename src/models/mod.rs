//! Data models representing database entities and API payloads.

/// Longest username or transaction type accepted (matches the VARCHAR(255) columns)
pub const MAX_TEXT_LEN: usize = 255;

/// Dashboard aggregate model
pub mod summary;
/// Transaction model
pub mod transaction;
/// User model
pub mod user;
