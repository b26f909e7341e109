//! Database error types for gb-db.

use thiserror::Error;

/// Errors from database operations.
///
/// "No matching rows" in the query catalog is not an error; it surfaces as an
/// empty list or `None`. `NoResult` is only raised by CRUD lookups by id.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned malformed data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema bootstrap failed.
    #[error("Schema bootstrap failed: {0}")]
    Schema(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., unusable store path).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error (connectivity, constraint, I/O).
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
