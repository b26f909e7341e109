//! Cross-cutting error types for the gradebook.
//!
//! Store-specific errors (`DatabaseError`) live in `gb-db`; configuration
//! errors live in `gb-config`. The CLI converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any gradebook crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Entity lookup by id returned no row.
    #[error("{entity_type} {id} not found")]
    NotFound { entity_type: String, id: i64 },
}

impl CoreError {
    #[must_use]
    pub fn not_found(entity_type: &str, id: i64) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id,
        }
    }
}
