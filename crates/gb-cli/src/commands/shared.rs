use gb_core::errors::CoreError;
use gb_db::error::DatabaseError;
use serde::Serialize;

/// Turn a by-id store error into a user-facing message.
pub fn lookup_error(error: DatabaseError, entity: &str, id: i64) -> anyhow::Error {
    match error {
        DatabaseError::NoResult => CoreError::not_found(entity, id).into(),
        other => anyhow::Error::new(other).context(format!("{entity} {id}")),
    }
}

/// Acknowledgement printed after a delete.
#[derive(Debug, Serialize)]
pub struct Removed {
    pub entity: &'static str,
    pub id: i64,
    pub removed: bool,
}

impl Removed {
    pub const fn new(entity: &'static str, id: i64) -> Self {
        Self {
            entity,
            id,
            removed: true,
        }
    }
}
