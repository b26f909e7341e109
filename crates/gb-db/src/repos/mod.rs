//! Repository modules implementing CRUD operations for all gradebook entities.
//!
//! Each module adds methods to `GradeService` via `impl GradeService` blocks.
//! Writes are not validated beyond what the schema enforces (NOT NULL and
//! foreign keys).

pub mod grade;
pub mod group;
pub mod student;
pub mod subject;
pub mod teacher;

use crate::error::DatabaseError;

/// Map "zero rows affected" to `NoResult` for update/delete by id.
pub(crate) const fn expect_affected(affected: u64) -> Result<(), DatabaseError> {
    if affected == 0 {
        Err(DatabaseError::NoResult)
    } else {
        Ok(())
    }
}
