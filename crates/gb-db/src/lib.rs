//! # gb-db
//!
//! libSQL persistence and the analytical query catalog for the gradebook.
//!
//! - [`GradeDb`] owns the store handle and hands out one connection per call.
//! - [`service::GradeService`] hosts the CRUD repositories ([`repos`]), the
//!   12 read-only catalog queries ([`queries`]) and the fixture seeder ([`seed`]).
//! - [`sql::Select`] spells out every join, filter and grouping explicitly.
//!
//! There is no process-wide connection: every operation acquires its own
//! `libsql::Connection` and drops it on return, success or failure.

pub mod error;
pub mod helpers;
pub mod queries;
pub mod repos;
mod schema;
pub mod seed;
pub mod service;
pub mod sql;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Handle to the gradebook store.
///
/// Holds the libSQL database, not a connection. `connect()` may be called
/// from any number of concurrent operations.
pub struct GradeDb {
    db: libsql::Database,
    path: String,
}

impl GradeDb {
    /// Open (or create) a file-backed database and bootstrap the schema.
    ///
    /// In-memory databases are rejected: each connection to `:memory:` is a
    /// separate empty database, which breaks per-call connections.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the path is `:memory:`, the database cannot
    /// be opened, or the schema bootstrap fails.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        if path.is_empty() || path == ":memory:" {
            return Err(DatabaseError::InvalidState(format!(
                "unsupported database path '{path}': a file-backed store is required"
            )));
        }

        let db = Builder::new_local(path).build().await?;
        let grade_db = Self {
            db,
            path: path.to_string(),
        };
        grade_db.bootstrap_schema().await?;
        Ok(grade_db)
    }

    /// Acquire a fresh connection with foreign keys enforced.
    ///
    /// The connection is released when the returned value is dropped.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the store is unreachable.
    pub async fn connect(&self) -> Result<libsql::Connection, DatabaseError> {
        let conn = self.db.connect()?;
        // Must be set per connection in SQLite.
        conn.execute("PRAGMA foreign_keys = ON", ()).await?;
        Ok(conn)
    }

    /// Path the store was opened from.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}
