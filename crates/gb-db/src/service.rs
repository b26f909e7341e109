//! Service layer hosting repositories, catalog queries and the seeder.
//!
//! `GradeService` wraps `GradeDb`. Repo methods are implemented as
//! `impl GradeService` blocks in [`crate::repos`], catalog queries in
//! [`crate::queries`], seeding in [`crate::seed`].

use crate::GradeDb;
use crate::error::DatabaseError;
use crate::sql::Select;

/// Entry point for every gradebook operation.
///
/// Carries no connection and no mutable state; each method acquires its own
/// connection for the duration of the call.
pub struct GradeService {
    db: GradeDb,
}

impl GradeService {
    /// Create a service over a local database file.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or the schema
    /// bootstrap fails.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = GradeDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `GradeDb`.
    #[must_use]
    pub const fn from_db(db: GradeDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &GradeDb {
        &self.db
    }

    /// Run a select on a fresh connection and map every row.
    ///
    /// The connection is dropped before returning on every path.
    pub(crate) async fn collect<T>(
        &self,
        op: &'static str,
        select: &Select,
        params: Vec<libsql::Value>,
        map: impl Fn(&libsql::Row) -> Result<T, DatabaseError>,
    ) -> Result<Vec<T>, DatabaseError> {
        let sql = select.to_sql();
        tracing::debug!(op, %sql, "running query");

        let conn = self.db.connect().await?;
        let mut rows = conn.query(&sql, libsql::params_from_iter(params)).await?;

        let mut out = Vec::new();
        while let Some(row) = rows.next().await? {
            out.push(map(&row)?);
        }
        tracing::debug!(op, rows = out.len(), "query done");
        Ok(out)
    }
}
