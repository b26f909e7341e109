//! Schema bootstrap.
//!
//! Embeds the SQL schema at compile time and executes it on database open.
//! All statements use `IF NOT EXISTS`, so re-running is a no-op.

use crate::GradeDb;
use crate::error::DatabaseError;

/// 5 tables, 4 indexes.
const SCHEMA: &str = include_str!("../schema/gradebook.sql");

impl GradeDb {
    /// Create any missing tables and indexes.
    pub(crate) async fn bootstrap_schema(&self) -> Result<(), DatabaseError> {
        let conn = self.connect().await?;
        conn.execute_batch(SCHEMA)
            .await
            .map_err(|e| DatabaseError::Schema(format!("gradebook.sql: {e}")))?;
        tracing::info!(path = %self.path, "schema ready");
        Ok(())
    }
}
