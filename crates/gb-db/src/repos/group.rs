//! Group repository.

use gb_core::entities::Group;

use crate::error::DatabaseError;
use crate::repos::expect_affected;
use crate::service::GradeService;

fn row_to_group(row: &libsql::Row) -> Result<Group, DatabaseError> {
    Ok(Group {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

impl GradeService {
    /// Insert a group and return it with its store-assigned id.
    pub async fn create_group(&self, name: &str) -> Result<Group, DatabaseError> {
        let conn = self.db().connect().await?;
        conn.execute("INSERT INTO student_groups (name) VALUES (?1)", [name])
            .await?;
        let id = conn.last_insert_rowid();
        tracing::debug!(id, "group created");

        Ok(Group {
            id,
            name: name.to_string(),
        })
    }

    /// Fetch one group; `NoResult` if the id is unknown.
    pub async fn get_group(&self, id: i64) -> Result<Group, DatabaseError> {
        let conn = self.db().connect().await?;
        let mut rows = conn
            .query("SELECT id, name FROM student_groups WHERE id = ?1", [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_group(&row)
    }

    /// All groups in id order.
    pub async fn list_groups(&self) -> Result<Vec<Group>, DatabaseError> {
        let conn = self.db().connect().await?;
        let mut rows = conn
            .query("SELECT id, name FROM student_groups ORDER BY id", ())
            .await?;

        let mut groups = Vec::new();
        while let Some(row) = rows.next().await? {
            groups.push(row_to_group(&row)?);
        }
        Ok(groups)
    }

    /// Rename a group; `NoResult` if the id is unknown.
    pub async fn update_group(&self, id: i64, name: &str) -> Result<Group, DatabaseError> {
        let affected = self
            .db()
            .connect()
            .await?
            .execute(
                "UPDATE student_groups SET name = ?1 WHERE id = ?2",
                libsql::params![name, id],
            )
            .await?;
        expect_affected(affected)?;
        self.get_group(id).await
    }

    /// Delete a group together with its students and their grades.
    pub async fn delete_group(&self, id: i64) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .connect()
            .await?
            .execute("DELETE FROM student_groups WHERE id = ?1", [id])
            .await?;
        expect_affected(affected)
    }
}
