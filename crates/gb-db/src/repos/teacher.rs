//! Teacher repository.

use gb_core::entities::Teacher;

use crate::error::DatabaseError;
use crate::repos::expect_affected;
use crate::service::GradeService;

fn row_to_teacher(row: &libsql::Row) -> Result<Teacher, DatabaseError> {
    Ok(Teacher {
        id: row.get(0)?,
        fullname: row.get(1)?,
    })
}

impl GradeService {
    /// Insert a teacher and return it with its store-assigned id.
    pub async fn create_teacher(&self, fullname: &str) -> Result<Teacher, DatabaseError> {
        let conn = self.db().connect().await?;
        conn.execute("INSERT INTO teachers (fullname) VALUES (?1)", [fullname])
            .await?;
        let id = conn.last_insert_rowid();
        tracing::debug!(id, "teacher created");

        Ok(Teacher {
            id,
            fullname: fullname.to_string(),
        })
    }

    /// Fetch one teacher; `NoResult` if the id is unknown.
    pub async fn get_teacher(&self, id: i64) -> Result<Teacher, DatabaseError> {
        let conn = self.db().connect().await?;
        let mut rows = conn
            .query("SELECT id, fullname FROM teachers WHERE id = ?1", [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_teacher(&row)
    }

    /// All teachers in id order.
    pub async fn list_teachers(&self) -> Result<Vec<Teacher>, DatabaseError> {
        let conn = self.db().connect().await?;
        let mut rows = conn
            .query("SELECT id, fullname FROM teachers ORDER BY id", ())
            .await?;

        let mut teachers = Vec::new();
        while let Some(row) = rows.next().await? {
            teachers.push(row_to_teacher(&row)?);
        }
        Ok(teachers)
    }

    /// Rename a teacher; `NoResult` if the id is unknown.
    pub async fn update_teacher(&self, id: i64, fullname: &str) -> Result<Teacher, DatabaseError> {
        let affected = self
            .db()
            .connect()
            .await?
            .execute(
                "UPDATE teachers SET fullname = ?1 WHERE id = ?2",
                libsql::params![fullname, id],
            )
            .await?;
        expect_affected(affected)?;
        self.get_teacher(id).await
    }

    /// Delete a teacher together with their subjects and those subjects' grades.
    pub async fn delete_teacher(&self, id: i64) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .connect()
            .await?
            .execute("DELETE FROM teachers WHERE id = ?1", [id])
            .await?;
        expect_affected(affected)
    }
}
