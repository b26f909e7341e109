//! Student repository.

use gb_core::entities::{Student, StudentUpdate};

use crate::error::DatabaseError;
use crate::repos::expect_affected;
use crate::service::GradeService;

fn row_to_student(row: &libsql::Row) -> Result<Student, DatabaseError> {
    Ok(Student {
        id: row.get(0)?,
        fullname: row.get(1)?,
        group_id: row.get(2)?,
    })
}

impl GradeService {
    /// Insert a student into an existing group.
    pub async fn create_student(
        &self,
        fullname: &str,
        group_id: i64,
    ) -> Result<Student, DatabaseError> {
        let conn = self.db().connect().await?;
        conn.execute(
            "INSERT INTO students (fullname, group_id) VALUES (?1, ?2)",
            libsql::params![fullname, group_id],
        )
        .await?;
        let id = conn.last_insert_rowid();
        tracing::debug!(id, group_id, "student created");

        Ok(Student {
            id,
            fullname: fullname.to_string(),
            group_id,
        })
    }

    /// Fetch one student; `NoResult` if the id is unknown.
    pub async fn get_student(&self, id: i64) -> Result<Student, DatabaseError> {
        let conn = self.db().connect().await?;
        let mut rows = conn
            .query(
                "SELECT id, fullname, group_id FROM students WHERE id = ?1",
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_student(&row)
    }

    /// All students in id order.
    pub async fn list_students(&self) -> Result<Vec<Student>, DatabaseError> {
        let conn = self.db().connect().await?;
        let mut rows = conn
            .query("SELECT id, fullname, group_id FROM students ORDER BY id", ())
            .await?;

        let mut students = Vec::new();
        while let Some(row) = rows.next().await? {
            students.push(row_to_student(&row)?);
        }
        Ok(students)
    }

    /// Apply a partial update. An empty update returns the current row.
    pub async fn update_student(
        &self,
        id: i64,
        update: &StudentUpdate,
    ) -> Result<Student, DatabaseError> {
        if update.is_empty() {
            return self.get_student(id).await;
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(ref fullname) = update.fullname {
            params.push(fullname.as_str().into());
            sets.push(format!("fullname = ?{}", params.len()));
        }
        if let Some(group_id) = update.group_id {
            params.push(group_id.into());
            sets.push(format!("group_id = ?{}", params.len()));
        }

        params.push(id.into());
        let sql = format!(
            "UPDATE students SET {} WHERE id = ?{}",
            sets.join(", "),
            params.len()
        );

        let affected = self
            .db()
            .connect()
            .await?
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        expect_affected(affected)?;
        self.get_student(id).await
    }

    /// Delete a student together with their grades.
    pub async fn delete_student(&self, id: i64) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .connect()
            .await?
            .execute("DELETE FROM students WHERE id = ?1", [id])
            .await?;
        expect_affected(affected)
    }
}
