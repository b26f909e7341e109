//! Subject repository.

use gb_core::entities::{Subject, SubjectUpdate};

use crate::error::DatabaseError;
use crate::repos::expect_affected;
use crate::service::GradeService;

fn row_to_subject(row: &libsql::Row) -> Result<Subject, DatabaseError> {
    Ok(Subject {
        id: row.get(0)?,
        name: row.get(1)?,
        teacher_id: row.get(2)?,
    })
}

impl GradeService {
    /// Insert a subject owned by an existing teacher.
    pub async fn create_subject(
        &self,
        name: &str,
        teacher_id: i64,
    ) -> Result<Subject, DatabaseError> {
        let conn = self.db().connect().await?;
        conn.execute(
            "INSERT INTO subjects (name, teacher_id) VALUES (?1, ?2)",
            libsql::params![name, teacher_id],
        )
        .await?;
        let id = conn.last_insert_rowid();
        tracing::debug!(id, teacher_id, "subject created");

        Ok(Subject {
            id,
            name: name.to_string(),
            teacher_id,
        })
    }

    /// Fetch one subject; `NoResult` if the id is unknown.
    pub async fn get_subject(&self, id: i64) -> Result<Subject, DatabaseError> {
        let conn = self.db().connect().await?;
        let mut rows = conn
            .query(
                "SELECT id, name, teacher_id FROM subjects WHERE id = ?1",
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_subject(&row)
    }

    /// All subjects in id order.
    pub async fn list_subjects(&self) -> Result<Vec<Subject>, DatabaseError> {
        let conn = self.db().connect().await?;
        let mut rows = conn
            .query("SELECT id, name, teacher_id FROM subjects ORDER BY id", ())
            .await?;

        let mut subjects = Vec::new();
        while let Some(row) = rows.next().await? {
            subjects.push(row_to_subject(&row)?);
        }
        Ok(subjects)
    }

    /// Apply a partial update. An empty update returns the current row.
    pub async fn update_subject(
        &self,
        id: i64,
        update: &SubjectUpdate,
    ) -> Result<Subject, DatabaseError> {
        if update.is_empty() {
            return self.get_subject(id).await;
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(ref name) = update.name {
            params.push(name.as_str().into());
            sets.push(format!("name = ?{}", params.len()));
        }
        if let Some(teacher_id) = update.teacher_id {
            params.push(teacher_id.into());
            sets.push(format!("teacher_id = ?{}", params.len()));
        }

        params.push(id.into());
        let sql = format!(
            "UPDATE subjects SET {} WHERE id = ?{}",
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
        self.get_subject(id).await
    }

    /// Delete a subject together with its grades.
    pub async fn delete_subject(&self, id: i64) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .connect()
            .await?
            .execute("DELETE FROM subjects WHERE id = ?1", [id])
            .await?;
        expect_affected(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;

    #[tokio::test]
    async fn create_subject_roundtrip() {
        let (_dir, svc) = test_service().await;
        let teacher = svc.create_teacher("T1").await.unwrap();

        let subject = svc.create_subject("Math", teacher.id).await.unwrap();
        assert_eq!(svc.get_subject(subject.id).await.unwrap(), subject);
    }

    #[tokio::test]
    async fn reassign_subject_to_other_teacher() {
        let (_dir, svc) = test_service().await;
        let t1 = svc.create_teacher("T1").await.unwrap();
        let t2 = svc.create_teacher("T2").await.unwrap();
        let subject = svc.create_subject("Math", t1.id).await.unwrap();

        let updated = svc
            .update_subject(
                subject.id,
                &SubjectUpdate {
                    teacher_id: Some(t2.id),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.teacher_id, t2.id);
        assert_eq!(updated.name, "Math");
    }

    #[tokio::test]
    async fn reassign_to_missing_teacher_fails() {
        let (_dir, svc) = test_service().await;
        let teacher = svc.create_teacher("T1").await.unwrap();
        let subject = svc.create_subject("Math", teacher.id).await.unwrap();

        let result = svc
            .update_subject(
                subject.id,
                &SubjectUpdate {
                    teacher_id: Some(404),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(DatabaseError::LibSql(_))));
    }

    #[tokio::test]
    async fn delete_subject_then_get_is_no_result() {
        let (_dir, svc) = test_service().await;
        let teacher = svc.create_teacher("T1").await.unwrap();
        let subject = svc.create_subject("Math", teacher.id).await.unwrap();

        svc.delete_subject(subject.id).await.unwrap();
        assert!(matches!(
            svc.get_subject(subject.id).await,
            Err(DatabaseError::NoResult)
        ));
    }
}
