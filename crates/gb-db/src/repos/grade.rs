//! Grade repository.
//!
//! Grades are append-only from the CLI's point of view: create, list, delete.
//! The `[1, 10]` range is not enforced here.

use gb_core::entities::{Grade, NewGrade};

use crate::error::DatabaseError;
use crate::helpers::{format_date, parse_date};
use crate::repos::expect_affected;
use crate::service::GradeService;

fn row_to_grade(row: &libsql::Row) -> Result<Grade, DatabaseError> {
    Ok(Grade {
        id: row.get(0)?,
        grade: row.get(1)?,
        date_received: parse_date(&row.get::<String>(2)?)?,
        student_id: row.get(3)?,
        subject_id: row.get(4)?,
    })
}

impl GradeService {
    /// Record a grade and return it with its store-assigned id.
    pub async fn create_grade(&self, new: &NewGrade) -> Result<Grade, DatabaseError> {
        let conn = self.db().connect().await?;
        conn.execute(
            "INSERT INTO grades (grade, date_received, student_id, subject_id)
             VALUES (?1, ?2, ?3, ?4)",
            libsql::params![
                new.grade,
                format_date(new.date_received),
                new.student_id,
                new.subject_id
            ],
        )
        .await?;
        let id = conn.last_insert_rowid();

        Ok(Grade {
            id,
            grade: new.grade,
            date_received: new.date_received,
            student_id: new.student_id,
            subject_id: new.subject_id,
        })
    }

    /// Fetch one grade; `NoResult` if the id is unknown.
    pub async fn get_grade(&self, id: i64) -> Result<Grade, DatabaseError> {
        let conn = self.db().connect().await?;
        let mut rows = conn
            .query(
                "SELECT id, grade, date_received, student_id, subject_id
                 FROM grades WHERE id = ?1",
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_grade(&row)
    }

    /// Up to `limit` grades in id order.
    pub async fn list_grades(&self, limit: u32) -> Result<Vec<Grade>, DatabaseError> {
        let conn = self.db().connect().await?;
        let mut rows = conn
            .query(
                "SELECT id, grade, date_received, student_id, subject_id
                 FROM grades ORDER BY id LIMIT ?1",
                [i64::from(limit)],
            )
            .await?;

        let mut grades = Vec::new();
        while let Some(row) = rows.next().await? {
            grades.push(row_to_grade(&row)?);
        }
        Ok(grades)
    }

    /// Delete one grade; `NoResult` if the id is unknown.
    pub async fn delete_grade(&self, id: i64) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .connect()
            .await?
            .execute("DELETE FROM grades WHERE id = ?1", [id])
            .await?;
        expect_affected(affected)
    }
}
