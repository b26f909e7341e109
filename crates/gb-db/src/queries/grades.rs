//! Per-row grade listings for a group in one subject.

use gb_core::responses::StudentGrade;

use super::row_to_student_grade;
use crate::error::DatabaseError;
use crate::service::GradeService;
use crate::sql::Select;

/// `grades ⋈ students`, restricted to one group and subject.
/// `?1` = group id, `?2` = subject id.
pub(crate) fn group_subject_grades_select() -> Select {
    Select::from("grades", "g")
        .column("s.id")
        .column("s.fullname")
        .column("g.grade")
        .column("g.date_received")
        .join("students", "s", &[("s.id", "g.student_id")])
        .filter("s.group_id = ?1")
        .filter("g.subject_id = ?2")
        .order_by("s.id")
        .order_by("g.id")
}

/// Most recent grade date per student of the group in the subject.
fn latest_per_student() -> Select {
    Select::from("grades", "lg")
        .column("lg.student_id AS student_id")
        .column("MAX(lg.date_received) AS max_date")
        .join("students", "ls", &[("ls.id", "lg.student_id")])
        .filter("ls.group_id = ?1")
        .filter("lg.subject_id = ?2")
        .group_by("lg.student_id")
}

/// Grade rows joined back to [`latest_per_student`] on both the student and
/// the date, so one student's latest date never selects another's rows.
pub(crate) fn last_session_select() -> Select {
    group_subject_grades_select().join_derived(
        latest_per_student(),
        "last",
        &[
            ("last.student_id", "g.student_id"),
            ("last.max_date", "g.date_received"),
        ],
    )
}

impl GradeService {
    /// Every grade row of the group's students in the subject.
    pub async fn group_subject_grades(
        &self,
        group_id: i64,
        subject_id: i64,
    ) -> Result<Vec<StudentGrade>, DatabaseError> {
        self.collect(
            "group_subject_grades",
            &group_subject_grades_select(),
            vec![group_id.into(), subject_id.into()],
            row_to_student_grade,
        )
        .await
    }

    /// For each student of the group, the grades received in the subject on
    /// that student's most recent date. Several grades on that date are all
    /// returned.
    pub async fn last_session_grades(
        &self,
        group_id: i64,
        subject_id: i64,
    ) -> Result<Vec<StudentGrade>, DatabaseError> {
        self.collect(
            "last_session_grades",
            &last_session_select(),
            vec![group_id.into(), subject_id.into()],
            row_to_student_grade,
        )
        .await
    }
}
