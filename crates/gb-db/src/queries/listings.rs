//! Name listings: a teacher's subjects, a group's students, a student's
//! courses.

use super::row_to_name;
use crate::error::DatabaseError;
use crate::service::GradeService;
use crate::sql::Select;

/// `?1` = teacher id.
pub(crate) fn teacher_subjects_select() -> Select {
    Select::from("subjects", "sub")
        .column("sub.name")
        .filter("sub.teacher_id = ?1")
        .order_by("sub.id")
}

/// `?1` = group id.
pub(crate) fn group_roster_select() -> Select {
    Select::from("students", "s")
        .column("s.fullname")
        .filter("s.group_id = ?1")
        .order_by("s.id")
}

/// `subjects ⋈ grades`, one row per subject name, in order of the first
/// subject id carrying that name. `?1` = student id.
pub(crate) fn student_courses_select() -> Select {
    Select::from("subjects", "sub")
        .column("sub.name")
        .join("grades", "g", &[("g.subject_id", "sub.id")])
        .filter("g.student_id = ?1")
        .group_by("sub.name")
        .order_by("MIN(sub.id)")
}

/// `?1` = student id, `?2` = teacher id.
pub(crate) fn student_courses_by_teacher_select() -> Select {
    student_courses_select().filter("sub.teacher_id = ?2")
}

impl GradeService {
    /// Names of the subjects a teacher owns.
    pub async fn teacher_subjects(&self, teacher_id: i64) -> Result<Vec<String>, DatabaseError> {
        self.collect(
            "teacher_subjects",
            &teacher_subjects_select(),
            vec![teacher_id.into()],
            row_to_name,
        )
        .await
    }

    /// Full names of the students in a group.
    pub async fn group_roster(&self, group_id: i64) -> Result<Vec<String>, DatabaseError> {
        self.collect(
            "group_roster",
            &group_roster_select(),
            vec![group_id.into()],
            row_to_name,
        )
        .await
    }

    /// Names of the subjects in which the student holds at least one grade.
    /// Each name appears once, even when several subjects share it.
    pub async fn student_courses(&self, student_id: i64) -> Result<Vec<String>, DatabaseError> {
        self.collect(
            "student_courses",
            &student_courses_select(),
            vec![student_id.into()],
            row_to_name,
        )
        .await
    }

    /// [`student_courses`](Self::student_courses) restricted to the subjects
    /// of one teacher.
    pub async fn student_courses_by_teacher(
        &self,
        student_id: i64,
        teacher_id: i64,
    ) -> Result<Vec<String>, DatabaseError> {
        self.collect(
            "student_courses_by_teacher",
            &student_courses_by_teacher_select(),
            vec![student_id.into(), teacher_id.into()],
            row_to_name,
        )
        .await
    }
}
