//! The combined report: every catalog query for one set of ids.

use gb_core::responses::{Report, ReportParams};

use crate::error::DatabaseError;
use crate::service::GradeService;

impl GradeService {
    /// Run all twelve catalog queries.
    ///
    /// The queries are independent and each holds its own connection, so they
    /// run concurrently; the first failure aborts the report.
    pub async fn report(&self, params: ReportParams) -> Result<Report, DatabaseError> {
        let ReportParams {
            subject_id,
            teacher_id,
            group_id,
            student_id,
        } = params;

        let (
            top_performers,
            best_in_subject,
            group_averages_for_subject,
            global_average,
            teacher_subjects,
            group_roster,
            group_subject_grades,
            teacher_average,
            student_courses,
            student_courses_by_teacher,
            teacher_student_average,
            last_session_grades,
        ) = tokio::try_join!(
            self.top_performers(),
            self.best_in_subject(subject_id),
            self.group_averages_for_subject(subject_id),
            self.global_average(),
            self.teacher_subjects(teacher_id),
            self.group_roster(group_id),
            self.group_subject_grades(group_id, subject_id),
            self.teacher_average(teacher_id),
            self.student_courses(student_id),
            self.student_courses_by_teacher(student_id, teacher_id),
            self.teacher_student_average(teacher_id, student_id),
            self.last_session_grades(group_id, subject_id),
        )?;

        tracing::info!(?params, "report built");

        Ok(Report {
            params,
            top_performers,
            best_in_subject,
            group_averages_for_subject,
            global_average,
            teacher_subjects,
            group_roster,
            group_subject_grades,
            teacher_average,
            student_courses,
            student_courses_by_teacher,
            teacher_student_average,
            last_session_grades,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{school, test_service};

    #[tokio::test]
    async fn report_matches_individual_queries() {
        let (_dir, svc) = test_service().await;
        let s = school(&svc).await;
        let params = ReportParams {
            subject_id: s.math,
            teacher_id: s.t1,
            group_id: s.g1,
            student_id: s.alice,
        };

        let report = svc.report(params).await.unwrap();

        assert_eq!(report.params, params);
        assert_eq!(report.top_performers, svc.top_performers().await.unwrap());
        assert_eq!(report.best_in_subject.unwrap().student_id, s.carol);
        assert_eq!(report.global_average, Some(7.0));
        assert_eq!(report.teacher_subjects, ["Math", "Physics"]);
        assert_eq!(report.group_roster, ["Alice", "Bob"]);
        assert_eq!(report.group_subject_grades.len(), 3);
        assert_eq!(report.teacher_average, Some(7.0));
        assert_eq!(report.student_courses, ["Math", "Physics"]);
        assert_eq!(report.student_courses_by_teacher, ["Math", "Physics"]);
        assert_eq!(report.teacher_student_average, Some(8.0));
        assert_eq!(report.last_session_grades.len(), 2);
    }

    #[tokio::test]
    async fn report_on_empty_store_is_all_absent() {
        let (_dir, svc) = test_service().await;

        let report = svc.report(ReportParams::default()).await.unwrap();

        assert!(report.top_performers.is_empty());
        assert_eq!(report.best_in_subject, None);
        assert_eq!(report.global_average, None);
        assert!(report.group_roster.is_empty());
        assert_eq!(report.teacher_student_average, None);
        assert!(report.last_session_grades.is_empty());
    }
}
