//! Grade-average queries: per student, per group, per teacher, global.

use gb_core::responses::{GroupAverage, StudentAverage};

use super::{TOP_PERFORMERS_LIMIT, row_to_average, row_to_group_average, row_to_student_average};
use crate::error::DatabaseError;
use crate::service::GradeService;
use crate::sql::Select;

/// Students joined to their grades, averaged per student id.
///
/// `students ⋈ grades ON grades.student_id = students.id`
fn student_average_select() -> Select {
    Select::from("students", "s")
        .column("s.id")
        .column("s.fullname")
        .column("AVG(g.grade) AS average")
        .join("grades", "g", &[("g.student_id", "s.id")])
        .group_by("s.id")
        .group_by("s.fullname")
        .order_by("average DESC")
        .order_by("s.id ASC")
}

pub(crate) fn top_performers_select() -> Select {
    student_average_select().limit(TOP_PERFORMERS_LIMIT)
}

/// `?1` = subject id.
pub(crate) fn best_in_subject_select() -> Select {
    student_average_select()
        .filter("g.subject_id = ?1")
        .limit(1)
}

/// `grades ⋈ students ⋈ student_groups`, averaged per group id. `?1` = subject id.
pub(crate) fn group_averages_select() -> Select {
    Select::from("grades", "g")
        .column("gr.id")
        .column("gr.name")
        .column("AVG(g.grade) AS average")
        .join("students", "s", &[("s.id", "g.student_id")])
        .join("student_groups", "gr", &[("gr.id", "s.group_id")])
        .filter("g.subject_id = ?1")
        .group_by("gr.id")
        .group_by("gr.name")
        .order_by("gr.id")
}

pub(crate) fn global_average_select() -> Select {
    Select::from("grades", "g").column("AVG(g.grade)")
}

/// `grades ⋈ subjects`. `?1` = teacher id.
pub(crate) fn teacher_average_select() -> Select {
    Select::from("grades", "g")
        .column("AVG(g.grade)")
        .join("subjects", "sub", &[("sub.id", "g.subject_id")])
        .filter("sub.teacher_id = ?1")
}

/// `grades ⋈ subjects ⋈ teachers`. `?1` = teacher id, `?2` = student id.
pub(crate) fn teacher_student_average_select() -> Select {
    Select::from("grades", "g")
        .column("AVG(g.grade)")
        .join("subjects", "sub", &[("sub.id", "g.subject_id")])
        .join("teachers", "t", &[("t.id", "sub.teacher_id")])
        .filter("t.id = ?1")
        .filter("g.student_id = ?2")
}

impl GradeService {
    /// The five students with the highest average grade across all subjects.
    ///
    /// Students without grades never appear.
    pub async fn top_performers(&self) -> Result<Vec<StudentAverage>, DatabaseError> {
        self.collect(
            "top_performers",
            &top_performers_select(),
            Vec::new(),
            row_to_student_average,
        )
        .await
    }

    /// The student with the highest average grade in one subject, if any
    /// student has a grade in it.
    pub async fn best_in_subject(
        &self,
        subject_id: i64,
    ) -> Result<Option<StudentAverage>, DatabaseError> {
        let rows = self
            .collect(
                "best_in_subject",
                &best_in_subject_select(),
                vec![subject_id.into()],
                row_to_student_average,
            )
            .await?;
        Ok(rows.into_iter().next())
    }

    /// Average grade of every group that has grades in the subject.
    pub async fn group_averages_for_subject(
        &self,
        subject_id: i64,
    ) -> Result<Vec<GroupAverage>, DatabaseError> {
        self.collect(
            "group_averages_for_subject",
            &group_averages_select(),
            vec![subject_id.into()],
            row_to_group_average,
        )
        .await
    }

    /// Average over every grade in the store; `None` when there are none.
    pub async fn global_average(&self) -> Result<Option<f64>, DatabaseError> {
        let rows = self
            .collect(
                "global_average",
                &global_average_select(),
                Vec::new(),
                row_to_average,
            )
            .await?;
        Ok(rows.into_iter().next().flatten())
    }

    /// Average over all grades in the subjects a teacher owns.
    pub async fn teacher_average(&self, teacher_id: i64) -> Result<Option<f64>, DatabaseError> {
        let rows = self
            .collect(
                "teacher_average",
                &teacher_average_select(),
                vec![teacher_id.into()],
                row_to_average,
            )
            .await?;
        Ok(rows.into_iter().next().flatten())
    }

    /// Average of the grades a teacher's subjects gave one student.
    pub async fn teacher_student_average(
        &self,
        teacher_id: i64,
        student_id: i64,
    ) -> Result<Option<f64>, DatabaseError> {
        let rows = self
            .collect(
                "teacher_student_average",
                &teacher_student_average_select(),
                vec![teacher_id.into(), student_id.into()],
                row_to_average,
            )
            .await?;
        Ok(rows.into_iter().next().flatten())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::sql::JoinKind;
    use crate::test_support::helpers::{day, grade, school, test_service};

    fn names(rows: &[StudentAverage]) -> Vec<&str> {
        rows.iter().map(|r| r.fullname.as_str()).collect()
    }

    #[rstest]
    #[case::top(top_performers_select())]
    #[case::best(best_in_subject_select())]
    #[case::groups(group_averages_select())]
    #[case::teacher(teacher_average_select())]
    #[case::teacher_student(teacher_student_average_select())]
    fn every_join_is_inner(#[case] select: Select) {
        assert!(!select.joins().is_empty());
        assert!(select.joins().iter().all(|j| j.kind == JoinKind::Inner));
    }

    #[tokio::test]
    async fn top_performers_sorted_and_excludes_ungraded() {
        let (_dir, svc) = test_service().await;
        let s = school(&svc).await;

        let top = svc.top_performers().await.unwrap();
        assert_eq!(names(&top), ["Alice", "Carol", "Bob"]);
        assert_eq!(
            top.iter().map(|r| r.average).collect::<Vec<_>>(),
            [8.0, 7.0, 4.0]
        );
        assert!(top.iter().all(|r| r.student_id != s.dave));
    }

    #[tokio::test]
    async fn top_performers_capped_at_five() {
        let (_dir, svc) = test_service().await;
        let group = svc.create_group("G").await.unwrap().id;
        let teacher = svc.create_teacher("T").await.unwrap().id;
        let subject = svc.create_subject("S", teacher).await.unwrap().id;
        for i in 1..=7 {
            let student = svc.create_student(&format!("S{i}"), group).await.unwrap().id;
            grade(&svc, student, subject, f64::from(i), day(2024, 1, 1)).await;
        }

        let top = svc.top_performers().await.unwrap();
        assert_eq!(top.len(), 5);
        assert_eq!(names(&top), ["S7", "S6", "S5", "S4", "S3"]);
        assert!(top.windows(2).all(|w| w[0].average >= w[1].average));
    }

    #[tokio::test]
    async fn removing_leader_changes_first_entry() {
        let (_dir, svc) = test_service().await;
        let s = school(&svc).await;

        let before = svc.top_performers().await.unwrap();
        assert_eq!(before[0].student_id, s.alice);

        svc.delete_student(s.alice).await.unwrap();
        let after = svc.top_performers().await.unwrap();
        assert_eq!(after[0].student_id, s.carol);
    }

    #[tokio::test]
    async fn equal_averages_break_ties_by_student_id() {
        let (_dir, svc) = test_service().await;
        let group = svc.create_group("G").await.unwrap().id;
        let teacher = svc.create_teacher("T").await.unwrap().id;
        let subject = svc.create_subject("S", teacher).await.unwrap().id;
        let zed = svc.create_student("Zed", group).await.unwrap().id;
        let amy = svc.create_student("Amy", group).await.unwrap().id;
        grade(&svc, amy, subject, 6.0, day(2024, 1, 1)).await;
        grade(&svc, zed, subject, 6.0, day(2024, 1, 1)).await;

        let top = svc.top_performers().await.unwrap();
        assert_eq!(names(&top), ["Zed", "Amy"]);

        let best = svc.best_in_subject(subject).await.unwrap().unwrap();
        assert_eq!(best.student_id, zed);
    }

    #[tokio::test]
    async fn best_in_subject_picks_highest_mean() {
        let (_dir, svc) = test_service().await;
        let s = school(&svc).await;

        let best = svc.best_in_subject(s.math).await.unwrap().unwrap();
        assert_eq!(best.fullname, "Carol");
        assert!((best.average - 9.0).abs() < f64::EPSILON);

        let best = svc.best_in_subject(s.physics).await.unwrap().unwrap();
        assert_eq!(best.student_id, s.alice);
    }

    #[tokio::test]
    async fn best_in_subject_without_grades_is_none() {
        let (_dir, svc) = test_service().await;
        let s = school(&svc).await;

        assert_eq!(svc.best_in_subject(s.art).await.unwrap(), None);
        assert_eq!(svc.best_in_subject(9_999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn group_averages_per_group_id() {
        let (_dir, svc) = test_service().await;
        let s = school(&svc).await;

        let math = svc.group_averages_for_subject(s.math).await.unwrap();
        assert_eq!(
            math,
            vec![
                GroupAverage {
                    group_id: s.g1,
                    name: "G1".into(),
                    average: 6.0
                },
                GroupAverage {
                    group_id: s.g2,
                    name: "G2".into(),
                    average: 9.0
                },
            ]
        );
        assert!(svc.group_averages_for_subject(s.art).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn same_named_groups_are_not_merged() {
        let (_dir, svc) = test_service().await;
        let teacher = svc.create_teacher("T").await.unwrap().id;
        let subject = svc.create_subject("S", teacher).await.unwrap().id;
        for value in [2.0, 8.0] {
            let group = svc.create_group("Twin").await.unwrap().id;
            let student = svc.create_student("X", group).await.unwrap().id;
            grade(&svc, student, subject, value, day(2024, 1, 1)).await;
        }

        let averages = svc.group_averages_for_subject(subject).await.unwrap();
        assert_eq!(averages.len(), 2);
        assert_eq!(
            averages.iter().map(|a| a.average).collect::<Vec<_>>(),
            [2.0, 8.0]
        );

        let top = svc.top_performers().await.unwrap();
        assert_eq!(top.len(), 2, "same-named students stay separate");
    }

    #[tokio::test]
    async fn global_average_over_every_grade() {
        let (_dir, svc) = test_service().await;
        assert_eq!(svc.global_average().await.unwrap(), None);

        school(&svc).await;
        assert_eq!(svc.global_average().await.unwrap(), Some(7.0));
    }

    #[tokio::test]
    async fn global_average_is_rounded() {
        let (_dir, svc) = test_service().await;
        let group = svc.create_group("G").await.unwrap().id;
        let teacher = svc.create_teacher("T").await.unwrap().id;
        let subject = svc.create_subject("S", teacher).await.unwrap().id;
        let student = svc.create_student("A", group).await.unwrap().id;
        for value in [1.0, 2.0, 2.0] {
            grade(&svc, student, subject, value, day(2024, 1, 1)).await;
        }

        assert_eq!(svc.global_average().await.unwrap(), Some(1.67));
    }

    #[tokio::test]
    async fn teacher_average_covers_all_owned_subjects() {
        let (_dir, svc) = test_service().await;
        let s = school(&svc).await;

        assert_eq!(svc.teacher_average(s.t1).await.unwrap(), Some(7.0));
        assert_eq!(svc.teacher_average(s.t2).await.unwrap(), None);
        assert_eq!(svc.teacher_average(12_345).await.unwrap(), None);
    }

    #[tokio::test]
    async fn teacher_student_average_restricts_both_sides() {
        let (_dir, svc) = test_service().await;
        let s = school(&svc).await;

        assert_eq!(
            svc.teacher_student_average(s.t1, s.alice).await.unwrap(),
            Some(8.0)
        );
        assert_eq!(
            svc.teacher_student_average(s.t1, s.carol).await.unwrap(),
            Some(7.0)
        );
        assert_eq!(
            svc.teacher_student_average(s.t2, s.alice).await.unwrap(),
            None
        );
        assert_eq!(
            svc.teacher_student_average(s.t1, s.dave).await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn repeated_calls_are_identical() {
        let (_dir, svc) = test_service().await;
        let s = school(&svc).await;

        assert_eq!(
            svc.top_performers().await.unwrap(),
            svc.top_performers().await.unwrap()
        );
        assert_eq!(
            svc.group_averages_for_subject(s.physics).await.unwrap(),
            svc.group_averages_for_subject(s.physics).await.unwrap()
        );
        assert_eq!(
            svc.teacher_average(s.t1).await.unwrap(),
            svc.teacher_average(s.t1).await.unwrap()
        );
    }
}
