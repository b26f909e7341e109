//! Shared test utilities for gb-db unit tests.

pub(crate) mod helpers {
    use chrono::NaiveDate;
    use gb_core::entities::NewGrade;
    use tempfile::TempDir;

    use crate::service::GradeService;

    /// Create a service over a fresh database file in a temp dir.
    ///
    /// The `TempDir` must outlive the service; dropping it deletes the store.
    pub async fn test_service() -> (TempDir, GradeService) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradebook.db");
        let svc = GradeService::new_local(path.to_str().unwrap())
            .await
            .unwrap();
        (dir, svc)
    }

    pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Insert one grade row.
    pub async fn grade(svc: &GradeService, student_id: i64, subject_id: i64, value: f64, on: NaiveDate) {
        svc.create_grade(&NewGrade {
            grade: value,
            date_received: on,
            student_id,
            subject_id,
        })
        .await
        .unwrap();
    }

    /// Ids of the small school used across query tests.
    pub struct School {
        pub g1: i64,
        pub g2: i64,
        pub t1: i64,
        pub t2: i64,
        pub math: i64,
        pub physics: i64,
        pub art: i64,
        pub alice: i64,
        pub bob: i64,
        pub carol: i64,
        pub dave: i64,
    }

    /// G1 = {Alice, Bob}, G2 = {Carol, Dave}. T1 teaches Math and Physics,
    /// T2 teaches Art. Dave and Art have no grades.
    ///
    /// Math: Alice 8 (2024-01-10), 6 (2024-03-05); Bob 4 (2024-02-01);
    ///       Carol 9 (2024-02-01).
    /// Physics: Alice 10 (2024-01-15); Carol 7 (2024-01-15), 5 (2024-04-01).
    pub async fn school(svc: &GradeService) -> School {
        let g1 = svc.create_group("G1").await.unwrap().id;
        let g2 = svc.create_group("G2").await.unwrap().id;
        let t1 = svc.create_teacher("T1").await.unwrap().id;
        let t2 = svc.create_teacher("T2").await.unwrap().id;
        let math = svc.create_subject("Math", t1).await.unwrap().id;
        let physics = svc.create_subject("Physics", t1).await.unwrap().id;
        let art = svc.create_subject("Art", t2).await.unwrap().id;
        let alice = svc.create_student("Alice", g1).await.unwrap().id;
        let bob = svc.create_student("Bob", g1).await.unwrap().id;
        let carol = svc.create_student("Carol", g2).await.unwrap().id;
        let dave = svc.create_student("Dave", g2).await.unwrap().id;

        grade(svc, alice, math, 8.0, day(2024, 1, 10)).await;
        grade(svc, alice, math, 6.0, day(2024, 3, 5)).await;
        grade(svc, bob, math, 4.0, day(2024, 2, 1)).await;
        grade(svc, carol, math, 9.0, day(2024, 2, 1)).await;
        grade(svc, alice, physics, 10.0, day(2024, 1, 15)).await;
        grade(svc, carol, physics, 7.0, day(2024, 1, 15)).await;
        grade(svc, carol, physics, 5.0, day(2024, 4, 1)).await;

        School {
            g1,
            g2,
            t1,
            t2,
            math,
            physics,
            art,
            alice,
            bob,
            carol,
            dave,
        }
    }
}
