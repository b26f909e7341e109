//! Fixture generator: fills an empty store with a plausible school.
//!
//! Sizes come from [`SeedConfig`]. Every random choice goes through the
//! caller's `Rng`, so a seeded `StdRng` reproduces the same rows.

use chrono::{Days, NaiveDate};
use gb_config::SeedConfig;
use gb_core::responses::SeedSummary;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::DatabaseError;
use crate::helpers::format_date;
use crate::service::GradeService;

const FIRST_NAMES: &[&str] = &[
    "Olena", "Taras", "Iryna", "Mykola", "Sofia", "Andrii", "Kateryna", "Dmytro", "Marta",
    "Bohdan", "Oksana", "Yurii", "Larysa", "Petro", "Nadiia", "Ostap", "Halyna", "Roman",
    "Zoriana", "Vasyl",
];

const LAST_NAMES: &[&str] = &[
    "Shevchenko", "Kovalenko", "Bondarenko", "Tkachenko", "Kravchenko", "Oliinyk", "Melnyk",
    "Boiko", "Moroz", "Lysenko", "Marchenko", "Savchenko", "Rudenko", "Petrenko", "Hnatiuk",
];

/// Lowest and highest generated grade.
pub const GRADE_RANGE: std::ops::RangeInclusive<f64> = 1.0..=10.0;

fn random_name<R: Rng>(rng: &mut R) -> String {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Anon");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Anon");
    format!("{first} {last}")
}

fn random_date<R: Rng>(rng: &mut R, today: NaiveDate, history_days: u32) -> NaiveDate {
    let back = rng.random_range(0..=history_days);
    today
        .checked_sub_days(Days::new(u64::from(back)))
        .unwrap_or(today)
}

/// Pick one parent id; the pool is non-empty after `SeedConfig::validate`.
fn pick<R: Rng>(rng: &mut R, pool: &[i64], kind: &str) -> Result<i64, DatabaseError> {
    pool.choose(rng)
        .copied()
        .ok_or_else(|| DatabaseError::InvalidState(format!("no {kind} to reference")))
}

impl GradeService {
    /// Insert a generated school in a single transaction.
    ///
    /// Grades are drawn uniformly from [`GRADE_RANGE`] and dated within
    /// `history_days` before `today`. Existing rows are kept.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` for an unusable `SeedConfig`, or
    /// a store error; in both cases nothing is written.
    pub async fn seed<R: Rng>(
        &self,
        config: &SeedConfig,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<SeedSummary, DatabaseError> {
        config
            .validate()
            .map_err(|e| DatabaseError::InvalidState(e.to_string()))?;

        let conn = self.db().connect().await?;
        let tx = conn.transaction().await?;
        let mut summary = SeedSummary::default();

        let mut groups = Vec::new();
        for i in 1..=config.groups {
            tx.execute(
                "INSERT INTO student_groups (name) VALUES (?1)",
                [format!("Group {i}")],
            )
            .await?;
            groups.push(tx.last_insert_rowid());
            summary.groups += 1;
        }

        let mut teachers = Vec::new();
        for _ in 0..config.teachers {
            tx.execute(
                "INSERT INTO teachers (fullname) VALUES (?1)",
                [random_name(rng)],
            )
            .await?;
            teachers.push(tx.last_insert_rowid());
            summary.teachers += 1;
        }

        let mut subjects = Vec::new();
        for i in 1..=config.subjects {
            let teacher_id = pick(rng, &teachers, "teacher")?;
            tx.execute(
                "INSERT INTO subjects (name, teacher_id) VALUES (?1, ?2)",
                libsql::params![format!("Subject {i}"), teacher_id],
            )
            .await?;
            subjects.push(tx.last_insert_rowid());
            summary.subjects += 1;
        }

        let mut students = Vec::new();
        for _ in 0..config.students {
            let group_id = pick(rng, &groups, "group")?;
            tx.execute(
                "INSERT INTO students (fullname, group_id) VALUES (?1, ?2)",
                libsql::params![random_name(rng), group_id],
            )
            .await?;
            students.push(tx.last_insert_rowid());
            summary.students += 1;
        }

        for &student_id in &students {
            for &subject_id in &subjects {
                for _ in 0..config.grades_per_subject {
                    let grade = rng.random_range(GRADE_RANGE);
                    let date = random_date(rng, today, config.history_days);
                    tx.execute(
                        "INSERT INTO grades (grade, date_received, student_id, subject_id)
                         VALUES (?1, ?2, ?3, ?4)",
                        libsql::params![grade, format_date(date), student_id, subject_id],
                    )
                    .await?;
                    summary.grades += 1;
                }
            }
        }

        tx.commit().await?;
        tracing::info!(?summary, "seeded gradebook");
        Ok(summary)
    }
}
