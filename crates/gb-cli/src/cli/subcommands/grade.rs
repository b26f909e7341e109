use chrono::NaiveDate;
use clap::Subcommand;

/// Grade commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GradeCommands {
    /// Record a grade.
    Create {
        #[arg(long)]
        student_id: i64,
        #[arg(long)]
        subject_id: i64,
        #[arg(long)]
        grade: f64,
        /// Date received, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List grades.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Remove a grade.
    Remove { id: i64 },
}
