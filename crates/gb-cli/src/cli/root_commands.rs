use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    GradeCommands, GroupCommands, QueryCommands, StudentCommands, SubjectCommands,
    TeacherCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Teachers.
    Teacher {
        #[command(subcommand)]
        action: TeacherCommands,
    },
    /// Student groups.
    Group {
        #[command(subcommand)]
        action: GroupCommands,
    },
    /// Students.
    Student {
        #[command(subcommand)]
        action: StudentCommands,
    },
    /// Subjects.
    Subject {
        #[command(subcommand)]
        action: SubjectCommands,
    },
    /// Grades.
    Grade {
        #[command(subcommand)]
        action: GradeCommands,
    },
    /// Analytical queries.
    Query {
        #[command(subcommand)]
        action: QueryCommands,
    },
    /// Run every query for one set of ids.
    Report(ReportArgs),
    /// Fill the store with generated fixtures.
    Seed(SeedArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    #[arg(long, default_value_t = 1)]
    pub subject_id: i64,
    #[arg(long, default_value_t = 1)]
    pub teacher_id: i64,
    #[arg(long, default_value_t = 1)]
    pub group_id: i64,
    #[arg(long, default_value_t = 1)]
    pub student_id: i64,
}

#[derive(Clone, Debug, Args)]
pub struct SeedArgs {
    /// Seed for the random generator (reproducible fixtures)
    #[arg(long)]
    pub rng_seed: Option<u64>,
}
