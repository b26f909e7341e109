use clap::Subcommand;

/// Teacher entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TeacherCommands {
    /// Create a teacher.
    Create {
        #[arg(long)]
        name: String,
    },
    /// List teachers.
    List,
    /// Get a teacher by ID.
    Get { id: i64 },
    /// Rename a teacher.
    Update {
        id: i64,
        #[arg(long)]
        name: String,
    },
    /// Remove a teacher and, by cascade, their subjects and grades.
    Remove { id: i64 },
}
