use clap::Subcommand;

/// Student entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StudentCommands {
    /// Create a student.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        group_id: i64,
    },
    /// List students.
    List,
    /// Get a student by ID.
    Get { id: i64 },
    /// Update a student.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        group_id: Option<i64>,
    },
    /// Remove a student with their grades.
    Remove { id: i64 },
}
