use clap::Subcommand;

/// Subject entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SubjectCommands {
    /// Create a subject.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        teacher_id: i64,
    },
    /// List subjects.
    List,
    /// Get a subject by ID.
    Get { id: i64 },
    /// Update a subject.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        teacher_id: Option<i64>,
    },
    /// Remove a subject with its grades.
    Remove { id: i64 },
}
