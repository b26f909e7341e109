use clap::Subcommand;

/// Group entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GroupCommands {
    /// Create a group.
    Create {
        #[arg(long)]
        name: String,
    },
    /// List groups.
    List,
    /// Get a group by ID.
    Get { id: i64 },
    /// Rename a group.
    Update {
        id: i64,
        #[arg(long)]
        name: String,
    },
    /// Remove a group with its students.
    Remove { id: i64 },
}
