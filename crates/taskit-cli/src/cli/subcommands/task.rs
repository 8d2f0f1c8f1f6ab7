use clap::Subcommand;

/// Task entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// Create a task.
    Add {
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// low, medium or high
        #[arg(long)]
        priority: Option<String>,
        /// Due date as YYYY-MM-DD
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// Free-text estimate, e.g. "2h"
        #[arg(long)]
        estimate: Option<String>,
    },
    /// List tasks.
    List {
        /// Substring of title or description (case-insensitive)
        #[arg(long)]
        search: Option<String>,
        /// all, completed or pending
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        /// Max rows (0 for all)
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a task by ID.
    Get { id: String },
    /// Update a task.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long, conflicts_with = "clear_due")]
        due: Option<String>,
        #[arg(long)]
        clear_due: bool,
        #[arg(long, conflicts_with = "no_category")]
        category: Option<String>,
        #[arg(long)]
        no_category: bool,
        #[arg(long)]
        estimate: Option<String>,
    },
    /// Flip a task between pending and completed.
    Toggle { id: String },
    /// Delete a task.
    Delete { id: String },
}
