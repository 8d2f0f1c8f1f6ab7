use clap::Subcommand;

use crate::cli::subcommands::{CategoryCommands, TaskCommands, TimerCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Categories.
    Category {
        #[command(subcommand)]
        action: CategoryCommands,
    },
    /// Time tracking.
    Timer {
        #[command(subcommand)]
        action: TimerCommands,
    },
    /// Progress summary: counts, completion rate, priority and category breakdown.
    Stats,
}
