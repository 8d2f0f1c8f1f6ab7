use clap::Subcommand;

/// Time tracker commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TimerCommands {
    /// Track a task in the foreground until Ctrl-C, then pause.
    Run {
        id: String,
        /// Start from this many seconds instead of the stored value
        #[arg(long)]
        from: Option<u64>,
        /// Stop after this many seconds
        #[arg(long = "for", value_name = "SECS")]
        duration: Option<u64>,
    },
    /// Mark a task completed with its tracked time.
    Done { id: String },
    /// Show a task's tracked time.
    Show { id: String },
    /// Zero a task's tracked time.
    Reset { id: String },
}
