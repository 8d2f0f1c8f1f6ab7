use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Task { action } => commands::task::handle(action, ctx, flags),
        Commands::Category { action } => commands::category::handle(action, ctx, flags),
        Commands::Timer { action } => commands::timer::handle(action, ctx, flags).await,
        Commands::Stats => commands::stats::handle(ctx, flags),
    }
}
