use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;
use crate::output::output;

mod create;
mod list;
mod update;

/// Handle `taskit task`.
pub fn handle(action: TaskCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TaskCommands::Add {
            title,
            description,
            priority,
            due,
            category,
            estimate,
        } => create::run(
            create::Params {
                title,
                description,
                priority,
                due,
                category,
                estimate,
            },
            ctx,
            flags,
        ),
        TaskCommands::List {
            search,
            status,
            category,
            priority,
            limit,
        } => list::run(
            list::Params {
                search,
                status,
                category,
                priority,
                limit,
            },
            ctx,
            flags,
        ),
        TaskCommands::Get { id } => {
            let task = ctx
                .service
                .tasks()
                .get(&id)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("task '{id}' not found"))?;
            output(&task, flags.format)
        }
        TaskCommands::Update {
            id,
            title,
            description,
            priority,
            due,
            clear_due,
            category,
            no_category,
            estimate,
        } => update::run(
            update::Params {
                id,
                title,
                description,
                priority,
                due,
                clear_due,
                category,
                no_category,
                estimate,
            },
            ctx,
            flags,
        ),
        TaskCommands::Toggle { id } => {
            let task = ctx.service.toggle_task(&id)?;
            output(&task, flags.format)
        }
        TaskCommands::Delete { id } => {
            let task = ctx.service.delete_task(&id)?;
            output(&task, flags.format)
        }
    }
}
