use anyhow::bail;
use serde::Serialize;
use taskit_store::service::CategoryDeletion;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CategoryCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryRow {
    id: String,
    name: String,
    task_count: usize,
}

/// Handle `taskit category`.
pub fn handle(
    action: CategoryCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CategoryCommands::Add { name } => {
            let category = ctx.service.create_category(&name)?;
            output(&category, flags.format)
        }
        CategoryCommands::List => output(&category_rows(ctx), flags.format),
        CategoryCommands::Rename { id, name } => {
            let category = ctx.service.rename_category(&id, &name)?;
            output(&category, flags.format)
        }
        CategoryCommands::Delete { id } => match ctx.service.delete_category(&id) {
            CategoryDeletion::Deleted { category } => output(&category, flags.format),
            CategoryDeletion::InUse { task_count } => bail!(
                "category '{id}' is used by {task_count} task(s); move or delete them first"
            ),
            CategoryDeletion::NotFound => bail!("category '{id}' not found"),
        },
    }
}

fn category_rows(ctx: &AppContext) -> Vec<CategoryRow> {
    ctx.service
        .categories()
        .list()
        .iter()
        .map(|category| CategoryRow {
            id: category.id.clone(),
            name: category.name.clone(),
            task_count: ctx.service.count_tasks_in_category(&category.id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use taskit_core::entities::NewTask;
    use taskit_store::service::TodoService;

    use super::category_rows;
    use crate::context::AppContext;

    #[test]
    fn rows_carry_task_counts() {
        let mut ctx = AppContext::from_service(TodoService::in_memory());
        let work = ctx.service.create_category("Work").unwrap();
        ctx.service.create_category("Home").unwrap();
        ctx.service
            .create_task(NewTask {
                title: "Report".into(),
                category_id: Some(work.id.clone()),
                ..NewTask::default()
            })
            .unwrap();

        let rows = category_rows(&ctx);
        let counts: Vec<_> = rows.iter().map(|r| (r.name.as_str(), r.task_count)).collect();
        assert_eq!(counts, [("Work", 1), ("Home", 0)]);
    }
}
