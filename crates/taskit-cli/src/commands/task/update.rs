use taskit_core::enums::Priority;
use taskit_store::updates::task::{TaskUpdate, TaskUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_due_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub due: Option<String>,
    pub clear_due: bool,
    pub category: Option<String>,
    pub no_category: bool,
    pub estimate: Option<String>,
}

pub fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let update = build_update(&params)?;
    if let Some(Some(category_id)) = &update.category_id {
        if ctx.service.categories().get(category_id).is_none() {
            anyhow::bail!("category '{category_id}' not found");
        }
    }
    let task = ctx.service.update_task(&params.id, &update)?;
    output(&task, flags.format)
}

fn build_update(params: &Params) -> anyhow::Result<TaskUpdate> {
    let mut builder = TaskUpdateBuilder::new();
    if let Some(title) = params.title.as_deref() {
        builder = builder.title(title);
    }
    if let Some(description) = params.description.as_deref() {
        builder = builder.description(description);
    }
    if let Some(priority) = params.priority.as_deref() {
        builder = builder.priority(parse_enum::<Priority>(priority, "priority")?);
    }
    if let Some(due) = params.due.as_deref() {
        builder = builder.due_date(Some(parse_due_date(due)?));
    } else if params.clear_due {
        builder = builder.due_date(None);
    }
    if let Some(category) = &params.category {
        builder = builder.category_id(Some(category.clone()));
    } else if params.no_category {
        builder = builder.category_id(None);
    }
    if let Some(estimate) = &params.estimate {
        builder = builder.estimated_time(Some(estimate.clone()));
    }

    let update = builder.build();
    if update.is_empty() {
        anyhow::bail!(
            "At least one of --title, --description, --priority, --due, --clear-due, --category, --no-category or --estimate must be provided"
        );
    }
    Ok(update)
}
