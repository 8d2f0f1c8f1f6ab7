use anyhow::bail;
use taskit_core::entities::NewTask;
use taskit_core::enums::Priority;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_due_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub due: Option<String>,
    pub category: Option<String>,
    pub estimate: Option<String>,
}

pub fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let new = build_new_task(params, ctx)?;
    let task = ctx.service.create_task(new)?;
    output(&task, flags.format)
}

fn build_new_task(params: Params, ctx: &AppContext) -> anyhow::Result<NewTask> {
    if let Some(category_id) = params.category.as_deref() {
        if ctx.service.categories().get(category_id).is_none() {
            bail!("category '{category_id}' not found");
        }
    }

    Ok(NewTask {
        title: params.title,
        description: params.description,
        priority: params
            .priority
            .as_deref()
            .map(|raw| parse_enum::<Priority>(raw, "priority"))
            .transpose()?,
        due_date: params.due.as_deref().map(parse_due_date).transpose()?,
        category_id: params.category,
        estimated_time: params.estimate,
        elapsed_time: None,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use taskit_core::enums::Priority;
    use taskit_store::service::TodoService;

    use super::{Params, build_new_task};
    use crate::context::AppContext;

    fn params(title: &str) -> Params {
        Params {
            title: title.into(),
            description: None,
            priority: None,
            due: None,
            category: None,
            estimate: None,
        }
    }

    #[test]
    fn parses_priority_and_due_date() {
        let ctx = AppContext::from_service(TodoService::in_memory());
        let new = build_new_task(
            Params {
                priority: Some("high".into()),
                due: Some("2025-03-04".into()),
                ..params("Pay rent")
            },
            &ctx,
        )
        .unwrap();

        assert_eq!(new.priority, Some(Priority::High));
        assert_eq!(new.due_date.unwrap().to_rfc3339(), "2025-03-04T00:00:00+00:00");
    }

    #[test]
    fn rejects_unknown_category() {
        let ctx = AppContext::from_service(TodoService::in_memory());
        let result = build_new_task(
            Params {
                category: Some("nope".into()),
                ..params("x")
            },
            &ctx,
        );
        assert!(result.is_err());
    }
}
