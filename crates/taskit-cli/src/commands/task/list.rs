use taskit_core::enums::{Priority, StatusFilter};
use taskit_core::query::TaskQuery;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{apply_limit, row_limit};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub search: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub limit: Option<u32>,
}

pub fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = row_limit(params.limit, flags.limit, ctx.config.general.default_limit);
    let query = build_query(params)?;

    let mut tasks = ctx.service.tasks().query(&query);
    let dropped = apply_limit(&mut tasks, limit);
    if dropped > 0 {
        tracing::debug!(dropped, "task list truncated; pass --limit 0 for all rows");
    }
    output(&tasks, flags.format)
}

fn build_query(params: Params) -> anyhow::Result<TaskQuery> {
    Ok(TaskQuery {
        search: params.search,
        status: params
            .status
            .as_deref()
            .map(|raw| parse_enum::<StatusFilter>(raw, "status"))
            .transpose()?
            .unwrap_or_default(),
        category_id: params.category,
        priority: params
            .priority
            .as_deref()
            .map(|raw| parse_enum::<Priority>(raw, "priority"))
            .transpose()?,
    })
}
