use serde::Serialize;
use taskit_core::duration::format_human;
use taskit_core::stats::{CategoryCount, PriorityBreakdown, TaskStats};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsReport {
    #[serde(flatten)]
    totals: TaskStats,
    tracked: String,
    priorities: PriorityBreakdown,
    categories: Vec<CategoryCount>,
}

/// Handle `taskit stats`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = build_report(ctx);
    if flags.format == OutputFormat::Table {
        // Nested breakdowns do not fit one table; print each part.
        output(&report.totals, flags.format)?;
        output(&report.priorities, flags.format)?;
        return output(&report.categories, flags.format);
    }
    output(&report, flags.format)
}

fn build_report(ctx: &AppContext) -> StatsReport {
    let totals = ctx.service.stats();
    StatsReport {
        tracked: format_human(totals.tracked_seconds),
        totals,
        priorities: ctx.service.priority_breakdown(),
        categories: ctx.service.category_breakdown(),
    }
}
