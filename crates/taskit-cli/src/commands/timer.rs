use std::time::Duration;

use anyhow::Context;
use serde::Serialize;
use taskit_core::duration::{format_clock, format_human};
use taskit_store::tracker::TrackerSnapshot;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TimerCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ElapsedReport {
    task_id: String,
    elapsed_seconds: u64,
    clock: String,
    human: String,
    running: bool,
}

impl ElapsedReport {
    fn new(task_id: &str, seconds: u64, running: bool) -> Self {
        Self {
            task_id: task_id.to_string(),
            elapsed_seconds: seconds,
            clock: format_clock(seconds),
            human: format_human(seconds),
            running,
        }
    }
}

/// Handle `taskit timer`.
pub async fn handle(
    action: TimerCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TimerCommands::Run { id, from, duration } => {
            let report = run(ctx, &id, from, duration.map(Duration::from_secs), flags.quiet).await?;
            output(&report, flags.format)
        }
        TimerCommands::Done { id } => {
            let task = ctx
                .service
                .tracker()
                .stop_and_mark_completed(&id)
                .with_context(|| format!("task '{id}' not found"))?;
            output(&task, flags.format)
        }
        TimerCommands::Show { id } => {
            ensure_task(ctx, &id)?;
            let tracker = ctx.service.tracker();
            let seconds = tracker.realtime_elapsed(&id);
            let running = tracker.snapshot().is_running_for(&id);
            output(&ElapsedReport::new(&id, seconds, running), flags.format)
        }
        TimerCommands::Reset { id } => {
            let task = ctx.service.reset_elapsed(&id)?;
            output(
                &ElapsedReport::new(&task.id, task.elapsed_seconds(), false),
                flags.format,
            )
        }
    }
}

fn ensure_task(ctx: &AppContext, id: &str) -> anyhow::Result<()> {
    if ctx.service.tasks().get(id).is_none() {
        anyhow::bail!("task '{id}' not found");
    }
    Ok(())
}

/// Track `id` in the foreground until Ctrl-C or `limit`, then pause.
async fn run(
    ctx: &AppContext,
    id: &str,
    from: Option<u64>,
    limit: Option<Duration>,
    quiet: bool,
) -> anyhow::Result<ElapsedReport> {
    ensure_task(ctx, id)?;
    let tracker = ctx.service.tracker();
    let started = match from {
        Some(seconds) => tracker.start_timer(id, seconds),
        None => tracker.resume_timer(id),
    };
    started.with_context(|| format!("could not start timer for task '{id}'"))?;

    let mut updates = tracker.subscribe();
    let stop = async {
        match limit {
            Some(limit) => tokio::time::sleep(limit).await,
            None => {
                if let Err(error) = tokio::signal::ctrl_c().await {
                    tracing::warn!(%error, "failed to listen for Ctrl-C; stopping timer");
                }
            }
        }
    };
    tokio::pin!(stop);

    loop {
        tokio::select! {
            () = &mut stop => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                if !quiet {
                    print_progress(&snapshot);
                }
            }
        }
    }
    if !quiet {
        eprintln!();
    }

    let seconds = tracker
        .pause_timer()
        .map_or_else(|| tracker.realtime_elapsed(id), |paused| paused.elapsed_seconds);
    Ok(ElapsedReport::new(id, seconds, false))
}

fn print_progress(snapshot: &TrackerSnapshot) {
    eprint!("\r{}", snapshot.clock());
}
