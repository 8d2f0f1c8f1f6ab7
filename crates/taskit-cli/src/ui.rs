use std::io::IsTerminal;
use std::sync::OnceLock;

use taskit_core::enums::{Priority, StatusFilter};

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// ANSI foreground codes for table cells that carry task state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Done, or low priority.
    pub settled: &'static str,
    /// Open, medium priority, or on the clock.
    pub open: &'static str,
    /// High priority or overdue.
    pub urgent: &'static str,
}

impl Palette {
    pub const ANSI: Self = Self {
        settled: "32",
        open: "33",
        urgent: "31",
    };

    /// Color code for a cell, matched case-insensitively against priority,
    /// completion and timer spellings.
    #[must_use]
    pub fn code_for(&self, cell: &str) -> Option<&'static str> {
        let cell = cell.trim().to_ascii_lowercase();
        if let Some(priority) = Priority::ALL.into_iter().find(|p| p.as_str() == cell) {
            return Some(self.for_priority(priority));
        }
        match cell.as_str() {
            "true" | "idle" => Some(self.settled),
            "running" | "paused" => Some(self.open),
            "overdue" => Some(self.urgent),
            other if other == StatusFilter::Completed.as_str() => Some(self.settled),
            other if other == StatusFilter::Pending.as_str() => Some(self.open),
            _ => None,
        }
    }

    #[must_use]
    pub const fn for_priority(&self, priority: Priority) -> &'static str {
        match priority {
            Priority::Low => self.settled,
            Priority::Medium => self.open,
            Priority::High => self.urgent,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    /// `None` renders plain tables.
    pub palette: Option<Palette>,
    pub term_width: Option<usize>,
}

impl UiPrefs {
    const PLAIN: Self = Self {
        palette: None,
        term_width: None,
    };
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    let prefs = UiPrefs {
        palette: wants_color(flags, std::io::stdout().is_terminal()).then_some(Palette::ANSI),
        term_width,
    };
    if UI_PREFS.set(prefs).is_err() {
        tracing::debug!("ui preferences already initialized");
    }
}

fn wants_color(flags: &GlobalFlags, is_terminal: bool) -> bool {
    if flags.format != OutputFormat::Table {
        return false;
    }
    match flags.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_terminal && !flags.quiet && std::env::var_os("NO_COLOR").is_none(),
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or(UiPrefs::PLAIN)
}
