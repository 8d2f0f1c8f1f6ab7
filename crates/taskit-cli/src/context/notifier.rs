use taskit_store::notify::{Notification, NotificationLevel, Notifier};

/// Prints notifications to stderr so stdout stays machine-readable.
#[derive(Debug, Clone, Copy)]
pub struct StderrNotifier {
    quiet: bool,
}

impl StderrNotifier {
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Notifier for StderrNotifier {
    fn notify(&self, notification: Notification) {
        tracing::debug!(title = %notification.title, level = ?notification.level, "notification");
        if self.quiet {
            return;
        }
        let marker = match notification.level {
            NotificationLevel::Info => "*",
            NotificationLevel::Destructive => "!",
        };
        eprintln!(
            "{marker} {}: {}",
            notification.title, notification.description
        );
    }
}
