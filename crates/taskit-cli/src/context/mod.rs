mod app_context;
mod notifier;

pub use app_context::AppContext;
pub use notifier::StderrNotifier;
