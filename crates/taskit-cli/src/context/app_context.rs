use std::sync::Arc;

use anyhow::Context;
use taskit_config::TaskitConfig;
use taskit_store::notify::Notifier;
use taskit_store::service::TodoService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: TodoService,
    pub config: TaskitConfig,
}

impl AppContext {
    /// Open the file store under the configured data directory.
    pub fn init(config: TaskitConfig, notifier: Arc<dyn Notifier>) -> anyhow::Result<Self> {
        let service = TodoService::open_local(&config, notifier)
            .context("failed to open taskit data directory")?;
        Ok(Self { service, config })
    }

    /// Wrap an existing service; used by tests.
    #[cfg(test)]
    pub fn from_service(service: TodoService) -> Self {
        Self {
            service,
            config: TaskitConfig::default(),
        }
    }
}
