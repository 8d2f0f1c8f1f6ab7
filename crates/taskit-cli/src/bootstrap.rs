use anyhow::Context;
use taskit_config::TaskitConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then layered config, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<TaskitConfig> {
    let mut config = TaskitConfig::load_with_dotenv().context("failed to load taskit config")?;
    apply_flag_overrides(&mut config, flags);
    Ok(config)
}

fn apply_flag_overrides(config: &mut TaskitConfig, flags: &GlobalFlags) {
    if let Some(dir) = &flags.data_dir {
        config.storage.data_dir.clone_from(dir);
    }
}
