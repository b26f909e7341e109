use gb_config::GradebookConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<GradebookConfig> {
    let mut config = GradebookConfig::load_with_dotenv()?;
    apply_overrides(&mut config, flags);
    tracing::debug!(database = %config.database.path, "configuration loaded");
    Ok(config)
}

fn apply_overrides(config: &mut GradebookConfig, flags: &GlobalFlags) {
    if let Some(path) = &flags.database {
        config.database.path.clone_from(path);
    }
}
