use anyhow::Context;
use gb_config::GradebookConfig;
use gb_db::service::GradeService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: GradeService,
    pub config: GradebookConfig,
}

impl AppContext {
    /// Open the configured store, creating the schema on first use.
    pub async fn init(config: GradebookConfig) -> anyhow::Result<Self> {
        let service = GradeService::new_local(&config.database.path)
            .await
            .with_context(|| format!("cannot open database '{}'", config.database.path))?;
        Ok(Self { service, config })
    }
}
