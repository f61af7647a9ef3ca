use std::path::PathBuf;

use anyhow::{Context, Result};

use patente_lib::config::AppConfig;
use patente_lib::explain::{explain_or_placeholder, GeminiExplainer};
use patente_lib::vocabulary::VocabularyStore;

/// Shared application state for CLI commands
pub struct App {
    pub config: AppConfig,
    pub store: VocabularyStore,
}

impl App {
    /// Load config and open the store, `data_dir` overriding the configured one
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let config = AppConfig::load().context("Failed to load configuration")?;

        let data_dir = match data_dir {
            Some(dir) => dir,
            None => config
                .resolve_data_dir()
                .context("Failed to get data directory")?,
        };
        log::debug!("Using data directory {:?}", data_dir);

        Ok(Self {
            store: VocabularyStore::new(data_dir),
            config,
        })
    }

    /// Fetch an explanation for `term`, blocking until it arrives.
    /// Service failures come back as a placeholder text.
    pub fn explain(&self, term: &str) -> Result<String> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;
        let explainer = GeminiExplainer::from_config(&self.config.explain);
        Ok(runtime.block_on(explain_or_placeholder(&explainer, term)))
    }
}
