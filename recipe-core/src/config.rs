use std::path::PathBuf;

use shared::error::AppResult;

use crate::logger;

/// Default document file name, used for both the shared container file and
/// the bundled copy
pub const DEFAULT_DATA_FILE: &str = "RecipesData.json";

/// Recipe store configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | RECIPES_DATA_PATH | RecipesData.json | Primary (writable) document |
/// | RECIPES_FALLBACK_PATH | - | Read-only fallback document |
/// | LOG_LEVEL | info | Max tracing level |
/// | LOG_DIR | - | Directory for daily rolling log files |
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub data_path: PathBuf,
    pub fallback_path: Option<PathBuf>,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl StoreConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            data_path: get("RECIPES_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE)),
            fallback_path: get("RECIPES_FALLBACK_PATH").map(PathBuf::from),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: get("LOG_DIR"),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Load `.env`, read the configuration and install the logger
pub fn setup_environment() -> AppResult<StoreConfig> {
    dotenv::dotenv().ok();
    let config = StoreConfig::from_env();
    logger::init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref())?;
    tracing::info!(
        data = %config.data_path.display(),
        fallback = ?config.fallback_path,
        "recipe store configured"
    );
    Ok(config)
}
