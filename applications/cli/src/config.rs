/// Application configuration
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tunebar_catalog::CatalogConfig;
use tunebar_playback::PlaybackConfig;

/// Config file read from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "tunebar.toml";

/// Environment variable prefix (`TUNEBAR_CATALOG__API_KEY`, ...)
pub const ENV_PREFIX: &str = "TUNEBAR";

/// Largest page size the search endpoint accepts
const MAX_SEARCH_RESULTS: u32 = 50;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub playback: PlaybackConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./tunebar-data")
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; the default `tunebar.toml` is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with TUNEBAR_)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_SEARCH_RESULTS).contains(&self.catalog.max_results) {
            return Err(CliError::Config(format!(
                "catalog.max_results must be between 1 and {MAX_SEARCH_RESULTS}"
            )));
        }

        if self.catalog.timeout_secs == 0 {
            return Err(CliError::Config(
                "catalog.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.playback.volume > 100 {
            return Err(CliError::Config(
                "playback.volume must be between 0 and 100".to_string(),
            ));
        }

        if self.playback.history_size == 0 {
            return Err(CliError::Config(
                "playback.history_size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        config.validate().unwrap();

        assert_eq!(config.storage.data_dir, PathBuf::from("./tunebar-data"));
        assert_eq!(config.catalog.max_results, 12);
        assert_eq!(config.playback.volume, 70);
        assert_eq!(config.playback.history_size, 50);
    }

    #[test]
    fn loads_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tunebar.toml");
        fs::write(
            &path,
            r#"
[catalog]
api_key = "from-file"
max_results = 20

[playback]
volume = 40
repeat = "all"
"#,
        )
        .unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();

        assert_eq!(config.catalog.api_key.as_deref(), Some("from-file"));
        assert_eq!(config.catalog.max_results, 20);
        assert_eq!(config.catalog.timeout_secs, 10);
        assert_eq!(config.playback.volume, 40);
        assert_eq!(config.playback.repeat, tunebar_playback::RepeatMode::All);
        assert_eq!(config.playback.history_size, 50);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load(Some(&dir.path().join("nope.toml")));

        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("not found")));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let mut config = AppConfig::default();
        config.catalog.max_results = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.catalog.max_results = 51;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.playback.volume = 101;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.playback.history_size = 0;
        assert!(config.validate().is_err());
    }
}
