mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use defaults::*;
use std::path::Path;
use tracing::debug;

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            output_dir: default_output_dir(),
            universe: default_universe(),
            paragraphs: default_paragraphs(),
            provider: Provider::default(),
            providers: ProvidersConfig::default(),
            retry: RetryConfig::default(),
            timeout_sec: default_timeout_sec(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load config if the file exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.paragraphs == 0 {
            return Err(ConfigError::Invalid {
                field: "paragraphs",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.retry.max_attempts == 0 {
            return Err(ConfigError::Invalid {
                field: "retry.max_attempts",
                reason: "must be at least 1".to_string(),
            });
        }
        // Used as a modulus for backoff jitter
        if self.retry.backoff_base_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "retry.backoff_base_ms",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.timeout_sec == 0 {
            return Err(ConfigError::Invalid {
                field: "timeout_sec",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.paragraphs, 9);
        assert_eq!(config.provider, Provider::ClaudeCli);
    }

    #[test]
    fn test_load_partial_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "universe: Middle-earth\nparagraphs: 6\nprovider: codex_cli\nretry:\n  max_attempts: 5"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.universe, "Middle-earth");
        assert_eq!(config.paragraphs, 6);
        assert_eq!(config.provider, Provider::CodexCli);
        assert_eq!(config.retry.max_attempts, 5);
        assert_eq!(config.retry.backoff_base_ms, 1000);
        assert_eq!(config.output_dir, std::path::PathBuf::from("stories"));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("lorey.yaml")).unwrap();
        assert_eq!(config.timeout_sec, 300);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::load(&dir.path().join("nope.yaml")),
            Err(ConfigError::ReadFile { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let config = Config {
            paragraphs: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "paragraphs",
                ..
            })
        ));

        let mut config = Config::default();
        config.retry.backoff_base_ms = 0;
        assert!(config.validate().is_err());
    }
}
