use std::path::Path;

use thiserror::Error;

use crate::FaultFrameConfig;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The allow-list and deny-list both name the same status code
    #[error("status code {0} appears in both handle_only_status_codes and ignore_status_codes")]
    ConflictingStatusLists(u16),
}

impl FaultFrameConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, TOML parsing fails,
    /// or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let config: Self = toml::from_str(&raw).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if a status code appears in both the allow-list
    /// and the deny-list
    pub fn validate(&self) -> Result<(), ConfigError> {
        for code in &self.handle_only_status_codes {
            if self.ignore_status_codes.contains(code) {
                return Err(ConfigError::ConflictingStatusLists(*code));
            }
        }

        Ok(())
    }
}
