//! Config loading, discovery, and validation.

use super::model::Config;
use crate::error::{CadetError, Result};
use std::path::Path;

/// File name looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "cadet.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(CadetError::UserError)` - The file could not be read
    /// * `Err(CadetError::ContentError)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CadetError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the effective config.
    ///
    /// An explicit path must exist. Otherwise `cadet.yaml` in `dir` is used
    /// when present, and defaults apply when it is not.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using discovered config");
            Self::load(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml)
                .map_err(|e| CadetError::ContentError(format!("failed to parse config YAML: {}", e)))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `placeholder_marker` must be non-empty
    /// - `structural_keywords` must be non-empty, and each entry a single word
    pub fn validate(&self) -> Result<()> {
        if self.placeholder_marker.trim().is_empty() {
            return Err(CadetError::ContentError(
                "config validation failed: placeholder_marker must be non-empty".to_string(),
            ));
        }

        if self.structural_keywords.is_empty() {
            return Err(CadetError::ContentError(
                "config validation failed: structural_keywords must list at least one keyword"
                    .to_string(),
            ));
        }

        for keyword in &self.structural_keywords {
            if keyword.is_empty() || keyword.chars().any(char::is_whitespace) {
                return Err(CadetError::ContentError(format!(
                    "config validation failed: structural_keywords entries must be single words (found '{}')",
                    keyword
                )));
            }
        }

        Ok(())
    }
}
