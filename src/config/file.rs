//! Combined configuration, loadable from JSON or YAML.

use serde::{Deserialize, Serialize};

use super::{FormatOptions, ScanOptions};

/// Options for both halves of the toolkit.
///
/// ```yaml
/// scan:
///   delimiters: [32, 10, 9]
/// format:
///   separator: "\t"
///   unsupported: fail
/// ```
///
/// Missing sections and fields fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanOptions,
    pub format: FormatOptions,
}

/// Errors while loading a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[cfg(feature = "json")]
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "yaml")]
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported config file extension: {0}")]
    UnknownExtension(String),
}

impl Config {
    pub fn new(scan: ScanOptions, format: FormatOptions) -> Self {
        Self { scan, format }
    }

    pub fn with_scan(mut self, scan: ScanOptions) -> Self {
        self.scan = scan;
        self
    }

    pub fn with_format(mut self, format: FormatOptions) -> Self {
        self.format = format;
        self
    }

    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Load a config file, choosing the parser by extension.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            #[cfg(feature = "json")]
            "json" => Self::from_json_str(&std::fs::read_to_string(path)?),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Self::from_yaml_str(&std::fs::read_to_string(path)?),
            _ => Err(ConfigError::UnknownExtension(path.display().to_string())),
        }
    }
}
