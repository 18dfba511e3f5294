//! Configuration structures for batch runs and output.

use serde::{Deserialize, Serialize};

/// Main configuration for irsx.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IrsxConfig {
    /// Batch processing configuration.
    pub batch: BatchConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Batch processing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Report progress every N attempted documents.
    pub progress_interval: usize,

    /// File extensions picked up by the batch command (lower-case, no dot).
    pub file_extensions: Vec<String>,

    /// Keep going when a file cannot be read.
    pub continue_on_error: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            progress_interval: 100,
            file_extensions: vec!["xml".to_string()],
            continue_on_error: true,
        }
    }
}

/// Output format for extracted records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Text,
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format.
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl IrsxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }

    /// Whether a path has one of the configured batch extensions.
    pub fn accepts_extension(&self, path: &std::path::Path) -> bool {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        self.batch.file_extensions.iter().any(|e| *e == ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: IrsxConfig =
            serde_json::from_str(r#"{"batch": {"progress_interval": 10}}"#).unwrap();
        assert_eq!(config.batch.progress_interval, 10);
        assert_eq!(config.batch.file_extensions, vec!["xml".to_string()]);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = IrsxConfig::default();
        config.output.pretty = true;
        config.output.format = OutputFormat::Csv;
        config.save(&path).unwrap();

        assert_eq!(IrsxConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_accepts_extension_ignores_case() {
        let config = IrsxConfig::default();
        assert!(config.accepts_extension(Path::new("202301.XML")));
        assert!(!config.accepts_extension(Path::new("bundle.zip")));
        assert!(!config.accepts_extension(Path::new("README")));
    }
}
