//! Configuration for extraction runs.
//!
//! The command-line tool always uses the defaults: output files go to the
//! current working directory with a `.csv` extension. Library users can
//! redirect output elsewhere.
//!
//! # Example
//!
//! ```rust
//! use chatjoins::config::ExtractConfig;
//!
//! let config = ExtractConfig::new().with_output_dir("/tmp/joins");
//! assert_eq!(
//!     config.output_path("MovieFans2023"),
//!     std::path::PathBuf::from("/tmp/joins/MovieFans2023.csv")
//! );
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where and how per-chat output files are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Directory for output files (default: current working directory)
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Output file extension without the dot (default: "csv")
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_extension() -> String {
    "csv".to_string()
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            extension: default_extension(),
        }
    }
}

impl ExtractConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the output file extension.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Path of the output file for a chat identifier.
    pub fn output_path(&self, identifier: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", identifier, self.extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ExtractConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.extension, "csv");
        assert_eq!(config.output_path("TestChat"), PathBuf::from("./TestChat.csv"));
    }

    #[test]
    fn test_config_builder() {
        let config = ExtractConfig::new()
            .with_output_dir("out")
            .with_extension("tsv");
        assert_eq!(config.output_path("ABC"), PathBuf::from("out/ABC.tsv"));
    }

    #[test]
    fn test_output_path_unnamed() {
        let config = ExtractConfig::new();
        assert!(
            config
                .output_path("UnnamedChat-1")
                .ends_with("UnnamedChat-1.csv")
        );
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: ExtractConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ExtractConfig::default());

        let config: ExtractConfig = serde_json::from_str(r#"{"output_dir": "exports"}"#).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("exports"));
        assert_eq!(config.extension, "csv");
    }
}
