use std::{io, path::PathBuf};

use thiserror::Error;

/// Error type for ddoc-config operations
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Configuration error: {0}")]
  Config(String),

  #[error("Template error: {0}")]
  Template(String),

  #[error("Failed to access {}: {source}", path.display())]
  Io { path: PathBuf, source: io::Error },

  #[error("Failed to parse JSON config from {}: {source}", path.display())]
  Serde {
    path:   PathBuf,
    source: serde_json::Error,
  },

  #[error("Failed to parse TOML config from {}: {source}", path.display())]
  Toml {
    path:   PathBuf,
    source: toml::de::Error,
  },

  #[error("Invalid {kind}: '{value}'")]
  InvalidValue { kind: &'static str, value: String },
}
