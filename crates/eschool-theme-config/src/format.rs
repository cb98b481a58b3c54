//! Source formats and load errors.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Supported configuration source formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Toml,
    Json,
    Yaml,
}

impl Format {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        ext.parse()
            .map_err(|_| LoadError::UnsupportedFormat(path.display().to_string()))
    }

    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    pub(crate) fn malformed(self, err: impl fmt::Display) -> LoadError {
        LoadError::Malformed {
            format: self,
            message: err.to_string(),
        }
    }

    pub(crate) fn serialize_failed(self, err: impl fmt::Display) -> LoadError {
        LoadError::Serialize {
            format: self,
            message: err.to_string(),
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!("unknown config format: {other}")),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toml => f.write_str("TOML"),
            Self::Json => f.write_str("JSON"),
            Self::Yaml => f.write_str("YAML"),
        }
    }
}

/// Errors that can occur when loading or writing a configuration.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed {format} config: {message}")]
    Malformed { format: Format, message: String },

    #[error("Unsupported config format: {0} (expected .toml, .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("Failed to serialize {format} config: {message}")]
    Serialize { format: Format, message: String },
}
