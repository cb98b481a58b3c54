//! The typed configuration document.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::ColorValue;
use crate::format::{Format, LoadError};
use crate::palette::{Palette, ResolveError};
use crate::validate::{self, ValidationError};

/// A plugin reference, by package name (e.g. `@tailwindcss/forms`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginRef(pub String);

/// Validated, immutable view of a theme configuration.
///
/// Built once by [`ConfigDocument::parse`] or [`ConfigDocument::load`] and
/// only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ConfigFile", into = "ConfigFile")]
pub struct ConfigDocument {
    /// Glob patterns of files scanned for class names
    pub content: Vec<String>,

    /// Color tokens from `theme.extend.colors`
    pub palette: Palette,

    /// Plugin references
    pub plugins: Vec<PluginRef>,
}

/// On-disk layout of the configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    content: Vec<String>,
    #[serde(default)]
    plugins: Vec<PluginRef>,
    #[serde(default)]
    theme: ThemeSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ThemeSection {
    #[serde(default)]
    extend: ExtendSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ExtendSection {
    #[serde(default)]
    colors: Palette,
}

impl From<ConfigFile> for ConfigDocument {
    fn from(file: ConfigFile) -> Self {
        Self {
            content: file.content,
            palette: file.theme.extend.colors,
            plugins: file.plugins,
        }
    }
}

impl From<ConfigDocument> for ConfigFile {
    fn from(doc: ConfigDocument) -> Self {
        Self {
            content: doc.content,
            plugins: doc.plugins,
            theme: ThemeSection {
                extend: ExtendSection {
                    colors: doc.palette,
                },
            },
        }
    }
}

impl ConfigDocument {
    /// Parse a configuration from source text in the given format.
    pub fn parse(source: &str, format: Format) -> Result<Self, LoadError> {
        let doc: ConfigDocument = match format {
            Format::Toml => toml::from_str(source).map_err(|e| format.malformed(e))?,
            Format::Json => serde_json::from_str(source).map_err(|e| format.malformed(e))?,
            Format::Yaml => serde_yaml::from_str(source).map_err(|e| format.malformed(e))?,
        };

        tracing::debug!(
            "Parsed {} config: {} content patterns, {} color groups, {} plugins",
            format,
            doc.content.len(),
            doc.palette.groups().len(),
            doc.plugins.len()
        );

        Ok(doc)
    }

    /// Load a configuration file, picking the format from its extension.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let format = Format::from_path(path)?;
        let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let doc = Self::parse(&source, format)?;
        tracing::info!("Loaded theme config from {}", path.display());
        Ok(doc)
    }

    /// Serialize back into the configuration layout.
    ///
    /// Parsing the output yields a document equal to `self`.
    pub fn to_source(&self, format: Format) -> Result<String, LoadError> {
        let file = ConfigFile::from(self.clone());
        match format {
            Format::Toml => {
                // TOML tables cannot repeat keys, so duplicates would be dropped
                if let Some(path) = self.palette.first_duplicate() {
                    return Err(format.serialize_failed(format!(
                        "duplicate key {path} cannot be written without losing entries"
                    )));
                }
                toml::to_string(&file).map_err(|e| format.serialize_failed(e))
            }
            Format::Json => {
                serde_json::to_string_pretty(&file).map_err(|e| format.serialize_failed(e))
            }
            Format::Yaml => serde_yaml::to_string(&file).map_err(|e| format.serialize_failed(e)),
        }
    }

    /// Check every invariant, collecting all violations.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::validate(self)
    }

    /// Look up a color by group name and shade key.
    pub fn resolve_color(&self, group: &str, shade: &str) -> Result<&ColorValue, ResolveError> {
        self.palette.resolve(group, shade)
    }
}
