//! Invariant checks for a loaded document.

use std::collections::HashSet;
use std::fmt;

use crate::content::compile_pattern;
use crate::document::ConfigDocument;

/// A violated invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Color is not `#` followed by six hex digits
    InvalidHex(String),
    /// Shade key appears more than once within a group
    DuplicateShade,
    /// Group name appears more than once in the palette
    DuplicateGroup,
    /// No content patterns at all
    EmptyContent,
    /// A content pattern is the empty string
    EmptyPattern,
    /// A content pattern does not compile as a glob
    InvalidPattern(String),
    /// A group or shade name cannot be used in a CSS custom property name
    InvalidName(String),
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHex(value) => write!(f, "{value:?} is not a valid hex color"),
            Self::DuplicateShade => f.write_str("duplicate shade key"),
            Self::DuplicateGroup => f.write_str("duplicate color group"),
            Self::EmptyContent => f.write_str("no content patterns to scan"),
            Self::EmptyPattern => f.write_str("content pattern is empty"),
            Self::InvalidPattern(message) => write!(f, "invalid content pattern: {message}"),
            Self::InvalidName(name) => write!(
                f,
                "{name:?} is not a valid name (use letters, digits, '-' and '_')"
            ),
        }
    }
}

/// A single field-level problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Field path, e.g. `colorPalette.primary.500`
    pub path: String,
    pub rule: Rule,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.rule)
    }
}

/// One or more invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} validation error(s): {}", .diagnostics.len(), summarize(.diagnostics))]
pub struct ValidationError {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationError {
    /// Whether any diagnostic was reported for `path`.
    pub fn has_path(&self, path: &str) -> bool {
        self.diagnostics.iter().any(|d| d.path == path)
    }
}

fn summarize(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Check a document against every invariant.
///
/// All violations are collected; nothing is corrected.
pub fn validate(doc: &ConfigDocument) -> Result<(), ValidationError> {
    let mut diagnostics = Vec::new();

    check_content(&doc.content, &mut diagnostics);
    check_palette(doc, &mut diagnostics);

    if diagnostics.is_empty() {
        Ok(())
    } else {
        tracing::debug!("Validation found {} problem(s)", diagnostics.len());
        Err(ValidationError { diagnostics })
    }
}

fn check_content(patterns: &[String], out: &mut Vec<Diagnostic>) {
    if patterns.is_empty() {
        out.push(Diagnostic {
            path: "contentPatterns".to_string(),
            rule: Rule::EmptyContent,
        });
        return;
    }

    for (i, pattern) in patterns.iter().enumerate() {
        let path = format!("contentPatterns[{i}]");
        if pattern.trim().is_empty() {
            out.push(Diagnostic {
                path,
                rule: Rule::EmptyPattern,
            });
        } else if let Err(err) = compile_pattern(pattern) {
            out.push(Diagnostic {
                path,
                rule: Rule::InvalidPattern(err.kind().to_string()),
            });
        }
    }
}

fn check_palette(doc: &ConfigDocument, out: &mut Vec<Diagnostic>) {
    let mut seen_groups = HashSet::new();

    for group in doc.palette.groups() {
        let group_path = format!("colorPalette.{}", group.name);
        if !is_valid_name(&group.name) {
            out.push(Diagnostic {
                path: group_path.clone(),
                rule: Rule::InvalidName(group.name.clone()),
            });
        }
        if !seen_groups.insert(group.name.as_str()) {
            out.push(Diagnostic {
                path: group_path.clone(),
                rule: Rule::DuplicateGroup,
            });
        }

        let mut seen_shades = HashSet::new();
        for (key, value) in &group.shades {
            let path = format!("{group_path}.{key}");
            if !is_valid_name(key.as_str()) {
                out.push(Diagnostic {
                    path: path.clone(),
                    rule: Rule::InvalidName(key.to_string()),
                });
            }
            if !seen_shades.insert(key) {
                out.push(Diagnostic {
                    path: path.clone(),
                    rule: Rule::DuplicateShade,
                });
            }
            if !value.is_valid_hex() {
                out.push(Diagnostic {
                    path,
                    rule: Rule::InvalidHex(value.to_string()),
                });
            }
        }
    }
}

/// Whether `name` can be embedded in a CSS custom property name as-is.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
