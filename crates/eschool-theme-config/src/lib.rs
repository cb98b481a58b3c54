//! Typed theme configuration for the eSchool style build.
//!
//! This crate loads the declarative theme configuration (content patterns,
//! color palette extension and plugin list) from TOML, JSON or YAML, checks
//! it for invariant violations and answers color lookups.

pub mod color;
pub mod content;
pub mod defaults;
pub mod document;
pub mod format;
pub mod palette;
pub mod validate;

pub use color::{ColorValue, ShadeKey};
pub use content::compile_pattern;
pub use document::{ConfigDocument, PluginRef};
pub use format::{Format, LoadError};
pub use palette::{Palette, PaletteGroup, ResolveError};
pub use validate::{is_valid_name, Diagnostic, Rule, ValidationError};
