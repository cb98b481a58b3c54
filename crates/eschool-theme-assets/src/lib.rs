//! CSS custom properties and content scanning for eSchool theme configs.
//!
//! Turns a loaded [`ConfigDocument`](eschool_theme_config::ConfigDocument) into
//! what the style generator consumes: a `:root` block of color variables and
//! the set of project files matched by the content patterns.

pub mod css;
pub mod scan;

pub use css::{render_css, CssError, CssOptions};
pub use scan::{ContentScanner, ScanError};
