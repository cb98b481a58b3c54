//! Palette rendering as CSS custom properties.

use eschool_theme_config::{is_valid_name, ConfigDocument, ValidationError};

/// Options for [`render_css`].
#[derive(Debug, Clone)]
pub struct CssOptions {
    /// Variable name prefix (`--{prefix}-{group}-{shade}`)
    pub prefix: String,

    /// Minify output with lightningcss
    pub minify: bool,
}

impl Default for CssOptions {
    fn default() -> Self {
        Self {
            prefix: "color".to_string(),
            minify: false,
        }
    }
}

/// Errors that can occur when rendering CSS.
#[derive(Debug, thiserror::Error)]
pub enum CssError {
    #[error("Refusing to render invalid palette: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Invalid custom property prefix: {0:?}")]
    InvalidPrefix(String),

    #[error("CSS minify error: {0}")]
    Minify(String),
}

/// Custom property name for a palette entry.
pub fn var_name(prefix: &str, group: &str, shade: &str) -> String {
    format!("--{prefix}-{group}-{shade}")
}

/// Render the palette as a single `:root` rule, one declaration per shade
/// in declaration order.
pub fn render_css(doc: &ConfigDocument, options: &CssOptions) -> Result<String, CssError> {
    // Names and colors are checked here so nothing is emitted unescaped
    doc.validate()?;
    if !is_valid_name(&options.prefix) {
        return Err(CssError::InvalidPrefix(options.prefix.clone()));
    }

    let mut css = String::from(":root {\n");
    for (group, shade, color) in doc.palette.entries() {
        css.push_str(&format!(
            "  {}: {};\n",
            var_name(&options.prefix, group, shade.as_str()),
            color
        ));
    }
    css.push_str("}\n");

    if options.minify {
        css = minify_css(&css)?;
    }

    tracing::debug!(
        "Rendered {} color variables",
        doc.palette.entries().count()
    );

    Ok(css)
}

fn minify_css(css: &str) -> Result<String, CssError> {
    use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

    let stylesheet = StyleSheet::parse(css, ParserOptions::default())
        .map_err(|e| CssError::Minify(format!("parse: {}", e)))?;

    let minified = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| CssError::Minify(format!("print: {}", e)))?;

    Ok(minified.code)
}
