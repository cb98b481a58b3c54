//! Resolve a single palette color.

use std::path::Path;

use anyhow::Result;
use eschool_theme_assets::css::var_name;
use eschool_theme_config::ConfigDocument;

/// Run the resolve command.
///
/// With a `var_prefix`, prints a `var()` reference to the custom property
/// instead of the raw color.
pub async fn run(config: &Path, group: &str, shade: &str, var_prefix: Option<&str>) -> Result<()> {
    let doc = ConfigDocument::load(config)?;
    let color = doc.resolve_color(group, shade)?;

    if !color.is_valid_hex() {
        tracing::warn!("{}.{} is not a valid hex color: {}", group, shade, color);
    }

    match var_prefix {
        Some(prefix) => println!("var({})", var_name(prefix, group, shade)),
        None => println!("{}", color),
    }

    Ok(())
}
