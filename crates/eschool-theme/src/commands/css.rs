//! Render the palette as CSS custom properties.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use eschool_theme_assets::{render_css, CssOptions};
use eschool_theme_config::ConfigDocument;

/// Run the css command.
pub async fn run(
    config: &Path,
    prefix: String,
    minify: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let doc = ConfigDocument::load(config)?;
    let css = render_css(&doc, &CssOptions { prefix, minify })?;

    match output {
        Some(path) => {
            fs::write(&path, &css)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} bytes to {}", css.len(), path.display());
        }
        None => print!("{}", css),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eschool_theme_config::Format;
    use tempfile::tempdir;

    #[tokio::test]
    async fn writes_css_file() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("theme.toml");
        let output = temp.path().join("theme.css");
        fs::write(&config, ConfigDocument::eschool().to_source(Format::Toml).unwrap()).unwrap();

        run(&config, "color".to_string(), false, Some(output.clone()))
            .await
            .unwrap();

        let css = fs::read_to_string(&output).unwrap();
        assert!(css.contains("--color-teacher-600: #9333ea;"));
    }
}
