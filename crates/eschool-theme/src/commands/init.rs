//! Write the default eSchool theme config.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use eschool_theme_config::{ConfigDocument, Format};

/// Run the init command.
pub async fn run(config: &Path, format: Option<Format>, yes: bool) -> Result<()> {
    if config.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config.display()
        );
        return Ok(());
    }

    let format = match format {
        Some(format) => format,
        None => Format::from_path(config)?,
    };

    let source = ConfigDocument::eschool().to_source(format)?;

    if let Some(parent) = config.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(config, source).with_context(|| format!("Failed to write {}", config.display()))?;

    tracing::info!("Created {} ({})", config.display(), format);
    tracing::info!("Run 'eschool-theme check' to validate it.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn writes_loadable_default() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("theme.yaml");

        run(&path, None, false).await.unwrap();

        let doc = ConfigDocument::load(&path).unwrap();
        assert_eq!(doc, ConfigDocument::eschool());
    }

    #[tokio::test]
    async fn keeps_existing_file_without_yes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("theme.toml");
        fs::write(&path, "# mine").unwrap();

        run(&path, None, false).await.unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine");

        run(&path, None, true).await.unwrap();
        assert!(ConfigDocument::load(&path).is_ok());
    }

    #[tokio::test]
    async fn explicit_format_overrides_extension() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("theme.conf");

        run(&path, Some(Format::Json), false).await.unwrap();

        let source = fs::read_to_string(&path).unwrap();
        let doc = ConfigDocument::parse(&source, Format::Json).unwrap();
        assert_eq!(doc, ConfigDocument::eschool());
    }
}
