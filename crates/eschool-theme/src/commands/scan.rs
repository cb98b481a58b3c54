//! List files matched by the content patterns.

use std::path::{Path, PathBuf};

use anyhow::Result;
use eschool_theme_assets::ContentScanner;
use eschool_theme_config::ConfigDocument;

/// Directory containing the config file, or `.` for a bare file name.
fn default_root(config: &Path) -> PathBuf {
    match config.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Run the scan command.
pub async fn run(config: &Path, root: Option<PathBuf>) -> Result<()> {
    let doc = ConfigDocument::load(config)?;
    if doc.content.is_empty() {
        tracing::warn!("No content patterns in {}", config.display());
    }

    let root = root.unwrap_or_else(|| default_root(config));
    let files = ContentScanner::new(root, &doc.content)?.scan()?;

    for file in &files {
        println!("{}", file);
    }
    tracing::info!("{} files matched", files.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eschool_theme_config::Format;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn scans_next_to_config() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("theme.toml");
        fs::write(&config, ConfigDocument::eschool().to_source(Format::Toml).unwrap()).unwrap();
        fs::create_dir_all(temp.path().join("templates")).unwrap();
        fs::write(temp.path().join("templates/base.html"), "").unwrap();

        assert!(run(&config, None).await.is_ok());
    }

    #[tokio::test]
    async fn fails_for_missing_root() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("theme.toml");
        fs::write(&config, ConfigDocument::eschool().to_source(Format::Toml).unwrap()).unwrap();

        let result = run(&config, Some(temp.path().join("missing"))).await;

        assert!(result.is_err());
    }

    #[test]
    fn root_defaults_to_config_directory() {
        assert_eq!(default_root(Path::new("theme.toml")), PathBuf::from("."));
        assert_eq!(
            default_root(Path::new("project/theme.toml")),
            PathBuf::from("project")
        );
    }
}
