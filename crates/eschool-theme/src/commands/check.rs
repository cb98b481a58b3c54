//! Load and validate the theme config.

use std::path::Path;

use anyhow::{bail, Result};
use eschool_theme_config::ConfigDocument;

/// Load `config` and report every validation problem.
///
/// Returns the document only when it is free of problems.
pub fn check(config: &Path) -> Result<ConfigDocument> {
    let doc = ConfigDocument::load(config)?;

    if let Err(err) = doc.validate() {
        for diagnostic in &err.diagnostics {
            tracing::error!("{}", diagnostic);
        }
        bail!(
            "{} has {} problem(s)",
            config.display(),
            err.diagnostics.len()
        );
    }

    tracing::info!(
        "{} is valid: {} content patterns, {} color groups, {} plugins",
        config.display(),
        doc.content.len(),
        doc.palette.groups().len(),
        doc.plugins.len()
    );

    Ok(doc)
}

/// Run the check command.
pub async fn run(config: &Path) -> Result<()> {
    check(config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn accepts_valid_config() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("theme.toml");
        fs::write(&path, ConfigDocument::eschool().to_source(Default::default()).unwrap())
            .unwrap();

        assert!(check(&path).is_ok());
    }

    #[test]
    fn fails_on_invalid_color() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("theme.json");
        fs::write(
            &path,
            r#"{ "content": ["./templates/**/*.html"],
                 "theme": { "extend": { "colors": { "primary": { "500": "blue" } } } } }"#,
        )
        .unwrap();

        let err = check(&path).unwrap_err();
        assert!(err.to_string().contains("1 problem(s)"));
    }

    #[test]
    fn fails_on_malformed_config() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("theme.json");
        fs::write(&path, r#"{ "plugins": [] }"#).unwrap();

        assert!(check(&path).is_err());
    }
}
