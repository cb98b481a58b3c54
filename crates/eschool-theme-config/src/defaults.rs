//! Built-in eSchool theme configuration.

use crate::color::{ColorValue, ShadeKey};
use crate::document::ConfigDocument;
use crate::palette::{Palette, PaletteGroup};

/// Files scanned for class names: project templates, static scripts,
/// per-app templates and Python sources.
const CONTENT: &[&str] = &[
    "./templates/**/*.html",
    "./static/**/*.js",
    "./*/templates/**/*.html",
    "./**/*.py",
];

/// Brand colors followed by one set per user role.
const COLORS: &[(&str, &[(&str, &str)])] = &[
    (
        "primary",
        &[
            ("50", "#eff6ff"),
            ("500", "#3b82f6"),
            ("600", "#2563eb"),
            ("700", "#1d4ed8"),
        ],
    ),
    ("student", &[("600", "#2563eb"), ("700", "#1d4ed8")]),
    ("parent", &[("600", "#16a34a"), ("700", "#15803d")]),
    ("teacher", &[("600", "#9333ea"), ("700", "#7e22ce")]),
    ("finance", &[("600", "#0d9488"), ("700", "#0f766e")]),
];

impl ConfigDocument {
    /// The eSchool application's theme configuration.
    pub fn eschool() -> Self {
        let groups = COLORS
            .iter()
            .map(|(name, shades)| {
                let shades = shades
                    .iter()
                    .map(|(key, value)| (ShadeKey::from(*key), ColorValue::from(*value)))
                    .collect();
                PaletteGroup::new(*name, shades)
            })
            .collect();

        Self {
            content: CONTENT.iter().map(|p| p.to_string()).collect(),
            palette: Palette::new(groups),
            plugins: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_role_groups() {
        let doc = ConfigDocument::eschool();
        let names: Vec<_> = doc.palette.groups().iter().map(|g| g.name.as_str()).collect();

        assert_eq!(names, ["primary", "student", "parent", "teacher", "finance"]);
        assert_eq!(doc.content.len(), 4);
        assert!(doc.plugins.is_empty());
    }

    #[test]
    fn resolves_primary_600() {
        let doc = ConfigDocument::eschool();

        assert_eq!(
            doc.resolve_color("primary", "600").unwrap().as_str(),
            "#2563eb"
        );
        assert!(doc.resolve_color("nonexistent", "500").is_err());
    }
}
