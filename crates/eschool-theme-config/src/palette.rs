//! Palette groups and color lookup.

use std::collections::HashSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::{ColorValue, ShadeKey};

/// A named set of related shades (e.g. `primary`, `student`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteGroup {
    /// Group name
    pub name: String,

    /// Shades in declaration order. Duplicate keys are kept so that
    /// validation can report them.
    pub shades: Vec<(ShadeKey, ColorValue)>,
}

impl PaletteGroup {
    pub fn new(name: impl Into<String>, shades: Vec<(ShadeKey, ColorValue)>) -> Self {
        Self {
            name: name.into(),
            shades,
        }
    }

    /// Look up a shade. The first declaration wins when a key is repeated.
    pub fn shade(&self, key: &str) -> Option<&ColorValue> {
        self.shades
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v)
    }
}

/// The color-token table found under `theme.extend.colors`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    groups: Vec<PaletteGroup>,
}

/// Lookup failure from [`Palette::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("Color group not found: {0}")]
    UnknownGroup(String),

    #[error("Shade {shade} not found in color group {group}")]
    UnknownShade { group: String, shade: String },
}

impl Palette {
    pub fn new(groups: Vec<PaletteGroup>) -> Self {
        Self { groups }
    }

    /// Groups in declaration order.
    pub fn groups(&self) -> &[PaletteGroup] {
        &self.groups
    }

    pub fn group(&self, name: &str) -> Option<&PaletteGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Shades of a group in declaration order.
    pub fn shades(&self, group: &str) -> Option<&[(ShadeKey, ColorValue)]> {
        self.group(group).map(|g| g.shades.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Resolve a color by group name and shade key.
    pub fn resolve(&self, group: &str, shade: &str) -> Result<&ColorValue, ResolveError> {
        let found = self
            .group(group)
            .ok_or_else(|| ResolveError::UnknownGroup(group.to_string()))?;

        found.shade(shade).ok_or_else(|| ResolveError::UnknownShade {
            group: group.to_string(),
            shade: shade.to_string(),
        })
    }

    /// Path of the first repeated group name or shade key, if any.
    pub fn first_duplicate(&self) -> Option<String> {
        let mut groups = HashSet::new();
        for group in &self.groups {
            if !groups.insert(group.name.as_str()) {
                return Some(format!("colorPalette.{}", group.name));
            }
            let mut shades = HashSet::new();
            for (key, _) in &group.shades {
                if !shades.insert(key) {
                    return Some(format!("colorPalette.{}.{}", group.name, key));
                }
            }
        }
        None
    }

    /// Iterate every `(group, shade, color)` triple in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ShadeKey, &ColorValue)> {
        self.groups.iter().flat_map(|g| {
            g.shades
                .iter()
                .map(move |(key, value)| (g.name.as_str(), key, value))
        })
    }
}

// Groups and shades are written as maps but kept as ordered lists so that
// declaration order and duplicate keys survive loading.

struct Shades(Vec<(ShadeKey, ColorValue)>);

impl<'de> Deserialize<'de> for Shades {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ShadesVisitor;

        impl<'de> Visitor<'de> for ShadesVisitor {
            type Value = Shades;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of shade keys to color strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Shades, A::Error> {
                let mut shades = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<ShadeKey, ColorValue>()? {
                    shades.push((key, value));
                }
                Ok(Shades(shades))
            }
        }

        deserializer.deserialize_map(ShadesVisitor)
    }
}

impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PaletteVisitor;

        impl<'de> Visitor<'de> for PaletteVisitor {
            type Value = Palette;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of color group names to shade maps")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Palette, A::Error> {
                let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, Shades(shades))) = map.next_entry::<String, Shades>()? {
                    groups.push(PaletteGroup { name, shades });
                }
                Ok(Palette { groups })
            }
        }

        deserializer.deserialize_map(PaletteVisitor)
    }
}

struct ShadesRef<'a>(&'a [(ShadeKey, ColorValue)]);

impl Serialize for ShadesRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.name, &ShadesRef(&group.shades))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Palette {
        serde_json::from_str(
            r##"{
                "primary": { "50": "#eff6ff", "600": "#2563eb" },
                "parent": { "600": "#16a34a" }
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn keeps_declaration_order() {
        let palette = sample();
        let names: Vec<_> = palette.groups().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["primary", "parent"]);

        let entries: Vec<_> = palette
            .entries()
            .map(|(g, s, c)| format!("{g}.{s}={c}"))
            .collect();
        assert_eq!(
            entries,
            vec![
                "primary.50=#eff6ff",
                "primary.600=#2563eb",
                "parent.600=#16a34a"
            ]
        );
    }

    #[test]
    fn resolves_known_color() {
        let palette = sample();
        assert_eq!(palette.resolve("parent", "600").unwrap().as_str(), "#16a34a");
        assert_eq!(palette.shades("primary").map(|s| s.len()), Some(2));
        assert!(palette.shades("student").is_none());
    }

    #[test]
    fn reports_unknown_group_and_shade() {
        let palette = sample();

        assert_eq!(
            palette.resolve("nonexistent", "500"),
            Err(ResolveError::UnknownGroup("nonexistent".to_string()))
        );
        assert_eq!(
            palette.resolve("primary", "900"),
            Err(ResolveError::UnknownShade {
                group: "primary".to_string(),
                shade: "900".to_string(),
            })
        );
    }

    #[test]
    fn keeps_duplicate_shades() {
        let palette: Palette =
            serde_json::from_str(r##"{ "primary": { "50": "#000000", "50": "#ffffff" } }"##)
                .unwrap();

        let group = palette.group("primary").unwrap();
        assert_eq!(group.shades.len(), 2);
        assert_eq!(group.shade("50").unwrap().as_str(), "#000000");
    }

    #[test]
    fn finds_first_duplicate() {
        assert_eq!(sample().first_duplicate(), None);

        let shades: Palette =
            serde_json::from_str(r##"{ "p": { "1": "#111111", "50": "#000000", "50": "#ffffff" } }"##)
                .unwrap();
        assert_eq!(shades.first_duplicate(), Some("colorPalette.p.50".to_string()));

        let groups: Palette =
            serde_json::from_str(r##"{ "p": { "1": "#111111" }, "p": { "2": "#222222" } }"##)
                .unwrap();
        assert_eq!(groups.first_duplicate(), Some("colorPalette.p".to_string()));
    }

    #[test]
    fn rejects_flat_color_group() {
        let result: Result<Palette, _> = serde_json::from_str(r##"{ "brand": "#2563eb" }"##);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_string_color() {
        let result: Result<Palette, _> = serde_json::from_str(r#"{ "brand": { "500": 42 } }"#);
        assert!(result.is_err());
    }
}
