//! Resource lookup for string and image handles.

use std::collections::HashMap;

use super::hero::{DrawableRes, StringRes};

const BUILTIN_STRINGS: &[(&str, &str)] = &[
    ("app_name", "Superheroes"),
    ("loading", "Loading"),
    ("loading_failed", "Failed to load heroes"),
    ("connection_error", "Connection error"),
    ("retry", "Retry"),
    ("hero1", "Nick the Night and Day"),
    ("description1", "The Jetpack Hero"),
    ("hero2", "Reality Protector"),
    ("description2", "Understands the fabric of reality"),
    ("hero3", "Andromeda"),
    ("description3", "Communicates with aliens"),
    ("hero4", "Electromaster"),
    ("description4", "Controls electricity"),
    ("hero5", "Magnetic Man"),
    ("description5", "Controls magnetic fields"),
    ("hero6", "Dark Light"),
    ("description6", "Controls the light and the dark in equal measure"),
];

const BUILTIN_DRAWABLES: &[(&str, &str)] = &[
    ("android_superhero1", "🚀"),
    ("android_superhero2", "🌀"),
    ("android_superhero3", "👽"),
    ("android_superhero4", "⚡"),
    ("android_superhero5", "🧲"),
    ("android_superhero6", "🌗"),
    ("loading_img", "⏳"),
    ("ic_connection_error", "⚠"),
];

/// Glyph used for an image key that has no entry.
const MISSING_DRAWABLE: &str = "▢";

/// Maps resource handles to displayable text.
///
/// Unknown string keys resolve to the key itself so a catalogue can carry
/// literal names without registering them.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceTable {
    strings: HashMap<String, String>,
    drawables: HashMap<String, String>,
}

impl ResourceTable {
    pub fn builtin() -> Self {
        let strings = BUILTIN_STRINGS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let drawables = BUILTIN_DRAWABLES
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { strings, drawables }
    }

    /// Overlay user supplied entries on top of the current table.
    pub fn with_overrides(
        mut self,
        strings: &HashMap<String, String>,
        drawables: &HashMap<String, String>,
    ) -> Self {
        self.strings
            .extend(strings.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.drawables
            .extend(drawables.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    pub fn string<'a>(&'a self, res: &'a StringRes) -> &'a str {
        self.strings
            .get(res.key())
            .map(String::as_str)
            .unwrap_or_else(|| res.key())
    }

    /// Lookup by raw key, used for UI labels.
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn drawable(&self, res: &DrawableRes) -> &str {
        self.drawable_key(res.key())
    }

    pub fn drawable_key(&self, key: &str) -> &str {
        self.drawables
            .get(key)
            .map(String::as_str)
            .unwrap_or(MISSING_DRAWABLE)
    }
}

impl Default for ResourceTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_resolves_hero_strings() {
        let table = ResourceTable::builtin();
        assert_eq!(table.string(&StringRes::new("hero3")), "Andromeda");
        assert_eq!(table.drawable(&DrawableRes::new("android_superhero4")), "⚡");
    }

    #[test]
    fn unknown_string_falls_back_to_key() {
        let table = ResourceTable::builtin();
        assert_eq!(table.string(&StringRes::new("Captain Literal")), "Captain Literal");
        assert_eq!(table.drawable(&DrawableRes::new("nope")), MISSING_DRAWABLE);
    }

    #[test]
    fn overrides_replace_and_extend() {
        let strings = HashMap::from([
            ("app_name".to_string(), "Heroes".to_string()),
            ("hero7".to_string(), "Seventh".to_string()),
        ]);
        let drawables = HashMap::from([("android_superhero7".to_string(), "7".to_string())]);
        let table = ResourceTable::builtin().with_overrides(&strings, &drawables);
        assert_eq!(table.label("app_name"), "Heroes");
        assert_eq!(table.string(&StringRes::new("hero7")), "Seventh");
        assert_eq!(table.drawable_key("android_superhero7"), "7");
        assert_eq!(table.label("retry"), "Retry");
    }
}
