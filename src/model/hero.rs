use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Key of a text resource (hero name, description, UI labels).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringRes(Arc<str>);

/// Key of an image resource. In the terminal an image resolves to a short glyph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawableRes(Arc<str>);

impl StringRes {
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self(key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }
}

impl DrawableRes {
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self(key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StringRes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for DrawableRes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of the roster.
///
/// Carries only resource handles; the text and glyphs are resolved through a
/// [`ResourceTable`](super::ResourceTable) at render time. Two heroes with the
/// same handles are allowed, a hero is identified by its position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub name: StringRes,
    pub description: StringRes,
    pub image: DrawableRes,
}

impl Hero {
    pub fn new(name: &str, description: &str, image: &str) -> Self {
        Self {
            name: StringRes::new(name),
            description: StringRes::new(description),
            image: DrawableRes::new(image),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_deserialize_from_plain_strings() {
        let hero: Hero = toml::from_str(
            r#"
name = "hero1"
description = "description1"
image = "android_superhero1"
"#,
        )
        .unwrap();
        assert_eq!(hero, Hero::new("hero1", "description1", "android_superhero1"));
        assert_eq!(hero.image.key(), "android_superhero1");
    }
}
