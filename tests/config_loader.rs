mod common;

use std::path::PathBuf;

use common::temp_file;
use herolist::config::{Config, ConfigError, ThemeName};
use herolist::ui::animation::CascadeSpec;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.ui.tick_rate_ms, 33);
    assert_eq!(config.ui.theme, ThemeName::Dark);

    assert!(config.animation.enabled);
    assert_eq!(config.animation.stagger_ms, 40);
    assert_eq!(config.animation.row_height, 4);
    assert_eq!(config.animation.stiffness, 50.0);
    assert_eq!(config.animation.damping_ratio, 0.75);

    assert!(config.data.heroes_file.is_none());
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert!(config.strings.is_empty());
    assert!(config.drawables.is_empty());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("herolist/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let config = Config::load_from(&dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = temp_file(
        "config.toml",
        r#"
[ui]
theme = "light"

[animation]
stagger_ms = 0

[data]
heroes_file = "/srv/heroes.toml"

[strings]
app_name = "Heroes"
"#,
    );

    let config = Config::load_from(&path).expect("valid config");
    assert_eq!(config.ui.theme, ThemeName::Light);
    assert_eq!(config.ui.tick_rate_ms, 33);
    assert_eq!(config.animation.stagger_ms, 0);
    assert_eq!(config.animation.row_height, 4);
    assert_eq!(
        config.data.heroes_file,
        Some(PathBuf::from("/srv/heroes.toml"))
    );
    assert_eq!(config.strings.get("app_name").map(String::as_str), Some("Heroes"));

    let spec = CascadeSpec::from(&config.animation);
    assert!(spec.stagger.is_zero());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_file("config.toml", "[ui\ntick_rate_ms = ");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_unknown_theme_is_parse_error() {
    let (_dir, path) = temp_file("config.toml", "[ui]\ntheme = \"sepia\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_zero_row_height_fails_validation() {
    let (_dir, path) = temp_file("config.toml", "[animation]\nrow_height = 0\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("row_height"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_validation_rejects_non_positive_spring() {
    let mut config = Config::default();
    config.animation.stiffness = 0.0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.animation.damping_ratio = f32::NAN;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_directory_path_is_read_error() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    assert!(matches!(
        Config::load_from(dir.path()),
        Err(ConfigError::ReadError { .. })
    ));
}
