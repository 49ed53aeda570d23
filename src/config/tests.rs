//! Configuration tests
//!
//! These guard the TOML format: every field written by `to_toml()` must
//! parse back into the same value.

use super::*;
use crate::pin::DotSync;
use std::collections::HashMap;

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed = Config::from_toml_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
    assert_eq!(parsed.unwrap(), config);
}

#[test]
fn test_config_roundtrip_customized() {
    let mut config = Config::default();
    config.theme = "Nord".to_string();
    config.pin.length = 4;
    config.pin.digits_only = false;
    config.pin.sync = DotSync::Step;
    config.pin.feedback_resets_signal = true;
    config.appearance.filled_glyph = "*".to_string();
    config.appearance.empty_glyph = "\"_\"".to_string();
    config.appearance.dot_spacing = 1;
    config.shake.duration_ms = 250;
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let toml_str = config.to_toml();
    let parsed = Config::from_toml_str(&toml_str).expect("customized config should parse");
    assert_eq!(parsed, config, "TOML:\n{}", toml_str);
}

#[test]
fn test_config_roundtrip_control_characters() {
    let mut config = Config::default();
    config.appearance.filled_glyph = "\u{7f}".to_string();
    config.appearance.empty_glyph = "\\".to_string();
    config.logging.file_prefix = "pin\tlog".to_string();

    let toml_str = config.to_toml();
    let parsed = Config::from_toml_str(&toml_str).expect("escaped strings should parse");
    assert_eq!(parsed, config, "TOML:\n{}", toml_str);
}

// ─────────────────────────────────────────────────────────────────────────────
// Defaults and partial files
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_yields_defaults() {
    let config = Config::from_toml_str("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.pin.length, 6);
    assert_eq!(config.pin.sync, DotSync::Projection);
    assert!(!config.pin.feedback_resets_signal);
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let config = Config::from_toml_str(
        r#"
[pin]
length = 8
"#,
    )
    .unwrap();
    assert_eq!(config.pin.length, 8);
    assert!(config.pin.digits_only);
    assert_eq!(config.appearance, Appearance::default());
}

#[test]
fn test_unknown_rotation_falls_back_to_daily() {
    let config = Config::from_toml_str(
        r#"
[logging]
file_rotation = "weekly"
"#,
    )
    .unwrap();
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

// ─────────────────────────────────────────────────────────────────────────────
// Validation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_zero_length_rejected() {
    let err = Config::from_toml_str("[pin]\nlength = 0\n").unwrap_err();
    assert!(err.to_string().contains("pin.length"), "{err}");
}

#[test]
fn test_oversized_length_rejected() {
    let err = Config::from_toml_str("[pin]\nlength = 65\n").unwrap_err();
    assert!(err.to_string().contains("between 1 and 64"), "{err}");

    assert_eq!(Config::from_toml_str("[pin]\nlength = 64\n").unwrap().pin.length, 64);
}

#[test]
fn test_env_length_out_of_range_rejected() {
    let mut config = Config::default();
    config
        .apply_overrides(|key| (key == "DOTPIN_LENGTH").then(|| "1000000".to_string()))
        .unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn test_empty_glyph_rejected() {
    let result = Config::from_toml_str("[appearance]\nfilled_glyph = \"\"\n");
    assert!(result.is_err());
}

#[test]
fn test_unknown_sync_rejected() {
    let result = Config::from_toml_str("[pin]\nsync = \"sometimes\"\n");
    assert!(result.is_err());
}

#[test]
fn test_malformed_toml_rejected() {
    assert!(Config::from_toml_str("[pin\nlength = 6").is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// Env overrides
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides() {
    let vars: HashMap<&str, &str> = [
        ("DOTPIN_LENGTH", " 4 "),
        ("DOTPIN_THEME", "Dracula"),
        ("DOTPIN_LOG_LEVEL", "debug"),
    ]
    .into_iter()
    .collect();

    let mut config = Config::default();
    config
        .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
        .unwrap();

    assert_eq!(config.pin.length, 4);
    assert_eq!(config.theme, "Dracula");
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_env_length_must_be_numeric() {
    let mut config = Config::default();
    let result = config.apply_overrides(|key| {
        (key == "DOTPIN_LENGTH").then(|| "six".to_string())
    });
    assert!(result.is_err());
    assert_eq!(config.pin.length, 6);
}

#[test]
fn test_pin_options_follow_config() {
    let mut config = Config::default();
    config.pin.length = 5;
    config.pin.sync = DotSync::Step;
    let options = config.pin.options();
    assert_eq!(options.length, 5);
    assert_eq!(options.sync, DotSync::Step);
    assert!(options.digits_only);
}
