//! Configuration for the PIN widget and its terminal host
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/dotpin/config.toml)
//! 3. Built-in defaults (lowest priority)

use crate::pin::MAX_PIN_LENGTH;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod appearance;
mod observability;
mod pin;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use appearance::{Appearance, FileAppearance, FileShake, ShakeConfig};
pub use observability::{FileLogging, LogRotation, LoggingConfig};
pub use pin::{FilePin, PinConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default theme name
pub const DEFAULT_THEME: &str = "Slate";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Theme name: "Slate", "Dracula", "Nord", "Gruvbox", "Terminal"
    pub theme: String,

    /// Widget behaviour
    pub pin: PinConfig,

    /// Dot glyphs and spacing
    pub appearance: Appearance,

    /// Clear-with-feedback animation
    pub shake: ShakeConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            pin: PinConfig::default(),
            appearance: Appearance::default(),
            shake: ShakeConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,

    /// Optional [pin] section
    pub pin: Option<FilePin>,

    /// Optional [appearance] section
    pub appearance: Option<FileAppearance>,

    /// Optional [shake] section
    pub shake: Option<FileShake>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/dotpin/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("dotpin").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Write config (ignore errors - config is optional)
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A missing file means defaults. A file that exists but cannot be read
    /// or parsed is an error: a broken config should fail loudly.
    fn load_file_config() -> Result<FileConfig> {
        let Some(path) = Self::config_path() else {
            return Ok(FileConfig::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => {
                Err(e).with_context(|| format!("Cannot read config file {}", path.display()))
            }
        }
    }

    /// Build a config from a parsed file, without env overrides
    pub(crate) fn from_file_config(file: FileConfig) -> Result<Self> {
        Ok(Self {
            theme: file.theme.unwrap_or_else(|| DEFAULT_THEME.to_string()),
            pin: PinConfig::from_file(file.pin)?,
            appearance: Appearance::from_file(file.appearance),
            shake: ShakeConfig::from_file(file.shake),
            logging: LoggingConfig::from_file(file.logging),
        })
    }

    /// Parse a TOML document into a validated config (no env overrides)
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(contents).context("Invalid config TOML")?;
        let config = Self::from_file_config(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration: env vars > file > defaults
    pub fn load() -> Result<Self> {
        let file = Self::load_file_config()?;
        let mut config = Self::from_file_config(file)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `DOTPIN_*` overrides from a variable lookup
    pub fn apply_overrides<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(length) = var("DOTPIN_LENGTH") {
            self.pin.length = length
                .trim()
                .parse()
                .with_context(|| format!("DOTPIN_LENGTH is not a number: {length:?}"))?;
        }
        if let Some(theme) = var("DOTPIN_THEME") {
            self.theme = theme;
        }
        if let Some(level) = var("DOTPIN_LOG_LEVEL") {
            self.logging.level = level;
        }
        Ok(())
    }

    /// Reject values the widget cannot work with
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_PIN_LENGTH).contains(&self.pin.length) {
            bail!(
                "pin.length must be between 1 and {MAX_PIN_LENGTH}, got {}",
                self.pin.length
            );
        }
        if self.appearance.filled_glyph.is_empty() || self.appearance.empty_glyph.is_empty() {
            bail!("appearance glyphs must not be empty");
        }
        Ok(())
    }

    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# dotpin configuration

# Theme: Slate, Dracula, Nord, Gruvbox, Terminal
theme = {theme}

# PIN widget behaviour
[pin]
length = {length}
digits_only = {digits_only}
# projection: dots always mirror the buffer length
# step: one dot per edit (pasting several characters leaves dots behind)
sync = "{sync}"
# Whether Esc (clear with shake) also resets the completion flag
feedback_resets_signal = {feedback_resets}

# Dot rendering
[appearance]
filled_glyph = {filled}
empty_glyph = {empty}
dot_spacing = {spacing}

# Clear-with-feedback animation
[shake]
duration_ms = {shake_ms}
amplitude = {amplitude}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {level}
file_enabled = {file_enabled}
file_dir = {file_dir}
file_rotation = "{rotation}"
file_prefix = {prefix}
"#,
            theme = toml_string(&self.theme),
            length = self.pin.length,
            digits_only = self.pin.digits_only,
            sync = self.pin.sync.as_str(),
            feedback_resets = self.pin.feedback_resets_signal,
            filled = toml_string(&self.appearance.filled_glyph),
            empty = toml_string(&self.appearance.empty_glyph),
            spacing = self.appearance.dot_spacing,
            shake_ms = self.shake.duration_ms,
            amplitude = self.shake.amplitude,
            level = toml_string(&self.logging.level),
            file_enabled = self.logging.file_enabled,
            file_dir = toml_string(&self.logging.file_dir.display().to_string()),
            rotation = self.logging.file_rotation.as_str(),
            prefix = toml_string(&self.logging.file_prefix),
        )
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            bail!("Could not determine config path");
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        std::fs::write(&path, self.to_toml())
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

/// Quote a string as a TOML value
fn toml_string(s: &str) -> String {
    toml::Value::String(s.to_owned()).to_string()
}
