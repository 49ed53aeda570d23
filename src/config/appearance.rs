//! Dot rendering and shake animation settings

use serde::Deserialize;

/// How the dot row is drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    /// Glyph for a filled dot
    pub filled_glyph: String,
    /// Glyph for an empty dot
    pub empty_glyph: String,
    /// Blank cells between dots
    pub dot_spacing: u16,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            filled_glyph: "●".to_string(),
            empty_glyph: "○".to_string(),
            dot_spacing: 2,
        }
    }
}

/// Appearance settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileAppearance {
    pub filled_glyph: Option<String>,
    pub empty_glyph: Option<String>,
    pub dot_spacing: Option<u16>,
}

impl Appearance {
    pub fn from_file(file: Option<FileAppearance>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            filled_glyph: file.filled_glyph.unwrap_or(defaults.filled_glyph),
            empty_glyph: file.empty_glyph.unwrap_or(defaults.empty_glyph),
            dot_spacing: file.dot_spacing.unwrap_or(defaults.dot_spacing),
        }
    }
}

/// Shake animation played by clear-with-feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShakeConfig {
    /// Total animation time in milliseconds
    pub duration_ms: u64,
    /// Peak horizontal displacement in cells
    pub amplitude: u16,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            duration_ms: 500,
            amplitude: 4,
        }
    }
}

/// Shake settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileShake {
    pub duration_ms: Option<u64>,
    pub amplitude: Option<u16>,
}

impl ShakeConfig {
    pub fn from_file(file: Option<FileShake>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            duration_ms: file.duration_ms.unwrap_or(defaults.duration_ms),
            amplitude: file.amplitude.unwrap_or(defaults.amplitude),
        }
    }
}
