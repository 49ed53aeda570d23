//! `[logging]` section: level filter and the optional JSON log file

use serde::Deserialize;
use std::path::PathBuf;

/// How often the JSON log file rolls over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// One file, appended forever
    Never,
}

impl LogRotation {
    /// Case-insensitive name lookup
    pub fn parse(name: &str) -> Option<Self> {
        [Self::Hourly, Self::Daily, Self::Never]
            .into_iter()
            .find(|rotation| rotation.as_str().eq_ignore_ascii_case(name))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when RUST_LOG is unset
    pub level: String,
    /// Also write JSON lines to `file_dir`
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name stem; the appender adds the date suffix
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::default(),
            file_prefix: "dotpin".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    /// Fill unset keys from defaults; an unrecognised rotation name means daily
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let Some(file) = file else {
            return Self::default();
        };
        let defaults = Self::default();

        Self {
            level: file.level.unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file.file_dir.map_or(defaults.file_dir, PathBuf::from),
            file_rotation: file
                .file_rotation
                .as_deref()
                .and_then(LogRotation::parse)
                .unwrap_or_default(),
            file_prefix: file.file_prefix.unwrap_or(defaults.file_prefix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_parse() {
        assert_eq!(LogRotation::parse("HOURLY"), Some(LogRotation::Hourly));
        assert_eq!(LogRotation::parse("never"), Some(LogRotation::Never));
        assert_eq!(LogRotation::parse("weekly"), None);
    }

    #[test]
    fn test_missing_section_is_default() {
        assert_eq!(LoggingConfig::from_file(None), LoggingConfig::default());
    }
}
