//! PIN widget settings

use crate::pin::{DotSync, PinOptions, DEFAULT_PIN_LENGTH};
use anyhow::{anyhow, Result};
use serde::Deserialize;

/// Widget behaviour settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinConfig {
    /// Number of dots / maximum PIN length
    pub length: usize,
    /// Only accept ASCII digits
    pub digits_only: bool,
    /// Dot synchronisation: projection (default) or step
    pub sync: DotSync,
    /// Whether clear-with-feedback also lowers the completion signal
    pub feedback_resets_signal: bool,
}

impl Default for PinConfig {
    fn default() -> Self {
        let options = PinOptions::default();
        Self {
            length: options.length,
            digits_only: options.digits_only,
            sync: options.sync,
            feedback_resets_signal: options.feedback_resets_signal,
        }
    }
}

/// PIN settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FilePin {
    pub length: Option<usize>,
    pub digits_only: Option<bool>,
    pub sync: Option<String>,
    pub feedback_resets_signal: Option<bool>,
}

impl PinConfig {
    /// Create from file config with defaults
    ///
    /// Unknown sync modes are an error rather than a silent fallback: the two
    /// modes behave differently on paste.
    pub fn from_file(file: Option<FilePin>) -> Result<Self> {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let sync = match file.sync {
            Some(s) => DotSync::from_str(&s)
                .ok_or_else(|| anyhow!("unknown pin.sync {s:?} (expected \"projection\" or \"step\")"))?,
            None => defaults.sync,
        };

        Ok(Self {
            length: file.length.unwrap_or(DEFAULT_PIN_LENGTH),
            digits_only: file.digits_only.unwrap_or(defaults.digits_only),
            sync,
            feedback_resets_signal: file
                .feedback_resets_signal
                .unwrap_or(defaults.feedback_resets_signal),
        })
    }

    /// Widget construction options
    pub fn options(&self) -> PinOptions {
        PinOptions {
            length: self.length,
            digits_only: self.digits_only,
            sync: self.sync,
            feedback_resets_signal: self.feedback_resets_signal,
        }
    }
}
