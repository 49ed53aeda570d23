// CLI module - command-line argument parsing and handlers
//
// Subcommands:
// - replay <SCRIPT>: drive the widget headlessly and print the dot row
// - config --show | --path | --reset: configuration management
//
// Without a subcommand the TUI runs.

use crate::config::{Config, VERSION};
use crate::pin::{DotState, LoggedAttention, LoggedKeyboard, PinCodeWidget};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

/// dotpin - dotted PIN-code input for the terminal
#[derive(Parser, Debug)]
#[command(name = "dotpin")]
#[command(version = VERSION)]
#[command(about = "Dotted PIN-code input widget", long_about = None)]
pub struct Cli {
    /// Number of dots (overrides config and DOTPIN_LENGTH)
    #[arg(long, global = true)]
    pub length: Option<usize>,

    /// Theme name (overrides config and DOTPIN_THEME)
    #[arg(long, global = true)]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a key script without a terminal UI
    ///
    /// Any character is typed into the buffer except:
    /// '<' backspace, '!' clear, '~' clear with shake, '@' background click.
    Replay {
        /// Key script, e.g. "12<34~@123456!"
        script: String,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply_to(&self, config: &mut Config) -> Result<()> {
        if let Some(length) = self.length {
            config.pin.length = length;
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        config.validate()
    }
}

/// One step of a replay script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayStep {
    Type(char),
    Backspace,
    Clear,
    ClearWithFeedback,
    BackgroundClick,
}

impl ReplayStep {
    fn from_char(c: char) -> Self {
        match c {
            '<' => Self::Backspace,
            '!' => Self::Clear,
            '~' => Self::ClearWithFeedback,
            '@' => Self::BackgroundClick,
            other => Self::Type(other),
        }
    }

    fn label(&self) -> String {
        match self {
            Self::Type(c) => format!("type {c:?}"),
            Self::Backspace => "backspace".to_string(),
            Self::Clear => "clear".to_string(),
            Self::ClearWithFeedback => "clear+shake".to_string(),
            Self::BackgroundClick => "click".to_string(),
        }
    }
}

/// Split a script into steps, ignoring whitespace
pub fn parse_script(script: &str) -> Vec<ReplayStep> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(ReplayStep::from_char)
        .collect()
}

/// Dot row as text: `#` filled, `.` empty
fn dots_text(dots: &[DotState]) -> String {
    dots.iter()
        .map(|d| if d.is_filled() { '#' } else { '.' })
        .collect()
}

/// Run a replay script and return the printed transcript
///
/// Typed characters go straight to the buffer; the keyboard collaborator
/// only records show/hide requests.
pub fn replay(config: &Config, script: &str) -> String {
    let mut widget = PinCodeWidget::new(
        config.pin.options(),
        LoggedKeyboard::default(),
        LoggedAttention::default(),
    );
    let mut transcript = String::new();

    for step in parse_script(script) {
        match step {
            ReplayStep::Type(c) => {
                widget.push_char(c);
            }
            ReplayStep::Backspace => {
                widget.pop_char();
            }
            ReplayStep::Clear => widget.clear(),
            ReplayStep::ClearWithFeedback => widget.clear_with_feedback(),
            ReplayStep::BackgroundClick => widget.on_background_click(),
        }

        transcript.push_str(&format!(
            "{:<12} {}  complete={}\n",
            step.label(),
            dots_text(widget.dots()),
            widget.is_complete_signalled()
        ));
    }

    transcript.push_str(&format!(
        "text={:?} keyboard_hides={} shakes={}\n",
        widget.text(),
        widget.keyboard().hide_count,
        widget.attention().play_count
    ));
    transcript
}

/// Handle the `config` subcommand
pub fn handle_config(show: bool, reset: bool, path: bool) -> Result<()> {
    if path {
        let path = Config::config_path().context("Could not determine config path")?;
        println!("{}", path.display());
    } else if show {
        let config = Config::load()?;
        println!("# Effective configuration (env > file > defaults)");
        println!();
        print!("{}", config.to_toml());
    } else if reset {
        Config::default().save()?;
        let path = Config::config_path().context("Could not determine config path")?;
        println!("Config reset to defaults: {}", path.display());
    } else {
        bail!("Usage: dotpin config [--show|--reset|--path]");
    }
    Ok(())
}
