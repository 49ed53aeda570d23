// dotpin - dotted PIN-code input for the terminal
//
// Architecture:
// - pin: widget state machine (buffer, dots, completion signal)
// - tui (ratatui): terminal host, keyboard focus, shake animation
// - config: env > ~/.config/dotpin/config.toml > defaults
// - logging: tracing, captured into the TUI or written to stderr

use anyhow::Result;
use clap::Parser;
use dotpin::cli::{self, Cli, Commands};
use dotpin::config::Config;
use dotpin::logging::{self, LogBuffer, LogSink};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config management must work even when the config file is broken
    if let Some(Commands::Config { show, reset, path }) = &cli.command {
        return cli::handle_config(*show, *reset, *path);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::load()?;
    cli.apply_to(&mut config)?;

    let log_buffer = LogBuffer::new();
    let sink = match cli.command {
        Some(Commands::Replay { .. }) => LogSink::Stderr,
        _ => LogSink::Tui,
    };
    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard = logging::init(&config.logging, sink, &log_buffer)?;

    match cli.command {
        Some(Commands::Replay { script }) => {
            print!("{}", cli::replay(&config, &script));
        }
        _ => {
            tracing::info!(length = config.pin.length, theme = %config.theme, "Starting TUI");
            dotpin::tui::run_tui(config, log_buffer).await?;
            tracing::info!("Shutdown complete");
        }
    }

    Ok(())
}
