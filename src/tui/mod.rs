// TUI module - terminal host for the PIN widget
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks)
// - Observing the widget's completion signal
// - Rendering the UI

pub mod app;
pub mod components;
pub mod keyboard;
pub mod layout;
pub mod shake;
pub mod theme;
pub mod traits;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::watch;

/// Redraw interval; the shake offset is sampled on every redraw
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// App housekeeping (caret blink, toast expiry, shake settle) every this many ticks
const CARET_TICKS: usize = 10;

/// Run the TUI until the user quits
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config, log_buffer);
    let mut completion_rx = app.subscribe_completion();

    let result = run_event_loop(&mut terminal, &mut app, &mut completion_rx).await;

    // Restore terminal even when the loop failed
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources with `tokio::select!`:
/// 1. Terminal input (keys and mouse)
/// 2. Timer ticks (animations, redraws)
/// 3. Completion signal changes
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    completion_rx: &mut watch::Receiver<bool>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(TICK_INTERVAL);
    let mut ticks: usize = 0;

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            input = poll_input() => {
                match input? {
                    Some(Event::Key(key)) => app.handle_key(key),
                    Some(Event::Mouse(mouse)) => app.handle_mouse(mouse),
                    _ => {}
                }
            }

            _ = tick_interval.tick() => {
                ticks = ticks.wrapping_add(1);
                if ticks % CARET_TICKS == 0 {
                    app.tick();
                }
            }

            Ok(()) = completion_rx.changed() => {
                let complete = *completion_rx.borrow_and_update();
                tracing::debug!(complete, "completion signal changed");
                app.on_completion_changed(complete);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Poll the terminal briefly for one input event
async fn poll_input() -> Result<Option<Event>> {
    if event::poll(Duration::from_millis(10)).context("Failed to poll terminal input")? {
        Ok(Some(event::read().context("Failed to read terminal input")?))
    } else {
        // Yield so the other select branches get a turn
        tokio::task::yield_now().await;
        Ok(None)
    }
}
