// TUI application state
//
// Owns the PIN panel and the host-screen concerns around it: theme, toasts,
// quitting, and the animation frame counter.

use super::components::{PinPanel, Toast};
use super::keyboard::TerminalKeyboard;
use super::shake::Shake;
use super::theme::Theme;
use super::traits::{Handled, Interactive};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::pin::PinCodeWidget;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tokio::sync::watch;

/// Main application state for the TUI
pub struct App {
    pub pin_panel: PinPanel,

    /// Current color theme
    pub theme: Theme,

    /// Log buffer for the logs panel
    pub log_buffer: LogBuffer,

    /// Active toast, if any
    pub toast: Option<Toast>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Animation frame counter (advanced on each tick)
    pub animation_frame: usize,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer) -> Self {
        let theme = Theme::by_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown theme {:?}, using {} (available: {})",
                config.theme,
                Theme::default().name,
                Theme::NAMES.join(", ")
            );
            Theme::default()
        });

        let widget = PinCodeWidget::new(
            config.pin.options(),
            TerminalKeyboard::default(),
            Shake::new(config.shake),
        );

        Self {
            pin_panel: PinPanel::new(widget, config.appearance.clone()),
            theme,
            log_buffer,
            toast: None,
            should_quit: false,
            animation_frame: 0,
        }
    }

    /// Receiver for the widget's completion signal
    pub fn subscribe_completion(&self) -> watch::Receiver<bool> {
        self.pin_panel.widget().subscribe()
    }

    /// Global keys first, then the PIN panel
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Windows terminals also report releases
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.should_quit = true;
            return;
        }

        if self.pin_panel.handle_key(key) == Handled::No {
            tracing::trace!("unhandled key {:?}", key.code);
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            self.pin_panel.handle_click(mouse.column, mouse.row);
        }
    }

    /// Host reaction to the completion signal
    pub fn on_completion_changed(&mut self, complete: bool) {
        if complete {
            let digits = self.pin_panel.widget().text().chars().count();
            self.toast = Some(Toast::new(format!("PIN entered ({digits} digits)")));
        }
    }

    /// Periodic tick: advance animations and expire toasts
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        self.pin_panel.tick();
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&Config::default(), LogBuffer::new())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let mut a = app();
        a.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(a.should_quit);

        let mut a = app();
        a.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(a.should_quit);

        // Plain q is just a refused character
        let mut a = app();
        a.handle_key(key(KeyCode::Enter));
        a.handle_key(key(KeyCode::Char('q')));
        assert!(!a.should_quit);
        assert_eq!(a.pin_panel.widget().text(), "");
    }

    #[test]
    fn test_completion_is_observed_and_toasted() {
        let mut a = app();
        let mut rx = a.subscribe_completion();

        a.handle_key(key(KeyCode::Enter));
        for c in "987654".chars() {
            a.handle_key(key(KeyCode::Char(c)));
        }

        assert!(rx.has_changed().unwrap());
        let complete = *rx.borrow_and_update();
        a.on_completion_changed(complete);
        let toast = a.toast.as_ref().expect("toast after completion");
        assert!(toast.message.contains("6 digits"));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut a = app();
        let mut release = key(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        a.handle_key(release);
        assert!(!a.pin_panel.has_focus());
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let config = Config {
            theme: "Neon".to_string(),
            ..Config::default()
        };
        let a = App::new(&config, LogBuffer::new());
        assert_eq!(a.theme, Theme::default());
    }

    #[test]
    fn test_tick_settles_finished_shake() {
        let mut config = Config::default();
        config.shake.duration_ms = 0;
        let mut a = App::new(&config, LogBuffer::new());

        a.handle_key(key(KeyCode::Esc));
        assert_eq!(a.pin_panel.widget().attention().plays(), 1);

        a.tick();
        let shake = a.pin_panel.widget().attention();
        assert!(!shake.is_active());
        assert_eq!(shake.offset(), 0);
    }

    #[test]
    fn test_tick_advances_frame() {
        let mut a = app();
        a.tick();
        a.tick();
        assert_eq!(a.animation_frame, 2);
    }
}
