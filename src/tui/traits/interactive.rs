//! Interactive trait for components that handle keyboard input
//!
//! The App routes key events to the component. The component decides
//! whether to handle them or let them bubble up.

use super::Component;
use crossterm::event::KeyEvent;

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

/// Trait for components that handle keyboard input
///
/// # Event Flow
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// App (global handlers: Ctrl+C, Ctrl+Q)
///    │
///    │ if not handled
///    ▼
/// Component (via Interactive trait)
///    │
///    │ returns Handled::Yes or Handled::No
///    ▼
/// App (ignored)
/// ```
pub trait Interactive: Component {
    /// Handle a key event
    ///
    /// Returns `Handled::Yes` if the component consumed the event,
    /// `Handled::No` if it should bubble up to the App.
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Keybind hints for the status bar
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
