//! Dotted PIN-code input
//!
//! The widget mirrors the length of a text buffer into a row of dots and
//! raises a completion signal once the buffer reaches its maximum length.
//!
//! ```text
//!   keystroke ─▶ buffer ─▶ on_text_changed ─▶ DotRow
//!                                   │
//!                                   └─ len == N ─▶ Keyboard::hide
//!                                                  CompletionSignal = true
//! ```

mod collaborators;
mod dot;
mod signal;
mod widget;

pub use collaborators::{Attention, Keyboard, LoggedAttention, LoggedKeyboard};
pub use dot::{DotRow, DotState};
pub use signal::CompletionSignal;
pub use widget::{DotSync, InputState, PinCodeWidget, PinOptions};

/// Default number of dots (and maximum PIN length)
pub const DEFAULT_PIN_LENGTH: usize = 6;

/// Largest supported number of dots
pub const MAX_PIN_LENGTH: usize = 64;
