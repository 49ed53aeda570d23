//! dotpin - a dotted PIN-code input widget
//!
//! The [`pin`] module holds the widget state machine and is independent of
//! any UI toolkit. [`tui`] hosts it in a terminal with ratatui.
//!
//! ```
//! use dotpin::pin::{LoggedAttention, LoggedKeyboard, PinCodeWidget, PinOptions};
//!
//! let mut widget = PinCodeWidget::new(
//!     PinOptions::default(),
//!     LoggedKeyboard::default(),
//!     LoggedAttention::default(),
//! );
//! let completion = widget.subscribe();
//!
//! for c in "123456".chars() {
//!     widget.push_char(c);
//! }
//! assert_eq!(widget.filled_count(), 6);
//! assert!(*completion.borrow());
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod pin;
pub mod tui;
