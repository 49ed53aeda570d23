//! Component trait system for the TUI
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                    App                      │
//! │  (routes events, owns the PIN panel)        │
//! └─────────────────────────────────────────────┘
//!                       │
//!                       ▼
//!                 ┌───────────┐
//!                 │ PinPanel  │  Component + Interactive
//!                 └───────────┘
//! ```
//!
//! - [`Component`] - render with an immutable [`RenderContext`]
//! - [`Interactive`] - keyboard handling with [`Handled`] bubbling

mod component;
mod interactive;

pub use component::{Component, RenderContext};
pub use interactive::{Handled, Interactive};
