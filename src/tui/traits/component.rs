//! Core component trait
//!
//! Every UI element that can be rendered implements `Component`.

use crate::tui::theme::Theme;
use ratatui::{layout::Rect, Frame};

/// Immutable context passed to components during rendering
///
/// Components only see what they need - no access to mutable app state.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Animation frame counter (for the blinking caret)
    pub animation_frame: usize,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, animation_frame: usize) -> Self {
        Self {
            theme,
            animation_frame,
        }
    }

    /// Caret shown after the dots while the panel has focus
    pub fn caret(&self) -> &'static str {
        const CARET: [&str; 2] = ["▏", " "];
        CARET[self.animation_frame % CARET.len()]
    }
}

/// Base trait for all UI components
pub trait Component {
    /// Render the component to the given area
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}
