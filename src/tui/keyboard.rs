// Terminal keyboard focus
//
// A terminal has no soft keyboard. "Showing" it gives the PIN panel input
// focus so keystrokes reach the buffer; "hiding" it stops routing them.

use crate::pin::Keyboard;

#[derive(Debug, Default, Clone)]
pub struct TerminalKeyboard {
    visible: bool,
}

impl TerminalKeyboard {
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Keyboard for TerminalKeyboard {
    fn show(&mut self) {
        if !self.visible {
            tracing::debug!("PIN panel focused");
        }
        self.visible = true;
    }

    fn hide(&mut self) {
        if self.visible {
            tracing::debug!("PIN panel released focus");
        }
        self.visible = false;
    }
}
