//! Collaborator seams
//!
//! The widget does not know how a keyboard is shown or how an attention
//! animation is drawn. Hosts plug in implementations of these traits; the
//! terminal front-end has its own in `crate::tui`, and the logged variants
//! here serve headless runs.

/// Shows and hides whatever surface delivers keystrokes to the widget
pub trait Keyboard {
    fn show(&mut self);
    fn hide(&mut self);
}

/// Plays a short attention animation on the dot row
pub trait Attention {
    fn play(&mut self);
}

/// Keyboard that only records and logs requests
#[derive(Debug, Default, Clone)]
pub struct LoggedKeyboard {
    pub visible: bool,
    pub show_count: usize,
    pub hide_count: usize,
}

impl Keyboard for LoggedKeyboard {
    fn show(&mut self) {
        self.visible = true;
        self.show_count += 1;
        tracing::debug!("keyboard shown");
    }

    fn hide(&mut self) {
        self.visible = false;
        self.hide_count += 1;
        tracing::debug!("keyboard hidden");
    }
}

/// Attention animation that only records and logs playback
#[derive(Debug, Default, Clone)]
pub struct LoggedAttention {
    pub play_count: usize,
}

impl Attention for LoggedAttention {
    fn play(&mut self) {
        self.play_count += 1;
        tracing::debug!("attention animation played");
    }
}
