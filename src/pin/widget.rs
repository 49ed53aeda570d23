//! PIN-code widget state machine
//!
//! Owns the entered text (standing in for a hidden text field), the dot
//! row projected from it, and the completion signal. Keyboard and
//! animation side effects go through the [`Keyboard`] and [`Attention`]
//! collaborators.

use super::collaborators::{Attention, Keyboard};
use super::dot::{DotRow, DotState};
use super::signal::CompletionSignal;
use super::{DEFAULT_PIN_LENGTH, MAX_PIN_LENGTH};
use tokio::sync::watch;

/// How dots follow the buffer on each text change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DotSync {
    /// Re-derive the whole row from the buffer length
    #[default]
    Projection,
    /// Toggle exactly one dot per notification; multi-character edits
    /// leave the row out of step with the buffer
    Step,
}

impl DotSync {
    /// Parse sync mode string from config
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "projection" => Some(Self::Projection),
            "step" => Some(Self::Step),
            _ => None,
        }
    }

    /// Convert to string for TOML serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Projection => "projection",
            Self::Step => "step",
        }
    }
}

/// Construction options for [`PinCodeWidget`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinOptions {
    /// Number of dots and maximum buffer length (1 to [`MAX_PIN_LENGTH`])
    pub length: usize,
    /// Refuse characters other than ASCII digits
    pub digits_only: bool,
    /// Dot synchronisation strategy
    pub sync: DotSync,
    /// Whether `clear_with_feedback` also resets the completion signal
    pub feedback_resets_signal: bool,
}

impl Default for PinOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_PIN_LENGTH,
            digits_only: true,
            sync: DotSync::Projection,
            feedback_resets_signal: false,
        }
    }
}

impl PinOptions {
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }
}

/// Coarse state derived from the dot row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    /// Fewer than N dots filled
    Incomplete,
    /// All N dots filled
    Complete,
}

/// Dotted PIN-code input
pub struct PinCodeWidget<K, A> {
    options: PinOptions,
    buffer: String,
    dots: DotRow,
    signal: CompletionSignal,
    keyboard: K,
    attention: A,
}

impl<K: Keyboard, A: Attention> PinCodeWidget<K, A> {
    /// Create a widget with every dot empty and an empty buffer
    ///
    /// `length` is clamped to `1..=MAX_PIN_LENGTH`; callers that load
    /// lengths from user input validate before getting here.
    pub fn new(options: PinOptions, keyboard: K, attention: A) -> Self {
        let options = PinOptions {
            length: options.length.clamp(1, MAX_PIN_LENGTH),
            ..options
        };
        tracing::debug!(
            length = options.length,
            sync = options.sync.as_str(),
            "PIN widget created"
        );
        Self {
            dots: DotRow::new(options.length),
            buffer: String::with_capacity(options.length),
            signal: CompletionSignal::new(),
            options,
            keyboard,
            attention,
        }
    }

    /// Background tapped: take focus and reveal the keyboard
    pub fn on_background_click(&mut self) {
        self.keyboard.show();
    }

    pub fn hide_keyboard(&mut self) {
        self.keyboard.hide();
    }

    /// React to a buffer edit
    ///
    /// Growth fills dots, shrinkage empties them. Reaching the maximum
    /// length on growth hides the keyboard and raises the completion signal.
    pub fn on_text_changed(&mut self, new_len: usize, prev_len: usize) {
        if new_len > prev_len {
            match self.options.sync {
                DotSync::Projection => self.dots.project(new_len),
                DotSync::Step => {
                    if let Some(index) = self.dots.fill_next() {
                        tracing::trace!(index, "dot filled");
                    }
                }
            }

            if new_len == self.options.length {
                self.keyboard.hide();
                self.signal.set(true);
                tracing::info!(length = new_len, "PIN input complete");
            }
        } else if new_len < prev_len {
            match self.options.sync {
                DotSync::Projection => self.dots.project(new_len),
                DotSync::Step => {
                    if let Some(index) = self.dots.clear_last() {
                        tracing::trace!(index, "dot emptied");
                    }
                }
            }
        }
    }

    /// Append one character to the buffer
    ///
    /// Returns `false` when the buffer is full or the character is refused.
    pub fn push_char(&mut self, c: char) -> bool {
        if !self.accepts(c) || self.len() >= self.options.length {
            return false;
        }
        let prev = self.len();
        self.buffer.push(c);
        self.on_text_changed(self.len(), prev);
        true
    }

    /// Remove the last character; returns `false` on an empty buffer
    pub fn pop_char(&mut self) -> bool {
        let prev = self.len();
        if self.buffer.pop().is_none() {
            return false;
        }
        self.on_text_changed(self.len(), prev);
        true
    }

    /// Replace the buffer in one edit (paste, programmatic set)
    ///
    /// Refused characters are dropped and the result is truncated to the
    /// maximum length. Dots are updated through a single notification.
    pub fn set_text(&mut self, text: &str) {
        let prev = self.len();
        self.buffer = text
            .chars()
            .filter(|c| self.accepts(*c))
            .take(self.options.length)
            .collect();
        self.on_text_changed(self.len(), prev);
    }

    /// Current buffer contents
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Empty buffer and dots and lower the completion signal
    pub fn clear(&mut self) {
        self.reset_input();
        self.signal.set(false);
        tracing::info!("PIN cleared");
    }

    /// Shake the dot row, then empty buffer and dots
    ///
    /// The completion signal is left as is unless
    /// [`PinOptions::feedback_resets_signal`] is set.
    pub fn clear_with_feedback(&mut self) {
        self.attention.play();
        self.reset_input();
        if self.options.feedback_resets_signal {
            self.signal.set(false);
        }
        tracing::info!("PIN cleared with feedback");
    }

    fn reset_input(&mut self) {
        self.buffer.clear();
        self.dots.clear_all();
    }

    fn accepts(&self, c: char) -> bool {
        !c.is_control() && (!self.options.digits_only || c.is_ascii_digit())
    }

    /// Buffer length in characters
    pub fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn max_length(&self) -> usize {
        self.options.length
    }

    pub fn options(&self) -> &PinOptions {
        &self.options
    }

    pub fn dots(&self) -> &[DotState] {
        self.dots.as_slice()
    }

    pub fn filled_count(&self) -> usize {
        self.dots.filled_count()
    }

    pub fn state(&self) -> InputState {
        if self.filled_count() == self.options.length {
            InputState::Complete
        } else {
            InputState::Incomplete
        }
    }

    /// Last value published on the completion signal
    pub fn is_complete_signalled(&self) -> bool {
        self.signal.get()
    }

    /// Receiver for the completion signal; starts at the current value
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.signal.subscribe()
    }

    pub fn keyboard(&self) -> &K {
        &self.keyboard
    }

    pub fn keyboard_mut(&mut self) -> &mut K {
        &mut self.keyboard
    }

    pub fn attention(&self) -> &A {
        &self.attention
    }

    pub fn attention_mut(&mut self) -> &mut A {
        &mut self.attention
    }
}
