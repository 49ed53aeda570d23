//! PIN panel component
//!
//! Hosts the [`PinCodeWidget`] in the terminal: draws the dot row (with the
//! shake offset applied), routes keystrokes into the buffer while the panel
//! has focus, and treats a click on the panel as a background tap.

use crate::config::Appearance;
use crate::pin::{DotState, PinCodeWidget};
use crate::tui::keyboard::TerminalKeyboard;
use crate::tui::shake::Shake;
use crate::tui::traits::{Component, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::cell::Cell;
use unicode_width::UnicodeWidthStr;

pub type TerminalPinWidget = PinCodeWidget<TerminalKeyboard, Shake>;

pub struct PinPanel {
    widget: TerminalPinWidget,
    appearance: Appearance,
    /// Area from the last render, for mouse hit-testing
    area: Cell<Rect>,
}

impl PinPanel {
    pub fn new(widget: TerminalPinWidget, appearance: Appearance) -> Self {
        Self {
            widget,
            appearance,
            area: Cell::new(Rect::default()),
        }
    }

    pub fn widget(&self) -> &TerminalPinWidget {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut TerminalPinWidget {
        &mut self.widget
    }

    pub fn has_focus(&self) -> bool {
        self.widget.keyboard().is_visible()
    }

    /// Left click at a terminal cell; returns true when it hit the panel
    pub fn handle_click(&mut self, column: u16, row: u16) -> bool {
        if !self.area.get().contains(Position::new(column, row)) {
            return false;
        }
        self.widget.on_background_click();
        true
    }

    /// Per-tick housekeeping
    pub fn tick(&mut self) {
        self.widget.attention_mut().settle();
    }

    fn glyph(&self, state: DotState) -> &str {
        match state {
            DotState::Filled => &self.appearance.filled_glyph,
            DotState::Empty => &self.appearance.empty_glyph,
        }
    }

    /// Display width of the dot row in cells
    fn row_width(&self) -> u16 {
        let dots = self.widget.dots();
        let glyphs: usize = dots.iter().map(|d| self.glyph(*d).width()).sum();
        let gaps = dots.len().saturating_sub(1) * usize::from(self.appearance.dot_spacing);
        u16::try_from(glyphs + gaps).unwrap_or(u16::MAX)
    }

    fn dot_line(&self, ctx: &RenderContext) -> Line<'_> {
        let gap = " ".repeat(usize::from(self.appearance.dot_spacing));
        let mut spans = Vec::with_capacity(self.widget.dots().len() * 2);

        for (i, state) in self.widget.dots().iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(gap.clone()));
            }
            let color = match state {
                DotState::Filled => ctx.theme.dot_filled,
                DotState::Empty => ctx.theme.dot_empty,
            };
            spans.push(Span::styled(
                self.glyph(*state),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
        }

        Line::from(spans)
    }
}

/// X position of a `width`-wide row centred in `inner`, shifted by `offset`
/// and kept inside `inner`
fn centered_x(inner: Rect, width: u16, offset: i16) -> u16 {
    let slack = inner.width.saturating_sub(width);
    let x = i32::from(inner.x) + i32::from(slack / 2) + i32::from(offset);
    let max_x = i32::from(inner.x + slack);
    x.clamp(i32::from(inner.x), max_x) as u16
}

impl Component for PinPanel {
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        self.area.set(area);
        let theme = ctx.theme;
        let focused = self.has_focus();

        let border_color = if focused {
            theme.border_focused
        } else {
            theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(" PIN ", Style::default().fg(theme.title)))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let width = self.row_width().min(inner.width);
        let dots_y = inner.y + inner.height.saturating_sub(1) / 2;
        let x = centered_x(inner, width, self.widget.attention().offset());
        f.render_widget(
            Paragraph::new(self.dot_line(ctx)),
            Rect::new(x, dots_y, width, 1),
        );

        if focused && x + width + 1 < inner.right() {
            f.render_widget(
                Paragraph::new(ctx.caret()).style(Style::default().fg(theme.highlight)),
                Rect::new(x + width + 1, dots_y, 1, 1),
            );
        }

        if dots_y + 1 < inner.bottom() {
            let hint = if focused {
                "type your PIN"
            } else {
                "press Enter or click to type"
            };
            f.render_widget(
                Paragraph::new(hint)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(theme.muted)),
                Rect::new(inner.x, dots_y + 1, inner.width, 1),
            );
        }
    }
}

impl Interactive for PinPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let focused = self.has_focus();

        match key.code {
            KeyCode::Enter => {
                self.widget.on_background_click();
                Handled::Yes
            }
            KeyCode::Esc => {
                self.widget.clear_with_feedback();
                Handled::Yes
            }
            KeyCode::Delete => {
                self.widget.clear();
                Handled::Yes
            }
            KeyCode::Char('l') if ctrl => {
                self.widget.clear();
                Handled::Yes
            }
            KeyCode::Backspace if focused => {
                self.widget.pop_char();
                Handled::Yes
            }
            KeyCode::Char(c) if focused && !ctrl => {
                if !self.widget.push_char(c) {
                    tracing::trace!("refused {:?}", c);
                }
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        if self.has_focus() {
            Some("0-9:type  ⌫:delete  Esc:shake+clear  Del:clear  ^Q:quit")
        } else {
            Some("Enter/click:type  Esc:shake+clear  Del:clear  ^Q:quit")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShakeConfig;
    use crate::pin::{Attention, PinOptions};
    use crate::tui::theme::Theme;
    use ratatui::{backend::TestBackend, Terminal};

    fn panel() -> PinPanel {
        let widget = PinCodeWidget::new(
            PinOptions::default(),
            TerminalKeyboard::default(),
            Shake::new(ShakeConfig::default()),
        );
        PinPanel::new(widget, Appearance::default())
    }

    fn press(panel: &mut PinPanel, code: KeyCode) -> Handled {
        panel.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn render_row(panel: &PinPanel, width: u16, height: u16, row: u16) -> String {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                panel.render(f, area, &RenderContext::new(&theme, 0));
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..width).map(|x| buffer[(x, row)].symbol()).collect()
    }

    #[test]
    fn test_typing_requires_focus() {
        let mut p = panel();
        assert_eq!(press(&mut p, KeyCode::Char('1')), Handled::No);
        assert_eq!(p.widget().text(), "");

        assert_eq!(press(&mut p, KeyCode::Enter), Handled::Yes);
        assert!(p.has_focus());
        press(&mut p, KeyCode::Char('1'));
        press(&mut p, KeyCode::Char('2'));
        assert_eq!(p.widget().text(), "12");
        assert_eq!(p.widget().filled_count(), 2);

        press(&mut p, KeyCode::Backspace);
        assert_eq!(p.widget().text(), "1");
    }

    #[test]
    fn test_completion_releases_focus() {
        let mut p = panel();
        press(&mut p, KeyCode::Enter);
        for c in "123456".chars() {
            press(&mut p, KeyCode::Char(c));
        }
        assert!(p.widget().is_complete_signalled());
        assert!(!p.has_focus());
        // Further digits go nowhere
        assert_eq!(press(&mut p, KeyCode::Char('7')), Handled::No);
    }

    #[test]
    fn test_clear_keys() {
        let mut p = panel();
        press(&mut p, KeyCode::Enter);
        for c in "123456".chars() {
            press(&mut p, KeyCode::Char(c));
        }

        press(&mut p, KeyCode::Esc);
        assert_eq!(p.widget().text(), "");
        assert!(p.widget().is_complete_signalled());
        assert_eq!(p.widget().attention().plays(), 1);

        let handled = p.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
        assert_eq!(handled, Handled::Yes);
        assert!(!p.widget().is_complete_signalled());
    }

    #[test]
    fn test_ctrl_chars_are_not_typed() {
        let mut p = panel();
        press(&mut p, KeyCode::Enter);
        let handled = p.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert_eq!(handled, Handled::No);
    }

    #[test]
    fn test_render_shows_filled_and_empty_dots() {
        let mut p = panel();
        press(&mut p, KeyCode::Enter);
        press(&mut p, KeyCode::Char('4'));
        press(&mut p, KeyCode::Char('2'));

        let row = render_row(&p, 30, 5, 2);
        assert_eq!(row.matches('●').count(), 2, "row: {row:?}");
        assert_eq!(row.matches('○').count(), 4, "row: {row:?}");
        // Filled dots come first
        assert!(row.find('●').unwrap() < row.find('○').unwrap());
    }

    #[test]
    fn test_click_inside_panel_focuses() {
        let mut p = panel();
        render_row(&p, 30, 5, 2);
        assert!(!p.handle_click(40, 2));
        assert!(!p.has_focus());
        assert!(p.handle_click(10, 2));
        assert!(p.has_focus());
    }

    #[test]
    fn test_centered_x_clamps_shake() {
        let inner = Rect::new(1, 1, 20, 3);
        assert_eq!(centered_x(inner, 10, 0), 6);
        assert_eq!(centered_x(inner, 10, 3), 9);
        assert_eq!(centered_x(inner, 10, -100), 1);
        assert_eq!(centered_x(inner, 10, 100), 11);
        assert_eq!(centered_x(inner, 30, 2), 1);
    }

    #[test]
    fn test_tick_settles_finished_shake() {
        let widget = PinCodeWidget::new(
            PinOptions::default(),
            TerminalKeyboard::default(),
            Shake::new(ShakeConfig {
                duration_ms: 0,
                amplitude: 4,
            }),
        );
        let mut p = PinPanel::new(widget, Appearance::default());
        p.widget_mut().attention_mut().play();
        p.tick();
        assert!(!p.widget().attention().is_active());
    }
}
