// Status bar component
//
// Renders the widget state at the bottom: focus, filled dots, completion
// signal, and the panel's keybind hints when there is room.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::tui::traits::Interactive;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let widget = app.pin_panel.widget();

    let focus = if app.pin_panel.has_focus() {
        "typing"
    } else {
        "idle"
    };
    let (complete_label, complete_color) = if widget.is_complete_signalled() {
        ("complete", theme.complete)
    } else {
        ("incomplete", theme.muted)
    };

    let mut spans = vec![
        Span::styled(format!(" {} ", focus), Style::default().fg(theme.title)),
        Span::styled("│", Style::default().fg(theme.border)),
        Span::styled(
            format!(" {}/{} ", widget.filled_count(), widget.max_length()),
            Style::default().fg(theme.foreground),
        ),
        Span::styled("│", Style::default().fg(theme.border)),
        Span::styled(
            format!(" {} ", complete_label),
            Style::default().fg(complete_color),
        ),
    ];

    if Breakpoint::from_width(area.width) == Breakpoint::Normal {
        if let Some(hint) = app.pin_panel.focus_hint() {
            spans.push(Span::styled("│ ", Style::default().fg(theme.border)));
            spans.push(Span::styled(hint, Style::default().fg(theme.muted)));
        }
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.background)),
        area,
    );
}
