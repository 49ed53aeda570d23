// UI rendering
//
// Lays out the screen:
//
//   ┌ title ─────────────────────────┐
//   │        ╭ PIN ───────────╮      │
//   │        │  ● ● ○ ○ ○ ○   │      │
//   │        ╰────────────────╯      │
//   │ status bar                     │
//   │ logs panel                     │
//   └────────────────────────────────┘

use super::app::App;
use super::components::{logs_panel, status_bar};
use super::traits::{Component, RenderContext};
use crate::config::VERSION;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Height of the PIN panel including borders
const PIN_PANEL_HEIGHT: u16 = 5;

/// Preferred PIN panel width
const PIN_PANEL_WIDTH: u16 = 40;

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    let theme = &app.theme;

    f.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let [title_area, _, pin_row, status_area, logs_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(PIN_PANEL_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let title = Paragraph::new(format!("dotpin v{}", VERSION))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(title, title_area);

    let [pin_area] = Layout::horizontal([Constraint::Length(PIN_PANEL_WIDTH.min(pin_row.width))])
        .flex(Flex::Center)
        .areas(pin_row);
    let ctx = RenderContext::new(theme, app.animation_frame);
    app.pin_panel.render(f, pin_area, &ctx);

    status_bar::render(f, status_area, app);

    if logs_area.height > 2 {
        let entries = app
            .log_buffer
            .recent(logs_panel::visible_rows(logs_area.height));
        logs_panel::render(f, logs_area, &entries, theme);
    }

    if let Some(toast) = &app.toast {
        toast.render(f, area, theme);
    }
}
