//! Logs panel component
//!
//! Shows the most recent captured log entries, newest at the bottom,
//! colour-coded by level.

use crate::logging::{LogEntry, LogLevel};
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, entries: &[LogEntry], theme: &Theme) {
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            ListItem::new(format_log_entry(entry)).style(log_level_style(entry.level, theme))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title(" Logs ")
        .style(Style::default().bg(theme.background));

    f.render_widget(List::new(items).block(block), area);
}

/// Rows available for entries inside a bordered panel of `height`
pub fn visible_rows(height: u16) -> usize {
    usize::from(height.saturating_sub(2))
}

fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "{} {:5} {}: {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        short_target(&entry.target),
        entry.message
    )
}

/// Module path without the crate prefix (`dotpin::pin::widget` -> `pin::widget`)
fn short_target(target: &str) -> &str {
    target.strip_prefix("dotpin::").unwrap_or(target)
}

fn log_level_style(level: LogLevel, theme: &Theme) -> Style {
    let color = match level {
        LogLevel::Error => theme.log_error,
        LogLevel::Warn => theme.log_warn,
        LogLevel::Info => theme.log_info,
        LogLevel::Debug | LogLevel::Trace => theme.log_debug,
    };
    Style::default().fg(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_format_log_entry() {
        let entry = LogEntry {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 5).unwrap(),
            level: LogLevel::Info,
            target: "dotpin::pin".to_string(),
            message: "PIN cleared".to_string(),
        };
        assert_eq!(
            format_log_entry(&entry),
            "09:30:05 INFO  pin: PIN cleared"
        );
    }

    #[test]
    fn test_short_target() {
        assert_eq!(short_target("dotpin::tui::app"), "tui::app");
        assert_eq!(short_target("dotpin"), "dotpin");
        assert_eq!(short_target("tokio::runtime"), "tokio::runtime");
    }

    #[test]
    fn test_visible_rows_excludes_borders() {
        assert_eq!(visible_rows(10), 8);
        assert_eq!(visible_rows(1), 0);
    }
}
