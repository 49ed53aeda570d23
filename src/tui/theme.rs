// Theme support for the TUI
//
// Colour palettes selectable by name from config. "Terminal" uses the
// terminal's ANSI palette, the others use true colour (RGB).

use ratatui::style::Color;

/// Color palette for the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,
    pub title: Color,
    pub muted: Color,
    pub highlight: Color,

    // Dot colors
    pub dot_filled: Color,
    pub dot_empty: Color,

    // Completion flag
    pub complete: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate()
    }
}

impl Theme {
    /// Names accepted by [`Theme::by_name`]
    pub const NAMES: [&'static str; 5] = ["Slate", "Dracula", "Nord", "Gruvbox", "Terminal"];

    /// Load theme by name (case-insensitive)
    ///
    /// Returns `None` for unknown names so the caller can report them.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "slate" => Some(Self::slate()),
            "dracula" => Some(Self::dracula()),
            "nord" => Some(Self::nord()),
            "gruvbox" => Some(Self::gruvbox()),
            "terminal" => Some(Self::terminal()),
            _ => None,
        }
    }

    /// Slate - the default, grey dots on a dark background
    pub fn slate() -> Self {
        Self {
            name: "Slate".to_string(),
            background: Color::Rgb(0x1e, 0x22, 0x27),
            foreground: Color::Rgb(0xd8, 0xdc, 0xe0),
            border: Color::Rgb(0x4a, 0x52, 0x5a),
            border_focused: Color::Rgb(0x8a, 0xb4, 0xf8),
            title: Color::Rgb(0x8a, 0xb4, 0xf8),
            muted: Color::Rgb(0x6b, 0x73, 0x7c),
            highlight: Color::Rgb(0xf2, 0xc9, 0x4c),
            dot_filled: Color::Rgb(0x5f, 0x63, 0x68), // dark grey
            dot_empty: Color::Rgb(0xbd, 0xc1, 0xc6),  // light grey
            complete: Color::Rgb(0x81, 0xc9, 0x95),
            log_error: Color::Rgb(0xf2, 0x8b, 0x82),
            log_warn: Color::Rgb(0xf2, 0xc9, 0x4c),
            log_info: Color::Rgb(0x8a, 0xb4, 0xf8),
            log_debug: Color::Rgb(0x6b, 0x73, 0x7c),
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "Dracula".to_string(),
            background: Color::Rgb(0x28, 0x2a, 0x36),
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            border: Color::Rgb(0x62, 0x72, 0xa4),         // comment
            border_focused: Color::Rgb(0xbd, 0x93, 0xf9), // purple
            title: Color::Rgb(0x8b, 0xe9, 0xfd),          // cyan
            muted: Color::Rgb(0x62, 0x72, 0xa4),
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c), // yellow
            dot_filled: Color::Rgb(0xff, 0x79, 0xc6), // pink
            dot_empty: Color::Rgb(0x44, 0x47, 0x5a),  // current line
            complete: Color::Rgb(0x50, 0xfa, 0x7b),   // green
            log_error: Color::Rgb(0xff, 0x55, 0x55),
            log_warn: Color::Rgb(0xff, 0xb8, 0x6c),
            log_info: Color::Rgb(0x8b, 0xe9, 0xfd),
            log_debug: Color::Rgb(0x62, 0x72, 0xa4),
        }
    }

    /// Nord theme - https://www.nordtheme.com
    pub fn nord() -> Self {
        Self {
            name: "Nord".to_string(),
            background: Color::Rgb(0x2e, 0x34, 0x40), // nord0
            foreground: Color::Rgb(0xec, 0xef, 0xf4), // nord6
            border: Color::Rgb(0x4c, 0x56, 0x6a),     // nord3
            border_focused: Color::Rgb(0x88, 0xc0, 0xd0),
            title: Color::Rgb(0x88, 0xc0, 0xd0), // nord8
            muted: Color::Rgb(0x4c, 0x56, 0x6a),
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b), // nord13
            dot_filled: Color::Rgb(0x81, 0xa1, 0xc1), // nord9
            dot_empty: Color::Rgb(0x43, 0x4c, 0x5e),  // nord2
            complete: Color::Rgb(0xa3, 0xbe, 0x8c),   // nord14
            log_error: Color::Rgb(0xbf, 0x61, 0x6a),
            log_warn: Color::Rgb(0xeb, 0xcb, 0x8b),
            log_info: Color::Rgb(0x88, 0xc0, 0xd0),
            log_debug: Color::Rgb(0x4c, 0x56, 0x6a),
        }
    }

    /// Gruvbox dark theme
    pub fn gruvbox() -> Self {
        Self {
            name: "Gruvbox".to_string(),
            background: Color::Rgb(0x28, 0x28, 0x28),
            foreground: Color::Rgb(0xeb, 0xdb, 0xb2),
            border: Color::Rgb(0x66, 0x5c, 0x54),
            border_focused: Color::Rgb(0xfe, 0x80, 0x19), // orange
            title: Color::Rgb(0x83, 0xa5, 0x98),
            muted: Color::Rgb(0x92, 0x83, 0x74),
            highlight: Color::Rgb(0xfa, 0xbd, 0x2f),
            dot_filled: Color::Rgb(0xfe, 0x80, 0x19),
            dot_empty: Color::Rgb(0x50, 0x49, 0x45),
            complete: Color::Rgb(0xb8, 0xbb, 0x26),
            log_error: Color::Rgb(0xfb, 0x49, 0x34),
            log_warn: Color::Rgb(0xfa, 0xbd, 0x2f),
            log_info: Color::Rgb(0x83, 0xa5, 0x98),
            log_debug: Color::Rgb(0x92, 0x83, 0x74),
        }
    }

    /// Terminal theme - uses the terminal's ANSI palette
    pub fn terminal() -> Self {
        Self {
            name: "Terminal".to_string(),
            background: Color::Reset,
            foreground: Color::Reset,
            border: Color::Gray,
            border_focused: Color::Cyan,
            title: Color::Cyan,
            muted: Color::DarkGray,
            highlight: Color::Yellow,
            dot_filled: Color::White,
            dot_empty: Color::DarkGray,
            complete: Color::Green,
            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_name_resolves() {
        for name in Theme::NAMES {
            let theme = Theme::by_name(name).expect(name);
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(Theme::by_name("NORD"), Some(Theme::nord()));
        assert_eq!(Theme::by_name("unknown"), None);
    }
}
