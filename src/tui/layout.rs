/// Responsive breakpoint for TUI layout decisions.
///
/// Single source of truth for width thresholds - no magic numbers scattered in render code.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 50 cols: hints dropped from the status bar
    Compact,
    /// 50+ cols: full status bar
    Normal,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=49 => Breakpoint::Compact,
            _ => Breakpoint::Normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(20), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(49), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(50), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(200), Breakpoint::Normal);
    }
}
