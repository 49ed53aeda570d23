//! Dot indicators
//!
//! Each slot in the row carries an explicit [`DotState`]. The row never
//! inspects how a dot is drawn to decide whether it is filled.

/// Visual state of a single dot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DotState {
    #[default]
    Empty,
    Filled,
}

impl DotState {
    pub fn is_filled(self) -> bool {
        self == DotState::Filled
    }
}

/// Ordered row of dot slots, lowest index first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotRow {
    dots: Vec<DotState>,
}

impl DotRow {
    /// Create a row of `len` empty dots
    pub fn new(len: usize) -> Self {
        Self {
            dots: vec![DotState::Empty; len],
        }
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn as_slice(&self) -> &[DotState] {
        &self.dots
    }

    pub fn get(&self, index: usize) -> Option<DotState> {
        self.dots.get(index).copied()
    }

    /// Number of filled dots
    pub fn filled_count(&self) -> usize {
        self.dots.iter().filter(|d| d.is_filled()).count()
    }

    /// Fill the lowest-indexed empty dot
    ///
    /// Returns the index that changed, or `None` when every dot is already filled.
    pub fn fill_next(&mut self) -> Option<usize> {
        let index = self.dots.iter().position(|d| *d == DotState::Empty)?;
        self.dots[index] = DotState::Filled;
        Some(index)
    }

    /// Empty the highest-indexed filled dot
    ///
    /// Returns the index that changed, or `None` when no dot is filled.
    pub fn clear_last(&mut self) -> Option<usize> {
        let index = self.dots.iter().rposition(|d| d.is_filled())?;
        self.dots[index] = DotState::Empty;
        Some(index)
    }

    /// Reset every dot to empty
    pub fn clear_all(&mut self) {
        self.dots.fill(DotState::Empty);
    }

    /// Re-derive the row from a buffer length: the first `len` dots are
    /// filled, the rest empty. Lengths past the row are clamped.
    pub fn project(&mut self, len: usize) {
        let filled = len.min(self.dots.len());
        for (i, dot) in self.dots.iter_mut().enumerate() {
            *dot = if i < filled {
                DotState::Filled
            } else {
                DotState::Empty
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_row_is_all_empty() {
        let row = DotRow::new(6);
        assert_eq!(row.len(), 6);
        assert_eq!(row.filled_count(), 0);
        assert!(row.as_slice().iter().all(|d| *d == DotState::Empty));
    }

    #[test]
    fn test_fill_next_scans_in_order() {
        let mut row = DotRow::new(3);
        assert_eq!(row.fill_next(), Some(0));
        assert_eq!(row.fill_next(), Some(1));
        assert_eq!(row.fill_next(), Some(2));
        // Nothing left to fill
        assert_eq!(row.fill_next(), None);
        assert_eq!(row.filled_count(), 3);
    }

    #[test]
    fn test_clear_last_picks_highest_filled() {
        let mut row = DotRow::new(6);
        row.project(3);
        assert_eq!(row.clear_last(), Some(2));
        assert_eq!(row.get(2), Some(DotState::Empty));
        assert_eq!(row.get(1), Some(DotState::Filled));
        assert_eq!(row.filled_count(), 2);
    }

    #[test]
    fn test_clear_last_on_empty_row_is_noop() {
        let mut row = DotRow::new(4);
        assert_eq!(row.clear_last(), None);
        assert_eq!(row.filled_count(), 0);
    }

    #[test]
    fn test_project_clamps_to_row_length() {
        let mut row = DotRow::new(4);
        row.project(10);
        assert_eq!(row.filled_count(), 4);

        row.project(1);
        assert_eq!(
            row.as_slice(),
            &[
                DotState::Filled,
                DotState::Empty,
                DotState::Empty,
                DotState::Empty
            ]
        );
    }

    #[test]
    fn test_clear_all() {
        let mut row = DotRow::new(5);
        row.project(5);
        row.clear_all();
        assert_eq!(row.filled_count(), 0);
    }
}
