use std::collections::HashMap;

use tablesort_lib::{SortDirection, SortState};

/// Sort state of every column of one table.
///
/// At most one column is ascending or descending at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSortState {
    columns: HashMap<usize, SortState>,
}

impl TableSortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State of a column; columns never activated are [`SortState::None`].
    pub fn get(&self, column: usize) -> SortState {
        self.columns.get(&column).copied().unwrap_or_default()
    }

    /// The active column and its direction, if any.
    pub fn active(&self) -> Option<(usize, SortDirection)> {
        self.columns
            .iter()
            .find_map(|(&col, state)| state.direction().map(|dir| (col, dir)))
    }

    /// Activate a column: an ascending column turns descending, anything else
    /// turns ascending, and every other column is reset.
    pub fn activate(&mut self, column: usize) -> SortDirection {
        let direction = self.get(column).next_direction();
        self.columns.clear();
        self.columns.insert(column, direction.into());
        direction
    }

    /// Reset every column to [`SortState::None`].
    pub fn clear(&mut self) {
        self.columns.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_column_toggles() {
        let mut state = TableSortState::new();
        assert_eq!(state.activate(1), SortDirection::Ascending);
        assert_eq!(state.activate(1), SortDirection::Descending);
        assert_eq!(state.activate(1), SortDirection::Ascending);
        assert_eq!(state.active(), Some((1, SortDirection::Ascending)));
    }

    #[test]
    fn test_other_column_starts_ascending_and_resets_siblings() {
        let mut state = TableSortState::new();
        state.activate(0);
        state.activate(0);
        assert_eq!(state.get(0), SortState::Descending);

        assert_eq!(state.activate(2), SortDirection::Ascending);
        assert_eq!(state.get(0), SortState::None);
        assert_eq!(state.get(2), SortState::Ascending);

        // Coming back to the first column starts over.
        assert_eq!(state.activate(0), SortDirection::Ascending);
    }

    #[test]
    fn test_clear() {
        let mut state = TableSortState::new();
        state.activate(3);
        state.clear();
        assert_eq!(state.active(), None);
        assert_eq!(state.get(3), SortState::None);
    }
}
