use smallvec::SmallVec;
use std::collections::BTreeSet;

use crate::*;

/// Live selection paths rarely outgrow a 4x4 board.
pub type PathBuf = SmallVec<[Coord2; 16]>;

/// Full re-check of a finished path: in-bounds, non-repeating, and
/// Chebyshev-connected, with a minimum of two steps.
///
/// The incremental [`Selection`] machine maintains the same invariants while
/// the path is being built; this linear scan deliberately re-verifies them at
/// submission time so the two can never disagree.
pub fn is_valid_path(grid: &Grid, path: &[Coord2]) -> bool {
    if path.len() < 2 {
        return false;
    }

    let mut visited = BTreeSet::new();
    let mut prev: Option<Coord2> = None;
    for &coords in path {
        if !grid.contains(coords) {
            return false;
        }
        if !visited.insert(coords) {
            return false;
        }
        if let Some(prev) = prev {
            if !is_adjacent(prev, coords) {
                return false;
            }
        }
        prev = Some(coords);
    }
    true
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    Selecting,
}

/// Result of feeding one cell event into the selection machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExtendOutcome {
    /// The cell was appended to the path.
    Appended,
    /// The cell was the immediate predecessor; the last step was undone.
    Backtracked,
    /// Out of bounds, non-adjacent, revisited, or no selection in progress.
    Ignored,
}

/// Incremental path construction driven by pointer events from the
/// interactive layer: `start`, `extend`, `end`, `cancel`.
///
/// Only the immediate-predecessor backtrack is allowed; touching any older
/// path cell is a no-op rather than a truncation, so a stray drag across the
/// middle of the path cannot destroy it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    bounds: Coord,
    state: SelectionState,
    path: PathBuf,
}

impl Selection {
    pub fn new(bounds: Coord) -> Self {
        Self {
            bounds,
            state: SelectionState::Idle,
            path: PathBuf::new(),
        }
    }

    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.size())
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn is_selecting(&self) -> bool {
        self.state == SelectionState::Selecting
    }

    pub fn path(&self) -> &[Coord2] {
        &self.path
    }

    fn in_bounds(&self, coords: Coord2) -> bool {
        coords.0 < self.bounds && coords.1 < self.bounds
    }

    /// Begins a fresh selection at `coords`. Starting over while a selection
    /// is in progress discards the old path.
    pub fn start(&mut self, coords: Coord2) {
        if !self.in_bounds(coords) {
            return;
        }
        self.path.clear();
        self.path.push(coords);
        self.state = SelectionState::Selecting;
    }

    pub fn extend(&mut self, coords: Coord2) -> ExtendOutcome {
        use ExtendOutcome::*;

        if self.state != SelectionState::Selecting || !self.in_bounds(coords) {
            return Ignored;
        }

        if self.path.len() >= 2 && coords == self.path[self.path.len() - 2] {
            self.path.pop();
            return Backtracked;
        }

        if self.path.contains(&coords) {
            return Ignored;
        }

        match self.path.last() {
            Some(&last) if is_adjacent(last, coords) => {
                self.path.push(coords);
                Appended
            }
            _ => Ignored,
        }
    }

    /// Finishes the selection and hands the path to the caller for
    /// submission. The machine returns to idle with an empty path.
    pub fn end(&mut self) -> PathBuf {
        self.state = SelectionState::Idle;
        core::mem::take(&mut self.path)
    }

    /// Abandons the selection with no side effects.
    pub fn cancel(&mut self) {
        self.state = SelectionState::Idle;
        self.path.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::tests::grid;

    #[test]
    fn validator_accepts_a_snaking_path() {
        let board = grid(&["cats", "odgs", "wxyz", "abcd"]);
        assert!(is_valid_path(&board, &[(0, 0), (0, 1), (1, 2), (2, 3)]));
    }

    #[test]
    fn validator_rejects_short_paths() {
        let board = grid(&["ab", "cd"]);
        assert!(!is_valid_path(&board, &[]));
        assert!(!is_valid_path(&board, &[(0, 0)]));
    }

    #[test]
    fn validator_rejects_revisits_and_jumps() {
        let board = grid(&["cats", "odgs", "wxyz", "abcd"]);
        // revisit
        assert!(!is_valid_path(&board, &[(0, 0), (0, 1), (0, 0)]));
        // knight jump
        assert!(!is_valid_path(&board, &[(0, 0), (2, 1)]));
        // out of bounds
        assert!(!is_valid_path(&board, &[(0, 3), (0, 4)]));
    }

    #[test]
    fn every_accepted_pair_has_chebyshev_distance_one() {
        let board = grid(&["cats", "odgs", "wxyz", "abcd"]);
        let path = [(3, 0), (2, 1), (1, 1), (0, 0)];
        assert!(is_valid_path(&board, &path));
        for pair in path.windows(2) {
            assert!(is_adjacent(pair[0], pair[1]));
        }
    }

    #[test]
    fn selection_builds_a_path() {
        let mut selection = Selection::new(4);
        selection.start((1, 1));
        assert_eq!(selection.extend((1, 2)), ExtendOutcome::Appended);
        assert_eq!(selection.extend((2, 3)), ExtendOutcome::Appended);
        let path = selection.end();
        assert_eq!(path.as_slice(), &[(1, 1), (1, 2), (2, 3)]);
        assert!(!selection.is_selecting());
        assert!(selection.path().is_empty());
    }

    #[test]
    fn backtracking_undoes_exactly_one_step() {
        let mut selection = Selection::new(4);
        selection.start((0, 0));
        selection.extend((0, 1));
        selection.extend((1, 2));

        assert_eq!(selection.extend((0, 1)), ExtendOutcome::Backtracked);
        assert_eq!(selection.path(), &[(0, 0), (0, 1)]);
    }

    #[test]
    fn only_the_immediate_predecessor_backtracks() {
        let mut selection = Selection::new(4);
        selection.start((0, 0));
        selection.extend((0, 1));
        selection.extend((0, 2));
        selection.extend((1, 2));

        // Head of the path, but not the predecessor of the last cell.
        assert_eq!(selection.extend((0, 1)), ExtendOutcome::Ignored);
        assert_eq!(selection.path().len(), 4);
    }

    #[test]
    fn non_adjacent_and_out_of_bounds_cells_are_ignored() {
        let mut selection = Selection::new(4);
        selection.start((0, 0));
        assert_eq!(selection.extend((2, 2)), ExtendOutcome::Ignored);
        assert_eq!(selection.extend((0, 4)), ExtendOutcome::Ignored);
        assert_eq!(selection.path(), &[(0, 0)]);
    }

    #[test]
    fn cancel_discards_the_path() {
        let mut selection = Selection::new(4);
        selection.start((2, 2));
        selection.extend((2, 3));
        selection.cancel();
        assert_eq!(selection.state(), SelectionState::Idle);
        assert!(selection.path().is_empty());
        // extend after cancel is a no-op
        assert_eq!(selection.extend((2, 2)), ExtendOutcome::Ignored);
    }
}
