//! The [`Cell`] type — per-cell state for grid searches.

use crate::geom::Point;

/// Sentinel value meaning "not yet reached" for distances and heuristics.
pub const UNREACHABLE: i32 = i32::MAX;

/// A single grid cell.
///
/// `distance`, `heuristic`, `visited` and `prev` are search-scoped: a search
/// run mutates them in place, and the caller resets them (via
/// [`reset_search`](Cell::reset_search) or `Grid::clear_search`) before the
/// next run. `wall` belongs to the grid layout and survives resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Grid position (x = column, y = row).
    pub pos: Point,
    /// Cost from the search source, in unit steps.
    pub distance: i32,
    /// Manhattan estimate to the search target.
    pub heuristic: i32,
    /// Walls are never traversable and never selected as source or target.
    pub wall: bool,
    /// Whether a search has finalized this cell.
    pub visited: bool,
    /// Exactly one cell per grid carries this flag.
    pub source: bool,
    /// Exactly one cell per grid carries this flag.
    pub target: bool,
    /// Arena index of the cell this one was reached from. Not an owning
    /// link; used only for path reconstruction.
    pub prev: Option<usize>,
}

impl Cell {
    /// A fresh open cell at `pos`.
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            distance: UNREACHABLE,
            heuristic: UNREACHABLE,
            wall: false,
            visited: false,
            source: false,
            target: false,
            prev: None,
        }
    }

    /// Restore the search-scoped fields to their initial values.
    ///
    /// Layout state (`wall`, `source`, `target`) is untouched.
    pub fn reset_search(&mut self) {
        self.distance = UNREACHABLE;
        self.heuristic = UNREACHABLE;
        self.visited = false;
        self.prev = None;
    }
}
