//! The [`Grid`] type — a rectangular arena of [`Cell`]s.
//!
//! Cells live in a flat row-major vector owned by the grid; back-references
//! between cells are arena indices, so no cell ever owns another. A search
//! mutates cell state in place under the caller's exclusive borrow.

use crate::cell::Cell;
use crate::geom::{Point, Range};

/// A rectangular grid of [`Cell`]s with one source and one target.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
    width: usize,
    source: Point,
    target: Point,
}

impl Grid {
    /// Create a grid of the given dimensions with all cells open.
    ///
    /// The cells at `source` and `target` are flagged accordingly. The grid
    /// assumes well-formed input: distinct, in-bounds endpoints (malformed
    /// grids are the caller's problem, per the engine's contract).
    pub fn new(width: i32, height: i32, source: Point, target: Point) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        let cells = bounds.iter().map(Cell::new).collect();
        let mut grid = Self {
            cells,
            bounds,
            width: bounds.width() as usize,
            source,
            target,
        };
        if let Some(c) = grid.at_mut(source) {
            c.source = true;
        }
        if let Some(c) = grid.at_mut(target) {
            c.target = true;
        }
        grid
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat arena index. Returns `None` if out of
    /// bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    /// Convert a flat arena index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the arena is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.idx(p).map(|i| &mut self.cells[i])
    }

    /// The cell at arena index `idx`.
    #[inline]
    pub fn cell(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// Mutable access to the cell at arena index `idx`.
    #[inline]
    pub fn cell_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }

    /// Position of the source cell.
    #[inline]
    pub fn source(&self) -> Point {
        self.source
    }

    /// Position of the target cell.
    #[inline]
    pub fn target(&self) -> Point {
        self.target
    }

    /// Whether the cell at `p` is a wall. Out-of-bounds points are not walls.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.at(p).is_some_and(|c| c.wall)
    }

    // -----------------------------------------------------------------------
    // Neighbors
    // -----------------------------------------------------------------------

    /// Append the open neighbors of `p` into `buf`: the up/down/left/right
    /// cells that exist within bounds and are not yet marked visited.
    ///
    /// Walls are included — a search relaxes them and discards them at
    /// selection time, which is what keeps them impassable. The caller
    /// clears `buf` before calling.
    pub fn open_neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.at(n).is_some_and(|c| !c.visited) {
                buf.push(n);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Set or clear the wall flag at `p` in place.
    ///
    /// Source and target cells refuse the change; out-of-bounds points are
    /// a no-op.
    pub fn set_wall(&mut self, p: Point, wall: bool) {
        if let Some(c) = self.at_mut(p) {
            if !c.source && !c.target {
                c.wall = wall;
            }
        }
    }

    /// Flip the wall flag at `p` in place, with the same exclusions as
    /// [`set_wall`](Grid::set_wall).
    pub fn toggle_wall(&mut self, p: Point) {
        if let Some(c) = self.at_mut(p) {
            if !c.source && !c.target {
                c.wall = !c.wall;
            }
        }
    }

    /// Reset every cell's search-scoped state.
    ///
    /// Callers run this between searches; the engine never does it
    /// implicitly.
    pub fn clear_search(&mut self) {
        for c in &mut self.cells {
            c.reset_search();
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = Grid::new(4, 3, Point::new(0, 1), Point::new(3, 1));
        g.set_wall(Point::new(2, 0), true);
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back.size(), g.size());
        assert_eq!(back.source(), g.source());
        assert_eq!(back.target(), g.target());
        assert!(back.is_wall(Point::new(2, 0)));
    }
}
