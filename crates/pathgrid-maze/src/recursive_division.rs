//! Recursive-division maze generation.
//!
//! The generator walls the rectangle's perimeter, then repeatedly bisects
//! the interior with a wall carrying a single passage, recursing into both
//! halves until regions are too small to divide. Only the `wall` flag is
//! mutated; the ordered sequence of placed walls is returned so a caller
//! can animate the construction.

use pathgrid_core::{Grid, Point, Range};
use rand::Rng;
use rand::RngExt;

/// Direction of a bisecting wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Horizontal,
    Vertical,
}

/// Maze generator with an injected random source.
///
/// Seed the `rng` for reproducible layouts; every random decision
/// (orientation ties, wall line, passage position) draws from it.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator around the given random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Fill `rect` with a recursive-division maze.
    ///
    /// Returns every cell marked as a wall, in placement order: the
    /// perimeter first (top edge left-to-right, right edge top-to-bottom,
    /// bottom edge right-to-left, left edge bottom-to-top), then the
    /// pre-order concatenation of the interior division walls. The grid's
    /// source and target cells are never walled.
    pub fn recursive_division(&mut self, grid: &mut Grid, rect: Range) -> Vec<Point> {
        let mut walls = Vec::new();
        if rect.is_empty() {
            return walls;
        }
        build_perimeter(grid, rect, &mut walls);
        let interior = rect.shift(1, 1, -1, -1);
        self.divide(grid, interior, &mut walls);
        walls
    }

    fn divide(&mut self, grid: &mut Grid, rect: Range, walls: &mut Vec<Point>) {
        // Too small to hold an interior wall with a passage.
        if rect.width() <= 3 || rect.height() <= 3 {
            return;
        }

        let orientation = self.pick_orientation(rect);
        let lines = valid_lines(grid, rect, orientation);
        if lines.is_empty() {
            // Every candidate line would seal a passage of an earlier wall.
            log::debug!("no valid {orientation:?} line in {rect}, leaving region open");
            return;
        }
        let line = lines[self.rng.random_range(0..lines.len())];

        match orientation {
            Orientation::Horizontal => {
                let passage = self.rng.random_range(rect.min.x..rect.max.x);
                for x in rect.min.x..rect.max.x {
                    if x == passage {
                        continue;
                    }
                    place_wall(grid, Point::new(x, line), walls);
                }
                self.divide(
                    grid,
                    Range::new(rect.min.x, rect.min.y, rect.max.x, line),
                    walls,
                );
                self.divide(
                    grid,
                    Range::new(rect.min.x, line + 1, rect.max.x, rect.max.y),
                    walls,
                );
            }
            Orientation::Vertical => {
                let passage = self.rng.random_range(rect.min.y..rect.max.y);
                for y in rect.min.y..rect.max.y {
                    if y == passage {
                        continue;
                    }
                    place_wall(grid, Point::new(line, y), walls);
                }
                self.divide(
                    grid,
                    Range::new(rect.min.x, rect.min.y, line, rect.max.y),
                    walls,
                );
                self.divide(
                    grid,
                    Range::new(line + 1, rect.min.y, rect.max.x, rect.max.y),
                    walls,
                );
            }
        }
    }

    /// Bisect across the longer axis; flip a coin on square regions.
    fn pick_orientation(&mut self, rect: Range) -> Orientation {
        use std::cmp::Ordering;
        match rect.width().cmp(&rect.height()) {
            Ordering::Less => Orientation::Horizontal,
            Ordering::Greater => Orientation::Vertical,
            Ordering::Equal => {
                if self.rng.random::<bool>() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                }
            }
        }
    }
}

/// Wall every cell on the rectangle's edges, in fixed traversal order.
///
/// Corner cells are marked by the first edge that reaches them, so a W×H
/// rectangle contributes `2W + 2H - 4` entries.
fn build_perimeter(grid: &mut Grid, rect: Range, walls: &mut Vec<Point>) {
    for x in rect.min.x..rect.max.x {
        place_wall(grid, Point::new(x, rect.min.y), walls);
    }
    for y in rect.min.y..rect.max.y {
        place_wall(grid, Point::new(rect.max.x - 1, y), walls);
    }
    for x in (rect.min.x..rect.max.x).rev() {
        place_wall(grid, Point::new(x, rect.max.y - 1), walls);
    }
    for y in (rect.min.y..rect.max.y).rev() {
        place_wall(grid, Point::new(rect.min.x, y), walls);
    }
}

/// Mark `p` as a wall and record it, unless it is the source, the target,
/// or already a wall.
fn place_wall(grid: &mut Grid, p: Point, walls: &mut Vec<Point>) {
    if let Some(c) = grid.at_mut(p) {
        if !c.source && !c.target && !c.wall {
            c.wall = true;
            walls.push(p);
        }
    }
}

/// Candidate bisection lines for `rect`.
///
/// A line must keep both halves non-degenerate (strictly inside the
/// region, never along a bounding wall) and must land on walls at both
/// extended ends — a line ending beside a passage of an earlier wall
/// would seal it and disconnect the maze.
fn valid_lines(grid: &Grid, rect: Range, orientation: Orientation) -> Vec<i32> {
    let mut lines = Vec::new();
    match orientation {
        Orientation::Horizontal => {
            for y in rect.min.y + 1..rect.max.y - 1 {
                if grid.is_wall(Point::new(rect.min.x - 1, y))
                    && grid.is_wall(Point::new(rect.max.x, y))
                {
                    lines.push(y);
                }
            }
        }
        Orientation::Vertical => {
            for x in rect.min.x + 1..rect.max.x - 1 {
                if grid.is_wall(Point::new(x, rect.min.y - 1))
                    && grid.is_wall(Point::new(x, rect.max.y))
                {
                    lines.push(x);
                }
            }
        }
    }
    lines
}
