//! Path reconstruction over back-references.

use pathgrid_core::{Grid, Point};

/// Walk the back-reference chain from `target` and return the cells in
/// source-to-target order.
///
/// Read-only: must be called after a search has populated `prev` links. If
/// the search never touched the target, the chain is empty and the result
/// is exactly `[target]` — callers decide whether the path is real by
/// checking the target's membership in the visitation order.
pub fn path_to(grid: &Grid, target: Point) -> Vec<Point> {
    let mut path = Vec::new();
    let Some(mut ci) = grid.idx(target) else {
        return path;
    };
    loop {
        path.push(grid.cell(ci).pos);
        match grid.cell(ci).prev {
            Some(pi) => ci = pi,
            None => break,
        }
    }
    path.reverse();
    path
}
