//! Exhaustive depth-first exploration with randomized branching.

use pathgrid_core::{Grid, Point};
use rand::Rng;
use rand::RngExt;

/// Explore the grid depth-first from `from` until `to` is found or every
/// reachable cell has been visited.
///
/// Unvisited neighbors are pushed in randomized order drawn from `rng`, and
/// each pushed cell's back-reference is written at push time — so a cell's
/// recorded parent is whichever visited neighbor pushed it last, not
/// necessarily the cell it was eventually discovered from. The parent links
/// still chain back to the source, but make no shortest-path claim.
///
/// Returns the visitation order, target last when reached. Seed the `rng`
/// for reproducible runs.
pub fn depth_first<R: Rng>(grid: &mut Grid, from: Point, to: Point, rng: &mut R) -> Vec<Point> {
    let mut order = Vec::new();
    let Some(start) = grid.idx(from) else {
        return order;
    };
    let Some(goal) = grid.idx(to) else {
        return order;
    };

    let mut stack = vec![start];
    let mut nbuf: Vec<Point> = Vec::with_capacity(4);

    while let Some(ci) = stack.pop() {
        // Walls are discarded silently; so are cells a second pusher left
        // duplicated on the stack.
        if grid.cell(ci).wall || grid.cell(ci).visited {
            continue;
        }

        let cp = grid.cell(ci).pos;
        grid.cell_mut(ci).visited = true;
        order.push(cp);

        if ci == goal {
            return order;
        }

        nbuf.clear();
        grid.open_neighbors(cp, &mut nbuf);
        while !nbuf.is_empty() {
            let pick = rng.random_range(0..nbuf.len());
            let np = nbuf.swap_remove(pick);
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            grid.cell_mut(ni).prev = Some(ci);
            stack.push(ni);
        }
    }

    order
}
