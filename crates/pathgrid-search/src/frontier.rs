//! The frontier loop shared by Dijkstra and A*.
//!
//! Both algorithms run the same uniform-cost expansion; they differ only in
//! the key that orders the frontier. The frontier is a `BinaryHeap` with
//! lazy invalidation: relaxing a cell pushes a fresh entry, and stale
//! entries are skipped when popped. This reproduces, entry for entry, the
//! visitation order of the naive all-cells frontier with stable minimum
//! selection.

use std::collections::BinaryHeap;

use pathgrid_core::{Grid, Point, UNREACHABLE, manhattan};

/// Reference into the cell arena, ordered by sort key for use in
/// `BinaryHeap`.
///
/// Keys compare by `f`, then `h` (the A* tie-break), then arena index —
/// ascending index is the original frontier order, so equal keys resolve
/// exactly as stable selection over the row-major cell list would.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) h: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Expand the grid from `from` toward `to`, returning the visitation order.
///
/// With `use_heuristic` the frontier orders by `distance + heuristic`
/// (ties by smaller heuristic); without it, by `distance` alone. Cell
/// state (`distance`, `heuristic`, `visited`, `prev`) is mutated in place
/// and is expected to be in its initial state on entry.
pub(crate) fn best_first(
    grid: &mut Grid,
    from: Point,
    to: Point,
    use_heuristic: bool,
) -> Vec<Point> {
    let mut order = Vec::new();
    let Some(start) = grid.idx(from) else {
        return order;
    };
    let Some(goal) = grid.idx(to) else {
        return order;
    };

    // Precompute every open cell's estimate against the fixed target. Only
    // the heuristic ordering reads it, but the precomputation is harmless
    // and runs unconditionally.
    for i in 0..grid.len() {
        if grid.cell(i).wall {
            continue;
        }
        let h = manhattan(grid.point(i), to);
        grid.cell_mut(i).heuristic = h;
    }

    grid.cell_mut(start).distance = 0;

    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    let start_h = if use_heuristic {
        grid.cell(start).heuristic
    } else {
        0
    };
    open.push(NodeRef {
        idx: start,
        f: start_h,
        h: start_h,
    });

    let mut nbuf: Vec<Point> = Vec::with_capacity(4);

    while let Some(current) = open.pop() {
        let ci = current.idx;

        // Skip stale entries for cells already finalized.
        if grid.cell(ci).visited {
            continue;
        }
        // A selected wall is discarded silently: not visited, not recorded,
        // not expanded.
        if grid.cell(ci).wall {
            continue;
        }

        let cp = grid.cell(ci).pos;
        let current_d = grid.cell(ci).distance;
        grid.cell_mut(ci).visited = true;
        order.push(cp);

        if ci == goal {
            return order;
        }

        nbuf.clear();
        grid.open_neighbors(cp, &mut nbuf);

        let next = current_d + 1;
        for &np in nbuf.iter() {
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            let n = grid.cell_mut(ni);
            if n.distance == UNREACHABLE || next < n.distance {
                n.distance = next;
                n.prev = Some(ci);
                // Walls keep an UNREACHABLE heuristic; saturate so their
                // keys sort last instead of overflowing.
                let (f, h) = if use_heuristic {
                    (next.saturating_add(n.heuristic), n.heuristic)
                } else {
                    (next, 0)
                };
                open.push(NodeRef { idx: ni, f, h });
            }
        }
    }

    // Heap exhausted: no frontier cell has finite distance left, so the
    // remaining cells (the target included) are unreachable.
    order
}
