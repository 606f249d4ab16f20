//! Uniform-cost (Dijkstra) exploration.

use pathgrid_core::{Grid, Point};

use crate::frontier::best_first;

/// Explore the grid from `from` toward `to` in order of distance alone.
///
/// Returns the visitation order; if the target was reached it is the last
/// element. Ties between equally distant cells resolve by arena order, so
/// the sequence is fully deterministic. Mutates search-scoped cell state in
/// place; the caller resets it (`Grid::clear_search`) between runs.
pub fn dijkstra(grid: &mut Grid, from: Point, to: Point) -> Vec<Point> {
    best_first(grid, from, to, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::path_to;
    use pathgrid_core::UNREACHABLE;

    fn open_3x3() -> Grid {
        Grid::new(3, 3, Point::new(0, 0), Point::new(2, 2))
    }

    #[test]
    fn visits_in_distance_then_arena_order() {
        let mut g = open_3x3();
        let order = dijkstra(&mut g, Point::new(0, 0), Point::new(2, 2));
        // Distance rings expand with ties resolved by row-major index.
        assert_eq!(
            order,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(2, 0),
                Point::new(1, 1),
                Point::new(0, 2),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn open_grid_shortest_path_spans_manhattan_distance() {
        let mut g = open_3x3();
        let order = dijkstra(&mut g, Point::new(0, 0), Point::new(2, 2));
        assert!(order.len() <= 9);
        assert_eq!(order.last(), Some(&Point::new(2, 2)));

        let path = path_to(&g, Point::new(2, 2));
        assert_eq!(path.len(), 5); // 4 unit edges
        assert_eq!(path[0], Point::new(0, 0));
        assert_eq!(path[4], Point::new(2, 2));
        for pair in path.windows(2) {
            let d = pair[1] - pair[0];
            assert_eq!(d.x.abs() + d.y.abs(), 1);
        }
    }

    #[test]
    fn walls_are_never_visited() {
        let mut g = Grid::new(5, 5, Point::new(0, 0), Point::new(4, 4));
        g.set_wall(Point::new(2, 0), true);
        g.set_wall(Point::new(2, 1), true);
        g.set_wall(Point::new(2, 2), true);
        let order = dijkstra(&mut g, Point::new(0, 0), Point::new(4, 4));
        for p in &order {
            assert!(!g.is_wall(*p));
        }
        assert_eq!(order.last(), Some(&Point::new(4, 4)));
        // Column 2 stays open below the wall, so a Manhattan-length route
        // survives: 8 edges, 9 cells.
        let path = path_to(&g, Point::new(4, 4));
        assert_eq!(path.len(), 9);
    }

    #[test]
    fn enclosed_target_is_never_visited() {
        // Target (2,2) sealed inside a full wall ring.
        let mut g = Grid::new(5, 5, Point::new(0, 0), Point::new(2, 2));
        for x in 1..=3 {
            for y in 1..=3 {
                if !(x == 2 && y == 2) {
                    g.set_wall(Point::new(x, y), true);
                }
            }
        }
        let order = dijkstra(&mut g, Point::new(0, 0), Point::new(2, 2));
        // Every reachable open cell, target excluded: 25 - 8 walls - 1.
        assert_eq!(order.len(), 16);
        assert!(!order.contains(&Point::new(2, 2)));
        // The untouched target reconstructs to itself alone.
        assert_eq!(path_to(&g, Point::new(2, 2)), vec![Point::new(2, 2)]);
        assert_eq!(g.at(Point::new(2, 2)).unwrap().distance, UNREACHABLE);
    }

    #[test]
    fn rerun_after_clear_is_identical() {
        let mut g = open_3x3();
        let first = dijkstra(&mut g, Point::new(0, 0), Point::new(2, 2));
        g.clear_search();
        let second = dijkstra(&mut g, Point::new(0, 0), Point::new(2, 2));
        assert_eq!(first, second);
    }
}
