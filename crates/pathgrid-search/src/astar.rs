//! Heuristic-guided (A*) exploration.

use pathgrid_core::{Grid, Point};

use crate::frontier::best_first;

/// Explore the grid from `from` toward `to`, ordering the frontier by
/// `distance + heuristic` with ties broken by smaller heuristic.
///
/// The heuristic is the Manhattan distance to the target, precomputed per
/// run; with unit edge costs it never overestimates, so A* finds the same
/// path length as [`dijkstra`](crate::dijkstra) while usually visiting far
/// fewer cells. Returns the visitation order, target last when reached.
pub fn astar(grid: &mut Grid, from: Point, to: Point) -> Vec<Point> {
    best_first(grid, from, to, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::dijkstra;
    use crate::path::path_to;

    #[test]
    fn heads_straight_for_the_target() {
        let mut g = Grid::new(3, 3, Point::new(0, 0), Point::new(2, 2));
        let order = astar(&mut g, Point::new(0, 0), Point::new(2, 2));
        // Every open cell shares f = 4, so the h/arena tie-break walks a
        // single monotone path with no detours.
        assert_eq!(
            order,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn matches_dijkstra_path_length() {
        let walls = [
            Point::new(3, 1),
            Point::new(3, 2),
            Point::new(3, 3),
            Point::new(1, 3),
            Point::new(2, 3),
            Point::new(5, 4),
        ];
        let mut a = Grid::new(7, 6, Point::new(0, 0), Point::new(6, 5));
        let mut b = Grid::new(7, 6, Point::new(0, 0), Point::new(6, 5));
        for w in walls {
            a.set_wall(w, true);
            b.set_wall(w, true);
        }

        let d_order = dijkstra(&mut a, Point::new(0, 0), Point::new(6, 5));
        let a_order = astar(&mut b, Point::new(0, 0), Point::new(6, 5));
        assert_eq!(d_order.last(), Some(&Point::new(6, 5)));
        assert_eq!(a_order.last(), Some(&Point::new(6, 5)));

        let d_path = path_to(&a, Point::new(6, 5));
        let a_path = path_to(&b, Point::new(6, 5));
        assert_eq!(d_path.len(), a_path.len());
        for pair in a_path.windows(2) {
            let d = pair[1] - pair[0];
            assert_eq!(d.x.abs() + d.y.abs(), 1);
        }
        // The heuristic prunes exploration.
        assert!(a_order.len() <= d_order.len());
    }

    #[test]
    fn unreachable_target_omitted_from_order() {
        let mut g = Grid::new(4, 4, Point::new(0, 0), Point::new(3, 3));
        // Wall off the bottom-right corner completely.
        g.set_wall(Point::new(2, 3), true);
        g.set_wall(Point::new(3, 2), true);
        g.set_wall(Point::new(2, 2), true);
        let order = astar(&mut g, Point::new(0, 0), Point::new(3, 3));
        assert!(!order.contains(&Point::new(3, 3)));
        // 16 cells - 3 walls - 1 sealed target.
        assert_eq!(order.len(), 12);
        assert_eq!(path_to(&g, Point::new(3, 3)), vec![Point::new(3, 3)]);
    }
}
