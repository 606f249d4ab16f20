//! **pathgrid-search** — search algorithms for grid exploration.
//!
//! Three ways of exploring a [`Grid`](pathgrid_core::Grid) between its
//! source and target:
//!
//! - **Dijkstra** uniform-cost exploration ([`dijkstra`])
//! - **A\*** heuristic-guided exploration ([`astar`])
//! - **Depth-first** exhaustive exploration ([`depth_first`])
//!
//! Each returns the ordered sequence of visited cells (the target last when
//! it was reached) and leaves per-cell back-references behind, from which
//! [`path_to`] reconstructs the discovered path. All three mutate the
//! grid's search-scoped state in place; resetting it between runs
//! (`Grid::clear_search`) is the caller's responsibility.
//!
//! Dijkstra and A* are both optimal under the grid's unit edge costs; they
//! differ only in visitation order. Depth-first guarantees a connecting
//! path, not a shortest one, and draws its branching order from an injected
//! [`rand::Rng`].

mod astar;
mod dfs;
mod dijkstra;
mod frontier;
mod path;

pub use astar::astar;
pub use dfs::depth_first;
pub use dijkstra::dijkstra;
pub use path::path_to;

use pathgrid_core::{Grid, Point};
use rand::Rng;

/// The available search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Dijkstra,
    AStar,
    DepthFirst,
}

/// Run `algorithm` over the grid and return the visitation order.
///
/// The `rng` feeds depth-first branching only; the other algorithms are
/// fully deterministic and ignore it.
pub fn search<R: Rng>(
    grid: &mut Grid,
    algorithm: Algorithm,
    from: Point,
    to: Point,
    rng: &mut R,
) -> Vec<Point> {
    match algorithm {
        Algorithm::Dijkstra => dijkstra(grid, from, to),
        Algorithm::AStar => astar(grid, from, to),
        Algorithm::DepthFirst => depth_first(grid, from, to, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn dispatch_matches_direct_calls() {
        let from = Point::new(0, 0);
        let to = Point::new(3, 3);
        let mut rng = StdRng::seed_from_u64(1);

        let mut a = Grid::new(4, 4, from, to);
        let mut b = Grid::new(4, 4, from, to);
        assert_eq!(
            search(&mut a, Algorithm::Dijkstra, from, to, &mut rng),
            dijkstra(&mut b, from, to)
        );

        let mut a = Grid::new(4, 4, from, to);
        let mut b = Grid::new(4, 4, from, to);
        assert_eq!(
            search(&mut a, Algorithm::AStar, from, to, &mut rng),
            astar(&mut b, from, to)
        );

        let mut a = Grid::new(4, 4, from, to);
        let mut b = Grid::new(4, 4, from, to);
        let mut ra = StdRng::seed_from_u64(5);
        let mut rb = StdRng::seed_from_u64(5);
        assert_eq!(
            search(&mut a, Algorithm::DepthFirst, from, to, &mut ra),
            depth_first(&mut b, from, to, &mut rb)
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn algorithm_round_trip() {
        for algo in [Algorithm::Dijkstra, Algorithm::AStar, Algorithm::DepthFirst] {
            let json = serde_json::to_string(&algo).unwrap();
            let back: Algorithm = serde_json::from_str(&json).unwrap();
            assert_eq!(algo, back);
        }
    }
}
