//! Text-mode driver for the pathgrid engine.
//!
//! Generates a recursive-division maze, explores it with the chosen
//! algorithm, and prints the grid: `#` walls, `.` visited cells, `o` the
//! reconstructed path, `S`/`T` the endpoints.
//!
//! Usage: `ascii [dijkstra|astar|dfs] [seed]`

use pathgrid_core::{Grid, Point};
use pathgrid_maze::MazeGen;
use pathgrid_search::{Algorithm, path_to, search};
use rand::SeedableRng;
use rand::rngs::StdRng;

const WIDTH: i32 = 39;
const HEIGHT: i32 = 21;

fn main() {
    let mut args = std::env::args().skip(1);
    let algorithm = match args.next().as_deref() {
        Some("astar") => Algorithm::AStar,
        Some("dfs") => Algorithm::DepthFirst,
        _ => Algorithm::Dijkstra,
    };
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let source = Point::new(WIDTH / 4, HEIGHT / 2);
    let target = Point::new(3 * WIDTH / 4, HEIGHT / 2);
    let mut grid = Grid::new(WIDTH, HEIGHT, source, target);
    let bounds = grid.bounds();

    let mut r#gen = MazeGen::new(StdRng::seed_from_u64(seed));
    let walls = r#gen.recursive_division(&mut grid, bounds);

    let mut rng = StdRng::seed_from_u64(seed);
    let visited = search(&mut grid, algorithm, source, target, &mut rng);
    let found = visited.contains(&target);
    let path = if found {
        path_to(&grid, target)
    } else {
        Vec::new()
    };

    for y in 0..HEIGHT {
        let mut line = String::with_capacity(WIDTH as usize);
        for x in 0..WIDTH {
            let p = Point::new(x, y);
            let ch = if p == source {
                'S'
            } else if p == target {
                'T'
            } else if grid.is_wall(p) {
                '#'
            } else if path.contains(&p) {
                'o'
            } else if grid.at(p).is_some_and(|c| c.visited) {
                '.'
            } else {
                ' '
            };
            line.push(ch);
        }
        println!("{line}");
    }

    println!(
        "{algorithm:?}: {} walls, {} cells visited, path {}",
        walls.len(),
        visited.len(),
        if found {
            format!("{} cells", path.len())
        } else {
            "not found".to_string()
        }
    );
}
