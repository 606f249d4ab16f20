//! **pathgrid-maze** — procedural wall layouts for pathfinding grids.
//!
//! Currently one generator: recursive division ([`MazeGen`]), which
//! partitions a rectangle with walls-and-passages and reports the walls in
//! placement order so callers can animate them. Randomness is injected as
//! a [`rand::Rng`], so seeded runs reproduce exactly.

pub mod recursive_division;

pub use recursive_division::MazeGen;
