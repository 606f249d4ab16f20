//! **pathgrid-core** — grid and cell model for pathfinding exploration.
//!
//! This crate provides the data the rest of the *pathgrid* workspace
//! operates on: geometry primitives ([`Point`], [`Range`]), the per-cell
//! search state ([`Cell`]), and the arena-backed [`Grid`].
//!
//! The grid is a flat, caller-owned cell vector. Searches and the maze
//! generator mutate it in place through an exclusive borrow; back-references
//! between cells are arena indices, never owning links.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, UNREACHABLE};
pub use geom::{Point, Range, manhattan};
pub use grid::Grid;
