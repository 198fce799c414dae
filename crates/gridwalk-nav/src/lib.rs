//! Maze grid and shortest-path search for grid-based agents.
//!
//! The crate has two halves: [`maze`] owns a rectangular tile grid with wall
//! occupancy and grid/world coordinate conversion, and [`search`] computes
//! minimum-hop paths over it with uniform-cost Dijkstra expansion.

pub mod error;
pub mod maze;
pub mod search;

pub use error::NavError;
pub use maze::{GridCell, Maze};
pub use search::{Path, find_path};
