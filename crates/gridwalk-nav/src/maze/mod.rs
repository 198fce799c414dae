//! Maze grid functionality.
//!
//! This module provides the wall-occupancy grid, grid/world coordinate
//! conversion, and the neighbor queries the search expands over.

pub mod cell;
pub mod grid;

pub use cell::GridCell;
pub use grid::Maze;
