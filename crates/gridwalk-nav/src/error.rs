//! This module defines the error types used by the `gridwalk-nav` crate.

#![warn(missing_docs)]

/// Error type for maze operations.
///
/// This enum encapsulates all possible errors that can occur while building
/// or mutating a maze, such as invalid construction parameters or
/// out-of-bounds access.
#[derive(Debug, Clone, PartialEq)]
pub enum NavError {
    /// Error for invalid maze dimensions.
    /// This variant is returned when maze width or height is zero, or when
    /// the requested grid would overflow its backing buffer.
    InvalidDimensions(&'static str),
    /// Error for invalid tile size.
    /// This variant is returned when a tile size is provided that is not positive.
    InvalidTileSize(&'static str),
    /// Error for out-of-bounds access.
    /// This variant is returned when attempting to write a cell outside the grid.
    OutOfBounds(&'static str),
}

impl core::fmt::Display for NavError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NavError::InvalidDimensions(msg) => write!(f, "Invalid maze dimensions: {}", msg),
            NavError::InvalidTileSize(msg) => write!(f, "Invalid tile size: {}", msg),
            NavError::OutOfBounds(msg) => write!(f, "Maze access out of bounds: {}", msg),
        }
    }
}

impl core::error::Error for NavError {}
