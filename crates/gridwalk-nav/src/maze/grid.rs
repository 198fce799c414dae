#![warn(missing_docs)]

use nalgebra::Vector3;
use rand::Rng;
use tracing::debug;

use super::GridCell;
use crate::error::NavError;

/// A rectangular tile grid with wall occupancy.
///
/// The maze owns a flat boolean buffer (`true` = wall) indexed `y * width + x`
/// and converts between grid coordinates and world-space positions. The grid
/// spans symmetrically around the world origin on the XZ plane; tiles sit on
/// the ground with their centers half a tile above it.
///
/// Occupancy must not change while a search is traversing the maze. The
/// search borrows `&Maze` and every mutator takes `&mut self`, so the borrow
/// checker enforces that exclusive-read requirement.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    /// Width of the maze in tiles.
    width: u32,
    /// Height of the maze in tiles.
    height: u32,
    /// Size of each tile in world units.
    tile_size: f32,
    /// Wall occupancy for each cell, `true` = impassable.
    walls: Vec<bool>,
}

impl Maze {
    /// Creates a new, fully open maze with the specified dimensions.
    ///
    /// # Arguments
    /// * `width` - Width of the maze in tiles
    /// * `height` - Height of the maze in tiles
    /// * `tile_size` - Size of each tile in world units
    ///
    /// # Errors
    /// Returns `Err(NavError::InvalidDimensions)` if `width` or `height` is zero.
    /// Returns `Err(NavError::InvalidTileSize)` if `tile_size` is not positive.
    pub fn new(width: u32, height: u32, tile_size: f32) -> Result<Self, NavError> {
        if width == 0 || height == 0 {
            return Err(NavError::InvalidDimensions(
                "width and height must be non-zero",
            ));
        }
        if tile_size <= 0.0 {
            return Err(NavError::InvalidTileSize("must be positive"));
        }

        // Check for potential overflow in buffer allocation
        let cells = (width as usize)
            .checked_mul(height as usize)
            .ok_or(NavError::InvalidDimensions(
                "maze dimensions too large, would cause overflow",
            ))?;

        Ok(Maze {
            width,
            height,
            tile_size,
            walls: vec![false; cells],
        })
    }

    /// Calculates the index in the wall buffer for an in-bounds cell.
    fn index(&self, cell: GridCell) -> usize {
        cell.y as usize * self.width as usize + cell.x as usize
    }

    fn in_bounds(&self, cell: GridCell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.width && (cell.y as u32) < self.height
    }

    /// Returns whether a cell is impassable.
    ///
    /// Any cell outside the grid is a wall, so this is a total query: the
    /// search and the follower never need to bounds-check separately.
    pub fn is_wall(&self, cell: GridCell) -> bool {
        !self.in_bounds(cell) || self.walls[self.index(cell)]
    }

    /// Marks a single cell as wall or open.
    ///
    /// # Arguments
    /// * `cell` - The cell to write
    /// * `wall` - `true` to mark the cell impassable
    ///
    /// # Errors
    /// Returns `Err(NavError::OutOfBounds)` if `cell` is outside the grid.
    pub fn set_wall(&mut self, cell: GridCell, wall: bool) -> Result<(), NavError> {
        if !self.in_bounds(cell) {
            return Err(NavError::OutOfBounds("cell index outside the maze"));
        }
        let index = self.index(cell);
        self.walls[index] = wall;
        Ok(())
    }

    /// Regenerates the wall occupancy of the whole maze.
    ///
    /// Every cell independently becomes a wall with probability 1/5. Prior
    /// occupancy is overwritten entirely.
    pub fn randomise_walls(&mut self) {
        let mut rng = rand::rng();
        for wall in &mut self.walls {
            *wall = rng.random_range(0..5) == 0;
        }
        debug!(
            walls = self.walls.iter().filter(|w| **w).count(),
            cells = self.walls.len(),
            "randomised maze walls"
        );
    }

    /// Converts a grid cell to its world-space position.
    ///
    /// The returned position is the center of the tile's box: the grid is
    /// centered around the world origin on the XZ plane and raised half a
    /// tile above the ground.
    pub fn to_world(&self, cell: GridCell) -> Vector3<f32> {
        let tile_offset = Vector3::new(0.0, self.tile_size * 0.5, 0.0);
        Vector3::new(
            cell.x as f32 * self.tile_size,
            0.0,
            cell.y as f32 * self.tile_size,
        ) + tile_offset
            + self.centering_offset()
    }

    /// Converts a world-space position to the grid cell nearest to it.
    /// Returns `None` if the position falls outside the grid.
    ///
    /// This is the inverse of [`to_world`](Self::to_world) on the XZ plane;
    /// the y component is ignored.
    pub fn world_to_grid(&self, pos: &Vector3<f32>) -> Option<GridCell> {
        let offset = self.centering_offset();
        let cell = GridCell::new(
            ((pos.x - offset.x) / self.tile_size).round() as i32,
            ((pos.z - offset.z) / self.tile_size).round() as i32,
        );
        if self.in_bounds(cell) { Some(cell) } else { None }
    }

    /// The translation that centers the grid around the world origin.
    pub fn centering_offset(&self) -> Vector3<f32> {
        Vector3::new(
            -self.tile_size * (self.width - 1) as f32 * 0.5,
            0.0,
            -self.tile_size * (self.height - 1) as f32 * 0.5,
        )
    }

    /// The four cardinal neighbors of a cell, in `{+x, -x, +y, -y}` order.
    ///
    /// The order decides which of several equal-length paths the search
    /// returns, so it must stay fixed. Returned by value; no allocation per
    /// expansion step.
    pub fn neighbors4(cell: GridCell) -> [GridCell; 4] {
        [
            GridCell::new(cell.x + 1, cell.y),
            GridCell::new(cell.x - 1, cell.y),
            GridCell::new(cell.x, cell.y + 1),
            GridCell::new(cell.x, cell.y - 1),
        ]
    }

    /// Width of the maze in tiles.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the maze in tiles.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size of each tile in world units.
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Total width of the maze in world units.
    pub fn world_width(&self) -> f32 {
        self.tile_size * self.width as f32
    }

    /// Total height of the maze in world units.
    pub fn world_height(&self) -> f32 {
        self.tile_size * self.height as f32
    }
}

impl std::fmt::Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Maze ({}x{}, tile size: {:.2})",
            self.width, self.height, self.tile_size
        )?;

        // Rows top to bottom so the highest y prints first
        for y in (0..self.height as i32).rev() {
            for x in 0..self.width as i32 {
                if self.is_wall(GridCell::new(x, y)) {
                    write!(f, "# ")?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
