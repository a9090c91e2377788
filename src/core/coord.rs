//! Grid and world coordinates.
//!
//! ## GridCoord
//!
//! Board cell as `(x, y)`: column then row, 0-indexed, row 0 at the bottom.
//!
//! ## WorldPos
//!
//! Engine-space position. A cell maps to world space as
//! `origin + (x * cell_size.x, y * cell_size.y, 0)`.

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Board cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    /// Column.
    pub x: i32,
    /// Row (0 = bottom).
    pub y: i32,
}

impl GridCoord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Position in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl WorldPos {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Add for WorldPos {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Orientation quaternion handed to the spawner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Rotation {
    /// No rotation.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };
}

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// World-space spacing between adjacent cells.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellSize {
    pub x: f32,
    pub y: f32,
}

impl CellSize {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// World position of `cell` relative to the board's bottom-left `origin`.
    ///
    /// Cells lie in the XY plane; z is taken from the origin unchanged.
    #[must_use]
    pub fn to_world(self, origin: WorldPos, cell: GridCoord) -> WorldPos {
        origin + WorldPos::new(cell.x as f32 * self.x, cell.y as f32 * self.y, 0.0)
    }
}
