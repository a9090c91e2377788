//! In-memory grid board.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::Board;
use crate::core::coord::GridCoord;

/// Serializable board description.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub rows: i32,
    pub cols: i32,
    #[serde(default)]
    pub walls: Vec<GridCoord>,
}

/// Rectangular board with a set of wall cells.
///
/// Cells outside the board report as walls.
///
/// ```
/// use board_seeder::board::{Board, GridBoard};
///
/// let board = GridBoard::new(10, 10).with_wall(2, 4).with_wall(3, 4);
/// assert!(board.is_wall(2, 4));
/// assert!(!board.is_wall(0, 0));
/// assert!(board.is_wall(10, 0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct GridBoard {
    rows: i32,
    cols: i32,
    walls: FxHashSet<GridCoord>,
}

impl GridBoard {
    /// Create an empty board.
    #[must_use]
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            walls: FxHashSet::default(),
        }
    }

    /// Build a board from its description.
    #[must_use]
    pub fn from_spec(spec: &GridSpec) -> Self {
        let mut board = Self::new(spec.rows, spec.cols);
        for wall in &spec.walls {
            board.add_wall(wall.x, wall.y);
        }
        board
    }

    /// Add a wall, builder-style.
    #[must_use]
    pub fn with_wall(mut self, x: i32, y: i32) -> Self {
        self.add_wall(x, y);
        self
    }

    /// Mark a cell as a wall.
    pub fn add_wall(&mut self, x: i32, y: i32) {
        self.walls.insert(GridCoord::new(x, y));
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        (0..self.cols).contains(&x) && (0..self.rows).contains(&y)
    }

    /// Number of wall cells.
    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }
}

impl Board for GridBoard {
    fn rows(&self) -> i32 {
        self.rows
    }

    fn cols(&self) -> i32 {
        self.cols
    }

    fn is_wall(&self, x: i32, y: i32) -> bool {
        !self.in_bounds(x, y) || self.walls.contains(&GridCoord::new(x, y))
    }
}
