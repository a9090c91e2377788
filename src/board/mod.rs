//! Collaborator traits for the board and the piece spawner.
//!
//! The seeder only reads the board and only issues spawn/initialize requests.
//! Engines implement these traits over their own scene objects:
//! - `Board`: grid dimensions and the wall predicate
//! - `Spawner`: creates a piece instance at a world position
//! - `PieceController`: the capability an instance must expose to be initialized
//!
//! `GridBoard` and `RecordingSpawner` are headless implementations used by the
//! CLI and by tests.

pub mod grid;
pub mod recording;

pub use grid::{GridBoard, GridSpec};
pub use recording::{RecordingSpawner, SpawnedPiece};

use crate::core::config::PieceId;
use crate::core::coord::{Rotation, WorldPos};
use crate::core::team::Team;

/// Read-only grid query surface.
///
/// ## Implementation Notes
///
/// - `is_wall` must be side-effect free; it is the single source of truth for
///   which cells can receive a piece
/// - Coordinates passed to `is_wall` are always inside `0..cols` by `0..rows`
///   when called through `build_board_slots`
pub trait Board {
    /// Number of rows.
    fn rows(&self) -> i32;

    /// Number of columns.
    fn cols(&self) -> i32;

    /// Whether cell `(x, y)` is obstructed.
    fn is_wall(&self, x: i32, y: i32) -> bool;
}

/// Behavior attached to a spawned piece.
pub trait PieceController {
    /// Bind the piece to its board, team and starting cell.
    fn init(&mut self, board: &dyn Board, team: Team, x: i32, y: i32);
}

/// Creates piece instances.
pub trait Spawner {
    /// Create an instance of `piece` at `position` with `rotation`.
    ///
    /// Returns the instance's controller, or `None` if the created instance
    /// does not carry one. The instance exists either way.
    fn instantiate(
        &mut self,
        piece: &PieceId,
        position: WorldPos,
        rotation: Rotation,
    ) -> Option<&mut dyn PieceController>;
}
