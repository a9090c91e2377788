//! Headless spawner that records every instantiation.

use rustc_hash::FxHashSet;

use super::{Board, PieceController, Spawner};
use crate::core::config::PieceId;
use crate::core::coord::{GridCoord, Rotation, WorldPos};
use crate::core::team::Team;

/// One recorded instance.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnedPiece {
    pub piece: PieceId,
    pub position: WorldPos,
    pub rotation: Rotation,
    /// Whether the instance exposes a controller.
    pub has_controller: bool,
    /// Team and cell, set once the controller is initialized.
    pub placed: Option<(Team, GridCoord)>,
}

impl PieceController for SpawnedPiece {
    fn init(&mut self, _board: &dyn Board, team: Team, x: i32, y: i32) {
        self.placed = Some((team, GridCoord::new(x, y)));
    }
}

/// Spawner that keeps every instance in memory.
///
/// Pieces registered with `without_controller` are instantiated but expose no
/// controller, mirroring a prefab that lacks piece behavior.
#[derive(Clone, Debug, Default)]
pub struct RecordingSpawner {
    instances: Vec<SpawnedPiece>,
    missing_controller: FxHashSet<PieceId>,
}

impl RecordingSpawner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Instances of `piece` will have no controller.
    #[must_use]
    pub fn without_controller(mut self, piece: PieceId) -> Self {
        self.missing_controller.insert(piece);
        self
    }

    /// All instances, in creation order.
    #[must_use]
    pub fn instances(&self) -> &[SpawnedPiece] {
        &self.instances
    }

    /// Initialized instances belonging to `team`.
    pub fn placed_for(&self, team: Team) -> impl Iterator<Item = &SpawnedPiece> + '_ {
        self.instances
            .iter()
            .filter(move |s| matches!(s.placed, Some((t, _)) if t == team))
    }

    /// Instance initialized at `cell`, if any.
    #[must_use]
    pub fn at(&self, cell: GridCoord) -> Option<&SpawnedPiece> {
        self.instances
            .iter()
            .find(|s| matches!(s.placed, Some((_, c)) if c == cell))
    }
}

impl Spawner for RecordingSpawner {
    fn instantiate(
        &mut self,
        piece: &PieceId,
        position: WorldPos,
        rotation: Rotation,
    ) -> Option<&mut dyn PieceController> {
        let has_controller = !self.missing_controller.contains(piece);
        self.instances.push(SpawnedPiece {
            piece: piece.clone(),
            position,
            rotation,
            has_controller,
            placed: None,
        });

        if !has_controller {
            return None;
        }
        self.instances
            .last_mut()
            .map(|instance| instance as &mut dyn PieceController)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GridBoard;

    #[test]
    fn test_records_instances() {
        let mut spawner = RecordingSpawner::new();
        let board = GridBoard::new(4, 4);

        let controller = spawner
            .instantiate(&PieceId::new("Scout"), WorldPos::new(1.0, 2.0, 0.0), Rotation::IDENTITY)
            .expect("controller");
        controller.init(&board, Team::Red, 0, 0);

        assert_eq!(spawner.instances().len(), 1);
        let spawned = &spawner.instances()[0];
        assert_eq!(spawned.piece.name(), "Scout");
        assert_eq!(spawned.position, WorldPos::new(1.0, 2.0, 0.0));
        assert_eq!(spawned.placed, Some((Team::Red, GridCoord::new(0, 0))));
    }

    #[test]
    fn test_without_controller() {
        let mut spawner = RecordingSpawner::new().without_controller(PieceId::new("Rock"));

        let controller =
            spawner.instantiate(&PieceId::new("Rock"), WorldPos::ZERO, Rotation::IDENTITY);
        assert!(controller.is_none());

        // Still instantiated
        assert_eq!(spawner.instances().len(), 1);
        assert!(!spawner.instances()[0].has_controller);
    }

    #[test]
    fn test_queries() {
        let mut spawner = RecordingSpawner::new();
        let board = GridBoard::new(4, 4);

        for (i, team) in [Team::Red, Team::Blue, Team::Blue].into_iter().enumerate() {
            if let Some(c) = spawner.instantiate(&PieceId::new("P"), WorldPos::ZERO, Rotation::IDENTITY) {
                c.init(&board, team, i as i32, 0);
            }
        }

        assert_eq!(spawner.placed_for(Team::Blue).count(), 2);
        assert!(spawner.at(GridCoord::new(0, 0)).is_some());
        assert!(spawner.at(GridCoord::new(3, 3)).is_none());
    }
}
