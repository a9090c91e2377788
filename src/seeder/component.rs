//! Scene component wrapper around `spawn_all`.

use tracing::info;

use super::{spawn_all, SeedReport};
use crate::board::{Board, Spawner};
use crate::core::config::SeederConfig;
use crate::core::rng::{SetupRng, SetupRngState};

/// Owns a configuration, an optional board, a spawner and the setup RNG.
///
/// ## Usage
///
/// ```
/// use board_seeder::board::{GridBoard, RecordingSpawner};
/// use board_seeder::core::{PieceId, SeederConfig, Team, WorldPos};
/// use board_seeder::seeder::BoardSeeder;
///
/// let config = SeederConfig::new()
///     .with_origin(WorldPos::ZERO)
///     .with_stratego_layout(1)
///     .with_pieces(Team::Red, vec![PieceId::new("Scout")])
///     .with_seed(7);
///
/// let mut seeder = BoardSeeder::new(config, Some(GridBoard::new(4, 4)), RecordingSpawner::new());
/// let report = seeder.start().expect("spawn_on_start is enabled");
/// assert_eq!(report.red.placements.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct BoardSeeder<B, S> {
    config: SeederConfig,
    board: Option<B>,
    spawner: S,
    rng: SetupRng,
}

impl<B: Board, S: Spawner> BoardSeeder<B, S> {
    /// Create a seeder. The RNG uses `config.seed`, or entropy when unset.
    pub fn new(config: SeederConfig, board: Option<B>, spawner: S) -> Self {
        let rng = match config.seed {
            Some(seed) => SetupRng::new(seed),
            None => SetupRng::from_entropy(),
        };
        info!(seed = rng.seed(), "Board seeder created");
        Self::with_rng(config, board, spawner, rng)
    }

    /// Create a seeder with an explicit RNG.
    pub fn with_rng(config: SeederConfig, board: Option<B>, spawner: S, rng: SetupRng) -> Self {
        Self {
            config,
            board,
            spawner,
            rng,
        }
    }

    /// Start hook: spawns only when `spawn_on_start` is set.
    pub fn start(&mut self) -> Option<SeedReport> {
        if !self.config.spawn_on_start {
            return None;
        }
        self.spawn_now()
    }

    /// Spawn both teams now.
    ///
    /// Previously spawned pieces are left in place, so repeated calls
    /// accumulate instances.
    pub fn spawn_now(&mut self) -> Option<SeedReport> {
        spawn_all(&self.config, self.board.as_ref(), &mut self.spawner, &mut self.rng)
    }

    #[must_use]
    pub fn board(&self) -> Option<&B> {
        self.board.as_ref()
    }

    /// Attach or replace the board.
    pub fn set_board(&mut self, board: B) {
        self.board = Some(board);
    }

    #[must_use]
    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// RNG position, for reproducing the next run.
    #[must_use]
    pub fn rng_state(&self) -> SetupRngState {
        self.rng.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{GridBoard, RecordingSpawner};
    use crate::core::config::PieceId;
    use crate::core::coord::WorldPos;
    use crate::core::team::Team;

    fn config() -> SeederConfig {
        SeederConfig::new()
            .with_origin(WorldPos::ZERO)
            .with_stratego_layout(1)
            .with_pieces(Team::Red, vec![PieceId::new("R"); 4])
            .with_pieces(Team::Blue, vec![PieceId::new("B"); 4])
            .with_seed(3)
    }

    #[test]
    fn test_start_respects_flag() {
        let mut seeder = BoardSeeder::new(
            config().with_spawn_on_start(false),
            Some(GridBoard::new(4, 4)),
            RecordingSpawner::new(),
        );

        assert!(seeder.start().is_none());
        assert!(seeder.spawner().instances().is_empty());

        // Spawn-now ignores the flag
        assert!(seeder.spawn_now().is_some());
        assert_eq!(seeder.spawner().instances().len(), 8);
    }

    #[test]
    fn test_repeat_spawn_accumulates() {
        let mut seeder = BoardSeeder::new(config(), Some(GridBoard::new(4, 4)), RecordingSpawner::new());

        seeder.start();
        seeder.spawn_now();

        assert_eq!(seeder.spawner().instances().len(), 16);
    }

    #[test]
    fn test_missing_board_spawns_nothing() {
        let mut seeder: BoardSeeder<GridBoard, _> = BoardSeeder::new(config(), None, RecordingSpawner::new());

        assert!(seeder.start().is_none());
        assert!(seeder.spawner().instances().is_empty());

        seeder.set_board(GridBoard::new(4, 4));
        assert!(seeder.spawn_now().is_some());
    }

    #[test]
    fn test_same_seed_same_layout() {
        let run = || {
            let mut seeder = BoardSeeder::new(config(), Some(GridBoard::new(4, 4)), RecordingSpawner::new());
            seeder.start().expect("report")
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn test_rng_state_advances() {
        let mut seeder = BoardSeeder::new(config(), Some(GridBoard::new(4, 4)), RecordingSpawner::new());
        let before = seeder.rng_state();
        seeder.spawn_now();
        assert_ne!(before, seeder.rng_state());
        assert_eq!(before.seed, seeder.rng_state().seed);
    }
}
