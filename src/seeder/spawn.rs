//! Per-team spawning: pairing pieces with shuffled slots.

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::board::{Board, Spawner};
use crate::core::config::PieceId;
use crate::core::coord::{CellSize, GridCoord, Rotation, WorldPos};
use crate::core::team::Team;

/// Everything a team spawn needs besides the pieces and slots.
pub struct SpawnContext<'a, B, S: ?Sized> {
    pub board: &'a B,
    pub spawner: &'a mut S,
    /// World position of cell `(0, 0)`.
    pub origin: WorldPos,
    pub cell_size: CellSize,
}

impl<B, S: ?Sized> SpawnContext<'_, B, S> {
    /// World position for a cell.
    #[must_use]
    pub fn world_position(&self, cell: GridCoord) -> WorldPos {
        self.cell_size.to_world(self.origin, cell)
    }
}

/// A piece handed to the spawner and initialized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Index into the team's piece list.
    pub piece_index: usize,
    pub piece: PieceId,
    pub coord: GridCoord,
    pub team: Team,
    pub position: WorldPos,
}

/// Non-fatal capacity problems.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapacityWarning {
    /// The team's piece list is empty.
    NoPieces,
    /// More pieces than slots; the excess is dropped.
    NotEnoughSlots { pieces: usize, slots: usize },
}

/// Outcome of one team's spawn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamReport {
    pub team: Team,
    /// Pieces instantiated and initialized, in piece-list order.
    pub placements: Vec<Placement>,
    /// Pieces instantiated whose instance had no controller.
    pub uninitialized: Vec<Placement>,
    /// Pieces not spawned for lack of slots.
    pub dropped: usize,
    pub warning: Option<CapacityWarning>,
}

impl TeamReport {
    fn empty(team: Team) -> Self {
        Self {
            team,
            placements: Vec::new(),
            uninitialized: Vec::new(),
            dropped: 0,
            warning: None,
        }
    }

    /// Number of instantiation requests issued.
    #[must_use]
    pub fn spawned(&self) -> usize {
        self.placements.len() + self.uninitialized.len()
    }
}

/// Spawn `pieces` into `slots` for `team`.
///
/// Pairing is positional: `pieces[i]` goes to `slots[i]` for every
/// `i < min(pieces.len(), slots.len())`. Randomness comes only from the order
/// `slots` was shuffled into beforehand.
pub fn spawn_team<B, S>(
    pieces: &[PieceId],
    slots: &[GridCoord],
    team: Team,
    ctx: &mut SpawnContext<'_, B, S>,
) -> TeamReport
where
    B: Board,
    S: Spawner + ?Sized,
{
    let mut report = TeamReport::empty(team);

    if pieces.is_empty() {
        warn!("No pieces configured for team {}", team);
        report.warning = Some(CapacityWarning::NoPieces);
        return report;
    }

    if pieces.len() > slots.len() {
        warn!(
            "Not enough slots for team {}. Pieces: {}, Slots: {}. Extra pieces will not be spawned.",
            team,
            pieces.len(),
            slots.len()
        );
        report.warning = Some(CapacityWarning::NotEnoughSlots {
            pieces: pieces.len(),
            slots: slots.len(),
        });
        report.dropped = pieces.len() - slots.len();
    }

    for (piece_index, (piece, &coord)) in pieces.iter().zip(slots.iter()).enumerate() {
        let position = ctx.world_position(coord);
        let placement = Placement {
            piece_index,
            piece: piece.clone(),
            coord,
            team,
            position,
        };

        match ctx.spawner.instantiate(piece, position, Rotation::IDENTITY) {
            Some(controller) => {
                controller.init(ctx.board, team, coord.x, coord.y);
                report.placements.push(placement);
            }
            None => {
                error!("Piece '{}' has no piece controller; left uninitialized at {}", piece, coord);
                report.uninitialized.push(placement);
            }
        }
    }

    info!(
        team = %team,
        placed = report.placements.len(),
        uninitialized = report.uninitialized.len(),
        dropped = report.dropped,
        "Team spawned"
    );

    report
}
