//! Randomized starting placement.
//!
//! A run takes the board's dimensions and computes both teams' zones. It
//! collects each zone's empty cells, shuffles them, and pairs each team's
//! pieces with its shuffled cells in order. Red is always built and spawned
//! before blue.
//!
//! ## Entry Points
//!
//! - `try_spawn_all`: returns configuration errors to the caller
//! - `spawn_all`: logs configuration errors and returns `None`
//! - `BoardSeeder`: component wrapper with start / spawn-now semantics
//!
//! Runs are not idempotent: a second run spawns a second set of pieces.

pub mod component;
pub mod slots;
pub mod spawn;

pub use component::BoardSeeder;
pub use slots::{build_board_slots, build_slots, shuffle, SlotList};
pub use spawn::{spawn_team, CapacityWarning, Placement, SpawnContext, TeamReport};

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::board::{Board, Spawner};
use crate::core::config::SeederConfig;
use crate::core::error::{Result, SeedError};
use crate::core::rng::UniformSource;
use crate::core::team::Team;
use crate::zones::{LayoutMode, ZonePlan};

/// Outcome of a complete run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeedReport {
    pub plan: ZonePlan,
    pub red: TeamReport,
    pub blue: TeamReport,
}

impl SeedReport {
    /// Report for a team.
    #[must_use]
    pub fn team(&self, team: Team) -> &TeamReport {
        match team {
            Team::Red => &self.red,
            Team::Blue => &self.blue,
        }
    }

    /// Initialized placements of both teams, red first.
    pub fn placements(&self) -> impl Iterator<Item = &Placement> + '_ {
        self.red.placements.iter().chain(self.blue.placements.iter())
    }
}

/// Seed both teams onto `board`.
///
/// Fails before spawning anything if the board or the origin is missing, or
/// if the zones overlap under `OverlapPolicy::Reject`.
pub fn try_spawn_all<B, S, R>(
    config: &SeederConfig,
    board: Option<&B>,
    spawner: &mut S,
    rng: &mut R,
) -> Result<SeedReport>
where
    B: Board,
    S: Spawner + ?Sized,
    R: UniformSource + ?Sized,
{
    let board = board.ok_or(SeedError::MissingBoard)?;
    let origin = config.origin.ok_or(SeedError::MissingOrigin)?;

    let plan = LayoutMode::from_config(config).zones(board.rows());
    debug!(
        rows = board.rows(),
        cols = board.cols(),
        red = %plan.red,
        blue = %plan.blue,
        "Computed zones"
    );
    plan.check(config.overlap_policy)?;

    let slots = Team::ALL.map(|team| {
        let mut team_slots = build_board_slots(plan.zone(team), board);
        shuffle(&mut team_slots, &mut *rng);
        team_slots
    });
    debug!(
        red = slots[Team::Red.index()].len(),
        blue = slots[Team::Blue.index()].len(),
        "Collected slots"
    );

    let mut ctx = SpawnContext {
        board,
        spawner,
        origin,
        cell_size: config.cell_size(),
    };
    let [red, blue] =
        Team::ALL.map(|team| spawn_team(config.pieces(team), &slots[team.index()], team, &mut ctx));

    Ok(SeedReport { plan, red, blue })
}

/// Fire-and-forget variant of `try_spawn_all`.
///
/// Configuration errors are logged; `None` means nothing was spawned.
pub fn spawn_all<B, S, R>(
    config: &SeederConfig,
    board: Option<&B>,
    spawner: &mut S,
    rng: &mut R,
) -> Option<SeedReport>
where
    B: Board,
    S: Spawner + ?Sized,
    R: UniformSource + ?Sized,
{
    match try_spawn_all(config, board, spawner, rng) {
        Ok(report) => Some(report),
        Err(e) => {
            error!("Board setup aborted: {}", e);
            None
        }
    }
}
