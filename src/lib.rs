//! # board-seeder
//!
//! Randomized starting-piece placement for Stratego-like grid games.
//!
//! ## Design Principles
//!
//! 1. **Engine-Agnostic**: The board and the piece spawner are traits. The
//!    seeder only queries the board and issues spawn/initialize requests.
//!
//! 2. **Injected Randomness**: Shuffles draw from a caller-supplied
//!    `UniformSource`, so a seed reproduces a layout exactly.
//!
//! 3. **Explicit Policy**: Overlapping or uneven zones are reported as data
//!    and handled by `OverlapPolicy` instead of passing silently.
//!
//! ## Modules
//!
//! - `core`: Coordinates, teams, configuration, RNG, errors
//! - `zones`: Team zones and layout computation
//! - `board`: Board / spawner traits and headless implementations
//! - `seeder`: Slot building, shuffling, spawning and orchestration

pub mod core;
pub mod zones;
pub mod board;
pub mod seeder;

// Re-export commonly used types
pub use crate::core::{
    CellSize, GridCoord, Rotation, WorldPos,
    Team,
    SetupRng, SetupRngState, UniformSource,
    LayoutKind, OverlapPolicy, PieceId, SeederConfig,
    Result, SeedError,
};

pub use crate::zones::{compute_zones, LayoutMode, RowZone, ZonePlan};

pub use crate::board::{Board, GridBoard, GridSpec, PieceController, RecordingSpawner, SpawnedPiece, Spawner};

pub use crate::seeder::{
    build_board_slots, build_slots, shuffle, spawn_all, spawn_team, try_spawn_all,
    BoardSeeder, CapacityWarning, Placement, SeedReport, SlotList, SpawnContext, TeamReport,
};
