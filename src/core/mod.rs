//! Core types: coordinates, teams, configuration, RNG, errors.
//!
//! These are shared by the zone computation, the collaborator traits and the
//! seeder itself.

pub mod coord;
pub mod team;
pub mod rng;
pub mod config;
pub mod error;

pub use coord::{CellSize, GridCoord, Rotation, WorldPos};
pub use team::Team;
pub use rng::{SetupRng, SetupRngState, UniformSource};
pub use config::{LayoutKind, OverlapPolicy, PieceId, SeederConfig};
pub use error::{Result, SeedError};
