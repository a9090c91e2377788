//! Team starting zones.
//!
//! ## Key Types
//!
//! - `RowZone`: Closed row band spanning every column
//! - `LayoutMode`: Stratego (fixed rows per side) or halves
//! - `ZonePlan`: Both teams' zones plus overlap / unassigned-row queries

pub mod layout;

pub use layout::{compute_zones, LayoutMode, RowZone, ZonePlan};

// Re-export layout settings from core for convenience
pub use crate::core::config::{LayoutKind, OverlapPolicy};
