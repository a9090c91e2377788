//! Seeder configuration.
//!
//! Scenes configure the seeder by providing:
//! - Cell spacing and the world-space origin of cell `(0, 0)`
//! - One ordered piece list per team
//! - The layout mode and how overlapping zones are treated
//!
//! The configuration is read once per run and not re-validated mid-run.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::coord::{CellSize, WorldPos};
use super::error::Result;
use super::team::Team;

/// Piece identity (prefab name). The seeder never interprets it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(pub String);

impl PieceId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the board is split into starting zones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    /// Fixed number of rows per side, counted from each edge.
    #[default]
    Stratego,
    /// Bottom half red, top half blue.
    Halves,
}

/// What to do when red and blue zones share rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapPolicy {
    /// Proceed silently.
    Allow,
    /// Log a warning and proceed.
    #[default]
    Warn,
    /// Abort the run.
    Reject,
}

/// Complete seeder configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeederConfig {
    /// World spacing between columns.
    pub cell_size_x: f32,

    /// World spacing between rows.
    pub cell_size_y: f32,

    /// World position of cell `(0, 0)`. Required; a run without it aborts.
    pub origin: Option<WorldPos>,

    /// Red pieces, paired in order with shuffled red slots.
    pub red_pieces: Vec<PieceId>,

    /// Blue pieces, paired in order with shuffled blue slots.
    pub blue_pieces: Vec<PieceId>,

    /// Zone layout.
    pub layout: LayoutKind,

    /// Starting rows per side under the Stratego layout.
    pub rows_per_side: i32,

    /// Run automatically when the owning component starts.
    pub spawn_on_start: bool,

    /// Treatment of overlapping zones.
    pub overlap_policy: OverlapPolicy,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SeederConfig {
    fn default() -> Self {
        Self {
            cell_size_x: 4.65,
            cell_size_y: 4.65,
            origin: None,
            red_pieces: Vec::new(),
            blue_pieces: Vec::new(),
            layout: LayoutKind::Stratego,
            rows_per_side: 4,
            spawn_on_start: true,
            overlap_policy: OverlapPolicy::Warn,
            seed: None,
        }
    }
}

impl SeederConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Set the world-space origin.
    #[must_use]
    pub fn with_origin(mut self, origin: WorldPos) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Set the cell spacing.
    #[must_use]
    pub fn with_cell_size(mut self, x: f32, y: f32) -> Self {
        self.cell_size_x = x;
        self.cell_size_y = y;
        self
    }

    /// Use the Stratego layout with the given rows per side.
    #[must_use]
    pub fn with_stratego_layout(mut self, rows_per_side: i32) -> Self {
        self.layout = LayoutKind::Stratego;
        self.rows_per_side = rows_per_side;
        self
    }

    /// Use the halves layout.
    #[must_use]
    pub fn with_halves_layout(mut self) -> Self {
        self.layout = LayoutKind::Halves;
        self
    }

    /// Set the piece list for a team.
    #[must_use]
    pub fn with_pieces(mut self, team: Team, pieces: Vec<PieceId>) -> Self {
        match team {
            Team::Red => self.red_pieces = pieces,
            Team::Blue => self.blue_pieces = pieces,
        }
        self
    }

    #[must_use]
    pub fn with_overlap_policy(mut self, policy: OverlapPolicy) -> Self {
        self.overlap_policy = policy;
        self
    }

    #[must_use]
    pub fn with_spawn_on_start(mut self, enabled: bool) -> Self {
        self.spawn_on_start = enabled;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cell spacing as a single value.
    #[must_use]
    pub fn cell_size(&self) -> CellSize {
        CellSize::new(self.cell_size_x, self.cell_size_y)
    }

    /// Piece list for a team.
    #[must_use]
    pub fn pieces(&self, team: Team) -> &[PieceId] {
        match team {
            Team::Red => &self.red_pieces,
            Team::Blue => &self.blue_pieces,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SeederConfig::default();
        assert_eq!(config.cell_size(), CellSize::new(4.65, 4.65));
        assert_eq!(config.origin, None);
        assert_eq!(config.layout, LayoutKind::Stratego);
        assert_eq!(config.rows_per_side, 4);
        assert!(config.spawn_on_start);
        assert_eq!(config.overlap_policy, OverlapPolicy::Warn);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder() {
        let config = SeederConfig::new()
            .with_origin(WorldPos::new(1.0, 2.0, 0.0))
            .with_cell_size(1.0, 2.0)
            .with_halves_layout()
            .with_pieces(Team::Red, vec![PieceId::new("Scout")])
            .with_pieces(Team::Blue, vec![PieceId::new("Bomb"), PieceId::new("Flag")])
            .with_overlap_policy(OverlapPolicy::Reject)
            .with_spawn_on_start(false)
            .with_seed(9);

        assert_eq!(config.origin, Some(WorldPos::new(1.0, 2.0, 0.0)));
        assert_eq!(config.layout, LayoutKind::Halves);
        assert_eq!(config.pieces(Team::Red).len(), 1);
        assert_eq!(config.pieces(Team::Blue)[1].name(), "Flag");
        assert_eq!(config.overlap_policy, OverlapPolicy::Reject);
        assert!(!config.spawn_on_start);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_from_json_partial() {
        let config = SeederConfig::from_json(
            r#"{
                "origin": {"x": 0.5, "y": 0.5},
                "red_pieces": ["Marshal", "Spy"],
                "layout": "halves",
                "overlap_policy": "reject"
            }"#,
        )
        .unwrap();

        assert_eq!(config.origin, Some(WorldPos::new(0.5, 0.5, 0.0)));
        assert_eq!(config.red_pieces, vec![PieceId::new("Marshal"), PieceId::new("Spy")]);
        assert!(config.blue_pieces.is_empty());
        assert_eq!(config.layout, LayoutKind::Halves);
        assert_eq!(config.rows_per_side, 4);
        assert_eq!(config.overlap_policy, OverlapPolicy::Reject);
    }

    #[test]
    fn test_from_json_invalid() {
        let result = SeederConfig::from_json(r#"{"layout": "diagonal"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let result = SeederConfig::load("/nonexistent/board-seeder.json");
        assert!(matches!(result, Err(crate::core::SeedError::Io(_))));
    }
}
