//! Row-band zones and layout computation.
//!
//! A zone is a closed row range spanning every column. Zones are derived
//! purely from the board's row count and the layout mode; nothing here looks
//! at walls.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::config::{LayoutKind, OverlapPolicy, SeederConfig};
use crate::core::error::{Result, SeedError};
use crate::core::team::Team;

/// Closed row range `[min_row, max_row]` across all columns.
///
/// `max_row < min_row` denotes an empty zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowZone {
    pub min_row: i32,
    pub max_row: i32,
}

impl RowZone {
    /// Create a zone from inclusive bounds.
    #[must_use]
    pub const fn new(min_row: i32, max_row_inclusive: i32) -> Self {
        Self {
            min_row,
            max_row: max_row_inclusive,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.max_row < self.min_row
    }

    /// Number of rows in the zone.
    #[must_use]
    pub fn row_count(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (i64::from(self.max_row) - i64::from(self.min_row) + 1) as usize
        }
    }

    #[must_use]
    pub const fn contains_row(&self, y: i32) -> bool {
        self.min_row <= y && y <= self.max_row
    }

    /// Rows in increasing order.
    pub fn rows(&self) -> impl Iterator<Item = i32> {
        self.min_row..=self.max_row
    }

    /// Rows shared with `other`, if any.
    #[must_use]
    pub fn intersection(&self, other: &RowZone) -> Option<RowZone> {
        let shared = RowZone::new(self.min_row.max(other.min_row), self.max_row.min(other.max_row));
        (!shared.is_empty()).then_some(shared)
    }

    /// Restrict the zone to rows `0..board_rows`.
    #[must_use]
    pub fn clamp_to(&self, board_rows: i32) -> RowZone {
        RowZone::new(self.min_row.max(0), self.max_row.min(board_rows.saturating_sub(1)))
    }
}

impl std::fmt::Display for RowZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min_row, self.max_row)
    }
}

/// Compute red and blue zones for a board with `rows` rows.
///
/// Under the Stratego layout the zones are `[0, rows_per_side - 1]` and
/// `[rows - rows_per_side, rows - 1]`; they overlap when
/// `2 * rows_per_side > rows`. Under the halves layout the split is at
/// `rows / 2`, so an odd row count gives blue the extra row.
///
/// Bounds saturate at the `i32` limits; out-of-range inputs yield empty or
/// off-board zones, never a panic.
#[must_use]
pub fn compute_zones(rows: i32, rows_per_side: i32, use_stratego_layout: bool) -> (RowZone, RowZone) {
    let last_row = rows.saturating_sub(1);
    if use_stratego_layout {
        (
            RowZone::new(0, rows_per_side.saturating_sub(1)),
            RowZone::new(rows.saturating_sub(rows_per_side), last_row),
        )
    } else {
        (RowZone::new(0, rows / 2 - 1), RowZone::new(rows / 2, last_row))
    }
}

/// Layout mode with its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    /// `rows_per_side` rows from each edge.
    Stratego { rows_per_side: i32 },
    /// Equal halves, blue taking the extra row when odd.
    Halves,
}

impl LayoutMode {
    /// The layout selected by a configuration.
    #[must_use]
    pub fn from_config(config: &SeederConfig) -> Self {
        match config.layout {
            LayoutKind::Stratego => LayoutMode::Stratego {
                rows_per_side: config.rows_per_side,
            },
            LayoutKind::Halves => LayoutMode::Halves,
        }
    }

    /// Zone plan for a board with `rows` rows.
    #[must_use]
    pub fn zones(self, rows: i32) -> ZonePlan {
        let (red, blue) = match self {
            LayoutMode::Stratego { rows_per_side } => compute_zones(rows, rows_per_side, true),
            LayoutMode::Halves => compute_zones(rows, 0, false),
        };
        ZonePlan { rows, red, blue }
    }
}

/// Both teams' zones for one board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZonePlan {
    /// Board row count the plan was computed for.
    pub rows: i32,
    pub red: RowZone,
    pub blue: RowZone,
}

impl ZonePlan {
    /// Zone for a team.
    #[must_use]
    pub fn zone(&self, team: Team) -> RowZone {
        match team {
            Team::Red => self.red,
            Team::Blue => self.blue,
        }
    }

    /// Rows claimed by both teams.
    #[must_use]
    pub fn overlap(&self) -> Option<RowZone> {
        self.red.intersection(&self.blue)
    }

    /// Board rows that belong to neither team.
    #[must_use]
    pub fn unassigned_rows(&self) -> Vec<i32> {
        (0..self.rows)
            .filter(|&y| !self.red.contains_row(y) && !self.blue.contains_row(y))
            .collect()
    }

    /// Whether both zones have the same number of rows.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.red.row_count() == self.blue.row_count()
    }

    /// Apply an overlap policy to this plan.
    ///
    /// Uneven zones are reported at debug level and never rejected.
    pub fn check(&self, policy: OverlapPolicy) -> Result<()> {
        if !self.is_balanced() {
            debug!(
                red_rows = self.red.row_count(),
                blue_rows = self.blue.row_count(),
                "Zones are uneven"
            );
        }

        let Some(shared) = self.overlap() else {
            return Ok(());
        };

        match policy {
            OverlapPolicy::Allow => Ok(()),
            OverlapPolicy::Warn => {
                warn!("Red zone {} and blue zone {} overlap on rows {}", self.red, self.blue, shared);
                Ok(())
            }
            OverlapPolicy::Reject => Err(SeedError::ZoneOverlap {
                first: shared.min_row,
                last: shared.max_row,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stratego_ten_rows() {
        let (red, blue) = compute_zones(10, 4, true);
        assert_eq!(red, RowZone::new(0, 3));
        assert_eq!(blue, RowZone::new(6, 9));
    }

    #[test]
    fn test_halves_odd_rows() {
        let (red, blue) = compute_zones(9, 4, false);
        assert_eq!(red, RowZone::new(0, 3));
        assert_eq!(blue, RowZone::new(4, 8));
    }

    #[test]
    fn test_halves_ignores_rows_per_side() {
        assert_eq!(compute_zones(8, 1, false), compute_zones(8, 3, false));
    }

    #[test]
    fn test_stratego_overlap_not_corrected() {
        let (red, blue) = compute_zones(6, 4, true);
        assert_eq!(red, RowZone::new(0, 3));
        assert_eq!(blue, RowZone::new(2, 5));
    }

    #[test]
    fn test_extreme_inputs_saturate() {
        let (red, blue) = compute_zones(10, i32::MIN, true);
        assert!(red.is_empty());
        assert!(blue.is_empty());

        let (red, blue) = compute_zones(i32::MIN, 4, true);
        assert_eq!(red, RowZone::new(0, 3));
        assert_eq!(blue, RowZone::new(i32::MIN, i32::MIN));
        assert!(blue.clamp_to(i32::MIN).is_empty());

        let (red, blue) = compute_zones(10, i32::MAX, true);
        assert_eq!(red.row_count(), i32::MAX as usize);
        assert_eq!(blue.max_row, 9);

        assert!(RowZone::new(0, 3).clamp_to(i32::MIN).is_empty());
        assert_eq!(RowZone::new(i32::MIN, i32::MAX).row_count(), 1 << 32);
    }

    #[test]
    fn test_row_zone_empty() {
        let zone = RowZone::new(0, -1);
        assert!(zone.is_empty());
        assert_eq!(zone.row_count(), 0);
        assert_eq!(zone.rows().count(), 0);
    }

    #[test]
    fn test_row_zone_intersection() {
        let a = RowZone::new(0, 3);
        assert_eq!(a.intersection(&RowZone::new(2, 5)), Some(RowZone::new(2, 3)));
        assert_eq!(a.intersection(&RowZone::new(4, 5)), None);
    }

    #[test]
    fn test_row_zone_clamp() {
        assert_eq!(RowZone::new(-2, 12).clamp_to(10), RowZone::new(0, 9));
        assert_eq!(RowZone::new(3, 5).clamp_to(10), RowZone::new(3, 5));
    }

    #[test]
    fn test_plan_unassigned_rows() {
        let plan = LayoutMode::Stratego { rows_per_side: 4 }.zones(10);
        assert_eq!(plan.unassigned_rows(), vec![4, 5]);
        assert!(plan.overlap().is_none());
        assert!(plan.is_balanced());
    }

    #[test]
    fn test_plan_halves_uneven() {
        let plan = LayoutMode::Halves.zones(9);
        assert!(!plan.is_balanced());
        assert!(plan.unassigned_rows().is_empty());
        assert!(plan.check(OverlapPolicy::Reject).is_ok());
    }

    #[test]
    fn test_plan_zone_by_team() {
        let plan = LayoutMode::Halves.zones(8);
        assert_eq!(plan.zone(Team::Red), RowZone::new(0, 3));
        assert_eq!(plan.zone(Team::Blue), RowZone::new(4, 7));
    }

    #[test]
    fn test_overlap_policies() {
        let plan = LayoutMode::Stratego { rows_per_side: 4 }.zones(6);
        assert_eq!(plan.overlap(), Some(RowZone::new(2, 3)));

        assert!(plan.check(OverlapPolicy::Allow).is_ok());
        assert!(plan.check(OverlapPolicy::Warn).is_ok());
        assert!(matches!(
            plan.check(OverlapPolicy::Reject),
            Err(SeedError::ZoneOverlap { first: 2, last: 3 })
        ));
    }

    #[test]
    fn test_layout_from_config() {
        let config = SeederConfig::new().with_stratego_layout(2);
        assert_eq!(LayoutMode::from_config(&config), LayoutMode::Stratego { rows_per_side: 2 });

        let config = SeederConfig::new().with_halves_layout();
        assert_eq!(LayoutMode::from_config(&config), LayoutMode::Halves);
    }
}
