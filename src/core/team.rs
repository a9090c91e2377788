//! Team identification.

use serde::{Deserialize, Serialize};

/// One of the two sides on the board.
///
/// Red starts at the bottom rows, blue at the top rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    /// Both teams in spawn order. A run shuffles and spawns in this order.
    pub const ALL: [Team; 2] = [Team::Red, Team::Blue];

    /// Position in `ALL`, for per-team arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::Red => write!(f, "RED"),
            Team::Blue => write!(f, "BLUE"),
        }
    }
}
