//! Error types.

use thiserror::Error;

/// Errors that abort a seeding run before any piece is spawned.
#[derive(Error, Debug)]
pub enum SeedError {
    /// No board collaborator was supplied.
    #[error("board reference is not set")]
    MissingBoard,

    /// No world-space origin was configured.
    #[error("bottom-left origin is not set")]
    MissingOrigin,

    /// Red and blue zones share rows and the overlap policy rejects it.
    #[error("team zones overlap on rows {first}..={last}")]
    ZoneOverlap { first: i32, last: i32 },

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Seeding operation result type.
pub type Result<T> = std::result::Result<T, SeedError>;
