//! Error types for screen-state tracking

use thiserror::Error;

/// Errors surfaced by the tracker.
///
/// Decode anomalies (malformed UTF-8, unknown escape sequences) are absorbed
/// internally and never reach this type; the only variant represents a
/// structural violation in the session layer, such as feeding output sized
/// for a grid the tracker was never resized to.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Cursor cannot be reconciled with the current grid dimensions
    #[error("cursor at ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
}

/// Result type for tracker operations
pub type Result<T> = std::result::Result<T, Error>;
