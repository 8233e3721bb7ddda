//! Screen state tracking
//!
//! Consumes the cleaned byte stream produced by [`crate::stream`] and
//! maintains an attributed screen grid with change-flagged snapshots.

mod cell;
mod cursor;
mod grid;
mod parser;
mod snapshot;
mod tracker;

pub use cell::{Cell, Color, Style};
pub use snapshot::Snapshot;
pub use tracker::Tracker;
