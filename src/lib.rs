//! Termrelay
//!
//! Core pipeline for relaying a pseudo-terminal to remote clients. Raw PTY
//! output is first normalized into a protocol-clean byte stream, then
//! interpreted into an attributed screen model that supports change-flagged
//! snapshots:
//!
//! - `stream`: C1 control legalization, UTF-8 chunk-boundary safety, and
//!   device-attribute response filtering
//! - `state`: screen grid, escape-sequence interpretation, snapshots
//! - `replay`: bounded buffer of recent output for reconnecting clients
//!
//! The two pipeline stages share no state: the normalizer's output is the
//! tracker's only input, so each can be tested on its own. Neither performs
//! I/O; the surrounding session layer owns the PTY, the transport, and the
//! serialization of access to each per-session instance.
//!
//! ```
//! use termrelay::{StreamNormalizer, Tracker};
//!
//! let mut normalizer = StreamNormalizer::new();
//! let mut tracker = Tracker::new(80, 24);
//!
//! let cleaned = normalizer.feed(b"hi");
//! tracker.feed(&cleaned).unwrap();
//!
//! let snapshot = tracker.snapshot();
//! assert_eq!(snapshot.buffer[0][0].data, "h");
//! ```

pub mod error;
pub mod replay;
pub mod state;
pub mod stream;

pub use error::{Error, Result};
pub use replay::ReplayBuffer;
pub use state::{Cell, Color, Snapshot, Style, Tracker};
pub use stream::{filter_da_responses, normalize_c1, StreamNormalizer};
