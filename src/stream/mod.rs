//! Stream normalization
//!
//! Turns raw PTY output into a protocol-clean byte stream safe to forward to
//! remote clients. Two transforms run in a fixed order:
//!
//! 1. [`normalize_c1`]: rewrite 8-bit C1 controls to 7-bit escape pairs and
//!    keep multi-byte UTF-8 characters whole across chunk boundaries.
//! 2. [`filter_da_responses`]: strip device-attribute query responses that
//!    are terminal negotiation traffic, not user-visible output.
//!
//! Both are pure functions over `(bytes, carry-over)`; [`StreamNormalizer`]
//! owns one carry-over value per transform so a session holds exactly one
//! normalizer per connection.

mod filter;
mod normalize;

pub use filter::filter_da_responses;
pub use normalize::normalize_c1;

/// Per-session normalization state.
///
/// Wraps the two stateless transforms and their carry-over buffers. Feeding
/// a chunk returns the cleaned bytes ready for the tracker, the replay
/// buffer, and the live transport.
#[derive(Debug, Default)]
pub struct StreamNormalizer {
    utf8_carry: Vec<u8>,
    escape_carry: Vec<u8>,
}

impl StreamNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize one chunk of raw PTY output.
    pub fn feed(&mut self, data: &[u8]) -> Vec<u8> {
        let (normalized, utf8_carry) = normalize_c1(data, &self.utf8_carry);
        self.utf8_carry = utf8_carry;

        let (cleaned, escape_carry) = filter_da_responses(&normalized, &self.escape_carry);
        self.escape_carry = escape_carry;

        cleaned
    }

    /// Whether any bytes are currently withheld awaiting more input.
    pub fn has_pending(&self) -> bool {
        !self.utf8_carry.is_empty() || !self.escape_carry.is_empty()
    }
}
