//! Replay buffer
//!
//! A bounded buffer of recently forwarded output. When a client reconnects,
//! the session layer replays its contents so the new connection starts with
//! the recent screen history instead of a blank stream. Writes are retained
//! whole; once the total size exceeds the capacity, the oldest writes are
//! discarded until it fits.

use std::collections::VecDeque;

/// Bounded buffer of the most recently written output chunks
#[derive(Debug)]
pub struct ReplayBuffer {
    chunks: VecDeque<Vec<u8>>,
    total: usize,
    capacity: usize,
}

impl ReplayBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            chunks: VecDeque::new(),
            total: 0,
            capacity,
        }
    }

    /// Append one write, trimming whole oldest writes once over capacity
    pub fn push(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        self.chunks.push_back(data.to_vec());
        self.total += data.len();
        while self.total > self.capacity {
            match self.chunks.pop_front() {
                Some(oldest) => self.total -= oldest.len(),
                None => break,
            }
        }
    }

    /// The retained bytes, oldest first
    pub fn contents(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.total);
        for chunk in &self.chunks {
            out.extend_from_slice(chunk);
        }
        out
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.chunks.clear();
        self.total = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retains_recent_writes() {
        let mut buffer = ReplayBuffer::new(10);
        buffer.push(b"abc");
        buffer.push(b"de");
        assert_eq!(buffer.contents(), b"abcde");
        assert_eq!(buffer.len(), 5);
    }

    #[test]
    fn test_trims_oldest_writes() {
        let mut buffer = ReplayBuffer::new(5);
        buffer.push(b"abc");
        buffer.push(b"de");
        buffer.push(b"f");
        assert_eq!(buffer.contents(), b"def");
    }

    #[test]
    fn test_oversized_write_dropped_entirely() {
        let mut buffer = ReplayBuffer::new(4);
        buffer.push(b"toolong");
        assert!(buffer.is_empty());
        buffer.push(b"ok");
        assert_eq!(buffer.contents(), b"ok");
    }

    #[test]
    fn test_empty_push_ignored() {
        let mut buffer = ReplayBuffer::new(4);
        buffer.push(b"");
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut buffer = ReplayBuffer::new(8);
        buffer.push(b"data");
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 8);
    }
}
