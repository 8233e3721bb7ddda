//! Point-in-time screen snapshots
//!
//! A snapshot is an immutable copy of the grid taken by the tracker, with a
//! flag saying whether anything changed since the previous snapshot was
//! taken. The session layer uses the flag to skip redundant redraws.

use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// An immutable copy of the screen at one point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Grid width in columns
    pub width: usize,
    /// Grid height in rows
    pub height: usize,
    /// Cell contents, row-major with row 0 on top
    pub buffer: Vec<Vec<Cell>>,
    /// Whether the screen differs from the previously taken snapshot
    pub has_changes: bool,
}

impl Snapshot {
    /// Serialize for shipping to a rendering client
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Plain-text rendition of the screen, for debugging and tests
    pub fn to_text(&self) -> String {
        let mut result = String::new();
        for row in &self.buffer {
            let mut line = String::new();
            for cell in row {
                if cell.data.is_empty() {
                    line.push(' ');
                } else {
                    line.push_str(&cell.data);
                }
            }
            result.push_str(line.trim_end());
            result.push('\n');
        }
        result
    }
}
