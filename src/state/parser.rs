//! Lenient escape-sequence parser
//!
//! Splits a cleaned byte stream into printable characters, C0 controls, and
//! CSI commands. This is deliberately a tolerant interpreter rather than a
//! strict grammar: anything it does not recognize (OSC payloads, DCS strings,
//! unknown finals) is consumed and dropped, matching how real terminals shrug
//! off codes they do not implement.

use tracing::trace;

/// A parsed unit of terminal output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print a character at the cursor
    Print(char),
    /// Execute a C0 control
    Control(ControlCode),
    /// Execute a CSI command
    Csi(CsiAction),
}

/// The C0 controls the tracker acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCode {
    CarriageReturn,
    LineFeed,
    Backspace,
    Tab,
}

/// A complete CSI sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsiAction {
    /// Final character identifying the command
    pub final_char: char,
    /// Semicolon-separated numeric parameters
    pub params: Vec<u16>,
    /// Whether a private marker (`?`, `>`, `=`, `<`) was present
    pub private: bool,
}

impl CsiAction {
    /// Parameter at `index`, or `default` if absent
    pub fn param(&self, index: usize, default: u16) -> u16 {
        self.params.get(index).copied().unwrap_or(default)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Ground,
    Escape,
    Csi,
    /// OSC / DCS / APC / PM / SOS payload, consumed to its terminator
    StringBody,
    /// ESC seen inside a string body (possible ST)
    StringEsc,
}

/// Streaming parser state
#[derive(Debug)]
pub struct Parser {
    state: State,
    params: Vec<u16>,
    current_param: u16,
    param_has_digit: bool,
    private: bool,
    utf8: Utf8Decoder,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self {
            state: State::Ground,
            params: Vec::with_capacity(8),
            current_param: 0,
            param_has_digit: false,
            private: false,
            utf8: Utf8Decoder::default(),
        }
    }

    /// Parse a chunk of bytes into actions
    pub fn feed(&mut self, data: &[u8]) -> Vec<Action> {
        let mut actions = Vec::new();
        for &byte in data {
            self.advance(byte, &mut actions);
        }
        actions
    }

    fn advance(&mut self, byte: u8, actions: &mut Vec<Action>) {
        match self.state {
            State::Ground => self.ground(byte, actions),
            State::Escape => self.escape(byte),
            State::Csi => self.csi(byte, actions),
            State::StringBody => {
                if byte == 0x07 {
                    self.state = State::Ground;
                } else if byte == 0x1B {
                    self.state = State::StringEsc;
                }
            }
            State::StringEsc => {
                // ESC \ terminates the string; anything else stays inside it
                self.state = if byte == b'\\' {
                    State::Ground
                } else {
                    State::StringBody
                };
            }
        }
    }

    fn ground(&mut self, byte: u8, actions: &mut Vec<Action>) {
        match byte {
            0x1B => {
                self.utf8.reset();
                self.state = State::Escape;
            }
            0x0D => actions.push(Action::Control(ControlCode::CarriageReturn)),
            0x0A | 0x0B | 0x0C => actions.push(Action::Control(ControlCode::LineFeed)),
            0x08 => actions.push(Action::Control(ControlCode::Backspace)),
            0x09 => actions.push(Action::Control(ControlCode::Tab)),
            0x00..=0x1F | 0x7F => {}
            _ => {
                if let Some(c) = self.utf8.feed(byte) {
                    actions.push(Action::Print(c));
                }
            }
        }
    }

    fn escape(&mut self, byte: u8) {
        match byte {
            b'[' => {
                self.params.clear();
                self.current_param = 0;
                self.param_has_digit = false;
                self.private = false;
                self.state = State::Csi;
            }
            b']' | b'P' | b'X' | b'^' | b'_' => self.state = State::StringBody,
            0x1B => {}
            _ => {
                // Two-byte sequences (RIS, DECSC, charset designation, ...)
                // are not tracked.
                trace!(byte, "ignoring unsupported escape");
                self.state = State::Ground;
            }
        }
    }

    fn csi(&mut self, byte: u8, actions: &mut Vec<Action>) {
        match byte {
            b'0'..=b'9' => {
                self.current_param = self
                    .current_param
                    .saturating_mul(10)
                    .saturating_add(u16::from(byte - b'0'));
                self.param_has_digit = true;
            }
            b';' => {
                self.params.push(self.current_param);
                self.current_param = 0;
                self.param_has_digit = false;
            }
            b'?' | b'>' | b'=' | b'<' => self.private = true,
            0x20..=0x2F => {
                // Intermediate bytes; none of the tracked commands use them
            }
            0x40..=0x7E => {
                if self.param_has_digit || !self.params.is_empty() {
                    self.params.push(self.current_param);
                }
                actions.push(Action::Csi(CsiAction {
                    final_char: byte as char,
                    params: std::mem::take(&mut self.params),
                    private: self.private,
                }));
                self.state = State::Ground;
            }
            0x1B => {
                self.state = State::Escape;
            }
            0x18 | 0x1A => {
                // CAN / SUB abort the sequence
                self.state = State::Ground;
            }
            _ => {
                // Other C0 controls inside a sequence are ignored
            }
        }
    }
}

/// Streaming UTF-8 decoder.
///
/// The normalizer upstream guarantees characters arrive whole, so this only
/// has to assemble bytes within one chunk. Invalid or never-completed
/// sequences are dropped.
#[derive(Debug, Default)]
struct Utf8Decoder {
    buf: [u8; 4],
    len: usize,
    expected: usize,
}

impl Utf8Decoder {
    fn reset(&mut self) {
        self.len = 0;
        self.expected = 0;
    }

    fn feed(&mut self, byte: u8) -> Option<char> {
        if self.expected == 0 {
            if byte < 0x80 {
                return Some(byte as char);
            }
            self.expected = match byte {
                0xC2..=0xDF => 2,
                0xE0..=0xEF => 3,
                0xF0..=0xF4 => 4,
                _ => return None,
            };
            self.buf[0] = byte;
            self.len = 1;
            return None;
        }

        if !(0x80..=0xBF).contains(&byte) {
            self.reset();
            // The breaking byte may itself be printable
            return self.feed(byte);
        }

        self.buf[self.len] = byte;
        self.len += 1;
        if self.len < self.expected {
            return None;
        }

        let decoded = std::str::from_utf8(&self.buf[..self.len])
            .ok()
            .and_then(|s| s.chars().next());
        self.reset();
        decoded
    }
}
