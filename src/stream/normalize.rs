//! C1 control legalization and UTF-8 chunk-boundary safety
//!
//! PTY output arrives in arbitrary chunks: a multi-byte UTF-8 character can
//! be split across two reads, and legacy programs emit single-byte 8-bit C1
//! controls that browser-side terminals do not accept. This transform rewrites
//! C1 controls to their 7-bit two-byte escape equivalents and withholds an
//! incomplete trailing UTF-8 sequence so that no emitted chunk ever ends in
//! the middle of a character.

/// Expected continuation-byte count for a UTF-8 lead byte, if it is one.
fn utf8_continuations(byte: u8) -> Option<usize> {
    match byte {
        0xC2..=0xDF => Some(1),
        0xE0..=0xEF => Some(2),
        0xF0..=0xF4 => Some(3),
        _ => None,
    }
}

fn is_continuation(byte: u8) -> bool {
    (0x80..=0xBF).contains(&byte)
}

/// 7-bit escape equivalent for an 8-bit C1 control, if one is mapped.
fn c1_replacement(byte: u8) -> Option<&'static [u8]> {
    match byte {
        0x9B => Some(b"\x1b["),  // CSI
        0x9D => Some(b"\x1b]"),  // OSC
        0x9C => Some(b"\x1b\\"), // ST
        0x90 => Some(b"\x1bP"),  // DCS
        0x98 => Some(b"\x1bX"),  // SOS
        0x9E => Some(b"\x1b^"),  // PM
        0x9F => Some(b"\x1b_"),  // APC
        _ => None,
    }
}

/// Legalize C1 controls while never splitting a multi-byte character.
///
/// `carry` holds the incomplete trailing UTF-8 sequence withheld from the
/// previous call; it must be passed back verbatim on the next call. A byte
/// run that turns out not to be valid UTF-8 is flushed as-is and scanning
/// resumes at the byte that broke it, so no byte is ever dropped or
/// duplicated mid-stream.
pub fn normalize_c1(data: &[u8], carry: &[u8]) -> (Vec<u8>, Vec<u8>) {
    if data.is_empty() && carry.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let mut merged = Vec::with_capacity(carry.len() + data.len());
    merged.extend_from_slice(carry);
    merged.extend_from_slice(data);

    let mut out = Vec::with_capacity(merged.len());
    let mut pending: Vec<u8> = Vec::with_capacity(4);
    let mut expected = 0usize;

    let mut i = 0;
    while i < merged.len() {
        let byte = merged[i];

        if expected > 0 {
            if is_continuation(byte) {
                pending.push(byte);
                expected -= 1;
                i += 1;
                if expected == 0 {
                    out.append(&mut pending);
                }
                continue;
            }
            // Broken sequence: flush what we buffered and rescan this byte.
            out.append(&mut pending);
            expected = 0;
            continue;
        }

        if let Some(n) = utf8_continuations(byte) {
            pending.push(byte);
            expected = n;
            i += 1;
            continue;
        }

        match c1_replacement(byte) {
            Some(replacement) => out.extend_from_slice(replacement),
            None => out.push(byte),
        }
        i += 1;
    }

    (out, pending)
}
