//! Device-attribute response filtering
//!
//! When a program probes the terminal ("who are you", primary/secondary
//! device attributes), the reply travels through the same PTY stream as
//! ordinary output. Forwarding those replies to remote clients would leak
//! negotiation traffic that was never meant to be displayed, so complete
//! responses are stripped and a possible partial response at the end of a
//! chunk is withheld until the next chunk disambiguates it.

const ESC: u8 = 0x1B;

fn is_marker(byte: u8) -> bool {
    matches!(byte, b'?' | b'>' | b'=')
}

fn is_param(byte: u8) -> bool {
    byte.is_ascii_digit() || byte == b';'
}

/// Length of a complete device-attribute response starting at `buf[0]`,
/// i.e. `ESC [ (?|>|=) [0-9;]* c`.
fn match_response(buf: &[u8]) -> Option<usize> {
    if buf.len() < 4 || buf[0] != ESC || buf[1] != b'[' || !is_marker(buf[2]) {
        return None;
    }
    let mut i = 3;
    while i < buf.len() && is_param(buf[i]) {
        i += 1;
    }
    if i < buf.len() && buf[i] == b'c' {
        Some(i + 1)
    } else {
        None
    }
}

/// Whether `buf` in its entirety is a prefix of a device-attribute response.
fn is_partial_response(buf: &[u8]) -> bool {
    match buf {
        [] => false,
        [ESC] | [ESC, b'['] => true,
        [ESC, b'[', marker, params @ ..] => {
            is_marker(*marker) && params.iter().all(|&b| is_param(b))
        }
        _ => false,
    }
}

/// Strip device-attribute query responses from a chunk.
///
/// `carry` holds the trailing bytes withheld by the previous call because
/// they could still grow into a response; it must be passed back on the next
/// call. The filter is deliberately permissive: a tail that merely resembles
/// a response prefix is withheld once and re-emitted as soon as a
/// non-matching byte disambiguates it.
pub fn filter_da_responses(data: &[u8], carry: &[u8]) -> (Vec<u8>, Vec<u8>) {
    if data.is_empty() && carry.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let mut merged = Vec::with_capacity(carry.len() + data.len());
    merged.extend_from_slice(carry);
    merged.extend_from_slice(data);

    // Drop every complete response.
    let mut filtered = Vec::with_capacity(merged.len());
    let mut i = 0;
    while i < merged.len() {
        if let Some(len) = match_response(&merged[i..]) {
            i += len;
        } else {
            filtered.push(merged[i]);
            i += 1;
        }
    }

    // Withhold the longest tail that is still a genuine response prefix.
    for start in 0..filtered.len() {
        if filtered[start] == ESC && is_partial_response(&filtered[start..]) {
            let tail = filtered.split_off(start);
            return (filtered, tail);
        }
    }

    (filtered, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_noop() {
        assert_eq!(filter_da_responses(b"", b""), (Vec::new(), Vec::new()));
    }

    #[test]
    fn test_plain_text_untouched() {
        let (out, carry) = filter_da_responses(b"hello world", b"");
        assert_eq!(out, b"hello world");
        assert!(carry.is_empty());
    }

    #[test]
    fn test_complete_response_removed() {
        let (out, carry) = filter_da_responses(b"a\x1b[?1;10;0cb", b"");
        assert_eq!(out, b"ab");
        assert!(carry.is_empty());
    }

    #[test]
    fn test_all_markers_removed() {
        for marker in [b'?', b'>', b'='] {
            let mut data = b"\x1b[".to_vec();
            data.push(marker);
            data.extend_from_slice(b"65;1;9c!");
            let (out, carry) = filter_da_responses(&data, b"");
            assert_eq!(out, b"!", "marker {}", marker as char);
            assert!(carry.is_empty());
        }
    }

    #[test]
    fn test_split_response_withheld_then_dropped() {
        let (out, carry) = filter_da_responses(b"x\x1b[?1;10", b"");
        assert_eq!(out, b"x");
        assert!(!carry.is_empty());

        let (out, carry) = filter_da_responses(b";0cy", &carry);
        assert_eq!(out, b"y");
        assert!(carry.is_empty());
    }

    #[test]
    fn test_lone_escape_withheld() {
        let (out, carry) = filter_da_responses(b"abc\x1b", b"");
        assert_eq!(out, b"abc");
        assert_eq!(carry, b"\x1b");
    }

    #[test]
    fn test_withheld_prefix_reemitted_when_disambiguated() {
        // "\x1b[" could still become a response, so it is withheld...
        let (out, carry) = filter_da_responses(b"\x1b[", b"");
        assert!(out.is_empty());
        assert_eq!(carry, b"\x1b[");

        // ...but "\x1b[31m" is ordinary SGR and comes out whole.
        let (out, carry) = filter_da_responses(b"31m", &carry);
        assert_eq!(out, b"\x1b[31m");
        assert!(carry.is_empty());
    }

    #[test]
    fn test_sgr_sequences_untouched() {
        let (out, carry) = filter_da_responses(b"\x1b[31mred\x1b[0m!", b"");
        assert_eq!(out, b"\x1b[31mred\x1b[0m!");
        assert!(carry.is_empty());
    }

    #[test]
    fn test_multiple_responses_in_one_chunk() {
        let (out, carry) = filter_da_responses(b"\x1b[?1;2ca\x1b[>0;276;0cb", b"");
        assert_eq!(out, b"ab");
        assert!(carry.is_empty());
    }

    #[test]
    fn test_escape_mid_chunk_not_withheld() {
        // An ESC that is already followed by non-matching bytes is not a
        // partial response.
        let (out, carry) = filter_da_responses(b"\x1bPdata", b"");
        assert_eq!(out, b"\x1bPdata");
        assert!(carry.is_empty());
    }
}
