//! UTF-8 codec

use super::{CodeUnit, DECODE_ERROR};
use crate::sink::Sink;

/// Whether `b` has the `10xxxxxx` continuation shape
#[inline(always)]
pub fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// Sequence length and the allowed range of the first continuation byte
///
/// The narrowed ranges exclude overlong forms (E0, F0), encoded surrogates
/// (ED) and values beyond U+10FFFF (F4).
#[inline(always)]
fn lead_shape(lead: u8) -> Option<(usize, u8, u8)> {
    match lead {
        0xC2..=0xDF => Some((2, 0x80, 0xBF)),
        0xE0 => Some((3, 0xA0, 0xBF)),
        0xE1..=0xEC | 0xEE..=0xEF => Some((3, 0x80, 0xBF)),
        0xED => Some((3, 0x80, 0x9F)),
        0xF0 => Some((4, 0x90, 0xBF)),
        0xF1..=0xF3 => Some((4, 0x80, 0xBF)),
        0xF4 => Some((4, 0x80, 0x8F)),
        _ => None,
    }
}

/// Decode one code point starting at `*pos`
///
/// Returns [`DECODE_ERROR`] for an ill-formed subsequence and leaves `*pos`
/// just past it: past the lead byte and every continuation byte accepted
/// before the failure (at least one byte).
///
/// # Panics
///
/// Panics if `*pos >= units.len()`.
#[inline]
pub fn decode_next<U: CodeUnit>(units: &[U], pos: &mut usize) -> u32 {
    let start = *pos;
    debug_assert!(start < units.len(), "decode requested at end of input");
    let lead = units[start].low_u8();

    if lead < 0x80 {
        *pos = start + 1;
        return lead as u32;
    }

    let Some((len, lo, hi)) = lead_shape(lead) else {
        *pos = start + 1;
        return DECODE_ERROR;
    };

    let mut cp = (lead as u32) & (0x7F >> len);
    let mut i = 1;
    while i < len {
        let Some(unit) = units.get(start + i) else {
            // truncated: drop the lead and the continuations seen so far
            *pos = start + i;
            return DECODE_ERROR;
        };
        let b = unit.low_u8();
        let ok = if i == 1 {
            (lo..=hi).contains(&b)
        } else {
            is_continuation(b)
        };
        if !ok {
            *pos = start + i;
            return DECODE_ERROR;
        }
        cp = (cp << 6) | (b & 0x3F) as u32;
        i += 1;
    }

    *pos = start + len;
    cp
}

/// Decode one code point ending at `*pos`, moving `*pos` back over it
///
/// Steps back over at most three continuation bytes (never below `begin`) to
/// find a lead, then re-runs [`decode_next`] from there. If the forward decode
/// does not land exactly on the original position the step is treated as a
/// single-byte failure, which keeps reverse traversal producing the same
/// sequence of code points and errors as forward traversal.
///
/// # Panics
///
/// Panics if `*pos <= begin` or `*pos > units.len()`.
pub fn decode_prev<U: CodeUnit>(units: &[U], begin: usize, pos: &mut usize) -> u32 {
    let end = *pos;
    debug_assert!(begin < end, "reverse decode requested at start of input");

    let mut lead = end - 1;
    while lead > begin && end - lead < 4 && is_continuation(units[lead].low_u8()) {
        lead -= 1;
    }

    let mut cursor = lead;
    let cp = decode_next(&units[..end], &mut cursor);
    if cursor == end {
        *pos = lead;
        cp
    } else {
        *pos = end - 1;
        DECODE_ERROR
    }
}

/// Number of bytes needed to encode `c`
#[inline]
pub fn encoded_len(c: char) -> usize {
    match c as u32 {
        0..=0x7F => 1,
        0x80..=0x7FF => 2,
        0x800..=0xFFFF => 3,
        _ => 4,
    }
}

/// Append the UTF-8 encoding of `c`
#[inline]
pub fn encode<S: Sink<u8>>(c: char, sink: &mut S) {
    let cp = c as u32;
    match encoded_len(c) {
        1 => sink.push(cp as u8),
        2 => {
            sink.push(0xC0 | (cp >> 6) as u8);
            sink.push(0x80 | (cp & 0x3F) as u8);
        }
        3 => {
            sink.push(0xE0 | (cp >> 12) as u8);
            sink.push(0x80 | ((cp >> 6) & 0x3F) as u8);
            sink.push(0x80 | (cp & 0x3F) as u8);
        }
        _ => {
            sink.push(0xF0 | (cp >> 18) as u8);
            sink.push(0x80 | ((cp >> 12) & 0x3F) as u8);
            sink.push(0x80 | ((cp >> 6) & 0x3F) as u8);
            sink.push(0x80 | (cp & 0x3F) as u8);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(bytes: &[u8]) -> Vec<u32> {
        let mut pos = 0;
        let mut out = Vec::new();
        while pos < bytes.len() {
            out.push(decode_next(bytes, &mut pos));
        }
        out
    }

    fn decode_all_rev(bytes: &[u8]) -> Vec<u32> {
        let mut pos = bytes.len();
        let mut out = Vec::new();
        while pos > 0 {
            out.push(decode_prev(bytes, 0, &mut pos));
        }
        out.reverse();
        out
    }

    const E: u32 = DECODE_ERROR;

    #[test]
    fn test_ascii_fast_path() {
        let mut pos = 0;
        assert_eq!(decode_next(b"A", &mut pos), 0x41);
        assert_eq!(pos, 1);
    }

    #[test]
    fn test_multibyte_forms() {
        assert_eq!(decode_all("é€😀".as_bytes()), vec![0xE9, 0x20AC, 0x1F600]);
    }

    #[test]
    fn test_lone_continuations() {
        assert_eq!(decode_all(b"\x80"), vec![E]);
        assert_eq!(decode_all(b"\x81"), vec![E]);
        assert_eq!(decode_all(b"\x80\xBF"), vec![E, E]);
    }

    #[test]
    fn test_truncated_sequence_is_one_failure() {
        let mut pos = 0;
        assert_eq!(decode_next(b"\xE0\xA0", &mut pos), E);
        assert_eq!(pos, 2);
        assert_eq!(decode_all(b"\xF0\x9F\x98"), vec![E]);
        assert_eq!(decode_all(b"\xF0\x9F\x98A"), vec![E, 0x41]);
    }

    #[test]
    fn test_restricted_second_byte() {
        // overlong 3-byte, surrogate, overlong 4-byte, above U+10FFFF
        assert_eq!(decode_all(b"\xE0\x80\x80"), vec![E, E, E]);
        assert_eq!(decode_all(b"\xED\xA0\x80"), vec![E, E, E]);
        assert_eq!(decode_all(b"\xF0\x80\x80\x80"), vec![E, E, E, E]);
        assert_eq!(decode_all(b"\xF4\x90\x80\x80"), vec![E, E, E, E]);
        assert_eq!(decode_all(b"\xED\x9F\xBF"), vec![0xD7FF]);
        assert_eq!(decode_all(b"\xF4\x8F\xBF\xBF"), vec![0x10FFFF]);
    }

    #[test]
    fn test_invalid_leads() {
        for lead in [0xC0u8, 0xC1, 0xF5, 0xF8, 0xFE, 0xFF] {
            assert_eq!(decode_all(&[lead, 0x80]), vec![E, E], "lead {lead:#X}");
        }
    }

    #[test]
    fn test_wide_storage_is_masked() {
        let units: [u32; 2] = [0x1C3, 0x7A9];
        let mut pos = 0;
        assert_eq!(decode_next(&units, &mut pos), 0xE9);
        assert_eq!(pos, 2);
    }

    #[test]
    fn test_reverse_matches_forward() {
        let cases: &[&[u8]] = &[
            "aé€😀".as_bytes(),
            b"\xE0\xA0",
            b"A\xE0\xA0",
            b"\xE0\xA0\xA0\xA0",
            b"\xC2\x80\x80",
            b"\xE0\x80\x80",
            b"\xF0\x90\x80\x80\x80",
            b"\x80\x80\x80\x80\x80",
            b"\xF0\x9F\x98A",
            b"\xFF\xC2",
        ];
        for bytes in cases {
            assert_eq!(decode_all_rev(bytes), decode_all(bytes), "{bytes:X?}");
        }
    }

    #[test]
    fn test_reverse_respects_begin() {
        let bytes = "€".as_bytes();
        let mut pos = 3;
        assert_eq!(decode_prev(bytes, 1, &mut pos), E);
        assert_eq!(pos, 2);
    }

    #[test]
    fn test_encode_thresholds() {
        for (c, len) in [('\u{7F}', 1), ('\u{80}', 2), ('\u{7FF}', 2), ('\u{800}', 3), ('\u{FFFF}', 3), ('\u{10000}', 4)] {
            let mut out = Vec::new();
            encode(c, &mut out);
            assert_eq!(out.len(), len);
            assert_eq!(out, c.to_string().into_bytes());
        }
    }
}
