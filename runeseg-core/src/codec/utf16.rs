//! UTF-16 codec

use super::{CodeUnit, DECODE_ERROR};
use crate::sink::Sink;

/// Whether `u` is a high (leading) surrogate
#[inline(always)]
pub fn is_high_surrogate(u: u16) -> bool {
    (0xD800..=0xDBFF).contains(&u)
}

/// Whether `u` is a low (trailing) surrogate
#[inline(always)]
pub fn is_low_surrogate(u: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&u)
}

/// Decode one code point starting at `*pos`
///
/// A high surrogate followed by a low surrogate combines into one
/// supplementary code point. Any other surrogate is a one-unit failure
/// returning [`DECODE_ERROR`].
///
/// # Panics
///
/// Panics if `*pos >= units.len()`.
#[inline]
pub fn decode_next<U: CodeUnit>(units: &[U], pos: &mut usize) -> u32 {
    let start = *pos;
    debug_assert!(start < units.len(), "decode requested at end of input");
    let lead = units[start].low_u16();
    *pos = start + 1;

    if !(0xD800..=0xDFFF).contains(&lead) {
        return lead as u32;
    }
    if is_high_surrogate(lead) {
        if let Some(trail) = units.get(start + 1).map(|u| u.low_u16()) {
            if is_low_surrogate(trail) {
                *pos = start + 2;
                return (((lead as u32) - 0xD800) << 10) + ((trail as u32) - 0xDC00) + 0x10000;
            }
        }
    }
    DECODE_ERROR
}

/// Decode one code point ending at `*pos`, moving `*pos` back over it
///
/// # Panics
///
/// Panics if `*pos <= begin` or `*pos > units.len()`.
pub fn decode_prev<U: CodeUnit>(units: &[U], begin: usize, pos: &mut usize) -> u32 {
    let end = *pos;
    debug_assert!(begin < end, "reverse decode requested at start of input");

    let mut lead = end - 1;
    if lead > begin && is_low_surrogate(units[lead].low_u16()) {
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

/// Number of 16-bit units needed to encode `c`
#[inline]
pub fn encoded_len(c: char) -> usize {
    if (c as u32) <= 0xFFFF {
        1
    } else {
        2
    }
}

/// Append the UTF-16 encoding of `c`
#[inline]
pub fn encode<S: Sink<u16>>(c: char, sink: &mut S) {
    let cp = c as u32;
    if cp <= 0xFFFF {
        sink.push(cp as u16);
    } else {
        sink.push((0xD7C0 + (cp >> 10)) as u16);
        sink.push((0xDC00 + (cp & 0x3FF)) as u16);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: u32 = DECODE_ERROR;

    fn decode_all(units: &[u16]) -> Vec<u32> {
        let mut pos = 0;
        let mut out = Vec::new();
        while pos < units.len() {
            out.push(decode_next(units, &mut pos));
        }
        out
    }

    fn decode_all_rev(units: &[u16]) -> Vec<u32> {
        let mut pos = units.len();
        let mut out = Vec::new();
        while pos > 0 {
            out.push(decode_prev(units, 0, &mut pos));
        }
        out.reverse();
        out
    }

    #[test]
    fn test_surrogate_pair() {
        assert_eq!(decode_all(&[0xD83D, 0xDE00]), vec![0x1F600]);
        assert_eq!(decode_all(&[0xDBFF, 0xDFFF]), vec![0x10FFFF]);
    }

    #[test]
    fn test_unpaired_surrogates() {
        assert_eq!(decode_all(&[0xD83D]), vec![E]);
        assert_eq!(decode_all(&[0xD83D, 0x0041]), vec![E, 0x41]);
        assert_eq!(decode_all(&[0xDE00, 0xD83D]), vec![E, E]);
        assert_eq!(decode_all(&[0xD83D, 0xD83D, 0xDE00]), vec![E, 0x1F600]);
    }

    #[test]
    fn test_reverse_matches_forward() {
        let cases: &[&[u16]] = &[
            &[0x41, 0xD83D, 0xDE00, 0x42],
            &[0xDE00, 0xDE00],
            &[0xD83D, 0xD83D, 0xDE00],
            &[0xD83D],
            &[0xDE00, 0xD83D, 0x41],
        ];
        for units in cases {
            assert_eq!(decode_all_rev(units), decode_all(units), "{units:X?}");
        }
    }

    #[test]
    fn test_masks_wide_storage() {
        let units: [u32; 2] = [0x1_D83D, 0xF_DE00];
        let mut pos = 0;
        assert_eq!(decode_next(&units, &mut pos), 0x1F600);
        assert_eq!(pos, 2);
    }

    #[test]
    fn test_encode_pair_formula() {
        let mut out = Vec::new();
        encode('\u{1F600}', &mut out);
        assert_eq!(out, vec![0xD83D, 0xDE00]);
        let expected: Vec<u16> = "\u{10000}\u{FFFF}".encode_utf16().collect();
        let mut out = Vec::new();
        encode('\u{10000}', &mut out);
        encode('\u{FFFF}', &mut out);
        assert_eq!(out, expected);
    }
}
