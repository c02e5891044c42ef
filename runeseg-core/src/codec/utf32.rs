//! UTF-32 codec

use super::{is_scalar, CodeUnit, DECODE_ERROR};
use crate::sink::Sink;

/// Decode one code point at `*pos`; surrogates and values above U+10FFFF fail
///
/// # Panics
///
/// Panics if `*pos >= units.len()`.
#[inline]
pub fn decode_next<U: CodeUnit>(units: &[U], pos: &mut usize) -> u32 {
    let start = *pos;
    debug_assert!(start < units.len(), "decode requested at end of input");
    *pos = start + 1;
    let cp = units[start].low_u32();
    if is_scalar(cp) {
        cp
    } else {
        DECODE_ERROR
    }
}

/// Decode one code point ending at `*pos`, moving `*pos` back over it
///
/// # Panics
///
/// Panics if `*pos <= begin` or `*pos > units.len()`.
#[inline]
pub fn decode_prev<U: CodeUnit>(units: &[U], begin: usize, pos: &mut usize) -> u32 {
    debug_assert!(begin < *pos, "reverse decode requested at start of input");
    *pos -= 1;
    let mut cursor = *pos;
    decode_next(units, &mut cursor)
}

/// Append `c` as a single 32-bit unit
#[inline]
pub fn encode<S: Sink<u32>>(c: char, sink: &mut S) {
    sink.push(c as u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rejects_non_scalars() {
        let units = [0x41u32, 0xD800, 0x110000, 0x10FFFF];
        let mut pos = 0;
        let mut out = Vec::new();
        while pos < units.len() {
            out.push(decode_next(&units, &mut pos));
        }
        assert_eq!(out, vec![0x41, DECODE_ERROR, DECODE_ERROR, 0x10FFFF]);
    }

    #[test]
    fn test_decode_prev_single_step() {
        let units = [0x41u32, 0xDFFF];
        let mut pos = 2;
        assert_eq!(decode_prev(&units, 0, &mut pos), DECODE_ERROR);
        assert_eq!(decode_prev(&units, 0, &mut pos), 0x41);
        assert_eq!(pos, 0);
    }
}
