//! Code unit ⇄ code point conversion
//!
//! The three codecs share one contract. A forward decode reads exactly one
//! code point starting at the cursor and advances the cursor past the units it
//! consumed. A reverse decode moves the cursor back over exactly one code
//! point. Ill-formed input never aborts: the decoder returns [`DECODE_ERROR`]
//! and consumes one maximal ill-formed subpart. That subpart is the lead unit
//! plus any continuation units that were valid so far, and never less than one
//! unit, so a unit that could start a new sequence is never swallowed.
//!
//! Decoders are generic over [`CodeUnit`], which lets callers hand in storage
//! wider than the encoding needs. Only the low 8 (UTF-8), 16 (UTF-16) or
//! 32 (UTF-32) bits of each unit are inspected.

pub mod utf16;
pub mod utf32;
pub mod utf8;

use crate::sink::Sink;

/// U+FFFD, substituted for every ill-formed subsequence
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// Decoder result for an ill-formed subsequence
///
/// Lies outside the Unicode code space so it can never be mistaken for a
/// decoded code point, U+FFFD included.
pub const DECODE_ERROR: u32 = 0xFFFF_FFFF;

/// Largest Unicode code point
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Whether `cp` is a Unicode scalar value (in range and not a surrogate)
#[inline]
pub const fn is_scalar(cp: u32) -> bool {
    cp <= MAX_CODE_POINT && !(cp >= 0xD800 && cp <= 0xDFFF)
}

/// Map a decoder result to a `char`, substituting U+FFFD for failures
#[inline]
pub fn to_char_lossy(cp: u32) -> char {
    char::from_u32(cp).unwrap_or(REPLACEMENT_CHARACTER)
}

/// Integer storage usable as a code unit
///
/// The accessors mask, they never reject: a `u32` holding `0x1C3` reads as
/// the UTF-8 byte `0xC3`.
pub trait CodeUnit: Copy {
    /// Low 8 bits
    fn low_u8(self) -> u8;
    /// Low 16 bits
    fn low_u16(self) -> u16;
    /// Low 32 bits
    fn low_u32(self) -> u32;
}

macro_rules! impl_code_unit {
    ($($t:ty => $u:ty),* $(,)?) => {
        $(
            impl CodeUnit for $t {
                #[inline(always)]
                fn low_u8(self) -> u8 {
                    self as $u as u8
                }

                #[inline(always)]
                fn low_u16(self) -> u16 {
                    self as $u as u16
                }

                #[inline(always)]
                fn low_u32(self) -> u32 {
                    self as $u as u32
                }
            }
        )*
    };
}

impl_code_unit!(
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    usize => usize,
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
);

/// One Unicode encoding form
///
/// Implemented by the zero-sized markers [`Utf8`], [`Utf16`] and [`Utf32`]
/// so iterators and conversions can be written once and instantiated per
/// encoding.
pub trait Encoding: Copy + Default + core::fmt::Debug {
    /// Native storage type of one code unit
    type Unit: CodeUnit;

    /// Human readable name
    const NAME: &'static str;

    /// Most code units one code point can take
    const MAX_UNITS: usize;

    /// Decode one code point forward from `*pos`
    ///
    /// `units.len()` is the exclusive end bound and `*pos` must be below it.
    fn decode_next<U: CodeUnit>(units: &[U], pos: &mut usize) -> u32;

    /// Decode one code point backward, moving `*pos` down toward `begin`
    ///
    /// Only units in `begin..*pos` are read, and `*pos` must be above `begin`.
    fn decode_prev<U: CodeUnit>(units: &[U], begin: usize, pos: &mut usize) -> u32;

    /// Append the encoding of `c`
    fn encode<S: Sink<Self::Unit>>(c: char, sink: &mut S);

    /// Number of units [`Self::encode`] appends for `c`
    fn encoded_len(c: char) -> usize;

    /// Append the encoding of `cp`, substituting U+FFFD for non-scalar values
    #[inline]
    fn encode_lossy<S: Sink<Self::Unit>>(cp: u32, sink: &mut S) {
        Self::encode(to_char_lossy(cp), sink);
    }
}

/// UTF-8 marker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Utf8;

/// UTF-16 marker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Utf16;

/// UTF-32 marker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Utf32;

impl Encoding for Utf8 {
    type Unit = u8;
    const NAME: &'static str = "UTF-8";
    const MAX_UNITS: usize = 4;

    #[inline]
    fn decode_next<U: CodeUnit>(units: &[U], pos: &mut usize) -> u32 {
        utf8::decode_next(units, pos)
    }

    #[inline]
    fn decode_prev<U: CodeUnit>(units: &[U], begin: usize, pos: &mut usize) -> u32 {
        utf8::decode_prev(units, begin, pos)
    }

    #[inline]
    fn encode<S: Sink<u8>>(c: char, sink: &mut S) {
        utf8::encode(c, sink);
    }

    #[inline]
    fn encoded_len(c: char) -> usize {
        utf8::encoded_len(c)
    }
}

impl Encoding for Utf16 {
    type Unit = u16;
    const NAME: &'static str = "UTF-16";
    const MAX_UNITS: usize = 2;

    #[inline]
    fn decode_next<U: CodeUnit>(units: &[U], pos: &mut usize) -> u32 {
        utf16::decode_next(units, pos)
    }

    #[inline]
    fn decode_prev<U: CodeUnit>(units: &[U], begin: usize, pos: &mut usize) -> u32 {
        utf16::decode_prev(units, begin, pos)
    }

    #[inline]
    fn encode<S: Sink<u16>>(c: char, sink: &mut S) {
        utf16::encode(c, sink);
    }

    #[inline]
    fn encoded_len(c: char) -> usize {
        utf16::encoded_len(c)
    }
}

impl Encoding for Utf32 {
    type Unit = u32;
    const NAME: &'static str = "UTF-32";
    const MAX_UNITS: usize = 1;

    #[inline]
    fn decode_next<U: CodeUnit>(units: &[U], pos: &mut usize) -> u32 {
        utf32::decode_next(units, pos)
    }

    #[inline]
    fn decode_prev<U: CodeUnit>(units: &[U], begin: usize, pos: &mut usize) -> u32 {
        utf32::decode_prev(units, begin, pos)
    }

    #[inline]
    fn encode<S: Sink<u32>>(c: char, sink: &mut S) {
        utf32::encode(c, sink);
    }

    #[inline]
    fn encoded_len(_c: char) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_scalar_boundaries() {
        assert!(is_scalar(0));
        assert!(is_scalar(0xD7FF));
        assert!(!is_scalar(0xD800));
        assert!(!is_scalar(0xDFFF));
        assert!(is_scalar(0xE000));
        assert!(is_scalar(MAX_CODE_POINT));
        assert!(!is_scalar(MAX_CODE_POINT + 1));
        assert!(!is_scalar(DECODE_ERROR));
    }

    #[test]
    fn test_decode_error_is_not_replacement() {
        assert_ne!(DECODE_ERROR, REPLACEMENT_CHARACTER as u32);
        assert_eq!(to_char_lossy(DECODE_ERROR), REPLACEMENT_CHARACTER);
        assert_eq!(to_char_lossy(0x41), 'A');
    }

    #[test]
    fn test_code_unit_masking() {
        assert_eq!(0x1C3u32.low_u8(), 0xC3);
        assert_eq!((-1i8).low_u8(), 0xFF);
        assert_eq!((-1i8).low_u32(), 0xFF);
        assert_eq!(0x1_D83Du64.low_u16(), 0xD83D);
        assert_eq!(0x1_0000_0041u64.low_u32(), 0x41);
    }

    #[test]
    fn test_lossy_encoding_substitutes() {
        let mut out = Vec::new();
        Utf8::encode_lossy(0xD800, &mut out);
        Utf8::encode_lossy(0x110000, &mut out);
        assert_eq!(out, "\u{FFFD}\u{FFFD}".as_bytes());

        let mut out16 = Vec::new();
        Utf16::encode_lossy(0xDC00, &mut out16);
        assert_eq!(out16, vec![0xFFFD]);

        let mut out32 = Vec::new();
        Utf32::encode_lossy(DECODE_ERROR, &mut out32);
        assert_eq!(out32, vec![0xFFFD]);
    }
}
