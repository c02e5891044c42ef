//! Conversions between encoding forms
//!
//! Every operation here is one instantiation of [`decode`]: the decode loop
//! is shared and only the output sink changes. Collecting, counting and
//! validating therefore agree exactly on where replacements go.

use crate::codec::{CodeUnit, Encoding, Utf16, Utf32, Utf8, REPLACEMENT_CHARACTER};
use crate::error::{ConversionError, Result};
use crate::iter::CodePoints;
use crate::sink::{Counter, Discard, Sink};
use core::cmp::Ordering;
use core::marker::PhantomData;

/// What to do with an ill-formed subsequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ErrorPolicy {
    /// Substitute one U+FFFD per ill-formed subsequence and keep going
    #[default]
    Replace,
    /// Stop at the first ill-formed subsequence and report its offset
    Strict,
}

/// Tally of one conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Code points produced, replacements included
    pub code_points: usize,
    /// U+FFFD substitutions made
    pub replacements: usize,
}

/// Decode `units` as `E`, pushing each code point into `sink`
///
/// Under [`ErrorPolicy::Strict`] the first ill-formed subsequence stops the
/// loop and its offset is returned as the error. Everything decoded before
/// it is already in `sink`.
pub fn decode<E, U, S>(units: &[U], policy: ErrorPolicy, sink: &mut S) -> Result<Stats>
where
    E: Encoding,
    U: CodeUnit,
    S: Sink<char>,
{
    let mut stats = Stats::default();
    let mut pos = 0;
    while pos < units.len() {
        let start = pos;
        let c = match char::from_u32(E::decode_next(units, &mut pos)) {
            Some(c) => c,
            None if policy == ErrorPolicy::Strict => return Err(ConversionError::new(start)),
            None => {
                stats.replacements += 1;
                REPLACEMENT_CHARACTER
            }
        };
        sink.push(c);
        stats.code_points += 1;
    }
    Ok(stats)
}

/// Sink adaptor encoding each pushed `char` as `T` into the inner sink
pub struct EncodeSink<'s, T, S> {
    inner: &'s mut S,
    _target: PhantomData<T>,
}

impl<'s, T: Encoding, S: Sink<T::Unit>> EncodeSink<'s, T, S> {
    /// Wrap `inner`
    pub fn new(inner: &'s mut S) -> Self {
        Self {
            inner,
            _target: PhantomData,
        }
    }
}

impl<T: Encoding, S: Sink<T::Unit>> Sink<char> for EncodeSink<'_, T, S> {
    #[inline]
    fn push(&mut self, c: char) {
        T::encode(c, &mut *self.inner);
    }
}

/// Decode `units` as `F` and append them to `sink` encoded as `T`
pub fn transcode<F, T, U, S>(units: &[U], policy: ErrorPolicy, sink: &mut S) -> Result<Stats>
where
    F: Encoding,
    T: Encoding,
    U: CodeUnit,
    S: Sink<T::Unit>,
{
    decode::<F, U, _>(units, policy, &mut EncodeSink::<T, S>::new(sink))
}

/// Number of code points in `units`, one per ill-formed subsequence
pub fn decode_and_count<E: Encoding, U: CodeUnit>(units: &[U]) -> usize {
    let mut counter = Counter::new();
    let stats = decode::<E, U, _>(units, ErrorPolicy::Replace, &mut counter);
    debug_assert_eq!(stats.map(|s| s.code_points).ok(), Some(counter.count()));
    counter.count()
}

/// Number of U+FFFD substitutions decoding `units` would make
pub fn count_replacements<E: Encoding, U: CodeUnit>(units: &[U]) -> usize {
    decode::<E, U, _>(units, ErrorPolicy::Replace, &mut Discard)
        .map(|s| s.replacements)
        .unwrap_or_default()
}

/// Check that `units` are well-formed `E`, without producing output
pub fn validate<E: Encoding, U: CodeUnit>(units: &[U]) -> Result<()> {
    decode::<E, U, _>(units, ErrorPolicy::Strict, &mut Discard).map(|_| ())
}

/// Decode `units` into a `String`, substituting U+FFFD
pub fn decode_and_collect<E: Encoding, U: CodeUnit>(units: &[U]) -> String {
    let mut out = String::with_capacity(units.len());
    // Replace policy never fails
    let _ = decode::<E, U, _>(units, ErrorPolicy::Replace, &mut out);
    out
}

/// Order two sequences by decoded code point
///
/// Ill-formed subsequences compare as U+FFFD.
pub fn compare<E: Encoding, U: CodeUnit>(a: &[U], b: &[U]) -> Ordering {
    CodePoints::<E, U>::new(a).cmp(CodePoints::<E, U>::new(b))
}

fn lossy<F, T, U>(units: &[U]) -> Vec<T::Unit>
where
    F: Encoding,
    T: Encoding,
    U: CodeUnit,
{
    let mut out = Vec::with_capacity(units.len());
    let _ = transcode::<F, T, U, _>(units, ErrorPolicy::Replace, &mut out);
    out
}

fn strict<F, T, U>(units: &[U]) -> Result<Vec<T::Unit>>
where
    F: Encoding,
    T: Encoding,
    U: CodeUnit,
{
    let mut out = Vec::with_capacity(units.len());
    transcode::<F, T, U, _>(units, ErrorPolicy::Strict, &mut out)?;
    Ok(out)
}

/// UTF-8 to UTF-16, substituting U+FFFD
pub fn utf8_to_utf16<U: CodeUnit>(units: &[U]) -> Vec<u16> {
    lossy::<Utf8, Utf16, U>(units)
}

/// UTF-8 to UTF-32, substituting U+FFFD
pub fn utf8_to_utf32<U: CodeUnit>(units: &[U]) -> Vec<u32> {
    lossy::<Utf8, Utf32, U>(units)
}

/// UTF-16 to UTF-8, substituting U+FFFD
pub fn utf16_to_utf8<U: CodeUnit>(units: &[U]) -> Vec<u8> {
    lossy::<Utf16, Utf8, U>(units)
}

/// UTF-16 to UTF-32, substituting U+FFFD
pub fn utf16_to_utf32<U: CodeUnit>(units: &[U]) -> Vec<u32> {
    lossy::<Utf16, Utf32, U>(units)
}

/// UTF-32 to UTF-8, substituting U+FFFD
pub fn utf32_to_utf8<U: CodeUnit>(units: &[U]) -> Vec<u8> {
    lossy::<Utf32, Utf8, U>(units)
}

/// UTF-32 to UTF-16, substituting U+FFFD
pub fn utf32_to_utf16<U: CodeUnit>(units: &[U]) -> Vec<u16> {
    lossy::<Utf32, Utf16, U>(units)
}

/// UTF-8 to UTF-16, failing at the first ill-formed subsequence
pub fn try_utf8_to_utf16<U: CodeUnit>(units: &[U]) -> Result<Vec<u16>> {
    strict::<Utf8, Utf16, U>(units)
}

/// UTF-8 to UTF-32, failing at the first ill-formed subsequence
pub fn try_utf8_to_utf32<U: CodeUnit>(units: &[U]) -> Result<Vec<u32>> {
    strict::<Utf8, Utf32, U>(units)
}

/// UTF-16 to UTF-8, failing at the first ill-formed subsequence
pub fn try_utf16_to_utf8<U: CodeUnit>(units: &[U]) -> Result<Vec<u8>> {
    strict::<Utf16, Utf8, U>(units)
}

/// UTF-16 to UTF-32, failing at the first ill-formed subsequence
pub fn try_utf16_to_utf32<U: CodeUnit>(units: &[U]) -> Result<Vec<u32>> {
    strict::<Utf16, Utf32, U>(units)
}

/// UTF-32 to UTF-8, failing at the first ill-formed subsequence
pub fn try_utf32_to_utf8<U: CodeUnit>(units: &[U]) -> Result<Vec<u8>> {
    strict::<Utf32, Utf8, U>(units)
}

/// UTF-32 to UTF-16, failing at the first ill-formed subsequence
pub fn try_utf32_to_utf16<U: CodeUnit>(units: &[U]) -> Result<Vec<u16>> {
    strict::<Utf32, Utf16, U>(units)
}

/// UTF-8 into a `String`, substituting U+FFFD
pub fn utf8_to_string<U: CodeUnit>(units: &[U]) -> String {
    decode_and_collect::<Utf8, U>(units)
}

/// UTF-16 into a `String`, substituting U+FFFD
pub fn utf16_to_string<U: CodeUnit>(units: &[U]) -> String {
    decode_and_collect::<Utf16, U>(units)
}

/// Check UTF-8 well-formedness
pub fn validate_utf8<U: CodeUnit>(units: &[U]) -> Result<()> {
    validate::<Utf8, U>(units)
}

/// Check UTF-16 well-formedness
pub fn validate_utf16<U: CodeUnit>(units: &[U]) -> Result<()> {
    validate::<Utf16, U>(units)
}

/// Check UTF-32 well-formedness
pub fn validate_utf32<U: CodeUnit>(units: &[U]) -> Result<()> {
    validate::<Utf32, U>(units)
}

/// Compare UTF-8 sequences by code point
pub fn compare_utf8<U: CodeUnit>(a: &[U], b: &[U]) -> Ordering {
    compare::<Utf8, U>(a, b)
}

/// Compare UTF-16 sequences by code point
///
/// Differs from comparing the raw units when supplementary characters are
/// involved: U+10000 (D800 DC00) sorts after U+FFFF.
pub fn compare_utf16<U: CodeUnit>(a: &[U], b: &[U]) -> Ordering {
    compare::<Utf16, U>(a, b)
}

/// Compare UTF-32 sequences by code point
pub fn compare_utf32<U: CodeUnit>(a: &[U], b: &[U]) -> Ordering {
    compare::<Utf32, U>(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lone_continuations_compare_equal() {
        assert_eq!(compare_utf8(b"\x80", b"\x81"), Ordering::Equal);
        assert_eq!(utf8_to_string(b"\x80"), "\u{FFFD}");
        assert_eq!(utf8_to_string(b"\x81"), "\u{FFFD}");
    }

    #[test]
    fn test_truncated_sequence() {
        assert_eq!(utf8_to_string(b"\xE0\xA0"), "\u{FFFD}");
        assert_eq!(validate_utf8(b"\xE0\xA0"), Err(ConversionError::new(0)));
    }

    #[test]
    fn test_strict_keeps_prefix() {
        let mut out: Vec<u16> = Vec::new();
        let err = transcode::<Utf8, Utf16, u8, _>(b"ab\xFFcd", ErrorPolicy::Strict, &mut out)
            .unwrap_err();
        assert_eq!(err.position(), 2);
        assert_eq!(out, vec![0x61, 0x62]);
    }

    #[test]
    fn test_replace_stats() {
        let mut out = String::new();
        let stats = decode::<Utf8, u8, _>(b"a\xC0\x80b", ErrorPolicy::Replace, &mut out).unwrap();
        assert_eq!(out, "a\u{FFFD}\u{FFFD}b");
        assert_eq!(stats, Stats { code_points: 4, replacements: 2 });
    }

    #[test]
    fn test_count_and_replacements() {
        assert_eq!(decode_and_count::<Utf8, u8>("aé😀".as_bytes()), 3);
        assert_eq!(decode_and_count::<Utf8, u8>(b"\xF0\x80\x80"), 3);
        assert_eq!(count_replacements::<Utf8, u8>(b"\xF0\x80\x80"), 3);
        assert_eq!(count_replacements::<Utf16, u16>(&[0xD800, 0x41]), 1);
    }

    #[test]
    fn test_conversions() {
        let text = "héllo 😀";
        let utf16: Vec<u16> = text.encode_utf16().collect();
        let utf32: Vec<u32> = text.chars().map(|c| c as u32).collect();

        assert_eq!(utf8_to_utf16(text.as_bytes()), utf16);
        assert_eq!(utf8_to_utf32(text.as_bytes()), utf32);
        assert_eq!(utf16_to_utf8(&utf16), text.as_bytes());
        assert_eq!(utf16_to_utf32(&utf16), utf32);
        assert_eq!(utf32_to_utf8(&utf32), text.as_bytes());
        assert_eq!(utf32_to_utf16(&utf32), utf16);
        assert_eq!(utf16_to_string(&utf16), text);
    }

    #[test]
    fn test_strict_conversions() {
        assert_eq!(try_utf8_to_utf16(b"ok").unwrap(), vec![0x6F, 0x6B]);
        assert_eq!(try_utf16_to_utf8(&[0x41u16, 0xDC00]).unwrap_err().position(), 1);
        assert_eq!(try_utf32_to_utf8(&[0x110000u32]).unwrap_err().position(), 0);
        assert!(try_utf8_to_utf32(b"\xED\xA0\x80").is_err());
        assert!(try_utf16_to_utf32(&[0xD83Du16, 0xDE00]).is_ok());
        assert!(try_utf32_to_utf16(&[0x1F600u32]).is_ok());
    }

    #[test]
    fn test_utf16_compare_is_code_point_order() {
        let bmp_high: Vec<u16> = "\u{FFFF}".encode_utf16().collect();
        let supplementary: Vec<u16> = "\u{10000}".encode_utf16().collect();
        assert!(bmp_high > supplementary, "raw unit order");
        assert_eq!(compare_utf16(&bmp_high, &supplementary), Ordering::Less);
        assert_eq!(
            compare_utf8("\u{FFFF}".as_bytes(), "\u{10000}".as_bytes()),
            Ordering::Less
        );
    }

    #[test]
    fn test_validation() {
        assert!(validate_utf8("valid ✓".as_bytes()).is_ok());
        assert!(validate_utf16(&[0xD83Du16]).is_err());
        assert!(validate_utf32(&[0xDFFFu32]).is_err());
        assert!(validate_utf32(&[0x10FFFFu32]).is_ok());
    }
}
