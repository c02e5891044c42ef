//! Code point iteration over UTF-8, UTF-16 or UTF-32 code units
//!
//! [`CodePoints`] walks a slice of code units from both ends, substituting
//! U+FFFD for ill-formed subsequences. Forward and backward traversal always
//! agree on the number and placement of replacements.

use crate::codec::{to_char_lossy, CodeUnit, Encoding, Utf16, Utf32, Utf8, DECODE_ERROR};
use crate::error::ConversionError;
use core::iter::FusedIterator;
use core::marker::PhantomData;

/// Double-ended iterator over the code points of a code unit slice
#[derive(Debug)]
pub struct CodePoints<'a, E, U> {
    units: &'a [U],
    front: usize,
    back: usize,
    _encoding: PhantomData<E>,
}

impl<'a, E: Encoding, U: CodeUnit> CodePoints<'a, E, U> {
    /// Iterate over all of `units`
    pub fn new(units: &'a [U]) -> Self {
        Self {
            units,
            front: 0,
            back: units.len(),
            _encoding: PhantomData,
        }
    }

    /// Offset of the forward cursor, in code units
    pub fn offset(&self) -> usize {
        self.front
    }

    /// Offset of the backward cursor, in code units
    pub fn back_offset(&self) -> usize {
        self.back
    }

    /// The code units not yet consumed from either end
    pub fn as_units(&self) -> &'a [U] {
        &self.units[self.front..self.back]
    }

    #[inline]
    fn next_raw(&mut self) -> Option<u32> {
        if self.front >= self.back {
            return None;
        }
        Some(E::decode_next(&self.units[..self.back], &mut self.front))
    }

    #[inline]
    fn next_back_raw(&mut self) -> Option<u32> {
        if self.front >= self.back {
            return None;
        }
        Some(E::decode_prev(self.units, self.front, &mut self.back))
    }
}

// Manual impl: derive would demand `E: Clone` and `U: Clone` bounds on the markers.
impl<E, U> Clone for CodePoints<'_, E, U> {
    fn clone(&self) -> Self {
        Self {
            units: self.units,
            front: self.front,
            back: self.back,
            _encoding: PhantomData,
        }
    }
}

impl<E: Encoding, U: CodeUnit> Iterator for CodePoints<'_, E, U> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        self.next_raw().map(to_char_lossy)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining.div_ceil(E::MAX_UNITS), Some(remaining))
    }
}

impl<E: Encoding, U: CodeUnit> DoubleEndedIterator for CodePoints<'_, E, U> {
    #[inline]
    fn next_back(&mut self) -> Option<char> {
        self.next_back_raw().map(to_char_lossy)
    }
}

impl<E: Encoding, U: CodeUnit> FusedIterator for CodePoints<'_, E, U> {}

/// Like [`CodePoints`], also yielding the offset where each code point starts
#[derive(Debug)]
pub struct CodePointIndices<'a, E, U> {
    inner: CodePoints<'a, E, U>,
}

impl<'a, E: Encoding, U: CodeUnit> CodePointIndices<'a, E, U> {
    /// Iterate over all of `units`
    pub fn new(units: &'a [U]) -> Self {
        Self {
            inner: CodePoints::new(units),
        }
    }
}

impl<E, U> Clone for CodePointIndices<'_, E, U> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<E: Encoding, U: CodeUnit> Iterator for CodePointIndices<'_, E, U> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<(usize, char)> {
        let at = self.inner.front;
        self.inner.next().map(|c| (at, c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E: Encoding, U: CodeUnit> DoubleEndedIterator for CodePointIndices<'_, E, U> {
    fn next_back(&mut self) -> Option<(usize, char)> {
        self.inner.next_back().map(|c| (self.inner.back, c))
    }
}

impl<E: Encoding, U: CodeUnit> FusedIterator for CodePointIndices<'_, E, U> {}

/// Strict iterator: ill-formed subsequences come out as errors
///
/// Each error carries the offset where the ill-formed subsequence starts.
/// Iteration may continue past an error.
#[derive(Debug)]
pub struct RawCodePoints<'a, E, U> {
    inner: CodePoints<'a, E, U>,
}

impl<'a, E: Encoding, U: CodeUnit> RawCodePoints<'a, E, U> {
    /// Iterate over all of `units`
    pub fn new(units: &'a [U]) -> Self {
        Self {
            inner: CodePoints::new(units),
        }
    }
}

impl<E: Encoding, U: CodeUnit> Iterator for RawCodePoints<'_, E, U> {
    type Item = Result<char, ConversionError>;

    fn next(&mut self) -> Option<Self::Item> {
        let at = self.inner.front;
        self.inner.next_raw().map(|cp| checked(cp, at))
    }
}

impl<E: Encoding, U: CodeUnit> DoubleEndedIterator for RawCodePoints<'_, E, U> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let cp = self.inner.next_back_raw()?;
        Some(checked(cp, self.inner.back))
    }
}

#[inline]
fn checked(cp: u32, at: usize) -> Result<char, ConversionError> {
    if cp == DECODE_ERROR {
        return Err(ConversionError::new(at));
    }
    char::from_u32(cp).ok_or(ConversionError::new(at))
}

/// Code points of UTF-8 units
pub fn utf8<U: CodeUnit>(units: &[U]) -> CodePoints<'_, Utf8, U> {
    CodePoints::new(units)
}

/// Code points of UTF-16 units
pub fn utf16<U: CodeUnit>(units: &[U]) -> CodePoints<'_, Utf16, U> {
    CodePoints::new(units)
}

/// Code points of UTF-32 units
pub fn utf32<U: CodeUnit>(units: &[U]) -> CodePoints<'_, Utf32, U> {
    CodePoints::new(units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_and_backward() {
        let text = "aé😀";
        let forward: String = utf8(text.as_bytes()).collect();
        assert_eq!(forward, text);
        let backward: String = utf8(text.as_bytes()).rev().collect();
        assert_eq!(backward, "😀éa");
    }

    #[test]
    fn test_meet_in_the_middle() {
        let units: Vec<u16> = "ab😀cd".encode_utf16().collect();
        let mut it = utf16(&units);
        assert_eq!(it.next(), Some('a'));
        assert_eq!(it.next_back(), Some('d'));
        assert_eq!(it.next_back(), Some('c'));
        assert_eq!(it.as_units(), &units[1..4]);
        assert_eq!(it.next(), Some('b'));
        assert_eq!(it.next(), Some('😀'));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_replacement_in_both_directions() {
        let bytes = b"a\xE0\xA0b\x80";
        let forward: Vec<char> = utf8(bytes).collect();
        let mut backward: Vec<char> = utf8(bytes).rev().collect();
        backward.reverse();
        assert_eq!(forward, vec!['a', '\u{FFFD}', 'b', '\u{FFFD}']);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_indices() {
        let bytes = "aé😀".as_bytes();
        let idx: Vec<(usize, char)> = CodePointIndices::<Utf8, u8>::new(bytes).collect();
        assert_eq!(idx, vec![(0, 'a'), (1, 'é'), (3, '😀')]);
        let rev: Vec<(usize, char)> = CodePointIndices::<Utf8, u8>::new(bytes).rev().collect();
        assert_eq!(rev, vec![(3, '😀'), (1, 'é'), (0, 'a')]);
    }

    #[test]
    fn test_raw_reports_offsets() {
        let items: Vec<_> = RawCodePoints::<Utf8, u8>::new(b"a\xFFb").collect();
        assert_eq!(items[0], Ok('a'));
        assert_eq!(items[1], Err(ConversionError::new(1)));
        assert_eq!(items[2], Ok('b'));
    }

    #[test]
    fn test_size_hint_bounds() {
        let it = utf8("abcd".as_bytes());
        assert_eq!(it.size_hint(), (1, Some(4)));
    }
}
