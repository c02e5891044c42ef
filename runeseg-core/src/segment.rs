//! Segmentation views
//!
//! A view walks the input once, feeding each decoded code point to a
//! [`BoundaryMachine`], and yields the code unit ranges between consecutive
//! boundaries. Views are lazy and forward-only; to start over, build a new
//! view over the same units.

use crate::breaks::{BoundaryMachine, GraphemeBreakState, WordBreakState};
use crate::codec::{to_char_lossy, CodeUnit, Encoding, Utf16, Utf8};
use crate::iter::CodePoints;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ops::Range;

/// Lazy sequence of segment ranges, in code units
#[derive(Debug)]
pub struct Segments<'a, E, U, M> {
    units: &'a [U],
    /// Start of the segment being built
    start: usize,
    /// End of the code units already fed to the machine
    pos: usize,
    machine: M,
    _encoding: PhantomData<E>,
}

impl<'a, E, U, M> Segments<'a, E, U, M>
where
    E: Encoding,
    U: CodeUnit,
    M: BoundaryMachine + Default,
{
    /// Segment all of `units` with a fresh machine
    pub fn new(units: &'a [U]) -> Self {
        Self::with_machine(units, M::default())
    }
}

impl<'a, E, U, M> Segments<'a, E, U, M>
where
    E: Encoding,
    U: CodeUnit,
    M: BoundaryMachine,
{
    /// Segment `units` with `machine`, which is reset first
    pub fn with_machine(units: &'a [U], mut machine: M) -> Self {
        machine.reset();
        Self {
            units,
            start: 0,
            pos: 0,
            machine,
            _encoding: PhantomData,
        }
    }

    /// The machine driving this view
    pub fn machine(&self) -> &M {
        &self.machine
    }

    /// The segmented code units
    pub fn units(&self) -> &'a [U] {
        self.units
    }
}

impl<E, U, M> Iterator for Segments<'_, E, U, M>
where
    E: Encoding,
    U: CodeUnit,
    M: BoundaryMachine,
{
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        let end = self.units.len();
        if self.start >= end {
            return None;
        }

        while self.pos < end {
            let at = self.pos;
            let c = to_char_lossy(E::decode_next(self.units, &mut self.pos));
            let lookahead = CodePoints::<E, U>::new(&self.units[self.pos..]);
            if self.machine.is_boundary(c, lookahead) && at > self.start {
                let segment = self.start..at;
                self.start = at;
                return Some(segment);
            }
        }

        let segment = self.start..end;
        self.start = end;
        Some(segment)
    }
}

impl<E, U, M> FusedIterator for Segments<'_, E, U, M>
where
    E: Encoding,
    U: CodeUnit,
    M: BoundaryMachine,
{
}

/// Grapheme cluster ranges
pub type GraphemeSegments<'a, E, U> = Segments<'a, E, U, GraphemeBreakState>;

/// One word segmentation result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSegment {
    /// Code unit range of the segment
    pub range: Range<usize>,
    /// Whether the segment holds a letter or digit
    pub word_like: bool,
}

/// Word segment ranges, each tagged with its word-likeness
#[derive(Debug)]
pub struct WordSegments<'a, E, U> {
    inner: Segments<'a, E, U, WordBreakState>,
}

impl<'a, E: Encoding, U: CodeUnit> WordSegments<'a, E, U> {
    /// Segment all of `units`
    pub fn new(units: &'a [U]) -> Self {
        Self {
            inner: Segments::new(units),
        }
    }

    /// Keep only word-like segments
    pub fn words_only(self) -> impl Iterator<Item = Range<usize>> + 'a
    where
        E: 'a,
        U: 'a,
    {
        self.filter(|segment| segment.word_like)
            .map(|segment| segment.range)
    }
}

impl<E: Encoding, U: CodeUnit> Iterator for WordSegments<'_, E, U> {
    type Item = WordSegment;

    fn next(&mut self) -> Option<WordSegment> {
        let range = self.inner.next()?;
        // Only the final segment ends at the end of input; every other one was
        // closed by a boundary the machine has already recorded.
        let machine = self.inner.machine();
        let word_like = if range.end == self.inner.units().len() {
            machine.pending_segment_is_word_like()
        } else {
            machine.last_segment_is_word_like()
        };
        Some(WordSegment { range, word_like })
    }
}

impl<E: Encoding, U: CodeUnit> FusedIterator for WordSegments<'_, E, U> {}

/// Grapheme clusters of `text`
pub fn graphemes(text: &str) -> impl Iterator<Item = &str> + '_ {
    GraphemeSegments::<Utf8, u8>::new(text.as_bytes()).map(move |r| &text[r])
}

/// Grapheme clusters of `text` with their byte offsets
pub fn grapheme_indices(text: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    GraphemeSegments::<Utf8, u8>::new(text.as_bytes()).map(move |r| (r.start, &text[r]))
}

/// Number of grapheme clusters in `text`
pub fn grapheme_count(text: &str) -> usize {
    GraphemeSegments::<Utf8, u8>::new(text.as_bytes()).count()
}

/// Word-like segments of `text`, skipping whitespace and punctuation
pub fn words(text: &str) -> impl Iterator<Item = &str> + '_ {
    WordSegments::<Utf8, u8>::new(text.as_bytes())
        .words_only()
        .map(move |r| &text[r])
}

/// Every word segment of `text` with its word-likeness
pub fn word_segments(text: &str) -> impl Iterator<Item = (&str, bool)> + '_ {
    WordSegments::<Utf8, u8>::new(text.as_bytes()).map(move |s| (&text[s.range], s.word_like))
}

/// Grapheme cluster ranges of UTF-16 `units`
pub fn graphemes_utf16(units: &[u16]) -> GraphemeSegments<'_, Utf16, u16> {
    Segments::new(units)
}

/// Word segments of UTF-16 `units`
pub fn word_segments_utf16(units: &[u16]) -> WordSegments<'_, Utf16, u16> {
    WordSegments::new(units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combining_acute() {
        let clusters: Vec<&str> = graphemes("A\u{301}B").collect();
        assert_eq!(clusters, vec!["A\u{301}", "B"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(graphemes("").count(), 0);
        assert_eq!(words("").count(), 0);
    }

    #[test]
    fn test_regional_indicator_grouping() {
        let two = "\u{1F1EF}\u{1F1F5}";
        assert_eq!(graphemes(two).collect::<Vec<_>>(), vec![two]);
        let three = "\u{1F1EF}\u{1F1F5}\u{1F1EB}";
        assert_eq!(
            graphemes(three).collect::<Vec<_>>(),
            vec!["\u{1F1EF}\u{1F1F5}", "\u{1F1EB}"]
        );
    }

    #[test]
    fn test_grapheme_indices() {
        let indices: Vec<(usize, &str)> = grapheme_indices("e\u{301}x").collect();
        assert_eq!(indices, vec![(0, "e\u{301}"), (3, "x")]);
    }

    #[test]
    fn test_words_skip_non_words() {
        let found: Vec<&str> = words("The quick (\"brown\") fox can't jump 32.3 feet, right?").collect();
        assert_eq!(
            found,
            vec!["The", "quick", "brown", "fox", "can't", "jump", "32.3", "feet", "right"]
        );
    }

    #[test]
    fn test_word_segments_flags() {
        let segments: Vec<(&str, bool)> = word_segments("hi, you").collect();
        assert_eq!(
            segments,
            vec![("hi", true), (",", false), (" ", false), ("you", true)]
        );
    }

    #[test]
    fn test_utf16_graphemes() {
        let units: Vec<u16> = "a\u{1F468}\u{200D}\u{1F469}b".encode_utf16().collect();
        let ranges: Vec<Range<usize>> = graphemes_utf16(&units).collect();
        assert_eq!(ranges, vec![0..1, 1..6, 6..7]);
    }

    #[test]
    fn test_ill_formed_units_segment_as_replacement() {
        let ranges: Vec<Range<usize>> =
            GraphemeSegments::<Utf8, u8>::new(b"a\xFF\xFEb").collect();
        assert_eq!(ranges, vec![0..1, 1..2, 2..3, 3..4]);
    }

    #[test]
    fn test_ranges_cover_input() {
        let text = "Ünïcödé\r\n👍🏽 text";
        let ranges: Vec<Range<usize>> =
            GraphemeSegments::<Utf8, u8>::new(text.as_bytes()).collect();
        assert_eq!(ranges.first().map(|r| r.start), Some(0));
        assert_eq!(ranges.last().map(|r| r.end), Some(text.len()));
        assert!(ranges.windows(2).all(|w| w[0].end == w[1].start));
    }
}
