//! Grapheme cluster boundaries (UAX #29 rules GB3 to GB999)

use super::BoundaryMachine;
use crate::properties::{grapheme_break, GraphemeBreak};

/// Sub-state carried between code points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing seen yet
    Begin,
    /// Plain progress, no pending sequence
    Process,
    /// Extended_Pictographic, possibly followed by Extend*
    ExtPict,
    /// Extended_Pictographic Extend* ZWJ
    ExtPictZwj,
    /// An odd-length run of regional indicators
    RegionalIndicator,
    /// An even-length run of regional indicators
    RegionalIndicatorPair,
}

/// Grapheme cluster break detector
///
/// Tracks the previous code point's property and whether the text so far
/// ends inside an emoji ZWJ sequence or a regional indicator run.
#[derive(Debug, Clone)]
pub struct GraphemeBreakState {
    state: State,
    prev: GraphemeBreak,
}

impl GraphemeBreakState {
    /// A machine at start of text
    pub fn new() -> Self {
        Self {
            state: State::Begin,
            prev: GraphemeBreak::Other,
        }
    }

    /// Feed a pre-classified code point
    ///
    /// Lets callers drive the machine from their own property data.
    pub fn next_property(&mut self, next: GraphemeBreak) -> bool {
        let boundary = self.decide(next);
        self.state = self.transition(next);
        self.prev = next;
        boundary
    }

    /// First matching rule wins; the order is significant
    fn decide(&self, next: GraphemeBreak) -> bool {
        use GraphemeBreak::*;

        match (self.state, self.prev, next) {
            (State::Begin, _, _) => false,
            // GB3
            (_, Cr, Lf) => false,
            // GB4, GB5
            (_, Control | Cr | Lf, _) | (_, _, Control | Cr | Lf) => true,
            // GB6, GB7, GB8
            (_, L, L | V | Lv | Lvt) => false,
            (_, Lv | V, V | T) => false,
            (_, Lvt | T, T) => false,
            // GB9, GB9a, GB9b
            (_, _, Extend | Zwj | SpacingMark) | (_, Prepend, _) => false,
            // GB11
            (State::ExtPictZwj, _, ExtendedPictographic) => false,
            // GB12, GB13
            (State::RegionalIndicator, _, RegionalIndicator) => false,
            // GB999
            _ => true,
        }
    }

    fn transition(&self, next: GraphemeBreak) -> State {
        use GraphemeBreak::*;

        match (self.state, next) {
            (State::RegionalIndicator, RegionalIndicator) => State::RegionalIndicatorPair,
            (_, RegionalIndicator) => State::RegionalIndicator,
            (_, ExtendedPictographic) => State::ExtPict,
            (State::ExtPict, Extend) => State::ExtPict,
            (State::ExtPict, Zwj) => State::ExtPictZwj,
            _ => State::Process,
        }
    }
}

impl Default for GraphemeBreakState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundaryMachine for GraphemeBreakState {
    fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    fn is_boundary<I>(&mut self, c: char, _lookahead: I) -> bool
    where
        I: Iterator<Item = char>,
    {
        self.next_property(grapheme_break(c as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Boundary flags for each code point of `s` after the first
    fn breaks(s: &str) -> Vec<bool> {
        let mut machine = GraphemeBreakState::new();
        let flags: Vec<bool> = s
            .chars()
            .map(|c| machine.is_boundary(c, core::iter::empty()))
            .collect();
        assert!(!flags[0], "no boundary before start of text");
        flags[1..].to_vec()
    }

    #[test]
    fn test_crlf() {
        assert_eq!(breaks("\r\n"), vec![false]);
        assert_eq!(breaks("\n\r"), vec![true]);
        assert_eq!(breaks("a\r\nb"), vec![true, false, true]);
    }

    #[test]
    fn test_controls_break_both_sides() {
        assert_eq!(breaks("a\u{1}b"), vec![true, true]);
        // a control is not extended by a combining mark
        assert_eq!(breaks("\u{1}\u{301}"), vec![true]);
    }

    #[test]
    fn test_combining_mark() {
        assert_eq!(breaks("A\u{301}B"), vec![false, true]);
    }

    #[test]
    fn test_hangul_jamo() {
        // L V T forms one syllable
        assert_eq!(breaks("\u{1100}\u{1161}\u{11A8}"), vec![false, false]);
        // LV T, LVT T
        assert_eq!(breaks("\u{AC00}\u{11A8}"), vec![false]);
        assert_eq!(breaks("\u{AC01}\u{11A8}"), vec![false]);
        // LVT followed by V breaks
        assert_eq!(breaks("\u{AC01}\u{1161}"), vec![true]);
        assert_eq!(breaks("\u{AC00}\u{AC00}"), vec![true]);
    }

    #[test]
    fn test_prepend_and_spacing_mark() {
        assert_eq!(breaks("\u{600}a"), vec![false]);
        assert_eq!(breaks("\u{915}\u{903}"), vec![false]);
    }

    #[test]
    fn test_emoji_zwj_sequence() {
        // man ZWJ woman, with a skin tone modifier in between
        assert_eq!(
            breaks("\u{1F468}\u{1F3FB}\u{200D}\u{1F469}"),
            vec![false, false, false]
        );
        // ZWJ not preceded by a pictograph does not join
        assert_eq!(breaks("a\u{200D}\u{1F469}"), vec![false, true]);
    }

    #[test]
    fn test_regional_indicator_pairs() {
        let ri = "\u{1F1FA}\u{1F1F8}\u{1F1EF}\u{1F1F5}\u{1F1EB}";
        assert_eq!(breaks(ri), vec![false, true, false, true]);
    }

    #[test]
    fn test_regional_indicator_interrupted_by_extend() {
        assert_eq!(
            breaks("\u{1F1FA}\u{301}\u{1F1F8}"),
            vec![false, true]
        );
    }

    #[test]
    fn test_reset_restores_begin() {
        let mut machine = GraphemeBreakState::new();
        machine.next_property(GraphemeBreak::RegionalIndicator);
        machine.reset();
        assert!(!machine.next_property(GraphemeBreak::Control));
    }
}
