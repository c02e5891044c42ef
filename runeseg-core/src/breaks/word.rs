//! Word boundaries (UAX #29 rules WB3 to WB999)
//!
//! Besides the boundary decision the machine keeps a word-like flag per
//! segment: a segment is word-like when it holds at least one letter or digit.
//! Consumers use it to drop whitespace and punctuation segments without a
//! second pass over the text.

use super::BoundaryMachine;
use crate::properties::{word_break, WordBreak};

/// Word break detector
#[derive(Debug, Clone)]
pub struct WordBreakState {
    /// Raw property of the previous code point, `None` at start of text
    last: Option<WordBreak>,
    /// Previous property with Extend/Format/ZWJ folded away (WB4)
    prev: WordBreak,
    /// The one before `prev`, same folding
    prev_prev: WordBreak,
    /// Length of the regional indicator run ending at `prev`
    ri_run: usize,
    /// Word-likeness of the segment still being built
    pending_word_like: bool,
    /// Word-likeness of the segment closed by the latest boundary
    last_word_like: bool,
}

impl WordBreakState {
    /// A machine at start of text
    pub fn new() -> Self {
        Self {
            last: None,
            prev: WordBreak::Other,
            prev_prev: WordBreak::Other,
            ri_run: 0,
            pending_word_like: false,
            last_word_like: false,
        }
    }

    /// Whether the segment closed by the most recent boundary is word-like
    pub fn last_segment_is_word_like(&self) -> bool {
        self.last_word_like
    }

    /// Whether the segment still in progress is word-like so far
    pub fn pending_segment_is_word_like(&self) -> bool {
        self.pending_word_like
    }

    fn decide<I>(&self, last: WordBreak, next: WordBreak, lookahead: &mut I) -> bool
    where
        I: Iterator<Item = char>,
    {
        use WordBreak::*;

        // WB3
        if last == Cr && next == Lf {
            return false;
        }
        // WB3a, WB3b
        if last.is_newline() || next.is_newline() {
            return true;
        }
        // WB3c
        if last == Zwj && next == ExtendedPictographic {
            return false;
        }
        // WB3d
        if last == WSegSpace && next == WSegSpace {
            return false;
        }
        // WB4
        if next.is_ignorable() {
            return false;
        }

        let (pp, p) = (self.prev_prev, self.prev);

        // WB5
        if p.is_ah_letter() && next.is_ah_letter() {
            return false;
        }
        // WB6
        if p.is_ah_letter()
            && (next == MidLetter || next.is_mid_num_let_q())
            && next_significant(lookahead).is_some_and(WordBreak::is_ah_letter)
        {
            return false;
        }
        // WB7
        if pp.is_ah_letter() && (p == MidLetter || p.is_mid_num_let_q()) && next.is_ah_letter() {
            return false;
        }
        // WB7a
        if p == HebrewLetter && next == SingleQuote {
            return false;
        }
        // WB7b
        if p == HebrewLetter
            && next == DoubleQuote
            && next_significant(lookahead) == Some(HebrewLetter)
        {
            return false;
        }
        // WB7c
        if pp == HebrewLetter && p == DoubleQuote && next == HebrewLetter {
            return false;
        }
        // WB8, WB9, WB10
        if (p == Numeric || p.is_ah_letter()) && (next == Numeric || next.is_ah_letter()) {
            return false;
        }
        // WB11
        if pp == Numeric && (p == MidNum || p.is_mid_num_let_q()) && next == Numeric {
            return false;
        }
        // WB12
        if p == Numeric
            && (next == MidNum || next.is_mid_num_let_q())
            && next_significant(lookahead) == Some(Numeric)
        {
            return false;
        }
        // WB13
        if p == Katakana && next == Katakana {
            return false;
        }
        // WB13a
        if matches!(p, ALetter | HebrewLetter | Numeric | Katakana | ExtendNumLet)
            && next == ExtendNumLet
        {
            return false;
        }
        // WB13b
        if p == ExtendNumLet && matches!(next, ALetter | HebrewLetter | Numeric | Katakana) {
            return false;
        }
        // WB15, WB16
        if p == RegionalIndicator && next == RegionalIndicator && self.ri_run % 2 == 1 {
            return false;
        }
        // WB999
        true
    }

    fn advance(&mut self, next: WordBreak, c: char, boundary: bool) {
        let word_like = is_word_like(next, c);
        if boundary {
            self.last_word_like = self.pending_word_like;
            self.pending_word_like = word_like;
        } else {
            self.pending_word_like |= word_like;
        }

        // X (Extend | Format | ZWJ)* folds into X unless X is sot or a newline
        let folds = next.is_ignorable() && self.last.is_some() && !self.prev.is_newline();
        if !folds {
            self.ri_run = match (self.prev, next) {
                (WordBreak::RegionalIndicator, WordBreak::RegionalIndicator) => self.ri_run + 1,
                (_, WordBreak::RegionalIndicator) => 1,
                _ => 0,
            };
            self.prev_prev = self.prev;
            self.prev = next;
        }
        self.last = Some(next);
    }
}

impl Default for WordBreakState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundaryMachine for WordBreakState {
    fn reset(&mut self) {
        *self = Self::new();
    }

    fn is_boundary<I>(&mut self, c: char, mut lookahead: I) -> bool
    where
        I: Iterator<Item = char>,
    {
        let next = word_break(c as u32);
        let boundary = match self.last {
            None => false,
            Some(last) => self.decide(last, next, &mut lookahead),
        };
        self.advance(next, c, boundary);
        boundary
    }
}

/// Property of the first code point ahead that WB4 does not skip
fn next_significant<I: Iterator<Item = char>>(lookahead: &mut I) -> Option<WordBreak> {
    lookahead
        .map(|c| word_break(c as u32))
        .find(|p| !p.is_ignorable())
}

/// Letters and digits make a segment word-like
///
/// Letters the word break property leaves as Other (ideographs, kana,
/// South-East Asian scripts) still count.
fn is_word_like(property: WordBreak, c: char) -> bool {
    match property {
        WordBreak::ALetter | WordBreak::HebrewLetter | WordBreak::Numeric | WordBreak::Katakana => {
            true
        }
        WordBreak::Other => c.is_alphabetic(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Split `s` into (segment, word_like) pairs by driving the machine directly
    fn split(s: &str) -> Vec<(String, bool)> {
        let chars: Vec<char> = s.chars().collect();
        let mut machine = WordBreakState::new();
        let mut out = Vec::new();
        let mut current = String::new();
        for (i, &c) in chars.iter().enumerate() {
            let ahead = chars[i + 1..].iter().copied();
            if machine.is_boundary(c, ahead) {
                out.push((std::mem::take(&mut current), machine.last_segment_is_word_like()));
            }
            current.push(c);
        }
        if !current.is_empty() {
            out.push((current, machine.pending_segment_is_word_like()));
        }
        out
    }

    fn texts(s: &str) -> Vec<String> {
        split(s).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_simple_sentence() {
        assert_eq!(
            split("Hello, world!"),
            vec![
                ("Hello".to_string(), true),
                (",".to_string(), false),
                (" ".to_string(), false),
                ("world".to_string(), true),
                ("!".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_mid_letter_lookahead() {
        assert_eq!(texts("can't stop"), vec!["can't", " ", "stop"]);
        assert_eq!(texts("e.g."), vec!["e.g", "."]);
        assert_eq!(texts("a:b"), vec!["a:b"]);
        assert_eq!(texts("a: b"), vec!["a", ":", " ", "b"]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(texts("3.14"), vec!["3.14"]);
        assert_eq!(texts("1,000,000"), vec!["1,000,000"]);
        assert_eq!(texts("1,"), vec!["1", ","]);
        assert_eq!(texts("R2D2"), vec!["R2D2"]);
    }

    #[test]
    fn test_extend_is_transparent() {
        assert_eq!(texts("cafe\u{301} au"), vec!["cafe\u{301}", " ", "au"]);
        assert_eq!(texts("a\u{301}'\u{301}b"), vec!["a\u{301}'\u{301}b"]);
    }

    #[test]
    fn test_newlines() {
        assert_eq!(texts("a\r\nb"), vec!["a", "\r\n", "b"]);
        assert_eq!(texts("\n\u{301}"), vec!["\n", "\u{301}"]);
    }

    #[test]
    fn test_whitespace_runs() {
        assert_eq!(texts("a   b"), vec!["a", "   ", "b"]);
    }

    #[test]
    fn test_hebrew_quotes() {
        assert_eq!(texts("\u{5D0}\"\u{5D1}"), vec!["\u{5D0}\"\u{5D1}"]);
        assert_eq!(texts("\u{5D0}'"), vec!["\u{5D0}'"]);
    }

    #[test]
    fn test_katakana_and_connectors() {
        assert_eq!(texts("カタカナ"), vec!["カタカナ"]);
        assert_eq!(texts("foo_bar baz"), vec!["foo_bar", " ", "baz"]);
    }

    #[test]
    fn test_regional_indicators() {
        let flags = "\u{1F1FA}\u{1F1F8}\u{1F1EF}\u{1F1F5}\u{1F1EB}";
        assert_eq!(
            texts(flags),
            vec!["\u{1F1FA}\u{1F1F8}", "\u{1F1EF}\u{1F1F5}", "\u{1F1EB}"]
        );
    }

    #[test]
    fn test_zwj_emoji() {
        assert_eq!(texts("\u{1F468}\u{200D}\u{1F469}"), vec!["\u{1F468}\u{200D}\u{1F469}"]);
    }

    #[test]
    fn test_ideographs_are_word_like() {
        let segments = split("中文");
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(|(_, word_like)| *word_like));
    }

    #[test]
    fn test_punctuation_only_is_not_word_like() {
        assert_eq!(split("..."), vec![(".".to_string(), false), (".".to_string(), false), (".".to_string(), false)]);
    }
}
