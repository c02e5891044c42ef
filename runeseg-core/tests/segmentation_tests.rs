//! Grapheme and word segmentation over whole texts

use proptest::prelude::*;
use runeseg_core::segment::{self, GraphemeSegments, WordSegments};
use runeseg_core::{convert, Utf16, Utf8};

const SAMPLE: &str = "The quick (\"brown\") fox can't jump 32.3 feet, right?";

#[test]
fn test_sentence_word_boundaries() {
    let segments: Vec<&str> = segment::word_segments(SAMPLE).map(|(s, _)| s).collect();
    assert_eq!(
        segments,
        vec![
            "The", " ", "quick", " ", "(", "\"", "brown", "\"", ")", " ", "fox", " ", "can't",
            " ", "jump", " ", "32.3", " ", "feet", ",", " ", "right", "?"
        ]
    );
    let words: Vec<&str> = segment::words(SAMPLE).collect();
    assert_eq!(
        words,
        vec!["The", "quick", "brown", "fox", "can't", "jump", "32.3", "feet", "right"]
    );
}

#[test]
fn test_emoji_sequences_stay_whole() {
    let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
    let flag = "\u{1F1FA}\u{1F1F8}";
    let text = format!("{family}{flag}x");
    let clusters: Vec<&str> = segment::graphemes(&text).collect();
    assert_eq!(clusters, vec![family, flag, "x"]);
}

#[test]
fn test_hangul_syllables() {
    // L V T jamo followed by a precomposed LV syllable
    let text = "\u{1100}\u{1161}\u{11A8}\u{AC00}";
    let clusters: Vec<&str> = segment::graphemes(text).collect();
    assert_eq!(clusters, vec!["\u{1100}\u{1161}\u{11A8}", "\u{AC00}"]);
}

#[test]
fn test_utf16_and_utf8_agree() {
    let text = "e\u{301}\u{1F1EF}\u{1F1F5}\r\nab";
    let utf16: Vec<u16> = text.encode_utf16().collect();

    let from8: Vec<String> = segment::graphemes(text).map(str::to_owned).collect();
    let from16: Vec<String> = segment::graphemes_utf16(&utf16)
        .map(|r| convert::utf16_to_string(&utf16[r]))
        .collect();
    assert_eq!(from8, from16);
}

#[test]
fn test_ill_formed_units_become_their_own_clusters() {
    let bytes = b"a\xFF\xC3\xA9";
    let ranges: Vec<_> = GraphemeSegments::<Utf8, u8>::new(bytes).collect();
    assert_eq!(ranges, vec![0..1, 1..2, 2..4]);
}

#[test]
fn test_words_only_in_utf16() {
    let utf16: Vec<u16> = "hi, there".encode_utf16().collect();
    let words: Vec<_> = WordSegments::<Utf16, u16>::new(&utf16).words_only().collect();
    assert_eq!(words, vec![0..2, 4..9]);
}

proptest! {
    #[test]
    fn graphemes_cover_the_input(text in "\\PC{0,24}") {
        let joined: String = segment::graphemes(&text).collect();
        prop_assert_eq!(&joined, &text);
        prop_assert!(segment::grapheme_count(&text) <= text.chars().count());
    }

    #[test]
    fn word_segments_cover_the_input(text in "\\PC{0,24}") {
        let joined: String = segment::word_segments(&text).map(|(s, _)| s).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn segment_ranges_are_contiguous(bytes in proptest::collection::vec(any::<u8>(), 0..32)) {
        let mut expected_start = 0;
        for range in GraphemeSegments::<Utf8, u8>::new(&bytes) {
            prop_assert_eq!(range.start, expected_start);
            prop_assert!(range.end > range.start);
            expected_start = range.end;
        }
        prop_assert_eq!(expected_start, bytes.len());
    }

    #[test]
    fn words_are_substrings(text in "[a-z0-9 ,.']{0,32}") {
        let mut cursor = 0;
        for word in segment::words(&text) {
            let found = text[cursor..].find(word);
            prop_assert!(found.is_some());
            cursor += found.unwrap_or_default() + word.len();
            prop_assert!(!word.trim().is_empty());
        }
    }
}
