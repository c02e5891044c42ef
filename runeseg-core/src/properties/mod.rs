//! Character property lookup
//!
//! Break properties are served from a two-stage table: the high bits of a
//! code point select a block index in stage 1, and the block in stage 2
//! holds one property code per code point. Identical blocks are shared, which
//! keeps the whole code space in a few tens of kilobytes.
//!
//! The default tables are built once, on first use, and are read-only
//! afterwards, so any number of traversals may query them concurrently.

mod tables;

use std::collections::HashMap;
use std::sync::OnceLock;

/// Anything that maps a code point to a small property code
///
/// Code 0 is the table default and means "no classification".
pub trait PropertyLookup {
    /// Property code of `cp`; code points outside the table map to 0
    fn lookup(&self, cp: u32) -> u8;
}

impl<F: Fn(u32) -> u8> PropertyLookup for F {
    fn lookup(&self, cp: u32) -> u8 {
        self(cp)
    }
}

const SHIFT: u32 = 7;
const BLOCK: usize = 1 << SHIFT;
const MASK: u32 = (1 << SHIFT) - 1;
const CODE_SPACE: u32 = 0x11_0000;

/// Two-stage lookup table covering U+0000..=U+10FFFF
#[derive(Debug, Clone)]
pub struct TwoStageTable {
    stage1: Vec<u16>,
    stage2: Vec<u8>,
}

impl TwoStageTable {
    /// Build a table from sorted, non-overlapping inclusive ranges
    ///
    /// Code points not covered by any range get code 0.
    pub fn from_ranges<P: Copy + Into<u8>>(ranges: &[(u32, u32, P)]) -> Self {
        debug_assert!(
            ranges.windows(2).all(|w| w[0].1 < w[1].0),
            "property ranges must be sorted and disjoint"
        );

        let block_count = (CODE_SPACE >> SHIFT) as usize;
        let mut stage1 = Vec::with_capacity(block_count);
        let mut stage2: Vec<u8> = Vec::new();
        let mut seen: HashMap<[u8; BLOCK], u16> = HashMap::new();
        let mut next_range = 0;

        for block_index in 0..block_count {
            let base = (block_index as u32) << SHIFT;
            let last = base + MASK;
            let mut block = [0u8; BLOCK];

            while next_range < ranges.len() && ranges[next_range].1 < base {
                next_range += 1;
            }
            let mut i = next_range;
            while i < ranges.len() && ranges[i].0 <= last {
                let (lo, hi, value) = ranges[i];
                let code = value.into();
                for cp in lo.max(base)..=hi.min(last) {
                    block[(cp - base) as usize] = code;
                }
                i += 1;
            }

            let id = *seen.entry(block).or_insert_with(|| {
                let id = (stage2.len() / BLOCK) as u16;
                stage2.extend_from_slice(&block);
                id
            });
            stage1.push(id);
        }

        Self { stage1, stage2 }
    }

    /// Number of distinct blocks stored
    pub fn block_count(&self) -> usize {
        self.stage2.len() / BLOCK
    }
}

impl PropertyLookup for TwoStageTable {
    #[inline]
    fn lookup(&self, cp: u32) -> u8 {
        if cp >= CODE_SPACE {
            return 0;
        }
        let block = self.stage1[(cp >> SHIFT) as usize] as usize;
        self.stage2[(block << SHIFT) | (cp & MASK) as usize]
    }
}

macro_rules! property_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $code:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[repr(u8)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $code,)*
        }

        impl $name {
            /// Decode a raw property code; unknown codes map to `Other`
            #[inline]
            pub fn from_code(code: u8) -> Self {
                match code {
                    $($code => $name::$variant,)*
                    _ => $name::Other,
                }
            }

            /// Raw property code
            #[inline]
            pub fn code(self) -> u8 {
                self as u8
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value as u8
            }
        }
    };
}

property_enum! {
    /// Grapheme_Cluster_Break property values
    pub enum GraphemeBreak {
        /// Any
        #[default]
        Other = 0,
        /// Carriage return
        Cr = 1,
        /// Line feed
        Lf = 2,
        /// Controls, line/paragraph separators, most format characters
        Control = 3,
        /// Grapheme extenders and emoji modifiers
        Extend = 4,
        /// U+200D ZERO WIDTH JOINER
        Zwj = 5,
        /// Regional indicator symbols (flag halves)
        RegionalIndicator = 6,
        /// Prepended concatenation marks
        Prepend = 7,
        /// Spacing combining marks
        SpacingMark = 8,
        /// Hangul leading jamo
        L = 9,
        /// Hangul vowel jamo
        V = 10,
        /// Hangul trailing jamo
        T = 11,
        /// Hangul LV syllable
        Lv = 12,
        /// Hangul LVT syllable
        Lvt = 13,
        /// Extended_Pictographic
        ExtendedPictographic = 14,
    }
}

property_enum! {
    /// Word_Break property values, with Extended_Pictographic folded in
    pub enum WordBreak {
        /// Any
        #[default]
        Other = 0,
        /// Carriage return
        Cr = 1,
        /// Line feed
        Lf = 2,
        /// Other line breaking characters
        Newline = 3,
        /// Combining marks and other extenders
        Extend = 4,
        /// U+200D ZERO WIDTH JOINER
        Zwj = 5,
        /// Regional indicator symbols
        RegionalIndicator = 6,
        /// Format characters
        Format = 7,
        /// Katakana
        Katakana = 8,
        /// Hebrew letters
        HebrewLetter = 9,
        /// Alphabetic letters
        ALetter = 10,
        /// U+0027 APOSTROPHE
        SingleQuote = 11,
        /// U+0022 QUOTATION MARK
        DoubleQuote = 12,
        /// Full stop and similar
        MidNumLet = 13,
        /// Colon, middle dot and similar
        MidLetter = 14,
        /// Comma, semicolon and similar
        MidNum = 15,
        /// Digits
        Numeric = 16,
        /// Connector punctuation
        ExtendNumLet = 17,
        /// Word-separating spaces
        WSegSpace = 18,
        /// Extended_Pictographic
        ExtendedPictographic = 19,
    }
}

impl WordBreak {
    /// ALetter or Hebrew_Letter
    #[inline]
    pub fn is_ah_letter(self) -> bool {
        matches!(self, WordBreak::ALetter | WordBreak::HebrewLetter)
    }

    /// MidNumLet or Single_Quote
    #[inline]
    pub fn is_mid_num_let_q(self) -> bool {
        matches!(self, WordBreak::MidNumLet | WordBreak::SingleQuote)
    }

    /// Extend, Format or ZWJ: transparent to most word rules
    #[inline]
    pub fn is_ignorable(self) -> bool {
        matches!(self, WordBreak::Extend | WordBreak::Format | WordBreak::Zwj)
    }

    /// CR, LF or Newline
    #[inline]
    pub fn is_newline(self) -> bool {
        matches!(self, WordBreak::Cr | WordBreak::Lf | WordBreak::Newline)
    }
}

static GRAPHEME_TABLE: OnceLock<TwoStageTable> = OnceLock::new();
static WORD_TABLE: OnceLock<TwoStageTable> = OnceLock::new();

/// Shared grapheme break table
pub fn grapheme_table() -> &'static TwoStageTable {
    GRAPHEME_TABLE.get_or_init(|| TwoStageTable::from_ranges(tables::GRAPHEME_BREAK_RANGES))
}

/// Shared word break table
pub fn word_table() -> &'static TwoStageTable {
    WORD_TABLE.get_or_init(|| TwoStageTable::from_ranges(tables::WORD_BREAK_RANGES))
}

/// Grapheme_Cluster_Break of `cp`
#[inline]
pub fn grapheme_break(cp: u32) -> GraphemeBreak {
    GraphemeBreak::from_code(grapheme_table().lookup(cp))
}

/// Word_Break of `cp`
#[inline]
pub fn word_break(cp: u32) -> WordBreak {
    WordBreak::from_code(word_table().lookup(cp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_from_ranges() {
        let table = TwoStageTable::from_ranges(&[(0x41u32, 0x5A, 3u8), (0x1F600, 0x1F64F, 9u8)]);
        assert_eq!(table.lookup(0x40), 0);
        assert_eq!(table.lookup(0x41), 3);
        assert_eq!(table.lookup(0x5A), 3);
        assert_eq!(table.lookup(0x5B), 0);
        assert_eq!(table.lookup(0x1F610), 9);
        assert_eq!(table.lookup(0x10FFFF), 0);
        assert_eq!(table.lookup(0xFFFF_FFFF), 0);
        // all-zero blocks collapse into one, plus the two populated blocks
        assert_eq!(table.block_count(), 3);
    }

    #[test]
    fn test_range_spanning_blocks() {
        let table = TwoStageTable::from_ranges(&[(0x70u32, 0x190, 1u8)]);
        assert_eq!(table.lookup(0x6F), 0);
        assert_eq!(table.lookup(0x70), 1);
        assert_eq!(table.lookup(0x100), 1);
        assert_eq!(table.lookup(0x190), 1);
        assert_eq!(table.lookup(0x191), 0);
    }

    #[test]
    fn test_closure_lookup() {
        let lookup = |cp: u32| -> u8 { if cp == 0x20 { 18 } else { 0 } };
        assert_eq!(lookup.lookup(0x20), 18);
        assert_eq!(lookup.lookup(0x21), 0);
    }

    #[test]
    fn test_grapheme_properties() {
        assert_eq!(grapheme_break('\r' as u32), GraphemeBreak::Cr);
        assert_eq!(grapheme_break('\n' as u32), GraphemeBreak::Lf);
        assert_eq!(grapheme_break(0x01), GraphemeBreak::Control);
        assert_eq!(grapheme_break('A' as u32), GraphemeBreak::Other);
        assert_eq!(grapheme_break(0x0301), GraphemeBreak::Extend);
        assert_eq!(grapheme_break(0x200D), GraphemeBreak::Zwj);
        assert_eq!(grapheme_break(0x1F1FA), GraphemeBreak::RegionalIndicator);
        assert_eq!(grapheme_break(0x0600), GraphemeBreak::Prepend);
        assert_eq!(grapheme_break(0x0903), GraphemeBreak::SpacingMark);
        assert_eq!(grapheme_break(0x1100), GraphemeBreak::L);
        assert_eq!(grapheme_break(0x1161), GraphemeBreak::V);
        assert_eq!(grapheme_break(0x11A8), GraphemeBreak::T);
        assert_eq!(grapheme_break(0xAC00), GraphemeBreak::Lv);
        assert_eq!(grapheme_break(0xAC01), GraphemeBreak::Lvt);
        assert_eq!(grapheme_break(0x1F600), GraphemeBreak::ExtendedPictographic);
        assert_eq!(grapheme_break(0x1F3FB), GraphemeBreak::Extend);
        assert_eq!(grapheme_break(0xFFFD), GraphemeBreak::Other);
    }

    #[test]
    fn test_word_properties() {
        assert_eq!(word_break('a' as u32), WordBreak::ALetter);
        assert_eq!(word_break('7' as u32), WordBreak::Numeric);
        assert_eq!(word_break('.' as u32), WordBreak::MidNumLet);
        assert_eq!(word_break(':' as u32), WordBreak::MidLetter);
        assert_eq!(word_break(',' as u32), WordBreak::MidNum);
        assert_eq!(word_break('\'' as u32), WordBreak::SingleQuote);
        assert_eq!(word_break('"' as u32), WordBreak::DoubleQuote);
        assert_eq!(word_break('_' as u32), WordBreak::ExtendNumLet);
        assert_eq!(word_break(' ' as u32), WordBreak::WSegSpace);
        assert_eq!(word_break(0x05D0), WordBreak::HebrewLetter);
        assert_eq!(word_break(0x30A2), WordBreak::Katakana);
        assert_eq!(word_break(0x4E2D), WordBreak::Other);
        assert_eq!(word_break(0x0301), WordBreak::Extend);
        assert_eq!(word_break(0x2028), WordBreak::Newline);
        assert_eq!(word_break(0x00AD), WordBreak::Format);
        assert_eq!(word_break(0x1F600), WordBreak::ExtendedPictographic);
    }

    #[test]
    fn test_from_code_round_trip() {
        for code in 0..=14u8 {
            assert_eq!(GraphemeBreak::from_code(code).code(), code);
        }
        for code in 0..=19u8 {
            assert_eq!(WordBreak::from_code(code).code(), code);
        }
        assert_eq!(GraphemeBreak::from_code(200), GraphemeBreak::Other);
    }
}
