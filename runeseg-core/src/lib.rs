//! Unicode encoding conversion and text segmentation
//!
//! This crate converts between UTF-8, UTF-16 and UTF-32 with one uniform
//! policy for ill-formed input, iterates code points in both directions, and
//! finds grapheme cluster and word boundaries with finite state machines
//! driven by Unicode break properties.
//!
//! # Architecture
//!
//! The crate is layered from the leaves up:
//! - **Properties**: two-stage lookup tables mapping a code point to its
//!   grapheme or word break class
//! - **Codec**: per-encoding decoders and encoders over any integer code unit
//!   storage, with [`DECODE_ERROR`] marking ill-formed subsequences
//! - **Iteration and conversion**: [`CodePoints`] and the [`convert`]
//!   functions, all sharing one decode loop
//! - **Boundary machines**: [`GraphemeBreakState`] and [`WordBreakState`]
//! - **Segmentation views**: lazy iterators composing the two
//!
//! Ill-formed input never fails in the default [`ErrorPolicy::Replace`] mode:
//! each maximal ill-formed subpart becomes exactly one U+FFFD. The
//! [`ErrorPolicy::Strict`] mode stops at the first one and reports its offset
//! in input code units.
//!
//! # Example
//!
//! ```rust
//! use runeseg_core::{convert, graphemes, words};
//!
//! let clusters: Vec<&str> = graphemes("A\u{301}B").collect();
//! assert_eq!(clusters, vec!["A\u{301}", "B"]);
//!
//! let found: Vec<&str> = words("Hello, world!").collect();
//! assert_eq!(found, vec!["Hello", "world"]);
//!
//! assert_eq!(convert::utf8_to_string(b"\xE0\xA0!"), "\u{FFFD}!");
//! assert_eq!(convert::validate_utf8(b"ok\xFF").unwrap_err().position(), 2);
//! ```

pub mod breaks;
pub mod codec;
pub mod convert;
pub mod error;
pub mod iter;
pub mod properties;
pub mod segment;
pub mod sink;

pub use breaks::{BoundaryMachine, GraphemeBreakState, WordBreakState};
pub use codec::{
    is_scalar, CodeUnit, Encoding, Utf16, Utf32, Utf8, DECODE_ERROR, REPLACEMENT_CHARACTER,
};
pub use convert::{ErrorPolicy, Stats};
pub use error::{ConversionError, Result};
pub use iter::{CodePointIndices, CodePoints, RawCodePoints};
pub use properties::{grapheme_break, word_break, GraphemeBreak, PropertyLookup, WordBreak};
pub use segment::{
    grapheme_count, grapheme_indices, graphemes, graphemes_utf16, word_segments,
    word_segments_utf16, words, GraphemeSegments, Segments, WordSegment, WordSegments,
};
pub use sink::{Counter, Discard, Sink};
