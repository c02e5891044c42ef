//! Boundary state machines
//!
//! A machine is fed one code point at a time and answers whether a boundary
//! falls immediately before it. It keeps only what the rules need to look
//! back at, so one machine belongs to exactly one traversal and is reset (or
//! rebuilt) before a new one starts.

pub mod grapheme;
pub mod word;

pub use grapheme::GraphemeBreakState;
pub use word::WordBreakState;

/// Incremental boundary detector
pub trait BoundaryMachine {
    /// Return to the start-of-text state
    fn reset(&mut self);

    /// Feed the next code point and report whether a boundary precedes it
    ///
    /// `lookahead` yields the code points after `c`. Machines pull from it
    /// only when a rule needs to see past `c`; grapheme rules never do. The
    /// first code point of a traversal never has a boundary before it.
    fn is_boundary<I>(&mut self, c: char, lookahead: I) -> bool
    where
        I: Iterator<Item = char>;
}
