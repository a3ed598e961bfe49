//! Delimiter-aware source scanning
//!
//! This module decomposes raw source text into evaluable sub-expressions
//! without a grammar or an external parser:
//! - [`split`]: the lazy [`split::Scan`] iterator behind [`scan`], which
//!   splits on a delimiter while tracking literal boundaries and bracket
//!   depth.
//! - [`block`]: [`block::extract_block`], which peels a balanced
//!   bracketed block off the front of a fragment.
//! - [`flags`]: [`flags::decode_regex_flags`], which consumes the flag run
//!   of a regex literal into a [`flags::RegexFlags`] bitmask.
//!
//! # Lexical subtleties
//!
//! The scanner never yields a split point inside a string or regex literal,
//! inside a regex character class, or inside unbalanced brackets. A forward
//! slash opens a regex literal only at operand position (tracked via an
//! after-operator flag); after an identifier it is the division operator.

pub mod block;
pub mod flags;
pub mod split;

pub use block::extract_block;
pub use flags::{decode_regex_flags, RegexFlags};
pub use split::{scan, Scan};

/// Characters that may open a string or regex literal
pub(crate) const QUOTE_CHARS: &[char] = &['\'', '"', '/'];

/// Characters after which a `/` opens a regex literal rather than dividing
pub(crate) const OP_CHARS: &str = "+-*/%&|^=<>!,;{}:";

/// Matching closer for an opening bracket, if `open` is one
pub(crate) fn matching_bracket(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '{' => Some('}'),
        '[' => Some(']'),
        _ => None,
    }
}

/// Depth-counter slot for a closing bracket, if `close` is one
pub(crate) fn counter_index(close: char) -> Option<usize> {
    match close {
        ')' => Some(0),
        '}' => Some(1),
        ']' => Some(2),
        _ => None,
    }
}
