//! Delimiter splitting with literal and bracket awareness
//!
//! [`scan`] returns a lazy [`Scan`] iterator over sub-fragments of a source
//! fragment, split on a delimiter. A delimiter occurrence only counts as a
//! split point when every bracket counter is zero and no string or regex
//! literal is open, so `scan("a,(b,c),d", ",")` yields `a`, `(b,c)`, `d`.
//!
//! The iterator is single-pass and restartable only by calling [`scan`]
//! again; it borrows the input and never allocates per fragment.

use super::{counter_index, matching_bracket, OP_CHARS, QUOTE_CHARS};
use std::str::CharIndices;

/// Literal state while scanning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    /// Not inside any literal
    None,
    /// Inside a single-quoted string
    Single,
    /// Inside a double-quoted string
    Double,
    /// Inside a regex literal
    Regex,
}

impl Quote {
    fn from_opener(ch: char) -> Quote {
        match ch {
            '\'' => Quote::Single,
            '"' => Quote::Double,
            _ => Quote::Regex,
        }
    }

    /// The character that opened (and will close) this literal
    fn opener(self) -> Option<char> {
        match self {
            Quote::None => None,
            Quote::Single => Some('\''),
            Quote::Double => Some('"'),
            Quote::Regex => Some('/'),
        }
    }
}

/// Split a fragment on `delim`, respecting literals and bracket nesting.
///
/// With `max_split = Some(n)`, at most `n` splits are produced and the
/// remainder is emitted unsplit as the final item. An empty fragment yields
/// an empty sequence; a trailing delimiter yields a trailing empty fragment.
pub fn scan<'a>(expr: &'a str, delim: &str, max_split: Option<usize>) -> Scan<'a> {
    Scan {
        expr,
        chars: expr.char_indices(),
        delim: delim.chars().collect(),
        max_split,
        start: 0,
        match_start: 0,
        pos: 0,
        splits: 0,
        counters: [0; 3],
        quote: Quote::None,
        in_char_class: false,
        escaping: false,
        // a fragment starts at operand position, so a leading `/` is a regex
        after_op: true,
        emit_rest: max_split == Some(0),
        finished: expr.is_empty(),
    }
}

/// Lazy iterator produced by [`scan`]
pub struct Scan<'a> {
    expr: &'a str,
    chars: CharIndices<'a>,
    delim: Vec<char>,
    max_split: Option<usize>,
    /// Byte offset where the current fragment begins
    start: usize,
    /// Byte offset where the current partial delimiter match began
    match_start: usize,
    /// Cursor into `delim` for multi-character delimiters
    pos: usize,
    splits: usize,
    /// Nesting depth per closing-bracket kind; signed so stray closers
    /// still block splits
    counters: [i32; 3],
    quote: Quote,
    /// Only meaningful while `quote == Quote::Regex`
    in_char_class: bool,
    escaping: bool,
    after_op: bool,
    emit_rest: bool,
    finished: bool,
}

impl<'a> Iterator for Scan<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.finished {
            return None;
        }
        if self.emit_rest {
            self.finished = true;
            return Some(&self.expr[self.start..]);
        }

        while let Some((idx, ch)) = self.chars.next() {
            let mut bracket = false;
            if self.quote == Quote::None {
                if let Some(close) = matching_bracket(ch) {
                    if let Some(slot) = counter_index(close) {
                        self.counters[slot] += 1;
                    }
                    bracket = true;
                } else if let Some(slot) = counter_index(ch) {
                    self.counters[slot] -= 1;
                    bracket = true;
                }
            }

            if !bracket && !self.escaping {
                if QUOTE_CHARS.contains(&ch)
                    && (self.quote == Quote::None || self.quote.opener() == Some(ch))
                {
                    // `/` only opens a regex at operand position; after an
                    // identifier it is the division operator
                    if self.quote != Quote::None || self.after_op || ch != '/' {
                        self.quote = if self.quote != Quote::None && !self.in_char_class {
                            Quote::None
                        } else {
                            Quote::from_opener(ch)
                        };
                    }
                } else if self.quote == Quote::Regex && (ch == '[' || ch == ']') {
                    // a `]` closing a character class must not end the literal
                    self.in_char_class = ch == '[';
                }
            }

            self.escaping = !self.escaping && self.quote != Quote::None && ch == '\\';
            self.after_op = (self.quote == Quote::None && OP_CHARS.contains(ch))
                || (ch.is_whitespace() && self.after_op);

            if self.delim.get(self.pos) != Some(&ch)
                || self.counters.iter().any(|&c| c != 0)
                || self.quote != Quote::None
            {
                self.pos = 0;
                continue;
            }
            if self.pos == 0 {
                self.match_start = idx;
            }
            if self.pos + 1 < self.delim.len() {
                self.pos += 1;
                continue;
            }

            let piece = &self.expr[self.start..self.match_start];
            self.start = idx + ch.len_utf8();
            self.pos = 0;
            self.splits += 1;
            if self.max_split.is_some_and(|max| self.splits >= max) {
                self.emit_rest = true;
            }
            return Some(piece);
        }

        self.finished = true;
        Some(&self.expr[self.start..])
    }
}

#[cfg(test)]
mod tests {
    use super::scan;

    fn parts(expr: &str, delim: &str) -> Vec<String> {
        scan(expr, delim, None).map(str::to_string).collect()
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(scan("", ",", None).count(), 0);
    }

    #[test]
    fn trailing_delimiter_yields_empty_fragment() {
        assert_eq!(parts("a,", ","), vec!["a", ""]);
    }

    #[test]
    fn partial_delimiter_match_resets() {
        // the cursor resets without re-checking the offending character
        assert_eq!(parts("a&&&b", "&&"), vec!["a", "&b"]);
    }

    #[test]
    fn escaped_quote_does_not_close_literal() {
        assert_eq!(parts(r#""a\",b",c"#, ","), vec![r#""a\",b""#, "c"]);
    }
}
