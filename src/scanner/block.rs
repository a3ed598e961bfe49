//! Balanced-block extraction
//!
//! [`extract_block`] peels a bracketed block off the front of a fragment:
//! given source whose first character is `(`, `{`, or `[`, it returns the
//! content strictly between that bracket and its matching closer, plus the
//! remainder after the closer. Both parts are trimmed of surrounding
//! whitespace.

use super::{matching_bracket, scan};
use crate::errors::InterpreterError;

/// Split `expr` at the closer matching its leading bracket.
///
/// Implemented as a single [`scan`] with the closing character as delimiter
/// and a maximum split count of one: the scanner's depth counters guarantee
/// the chosen closer is the one balancing the leading bracket.
///
/// Fails with a Syntax error when `expr` does not start with an opening
/// bracket or no matching closer is found.
pub fn extract_block(expr: &str) -> Result<(&str, &str), InterpreterError> {
    let open = expr
        .chars()
        .next()
        .ok_or_else(|| InterpreterError::syntax("Cannot extract block from empty source", expr))?;
    let close = matching_bracket(open).ok_or_else(|| {
        InterpreterError::syntax(format!("Expected an opening bracket, found {open}"), expr)
    })?;

    let delim = close.to_string();
    let mut parts = scan(expr, &delim, Some(1));
    match (parts.next(), parts.next()) {
        (Some(inner), Some(rest)) => Ok((inner[open.len_utf8()..].trim(), rest.trim())),
        _ => Err(InterpreterError::syntax(
            format!("No terminating paren {close}"),
            expr,
        )),
    }
}
