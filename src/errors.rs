//! Error types for the micro-interpreter core
//!
//! This module defines [`InterpreterError`], the single error taxonomy shared
//! by the scanner and the runtime. Every variant that relates to a piece of
//! source text carries that fragment, truncated with [`truncate_fragment`] so
//! long obfuscated expressions stay readable in diagnostics.
//!
//! Recoverable control flow (a loop's own `break`/`continue`) is *not* an
//! error: it travels as a [`Signal`] and only becomes
//! [`InterpreterError::UncaughtSignal`] when it escapes every handler.

use crate::runtime::signal::Signal;
use thiserror::Error;

/// Maximum number of leading characters kept when truncating a fragment
pub const FRAGMENT_HEAD: usize = 50;

/// Maximum number of trailing characters kept when truncating a fragment
pub const FRAGMENT_TAIL: usize = 50;

/// Errors surfaced by the scanner and the expression runtime
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpreterError {
    /// Unbalanced brackets, unterminated literals, malformed source
    #[error("{message} in: {fragment}")]
    Syntax { message: String, fragment: String },

    /// Operator token not present in the evaluation table
    #[error("unsupported operator {op} in: {fragment}")]
    UnsupportedOperator { op: String, fragment: String },

    /// Scope-chain lookup miss
    #[error("undefined variable {name}")]
    UnresolvedIdentifier { name: String },

    /// Operation outside the supported subset (e.g. scope deletion)
    #[error("{message} in: {fragment}")]
    UnsupportedOperation { message: String, fragment: String },

    /// Recursion or step budget exceeded
    #[error("{message} in: {fragment}")]
    ResourceExhausted { message: String, fragment: String },

    /// A break/continue/throw signal reached the top level unhandled
    #[error("{signal}")]
    UncaughtSignal { signal: Signal },
}

impl InterpreterError {
    /// Syntax error over the given fragment
    pub fn syntax(message: impl Into<String>, fragment: &str) -> Self {
        InterpreterError::Syntax {
            message: message.into(),
            fragment: truncate_fragment(fragment),
        }
    }

    /// Unknown operator token applied to the given fragment
    pub fn unsupported_operator(op: &str, fragment: &str) -> Self {
        InterpreterError::UnsupportedOperator {
            op: op.to_string(),
            fragment: truncate_fragment(fragment),
        }
    }

    /// Identifier not bound in any scope frame
    pub fn unresolved(name: &str) -> Self {
        InterpreterError::UnresolvedIdentifier {
            name: name.to_string(),
        }
    }

    /// Operation outside the supported subset
    pub fn unsupported_operation(message: impl Into<String>, fragment: &str) -> Self {
        InterpreterError::UnsupportedOperation {
            message: message.into(),
            fragment: truncate_fragment(fragment),
        }
    }

    /// Recursion/step budget exceeded while working on `fragment`
    pub fn exhausted(message: impl Into<String>, fragment: &str) -> Self {
        InterpreterError::ResourceExhausted {
            message: message.into(),
            fragment: truncate_fragment(fragment),
        }
    }

    /// A signal escaped all statement-level handlers
    pub fn uncaught(signal: Signal) -> Self {
        InterpreterError::UncaughtSignal { signal }
    }
}

/// Truncate a source fragment for diagnostics, keeping the head and tail.
///
/// Fragments no longer than `FRAGMENT_HEAD + FRAGMENT_TAIL` characters pass
/// through unchanged; longer ones keep the first `FRAGMENT_HEAD - 3`
/// characters, an ellipsis, and the last `FRAGMENT_TAIL` characters.
/// Operates on characters, never byte offsets.
pub fn truncate_fragment(fragment: &str) -> String {
    let chars: Vec<char> = fragment.chars().collect();
    if chars.len() <= FRAGMENT_HEAD + FRAGMENT_TAIL {
        return fragment.to_string();
    }
    let head: String = chars[..FRAGMENT_HEAD - 3].iter().collect();
    let tail: String = chars[chars.len() - FRAGMENT_TAIL..].iter().collect();
    format!("{}...{}", head, tail)
}
