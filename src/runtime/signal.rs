//! Non-local control-flow signals
//!
//! `break`, `continue`, and `throw` do not produce values; they jump. The
//! runtime models the three jumps as a [`Signal`] enum carried up ordinary
//! `Result` call stacks instead of host panics, so a statement-level
//! interpreter can match on the kind explicitly: break/continue are consumed
//! at loop boundaries, thrown values at handler boundaries. A signal that
//! escapes every handler surfaces as
//! [`InterpreterError::UncaughtSignal`](crate::errors::InterpreterError::UncaughtSignal).

use super::value::Value;
use std::fmt;

/// A non-local control-flow marker
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// `break` out of the nearest enclosing loop
    Break,
    /// `continue` with the next iteration of the nearest enclosing loop
    Continue,
    /// `throw`, carrying the thrown value
    Throw(Value),
}

impl Signal {
    /// The thrown payload, if any; break/continue carry none
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Signal::Throw(value) => Some(value),
            Signal::Break | Signal::Continue => None,
        }
    }
}

impl fmt::Display for Signal {
    /// Rendered as the diagnostic a top-level caller sees when the signal
    /// goes uncaught
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Break => write!(f, "Invalid break"),
            Signal::Continue => write!(f, "Invalid continue"),
            Signal::Throw(value) => write!(f, "Uncaught exception {}", value),
        }
    }
}
