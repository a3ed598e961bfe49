//! Expression runtime
//!
//! This module provides the evaluation half of the core:
//! - [`value`]: the tagged [`value::Value`] type and its coercion rules
//! - [`ops`]: the operator evaluation table
//! - [`scope`]: the chained-scope variable model
//! - [`signal`]: break/continue/throw as data
//!
//! # Execution Model
//!
//! Evaluation is synchronous, single-threaded, and recursive; nothing here
//! suspends, blocks, or performs I/O. Recursion is bounded defensively by a
//! [`RecursionBudget`] so deeply nested input surfaces a typed error instead
//! of exhausting the host stack.

pub mod ops;
pub mod scope;
pub mod signal;
pub mod value;

pub use ops::{evaluate_operator, evaluate_ternary, OPERATOR_TOKENS};
pub use scope::{ScopeChain, ScopeFrame};
pub use signal::Signal;
pub use value::Value;

use crate::errors::InterpreterError;

/// Default recursion limit for nested expression evaluation
pub const MAX_RECURSION: usize = 100;

/// A copyable countdown bounding recursive evaluation depth.
///
/// Callers pass the budget down the call tree, descending once per nested
/// evaluation; hitting zero is a resource-exhaustion error, not a stack
/// overflow. The current depth also drives tracer indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecursionBudget {
    limit: usize,
    remaining: usize,
}

impl RecursionBudget {
    /// A fresh budget allowing `limit` nested evaluations
    pub fn new(limit: usize) -> Self {
        RecursionBudget {
            limit,
            remaining: limit,
        }
    }

    /// One level deeper, or a `ResourceExhausted` error for `fragment`
    pub fn descend(self, fragment: &str) -> Result<Self, InterpreterError> {
        match self.remaining.checked_sub(1) {
            Some(remaining) => Ok(RecursionBudget {
                limit: self.limit,
                remaining,
            }),
            None => Err(InterpreterError::exhausted(
                "Recursion limit reached",
                fragment,
            )),
        }
    }

    /// How many levels have been descended so far
    pub fn depth(&self) -> usize {
        self.limit - self.remaining
    }
}

impl Default for RecursionBudget {
    fn default() -> Self {
        RecursionBudget::new(MAX_RECURSION)
    }
}
