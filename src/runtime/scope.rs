//! Chained-scope variable resolution
//!
//! This module provides [`ScopeChain`], an ordered stack of binding frames
//! with lexically-correct resolution across nested calls:
//! - reads search innermost-to-outermost and fail on a miss;
//! - writes update the nearest enclosing frame that already defines the
//!   name, or create the binding in the innermost frame;
//! - deletion is not part of the supported subset and always fails.
//!
//! Frame push/pop is caller-managed at call/block entry and exit; the chain
//! itself holds no control-flow logic. Each evaluation owns its chain
//! exclusively — nothing here is shared or global.

use super::value::Value;
use crate::errors::InterpreterError;
use rustc_hash::FxHashMap;

/// A single frame of name → value bindings
pub type ScopeFrame = FxHashMap<String, Value>;

/// An ordered stack of scope frames; the last frame is the innermost
#[derive(Debug, Clone, Default)]
pub struct ScopeChain {
    frames: Vec<ScopeFrame>,
}

impl ScopeChain {
    /// A chain with a single empty frame
    pub fn new() -> Self {
        ScopeChain {
            frames: vec![ScopeFrame::default()],
        }
    }

    /// A chain whose outermost frame holds caller-supplied bindings,
    /// topped by one empty local frame
    pub fn with_globals(globals: ScopeFrame) -> Self {
        ScopeChain {
            frames: vec![globals, ScopeFrame::default()],
        }
    }

    /// Resolve `name` against the nearest enclosing frame that binds it
    pub fn read(&self, name: &str) -> Result<&Value, InterpreterError> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(name))
            .ok_or_else(|| InterpreterError::unresolved(name))
    }

    /// Update `name` in the nearest enclosing frame that binds it, or
    /// create the binding in the innermost frame
    pub fn write(&mut self, name: &str, value: Value) {
        for frame in self.frames.iter_mut().rev() {
            if let Some(slot) = frame.get_mut(name) {
                *slot = value;
                return;
            }
        }
        if let Some(innermost) = self.frames.last_mut() {
            innermost.insert(name.to_string(), value);
        }
    }

    /// Lexical deletion is not offered by this model
    pub fn delete(&mut self, name: &str) -> Result<(), InterpreterError> {
        Err(InterpreterError::unsupported_operation(
            "Deleting is not supported",
            name,
        ))
    }

    /// Enter a call or block scope
    pub fn push_frame(&mut self) {
        self.frames.push(ScopeFrame::default());
    }

    /// Leave the current call or block scope, returning its bindings.
    /// The outermost frame is never popped.
    pub fn pop_frame(&mut self) -> Option<ScopeFrame> {
        if self.frames.len() > 1 {
            self.frames.pop()
        } else {
            None
        }
    }

    /// Number of frames currently on the chain
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_prefers_the_defining_frame() {
        let mut scope = ScopeChain::new();
        scope.write("x", Value::Number(1.0));
        scope.push_frame();
        scope.write("x", Value::Number(2.0));
        scope.pop_frame();
        // the outer binding was updated, not shadowed
        assert_eq!(scope.read("x").unwrap(), &Value::Number(2.0));
    }

    #[test]
    fn unbound_write_creates_innermost() {
        let mut scope = ScopeChain::new();
        scope.push_frame();
        scope.write("y", Value::Bool(true));
        let inner = scope.pop_frame().unwrap();
        assert!(inner.contains_key("y"));
        assert!(scope.read("y").is_err());
    }

    #[test]
    fn delete_always_fails() {
        let mut scope = ScopeChain::new();
        scope.write("z", Value::Null);
        assert!(matches!(
            scope.delete("z"),
            Err(InterpreterError::UnsupportedOperation { .. })
        ));
    }
}
