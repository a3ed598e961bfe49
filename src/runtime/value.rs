//! Runtime value representation
//!
//! This module defines the [`Value`] enum, a closed tagged variant over the
//! loosely-typed values the expression runtime manipulates. Keeping the set
//! closed lets operator functions pattern-match exhaustively instead of
//! relying on ambient coercion.
//!
//! # Value Types
//!
//! - [`Value::Undefined`]: the "no value" sentinel, distinct from null, with
//!   its own propagation rules in arithmetic and equality
//! - [`Value::Null`]: the null value
//! - [`Value::Bool`]: boolean
//! - [`Value::Number`]: IEEE 754 double (NaN and infinities included)
//! - [`Value::Str`]: text
//! - [`Value::List`]: ordered sequence
//! - [`Value::Object`]: string-keyed mapping

use rustc_hash::FxHashMap;
use std::fmt;

/// A loosely-typed runtime value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The undefined sentinel ("no value"), distinct from [`Value::Null`]
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    List(Vec<Value>),
    Object(FxHashMap<String, Value>),
}

impl Value {
    /// True for exactly the conditionally-false set:
    /// `false`, null, undefined, `0`, `""`, and NaN.
    ///
    /// Everything else — including empty lists and objects — is truthy.
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => *n == 0.0 || n.is_nan(),
            Value::Str(s) => s.is_empty(),
            Value::List(_) | Value::Object(_) => false,
        }
    }

    pub fn is_truthy(&self) -> bool {
        !self.is_falsy()
    }

    /// True for [`Value::Undefined`] and [`Value::Null`], the family that
    /// compares loosely equal to itself
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Get the numeric value, returns None if not coercible.
    ///
    /// Booleans count as 0/1; nothing else auto-converts.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Bool(b) => Some(f64::from(u8::from(*b))),
            _ => None,
        }
    }

    /// Get the text value, returns None if not a Str
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Zero-substitution used by the arithmetic coercions: an empty or
    /// zero-like operand becomes the number zero, everything else passes
    /// through unchanged. NaN passes through (it is not zero-like).
    pub(crate) fn or_zero(&self) -> Value {
        match self {
            Value::Null | Value::Bool(false) => Value::Number(0.0),
            Value::Number(n) if *n == 0.0 => Value::Number(0.0),
            Value::Str(s) if s.is_empty() => Value::Number(0.0),
            Value::List(items) if items.is_empty() => Value::Number(0.0),
            Value::Object(map) if map.is_empty() => Value::Number(0.0),
            other => other.clone(),
        }
    }

    /// Render the value as text for relational string comparison
    pub fn to_js_string(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => render_number(*n),
            Value::Str(s) => s.clone(),
            Value::List(items) => items
                .iter()
                .map(Value::to_js_string)
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(_) => "[object Object]".to_string(),
        }
    }

    /// Variant name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Object(_) => "object",
        }
    }
}

/// Integral doubles render without a fractional part
fn render_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for Value {
    /// Diagnostic rendering: like [`Value::to_js_string`] but with text
    /// values quoted and aggregates bracketed, so trace output stays
    /// unambiguous
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{:?}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Object(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            other => write!(f, "{}", other.to_js_string()),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn nan_is_falsy_but_not_zero_like() {
        let nan = Value::Number(f64::NAN);
        assert!(nan.is_falsy());
        // NaN survives zero-substitution
        assert!(matches!(nan.or_zero(), Value::Number(n) if n.is_nan()));
    }

    #[test]
    fn number_rendering() {
        assert_eq!(Value::Number(10.0).to_js_string(), "10");
        assert_eq!(Value::Number(2.5).to_js_string(), "2.5");
        assert_eq!(Value::Number(f64::INFINITY).to_js_string(), "Infinity");
    }
}
