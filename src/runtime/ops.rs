//! Operator evaluation table
//!
//! [`evaluate_operator`] reproduces the target language's loose-typing rules
//! for every supported binary operator; [`evaluate_ternary`] covers the
//! conditional operator. The hard part is the coercion edge cases: the
//! undefined sentinel propagates to NaN through arithmetic, zero-like
//! operands substitute as zero, relational comparison goes textual as soon
//! as either side is text, and loose equality treats null and undefined as
//! one family.
//!
//! # Short-circuiting
//!
//! `??`, `||`, `&&`, and the ternary select between *already evaluated*
//! values here. A calling evaluator that needs real short-circuiting must
//! test the left operand (via [`Value::is_falsy`] / [`Value::is_nullish`])
//! before evaluating the right one; this table never forces evaluation
//! order.

use super::value::Value;
use crate::errors::InterpreterError;

/// Supported binary operator tokens, lowest precedence first.
///
/// A statement-level evaluator splitting an expression should try these in
/// order, so `a || b * c` splits at `||` before `*`. The ternary `?` is not
/// listed; it is handled by [`evaluate_ternary`].
pub const OPERATOR_TOKENS: [&str; 22] = [
    "??", "||", "&&", "|", "^", "&", "===", "!==", "==", "!=", "<=", ">=", "<", ">", ">>", "<<",
    "+", "-", "*", "%", "/", "**",
];

/// Evaluate a binary operator over two operand values.
///
/// Fails with `UnsupportedOperator` for tokens outside the table and with
/// `UnsupportedOperation` when operands are outside the coercible set
/// (e.g. bitwise-or on text).
pub fn evaluate_operator(
    op: &str,
    lhs: &Value,
    rhs: &Value,
) -> Result<Value, InterpreterError> {
    match op {
        "??" => Ok(if lhs.is_nullish() { rhs.clone() } else { lhs.clone() }),
        "||" => Ok(if lhs.is_falsy() { rhs.clone() } else { lhs.clone() }),
        "&&" => Ok(if lhs.is_falsy() { lhs.clone() } else { rhs.clone() }),

        "|" => bit_op(op, lhs, rhs, |a, b| a | b),
        "^" => bit_op(op, lhs, rhs, |a, b| a ^ b),
        "&" => bit_op(op, lhs, rhs, |a, b| a & b),
        // shift counts take the target language's five-bit rule; the right
        // shift is arithmetic, masking afterwards keeps the unsigned range
        ">>" => bit_op(op, lhs, rhs, |a, b| ((a as i64) >> (b & 31)) as u64),
        "<<" => bit_op(op, lhs, rhs, |a, b| {
            (a as i64).wrapping_shl((b & 31) as u32) as u64
        }),

        "===" => Ok(Value::Bool(strict_eq(lhs, rhs))),
        "!==" => Ok(Value::Bool(!strict_eq(lhs, rhs))),
        "==" => Ok(Value::Bool(loose_eq(lhs, rhs))),
        "!=" => Ok(Value::Bool(!loose_eq(lhs, rhs))),

        "<" | "<=" | ">" | ">=" => relational(op, lhs, rhs),

        "+" => add(lhs, rhs),
        "-" => arith_op(op, lhs, rhs, |a, b| a - b),
        "*" => arith_op(op, lhs, rhs, |a, b| a * b),
        "/" => div(lhs, rhs),
        "%" => modulo(lhs, rhs),
        "**" => exp(lhs, rhs),

        _ => Err(InterpreterError::unsupported_operator(
            op,
            &render_operands(op, lhs, rhs),
        )),
    }
}

/// Evaluate the conditional operator over an already-evaluated condition.
///
/// The condition is falsy for exactly
/// {`false`, null, undefined, `0`, `""`, NaN}; see [`Value::is_falsy`].
pub fn evaluate_ternary(cond: &Value, if_true: Value, if_false: Value) -> Value {
    if cond.is_falsy() {
        if_false
    } else {
        if_true
    }
}

/// Identity comparison with no coercion; `NaN === NaN` is false and
/// `null === undefined` is false
fn strict_eq(lhs: &Value, rhs: &Value) -> bool {
    // the derived equality is already coercion-free, and f64's reflexivity
    // exception gives NaN the right answer
    lhs == rhs
}

/// Plain equality, except that the null/undefined family compares equal to
/// itself and booleans cross-compare with numbers
fn loose_eq(lhs: &Value, rhs: &Value) -> bool {
    if lhs.is_nullish() && rhs.is_nullish() {
        return true;
    }
    match (lhs, rhs) {
        (Value::Bool(b), Value::Number(n)) | (Value::Number(n), Value::Bool(b)) => {
            f64::from(u8::from(*b)) == *n
        }
        _ => lhs == rhs,
    }
}

/// True when zero-substitution would turn the operand into zero
fn zero_like(value: &Value) -> bool {
    matches!(value.or_zero(), Value::Number(n) if n == 0.0)
}

fn render_operands(op: &str, lhs: &Value, rhs: &Value) -> String {
    format!("{} {} {}", lhs, op, rhs)
}

fn type_error(op: &str, lhs: &Value, rhs: &Value) -> InterpreterError {
    InterpreterError::unsupported_operation(
        format!(
            "Cannot apply {} to {} and {}",
            op,
            lhs.type_name(),
            rhs.type_name()
        ),
        &render_operands(op, lhs, rhs),
    )
}

/// Bitwise operand: null/undefined coerce to zero, numbers truncate
fn bit_operand(op: &str, operand: &Value, lhs: &Value, rhs: &Value) -> Result<u64, InterpreterError> {
    match operand {
        Value::Undefined | Value::Null => Ok(0),
        Value::Bool(b) => Ok(u64::from(*b)),
        Value::Number(n) => Ok(*n as i64 as u64),
        _ => Err(type_error(op, lhs, rhs)),
    }
}

fn bit_op(
    op: &str,
    lhs: &Value,
    rhs: &Value,
    f: fn(u64, u64) -> u64,
) -> Result<Value, InterpreterError> {
    let a = bit_operand(op, lhs, lhs, rhs)?;
    let b = bit_operand(op, rhs, lhs, rhs)?;
    // mask to a 32-bit unsigned range
    Ok(Value::Number((f(a, b) & 0xffff_ffff) as f64))
}

/// Shared `-`/`*` path: undefined propagates to NaN, zero-like operands
/// substitute as zero
fn arith_op(
    op: &str,
    lhs: &Value,
    rhs: &Value,
    f: fn(f64, f64) -> f64,
) -> Result<Value, InterpreterError> {
    if lhs == &Value::Undefined || rhs == &Value::Undefined {
        return Ok(Value::Number(f64::NAN));
    }
    match (lhs.or_zero().as_number(), rhs.or_zero().as_number()) {
        (Some(a), Some(b)) => Ok(Value::Number(f(a, b))),
        _ => Err(type_error(op, lhs, rhs)),
    }
}

/// `+` additionally concatenates once both coerced operands are textual
/// (or both are lists)
fn add(lhs: &Value, rhs: &Value) -> Result<Value, InterpreterError> {
    if lhs == &Value::Undefined || rhs == &Value::Undefined {
        return Ok(Value::Number(f64::NAN));
    }
    match (lhs.or_zero(), rhs.or_zero()) {
        (Value::Str(a), Value::Str(b)) => Ok(Value::Str(a + &b)),
        (Value::List(mut a), Value::List(b)) => {
            a.extend(b);
            Ok(Value::List(a))
        }
        (a, b) => match (a.as_number(), b.as_number()) {
            (Some(x), Some(y)) => Ok(Value::Number(x + y)),
            _ => Err(type_error("+", lhs, rhs)),
        },
    }
}

fn div(lhs: &Value, rhs: &Value) -> Result<Value, InterpreterError> {
    if lhs == &Value::Undefined || rhs == &Value::Undefined {
        return Ok(Value::Number(f64::NAN));
    }
    if zero_like(lhs) && zero_like(rhs) {
        return Ok(Value::Number(f64::NAN));
    }
    if zero_like(rhs) {
        return Ok(Value::Number(f64::INFINITY));
    }
    match (lhs.or_zero().as_number(), rhs.as_number()) {
        (Some(a), Some(b)) => Ok(Value::Number(a / b)),
        _ => Err(type_error("/", lhs, rhs)),
    }
}

fn modulo(lhs: &Value, rhs: &Value) -> Result<Value, InterpreterError> {
    if lhs == &Value::Undefined || rhs == &Value::Undefined || zero_like(rhs) {
        return Ok(Value::Number(f64::NAN));
    }
    match (lhs.or_zero().as_number(), rhs.as_number()) {
        // f64's remainder is truncated, which is the target language's rule
        (Some(a), Some(b)) => Ok(Value::Number(a % b)),
        _ => Err(type_error("%", lhs, rhs)),
    }
}

fn exp(lhs: &Value, rhs: &Value) -> Result<Value, InterpreterError> {
    // a zero-like exponent short-circuits to one, even for 0 ** 0
    if zero_like(rhs) {
        return Ok(Value::Number(1.0));
    }
    if lhs == &Value::Undefined || rhs == &Value::Undefined {
        return Ok(Value::Number(f64::NAN));
    }
    match (lhs.or_zero().as_number(), rhs.as_number()) {
        (Some(a), Some(b)) => Ok(Value::Number(a.powf(b))),
        _ => Err(type_error("**", lhs, rhs)),
    }
}

/// `< <= > >=`: false against undefined, textual when either side is text,
/// otherwise numeric — both with zero substitution
fn relational(op: &str, lhs: &Value, rhs: &Value) -> Result<Value, InterpreterError> {
    if lhs == &Value::Undefined || rhs == &Value::Undefined {
        return Ok(Value::Bool(false));
    }
    if lhs.as_str().is_some() || rhs.as_str().is_some() {
        let a = lhs.or_zero().to_js_string();
        let b = rhs.or_zero().to_js_string();
        return Ok(Value::Bool(compare(op, &a, &b)));
    }
    match (lhs.or_zero().as_number(), rhs.or_zero().as_number()) {
        (Some(a), Some(b)) => Ok(Value::Bool(compare(op, &a, &b))),
        _ => Err(type_error(op, lhs, rhs)),
    }
}

fn compare<T: PartialOrd>(op: &str, a: &T, b: &T) -> bool {
    match op {
        "<" => a < b,
        "<=" => a <= b,
        ">" => a > b,
        _ => a >= b,
    }
}
