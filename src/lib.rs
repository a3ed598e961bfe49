//! # Introduction
//!
//! jsplinter is the expression-level core of a micro-interpreter for a
//! JavaScript subset. It evaluates short, third-party-authored expressions
//! reproducing the exact runtime semantics (loose-typing coercion, NaN
//! propagation, chained scope resolution) that those expressions depend on,
//! without a general-purpose engine, a formal grammar, or an external parser.
//!
//! ## Evaluation pipeline
//!
//! ```text
//! Source → Scanner/Extractor → sub-expressions → Operator Table → Value
//!                │                                     │
//!           Regex flags                           Scope Chain
//!                                                      │
//!                                                 Tracer (observes only)
//! ```
//!
//! 1. [`scanner`] — splits raw source on delimiters while tracking
//!    string/regex-literal boundaries, escapes, and nested bracket depth;
//!    extracts balanced blocks; decodes regex-literal flags.
//! 2. [`runtime`] — tagged [`runtime::Value`] variants, the operator
//!    evaluation table, the [`runtime::ScopeChain`], and the
//!    break/continue/throw [`runtime::Signal`] taxonomy.
//! 3. [`trace`] — optional structured execution tracing through an injected
//!    sink; never affects evaluation results.
//! 4. [`errors`] — the [`errors::InterpreterError`] taxonomy, every variant
//!    carrying a truncated offending fragment.
//!
//! ## Supported subset
//!
//! Binary operators: bitwise (`| ^ & >> <<`), arithmetic (`+ - * / % **`),
//! equality (`=== !== == !=`), relational (`< <= > >=`), selection
//! (`?? || &&`), and the ternary conditional. Values: number, text,
//! boolean, null, the undefined sentinel, list, object. A statement-level
//! interpreter (loops, declarations, handlers) is an external collaborator
//! built on these primitives; syntax outside the subset fails with a typed
//! error rather than silently approximating.

pub mod errors;
pub mod runtime;
pub mod scanner;
pub mod trace;

pub use errors::InterpreterError;
pub use runtime::{
    evaluate_operator, evaluate_ternary, RecursionBudget, ScopeChain, Signal, Value,
    MAX_RECURSION, OPERATOR_TOKENS,
};
pub use scanner::{decode_regex_flags, extract_block, scan, RegexFlags};
pub use trace::{LogSink, NoopSink, TraceEvent, TraceSink, Tracer};
