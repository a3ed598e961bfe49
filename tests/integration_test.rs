//! The scanner, operator table, and scope chain cooperating the way a
//! statement-level interpreter drives them.

use jsplinter::errors::InterpreterError;
use jsplinter::runtime::{
    evaluate_operator, RecursionBudget, ScopeChain, Signal, Value, OPERATOR_TOKENS,
};
use jsplinter::scanner::{extract_block, scan};
use jsplinter::trace::{TraceEvent, TraceSink, Tracer};
use std::cell::RefCell;
use std::rc::Rc;

/// Minimal expression evaluator over the core primitives: parenthesized
/// groups via `extract_block`, binary operators by precedence via `scan`,
/// identifiers via the scope chain. Enough to exercise the contracts; the
/// real statement interpreter lives outside this crate.
fn eval(expr: &str, scope: &ScopeChain) -> Result<Value, InterpreterError> {
    let expr = expr.trim();
    if expr.starts_with('(') {
        let (inner, rest) = extract_block(expr)?;
        if rest.is_empty() {
            return eval(inner, scope);
        }
    }
    for op in OPERATOR_TOKENS {
        let parts: Vec<&str> = scan(expr, op, Some(1)).collect();
        if parts.len() == 2 && !parts[0].trim().is_empty() && !parts[1].trim().is_empty() {
            let lhs = eval(parts[0], scope)?;
            let rhs = eval(parts[1], scope)?;
            return evaluate_operator(op, &lhs, &rhs);
        }
    }
    if let Ok(n) = expr.parse::<f64>() {
        return Ok(Value::Number(n));
    }
    Ok(scope.read(expr)?.clone())
}

#[test]
fn test_evaluating_an_expression_through_the_core() {
    let mut scope = ScopeChain::new();
    scope.write("a", Value::Number(2.0));
    scope.write("b", Value::Number(3.0));
    scope.write("c", Value::Number(4.0));

    assert_eq!(eval("(a + b) * c", &scope).unwrap(), Value::Number(20.0));
    assert_eq!(eval("a < b", &scope).unwrap(), Value::Bool(true));
    assert_eq!(eval("missing + 1", &scope).unwrap_err(), InterpreterError::unresolved("missing"));
}

#[test]
fn test_argument_fragments_feed_the_scope() {
    // split a call's argument list the way a function harness would
    let args: Vec<&str> = scan("x, [1,2], 'a,b'", ",", None).map(str::trim).collect();
    assert_eq!(args, vec!["x", "[1,2]", "'a,b'"]);

    let mut scope = ScopeChain::new();
    scope.push_frame();
    scope.write(args[0], Value::Number(41.0));
    let result = evaluate_operator("+", scope.read("x").unwrap(), &Value::Number(1.0)).unwrap();
    assert_eq!(result, Value::Number(42.0));
}

#[test]
fn test_scope_resolution_across_nested_frames() {
    let mut scope = ScopeChain::new();
    scope.write("outer", Value::Number(1.0));
    scope.push_frame();
    scope.push_frame();
    // three frames deep, the outermost binding is still the write target
    scope.write("outer", Value::Number(2.0));
    scope.pop_frame();
    scope.pop_frame();
    assert_eq!(scope.read("outer").unwrap(), &Value::Number(2.0));
}

#[test]
fn test_uncaught_signals_surface_with_their_payload() {
    let err = InterpreterError::uncaught(Signal::Throw(Value::from("boom")));
    assert_eq!(err.to_string(), "Uncaught exception \"boom\"");
    assert_eq!(
        InterpreterError::uncaught(Signal::Break).to_string(),
        "Invalid break"
    );
    assert_eq!(
        InterpreterError::uncaught(Signal::Continue).to_string(),
        "Invalid continue"
    );

    match InterpreterError::uncaught(Signal::Throw(Value::Number(7.0))) {
        InterpreterError::UncaughtSignal { signal } => {
            assert_eq!(signal.payload(), Some(&Value::Number(7.0)));
        }
        other => panic!("expected an uncaught-signal error, got {other:?}"),
    }
}

#[test]
fn test_recursion_budget_bounds_nesting() {
    let mut budget = RecursionBudget::new(3);
    for _ in 0..3 {
        budget = budget.descend("((((x))))").unwrap();
    }
    assert!(matches!(
        budget.descend("((((x))))"),
        Err(InterpreterError::ResourceExhausted { .. })
    ));
}

struct Recorder {
    events: Rc<RefCell<Vec<TraceEvent>>>,
}

impl TraceSink for Recorder {
    fn emit(&self, event: &TraceEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[test]
fn test_tracer_observes_without_affecting_results() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let tracer = Tracer::with_sink(Box::new(Recorder {
        events: events.clone(),
    }));

    let mut scope = ScopeChain::new();
    scope.write("n", Value::Number(6.0));

    tracer.enter(0, "n * 7");
    let result = eval("n * 7", &scope).unwrap();
    tracer.exit(0, &result.to_string(), false);
    assert_eq!(result, Value::Number(42.0));

    let captured = events.borrow();
    assert_eq!(
        *captured,
        vec![
            TraceEvent::Enter {
                depth: 0,
                source: "n * 7".to_string(),
            },
            TraceEvent::Exit {
                depth: 0,
                rendering: "42".to_string(),
                returned: false,
            },
        ]
    );
    assert_eq!(captured[1].to_string(), "-> 42");
}

#[test]
fn test_tracer_renders_raised_signals() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let tracer = Tracer::with_sink(Box::new(Recorder {
        events: events.clone(),
    }));

    tracer.raise(1, &Signal::Break.to_string(), "break");
    let captured = events.borrow();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].to_string(), "  => Raises: Invalid break <-| break");
}
