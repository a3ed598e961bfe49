//! Structured execution tracing
//!
//! The [`Tracer`] emits one [`TraceEvent`] when a statement or expression is
//! entered and one when it is exited (with its result, or the error it
//! raised). Events flow into an injected [`TraceSink`]; the default
//! [`NoopSink`] discards them, and [`LogSink`] renders them through
//! [`tracing::debug!`].
//!
//! Tracing is diagnostic only: the tracer never inspects values beyond
//! rendering them and never alters evaluation. While disabled it does no
//! rendering work at all, so the evaluation path pays nothing for it.
//! There is no process-wide toggle; each evaluation owns its tracer.

use crate::errors::truncate_fragment;
use std::fmt;

/// One step of an evaluation, observed by a [`TraceSink`].
///
/// Events are created and discarded per evaluation step; the depth field is
/// the externally supplied recursion depth and bounds indentation.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    /// A statement or expression is about to be evaluated
    Enter { depth: usize, source: String },
    /// Evaluation produced a value; `returned` marks a function-level return
    Exit {
        depth: usize,
        rendering: String,
        returned: bool,
    },
    /// Evaluation raised an error or signal
    Raise {
        depth: usize,
        error: String,
        source: String,
    },
}

impl TraceEvent {
    pub fn depth(&self) -> usize {
        match self {
            TraceEvent::Enter { depth, .. }
            | TraceEvent::Exit { depth, .. }
            | TraceEvent::Raise { depth, .. } => *depth,
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = "  ".repeat(self.depth());
        match self {
            TraceEvent::Enter { source, .. } => write!(f, "{}{}", indent, source),
            TraceEvent::Exit {
                rendering,
                returned,
                ..
            } => {
                let arrow = if *returned { "=>" } else { "->" };
                write!(f, "{}{} {}", indent, arrow, rendering)
            }
            TraceEvent::Raise { error, source, .. } => {
                write!(f, "{}=> Raises: {} <-| {}", indent, error, source)
            }
        }
    }
}

/// Destination for trace events
pub trait TraceSink {
    fn emit(&self, event: &TraceEvent);
}

/// Discards every event; the default sink
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {
    fn emit(&self, _event: &TraceEvent) {}
}

/// Renders events into `tracing` at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn emit(&self, event: &TraceEvent) {
        tracing::debug!(target: "jsplinter::trace", "{}", event);
    }
}

/// Entry/exit event emitter for one evaluation.
///
/// Disabled by default; [`Tracer::enable`] turns emission on for the
/// injected sink. Source text and renderings are truncated to the same
/// bounded length as error fragments.
pub struct Tracer {
    enabled: bool,
    sink: Box<dyn TraceSink>,
}

impl Tracer {
    /// A disabled tracer with the no-op sink
    pub fn new() -> Self {
        Tracer {
            enabled: false,
            sink: Box::new(NoopSink),
        }
    }

    /// An enabled tracer feeding the given sink
    pub fn with_sink(sink: Box<dyn TraceSink>) -> Self {
        Tracer {
            enabled: true,
            sink,
        }
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Replace the event sink, keeping the enabled state
    pub fn set_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.sink = sink;
    }

    /// A statement or expression is entered. Blank source is not traced.
    pub fn enter(&self, depth: usize, source: &str) {
        if !self.enabled || source.trim().is_empty() {
            return;
        }
        self.sink.emit(&TraceEvent::Enter {
            depth,
            source: truncate_fragment(source),
        });
    }

    /// Evaluation finished with a rendered result
    pub fn exit(&self, depth: usize, rendering: &str, returned: bool) {
        if !self.enabled {
            return;
        }
        self.sink.emit(&TraceEvent::Exit {
            depth,
            rendering: truncate_fragment(rendering),
            returned,
        });
    }

    /// Evaluation raised an error or signal
    pub fn raise(&self, depth: usize, error: &str, source: &str) {
        if !self.enabled {
            return;
        }
        self.sink.emit(&TraceEvent::Raise {
            depth,
            error: truncate_fragment(error),
            source: truncate_fragment(source),
        });
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Tracer::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder {
        events: Rc<RefCell<Vec<TraceEvent>>>,
    }

    impl TraceSink for Recorder {
        fn emit(&self, event: &TraceEvent) {
            self.events.borrow_mut().push(event.clone());
        }
    }

    #[test]
    fn disabled_tracer_emits_nothing() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut tracer = Tracer::with_sink(Box::new(Recorder {
            events: events.clone(),
        }));
        tracer.disable();
        tracer.enter(0, "x + 1");
        tracer.exit(0, "2", false);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn events_indent_by_depth() {
        let event = TraceEvent::Exit {
            depth: 2,
            rendering: "3".to_string(),
            returned: true,
        };
        assert_eq!(event.to_string(), "    => 3");
    }
}
