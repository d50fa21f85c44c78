//! Event collector for testing.
//!
//! `EventCollector` accumulates events for later inspection and assertion.
//! This is the primary tool for testing engine behavior.

use parking_lot::Mutex;

use crate::events::{ExecutionTrace, FlowEvent};
use crate::sink::EventSink;

/// Event collector for testing - accumulates events for assertions.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
///
/// use future_flow::set_tracer;
/// use future_flow_inspector::{EventCollector, SinkTracer};
///
/// let collector = Arc::new(EventCollector::new());
/// set_tracer(SinkTracer::new(collector.clone()));
///
/// // Build a graph and deliver values here
///
/// let trace = collector.trace();
/// assert!(!trace.events.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct EventCollector {
    events: Mutex<Vec<FlowEvent>>,
}

impl EventCollector {
    /// Create a new empty event collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get collected events as an execution trace.
    pub fn trace(&self) -> ExecutionTrace {
        ExecutionTrace {
            events: self.events.lock().clone(),
        }
    }

    /// Get collected events as a vector.
    pub fn events(&self) -> Vec<FlowEvent> {
        self.events.lock().clone()
    }

    /// Clear all collected events.
    pub fn clear(&self) {
        self.events.lock().clear();
    }

    /// Take collected events, clearing the collector.
    pub fn take(&self) -> Vec<FlowEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Get the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Check if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventSink for EventCollector {
    fn emit(&self, event: FlowEvent) {
        self.events.lock().push(event);
    }
}
