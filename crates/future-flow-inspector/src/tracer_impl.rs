//! SinkTracer - bridge between the engine's `Tracer` hooks and an `EventSink`.

use std::sync::Arc;

use future_flow::{CombinatorKind, Tracer};

use crate::events::FlowEvent;
use crate::sink::EventSink;

/// A `Tracer` implementation that forwards every hook to an [`EventSink`]
/// as a [`FlowEvent`].
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
/// ```
pub struct SinkTracer {
    sink: Arc<dyn EventSink>,
}

impl SinkTracer {
    /// Create a new tracer wrapping the given sink.
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self { sink }
    }
}

impl Tracer for SinkTracer {
    #[inline]
    fn on_receive_registered(&self, value_type: &'static str) {
        self.sink.emit(FlowEvent::ReceiveRegistered {
            value_type: value_type.to_string(),
        });
    }

    #[inline]
    fn on_deliver_start(&self, value_type: &'static str) {
        self.sink.emit(FlowEvent::DeliverStart {
            value_type: value_type.to_string(),
        });
    }

    #[inline]
    fn on_deliver_end(&self, value_type: &'static str, delivered: usize) {
        self.sink.emit(FlowEvent::DeliverEnd {
            value_type: value_type.to_string(),
            delivered,
        });
    }

    #[inline]
    fn on_input_settled(&self, kind: CombinatorKind, index: usize) {
        self.sink.emit(FlowEvent::InputSettled { kind, index });
    }

    #[inline]
    fn on_combinator_fired(&self, kind: CombinatorKind) {
        self.sink.emit(FlowEvent::CombinatorFired { kind });
    }

    #[inline]
    fn on_value_forwarded(&self, value_type: &'static str, observers: usize) {
        self.sink.emit(FlowEvent::ValueForwarded {
            value_type: value_type.to_string(),
            observers,
        });
    }

    #[inline]
    fn on_graft(&self, value_type: &'static str, moved: usize) {
        self.sink.emit(FlowEvent::Grafted {
            value_type: value_type.to_string(),
            moved,
        });
    }
}
