//! Event types for future-flow tracing.

use serde::{Deserialize, Serialize};

// Re-exported so sinks and assertions can name the kind without depending
// on the engine crate directly.
pub use future_flow::CombinatorKind;

/// Events emitted during graph construction and delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowEvent {
    /// A receive node was appended to the delivery registry.
    ReceiveRegistered {
        /// Type name of the awaited value.
        value_type: String,
    },

    /// A delivery round started.
    DeliverStart {
        /// Type name of the delivered value.
        value_type: String,
    },

    /// A delivery round finished.
    DeliverEnd {
        /// Type name of the delivered value.
        value_type: String,
        /// How many live receives were fulfilled this round.
        delivered: usize,
    },

    /// A combinator input settled: a bind slot filled, or an alt claimed.
    InputSettled {
        kind: CombinatorKind,
        /// Positional index of the input that settled.
        index: usize,
    },

    /// A combinator invoked its user callback.
    CombinatorFired { kind: CombinatorKind },

    /// A ready value was forwarded to a node's live observers.
    ValueForwarded {
        value_type: String,
        /// How many observers were still live.
        observers: usize,
    },

    /// A node's downstream was grafted onto a callback-produced producer.
    Grafted {
        value_type: String,
        /// How many live observers moved across.
        moved: usize,
    },
}

/// A complete trace of collected events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionTrace {
    pub events: Vec<FlowEvent>,
}

impl ExecutionTrace {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: FlowEvent) {
        self.events.push(event);
    }

    /// The `(value_type, delivered)` pairs of every finished delivery round.
    pub fn delivery_counts(&self) -> impl Iterator<Item = (&str, usize)> {
        self.events.iter().filter_map(|event| match event {
            FlowEvent::DeliverEnd {
                value_type,
                delivered,
            } => Some((value_type.as_str(), *delivered)),
            _ => None,
        })
    }

    /// Check if any event matches a predicate.
    pub fn has_event<F>(&self, predicate: F) -> bool
    where
        F: Fn(&FlowEvent) -> bool,
    {
        self.events.iter().any(predicate)
    }
}
