//! Flow Inspector: tracing and observability for future-flow.
//!
//! The engine reports activity through its `Tracer` hooks; this crate turns
//! those hooks into serializable [`FlowEvent`]s and routes them through an
//! [`EventSink`]:
//!
//! - **EventCollector**: accumulates events for testing and assertion
//! - **NullSink** / **MultiplexSink** / **FilterSink**: routing building blocks
//! - **SinkTracer**: the bridge installed with `future_flow::set_tracer`
//!
//! # Quick start
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use future_flow::{deliver, receive, set_tracer};
//! use future_flow_inspector::{EventCollector, FlowEvent, SinkTracer};
//!
//! let collector = Arc::new(EventCollector::new());
//! set_tracer(SinkTracer::new(collector.clone()));
//!
//! let x = receive::<i32>();
//! deliver(1);
//!
//! assert!(collector
//!     .trace()
//!     .has_event(|event| matches!(event, FlowEvent::DeliverEnd { delivered: 1, .. })));
//! ```

mod collector;
mod events;
mod sink;
mod tracer_impl;

pub use collector::EventCollector;
pub use events::{CombinatorKind, ExecutionTrace, FlowEvent};
pub use sink::{EventSink, FilterSink, MultiplexSink, NullSink};
pub use tracer_impl::SinkTracer;
