//! Tracer trait for observing engine activity.
//!
//! All hooks default to no-ops, so implementations only override the events
//! they care about and the default [`NoopTracer`] costs nothing. The active
//! tracer is installed per thread with [`set_tracer`], matching the engine's
//! single-threaded execution model.
//!
//! # Example
//!
//! ```ignore
//! use future_flow::{set_tracer, Tracer};
//!
//! struct PrintTracer;
//!
//! impl Tracer for PrintTracer {
//!     fn on_deliver_end(&self, value_type: &'static str, delivered: usize) {
//!         println!("delivered {value_type} to {delivered} receives");
//!     }
//! }
//!
//! set_tracer(PrintTracer);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Which callback-bearing combinator produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombinatorKind {
    /// All-of: fires once every input has resolved.
    Bind,
    /// First-of: fires on the first input to resolve.
    Alt,
}

/// Hooks called as the graph is built and driven.
pub trait Tracer: 'static {
    /// A receive node was appended to the delivery registry.
    #[inline]
    fn on_receive_registered(&self, _value_type: &'static str) {}

    /// A delivery round started; the registry bucket is about to be taken.
    #[inline]
    fn on_deliver_start(&self, _value_type: &'static str) {}

    /// A delivery round finished, fulfilling `delivered` live receives.
    #[inline]
    fn on_deliver_end(&self, _value_type: &'static str, _delivered: usize) {}

    /// A combinator input settled: a bind slot filled, or an alt claimed by
    /// input `index`.
    #[inline]
    fn on_input_settled(&self, _kind: CombinatorKind, _index: usize) {}

    /// A combinator is invoking its user callback.
    #[inline]
    fn on_combinator_fired(&self, _kind: CombinatorKind) {}

    /// A ready value was forwarded to `observers` live subscribers.
    #[inline]
    fn on_value_forwarded(&self, _value_type: &'static str, _observers: usize) {}

    /// A node's downstream was grafted onto a callback-produced producer,
    /// carrying `moved` live subscribers across.
    #[inline]
    fn on_graft(&self, _value_type: &'static str, _moved: usize) {}
}

/// Tracer that discards every event; the default.
pub struct NoopTracer;

impl Tracer for NoopTracer {}

thread_local! {
    static ACTIVE: RefCell<Rc<dyn Tracer>> = RefCell::new(Rc::new(NoopTracer));
}

/// Install the tracer for the current thread.
///
/// Replaces the previous tracer; install [`NoopTracer`] to stop tracing.
pub fn set_tracer(tracer: impl Tracer) {
    ACTIVE.with(|active| *active.borrow_mut() = Rc::new(tracer));
}

pub(crate) fn active() -> Rc<dyn Tracer> {
    ACTIVE.with(|active| Rc::clone(&active.borrow()))
}
