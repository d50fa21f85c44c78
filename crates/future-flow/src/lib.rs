//! Future-Flow: dataflow future combinators driven by delivered values.
//!
//! Computations are expressed as a graph of [`Future`]s that resolve when
//! matching values are [`deliver`]ed from outside. Three combinators cover
//! the whole surface:
//!
//! - [`receive`] — a leaf future fulfilled by the next `deliver` of its type
//! - [`bind`] — all-of: fires its callback once every input has resolved
//! - [`alt`] — first-of: fires the branch of the first input to resolve
//!
//! A callback may itself return a pending future (built from fresh receives
//! or further combinators); the engine grafts that producer into place, so
//! the handle originally returned to the caller still resolves.
//!
//! # Key properties
//!
//! - **Single-threaded, synchronous**: `deliver` returns only after the
//!   whole cascade of propagations and callbacks has finished.
//! - **At-most-once resolution**: a future's value never changes once set.
//! - **Implicit cancellation**: dropping the last handle to a computation
//!   releases its entire upstream subgraph; later deliveries skip it.
//!
//! # Example
//!
//! ```
//! use future_flow::{bind, deliver, receive, Future};
//!
//! let sum = bind((receive::<i32>(), receive::<u8>()), |a: i32, b: u8| {
//!     Future::from_value(a + i32::from(b))
//! });
//!
//! assert!(!sum.ready());
//! assert_eq!(deliver(40_i32), 1);
//! assert_eq!(deliver(2_u8), 1);
//! assert_eq!(sum.get(), 42);
//! ```

mod alt;
mod bind;
mod future;
mod node;
mod receive;
mod registry;
pub mod tracer;

pub use alt::{alt, AltArgs};
pub use bind::{bind, BindArgs};
pub use future::Future;
pub use receive::{receive, receive_matching};
pub use registry::deliver;
pub use tracer::{set_tracer, CombinatorKind, NoopTracer, Tracer};
