//! External-input nodes.

use std::rc::Rc;

use crate::future::Future;
use crate::node::{propagate, Links, Node};
use crate::registry;
use crate::tracer;

/// Leaf node fulfilled by [`deliver`](crate::deliver); its only state is
/// membership in the per-type delivery registry.
pub(crate) struct ReceiveNode<T> {
    links: Links<T>,
}

impl<T: Clone + 'static> ReceiveNode<T> {
    pub(crate) fn fulfill(&self, value: Future<T>) {
        propagate(&self.links, value);
    }
}

impl<T: 'static> Node<T> for ReceiveNode<T> {
    fn links(&self) -> &Links<T> {
        &self.links
    }
}

/// Register an external-input node for `T` and return its future.
///
/// The node stays pending until the next [`deliver`](crate::deliver) of a
/// `T`; if every handle to it is dropped first, that delivery skips it.
pub fn receive<T: Clone + 'static>() -> Future<T> {
    let node = Rc::new(ReceiveNode {
        links: Links::with_arity(0),
    });
    registry::register(Rc::downgrade(&node));
    tracer::active().on_receive_registered(std::any::type_name::<T>());
    Future::attach(node)
}

/// Receive repeatedly until `pred` accepts a delivered value.
///
/// Each rejected delivery re-registers, so the returned future only sees
/// values delivered after the rejection.
pub fn receive_matching<T, P>(pred: P) -> Future<T>
where
    T: Clone + 'static,
    P: Fn(&T) -> bool + 'static,
{
    crate::bind((receive::<T>(),), move |value: T| {
        if pred(&value) {
            Future::from_value(value)
        } else {
            receive_matching(pred)
        }
    })
}
