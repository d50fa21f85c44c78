//! The per-type delivery registry.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Weak;

use crate::future::Future;
use crate::receive::ReceiveNode;
use crate::tracer;

thread_local! {
    /// Pending receives, bucketed by value type. Each bucket is a
    /// `Vec<Weak<ReceiveNode<T>>>` behind the type-erased box.
    static PENDING: RefCell<HashMap<TypeId, Box<dyn Any>, ahash::RandomState>> =
        RefCell::new(HashMap::default());
}

pub(crate) fn register<T: Clone + 'static>(node: Weak<ReceiveNode<T>>) {
    PENDING.with(|pending| {
        let mut pending = pending.borrow_mut();
        let bucket = pending
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(Vec::<Weak<ReceiveNode<T>>>::new()));
        if let Some(bucket) = bucket.downcast_mut::<Vec<Weak<ReceiveNode<T>>>>() {
            bucket.push(node);
        }
    });
}

fn take_pending<T: Clone + 'static>() -> Vec<Weak<ReceiveNode<T>>> {
    PENDING.with(|pending| {
        pending
            .borrow_mut()
            .remove(&TypeId::of::<T>())
            .and_then(|bucket| bucket.downcast::<Vec<Weak<ReceiveNode<T>>>>().ok())
            .map(|bucket| *bucket)
            .unwrap_or_default()
    })
}

/// Fulfil every pending receive of `T` with `value`.
///
/// Returns how many receives were still live. The registry bucket is taken
/// out before the walk, so receives registered by callbacks during this
/// round only see later deliveries, and the walk itself visits nodes in
/// registration order. The call returns only after the whole cascade of
/// propagations and callbacks has finished.
pub fn deliver<T: Clone + 'static>(value: T) -> usize {
    let value_type = std::any::type_name::<T>();
    tracer::active().on_deliver_start(value_type);
    let pending = take_pending::<T>();
    let mut delivered = 0;
    for entry in pending {
        if let Some(node) = entry.upgrade() {
            node.fulfill(Future::from_value(value.clone()));
            delivered += 1;
        }
    }
    tracer::active().on_deliver_end(value_type, delivered);
    delivered
}
