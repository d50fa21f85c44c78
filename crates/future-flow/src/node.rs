//! The node graph: ownership links, observers, and the propagation protocol.
//!
//! Ownership runs downstream-to-upstream: a subscriber keeps its producer
//! alive through a strong reference, while producers only hold weak
//! references to their subscribers. Dropping the last handle to a
//! computation therefore releases the whole subgraph that fed it.

use std::any::Any;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::future::Future;
use crate::tracer;

/// A producer of at most one `T`.
pub(crate) trait Node<T>: 'static {
    fn links(&self) -> &Links<T>;
}

/// A downstream endpoint a node can feed.
///
/// Two kinds exist: the value cell behind a [`Future`], and the argument
/// observer wired into a combinator. `retarget` is the graft hook: it swaps
/// the observer's strong upstream reference to a replacement producer.
pub(crate) trait Observer<T>: 'static {
    fn set(&self, value: &T);
    fn retarget(&self, producer: &Rc<dyn Node<T>>);
}

/// A node's place in the graph: strong upstream edges, weak downstream ones.
pub(crate) struct Links<T> {
    /// One entry per input, individually releasable once the input is no
    /// longer needed. Type-erased because inputs carry arbitrary value types.
    parents: RefCell<Vec<Option<Rc<dyn Any>>>>,
    /// Flat across combinator kinds so grafting can splice lists freely.
    children: RefCell<Vec<Weak<dyn Observer<T>>>>,
}

impl<T: 'static> Links<T> {
    pub(crate) fn with_arity(arity: usize) -> Self {
        Links {
            parents: RefCell::new(vec![None; arity]),
            children: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn connect(&self, child: Weak<dyn Observer<T>>) {
        self.children.borrow_mut().push(child);
    }

    fn adopt(&self, index: usize, observer: Rc<dyn Any>) {
        if let Some(slot) = self.parents.borrow_mut().get_mut(index) {
            *slot = Some(observer);
        }
    }

    pub(crate) fn release_parent(&self, index: usize) {
        let released = self.parents.borrow_mut().get_mut(index).and_then(Option::take);
        drop(released);
    }

    pub(crate) fn release_all_parents(&self) {
        let released: Vec<_> = self.parents.borrow_mut().iter_mut().map(Option::take).collect();
        drop(released);
    }
}

/// Forward a produced result to a node's subscribers.
///
/// A ready result is fanned out to every live child. A pending result means
/// the callback handed back a fresh producer: the node's children move onto
/// that producer (graft), each child's strong upstream reference is rewritten
/// to it, and the now-empty node is left to be reclaimed by its last holder.
pub(crate) fn propagate<T: Clone + 'static>(links: &Links<T>, result: Future<T>) {
    if let Some(value) = result.try_get() {
        // Snapshot: a callback fired downstream may connect back here mid-walk.
        let children: Vec<_> = links.children.borrow().clone();
        let mut live = 0;
        for child in &children {
            if let Some(observer) = child.upgrade() {
                observer.set(&value);
                live += 1;
            }
        }
        tracer::active().on_value_forwarded(std::any::type_name::<T>(), live);
    } else if let Some(target) = result.producer() {
        let moved = links.children.take();
        let mut live = Vec::with_capacity(moved.len());
        for child in moved {
            if let Some(observer) = child.upgrade() {
                observer.retarget(&target);
                live.push(child);
            }
        }
        tracer::active().on_graft(std::any::type_name::<T>(), live.len());
        target.links().children.borrow_mut().extend(live);
    }
}

/// Wire one combinator input.
///
/// An already-resolved input is fed straight through `forward`; a pending
/// one gets an [`ArgObserver`] subscribed to its producer and adopted into
/// the combinator's parent slot `index`.
pub(crate) fn subscribe<A, T>(
    input: &Future<A>,
    index: usize,
    links: &Links<T>,
    forward: impl Fn(&A) + 'static,
) where
    A: Clone + 'static,
    T: 'static,
{
    if let Some(value) = input.try_get() {
        forward(&value);
    } else if let Some(upstream) = input.producer() {
        let observer = Rc::new(ArgObserver {
            upstream: RefCell::new(Some(Rc::clone(&upstream))),
            forward: Box::new(forward),
        });
        let observer_dyn: Rc<dyn Observer<A>> = observer.clone();
        let child: Weak<dyn Observer<A>> = Rc::downgrade(&observer_dyn);
        upstream.links().connect(child);
        links.adopt(index, observer);
    }
}

/// Adapter that forwards a produced value into a downstream combinator.
///
/// It carries the strong reference that keeps the subscribed upstream alive;
/// releasing the adapter from the combinator's parent slot severs the
/// subscription and lets the upstream subtree be collected.
struct ArgObserver<A> {
    upstream: RefCell<Option<Rc<dyn Node<A>>>>,
    forward: Box<dyn Fn(&A)>,
}

impl<A: Clone + 'static> Observer<A> for ArgObserver<A> {
    fn set(&self, value: &A) {
        (self.forward)(value);
    }

    fn retarget(&self, producer: &Rc<dyn Node<A>>) {
        let previous = self.upstream.borrow_mut().replace(Rc::clone(producer));
        drop(previous);
    }
}
