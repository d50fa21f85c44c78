//! The all-of combinator.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::future::Future;
use crate::node::{propagate, subscribe, Links, Node};
use crate::tracer::{self, CombinatorKind};

/// All-of combinator: resolves once every input has resolved.
///
/// `args` is a tuple of one to eight [`Future`]s; `callback` receives the
/// resolved values in positional order and returns the result future, which
/// may itself still be pending. Each input's subscription is released the
/// moment that input settles, so an upstream subtree nothing else holds is
/// reclaimed without waiting for the remaining inputs.
pub fn bind<T, Args, F>(args: Args, callback: F) -> Future<T>
where
    Args: BindArgs<T, F>,
{
    args.bind_with(callback)
}

/// Input tuples accepted by [`bind`], implemented for arities one to eight.
pub trait BindArgs<T, F>: Sized {
    /// Wire the inputs to a fresh bind node and return its output future.
    fn bind_with(self, callback: F) -> Future<T>;
}

pub(crate) struct BindNode<T> {
    links: Links<T>,
    waiting: Cell<usize>,
    fire: RefCell<Option<Box<dyn FnOnce() -> Option<Future<T>>>>>,
}

impl<T: Clone + 'static> BindNode<T> {
    fn new(arity: usize, fire: Box<dyn FnOnce() -> Option<Future<T>>>) -> Self {
        BindNode {
            links: Links::with_arity(arity),
            waiting: Cell::new(arity),
            fire: RefCell::new(Some(fire)),
        }
    }

    fn input_ready(&self, index: usize) {
        self.links.release_parent(index);
        tracer::active().on_input_settled(CombinatorKind::Bind, index);
        let waiting = self.waiting.get().saturating_sub(1);
        self.waiting.set(waiting);
        if waiting > 0 {
            return;
        }
        let fire = self.fire.borrow_mut().take();
        if let Some(fire) = fire {
            tracer::active().on_combinator_fired(CombinatorKind::Bind);
            if let Some(result) = fire() {
                propagate(&self.links, result);
            }
        }
    }
}

impl<T: 'static> Node<T> for BindNode<T> {
    fn links(&self) -> &Links<T> {
        &self.links
    }
}

macro_rules! impl_bind_args {
    ($arity:expr => $(($A:ident, $arg:ident, $slot:ident, $idx:tt)),+) => {
        impl<T, F, $($A),+> BindArgs<T, F> for ($(Future<$A>,)+)
        where
            T: Clone + 'static,
            F: FnOnce($($A),+) -> Future<T> + 'static,
            $($A: Clone + 'static,)+
        {
            fn bind_with(self, callback: F) -> Future<T> {
                let ($($arg,)+) = self;
                $(let $slot = Rc::new(RefCell::new(None::<$A>));)+
                let fire: Box<dyn FnOnce() -> Option<Future<T>>> = {
                    $(let $slot = Rc::clone(&$slot);)+
                    Box::new(move || Some(callback($($slot.borrow_mut().take()?),+)))
                };
                let node = Rc::new(BindNode::new($arity, fire));
                let result = Future::attach(Rc::clone(&node) as Rc<dyn Node<T>>);
                $({
                    let slot = Rc::clone(&$slot);
                    let weak = Rc::downgrade(&node);
                    subscribe(&$arg, $idx, node.links(), move |value: &$A| {
                        *slot.borrow_mut() = Some(value.clone());
                        if let Some(node) = weak.upgrade() {
                            node.input_ready($idx);
                        }
                    });
                })+
                result
            }
        }
    };
}

impl_bind_args!(1 => (A0, a0, s0, 0));
impl_bind_args!(2 => (A0, a0, s0, 0), (A1, a1, s1, 1));
impl_bind_args!(3 => (A0, a0, s0, 0), (A1, a1, s1, 1), (A2, a2, s2, 2));
impl_bind_args!(4 => (A0, a0, s0, 0), (A1, a1, s1, 1), (A2, a2, s2, 2), (A3, a3, s3, 3));
impl_bind_args!(5 => (A0, a0, s0, 0), (A1, a1, s1, 1), (A2, a2, s2, 2), (A3, a3, s3, 3), (A4, a4, s4, 4));
impl_bind_args!(6 => (A0, a0, s0, 0), (A1, a1, s1, 1), (A2, a2, s2, 2), (A3, a3, s3, 3), (A4, a4, s4, 4), (A5, a5, s5, 5));
impl_bind_args!(7 => (A0, a0, s0, 0), (A1, a1, s1, 1), (A2, a2, s2, 2), (A3, a3, s3, 3), (A4, a4, s4, 4), (A5, a5, s5, 5), (A6, a6, s6, 6));
impl_bind_args!(8 => (A0, a0, s0, 0), (A1, a1, s1, 1), (A2, a2, s2, 2), (A3, a3, s3, 3), (A4, a4, s4, 4), (A5, a5, s5, 5), (A6, a6, s6, 6), (A7, a7, s7, 7));
