//! The first-of combinator.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::future::Future;
use crate::node::{propagate, subscribe, Links, Node};
use crate::tracer::{self, CombinatorKind};

/// First-of combinator: resolves with the branch of the first input to fire.
///
/// `args` is a tuple of one to eight [`Future`]s and `branches` a matching
/// tuple of callbacks, one per input. The winning input releases every
/// subscription *before* its branch runs, so a branch may construct fresh
/// receives of the very types the losing inputs were waiting on without
/// feeding them. Once claimed, the remaining inputs can never fire.
pub fn alt<T, Args, Branches>(args: Args, branches: Branches) -> Future<T>
where
    Args: AltArgs<T, Branches>,
{
    args.alt_with(branches)
}

/// Input tuples accepted by [`alt`], implemented for arities one to eight.
pub trait AltArgs<T, Branches>: Sized {
    /// Wire the inputs to a fresh alt node and return its output future.
    fn alt_with(self, branches: Branches) -> Future<T>;
}

pub(crate) struct AltNode<T> {
    links: Links<T>,
    claimed: Cell<bool>,
}

impl<T: Clone + 'static> AltNode<T> {
    fn new(arity: usize) -> Self {
        AltNode {
            links: Links::with_arity(arity),
            claimed: Cell::new(false),
        }
    }

    /// First caller wins; every input subscription is dropped on the spot.
    fn claim(&self, index: usize) -> bool {
        if self.claimed.replace(true) {
            return false;
        }
        self.links.release_all_parents();
        tracer::active().on_input_settled(CombinatorKind::Alt, index);
        true
    }

    fn settle(&self, result: Future<T>) {
        tracer::active().on_combinator_fired(CombinatorKind::Alt);
        propagate(&self.links, result);
    }
}

impl<T: 'static> Node<T> for AltNode<T> {
    fn links(&self) -> &Links<T> {
        &self.links
    }
}

macro_rules! impl_alt_args {
    ($arity:expr => $(($A:ident, $F:ident, $arg:ident, $branch:ident, $idx:tt)),+) => {
        impl<T, $($A, $F),+> AltArgs<T, ($($F,)+)> for ($(Future<$A>,)+)
        where
            T: Clone + 'static,
            $(
                $A: Clone + 'static,
                $F: FnOnce($A) -> Future<T> + 'static,
            )+
        {
            fn alt_with(self, branches: ($($F,)+)) -> Future<T> {
                let ($($arg,)+) = self;
                let ($($branch,)+) = branches;
                let node = Rc::new(AltNode::new($arity));
                let result = Future::attach(Rc::clone(&node) as Rc<dyn Node<T>>);
                $(
                    if !node.claimed.get() {
                        let branch = RefCell::new(Some($branch));
                        let weak = Rc::downgrade(&node);
                        subscribe(&$arg, $idx, node.links(), move |value: &$A| {
                            let Some(node) = weak.upgrade() else { return };
                            if !node.claim($idx) {
                                return;
                            }
                            let branch = branch.borrow_mut().take();
                            if let Some(branch) = branch {
                                node.settle(branch(value.clone()));
                            }
                        });
                    }
                )+
                result
            }
        }
    };
}

impl_alt_args!(1 => (A0, F0, a0, f0, 0));
impl_alt_args!(2 => (A0, F0, a0, f0, 0), (A1, F1, a1, f1, 1));
impl_alt_args!(3 => (A0, F0, a0, f0, 0), (A1, F1, a1, f1, 1), (A2, F2, a2, f2, 2));
impl_alt_args!(4 => (A0, F0, a0, f0, 0), (A1, F1, a1, f1, 1), (A2, F2, a2, f2, 2), (A3, F3, a3, f3, 3));
impl_alt_args!(5 => (A0, F0, a0, f0, 0), (A1, F1, a1, f1, 1), (A2, F2, a2, f2, 2), (A3, F3, a3, f3, 3), (A4, F4, a4, f4, 4));
impl_alt_args!(6 => (A0, F0, a0, f0, 0), (A1, F1, a1, f1, 1), (A2, F2, a2, f2, 2), (A3, F3, a3, f3, 3), (A4, F4, a4, f4, 4), (A5, F5, a5, f5, 5));
impl_alt_args!(7 => (A0, F0, a0, f0, 0), (A1, F1, a1, f1, 1), (A2, F2, a2, f2, 2), (A3, F3, a3, f3, 3), (A4, F4, a4, f4, 4), (A5, F5, a5, f5, 5), (A6, F6, a6, f6, 6));
impl_alt_args!(8 => (A0, F0, a0, f0, 0), (A1, F1, a1, f1, 1), (A2, F2, a2, f2, 2), (A3, F3, a3, f3, 3), (A4, F4, a4, f4, 4), (A5, F5, a5, f5, 5), (A6, F6, a6, f6, 6), (A7, F7, a7, f7, 7));
