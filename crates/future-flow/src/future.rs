//! Future handles and the value cells they read through.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::node::{Node, Observer};

/// A shareable handle to a value the graph will produce.
///
/// Cloning is cheap and every clone observes the same resolution. A future
/// is either pending (its cell still points at the producing node) or
/// resolved (the cell holds the value and the producer reference has been
/// released, letting the upstream subgraph be reclaimed).
pub struct Future<T> {
    cell: Rc<ValueCell<T>>,
}

impl<T> Clone for Future<T> {
    fn clone(&self) -> Self {
        Future {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T> Future<T> {
    /// Returns true once the future has resolved.
    pub fn ready(&self) -> bool {
        self.cell.state.borrow().value.is_some()
    }
}

impl<T: Clone + 'static> Future<T> {
    /// A future that is already resolved to `value`.
    pub fn from_value(value: T) -> Self {
        Future {
            cell: Rc::new(ValueCell {
                state: RefCell::new(CellState {
                    value: Some(value),
                    producer: None,
                }),
            }),
        }
    }

    /// The resolved value.
    ///
    /// # Panics
    ///
    /// Panics if the future has not resolved; check [`ready`](Self::ready)
    /// first, or use [`try_get`](Self::try_get).
    pub fn get(&self) -> T {
        match self.try_get() {
            Some(value) => value,
            None => panic!("Future::get called before the future resolved"),
        }
    }

    /// The resolved value, or `None` while pending.
    pub fn try_get(&self) -> Option<T> {
        self.cell.state.borrow().value.clone()
    }

    /// Allocate an empty cell fed by `node` and subscribe it.
    pub(crate) fn attach(node: Rc<dyn Node<T>>) -> Self {
        let cell = Rc::new(ValueCell {
            state: RefCell::new(CellState {
                value: None,
                producer: Some(Rc::clone(&node)),
            }),
        });
        let cell_dyn: Rc<dyn Observer<T>> = cell.clone();
        let child: Weak<dyn Observer<T>> = Rc::downgrade(&cell_dyn);
        node.links().connect(child);
        Future { cell }
    }

    /// The node currently responsible for producing into this cell.
    pub(crate) fn producer(&self) -> Option<Rc<dyn Node<T>>> {
        self.cell.state.borrow().producer.clone()
    }
}

impl<T: Clone + 'static> From<T> for Future<T> {
    fn from(value: T) -> Self {
        Future::from_value(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Future<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cell.state.borrow().value {
            Some(value) => f.debug_tuple("Future").field(value).finish(),
            None => write!(f, "Future(<pending>)"),
        }
    }
}

/// Terminal sink for a produced value.
struct ValueCell<T> {
    state: RefCell<CellState<T>>,
}

struct CellState<T> {
    value: Option<T>,
    producer: Option<Rc<dyn Node<T>>>,
}

impl<T: Clone + 'static> Observer<T> for ValueCell<T> {
    fn set(&self, value: &T) {
        let mut state = self.state.borrow_mut();
        if state.value.is_some() {
            return;
        }
        state.value = Some(value.clone());
        let released = state.producer.take();
        drop(state);
        drop(released);
    }

    fn retarget(&self, producer: &Rc<dyn Node<T>>) {
        let mut state = self.state.borrow_mut();
        if state.value.is_some() {
            return;
        }
        let previous = state.producer.replace(Rc::clone(producer));
        drop(state);
        drop(previous);
    }
}
