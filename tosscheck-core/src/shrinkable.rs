//! A produced value paired with its lazy tree of smaller candidates.

use crate::stream::Stream;
use std::rc::Rc;

/// A generated value together with a lazily-computed sequence of strictly
/// smaller candidate values.
///
/// The shrink thunk may be invoked any number of times; each call re-derives
/// the same logical sequence from scratch, so two consumers never share
/// iterator position. Arbitraries are responsible for keeping every shrink
/// path finite in depth (the sequence at a single level may be wide); the
/// search driver relies on that as a precondition.
pub struct Shrinkable<T> {
    value: T,
    shrink: Rc<dyn Fn() -> Stream<Shrinkable<T>>>,
}

impl<T: Clone> Clone for Shrinkable<T> {
    fn clone(&self) -> Self {
        Shrinkable {
            value: self.value.clone(),
            shrink: Rc::clone(&self.shrink),
        }
    }
}

impl<T: Clone + 'static> Shrinkable<T> {
    /// Build a shrinkable from a value and a shrink thunk.
    pub fn new<F>(value: T, shrink: F) -> Self
    where
        F: Fn() -> Stream<Shrinkable<T>> + 'static,
    {
        Shrinkable {
            value,
            shrink: Rc::new(shrink),
        }
    }

    /// A shrinkable with no smaller candidates.
    pub fn terminal(value: T) -> Self {
        Shrinkable {
            value,
            shrink: Rc::new(|| Stream::nil()),
        }
    }

    /// The held value, cloned on read.
    ///
    /// Consumers receive their own copy; mutating it cannot corrupt the
    /// values stored inside the shrink tree.
    pub fn value(&self) -> T {
        self.value.clone()
    }

    /// Borrow the held value without cloning.
    pub fn value_ref(&self) -> &T {
        &self.value
    }

    /// Recompute the stream of smaller candidates.
    pub fn shrink(&self) -> Stream<Shrinkable<T>> {
        (self.shrink)()
    }

    /// Remap the exposed value, and lazily every descendant's value, through
    /// `f`. The shrink relation itself is untouched.
    pub fn map<U, F>(&self, f: Rc<F>) -> Shrinkable<U>
    where
        U: Clone + 'static,
        F: Fn(&T) -> U + 'static,
    {
        let mapped = f(&self.value);
        let inner = self.clone();
        Shrinkable::new(mapped, move || {
            let f = Rc::clone(&f);
            inner.shrink().map(move |child| child.map(Rc::clone(&f)))
        })
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Shrinkable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shrinkable")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
