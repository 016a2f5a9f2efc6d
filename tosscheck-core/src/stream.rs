//! Lazy, possibly-infinite sequences used to describe shrink candidates.

/// A lazy sequence of values of type `T`.
///
/// Streams may be finite or infinite and support a single traversal.
/// Restartability is not part of the contract: anything that needs to be
/// traversed more than once (shrink trees in particular) recomputes a fresh
/// stream from a stored thunk instead of rewinding an existing one.
pub struct Stream<T> {
    iter: Box<dyn Iterator<Item = T>>,
}

impl<T: 'static> Stream<T> {
    /// The empty stream.
    pub fn nil() -> Self {
        Stream {
            iter: Box::new(std::iter::empty()),
        }
    }

    /// Build a stream over an existing iterator.
    pub fn of<I>(iter: I) -> Self
    where
        I: Iterator<Item = T> + 'static,
    {
        Stream {
            iter: Box::new(iter),
        }
    }

    /// Transform each element as it is realized.
    ///
    /// `f` runs at most once per realized element and never during
    /// construction.
    pub fn map<U, F>(self, f: F) -> Stream<U>
    where
        U: 'static,
        F: FnMut(T) -> U + 'static,
    {
        Stream {
            iter: Box::new(self.iter.map(f)),
        }
    }

    /// Lazily skip elements that do not satisfy `pred`.
    ///
    /// If the underlying stream is infinite and no element ever matches,
    /// traversal never terminates; bounding the search is the caller's
    /// responsibility.
    pub fn filter<F>(self, pred: F) -> Stream<T>
    where
        F: FnMut(&T) -> bool + 'static,
    {
        Stream {
            iter: Box::new(self.iter.filter(pred)),
        }
    }

    /// Logically append `other` after `self`.
    ///
    /// `other` is not pulled from until `self` is exhausted, so a deferred
    /// stream (see [`make_lazy`]) joined on the right stays unevaluated as
    /// long as the left side keeps producing.
    pub fn join(self, other: Stream<T>) -> Stream<T> {
        Stream {
            iter: Box::new(self.iter.chain(other.iter)),
        }
    }
}

impl<T> Iterator for Stream<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }
}

/// Defer stream construction until the first traversal step.
///
/// The thunk is not invoked during construction. This is what keeps shrink
/// trees from eagerly materializing exponential state: a recursive shrink
/// family is described by a thunk and only expanded if the search actually
/// reaches it.
pub fn make_lazy<T, F>(thunk: F) -> Stream<T>
where
    T: 'static,
    F: FnOnce() -> Stream<T> + 'static,
{
    let mut thunk = Some(thunk);
    let mut forced: Option<Box<dyn Iterator<Item = T>>> = None;
    Stream::of(std::iter::from_fn(move || {
        let iter = match forced.as_mut() {
            Some(iter) => iter,
            None => {
                let stream = match thunk.take() {
                    Some(thunk) => thunk(),
                    None => Stream::nil(),
                };
                forced.insert(stream.iter)
            }
        };
        iter.next()
    }))
}
