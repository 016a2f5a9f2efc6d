//! Positional value overrides that preserve shrink structure.

use crate::shrinkable::Shrinkable;
use std::rc::Rc;

/// Remaps a generated value into the value the caller wants evaluated.
///
/// A partial example typically substitutes part of a generated tuple and
/// passes the rest through; the replacement may even be a value the
/// arbitrary could never draw itself.
pub type PartialExample<T> = Rc<dyn Fn(&T) -> T>;

/// Decorate `shrinkable` so its exposed value is `mapper(underlying)`.
///
/// The decorator never bypasses the underlying shrink computation: its
/// shrink thunk always invokes the wrapped shrinkable's and re-wraps every
/// child with the same mapper, so the remap holds at any depth the search
/// reaches. The mapper runs once per realized node, only when that node is
/// forced out of its stream.
pub fn wrap_with_partial_example<T: Clone + 'static>(
    shrinkable: Shrinkable<T>,
    mapper: PartialExample<T>,
) -> Shrinkable<T> {
    let mapped = mapper(shrinkable.value_ref());
    Shrinkable::new(mapped, move || {
        let mapper = Rc::clone(&mapper);
        shrinkable
            .shrink()
            .map(move |child| wrap_with_partial_example(child, Rc::clone(&mapper)))
    })
}
