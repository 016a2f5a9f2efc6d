//! Core generation and shrinking engine for tosscheck property-based
//! testing.
//!
//! This crate provides the fundamental building blocks of a property run:
//! composable arbitraries, lazily shrinkable values, a deterministic seeded
//! toss sequence, and the greedy shrink-search driver that turns a failing
//! draw into a locally-minimal counterexample.

pub mod arbitrary;
pub mod array;
pub mod error;
pub mod integer;
pub mod partial;
pub mod random;
pub mod runner;
pub mod shrinkable;
pub mod stream;
pub mod subarray;
pub mod tosser;
pub mod tuple;

// Re-export the main types
pub use arbitrary::*;
pub use array::{array, ArrayArbitrary, ArrayConstraints};
pub use error::*;
pub use integer::{integer, IntegerArbitrary};
pub use partial::*;
pub use random::*;
pub use runner::*;
pub use shrinkable::*;
pub use stream::*;
pub use subarray::{bounded_subarray, shuffled_subarray, subarray, SubarrayArbitrary};
pub use tosser::*;
pub use tuple::*;
