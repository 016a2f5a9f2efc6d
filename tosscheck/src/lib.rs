//! Tosscheck property-based testing library.
//!
//! This is the main entry point for the tosscheck library, re-exporting the
//! generation-and-shrinking core: arbitraries, shrinkable values, the seeded
//! toss sequence, and the check driver.

pub use tosscheck_core::*;
