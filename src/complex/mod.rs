//! Complex-number vector container and its sorting comparison.

pub mod bench;
pub mod vector;

pub use bench::{compare_sorts, InputOrder, SortTiming};
pub use vector::ComplexVector;
