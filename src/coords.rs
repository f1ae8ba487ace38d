//! Dimensions of things being laid out.

mod size;

pub use size::Size;
