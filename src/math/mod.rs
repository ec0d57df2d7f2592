//! Mathematical utilities: Gaussian peak kernels and sampling grids.

pub mod grid;
pub mod peak;

pub use grid::*;
pub use peak::*;
