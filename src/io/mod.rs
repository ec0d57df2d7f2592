//! Input/output helpers.
//!
//! - sweep exports to CSV (`export`)
//! - curve JSON read/write (`curve`)
//!
//! Parameter files are read by `crate::config`.

pub mod curve;
pub mod export;

pub use curve::*;
pub use export::*;
