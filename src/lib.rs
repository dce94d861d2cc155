//! Fixed-length geometric vectors with operand coercion, magnitude-based
//! ordering, and a 2D point specialization.

pub mod error;
pub use error::*;

pub mod operand;
pub use operand::*;

pub mod vector;
pub use vector::*;

pub mod point;
pub use point::*;
