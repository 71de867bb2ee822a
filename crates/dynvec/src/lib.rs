#![doc = include_str!("../README.md")]

mod array;
mod diagnostic;
mod error;
mod hints;
mod ops;
mod options;
mod render;
mod traits;

pub use array::*;
pub use diagnostic::*;
pub use error::*;
pub use ops::*;
pub use options::*;
pub use traits::*;

use hints::unlikely;

/// Number of slots allocated by [`DynamicArray::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Factor applied to the capacity when a full array needs room for one more element.
pub const GROWTH_FACTOR: usize = 2;
