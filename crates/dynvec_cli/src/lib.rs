//! Interactive menu over a collection of [`dynvec::DynamicArray`]s holding
//! different element types.

mod action;
mod any_array;
mod config;
mod error;
mod kind;
mod session;

pub use action::*;
pub use any_array::*;
pub use config::*;
pub use error::*;
pub use kind::*;
pub use session::*;
