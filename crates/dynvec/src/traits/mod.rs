mod element_ops;
mod printable;
mod value;

pub use element_ops::*;
pub use printable::*;
pub use value::*;
