use std::fmt::{Debug, Display};

/// Marker trait for types that can be stored, copied and rendered by a
/// [`DynamicArray`](crate::DynamicArray).
///
/// This trait is automatically implemented for any type that satisfies the
/// required bounds. No manual implementation is needed.
pub trait ArrayValue
where
    Self: Sized + Default + Clone + Debug + Display + 'static,
{
}

impl<T> ArrayValue for T where T: Sized + Default + Clone + Debug + Display + 'static {}
