use crate::DEFAULT_CAPACITY;

/// Options for creating an empty [`DynamicArray`](crate::DynamicArray).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayOptions {
    /// Slots allocated up front. Clamped to at least 1 when the array is built.
    pub initial_capacity: usize,
}

impl ArrayOptions {
    pub fn new(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }
}

impl Default for ArrayOptions {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl From<usize> for ArrayOptions {
    fn from(initial_capacity: usize) -> Self {
        Self::new(initial_capacity)
    }
}
