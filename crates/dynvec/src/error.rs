use std::{collections::TryReserveError, result};

use thiserror::Error;

use crate::ElementWiseOp;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for dynvec operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Alloc(#[from] TryReserveError),

    #[error("Capacity overflow: cannot grow beyond {capacity} slots")]
    CapacityOverflow { capacity: usize },

    #[error("Index out of bounds: index: {index}, len: {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Arrays must be the same length for {op}: left: {left}, right: {right}")]
    LengthMismatch {
        op: ElementWiseOp,
        left: usize,
        right: usize,
    },
}
