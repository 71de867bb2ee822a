use std::{io, result};

use dynvec::ElementWiseOp;
use thiserror::Error;

use crate::ElementKind;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for the interactive menu.
///
/// Everything except I/O failures is reported to the user and the menu keeps
/// running.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] io::Error),
    #[error(transparent)]
    Array(#[from] dynvec::Error),

    #[error("Unexpected end of input")]
    EndOfInput,
    #[error("Invalid menu choice: {0:?}")]
    InvalidChoice(String),
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),
    #[error("Invalid {kind} value: {input:?}")]
    InvalidValue { kind: ElementKind, input: String },
    #[error("No array is selected")]
    NoCurrentArray,
    #[error("No array at index {index} ({count} in total)")]
    NoSuchArray { index: usize, count: usize },
    #[error("Type mismatch: {left} and {right} arrays cannot be combined")]
    TypeMismatch {
        left: ElementKind,
        right: ElementKind,
    },
    #[error("Unsupported operation: no {op} for {kind} arrays")]
    UnsupportedOperation { op: ElementWiseOp, kind: ElementKind },
}

impl Error {
    /// Whether the menu can report this error and carry on.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::IO(_) | Self::EndOfInput)
    }
}
