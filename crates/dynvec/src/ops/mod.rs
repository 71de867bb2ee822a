use std::fmt;

mod arithmetic;
mod compare;

/// Element-wise binary operation, named in length-mismatch diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementWiseOp {
    Add,
    Multiply,
}

impl fmt::Display for ElementWiseOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "addition",
            Self::Multiply => "multiplication",
        })
    }
}
