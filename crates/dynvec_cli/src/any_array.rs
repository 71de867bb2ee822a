use std::str::FromStr;

use dynvec::{ArrayValue, DiagnosticSink, DynamicArray, ElementWiseOp};

use crate::{ElementKind, Error, Result};

/// A [`DynamicArray`] of one of the element types the menu supports.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyArray {
    Int(DynamicArray<i32>),
    Long(DynamicArray<i64>),
    Float(DynamicArray<f32>),
    Double(DynamicArray<f64>),
    Char(DynamicArray<char>),
    Text(DynamicArray<String>),
}

/// Runs `$body` with `$arr` bound to the inner array, whatever its element type.
macro_rules! with_array {
    ($array:expr, $arr:ident => $body:expr) => {
        match $array {
            AnyArray::Int($arr) => $body,
            AnyArray::Long($arr) => $body,
            AnyArray::Float($arr) => $body,
            AnyArray::Double($arr) => $body,
            AnyArray::Char($arr) => $body,
            AnyArray::Text($arr) => $body,
        }
    };
}

/// Runs `$body` with both inner arrays bound when the element types match.
macro_rules! with_pair {
    ($left:expr, $right:expr, ($a:ident, $b:ident) => $body:expr, $text:ident => $text_body:expr) => {
        match ($left, $right) {
            (AnyArray::Int($a), AnyArray::Int($b)) => $body,
            (AnyArray::Long($a), AnyArray::Long($b)) => $body,
            (AnyArray::Float($a), AnyArray::Float($b)) => $body,
            (AnyArray::Double($a), AnyArray::Double($b)) => $body,
            (AnyArray::Char($a), AnyArray::Char($b)) => $body,
            (AnyArray::Text($a), AnyArray::Text($b)) => {
                let $text = ($a, $b);
                $text_body
            }
            (left, right) => Err(Error::TypeMismatch {
                left: left.kind(),
                right: right.kind(),
            }),
        }
    };
}

impl AnyArray {
    /// Creates an array of `kind`. A `size` of 0 uses the empty constructor,
    /// anything else the sized one, which fails if the slots cannot be allocated.
    pub fn new(kind: ElementKind, size: usize) -> Result<Self> {
        Ok(match kind {
            ElementKind::Int => Self::Int(build(size)?),
            ElementKind::Long => Self::Long(build(size)?),
            ElementKind::Float => Self::Float(build(size)?),
            ElementKind::Double => Self::Double(build(size)?),
            ElementKind::Char => Self::Char(build(size)?),
            ElementKind::Text => Self::Text(build(size)?),
        })
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Int(_) => ElementKind::Int,
            Self::Long(_) => ElementKind::Long,
            Self::Float(_) => ElementKind::Float,
            Self::Double(_) => ElementKind::Double,
            Self::Char(_) => ElementKind::Char,
            Self::Text(_) => ElementKind::Text,
        }
    }

    pub fn len(&self) -> usize {
        with_array!(self, arr => arr.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        with_array!(self, arr => arr.capacity())
    }

    /// Parses `raw` as this array's element type and appends it.
    pub fn push_back(&mut self, raw: &str) -> Result<()> {
        let kind = self.kind();
        with_array!(self, arr => arr.try_push_back(parse_value(raw, kind)?)?);
        Ok(())
    }

    /// Parses `raw` as this array's element type and prepends it.
    pub fn push_front(&mut self, raw: &str) -> Result<()> {
        let kind = self.kind();
        with_array!(self, arr => arr.try_push_front(parse_value(raw, kind)?)?);
        Ok(())
    }

    /// Parses `raw` and inserts it at `pos`, appending when `pos` is past the end.
    pub fn insert(&mut self, pos: usize, raw: &str) -> Result<()> {
        let kind = self.kind();
        with_array!(self, arr => arr.try_insert(pos, parse_value(raw, kind)?)?);
        Ok(())
    }

    /// Removes the element at `pos`. Returns `false` if there was none.
    pub fn erase(&mut self, pos: usize) -> bool {
        with_array!(self, arr => {
            let len = arr.len();
            arr.erase(pos);
            arr.len() != len
        })
    }

    pub fn render(&self) -> String {
        with_array!(self, arr => arr.to_string())
    }

    /// Element-wise sum, rendered. Mismatched lengths render as `[]` and are
    /// reported to `sink`.
    pub fn add(&self, other: &AnyArray, sink: &dyn DiagnosticSink) -> Result<String> {
        with_pair!(self, other,
            (a, b) => Ok(a.add_with(b, sink).to_string()),
            text => Ok(text.0.add_with(text.1, sink).to_string())
        )
    }

    /// Element-wise product, rendered. Strings cannot be multiplied.
    pub fn multiply(&self, other: &AnyArray, sink: &dyn DiagnosticSink) -> Result<String> {
        with_pair!(self, other,
            (a, b) => Ok(a.multiply_with(b, sink).to_string()),
            _text => Err(Error::UnsupportedOperation {
                op: ElementWiseOp::Multiply,
                kind: ElementKind::Text,
            })
        )
    }

    pub fn equals(&self, other: &AnyArray) -> Result<bool> {
        with_pair!(self, other,
            (a, b) => Ok(a.equals(b)),
            text => Ok(text.0.equals(text.1))
        )
    }
}

fn build<T: ArrayValue>(size: usize) -> Result<DynamicArray<T>> {
    if size == 0 {
        Ok(DynamicArray::new())
    } else {
        Ok(DynamicArray::try_with_size(size)?)
    }
}

/// Numbers ignore surrounding whitespace, strings are taken verbatim.
/// A char is trimmed unless it is itself whitespace.
fn parse_value<T>(raw: &str, kind: ElementKind) -> Result<T>
where
    T: ArrayValue + FromStr,
{
    let input = match kind {
        ElementKind::Text => raw,
        ElementKind::Char if raw.trim().is_empty() => raw,
        _ => raw.trim(),
    };
    input.parse().map_err(|_| Error::InvalidValue {
        kind,
        input: raw.to_string(),
    })
}
