use std::ops::{Add, Mul};

use log::debug;

use crate::{
    DiagnosticSink, DynamicArray, ElementAdd, ElementMul, ElementWiseOp, Error, LogSink, Result,
    short_type_name, unlikely,
};

/// Element-wise arithmetic.
///
/// Each operation comes in three flavors:
///
/// | Method | Length mismatch |
/// |--------|-----------------|
/// | `add` / `multiply` | empty result, diagnostic logged through [`LogSink`] |
/// | `add_with` / `multiply_with` | empty result, diagnostic sent to the given sink |
/// | `try_add` / `try_multiply` | `Err(Error::LengthMismatch)` |
///
/// Inputs are never mutated.
impl<T> DynamicArray<T> {
    pub fn add<U>(&self, other: &DynamicArray<U>) -> DynamicArray<T::Output>
    where
        T: ElementAdd<U>,
        T::Output: Default,
    {
        self.add_with(other, &LogSink)
    }

    pub fn add_with<U, S>(&self, other: &DynamicArray<U>, sink: &S) -> DynamicArray<T::Output>
    where
        T: ElementAdd<U>,
        T::Output: Default,
        S: DiagnosticSink + ?Sized,
    {
        self.try_add(other)
            .unwrap_or_else(|err| self.degrade::<U, _, _>(err, sink))
    }

    pub fn try_add<U>(&self, other: &DynamicArray<U>) -> Result<DynamicArray<T::Output>>
    where
        T: ElementAdd<U>,
        T::Output: Default,
    {
        self.zip_with(other, ElementWiseOp::Add, <T as ElementAdd<U>>::element_add)
    }

    pub fn multiply<U>(&self, other: &DynamicArray<U>) -> DynamicArray<T::Output>
    where
        T: ElementMul<U>,
        T::Output: Default,
    {
        self.multiply_with(other, &LogSink)
    }

    pub fn multiply_with<U, S>(
        &self,
        other: &DynamicArray<U>,
        sink: &S,
    ) -> DynamicArray<T::Output>
    where
        T: ElementMul<U>,
        T::Output: Default,
        S: DiagnosticSink + ?Sized,
    {
        self.try_multiply(other)
            .unwrap_or_else(|err| self.degrade::<U, _, _>(err, sink))
    }

    pub fn try_multiply<U>(&self, other: &DynamicArray<U>) -> Result<DynamicArray<T::Output>>
    where
        T: ElementMul<U>,
        T::Output: Default,
    {
        self.zip_with(other, ElementWiseOp::Multiply, <T as ElementMul<U>>::element_mul)
    }

    fn zip_with<U, O, F>(
        &self,
        other: &DynamicArray<U>,
        op: ElementWiseOp,
        f: F,
    ) -> Result<DynamicArray<O>>
    where
        O: Default,
        F: Fn(&T, &U) -> O,
    {
        let (left, right) = (self.len(), other.len());
        if unlikely(left != right) {
            return Err(Error::LengthMismatch { op, left, right });
        }

        let mut result = DynamicArray::with_size(left);
        for (slot, (a, b)) in result
            .as_mut_slice()
            .iter_mut()
            .zip(self.as_slice().iter().zip(other.as_slice()))
        {
            *slot = f(a, b);
        }
        Ok(result)
    }

    #[cold]
    fn degrade<U, O, S>(&self, err: Error, sink: &S) -> DynamicArray<O>
    where
        O: Default,
        S: DiagnosticSink + ?Sized,
    {
        debug!(
            "DynamicArray<{}> with DynamicArray<{}> degraded to an empty result",
            short_type_name::<T>(),
            short_type_name::<U>()
        );
        sink.report(&err);
        DynamicArray::new()
    }
}

impl<T, U> Add<&DynamicArray<U>> for &DynamicArray<T>
where
    T: ElementAdd<U>,
    T::Output: Default,
{
    type Output = DynamicArray<T::Output>;

    fn add(self, rhs: &DynamicArray<U>) -> Self::Output {
        DynamicArray::add(self, rhs)
    }
}

impl<T, U> Mul<&DynamicArray<U>> for &DynamicArray<T>
where
    T: ElementMul<U>,
    T::Output: Default,
{
    type Output = DynamicArray<T::Output>;

    fn mul(self, rhs: &DynamicArray<U>) -> Self::Output {
        DynamicArray::multiply(self, rhs)
    }
}
