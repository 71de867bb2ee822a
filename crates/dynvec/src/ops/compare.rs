use crate::DynamicArray;

impl<T> DynamicArray<T> {
    /// Compares the live elements of both arrays in index order.
    ///
    /// Arrays of different lengths are unequal without any element being
    /// inspected. Two empty arrays are equal.
    pub fn equals<U>(&self, other: &DynamicArray<U>) -> bool
    where
        T: PartialEq<U>,
    {
        if self.len() != other.len() {
            return false;
        }
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a == b)
    }
}

impl<T, U> PartialEq<DynamicArray<U>> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &DynamicArray<U>) -> bool {
        self.equals(other)
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T, U> PartialEq<[U]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}
