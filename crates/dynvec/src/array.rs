use std::{
    fmt, mem,
    ops::{Index, IndexMut},
};

use log::debug;

use crate::{
    ArrayOptions, DEFAULT_CAPACITY, Error, GROWTH_FACTOR, Result, short_type_name, unlikely,
};

/// Growable, indexable sequence of `T` with an explicit capacity.
///
/// The array owns a block of `capacity` slots. The first `len` slots hold live
/// elements, the rest hold `T::default()` and are logically absent. When a
/// full array needs one more slot, the block is reallocated at twice its
/// capacity; it never shrinks.
///
/// # Access
///
/// | Method | Out of range |
/// |--------|--------------|
/// | `get` / `get_mut` | `None` |
/// | `set` | [`Error::IndexOutOfBounds`] |
/// | `arr[i]` | panics |
/// | `get_unchecked` / `set_unchecked` | undefined behavior (`unsafe`) |
pub struct DynamicArray<T> {
    data: Box<[T]>,
    len: usize,
}

impl<T: Default> DynamicArray<T> {
    /// Creates an empty array with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_options(ArrayOptions::new(DEFAULT_CAPACITY))
    }

    /// Creates an empty array with the given options.
    pub fn with_options(options: ArrayOptions) -> Self {
        Self {
            data: alloc_slots(options.initial_capacity.max(1)),
            len: 0,
        }
    }

    /// Creates an array of `size` default values, with `max(size, 1) * 2` slots.
    ///
    /// # Panics
    /// Panics if the capacity overflows or cannot be allocated.
    pub fn with_size(size: usize) -> Self {
        match Self::try_with_size(size) {
            Ok(arr) => arr,
            Err(err) => growth_failed(err),
        }
    }

    /// Fallible [`with_size`](Self::with_size).
    pub fn try_with_size(size: usize) -> Result<Self> {
        Ok(Self {
            data: try_alloc_slots(sized_capacity(size)?)?,
            len: size,
        })
    }

    /// Appends `value` at index `len`, doubling the capacity first if the array is full.
    ///
    /// # Panics
    /// Panics if the new capacity overflows or cannot be allocated.
    pub fn push_back(&mut self, value: T) {
        if unlikely(self.is_full()) {
            self.grow();
        }
        self.place(self.len, value);
    }

    /// Fallible [`push_back`](Self::push_back). On error the array is unchanged.
    pub fn try_push_back(&mut self, value: T) -> Result<()> {
        if unlikely(self.is_full()) {
            self.try_grow()?;
        }
        self.place(self.len, value);
        Ok(())
    }

    /// Inserts `value` at index 0.
    pub fn push_front(&mut self, value: T) {
        self.insert(0, value)
    }

    /// Fallible [`push_front`](Self::push_front).
    pub fn try_push_front(&mut self, value: T) -> Result<()> {
        self.try_insert(0, value)
    }

    /// Inserts `value` at `pos`, shifting `[pos, len)` one slot to the right.
    ///
    /// A `pos` past the end is clamped to `len`, which makes this an append.
    ///
    /// # Panics
    /// Panics if the new capacity overflows or cannot be allocated.
    pub fn insert(&mut self, pos: usize, value: T) {
        if unlikely(self.is_full()) {
            self.grow();
        }
        self.place(pos.min(self.len), value);
    }

    /// Fallible [`insert`](Self::insert). On error the array is unchanged.
    pub fn try_insert(&mut self, pos: usize, value: T) -> Result<()> {
        if unlikely(self.is_full()) {
            self.try_grow()?;
        }
        self.place(pos.min(self.len), value);
        Ok(())
    }

    /// Removes the element at `pos`, shifting `[pos + 1, len)` one slot to the left.
    ///
    /// Does nothing if `pos >= len`. The vacated trailing slot is reset to
    /// `T::default()`, so the removed value is dropped right away.
    pub fn erase(&mut self, pos: usize) {
        if pos >= self.len {
            return;
        }
        self.data[pos..self.len].rotate_left(1);
        self.len -= 1;
        self.data[self.len] = T::default();
    }

    /// Writes `value` at `pos` assuming a free slot at `len`.
    #[inline]
    fn place(&mut self, pos: usize, value: T) {
        let len = self.len;
        self.data[len] = value;
        self.data[pos..=len].rotate_right(1);
        self.len = len + 1;
    }

    fn grow(&mut self) {
        if let Err(err) = self.try_grow() {
            growth_failed(err)
        }
    }

    /// Moves the live elements into a block twice the current capacity.
    ///
    /// The new block is fully allocated before anything is moved, so a failed
    /// allocation leaves the array untouched.
    fn try_grow(&mut self) -> Result<()> {
        let capacity = self.capacity();
        let new_capacity = capacity
            .checked_mul(GROWTH_FACTOR)
            .ok_or(Error::CapacityOverflow { capacity })?;

        let mut data = try_alloc_slots(new_capacity)?;
        for (dst, src) in data.iter_mut().zip(self.data[..self.len].iter_mut()) {
            mem::swap(dst, src);
        }
        self.data = data;

        debug!(
            "DynamicArray<{}> grew from {capacity} to {new_capacity} slots",
            short_type_name::<T>()
        );

        Ok(())
    }
}

impl<T> DynamicArray<T> {
    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Same as [`len`](Self::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Number of allocated slots, always `>= len`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.len == self.data.len()
    }

    /// Borrows the live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len]
    }

    /// Mutably borrows the live elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.len]
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Overwrites the live element at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.len;
        match self.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds { index, len }),
        }
    }

    /// Returns the element at `index` without bounds checking.
    ///
    /// # Safety
    /// `index` must be lower than [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        // SAFETY: the caller guarantees index < len <= capacity.
        unsafe { self.data.get_unchecked(index) }
    }

    /// Overwrites the element at `index` without bounds checking.
    ///
    /// # Safety
    /// `index` must be lower than [`len`](Self::len).
    #[inline]
    pub unsafe fn set_unchecked(&mut self, index: usize, value: T) {
        debug_assert!(index < self.len);
        // SAFETY: the caller guarantees index < len <= capacity.
        unsafe { *self.data.get_unchecked_mut(index) = value }
    }
}

impl<T: Default> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default> Clone for DynamicArray<T> {
    /// Deep-copies the live elements into a new block of the same capacity.
    fn clone(&self) -> Self {
        let mut data = alloc_slots(self.capacity());
        data[..self.len].clone_from_slice(self.as_slice());
        Self {
            data,
            len: self.len,
        }
    }

    /// The replacement block is fully populated before the current one is released,
    /// so a panicking `T::clone` leaves `self` as it was.
    fn clone_from(&mut self, source: &Self) {
        let replacement = source.clone();
        *self = replacement;
    }
}

impl<T: Default> From<Vec<T>> for DynamicArray<T> {
    /// Sized like [`with_size`](DynamicArray::with_size) for the vec's length.
    fn from(values: Vec<T>) -> Self {
        let len = values.len();
        let capacity = match sized_capacity(len) {
            Ok(capacity) => capacity,
            Err(err) => growth_failed(err),
        };
        let mut data = values;
        data.resize_with(capacity, T::default);
        Self {
            data: data.into_boxed_slice(),
            len,
        }
    }
}

impl<T: Default, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(values: [T; N]) -> Self {
        Self::from(Vec::from(values))
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let len = self.len;
        match self.get(index) {
            Some(value) => value,
            None => index_failed(index, len),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => index_failed(index, len),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Slots reserved for `len` live elements by the sized constructors.
fn sized_capacity(len: usize) -> Result<usize> {
    let capacity = len.max(1);
    capacity
        .checked_mul(GROWTH_FACTOR)
        .ok_or(Error::CapacityOverflow { capacity })
}

/// Allocates `capacity` slots, each holding `T::default()`.
fn alloc_slots<T: Default>(capacity: usize) -> Box<[T]> {
    std::iter::repeat_with(T::default).take(capacity).collect()
}

fn try_alloc_slots<T: Default>(capacity: usize) -> Result<Box<[T]>> {
    let mut slots = Vec::new();
    slots.try_reserve_exact(capacity)?;
    slots.resize_with(capacity, T::default);
    Ok(slots.into_boxed_slice())
}

#[cold]
#[inline(never)]
fn growth_failed(err: Error) -> ! {
    panic!("{err}")
}

#[cold]
#[inline(never)]
fn index_failed(index: usize, len: usize) -> ! {
    panic!("{}", Error::IndexOutOfBounds { index, len })
}
