//! Growable buffer with a fixed, observable growth policy.
//!
//! `Buf<T>` is a thin owner over a `Vec<T>` that decides its own capacity
//! instead of leaving it to the allocator: whenever an append would not fit,
//! the logical capacity becomes `max(2 * capacity + 1, required)`. Growing by
//! roughly doubling keeps pushes amortized O(1).
//!
//! Growth goes through `try_reserve_exact`, so a refused allocation comes back
//! as an [`AllocError`] rather than aborting the process.

use std::fmt;
use std::ops::Index;
use std::slice;

use crate::error::AllocError;

/// A type-generic dynamic array.
pub struct Buf<T> {
    items: Vec<T>,
    /// Logical capacity. Always `<= items.capacity()` and `>= items.len()`.
    cap: usize,
}

impl<T> Buf<T> {
    /// Create an empty buffer. Does not allocate.
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            cap: 0,
        }
    }

    /// Number of elements stored.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements the buffer can hold before it has to grow again.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Append `value` at the end, growing the storage if needed.
    pub fn push(&mut self, value: T) -> Result<(), AllocError> {
        self.reserve(1)?;
        self.items.push(value);
        Ok(())
    }

    /// Make room for at least `additional` more elements.
    ///
    /// Does nothing when they already fit. Otherwise the capacity grows to
    /// `max(2 * capacity + 1, len + additional)`.
    pub fn reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        let required = self
            .len()
            .checked_add(additional)
            .ok_or(AllocError::CapacityOverflow {
                requested: additional,
            })?;
        if required <= self.cap {
            return Ok(());
        }

        let doubled = self
            .cap
            .checked_mul(2)
            .and_then(|c| c.checked_add(1))
            .ok_or(AllocError::CapacityOverflow {
                requested: additional,
            })?;
        let new_cap = doubled.max(required);
        debug_assert!(required <= new_cap);

        self.items.try_reserve_exact(new_cap - self.items.len())?;
        self.cap = new_cap;
        Ok(())
    }

    /// Free the storage and reset to empty. Safe on an already empty buffer.
    pub fn release(&mut self) {
        self.items = Vec::new();
        self.cap = 0;
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Copy> Buf<T> {
    /// Append every element of `values`, growing at most once.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), AllocError> {
        self.reserve(values.len())?;
        self.items.extend_from_slice(values);
        Ok(())
    }
}

impl<T> Default for Buf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Buf<T> {
    /// Adopt an existing vector. The capacity starts out equal to its length.
    fn from(items: Vec<T>) -> Self {
        let cap = items.len();
        Self { items, cap }
    }
}

impl<T: Clone> Clone for Buf<T> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.cap);
        items.extend_from_slice(&self.items);
        Self {
            items,
            cap: self.cap,
        }
    }
}

impl<T: PartialEq> PartialEq for Buf<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for Buf<T> {}

impl<T: fmt::Debug> fmt::Debug for Buf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buf")
            .field("len", &self.len())
            .field("cap", &self.cap)
            .field("items", &self.items)
            .finish()
    }
}

impl<T> Index<usize> for Buf<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a Buf<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
