//! Iterators over a [`Steque`](crate::Steque).
//!
//! Both iterators run from the back (the end `push`/`pop` work on) towards the
//! front (the end `enqueue` inserts at).

use core::fmt;
use core::iter::FusedIterator;

use crate::Steque;
use crate::error::{Result, StequeError};
use crate::ring::RingBuffer;

/// Borrowing iterator returned by [`Steque::iter`].
///
/// Yields `&T` from the most recently pushed element to the front. Each call to
/// `iter()` starts a fresh traversal; the shared borrow keeps the steque from
/// being mutated while this iterator is alive.
///
/// [`Iter::rev`](Iterator::rev) walks the logical front-to-back order instead.
pub struct Iter<'a, T> {
    ring: &'a RingBuffer<T>,
    /// Logical index of the next element `next_back` returns.
    front: usize,
    /// One past the logical index of the next element `next` returns.
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(ring: &'a RingBuffer<T>) -> Self {
        Self {
            ring,
            front: 0,
            back: ring.len(),
        }
    }

    /// Removal through an iterator is not part of the steque contract.
    ///
    /// Always returns [`StequeError::UnsupportedOperation`]; the iterator and
    /// the steque are left as they were.
    pub fn remove(&mut self) -> Result<()> {
        Err(StequeError::UnsupportedOperation)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.ring.get(self.back)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let item = self.ring.get(self.front);
        self.front += 1;
        item
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            ring: self.ring,
            front: self.front,
            back: self.back,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

/// Owning iterator returned by [`Steque::into_iter`].
///
/// Pops elements off the back until the steque is empty. No shrinking happens
/// while draining.
pub struct IntoIter<T> {
    ring: RingBuffer<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(ring: RingBuffer<T>) -> Self {
        Self { ring }
    }

    /// See [`Iter::remove`].
    pub fn remove(&mut self) -> Result<()> {
        Err(StequeError::UnsupportedOperation)
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.ring.pop_back()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.ring.len(), Some(self.ring.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &self.ring.len())
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a Steque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for Steque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.into_ring())
    }
}
