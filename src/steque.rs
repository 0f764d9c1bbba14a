//! Stack-ended queue on a resizable ring buffer.
//!
//! Provides [`Steque`]: `push`/`pop` work on the back like a stack, `enqueue`
//! inserts at the front like a queue. There is deliberately no way to remove
//! from the front.
//!
//! # Capacity policy
//! Storage starts at the configured minimum (10 slots by default). An insert
//! into a full ring first doubles the capacity. A `pop` that leaves
//! `len == capacity / 4` (and `len > 0`) halves it, but never below the
//! minimum. The gap between the two thresholds keeps alternating push/pop
//! near a boundary from resizing on every call.

use core::fmt;

use tracing::{debug, trace};

use crate::error::{Result, StequeError};
use crate::iter::Iter;
use crate::ring::RingBuffer;

/// A stack-ended queue.
///
/// Logical order runs from the front (where [`enqueue`](Steque::enqueue)
/// inserts) to the back (where [`push`](Steque::push) inserts and
/// [`pop`](Steque::pop) removes).
///
/// # Examples
/// ```rust
/// use steque::Steque;
///
/// let mut s = Steque::new();
/// s.enqueue(1);
/// s.enqueue(2);
/// s.push(3);
///
/// // back-to-front
/// assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
/// assert_eq!(s.pop(), Ok(3));
/// assert_eq!(s.len(), 2);
/// ```
#[derive(Clone)]
pub struct Steque<T> {
    ring: RingBuffer<T>,
    min_capacity: usize,
}

impl<T> Steque<T> {
    /// Capacity of a steque built with [`Steque::new`], and the floor it never
    /// shrinks below.
    pub const MIN_CAPACITY: usize = 10;

    /// Creates an empty steque with [`MIN_CAPACITY`](Steque::MIN_CAPACITY) slots.
    pub fn new() -> Self {
        Self::with_min_capacity(Self::MIN_CAPACITY)
    }

    /// Creates an empty steque whose initial and minimum capacity is
    /// `min_capacity` (raised to 1 if zero).
    pub fn with_min_capacity(min_capacity: usize) -> Self {
        let min_capacity = min_capacity.max(1);
        Self {
            ring: RingBuffer::with_capacity(min_capacity),
            min_capacity,
        }
    }

    /// Returns the number of elements in the steque.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Returns `true` if the steque holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.ring.len() == 0
    }

    /// Returns the number of slots currently allocated.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Returns the capacity floor used for construction and shrinking.
    #[inline(always)]
    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    /// Inserts `item` at the back. Grows the storage first if it is full.
    pub fn push(&mut self, item: T) {
        self.reserve_one();
        self.ring.push_back(item);
    }

    /// Inserts `item` at the front. Grows the storage first if it is full.
    pub fn enqueue(&mut self, item: T) {
        self.reserve_one();
        self.ring.push_front(item);
    }

    /// Like [`push`](Steque::push), for callers holding a possibly absent value.
    ///
    /// # Errors
    /// [`StequeError::InvalidArgument`] if `item` is `None`; nothing is inserted.
    pub fn try_push(&mut self, item: Option<T>) -> Result<()> {
        let Some(item) = item else {
            debug!(len = self.len(), "rejected absent element on push");
            return Err(StequeError::InvalidArgument);
        };
        self.push(item);
        Ok(())
    }

    /// Like [`enqueue`](Steque::enqueue), for callers holding a possibly absent value.
    ///
    /// # Errors
    /// [`StequeError::InvalidArgument`] if `item` is `None`; nothing is inserted.
    pub fn try_enqueue(&mut self, item: Option<T>) -> Result<()> {
        let Some(item) = item else {
            debug!(len = self.len(), "rejected absent element on enqueue");
            return Err(StequeError::InvalidArgument);
        };
        self.enqueue(item);
        Ok(())
    }

    /// Removes and returns the back element (the one `push` inserted last, or
    /// the oldest `enqueue` if nothing was pushed).
    ///
    /// May halve the storage afterwards; see the module docs.
    ///
    /// # Errors
    /// [`StequeError::EmptyContainer`] if the steque is empty.
    pub fn pop(&mut self) -> Result<T> {
        let Some(item) = self.ring.pop_back() else {
            debug!("pop on empty steque");
            return Err(StequeError::EmptyContainer);
        };
        let len = self.ring.len();
        if len > 0 && len == self.ring.capacity() / 4 {
            self.shrink();
        }
        Ok(item)
    }

    /// Returns the element [`pop`](Steque::pop) would return, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|i| self.ring.get(i))
    }

    /// Returns the front element (the one `enqueue` inserted last, or the
    /// oldest `push` if nothing was enqueued).
    pub fn peek_front(&self) -> Option<&T> {
        self.ring.get(0)
    }

    /// Drops every element and returns the storage to the minimum capacity.
    pub fn clear(&mut self) {
        self.ring = RingBuffer::with_capacity(self.min_capacity);
    }

    /// Returns a back-to-front iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.ring)
    }

    pub(crate) fn into_ring(self) -> RingBuffer<T> {
        self.ring
    }

    #[inline(always)]
    fn reserve_one(&mut self) {
        if self.ring.is_full() {
            self.grow();
        }
    }

    /// Cold path: doubles the capacity.
    #[inline(never)]
    fn grow(&mut self) {
        let new_capacity = self.ring.capacity() * 2;
        self.resize(new_capacity);
    }

    /// Halves the capacity, clamped to the minimum.
    #[inline(never)]
    fn shrink(&mut self) {
        let capacity = self.ring.capacity();
        let target = (capacity / 2).max(self.min_capacity);
        if target < capacity {
            self.resize(target);
        }
    }

    fn resize(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.ring.len());
        trace!(
            old_capacity = self.ring.capacity(),
            new_capacity,
            len = self.ring.len(),
            "steque resized"
        );
        self.ring.relocate(new_capacity);
    }
}

impl<T> Default for Steque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Steque<T> {
    /// Lists elements front to back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().rev()).finish()
    }
}

impl<T: PartialEq> PartialEq for Steque<T> {
    /// Compares elements in logical order; capacity is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Steque<T> {}

impl<T> Extend<T> for Steque<T> {
    /// Pushes each item in turn, so the last item ends up on the back.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Steque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut steque = Self::new();
        steque.extend(iter);
        steque
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Steque<T> {
    /// Serializes as a sequence in front-to-back order.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter().rev())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Steque<T> {
    /// Rebuilds the steque by pushing the items in sequence order.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}
