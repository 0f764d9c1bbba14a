//! Fixed-capacity ring buffer backing [`Steque`](crate::Steque).
//!
//! Slots are `Option<T>`: `None` marks an empty slot, so a removal is a plain
//! [`Option::take`] and never leaves a stale value behind. Capacity is not
//! restricted to powers of two, so wrap-around uses `%` rather than a bitmask.
//! Every index computation goes through [`RingBuffer::wrap_add`] or
//! [`RingBuffer::wrap_sub`].

/// A ring of `capacity` slots with a `head` cursor (logical front), a `tail`
/// cursor (one past the logical back) and a live-element counter.
///
/// Logical index `i` lives in slot `wrap_add(head, i)`.
#[derive(Clone)]
pub(crate) struct RingBuffer<T> {
    slots: Box<[Option<T>]>,
    head: usize,
    tail: usize,
    len: usize,
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    core::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> RingBuffer<T> {
    /// Creates an empty ring with exactly `capacity` slots.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "RingBuffer capacity must be non-zero");
        Self {
            slots: empty_slots(capacity),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub(crate) fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Physical slot `add` positions after `idx`, wrapping at the end of storage.
    #[inline(always)]
    fn wrap_add(&self, idx: usize, add: usize) -> usize {
        (idx + add) % self.capacity()
    }

    /// Physical slot `sub` positions before `idx`, wrapping at the start of storage.
    /// `sub` must not exceed the capacity.
    #[inline(always)]
    fn wrap_sub(&self, idx: usize, sub: usize) -> usize {
        debug_assert!(sub <= self.capacity());
        (idx + self.capacity() - sub) % self.capacity()
    }

    /// Writes `item` at `tail` and advances `tail`. The ring must not be full.
    pub(crate) fn push_back(&mut self, item: T) {
        debug_assert!(!self.is_full(), "push_back on a full ring");
        debug_assert!(self.slots[self.tail].is_none());
        self.slots[self.tail] = Some(item);
        self.tail = self.wrap_add(self.tail, 1);
        self.len += 1;
    }

    /// Moves `head` back one slot and writes `item` there. The ring must not be full.
    pub(crate) fn push_front(&mut self, item: T) {
        debug_assert!(!self.is_full(), "push_front on a full ring");
        self.head = self.wrap_sub(self.head, 1);
        debug_assert!(self.slots[self.head].is_none());
        self.slots[self.head] = Some(item);
        self.len += 1;
    }

    /// Takes the element just before `tail`, leaving its slot empty.
    pub(crate) fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let idx = self.wrap_sub(self.tail, 1);
        let item = self.slots[idx].take();
        debug_assert!(item.is_some(), "occupied slot was empty");
        self.tail = idx;
        self.len -= 1;
        item
    }

    /// Shared reference to the element at logical index `index` (0 is the front).
    #[inline(always)]
    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            self.slots[self.wrap_add(self.head, index)].as_ref()
        } else {
            None
        }
    }

    /// Moves every live element into fresh storage of `new_capacity` slots.
    ///
    /// Elements land at indices `0..len` in logical order; afterwards `head` is
    /// 0 and `tail` is `len` (wrapped to 0 when the new ring is exactly full).
    ///
    /// # Panics
    /// Panics if `new_capacity` is zero or smaller than the live element count.
    pub(crate) fn relocate(&mut self, new_capacity: usize) {
        assert!(
            new_capacity > 0 && new_capacity >= self.len,
            "relocate to {new_capacity} slots would drop live elements (len {})",
            self.len
        );
        let mut fresh = empty_slots(new_capacity);
        for (i, slot) in fresh.iter_mut().take(self.len).enumerate() {
            let from = self.wrap_add(self.head, i);
            *slot = self.slots[from].take();
        }
        self.slots = fresh;
        self.head = 0;
        self.tail = self.wrap_add(0, self.len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logical<T: Clone>(ring: &RingBuffer<T>) -> Vec<T> {
        (0..ring.len()).filter_map(|i| ring.get(i).cloned()).collect()
    }

    #[test]
    fn test_ring_push_front_wraps_head() {
        let mut r = RingBuffer::with_capacity(4);
        r.push_front(1);
        assert_eq!(r.head, 3);
        r.push_front(2);
        assert_eq!(r.head, 2);
        r.push_back(3);
        assert_eq!(r.tail, 1);
        assert_eq!(logical(&r), vec![2, 1, 3]);
    }

    #[test]
    fn test_ring_pop_back_wraps_tail() {
        let mut r = RingBuffer::with_capacity(3);
        r.push_front('a');
        r.push_front('b');
        // tail is still 0; the back element sits in the last slot
        assert_eq!(r.pop_back(), Some('a'));
        assert_eq!(r.tail, 2);
        assert_eq!(r.pop_back(), Some('b'));
        assert_eq!(r.pop_back(), None);
        assert_eq!(r.len(), 0);
    }

    #[test]
    fn test_ring_pop_back_clears_slot() {
        let mut r = RingBuffer::with_capacity(2);
        r.push_back(String::from("x"));
        r.pop_back();
        assert!(r.slots.iter().all(Option::is_none));
    }

    #[test]
    fn test_ring_full_detection() {
        let mut r = RingBuffer::with_capacity(2);
        assert!(!r.is_full());
        r.push_back(1);
        r.push_front(0);
        assert!(r.is_full());
        assert_eq!(r.head, r.tail);
    }

    #[test]
    fn test_ring_relocate_preserves_logical_order() {
        let mut r = RingBuffer::with_capacity(4);
        r.push_back(3);
        r.push_back(4);
        r.push_front(2);
        r.push_front(1);
        assert!(r.is_full());
        r.relocate(8);
        assert_eq!(r.capacity(), 8);
        assert_eq!((r.head, r.tail), (0, 4));
        assert_eq!(logical(&r), vec![1, 2, 3, 4]);
        r.push_back(5);
        r.push_front(0);
        assert_eq!(logical(&r), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_ring_relocate_to_exact_len() {
        let mut r = RingBuffer::with_capacity(8);
        r.push_back(1);
        r.push_back(2);
        r.relocate(2);
        assert!(r.is_full());
        assert_eq!(r.tail, 0);
        assert_eq!(r.pop_back(), Some(2));
        assert_eq!(r.pop_back(), Some(1));
    }

    #[test]
    #[should_panic]
    fn test_ring_relocate_below_len_panics() {
        let mut r = RingBuffer::with_capacity(4);
        r.push_back(1);
        r.push_back(2);
        r.relocate(1);
    }

    #[test]
    fn test_ring_get_out_of_bounds() {
        let mut r = RingBuffer::with_capacity(4);
        r.push_back(1);
        assert_eq!(r.get(0), Some(&1));
        assert_eq!(r.get(1), None);
    }
}
