//! `BoundedQueue`: fixed-capacity FIFO ring buffer.
//!
//! Every waiting line in the simulator is a `BoundedQueue`: each station's
//! own line and, in single-queue mode, the shared line.  The capacity is set
//! once and the backing storage is never reallocated.
//!
//! Inserting into a full queue does not panic.  The rejected item is handed
//! back in `Err` so the caller decides what a lost customer means (the
//! engine counts it).

/// Fixed-capacity FIFO queue backed by a ring buffer.
///
/// `head` is the slot of the oldest item; the `len` items occupy slots
/// `head, head+1, …` modulo capacity.  Slots outside that window are `None`.
#[derive(Clone, Debug)]
pub struct BoundedQueue<T> {
    slots: Box<[Option<T>]>,
    head:  usize,
    len:   usize,
}

impl<T> BoundedQueue<T> {
    /// Create an empty queue that holds at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            head:  0,
            len:   0,
        }
    }

    /// Append `item` at the tail.
    ///
    /// Returns `Err(item)` and leaves the queue untouched if it is full.
    pub fn insert(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        let tail = (self.head + self.len) % self.capacity();
        self.slots[tail] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Pop the item at the head, or `None` if the queue is empty.
    pub fn remove(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.head].take();
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        if self.len == 0 {
            self.head = 0;
        }
        item
    }

    /// The item at the head, without removing it.
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Items from head to tail, without mutating the queue.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let cap = self.capacity();
        (0..self.len).filter_map(move |i| self.slots[(self.head + i) % cap].as_ref())
    }

    /// Borrowed head-to-tail view, for read-only consumers such as a
    /// renderer.
    pub fn snapshot(&self) -> Vec<&T> {
        self.iter().collect()
    }
}
