//! Fixed-capacity binary min-heap keyed by frequency.
//!
//! The heap is array-backed: the children of slot `i` live at `2i + 1` and
//! `2i + 2`, its parent at `(i - 1) / 2`.
//!
//! # Tie rule
//!
//! Each insertion is stamped with a sequence number. When two nodes have the
//! same weight the one inserted earlier is extracted first, which makes tree
//! construction (and therefore every code) deterministic.

use oxihuff_core::{HuffError, Result};

/// Anything that can be ordered by a frequency weight.
pub trait Weighted {
    /// The priority key; lower weights are extracted first.
    fn weight(&self) -> u64;
}

impl Weighted for u64 {
    fn weight(&self) -> u64 {
        *self
    }
}

/// A queued item with its ordering key.
#[derive(Debug, Clone)]
struct Slot<T> {
    weight: u64,
    seq: u64,
    item: T,
}

impl<T> Slot<T> {
    #[inline]
    fn key(&self) -> (u64, u64) {
        (self.weight, self.seq)
    }
}

/// Binary min-heap with a fixed capacity.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    slots: Vec<Slot<T>>,
    capacity: usize,
    next_seq: u64,
}

impl<T: Weighted> PriorityQueue<T> {
    /// Create an empty queue holding at most `capacity` items.
    ///
    /// The backing storage is reserved up front.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|e| HuffError::allocation(capacity, e))?;
        Ok(Self {
            slots,
            capacity,
            next_seq: 0,
        })
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Maximum number of items.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The lowest-weight item, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.slots.first().map(|slot| &slot.item)
    }

    /// Insert an item.
    ///
    /// Fails with [`HuffError::QueueOverflow`] if the queue is full.
    pub fn insert(&mut self, item: T) -> Result<()> {
        if self.slots.len() >= self.capacity {
            return Err(HuffError::queue_overflow(self.capacity));
        }

        let slot = Slot {
            weight: item.weight(),
            seq: self.next_seq,
            item,
        };
        self.next_seq += 1;
        self.slots.push(slot);
        self.sift_up(self.slots.len() - 1);
        Ok(())
    }

    /// Remove and return the lowest-weight item.
    ///
    /// Fails with [`HuffError::QueueUnderflow`] if the queue is empty.
    pub fn extract_min(&mut self) -> Result<T> {
        if self.slots.is_empty() {
            return Err(HuffError::QueueUnderflow);
        }

        let min = self.slots.swap_remove(0);
        if !self.slots.is_empty() {
            self.sift_down(0);
        }
        Ok(min.item)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.slots[i].key() >= self.slots[parent].key() {
                break;
            }
            self.slots.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.slots.len();
        loop {
            let left = 2 * i + 1;
            if left >= n {
                break;
            }

            // Pick the smaller child
            let right = left + 1;
            let child = if right < n && self.slots[right].key() < self.slots[left].key() {
                right
            } else {
                left
            };

            if self.slots[i].key() <= self.slots[child].key() {
                break;
            }
            self.slots.swap(i, child);
            i = child;
        }
    }

    /// Check the heap-order invariant on every parent/child pair.
    #[cfg(test)]
    fn is_valid(&self) -> bool {
        (1..self.slots.len()).all(|i| self.slots[(i - 1) / 2].key() <= self.slots[i].key())
    }
}
