//! Bounded FIFO of recent pointer positions.

use glam::Vec2;
use smallvec::SmallVec;

/// Oldest-first queue of the last `capacity` pointer positions.
///
/// Invariant: `len() <= capacity()` after every mutation. Insertion appends
/// at the tail; eviction removes from the head. Order is never changed.
pub struct TrailBuffer {
    positions: SmallVec<[Vec2; 8]>,
    capacity: usize,
}

impl TrailBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            positions: SmallVec::new(),
            capacity,
        }
    }

    pub fn push(&mut self, position: Vec2) {
        self.positions.push(position);
        while self.positions.len() > self.capacity {
            self.positions.remove(0);
        }
    }

    /// Current contents, oldest first.
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
