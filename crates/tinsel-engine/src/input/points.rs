use std::collections::HashMap;

use crate::coords::Vec2;

use super::types::PointerId;

/// Last known screen position per pointer that is currently down.
///
/// Positions live in a slot arena; released slots go onto a free list and are
/// handed out again before the arena grows, so a steady stream of gestures does
/// not allocate once the arena has reached the peak pointer count.
///
/// A pointer id maps to at most one slot and a free slot is never mapped.
#[derive(Debug, Default)]
pub struct PointCache {
    slots: Vec<Vec2>,
    free: Vec<usize>,
    by_pointer: HashMap<PointerId, usize>,
}

impl PointCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::with_capacity(capacity),
            by_pointer: HashMap::with_capacity(capacity),
        }
    }

    pub fn get(&self, pointer: PointerId) -> Option<Vec2> {
        self.by_pointer.get(&pointer).map(|&slot| self.slots[slot])
    }

    /// Last position of `pointer`, or `fallback` if the pointer is not tracked.
    #[inline]
    pub fn last_or(&self, pointer: PointerId, fallback: Vec2) -> Vec2 {
        self.get(pointer).unwrap_or(fallback)
    }

    pub fn set(&mut self, pointer: PointerId, pos: Vec2) {
        let slot = match self.by_pointer.get(&pointer) {
            Some(&slot) => slot,
            None => {
                let slot = self.acquire();
                self.by_pointer.insert(pointer, slot);
                slot
            }
        };
        self.slots[slot] = pos;
    }

    /// Stops tracking `pointer`. Returns `false` if it was not tracked.
    pub fn forget(&mut self, pointer: PointerId) -> bool {
        match self.by_pointer.remove(&pointer) {
            Some(slot) => {
                self.free.push(slot);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, pointer: PointerId) -> bool {
        self.by_pointer.contains_key(&pointer)
    }

    /// Number of tracked pointers.
    pub fn len(&self) -> usize {
        self.by_pointer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_pointer.is_empty()
    }

    /// Number of slots ever allocated (tracked + free).
    #[cfg(test)]
    pub(crate) fn allocated(&self) -> usize {
        self.slots.len()
    }

    fn acquire(&mut self) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Vec2::ZERO;
                slot
            }
            None => {
                self.slots.push(Vec2::ZERO);
                self.slots.len() - 1
            }
        }
    }
}
