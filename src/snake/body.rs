//! Snake body tracker.
//!
//! A fixed 360-slot ring of cells in order of creation. Only the first
//! `score + 3` slots are in use: the write cursor wraps back to slot 0 when
//! it reaches that window, so the slot it is about to overwrite always holds
//! the oldest segment. Slots that have never been written are `None`; when
//! the window grows the cursor runs into one of those and nothing is evicted
//! that step, which is how the snake gets longer.
//!
//! Occupancy is counted per cell from the same writes and evictions, so it
//! always equals the multiset of `Some` entries in the ring.

use super::types::Cell;
use crate::core::constants::{BODY_CAPACITY, CELL_COUNT};

#[derive(Debug, Clone)]
pub struct SnakeBody {
    ring: [Option<Cell>; BODY_CAPACITY],
    current_index: usize,
    occupancy: [u16; CELL_COUNT],
}

impl Default for SnakeBody {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeBody {
    pub fn new() -> Self {
        Self {
            ring: [None; BODY_CAPACITY],
            current_index: 0,
            occupancy: [0; CELL_COUNT],
        }
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.occupancy[cell.index()] > 0
    }

    /// True if `cell` is still covered once the tail slot is evicted, so a
    /// head arriving there bites the body. The cell the tail is leaving
    /// does not count.
    pub fn occupied_after_eviction(&self, cell: Cell) -> bool {
        let leaving = u16::from(self.ring[self.current_index] == Some(cell));
        self.occupancy[cell.index()] > leaving
    }

    /// Number of distinct cells covered by the body.
    pub fn occupied_count(&self) -> usize {
        self.occupancy.iter().filter(|&&n| n > 0).count()
    }

    /// Distinct occupied cells in grid order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.ring
            .iter()
            .flatten()
            .copied()
            .filter(|cell| self.is_occupied(*cell))
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
    }

    /// Remove the segment in the slot about to be overwritten.
    ///
    /// Returns the cell if it no longer holds any segment, i.e. it should be
    /// redrawn as empty.
    pub fn evict_tail(&mut self) -> Option<Cell> {
        let cell = self.ring[self.current_index].take()?;
        let count = &mut self.occupancy[cell.index()];
        *count = count.saturating_sub(1);
        (*count == 0).then_some(cell)
    }

    /// Record a new head segment and advance the cursor within `window` slots.
    pub fn push_head(&mut self, cell: Cell, window: usize) {
        if let Some(old) = self.ring[self.current_index].replace(cell) {
            let count = &mut self.occupancy[old.index()];
            *count = count.saturating_sub(1);
        }
        self.occupancy[cell.index()] += 1;

        let window = window.clamp(1, BODY_CAPACITY);
        self.current_index += 1;
        if self.current_index >= window {
            self.current_index = 0;
        }
    }
}
