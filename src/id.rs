//! Session-scoped identifier generation

use tracing::{trace, warn};

use crate::error::{Result, TimerError};
use crate::types::WorkoutItem;

/// Hands out strictly increasing string ids for one editing session.
///
/// Every call to [`next_id`](Self::next_id) reads the live counter through
/// `&mut self`, so several items created back to back (e.g. a drop that
/// inserts a whole copied loop) never share an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl IdGenerator {
    /// Start counting at `start`
    pub fn new(start: u64) -> Self {
        Self { next: start }
    }

    /// Start one past the largest numeric id in `items` (or at `floor`,
    /// whichever is greater), so fresh ids never collide with stored ones.
    ///
    /// Fails when a stored id is `u64::MAX`, since no larger id exists.
    pub fn seeded_after(items: &[WorkoutItem], floor: u64) -> Result<Self> {
        let start = match crate::tree::max_numeric_id(items) {
            Some(max) => max.checked_add(1).ok_or_else(|| {
                TimerError::invalid_structure(
                    "numeric id leaves no room for new items",
                    Some(max.to_string()),
                )
            })?,
            None => floor,
        }
        .max(floor);
        trace!(start, "Seeded id generator from stored tree");
        Ok(Self::new(start))
    }

    /// Return the current value and advance by one.
    ///
    /// Once the counter reaches `u64::MAX` it stays there.
    pub fn next_id(&mut self) -> String {
        let id = self.next;
        match self.next.checked_add(1) {
            Some(next) => self.next = next,
            None => warn!(id, "Id counter exhausted"),
        }
        id.to_string()
    }

    /// Value the next call to [`next_id`](Self::next_id) will return
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Deep copy of `item` with a fresh id on every node, assigned pre-order
    pub fn reassign_ids(&mut self, item: &WorkoutItem) -> WorkoutItem {
        let mut copy = item.clone();
        self.reassign_in_place(&mut copy);
        copy
    }

    fn reassign_in_place(&mut self, item: &mut WorkoutItem) {
        item.set_id(self.next_id());
        if let WorkoutItem::Loop(group) = item {
            for child in &mut group.items {
                self.reassign_in_place(child);
            }
        }
    }
}
