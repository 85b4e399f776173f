//! Pure edits over a workout tree.
//!
//! Every public function takes the tree by shared reference and returns a new
//! `Vec<WorkoutItem>`; the input is never touched. Internally the tree is
//! copied once and the copy is edited in place.
//!
//! An id that is not in the tree is not an error. The edit becomes a no-op and
//! the returned tree equals the input. Callers that need to tell "moved" from
//! "not found" check with [`find_item_by_id`] or [`contains_id`] first, or use
//! [`try_move_item`].
//!
//! Search order everywhere is pre-order, left to right: a loop is visited
//! before its children, and its children before its next sibling.

mod moves;

pub use moves::{
    MoveTarget, Placement, append_to_root, duplicate_item, insert_relative, move_item,
    take_item_by_id, try_move_item,
};

use tracing::{debug, trace};

use crate::types::{LoopGroup, WorkoutItem};

/// First node with `id`, in pre-order
pub fn find_item_by_id<'a>(items: &'a [WorkoutItem], id: &str) -> Option<&'a WorkoutItem> {
    for item in items {
        if item.id() == id {
            return Some(item);
        }
        if let WorkoutItem::Loop(group) = item {
            if let Some(found) = find_item_by_id(&group.items, id) {
                return Some(found);
            }
        }
    }
    None
}

pub fn contains_id(items: &[WorkoutItem], id: &str) -> bool {
    find_item_by_id(items, id).is_some()
}

/// Tree without the node `id`. A removed loop takes its whole subtree with it.
pub fn remove_item_by_id(items: &[WorkoutItem], id: &str) -> Vec<WorkoutItem> {
    let mut tree = items.to_vec();
    let removed = remove_all(&mut tree, id);
    debug!(id, removed, "Removed item from tree");
    tree
}

/// Tree with `new_item` appended to the children of loop `loop_id`.
///
/// Unchanged when `loop_id` is missing or names a step.
pub fn add_item_to_loop(
    items: &[WorkoutItem],
    loop_id: &str,
    new_item: WorkoutItem,
) -> Vec<WorkoutItem> {
    let mut tree = items.to_vec();
    match find_loop_mut(&mut tree, loop_id) {
        Some(group) => {
            trace!(loop_id, item = new_item.id(), "Appending item to loop");
            group.items.push(new_item);
        }
        None => debug!(loop_id, "Loop not found, tree unchanged"),
    }
    tree
}

/// Tree with `edit` applied to node `id`.
///
/// Used for in-place field changes (rename, duration, collapse). The closure
/// must not change the node's id.
pub fn update_item_by_id<F>(items: &[WorkoutItem], id: &str, edit: F) -> Vec<WorkoutItem>
where
    F: FnOnce(&mut WorkoutItem),
{
    let mut tree = items.to_vec();
    if let Some(item) = find_item_mut(&mut tree, id) {
        edit(item);
    } else {
        debug!(id, "Item not found, tree unchanged");
    }
    tree
}

/// Every id in the tree, pre-order
pub fn collect_ids(items: &[WorkoutItem]) -> Vec<String> {
    fn walk(items: &[WorkoutItem], out: &mut Vec<String>) {
        for item in items {
            out.push(item.id().to_string());
            walk(item.children(), out);
        }
    }

    let mut ids = Vec::new();
    walk(items, &mut ids);
    ids
}

/// Largest id that parses as an unsigned integer, if any
pub fn max_numeric_id(items: &[WorkoutItem]) -> Option<u64> {
    items
        .iter()
        .flat_map(|item| {
            let own = item.id().parse::<u64>().ok();
            let nested = max_numeric_id(item.children());
            own.into_iter().chain(nested)
        })
        .max()
}

/// Remove every node with `id`; returns how many top-level matches were dropped
fn remove_all(items: &mut Vec<WorkoutItem>, id: &str) -> usize {
    let before = items.len();
    items.retain(|item| item.id() != id);
    let mut removed = before - items.len();
    for item in items.iter_mut() {
        if let WorkoutItem::Loop(group) = item {
            removed += remove_all(&mut group.items, id);
        }
    }
    removed
}

pub(crate) fn find_item_mut<'a>(
    items: &'a mut [WorkoutItem],
    id: &str,
) -> Option<&'a mut WorkoutItem> {
    for item in items.iter_mut() {
        if item.id() == id {
            return Some(item);
        }
        if let WorkoutItem::Loop(group) = item {
            if let Some(found) = find_item_mut(&mut group.items, id) {
                return Some(found);
            }
        }
    }
    None
}

pub(crate) fn find_loop_mut<'a>(
    items: &'a mut [WorkoutItem],
    id: &str,
) -> Option<&'a mut LoopGroup> {
    match find_item_mut(items, id)? {
        WorkoutItem::Loop(group) => Some(group),
        WorkoutItem::Step(_) => None,
    }
}
