//! Move-aware edits used by drag and drop

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{contains_id, find_item_by_id};
use crate::IdGenerator;
use crate::types::WorkoutItem;

/// Side of a target item to insert on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Before,
    After,
}

/// Where a dragged item is dropped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(tag = "position", content = "target", rename_all = "camelCase")]
pub enum MoveTarget {
    /// Sibling position just before the given item
    Before(String),
    /// Sibling position just after the given item
    After(String),
    /// Last child of the given loop
    IntoLoop(String),
    /// End of the top-level list
    Root,
}

impl MoveTarget {
    /// Id of the item the drop is relative to
    pub fn target_id(&self) -> Option<&str> {
        match self {
            MoveTarget::Before(id) | MoveTarget::After(id) | MoveTarget::IntoLoop(id) => Some(id),
            MoveTarget::Root => None,
        }
    }
}

/// Find-and-remove in one pass.
///
/// Returns the tree without the first (pre-order) node `id`, and that node
/// with its subtree. `(input, None)` when `id` is missing.
pub fn take_item_by_id(
    items: &[WorkoutItem],
    id: &str,
) -> (Vec<WorkoutItem>, Option<WorkoutItem>) {
    let mut tree = items.to_vec();
    let taken = take_first(&mut tree, id);
    (tree, taken)
}

/// Tree with `item` inserted as a sibling before or after `target_id`, at
/// whatever depth the target lives. Unchanged when the target is missing.
pub fn insert_relative(
    items: &[WorkoutItem],
    target_id: &str,
    item: WorkoutItem,
    placement: Placement,
) -> Vec<WorkoutItem> {
    let mut tree = items.to_vec();
    if insert_next_to(&mut tree, target_id, item, placement).is_some() {
        debug!(target_id, "Insert target not found, tree unchanged");
    }
    tree
}

/// Tree with `item` appended to the top-level list
pub fn append_to_root(items: &[WorkoutItem], item: WorkoutItem) -> Vec<WorkoutItem> {
    let mut tree = items.to_vec();
    tree.push(item);
    tree
}

/// Move node `id` (with its subtree) to `target`.
///
/// Returns `None` instead of a tree when the move cannot happen: `id` or the
/// target is missing, `IntoLoop` names a step, or the target is the moved node
/// or one of its descendants.
pub fn try_move_item(
    items: &[WorkoutItem],
    id: &str,
    target: &MoveTarget,
) -> Option<Vec<WorkoutItem>> {
    let moving = find_item_by_id(items, id)?;

    if let Some(target_id) = target.target_id() {
        if target_id == id || contains_id(moving.children(), target_id) {
            debug!(id, target_id, "Refusing to move item into its own subtree");
            return None;
        }
        let target_item = find_item_by_id(items, target_id)?;
        if matches!(target, MoveTarget::IntoLoop(_)) && !target_item.is_loop() {
            debug!(id, target_id, "Drop target is not a loop");
            return None;
        }
    }

    let mut tree = items.to_vec();
    let item = take_first(&mut tree, id)?;

    let placed = match target {
        MoveTarget::Before(target_id) => {
            insert_next_to(&mut tree, target_id, item, Placement::Before).is_none()
        }
        MoveTarget::After(target_id) => {
            insert_next_to(&mut tree, target_id, item, Placement::After).is_none()
        }
        MoveTarget::IntoLoop(loop_id) => match super::find_loop_mut(&mut tree, loop_id) {
            Some(group) => {
                group.items.push(item);
                true
            }
            None => false,
        },
        MoveTarget::Root => {
            tree.push(item);
            true
        }
    };

    if !placed {
        return None;
    }
    debug!(id, ?target, "Moved item");
    Some(tree)
}

/// Move node `id` to `target`, or return the input unchanged when the move
/// cannot happen (see [`try_move_item`]).
pub fn move_item(items: &[WorkoutItem], id: &str, target: &MoveTarget) -> Vec<WorkoutItem> {
    try_move_item(items, id, target).unwrap_or_else(|| items.to_vec())
}

/// Copy node `id` with fresh ids from `ids` and insert the copy right after it.
///
/// Returns the new tree and the id of the copy's root; `(input, None)` when
/// `id` is missing.
pub fn duplicate_item(
    items: &[WorkoutItem],
    id: &str,
    ids: &mut IdGenerator,
) -> (Vec<WorkoutItem>, Option<String>) {
    let Some(original) = find_item_by_id(items, id) else {
        return (items.to_vec(), None);
    };
    let copy = ids.reassign_ids(original);
    let copy_id = copy.id().to_string();
    let tree = insert_relative(items, id, copy, Placement::After);
    debug!(id, copy_id = %copy_id, "Duplicated item");
    (tree, Some(copy_id))
}

fn take_first(items: &mut Vec<WorkoutItem>, id: &str) -> Option<WorkoutItem> {
    for index in 0..items.len() {
        if items[index].id() == id {
            return Some(items.remove(index));
        }
        if let WorkoutItem::Loop(group) = &mut items[index] {
            if let Some(taken) = take_first(&mut group.items, id) {
                return Some(taken);
            }
        }
    }
    None
}

/// Insert next to `target_id`; hands the item back if the target is missing
fn insert_next_to(
    items: &mut Vec<WorkoutItem>,
    target_id: &str,
    item: WorkoutItem,
    placement: Placement,
) -> Option<WorkoutItem> {
    let mut item = item;
    for index in 0..items.len() {
        if items[index].id() == target_id {
            let at = match placement {
                Placement::Before => index,
                Placement::After => index + 1,
            };
            items.insert(at, item);
            return None;
        }
        if let WorkoutItem::Loop(group) = &mut items[index] {
            match insert_next_to(&mut group.items, target_id, item, placement) {
                None => return None,
                Some(back) => item = back,
            }
        }
    }
    Some(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{loop_of, step};
    use crate::tree::collect_ids;

    fn sample() -> Vec<WorkoutItem> {
        vec![
            step("1", 10),
            loop_of("2", 3, vec![step("3", 20), loop_of("4", 2, vec![step("5", 5)])]),
            step("6", 15),
        ]
    }

    #[test]
    fn take_returns_the_subtree() {
        let (tree, taken) = take_item_by_id(&sample(), "4");
        assert_eq!(collect_ids(&tree), vec!["1", "2", "3", "6"]);
        assert_eq!(collect_ids(&[taken.unwrap()]), vec!["4", "5"]);
    }

    #[test]
    fn take_missing_returns_input() {
        let (tree, taken) = take_item_by_id(&sample(), "99");
        assert_eq!(tree, sample());
        assert!(taken.is_none());
    }

    #[test]
    fn insert_relative_works_inside_loops() {
        let before = insert_relative(&sample(), "5", step("7", 1), Placement::Before);
        assert_eq!(collect_ids(&before), vec!["1", "2", "3", "4", "7", "5", "6"]);

        let after = insert_relative(&sample(), "3", step("7", 1), Placement::After);
        assert_eq!(collect_ids(&after), vec!["1", "2", "3", "7", "4", "5", "6"]);
    }

    #[test]
    fn insert_relative_missing_target_is_a_no_op() {
        assert_eq!(insert_relative(&sample(), "99", step("7", 1), Placement::After), sample());
    }

    #[test]
    fn move_step_out_of_loop_to_root() {
        let tree = move_item(&sample(), "5", &MoveTarget::Root);
        assert_eq!(collect_ids(&tree), vec!["1", "2", "3", "4", "6", "5"]);
    }

    #[test]
    fn move_loop_carries_children() {
        let tree = move_item(&sample(), "4", &MoveTarget::Before("1".to_string()));
        assert_eq!(collect_ids(&tree), vec!["4", "5", "1", "2", "3", "6"]);
    }

    #[test]
    fn move_into_loop_appends() {
        let tree = move_item(&sample(), "1", &MoveTarget::IntoLoop("4".to_string()));
        assert_eq!(collect_ids(&tree), vec!["2", "3", "4", "5", "1", "6"]);
    }

    #[test]
    fn move_into_own_descendant_is_refused() {
        assert!(try_move_item(&sample(), "2", &MoveTarget::IntoLoop("4".to_string())).is_none());
        assert!(try_move_item(&sample(), "2", &MoveTarget::After("5".to_string())).is_none());
        assert!(try_move_item(&sample(), "2", &MoveTarget::Before("2".to_string())).is_none());
        assert_eq!(move_item(&sample(), "2", &MoveTarget::IntoLoop("4".to_string())), sample());
    }

    #[test]
    fn move_into_step_is_refused() {
        assert!(try_move_item(&sample(), "1", &MoveTarget::IntoLoop("6".to_string())).is_none());
    }

    #[test]
    fn move_missing_item_or_target_is_refused() {
        assert!(try_move_item(&sample(), "99", &MoveTarget::Root).is_none());
        assert!(try_move_item(&sample(), "1", &MoveTarget::After("99".to_string())).is_none());
    }

    #[test]
    fn duplicate_inserts_fresh_copy_after_original() {
        let mut ids = IdGenerator::new(10);
        let (tree, copy_id) = duplicate_item(&sample(), "4", &mut ids);
        assert_eq!(copy_id.as_deref(), Some("10"));
        assert_eq!(collect_ids(&tree), vec!["1", "2", "3", "4", "5", "10", "11", "6"]);
        assert_eq!(ids.peek(), 12);
    }

    #[test]
    fn move_target_serializes_for_the_drop_handler() {
        let json = serde_json::to_string(&MoveTarget::IntoLoop("4".to_string())).unwrap();
        assert_eq!(json, r#"{"position":"intoLoop","target":"4"}"#);
        let root: MoveTarget = serde_json::from_str(r#"{"position":"root"}"#).unwrap();
        assert_eq!(root, MoveTarget::Root);
    }

    mod property_tests {
        use super::*;
        use crate::test_utils::arb_tree;
        use proptest::prelude::*;

        fn sorted(mut ids: Vec<String>) -> Vec<String> {
            ids.sort();
            ids
        }

        proptest! {
            #[test]
            fn moves_never_drop_or_duplicate_nodes(
                tree in arb_tree(),
                from in any::<prop::sample::Index>(),
                to in any::<prop::sample::Index>(),
                kind in 0u8..4,
            ) {
                let ids = collect_ids(&tree);
                prop_assume!(!ids.is_empty());

                let id = &ids[from.index(ids.len())];
                let target_id = ids[to.index(ids.len())].clone();
                let target = match kind {
                    0 => MoveTarget::Before(target_id),
                    1 => MoveTarget::After(target_id),
                    2 => MoveTarget::IntoLoop(target_id),
                    _ => MoveTarget::Root,
                };

                let moved = move_item(&tree, id, &target);
                prop_assert_eq!(sorted(collect_ids(&moved)), sorted(ids.clone()));

                // the subtree travels intact
                let before = collect_ids(std::slice::from_ref(find_item_by_id(&tree, id).unwrap()));
                let after = collect_ids(std::slice::from_ref(find_item_by_id(&moved, id).unwrap()));
                prop_assert_eq!(before, after);
            }
        }
    }
}
