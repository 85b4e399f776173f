//! Structural checks for timer trees loaded from storage

use std::collections::HashSet;

use tracing::warn;

use crate::types::WorkoutItem;
use crate::{Result, TimerError};

/// Check every node of a tree, reporting the first violation in pre-order.
///
/// Fails on an empty id, an id used twice, or a loop that repeats zero times.
pub fn validate_items(items: &[WorkoutItem]) -> Result<()> {
    let mut seen = HashSet::new();
    walk(items, &mut seen)
}

fn walk<'a>(items: &'a [WorkoutItem], seen: &mut HashSet<&'a str>) -> Result<()> {
    for item in items {
        let id = item.id();
        if id.is_empty() {
            warn!("Timer item with empty id");
            return Err(TimerError::invalid_structure("item has an empty id", None));
        }
        if !seen.insert(id) {
            warn!(id, "Duplicate timer item id");
            return Err(TimerError::invalid_structure(
                format!("id '{}' is used more than once", id),
                Some(id.to_string()),
            ));
        }
        if let WorkoutItem::Loop(group) = item {
            if group.loops == 0 {
                warn!(id, "Loop with zero repetitions");
                return Err(TimerError::invalid_structure(
                    format!("loop '{}' must repeat at least once", id),
                    Some(id.to_string()),
                ));
            }
            walk(&group.items, seen)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IntervalKind, IntervalStep, LoopGroup};

    fn step(id: &str) -> WorkoutItem {
        IntervalStep::new(id, "Step", 10, IntervalKind::Work).into()
    }

    #[test]
    fn accepts_a_well_formed_tree() {
        let items = vec![step("1"), LoopGroup::new("2", 3, vec![step("3"), step("4")]).into()];
        assert!(validate_items(&items).is_ok());
        assert!(validate_items(&[]).is_ok());
    }

    #[test]
    fn rejects_duplicate_ids_across_nesting_levels() {
        let items = vec![step("1"), LoopGroup::new("2", 3, vec![step("1")]).into()];
        match validate_items(&items) {
            Err(TimerError::InvalidStructure { item_id, .. }) => {
                assert_eq!(item_id.as_deref(), Some("1"))
            }
            other => panic!("Expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_zero_repeat_count() {
        let items = vec![LoopGroup::new("1", 0, vec![step("2")]).into()];
        let err = validate_items(&items).unwrap_err();
        assert!(err.to_string().contains("at least once"));
    }

    #[test]
    fn rejects_empty_ids() {
        assert!(validate_items(&[step("")]).is_err());
    }
}
