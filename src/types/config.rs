//! Root timer document

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::WorkoutItem;
use crate::{Result, TimerError};

/// One complete advanced timer: an ordered list of steps and loops.
///
/// Stored as the JSON document `{ "items": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct AdvancedConfig {
    #[serde(default)]
    pub items: Vec<WorkoutItem>,
}

impl AdvancedConfig {
    pub fn new(items: Vec<WorkoutItem>) -> Self {
        Self { items }
    }

    /// Parse a stored timer document.
    ///
    /// Only checks the document shape; call [`validate`](Self::validate) to
    /// check tree invariants.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AdvancedConfig = serde_json::from_str(json).map_err(|e| {
            TimerError::parse_error("advanced timer document", e.to_string())
        })?;
        debug!(
            items = config.items.len(),
            steps = config.step_count(),
            loops = config.loop_count(),
            "Parsed advanced timer document"
        );
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| TimerError::Serialize { details: e.to_string() })
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TimerError::Serialize { details: e.to_string() })
    }

    /// Check tree invariants: unique non-empty ids and loops repeating at least once.
    pub fn validate(&self) -> Result<()> {
        crate::validate::validate_items(&self.items)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of steps anywhere in the tree (not expanded by loop counts)
    pub fn step_count(&self) -> usize {
        fn count(items: &[WorkoutItem]) -> usize {
            items
                .iter()
                .map(|item| match item {
                    WorkoutItem::Step(_) => 1,
                    WorkoutItem::Loop(group) => count(&group.items),
                })
                .sum()
        }
        count(&self.items)
    }

    /// Number of loop groups anywhere in the tree
    pub fn loop_count(&self) -> usize {
        fn count(items: &[WorkoutItem]) -> usize {
            items
                .iter()
                .map(|item| match item {
                    WorkoutItem::Step(_) => 0,
                    WorkoutItem::Loop(group) => 1 + count(&group.items),
                })
                .sum()
        }
        count(&self.items)
    }

    /// Deepest loop nesting; 0 for a tree with no loops
    pub fn max_depth(&self) -> usize {
        fn depth(items: &[WorkoutItem]) -> usize {
            items
                .iter()
                .filter_map(WorkoutItem::as_loop)
                .map(|group| 1 + depth(&group.items))
                .max()
                .unwrap_or(0)
        }
        depth(&self.items)
    }
}

impl From<Vec<WorkoutItem>> for AdvancedConfig {
    fn from(items: Vec<WorkoutItem>) -> Self {
        Self { items }
    }
}
