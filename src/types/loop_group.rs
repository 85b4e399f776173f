//! Loop groups: repeated containers of workout items

use serde::{Deserialize, Serialize};

use super::WorkoutItem;

/// A container whose children are played `loops` times in a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct LoopGroup {
    pub id: String,
    /// Repeat count, at least 1
    pub loops: u32,
    pub items: Vec<WorkoutItem>,
    /// Collapsed in the editor; no effect on playback
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub collapsed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl LoopGroup {
    pub fn new(id: impl Into<String>, loops: u32, items: Vec<WorkoutItem>) -> Self {
        Self { id: id.into(), loops, items, collapsed: false, color: None }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Whether this loop has no children (contributes nothing to playback)
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
