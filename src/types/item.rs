//! The step-or-loop sum type that makes up a workout tree

use serde::{Deserialize, Deserializer, Serialize};

use super::{IntervalKind, IntervalStep, LoopGroup};

/// One node of a workout tree.
///
/// Serialized with an explicit `"kind": "step" | "loop"` tag. Documents saved
/// before the tag existed are still accepted: an untagged node with both
/// `loops` and `items` is a loop, anything else is a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WorkoutItem {
    Step(IntervalStep),
    Loop(LoopGroup),
}

impl WorkoutItem {
    pub fn id(&self) -> &str {
        match self {
            WorkoutItem::Step(step) => &step.id,
            WorkoutItem::Loop(group) => &group.id,
        }
    }

    pub(crate) fn set_id(&mut self, id: String) {
        match self {
            WorkoutItem::Step(step) => step.id = id,
            WorkoutItem::Loop(group) => group.id = id,
        }
    }

    pub fn is_loop(&self) -> bool {
        matches!(self, WorkoutItem::Loop(_))
    }

    pub fn as_step(&self) -> Option<&IntervalStep> {
        match self {
            WorkoutItem::Step(step) => Some(step),
            WorkoutItem::Loop(_) => None,
        }
    }

    pub fn as_loop(&self) -> Option<&LoopGroup> {
        match self {
            WorkoutItem::Loop(group) => Some(group),
            WorkoutItem::Step(_) => None,
        }
    }

    /// Children of a loop; empty for steps
    pub fn children(&self) -> &[WorkoutItem] {
        match self {
            WorkoutItem::Loop(group) => &group.items,
            WorkoutItem::Step(_) => &[],
        }
    }

    /// Display color, if one was picked
    pub fn color(&self) -> Option<&str> {
        match self {
            WorkoutItem::Step(step) => step.color.as_deref(),
            WorkoutItem::Loop(group) => group.color.as_deref(),
        }
    }
}

impl From<IntervalStep> for WorkoutItem {
    fn from(step: IntervalStep) -> Self {
        WorkoutItem::Step(step)
    }
}

impl From<LoopGroup> for WorkoutItem {
    fn from(group: LoopGroup) -> Self {
        WorkoutItem::Loop(group)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ItemTag {
    Step,
    Loop,
}

/// Union of every field a stored node may carry
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredItem {
    #[serde(default)]
    kind: Option<ItemTag>,
    id: String,
    #[serde(default)]
    name: String,
    duration: Option<u32>,
    #[serde(rename = "type")]
    step_type: Option<IntervalKind>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    skip_on_last_loop: bool,
    #[serde(default)]
    sound: Option<String>,
    loops: Option<u32>,
    items: Option<Vec<WorkoutItem>>,
    #[serde(default)]
    collapsed: bool,
}

impl TryFrom<StoredItem> for WorkoutItem {
    type Error = String;

    fn try_from(stored: StoredItem) -> Result<Self, Self::Error> {
        let tag = match stored.kind {
            Some(tag) => tag,
            None if stored.loops.is_some() && stored.items.is_some() => ItemTag::Loop,
            None => ItemTag::Step,
        };

        match tag {
            ItemTag::Loop => {
                let loops = stored
                    .loops
                    .ok_or_else(|| format!("loop '{}' is missing field `loops`", stored.id))?;
                let items = stored
                    .items
                    .ok_or_else(|| format!("loop '{}' is missing field `items`", stored.id))?;
                Ok(WorkoutItem::Loop(LoopGroup {
                    id: stored.id,
                    loops,
                    items,
                    collapsed: stored.collapsed,
                    color: stored.color,
                }))
            }
            ItemTag::Step => {
                let duration = stored
                    .duration
                    .ok_or_else(|| format!("step '{}' is missing field `duration`", stored.id))?;
                let kind = stored
                    .step_type
                    .ok_or_else(|| format!("step '{}' is missing field `type`", stored.id))?;
                Ok(WorkoutItem::Step(IntervalStep {
                    id: stored.id,
                    name: stored.name,
                    duration,
                    kind,
                    color: stored.color,
                    skip_on_last_loop: stored.skip_on_last_loop,
                    sound: stored.sound,
                }))
            }
        }
    }
}

impl<'de> Deserialize<'de> for WorkoutItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let stored = StoredItem::deserialize(deserializer)?;
        WorkoutItem::try_from(stored).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_items_round_trip_through_json() {
        let item = WorkoutItem::Loop(LoopGroup::new(
            "1",
            3,
            vec![IntervalStep::new("2", "Work", 20, IntervalKind::Work).into()],
        ));

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""kind":"loop""#));
        assert!(json.contains(r#""kind":"step""#));

        let parsed: WorkoutItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }

    #[test]
    fn untagged_loop_is_detected_structurally() {
        let json = r#"{
            "id": "5",
            "loops": 2,
            "items": [{ "id": "6", "name": "Rest", "duration": 10, "type": "rest", "skipOnLastLoop": true }],
            "collapsed": true
        }"#;

        let item: WorkoutItem = serde_json::from_str(json).unwrap();
        let group = item.as_loop().expect("expected a loop");
        assert_eq!(group.loops, 2);
        assert!(group.collapsed);
        let step = group.items[0].as_step().expect("expected a step");
        assert!(step.skip_on_last_loop);
    }

    #[test]
    fn loop_with_only_one_loop_field_is_not_a_loop() {
        // `loops` without `items` falls back to the step rule and then fails
        let json = r#"{ "id": "5", "loops": 2 }"#;
        let err = serde_json::from_str::<WorkoutItem>(json).unwrap_err();
        assert!(err.to_string().contains("duration"));
    }

    #[test]
    fn explicit_tag_reports_missing_loop_fields() {
        let json = r#"{ "kind": "loop", "id": "8", "items": [] }"#;
        let err = serde_json::from_str::<WorkoutItem>(json).unwrap_err();
        assert!(err.to_string().contains("loops"));
    }

    #[test]
    fn children_of_a_step_are_empty() {
        let item: WorkoutItem = IntervalStep::new("1", "Go", 5, IntervalKind::Work).into();
        assert!(item.children().is_empty());
        assert!(!item.is_loop());
        assert_eq!(item.id(), "1");
    }
}
