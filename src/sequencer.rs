//! Flattening a workout tree into a playback script.
//!
//! [`flatten`] walks the tree depth-first and expands every loop into its
//! repetitions, producing the exact order in which intervals are played. A
//! step flagged `skip_on_last_loop` is left out of the final repetition of the
//! loop that directly contains it; top-level steps have no enclosing loop and
//! are always played.
//!
//! ## Edge Cases
//!
//! - a loop with no children contributes nothing, whatever its repeat count
//! - a loop repeating once plays its children once, but skip-on-last still
//!   applies (the only repetition is also the last)
//! - nested loops multiply: a 10s step in a 3× loop inside a 4× loop plays 12 times
//!
//! Flattening is a pure function of the tree. It can be called on every
//! render; it never touches the input.
//!
//! ```rust
//! use interval_timer::sequencer::flatten;
//! use interval_timer::types::{IntervalKind, IntervalStep, LoopGroup, WorkoutItem};
//!
//! let items: Vec<WorkoutItem> = vec![LoopGroup::new("1", 3, vec![
//!     IntervalStep::new("2", "Work", 10, IntervalKind::Work).into(),
//!     IntervalStep::new("3", "Rest", 5, IntervalKind::Rest).skipping_last_loop().into(),
//! ])
//! .into()];
//!
//! let workout = flatten(&items);
//! assert_eq!(workout.len(), 5);
//! assert_eq!(workout.total_duration, 40);
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::types::{IntervalKind, IntervalStep, LoopGroup, WorkoutItem};

/// Which repetition of its enclosing loop an interval belongs to (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct LoopRound {
    pub current: u32,
    pub total: u32,
}

impl LoopRound {
    pub fn is_last(self) -> bool {
        self.current == self.total
    }
}

/// One fully resolved entry of the playback script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct FlattenedInterval {
    /// Id of the step this entry was expanded from (repeats across rounds)
    pub id: String,
    pub name: String,
    pub duration: u32,
    #[serde(rename = "type")]
    pub kind: IntervalKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
    #[serde(default)]
    pub skip_on_last_loop: bool,
    /// Index in playback order
    pub position: usize,
    /// Seconds of playback before this interval starts
    pub start_offset: u64,
    /// Round of the directly enclosing loop; `None` at top level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<LoopRound>,
}

impl FlattenedInterval {
    fn from_step(step: &IntervalStep, round: Option<LoopRound>) -> Self {
        Self {
            id: step.id.clone(),
            name: step.name.clone(),
            duration: step.duration,
            kind: step.kind,
            color: step.color.clone(),
            sound: step.sound.clone(),
            skip_on_last_loop: step.skip_on_last_loop,
            position: 0,
            start_offset: 0,
            round,
        }
    }

    /// Seconds of playback when this interval ends
    pub fn end_offset(&self) -> u64 {
        self.start_offset.saturating_add(u64::from(self.duration))
    }
}

/// Playback script for a whole timer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct FlattenedWorkout {
    pub intervals: Vec<FlattenedInterval>,
    /// Sum of the durations of every emitted interval
    pub total_duration: u64,
}

impl FlattenedWorkout {
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlattenedInterval> {
        self.intervals.iter()
    }

    /// Interval playing after `elapsed` seconds, with its remaining seconds.
    ///
    /// Zero-length intervals are never "playing". `None` once the workout is over.
    pub fn interval_at(&self, elapsed: u64) -> Option<(&FlattenedInterval, u64)> {
        let index = self.intervals.partition_point(|interval| interval.end_offset() <= elapsed);
        self.intervals.get(index).map(|interval| (interval, interval.end_offset() - elapsed))
    }

    /// Total seconds spent in intervals of `kind`
    pub fn duration_of(&self, kind: IntervalKind) -> u64 {
        self.intervals
            .iter()
            .filter(|interval| interval.kind == kind)
            .map(|interval| u64::from(interval.duration))
            .sum()
    }
}

impl<'a> IntoIterator for &'a FlattenedWorkout {
    type Item = &'a FlattenedInterval;
    type IntoIter = std::slice::Iter<'a, FlattenedInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

/// Expand `items` into playback order
pub fn flatten(items: &[WorkoutItem]) -> FlattenedWorkout {
    let mut intervals = Vec::new();
    for item in items {
        match item {
            WorkoutItem::Step(step) => intervals.push(FlattenedInterval::from_step(step, None)),
            WorkoutItem::Loop(group) => intervals.extend(expand_loop(group)),
        }
    }

    let mut elapsed = 0u64;
    for (position, interval) in intervals.iter_mut().enumerate() {
        interval.position = position;
        interval.start_offset = elapsed;
        elapsed = elapsed.saturating_add(u64::from(interval.duration));
    }

    trace!(intervals = intervals.len(), total_duration = elapsed, "Flattened workout");
    FlattenedWorkout { intervals, total_duration: elapsed }
}

/// Total playback time without building the script.
///
/// Each loop counts `loops × inner total`, minus the steps it skips on its
/// final repetition. Always equals `flatten(items).total_duration`, and
/// saturates at `u64::MAX` for trees too large to play.
pub fn total_duration(items: &[WorkoutItem]) -> u64 {
    sum_saturating(items.iter().map(item_duration))
}

fn sum_saturating(durations: impl Iterator<Item = u64>) -> u64 {
    durations.fold(0, u64::saturating_add)
}

fn item_duration(item: &WorkoutItem) -> u64 {
    match item {
        WorkoutItem::Step(step) => u64::from(step.duration),
        WorkoutItem::Loop(group) => loop_duration(group),
    }
}

fn loop_duration(group: &LoopGroup) -> u64 {
    if group.loops == 0 {
        return 0;
    }
    let inner = sum_saturating(group.items.iter().map(item_duration));
    let skipped = sum_saturating(
        group
            .items
            .iter()
            .filter_map(WorkoutItem::as_step)
            .filter(|step| step.skip_on_last_loop)
            .map(|step| u64::from(step.duration)),
    );
    inner.saturating_mul(u64::from(group.loops)).saturating_sub(skipped)
}

fn expand_loop(group: &LoopGroup) -> Vec<FlattenedInterval> {
    // nested loops play identically every round, so expand each once
    let nested: Vec<Vec<FlattenedInterval>> = group
        .items
        .iter()
        .map(|child| match child {
            WorkoutItem::Loop(inner) => expand_loop(inner),
            WorkoutItem::Step(_) => Vec::new(),
        })
        .collect();

    // no step anywhere below: every round is empty whatever the repeat count
    let has_steps = group.items.iter().any(|child| child.as_step().is_some());
    if !has_steps && nested.iter().all(Vec::is_empty) {
        return Vec::new();
    }

    let mut out = Vec::new();
    for current in 1..=group.loops {
        let round = LoopRound { current, total: group.loops };
        for (child, expansion) in group.items.iter().zip(&nested) {
            match child {
                WorkoutItem::Step(step) if step.skip_on_last_loop && round.is_last() => {}
                WorkoutItem::Step(step) => out.push(FlattenedInterval::from_step(step, Some(round))),
                WorkoutItem::Loop(_) => out.extend(expansion.iter().cloned()),
            }
        }
    }
    out
}
