//! Test utilities: tree builders and proptest strategies
//!
//! Builders are shared by unit tests and benchmarks. The proptest strategies
//! are only compiled for unit tests.

#![cfg(any(test, feature = "benchmark"))]

use crate::types::{IntervalKind, IntervalStep, LoopGroup, WorkoutItem};

/// Work step named after its id
pub fn step(id: &str, duration: u32) -> WorkoutItem {
    IntervalStep::new(id, format!("Work {}", id), duration, IntervalKind::Work).into()
}

/// Rest step named after its id
pub fn rest_step(id: &str, duration: u32) -> WorkoutItem {
    IntervalStep::new(id, format!("Rest {}", id), duration, IntervalKind::Rest).into()
}

pub fn prepare_step(id: &str, duration: u32) -> WorkoutItem {
    IntervalStep::new(id, "Get ready", duration, IntervalKind::Prepare).into()
}

/// Rest step flagged skip-on-last-loop
pub fn skip_step(id: &str, duration: u32) -> WorkoutItem {
    IntervalStep::new(id, format!("Rest {}", id), duration, IntervalKind::Rest)
        .skipping_last_loop()
        .into()
}

pub fn loop_of(id: &str, loops: u32, items: Vec<WorkoutItem>) -> WorkoutItem {
    LoopGroup::new(id, loops, items).into()
}

/// Balanced tree of nested loops for benchmarks.
///
/// Each level holds `breadth` work/rest pairs plus one nested loop, down to
/// `depth` levels. Ids are sequential from 1.
pub fn nested_workout(depth: usize, breadth: usize, loops: u32) -> Vec<WorkoutItem> {
    fn level(
        depth: usize,
        breadth: usize,
        loops: u32,
        next: &mut u64,
    ) -> Vec<WorkoutItem> {
        let mut fresh = || {
            let id = next.to_string();
            *next += 1;
            id
        };

        let mut items = Vec::with_capacity(breadth * 2 + 1);
        for _ in 0..breadth {
            items.push(step(&fresh(), 30));
            items.push(skip_step(&fresh(), 15));
        }
        if depth > 0 {
            let id = fresh();
            items.push(loop_of(&id, loops, level(depth - 1, breadth, loops, next)));
        }
        items
    }

    let mut next = 1;
    vec![prepare_step("0", 10), loop_of("root", loops, level(depth, breadth, loops, &mut next))]
}


#[cfg(test)]
pub use strategies::{arb_item, arb_kind, arb_tree};
