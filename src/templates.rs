//! Built-in timer templates and the simple timer.
//!
//! Templates are instantiated with ids from the caller's session
//! [`IdGenerator`], so a template cloned into an existing editing session never
//! collides with items already there.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::IdGenerator;
use crate::types::{AdvancedConfig, IntervalKind, IntervalStep, LoopGroup, WorkoutItem};

/// Classic prepare / work / rest × rounds timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct SimpleTimer {
    /// Seconds before the first round; 0 for none
    pub prepare: u32,
    pub work: u32,
    /// Seconds between rounds; 0 for none. Never played after the last round.
    pub rest: u32,
    pub rounds: u32,
}

impl Default for SimpleTimer {
    fn default() -> Self {
        Self { prepare: 10, work: 30, rest: 15, rounds: 5 }
    }
}

impl SimpleTimer {
    /// Equivalent advanced timer: optional prepare step, then one loop of
    /// work and a skip-on-last-loop rest
    pub fn to_advanced(&self, ids: &mut IdGenerator) -> AdvancedConfig {
        let mut items = Vec::new();
        if self.prepare > 0 {
            items.push(step(ids, "Prepare", self.prepare, IntervalKind::Prepare));
        }

        let loop_id = ids.next_id();
        let mut round = vec![step(ids, "Work", self.work, IntervalKind::Work)];
        if self.rest > 0 {
            round.push(
                IntervalStep::new(ids.next_id(), "Rest", self.rest, IntervalKind::Rest)
                    .skipping_last_loop()
                    .into(),
            );
        }
        items.push(LoopGroup::new(loop_id, self.rounds.max(1), round).into());

        AdvancedConfig::new(items)
    }
}

/// Built-in starting points offered when creating a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Tabata,
    Emom,
    Hiit,
    Pyramid,
}

impl Template {
    pub fn all() -> &'static [Template] {
        &[Template::Tabata, Template::Emom, Template::Hiit, Template::Pyramid]
    }

    pub fn name(self) -> &'static str {
        match self {
            Template::Tabata => "Tabata",
            Template::Emom => "EMOM",
            Template::Hiit => "HIIT Circuit",
            Template::Pyramid => "Pyramid",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Template::Tabata => "8 rounds of 20s work and 10s rest",
            Template::Emom => "Every minute on the minute for 10 minutes",
            Template::Hiit => "3 sets of 5 × 40s/20s with a minute between sets",
            Template::Pyramid => "Work intervals climbing to a minute and back down",
        }
    }

    /// Build the template's tree with fresh ids from `ids`
    pub fn instantiate(self, ids: &mut IdGenerator) -> AdvancedConfig {
        let config = match self {
            Template::Tabata => {
                SimpleTimer { prepare: 10, work: 20, rest: 10, rounds: 8 }.to_advanced(ids)
            }
            Template::Emom => {
                let loop_id = ids.next_id();
                let minute = vec![
                    step(ids, "Work", 45, IntervalKind::Work),
                    step(ids, "Rest", 15, IntervalKind::Rest),
                ];
                AdvancedConfig::new(vec![LoopGroup::new(loop_id, 10, minute).into()])
            }
            Template::Hiit => {
                let prepare = step(ids, "Prepare", 10, IntervalKind::Prepare);
                let set_id = ids.next_id();
                let round_id = ids.next_id();
                let round = vec![
                    step(ids, "Work", 40, IntervalKind::Work),
                    skip_step(ids, "Rest", 20),
                ];
                let set = vec![
                    LoopGroup::new(round_id, 5, round).into(),
                    skip_step(ids, "Set break", 60),
                ];
                AdvancedConfig::new(vec![prepare, LoopGroup::new(set_id, 3, set).into()])
            }
            Template::Pyramid => {
                let mut items = vec![step(ids, "Prepare", 10, IntervalKind::Prepare)];
                let ladder = [20, 40, 60, 40, 20];
                for (index, work) in ladder.iter().enumerate() {
                    items.push(step(ids, "Work", *work, IntervalKind::Work));
                    if index + 1 < ladder.len() {
                        items.push(step(ids, "Rest", work / 2, IntervalKind::Rest));
                    }
                }
                AdvancedConfig::new(items)
            }
        };
        debug!(template = self.name(), steps = config.step_count(), "Instantiated template");
        config
    }
}

fn step(ids: &mut IdGenerator, name: &str, duration: u32, kind: IntervalKind) -> WorkoutItem {
    IntervalStep::new(ids.next_id(), name, duration, kind).into()
}

fn skip_step(ids: &mut IdGenerator, name: &str, duration: u32) -> WorkoutItem {
    IntervalStep::new(ids.next_id(), name, duration, IntervalKind::Rest).skipping_last_loop().into()
}
