//! Core types for advanced timer definitions.
//!
//! An advanced timer is a tree. Leaves are [`IntervalStep`]s (a named
//! prepare/work/rest phase with a duration in seconds); internal nodes are
//! [`LoopGroup`]s that repeat their children a fixed number of times. Both are
//! wrapped in the [`WorkoutItem`] sum type, and [`AdvancedConfig`] holds the
//! top-level list.
//!
//! ## Invariants
//!
//! - ids are unique across the whole tree
//! - a loop repeats at least once
//! - the structure is a strict tree (enforced by ownership: a node owns its children)
//!
//! ## Usage Example
//!
//! ```rust
//! use interval_timer::types::{AdvancedConfig, IntervalKind, IntervalStep, LoopGroup};
//!
//! let config = AdvancedConfig::new(vec![
//!     IntervalStep::new("1", "Get ready", 10, IntervalKind::Prepare).into(),
//!     LoopGroup::new("2", 8, vec![
//!         IntervalStep::new("3", "Work", 20, IntervalKind::Work).into(),
//!         IntervalStep::new("4", "Rest", 10, IntervalKind::Rest).skipping_last_loop().into(),
//!     ])
//!     .into(),
//! ]);
//!
//! assert_eq!(config.step_count(), 3);
//! assert!(config.validate().is_ok());
//! ```

mod config;
mod item;
mod loop_group;
mod step;

pub use config::AdvancedConfig;
pub use item::WorkoutItem;
pub use loop_group::LoopGroup;
pub use step::{IntervalKind, IntervalStep};
