//! Nested interval workout timers.
//!
//! This crate models advanced workout timers as trees of interval steps
//! (prepare, work, rest) and loop groups that repeat their children, and turns
//! those trees into the flat script a player counts down through.
//!
//! # Features
//!
//! - **Tree model**: steps and arbitrarily nested loops, stored as JSON
//! - **Pure edits**: find, remove, insert, move and duplicate without mutating the input
//! - **Playback scripts**: loop expansion with skip-on-last-loop and exact totals
//! - **Editing sessions**: id generation and defaults from YAML settings
//! - **Templates**: Tabata, EMOM, HIIT and more, plus the simple round timer
//!
//! # Quick Start
//!
//! ```rust
//! use interval_timer::{IntervalKind, TimerEditor, format_time};
//!
//! let mut editor = TimerEditor::default();
//! editor.add_step(IntervalKind::Prepare);
//! let rounds = editor.add_loop();
//! editor.add_step_to_loop(&rounds, IntervalKind::Work);
//! editor.add_step_to_loop(&rounds, IntervalKind::Rest);
//!
//! let workout = editor.flatten();
//! for interval in &workout {
//!     println!("{:>3}  {:<8} {}", interval.position, interval.name, format_time(interval.duration));
//! }
//! println!("total {}", format_time(workout.total_duration as u32));
//!
//! let json = editor.save().unwrap();
//! assert!(json.starts_with(r#"{"items":"#));
//! ```

// Core types and error handling
mod error;
#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod types;

// Tree editing and playback
pub mod editor;
mod id;
pub mod sequencer;
pub mod tree;
pub mod validate;

// Utilities and configuration
pub mod settings;
pub mod templates;
pub mod time;

// Core exports
pub use error::*;
pub use types::*;

// Main API exports
pub use editor::TimerEditor;
pub use id::IdGenerator;
pub use sequencer::{FlattenedInterval, FlattenedWorkout, LoopRound, flatten, total_duration};
pub use settings::EditorSettings;
pub use templates::{SimpleTimer, Template};
pub use time::{format_time, parse_time_input};
pub use tree::MoveTarget;
