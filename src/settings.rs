//! Editor settings
//!
//! Defaults used when the editor creates new items, loaded from YAML:
//!
//! ```yaml
//! id_start: 1
//! default_loop_count: 3
//! prepare: { name: Get ready, duration: 10 }
//! work: { name: Work, duration: 30 }
//! rest: { name: Rest, duration: 15, skip_on_last_loop: true }
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{IntervalKind, IntervalStep};
use crate::{Result, TimerError};

/// Template for a newly created step of one kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct StepDefaults {
    pub name: String,
    pub duration: u32,
    #[serde(default)]
    pub skip_on_last_loop: bool,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub sound: Option<String>,
}

impl StepDefaults {
    fn new(name: &str, duration: u32) -> Self {
        Self {
            name: name.to_string(),
            duration,
            skip_on_last_loop: false,
            color: None,
            sound: None,
        }
    }

    /// Build a step from these defaults
    pub fn build(&self, id: String, kind: IntervalKind) -> IntervalStep {
        IntervalStep {
            id,
            name: self.name.clone(),
            duration: self.duration,
            kind,
            color: self.color.clone(),
            skip_on_last_loop: self.skip_on_last_loop,
            sound: self.sound.clone(),
        }
    }
}

/// Settings for an editing session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(default)]
pub struct EditorSettings {
    /// First id handed out in an empty session
    pub id_start: u64,
    /// Repeat count of a newly added loop
    pub default_loop_count: u32,
    pub prepare: StepDefaults,
    pub work: StepDefaults,
    pub rest: StepDefaults,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            id_start: 1,
            default_loop_count: 3,
            prepare: StepDefaults::new("Prepare", 10),
            work: StepDefaults::new("Work", 30),
            rest: StepDefaults::new("Rest", 15),
        }
    }
}

impl EditorSettings {
    /// Parse settings from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let settings: EditorSettings = serde_yaml_ng::from_str(yaml)?;
        settings.check()?;
        debug!(
            id_start = settings.id_start,
            default_loop_count = settings.default_loop_count,
            "Loaded editor settings"
        );
        Ok(settings)
    }

    /// Read and parse a YAML settings file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| TimerError::settings_error(path.to_path_buf(), e))?;
        Self::from_yaml_str(&yaml)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| TimerError::Serialize { details: e.to_string() })
    }

    /// Defaults for new steps of `kind`
    pub fn defaults_for(&self, kind: IntervalKind) -> &StepDefaults {
        match kind {
            IntervalKind::Prepare => &self.prepare,
            IntervalKind::Work => &self.work,
            IntervalKind::Rest => &self.rest,
        }
    }

    fn check(&self) -> Result<()> {
        if self.default_loop_count == 0 {
            return Err(TimerError::invalid_setting(
                "default_loop_count",
                "a loop must repeat at least once",
            ));
        }
        Ok(())
    }
}
