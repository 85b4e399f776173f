//! Interval steps: the timed leaves of a workout tree

use serde::{Deserialize, Serialize};

/// Phase of an interval step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "lowercase")]
pub enum IntervalKind {
    /// Get-ready countdown before work starts
    Prepare,
    Work,
    Rest,
}

impl IntervalKind {
    /// Lowercase name as stored in timer documents
    pub fn as_str(self) -> &'static str {
        match self {
            IntervalKind::Prepare => "prepare",
            IntervalKind::Work => "work",
            IntervalKind::Rest => "rest",
        }
    }
}

impl std::fmt::Display for IntervalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single timed phase of a workout.
///
/// Durations are whole seconds. `skip_on_last_loop` only has an effect when
/// the step sits directly inside a [`LoopGroup`](super::LoopGroup): the step is
/// left out of that loop's final repetition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct IntervalStep {
    pub id: String,
    pub name: String,
    pub duration: u32,
    #[serde(rename = "type")]
    pub kind: IntervalKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub skip_on_last_loop: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
}

impl IntervalStep {
    /// Create a step with no color, sound or skip flag
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        duration: u32,
        kind: IntervalKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duration,
            kind,
            color: None,
            skip_on_last_loop: false,
            sound: None,
        }
    }

    /// Builder-style setter for the skip-on-last-loop flag
    pub fn skipping_last_loop(mut self) -> Self {
        self.skip_on_last_loop = true;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_serializes_with_document_field_names() {
        let step = IntervalStep::new("3", "Sprint", 30, IntervalKind::Work).skipping_last_loop();
        let json = serde_json::to_value(&step).unwrap();

        assert_eq!(json["type"], "work");
        assert_eq!(json["skipOnLastLoop"], true);
        assert!(json.get("color").is_none());
        assert!(json.get("sound").is_none());
    }

    #[test]
    fn skip_flag_is_omitted_when_false() {
        let step = IntervalStep::new("1", "Rest", 10, IntervalKind::Rest);
        let json = serde_json::to_value(&step).unwrap();
        assert!(json.get("skipOnLastLoop").is_none());
    }

    #[test]
    fn optional_fields_default_when_missing() {
        let step: IntervalStep =
            serde_json::from_str(r#"{"id":"9","name":"Warm up","duration":60,"type":"prepare"}"#)
                .unwrap();
        assert_eq!(step.kind, IntervalKind::Prepare);
        assert!(!step.skip_on_last_loop);
        assert_eq!(step.sound, None);
    }
}
