//! Editing session for one advanced timer.
//!
//! A [`TimerEditor`] owns the current tree and the session's [`IdGenerator`].
//! Every edit runs one of the pure functions in [`crate::tree`] and replaces
//! the owned tree with the result; nothing is persisted until [`save`] is
//! called.
//!
//! [`save`]: TimerEditor::save

use tracing::{debug, info};

use crate::sequencer::{self, FlattenedWorkout};
use crate::settings::EditorSettings;
use crate::templates::Template;
use crate::tree::{self, MoveTarget};
use crate::types::{AdvancedConfig, IntervalKind, LoopGroup, WorkoutItem};
use crate::{IdGenerator, Result};

#[derive(Debug, Clone)]
pub struct TimerEditor {
    config: AdvancedConfig,
    ids: IdGenerator,
    settings: EditorSettings,
}

impl Default for TimerEditor {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl TimerEditor {
    /// Start an empty timer
    pub fn new(settings: EditorSettings) -> Self {
        Self { config: AdvancedConfig::default(), ids: IdGenerator::new(settings.id_start), settings }
    }

    /// Open a stored timer document.
    ///
    /// The document is validated, and new ids continue after the largest
    /// numeric id already in it.
    pub fn load(json: &str, settings: EditorSettings) -> Result<Self> {
        let config = AdvancedConfig::from_json(json)?;
        Self::from_config(config, settings)
    }

    /// Edit an already parsed timer
    pub fn from_config(config: AdvancedConfig, settings: EditorSettings) -> Result<Self> {
        config.validate()?;
        let ids = IdGenerator::seeded_after(&config.items, settings.id_start)?;
        info!(
            steps = config.step_count(),
            loops = config.loop_count(),
            next_id = ids.peek(),
            "Opened timer for editing"
        );
        Ok(Self { config, ids, settings })
    }

    pub fn config(&self) -> &AdvancedConfig {
        &self.config
    }

    pub fn items(&self) -> &[WorkoutItem] {
        &self.config.items
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Fresh id from the session counter
    pub fn next_id(&mut self) -> String {
        self.ids.next_id()
    }

    /// Step of `kind` built from the settings defaults, with a fresh id
    pub fn new_step(&mut self, kind: IntervalKind) -> WorkoutItem {
        let id = self.ids.next_id();
        self.settings.defaults_for(kind).build(id, kind).into()
    }

    /// Empty loop with the default repeat count and a fresh id
    pub fn new_loop(&mut self) -> WorkoutItem {
        let id = self.ids.next_id();
        LoopGroup::new(id, self.settings.default_loop_count, Vec::new()).into()
    }

    /// Append a default step at the root; returns its id
    pub fn add_step(&mut self, kind: IntervalKind) -> String {
        let step = self.new_step(kind);
        self.push_root(step)
    }

    /// Append an empty loop at the root; returns its id
    pub fn add_loop(&mut self) -> String {
        let group = self.new_loop();
        self.push_root(group)
    }

    /// Append any item at the root; returns its id
    pub fn push_root(&mut self, item: WorkoutItem) -> String {
        let id = item.id().to_string();
        self.config.items = tree::append_to_root(&self.config.items, item);
        id
    }

    /// Append a built-in template at the root using session ids; returns the
    /// ids of the top-level items it added
    pub fn insert_template(&mut self, template: Template) -> Vec<String> {
        let instance = template.instantiate(&mut self.ids);
        instance.items.into_iter().map(|item| self.push_root(item)).collect()
    }

    /// Append `item` to loop `loop_id`. Returns false if there is no such loop.
    pub fn add_to_loop(&mut self, loop_id: &str, item: WorkoutItem) -> bool {
        if !self.is_loop(loop_id) {
            debug!(loop_id, "Cannot add to missing loop");
            return false;
        }
        self.config.items = tree::add_item_to_loop(&self.config.items, loop_id, item);
        true
    }

    /// Append a default step of `kind` to loop `loop_id`; returns its id
    pub fn add_step_to_loop(&mut self, loop_id: &str, kind: IntervalKind) -> Option<String> {
        if !self.is_loop(loop_id) {
            return None;
        }
        let step = self.new_step(kind);
        let id = step.id().to_string();
        self.config.items = tree::add_item_to_loop(&self.config.items, loop_id, step);
        Some(id)
    }

    /// Remove item `id` and its subtree. Returns false if it was not there.
    pub fn remove(&mut self, id: &str) -> bool {
        if !tree::contains_id(&self.config.items, id) {
            return false;
        }
        self.config.items = tree::remove_item_by_id(&self.config.items, id);
        true
    }

    /// Apply a drag-and-drop move. Returns false when the move was refused.
    pub fn move_item(&mut self, id: &str, target: &MoveTarget) -> bool {
        match tree::try_move_item(&self.config.items, id, target) {
            Some(items) => {
                self.config.items = items;
                true
            }
            None => false,
        }
    }

    /// Copy item `id` (fresh ids throughout) right after itself; returns the copy's id
    pub fn duplicate(&mut self, id: &str) -> Option<String> {
        let (items, copy_id) = tree::duplicate_item(&self.config.items, id, &mut self.ids);
        self.config.items = items;
        copy_id
    }

    /// Edit fields of item `id` in place. Returns false if it was not there.
    ///
    /// The item's id is restored if the closure changes it.
    pub fn update<F>(&mut self, id: &str, edit: F) -> bool
    where
        F: FnOnce(&mut WorkoutItem),
    {
        if !tree::contains_id(&self.config.items, id) {
            return false;
        }
        self.config.items = tree::update_item_by_id(&self.config.items, id, |item| {
            edit(item);
            item.set_id(id.to_string());
        });
        true
    }

    /// Flip the editor-only collapsed flag of loop `loop_id`
    pub fn toggle_collapsed(&mut self, loop_id: &str) -> bool {
        if !self.is_loop(loop_id) {
            return false;
        }
        self.update(loop_id, |item| {
            if let WorkoutItem::Loop(group) = item {
                group.collapsed = !group.collapsed;
            }
        })
    }

    pub fn flatten(&self) -> FlattenedWorkout {
        sequencer::flatten(&self.config.items)
    }

    pub fn total_duration(&self) -> u64 {
        sequencer::total_duration(&self.config.items)
    }

    /// Serialize the current tree for storage
    pub fn save(&self) -> Result<String> {
        let json = self.config.to_json()?;
        debug!(bytes = json.len(), "Serialized timer for saving");
        Ok(json)
    }

    /// Give up the session, keeping the tree
    pub fn into_config(self) -> AdvancedConfig {
        self.config
    }

    fn is_loop(&self, id: &str) -> bool {
        tree::find_item_by_id(&self.config.items, id).is_some_and(WorkoutItem::is_loop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TimerError;
    use crate::tree::collect_ids;

    #[test]
    fn builds_a_tabata_style_timer() {
        let mut editor = TimerEditor::default();
        editor.add_step(IntervalKind::Prepare);
        let round = editor.add_loop();
        let work = editor.add_step_to_loop(&round, IntervalKind::Work).unwrap();
        let rest = editor.add_step_to_loop(&round, IntervalKind::Rest).unwrap();

        editor.update(&rest, |item| {
            if let WorkoutItem::Step(step) = item {
                step.skip_on_last_loop = true;
            }
        });

        assert_eq!(collect_ids(editor.items()), vec!["1", "2", "3", "4"]);
        assert_eq!(work, "3");
        // 10 prepare + 3 × 30 work + 2 × 15 rest
        assert_eq!(editor.total_duration(), 130);
        assert_eq!(editor.flatten().len(), 6);
    }

    #[test]
    fn loaded_session_continues_after_stored_ids() -> anyhow::Result<()> {
        let json = r#"{"items":[{"id":"41","loops":2,"items":[{"id":"7","name":"Go","duration":20,"type":"work"}]}]}"#;
        let mut editor = TimerEditor::load(json, EditorSettings::default())?;
        assert_eq!(editor.add_step(IntervalKind::Rest), "42");
        Ok(())
    }

    #[test]
    fn load_rejects_invalid_trees() {
        let json = r#"{"items":[{"id":"1","loops":0,"items":[]}]}"#;
        let err = TimerEditor::load(json, EditorSettings::default()).unwrap_err();
        assert!(matches!(err, TimerError::InvalidStructure { .. }));
    }

    #[test]
    fn load_rejects_stored_id_at_counter_limit() {
        let json = r#"{"items":[{"id":"18446744073709551615","name":"Go","duration":20,"type":"work"}]}"#;
        let err = TimerEditor::load(json, EditorSettings::default()).unwrap_err();
        assert!(matches!(
            err,
            TimerError::InvalidStructure { item_id: Some(ref id), .. } if id == "18446744073709551615"
        ));
    }

    #[test]
    fn missing_targets_report_false() {
        let mut editor = TimerEditor::default();
        let step = editor.add_step(IntervalKind::Work);
        let next = editor.ids.peek();

        assert!(!editor.remove("nope"));
        assert!(!editor.add_to_loop(&step, crate::test_utils::step("x", 1)));
        assert_eq!(editor.add_step_to_loop("nope", IntervalKind::Work), None);
        assert!(!editor.move_item(&step, &MoveTarget::IntoLoop("nope".to_string())));
        assert!(!editor.toggle_collapsed(&step));
        // refused edits do not burn ids
        assert_eq!(editor.ids.peek(), next);
    }

    #[test]
    fn update_cannot_change_ids() {
        let mut editor = TimerEditor::default();
        let id = editor.add_step(IntervalKind::Work);
        editor.update(&id, |item| item.set_id("hijacked".to_string()));
        assert!(tree::contains_id(editor.items(), &id));
        assert!(!tree::contains_id(editor.items(), "hijacked"));
    }

    #[test]
    fn drag_and_drop_round_trip() {
        let mut editor = TimerEditor::default();
        let a = editor.add_step(IntervalKind::Work);
        let group = editor.add_loop();

        assert!(editor.move_item(&a, &MoveTarget::IntoLoop(group.clone())));
        assert_eq!(collect_ids(editor.items()), vec![group.clone(), a.clone()]);

        assert!(editor.move_item(&a, &MoveTarget::Before(group.clone())));
        assert_eq!(collect_ids(editor.items()), vec![a, group]);
    }

    #[test]
    fn duplicate_and_save() -> anyhow::Result<()> {
        let mut editor = TimerEditor::default();
        let group = editor.add_loop();
        editor.add_step_to_loop(&group, IntervalKind::Work);
        let copy = editor.duplicate(&group).unwrap();

        assert_eq!(collect_ids(editor.items()), vec!["1", "2", "3", "4"]);
        assert_eq!(copy, "3");
        assert!(editor.toggle_collapsed(&copy));

        let reopened = TimerEditor::load(&editor.save()?, EditorSettings::default())?;
        assert_eq!(reopened.config(), editor.config());
        Ok(())
    }
}
