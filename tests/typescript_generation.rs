//! TypeScript Generation Tests
//!
//! Validates that timer types can be exported to TypeScript for the editor UI
//! when the tauri feature is enabled.

#[cfg(feature = "tauri")]
#[test]
fn test_core_types_implement_specta_type() {
    use specta::Type;

    // If this compiles, all types are properly configured for TypeScript export.
    fn assert_type<T: Type>() {}

    assert_type::<interval_timer::AdvancedConfig>();
    assert_type::<interval_timer::WorkoutItem>();
    assert_type::<interval_timer::IntervalStep>();
    assert_type::<interval_timer::LoopGroup>();
    assert_type::<interval_timer::IntervalKind>();
    assert_type::<interval_timer::FlattenedWorkout>();
    assert_type::<interval_timer::MoveTarget>();
    assert_type::<interval_timer::EditorSettings>();
}

#[cfg(not(feature = "tauri"))]
#[test]
fn test_tauri_feature_disabled() {
    // Types still compile without specta::Type
    let _ = interval_timer::IntervalKind::Work;
}
