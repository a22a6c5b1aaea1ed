//! End-to-end checks of identity, retained state and style scoping through
//! `Runtime::run_frame`.

use imstack_ui::headless::{DrawCommand, HeadlessBackend};
use imstack_ui::prelude::*;
use imstack_ui::{Backend, CounterState, Role, StateStore, StyleDepth, TimerPhase, WidgetId};

fn runtime() -> Runtime<HeadlessBackend> {
    Runtime::new(HeadlessBackend::new())
}

fn button_color(backend: &HeadlessBackend, label: &str) -> Option<Color> {
    match backend.find_button(label) {
        Some(DrawCommand::Button { color, .. }) => *color,
        other => panic!("no button '{label}': {other:?}"),
    }
}

#[test]
fn test_identity_is_deterministic() {
    let a = WidgetId::new("Lives", Role::Counter);
    let b = WidgetId::new("Lives", Role::Counter);
    assert_eq!(a, b);
    assert_eq!(a.as_str(), "Lives##counter");
    assert_ne!(a, WidgetId::new("Lives", Role::Timer));
}

#[test]
fn test_store_first_factory_wins() {
    let mut store = StateStore::new();
    let key = WidgetId::new("x", Role::Counter);
    store
        .get_or_create(&key, || CounterState::new(7, 1))
        .unwrap()
        .value += 1;
    for _ in 0..3 {
        let state = store
            .get_or_create(&key, || CounterState::new(99, 1))
            .unwrap();
        assert_eq!(state.value, 8);
    }
    assert_eq!(store.len(), 1);
}

#[test]
fn test_nested_styles_leave_stacks_balanced() {
    let mut runtime = runtime().with_theme(Theme::dark());
    for _ in 0..3 {
        runtime
            .run_frame::<(), _>(|ui| {
                style()
                    .color(StyleColor::Button, Color::RED)
                    .to(elements![style().to(elements![style()
                        .var(StyleVar::FrameRounding, 5.0)
                        .to(elements![button("deep")])])])
                    .build(ui)
            })
            .unwrap();
        assert_eq!(runtime.backend().style_depth(), StyleDepth::default());
    }
    assert_eq!(runtime.backend().unbalanced_frames(), 0);
}

#[test]
fn test_innermost_override_wins_over_theme() {
    let theme = Theme::new(
        "Test",
        StyleLayer::new().color(StyleColor::Button, Color::BLUE),
    );
    let mut runtime = runtime().with_theme(theme);
    runtime
        .run_frame::<(), _>(|ui| {
            row(elements![
                style()
                    .color(StyleColor::Button, Color::RED)
                    .to(elements![button("inside")]),
                button("sibling"),
            ])
            .build(ui)
        })
        .unwrap();
    let backend = runtime.backend();
    assert_eq!(button_color(backend, "inside"), Some(Color::RED));
    assert_eq!(button_color(backend, "sibling"), Some(Color::BLUE));
}

fn clamped_counter(ui: &mut Ui<'_, i64>) -> imstack_ui::Result<()> {
    counter("x").min(0).max(5).on_change(|v| v).build(ui)
}

#[test]
fn test_counter_clamps_and_reports_changes_only() {
    let mut runtime = runtime();

    for _ in 0..3 {
        runtime.backend_mut().click("x##counter/-");
        assert!(runtime.run_frame(clamped_counter).unwrap().is_empty());
    }
    assert_eq!(
        counter::<()>("x").min(0).max(5).get_value(runtime.store_mut()).unwrap(),
        0
    );

    let mut fired = Vec::new();
    for _ in 0..5 {
        runtime.backend_mut().click("x##counter/+");
        fired.extend(runtime.run_frame(clamped_counter).unwrap());
    }
    assert_eq!(fired, vec![1, 2, 3, 4, 5]);

    runtime.backend_mut().click("x##counter/+");
    assert!(runtime.run_frame(clamped_counter).unwrap().is_empty());
    assert!(runtime.backend().texts().contains(&" 5 "));
}

#[test]
fn test_timer_pause_resume_preserves_elapsed() {
    let mut runtime = runtime();
    let lap = timer("Lap");
    let frame = |runtime: &mut Runtime<HeadlessBackend>| {
        runtime
            .run_frame::<(), _>(|ui| timer("Lap").build(ui))
            .unwrap();
    };

    runtime.backend_mut().click("Lap##timer/Start");
    frame(&mut runtime);

    runtime.backend_mut().advance(10.0);
    runtime.backend_mut().click("Lap##timer/Pause");
    frame(&mut runtime);
    let now = runtime.time();
    assert_eq!(lap.elapsed(runtime.store_mut(), now).unwrap(), 10.0);
    assert_eq!(lap.phase(runtime.store_mut(), now).unwrap(), TimerPhase::Paused);

    runtime.backend_mut().advance(5.0);
    runtime.backend_mut().click("Lap##timer/Resume");
    frame(&mut runtime);
    assert_eq!(runtime.backend().texts(), vec!["Lap: 10.0s"]);

    runtime.backend_mut().advance(5.0);
    frame(&mut runtime);
    let now = runtime.time();
    assert_eq!(lap.elapsed(runtime.store_mut(), now).unwrap(), 15.0);
}

#[test]
fn test_status_log_evicts_oldest() {
    let mut runtime = runtime();
    let display = status_display().max_entries(3);
    for text in ["A", "B", "C", "D"] {
        display.add_message(runtime.store_mut(), text, 0.0).unwrap();
    }
    assert_eq!(display.message_count(runtime.store_mut()).unwrap(), 3);

    runtime
        .run_frame::<(), _>(|ui| status_display().build(ui))
        .unwrap();
    assert_eq!(
        runtime.backend().texts(),
        vec!["[0.0s] D", "[0.0s] C", "[0.0s] B"]
    );
}

#[test]
fn test_kind_collision_is_fatal_and_unwinds() {
    let mut runtime = runtime().with_theme(Theme::blue());
    let key = WidgetId::new("Shared", Role::Counter);
    runtime
        .store_mut()
        .get_or_create(&key, || imstack_ui::TimerState::new(0.0))
        .unwrap();

    let result = runtime.run_frame::<(), _>(|ui| {
        style()
            .color(StyleColor::Text, Color::GRAY)
            .to(elements![counter("Shared")])
            .build(ui)
    });
    assert!(matches!(result, Err(UiError::TypeMismatch { .. })));
    assert_eq!(runtime.backend().style_depth(), StyleDepth::default());
    assert_eq!(runtime.backend().unbalanced_frames(), 0);
}

#[test]
fn test_messages_follow_walk_order() {
    let mut runtime = runtime();
    for target in ["first", "x##counter/+", "last"] {
        runtime.backend_mut().click(target);
    }
    let messages = runtime
        .run_frame(|ui| {
            column(elements![
                button("first").on_click(|| "first".to_string()),
                counter("x").on_change(|v| format!("counter {v}")),
                button("last").on_click(|| "last".to_string()),
            ])
            .build(ui)
        })
        .unwrap();
    assert_eq!(messages, vec!["first", "counter 1", "last"]);
}
