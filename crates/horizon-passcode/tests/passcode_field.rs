//! Integration tests for the passcode field controller.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use horizon_passcode::prelude::*;
use horizon_passcode::validator::validator_fn;
use horizon_passcode::{AnimationId, InputStateMachine, InsertOutcome, RejectReason};
use horizon_passcode_core::ManualClock;
use parking_lot::Mutex;

/// Renderer whose shakes keep running until the test finishes them.
#[derive(Clone, Default)]
struct RecordingRenderer {
    played: Arc<Mutex<Vec<AnimationId>>>,
    cancelled: Arc<Mutex<Vec<AnimationId>>>,
}

impl AnimationRenderer for RecordingRenderer {
    fn play_shake(&mut self, id: AnimationId, _shake: &ShakeSpec) -> PlayOutcome {
        self.played.lock().push(id);
        PlayOutcome::Running
    }

    fn cancel(&mut self, id: AnimationId) {
        self.cancelled.lock().push(id);
    }
}

/// Records every style call.
struct RecordingStyle {
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl CellStyle for RecordingStyle {
    fn apply(&mut self, _cell: &mut CellAppearance, _state: CellState) {
        self.calls.lock().push("apply");
    }

    fn selection_changed(&mut self, _cell: &mut CellAppearance, _state: CellState) {
        self.calls.lock().push("selection");
    }

    fn error_changed(&mut self, _cell: &mut CellAppearance, _state: CellState) {
        self.calls.lock().push("error");
    }

    fn bounds_changed(&mut self, cell: &mut CellAppearance, bounds: Rect) {
        cell.bounds = bounds;
        self.calls.lock().push("bounds");
    }
}

fn recorder<T: Clone + Send + 'static>(signal: &horizon_passcode_core::Signal<T>) -> Arc<Mutex<Vec<T>>> {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    signal.connect(move |value: &T| sink.lock().push(value.clone()));
    log
}

fn field_with(config: PasscodeConfig) -> (PasscodeField, ManualClock, RecordingRenderer) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("horizon_passcode=debug")
        .with_test_writer()
        .try_init();

    let clock = ManualClock::new();
    let renderer = RecordingRenderer::default();
    let config = config.with_layout_direction(LayoutDirection::LeftToRight);
    let field = PasscodeField::with_parts(config, renderer.clone(), Arc::new(clock.clone())).unwrap();
    (field, clock, renderer)
}

fn text_changed(old: &str, new: &str) -> InputEvent {
    InputEvent::TextChanged {
        old: old.to_string(),
        new: new.to_string(),
    }
}

#[test]
fn test_completion_fires_once_per_fill() {
    let (mut field, _, _) = field_with(PasscodeConfig::new(4));
    let completed = recorder(&field.completed);
    let changes = recorder(&field.code_changed);

    assert_eq!(field.type_text("123456"), 4);
    assert_eq!(*completed.lock(), vec!["1234".to_string()]);
    assert_eq!(changes.lock().len(), 4);

    field.delete_backward();
    field.type_text("9");
    assert_eq!(*completed.lock(), vec!["1234".to_string(), "1239".to_string()]);
}

#[test]
fn test_text_changed_dispatch() {
    let (mut field, _, _) = field_with(PasscodeConfig::new(4));
    let changes = recorder(&field.code_changed);

    field.handle_event(text_changed("", "1"));
    field.handle_event(text_changed("1", "123"));
    field.handle_event(text_changed("123", "12"));
    field.handle_event(text_changed("12", "12"));

    assert_eq!(field.code(), "12");
    assert_eq!(*changes.lock(), vec!["1", "12", "123", "12"]);
    assert_eq!(field.glyphs(), vec![Some("1"), Some("2"), None, None]);
}

#[test]
fn test_validator_rejects_silently() {
    let (mut field, _, _) = field_with(PasscodeConfig::new(4).with_validator(DigitsValidator));
    let changes = recorder(&field.code_changed);

    assert_eq!(field.type_text("a"), 0);
    assert!(!field.should_accept_replacement("a"));
    assert!(field.should_accept_replacement("7"));
    assert!(changes.lock().is_empty());
    assert!(!field.input().validates("x"));
}

#[test]
fn test_replacement_gate_when_full() {
    let (mut field, _, _) = field_with(PasscodeConfig::new(2));
    field.type_text("12");

    assert!(!field.should_accept_replacement("3"));
    assert!(field.should_accept_replacement(""));
    assert_eq!(field.delete_backward().as_deref(), Some("2"));
}

#[test]
fn test_ignore_user_input() {
    let (mut field, _, _) = field_with(PasscodeConfig::new(4).with_ignore_user_input(true));

    assert_eq!(field.type_text("12"), 0);
    assert!(!field.should_accept_replacement(""));

    field.set_ignore_user_input(false);
    field.type_text("1");
    field.set_ignore_user_input(true);
    assert_eq!(field.delete_backward(), None);
    assert_eq!(field.code(), "1");
}

#[test]
fn test_reset_on_next_interaction() {
    let (mut field, _, _) = field_with(
        PasscodeConfig::new(4).with_reset_policy(ResetPolicy::OnNextUserInteraction),
    );
    let changes = recorder(&field.code_changed);
    let errors = recorder(&field.error_changed);

    field.type_text("1234");
    field.set_error(true);
    assert_eq!(field.cell_states(), vec![CellSemanticState::Error; 4]);

    field.handle_event(text_changed("1234", "12345"));

    assert!(!field.is_error());
    assert_eq!(field.code(), "5");
    assert_eq!(*errors.lock(), vec![true, false]);
    assert_eq!(changes.lock().last().map(String::as_str), Some("5"));
}

#[test]
fn test_begin_editing_resets_and_acks() {
    let (mut field, _, _) = field_with(
        PasscodeConfig::new(4).with_reset_policy(ResetPolicy::OnNextUserInteraction),
    );
    let began = recorder(&field.begin_editing);

    field.type_text("12");
    field.set_error(true);
    field.handle_event(InputEvent::BeginEditing);

    assert_eq!(began.lock().len(), 1);
    assert_eq!(field.code(), "");
    assert!(!field.is_error());
}

#[test]
fn test_no_policy_keeps_error() {
    let (mut field, clock, _) = field_with(PasscodeConfig::new(4).with_shake_on_error(false));

    field.type_text("1234");
    field.set_error(true);
    clock.advance(Duration::from_secs(10));

    assert!(!field.process_timers());
    assert!(field.is_error());
    assert_eq!(field.code(), "1234");
}

#[test]
fn test_after_delay_waits_for_shake() {
    let delay = Duration::from_millis(300);
    let (mut field, clock, renderer) =
        field_with(PasscodeConfig::new(4).with_reset_policy(ResetPolicy::after_delay(delay)));
    let shakes = recorder(&field.shake_animation_created);

    field.type_text("1234");
    field.set_error(true);

    assert_eq!(*shakes.lock(), vec![ShakeSpec::new()]);
    assert!(!field.is_reset_pending());

    clock.advance(delay);
    assert!(!field.process_timers());

    let id = renderer.played.lock()[0];
    field.handle_event(InputEvent::AnimationFinished { id });
    assert!(field.is_reset_pending());

    clock.advance(delay - Duration::from_millis(1));
    assert!(!field.process_timers());
    clock.advance(Duration::from_millis(1));
    assert!(field.process_timers());

    assert_eq!(field.code(), "");
    assert!(!field.is_error());
}

#[test]
fn test_shake_only_on_rising_edge() {
    let (mut field, _, renderer) = field_with(PasscodeConfig::new(4));
    let shakes = recorder(&field.shake_animation_created);

    field.set_error(true);
    field.set_error(true);
    field.set_error(false);
    field.set_error(false);

    assert_eq!(shakes.lock().len(), 1);
    assert_eq!(renderer.played.lock().len(), 1);
    assert_eq!(*renderer.cancelled.lock(), *renderer.played.lock());
}

#[test]
fn test_manual_reset_cancels_stale_timer() {
    let delay = Duration::from_millis(500);
    let (mut field, clock, _) = field_with(
        PasscodeConfig::new(4)
            .with_shake_on_error(false)
            .with_reset_policy(ResetPolicy::after_delay(delay)),
    );

    field.type_text("1234");
    field.set_error(true);
    assert!(field.is_reset_pending());

    field.reset();
    field.type_text("56");

    clock.advance(delay);
    assert!(!field.process_timers());
    assert_eq!(field.code(), "56");
}

#[test]
fn test_new_error_replaces_pending_timer() {
    let delay = Duration::from_millis(500);
    let (mut field, clock, _) = field_with(
        PasscodeConfig::new(4)
            .with_shake_on_error(false)
            .with_reset_policy(ResetPolicy::after_delay(delay)),
    );

    field.type_text("12");
    field.set_error(true);
    clock.advance(Duration::from_millis(400));
    field.set_error(false);
    field.set_error(true);

    clock.advance(Duration::from_millis(100));
    assert!(!field.process_timers());
    assert!(field.is_error());

    clock.advance(Duration::from_millis(400));
    assert!(field.process_timers());
    assert!(!field.is_error());
}

#[test]
fn test_completion_cancels_pending_reset() {
    let delay = Duration::from_millis(500);
    let (mut field, clock, _) = field_with(
        PasscodeConfig::new(4)
            .with_shake_on_error(false)
            .with_reset_policy(ResetPolicy::after_delay(delay)),
    );

    field.type_text("12");
    field.set_error(true);
    field.type_text("34");

    clock.advance(delay);
    assert!(!field.process_timers());
    assert_eq!(field.code(), "1234");
}

#[test]
fn test_set_length_rebuilds_and_clears() {
    let built = Arc::new(AtomicUsize::new(0));
    let counter = built.clone();
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = calls.clone();
    let factory = style_factory(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        RecordingStyle { calls: sink.clone() }
    });

    let (mut field, _, _) = field_with(PasscodeConfig::new(4).with_style_factory(factory));
    let changes = recorder(&field.code_changed);
    assert_eq!(built.load(Ordering::SeqCst), 4);

    field.type_text("12");
    field.set_length(6).unwrap();

    assert_eq!(built.load(Ordering::SeqCst), 10);
    assert_eq!(field.length(), 6);
    assert_eq!(field.code(), "");
    assert_eq!(changes.lock().last().map(String::as_str), Some(""));
    assert_eq!(field.appearances().count(), 6);
}

#[test]
fn test_style_contract_calls() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = calls.clone();
    let factory = style_factory(move || RecordingStyle { calls: sink.clone() });

    let (mut field, _, _) = field_with(PasscodeConfig::new(4).with_style_factory(factory));
    let count = |name: &str| calls.lock().iter().filter(|c| **c == name).count();

    assert_eq!(count("apply"), 4);
    assert_eq!(count("bounds"), 4);

    // Cell 0 becomes filled, cell 1 becomes selected.
    field.type_text("1");
    assert_eq!(count("selection"), 2);

    field.set_error(true);
    assert_eq!(count("error"), 4);

    field.handle_event(InputEvent::CellBoundsChanged {
        index: 2,
        bounds: Rect::new(0.0, 0.0, 10.0, 10.0),
    });
    assert_eq!(count("bounds"), 5);
    assert_eq!(field.appearance(2).map(|a| a.bounds), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
}

#[test]
fn test_resize_lays_out_underlines() {
    let (mut field, _, _) = field_with(PasscodeConfig::new(4).with_spacing(10.0));
    field.handle_event(InputEvent::Resized {
        bounds: Rect::new(0.0, 0.0, 190.0, 50.0),
    });

    let bounds: Vec<Rect> = field.appearances().map(|a| a.bounds).collect();
    assert_eq!(bounds[1], Rect::new(50.0, 0.0, 40.0, 50.0));

    let underline = field
        .appearance(1)
        .and_then(|a| a.layer(LayerKind::Underline))
        .map(|l| l.frame);
    assert_eq!(underline, Some(Rect::new(2.0, 48.0, 36.0, 2.0)));
}

#[test]
fn test_selected_cell_animation_toggle() {
    let (mut field, _, _) = field_with(PasscodeConfig::new(4));
    assert!(field.appearance(0).is_some_and(CellAppearance::is_animating));

    field.set_animate_selected_cell(false);
    assert!(field.appearances().all(|a| !a.is_animating()));
}

#[test]
fn test_rtl_field() {
    let config = PasscodeConfig::new(4)
        .with_strategy(ActiveIndexStrategy::FirstEmpty)
        .with_layout_direction(LayoutDirection::RightToLeft);
    let mut field = PasscodeField::with_parts(config, NullRenderer, Arc::new(ManualClock::new())).unwrap();

    field.type_text("7");

    assert_eq!(field.active_index(), 1);
    assert_eq!(field.active_visual_index(), Some(2));
    assert_eq!(field.glyphs(), vec![None, None, None, Some("7")]);
}

#[test]
fn test_first_empty_full_has_no_selection() {
    let (mut field, _, _) =
        field_with(PasscodeConfig::new(3).with_strategy(ActiveIndexStrategy::FirstEmpty));
    field.type_text("123");

    assert_eq!(field.active_visual_index(), None);
    assert_eq!(field.cell_states(), vec![CellSemanticState::Filled; 3]);
}

#[test]
fn test_closure_validator_and_reject_reason() {
    let no_zero = validator_fn(|s: &str| !s.contains('0'));
    let mut input = InputStateMachine::new(4, ActiveIndexStrategy::FirstEmpty, LayoutDirection::LeftToRight);
    input.set_validator(Some(Arc::new(no_zero)));

    assert_eq!(input.insert_char("0"), InsertOutcome::Rejected(RejectReason::Validator));
    assert!(input.insert_char("1").is_accepted());
}

#[test]
fn test_completion_invalidates_running_shake() {
    let delay = Duration::from_millis(300);
    let (mut field, clock, renderer) =
        field_with(PasscodeConfig::new(4).with_reset_policy(ResetPolicy::after_delay(delay)));

    field.type_text("12");
    field.set_error(true);
    let id = renderer.played.lock()[0];

    field.type_text("34");
    assert_eq!(*renderer.cancelled.lock(), vec![id]);

    field.handle_event(InputEvent::AnimationFinished { id });
    assert!(!field.is_reset_pending());

    clock.advance(delay);
    assert!(!field.process_timers());
    assert_eq!(field.code(), "1234");
}

#[test]
fn test_set_length_invalidates_running_shake() {
    let delay = Duration::from_millis(300);
    let (mut field, clock, renderer) =
        field_with(PasscodeConfig::new(4).with_reset_policy(ResetPolicy::after_delay(delay)));

    field.type_text("1234");
    field.set_error(true);
    let id = renderer.played.lock()[0];

    field.set_length(6).unwrap();
    field.type_text("98");
    field.handle_event(InputEvent::AnimationFinished { id });
    assert!(!field.is_reset_pending());

    clock.advance(delay);
    assert!(!field.process_timers());
    assert_eq!(field.code(), "98");
}

#[test]
fn test_reset_during_running_shake() {
    let delay = Duration::from_millis(300);
    let (mut field, clock, renderer) =
        field_with(PasscodeConfig::new(4).with_reset_policy(ResetPolicy::after_delay(delay)));

    field.type_text("123");
    field.set_error(true);
    let id = renderer.played.lock()[0];

    field.reset();
    assert_eq!(field.code(), "");
    assert!(!field.is_error());
    assert!(renderer.cancelled.lock().contains(&id));

    field.handle_event(InputEvent::AnimationFinished { id });
    assert!(!field.is_reset_pending());

    field.type_text("5");
    clock.advance(delay);
    assert!(!field.process_timers());
    assert_eq!(field.code(), "5");
}
