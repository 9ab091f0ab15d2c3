//! Integration tests for gilt-stepper.
//!
//! These tests drive the stepper from outside the crate through the headless
//! Pilot, the same way a terminal user would: mouse presses, drags, releases,
//! keys, and the passage of time.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use pretty_assertions::assert_eq;

use gilt_stepper::app::AppConfig;
use gilt_stepper::config::StepperConfig;
use gilt_stepper::event::input::{InputEvent, Key, MouseBtn};
use gilt_stepper::geometry::Region;
use gilt_stepper::testing::{render_to_string, Pilot};
use gilt_stepper::widgets::{ValueRecorder, VerticalStepper};

const MS: Duration = Duration::from_millis(1);

// Default pilot region is (0, 0, 3, 4): rows 0-1 increment, rows 2-3 decrement.
const UP: (u16, u16) = (1, 0);
const DOWN: (u16, u16) = (1, 3);

fn pilot(config: StepperConfig) -> (Pilot, Rc<ValueRecorder>) {
    let mut pilot = Pilot::new(config);
    let recorder = Rc::new(ValueRecorder::new());
    pilot.stepper_mut().set_delegate(&recorder);
    (pilot, recorder)
}

fn tap(pilot: &mut Pilot, (x, y): (u16, u16)) {
    pilot.press(x, y);
    pilot.release(x, y);
}

// ---------------------------------------------------------------------------
// Discrete presses
// ---------------------------------------------------------------------------

#[test]
fn test_increment_scenario_step_two() {
    let (mut pilot, rec) = pilot(StepperConfig::new().with_bounds(0.0, 10.0).with_step_value(2.0));

    tap(&mut pilot, UP);
    assert_eq!(pilot.value(), 2.0);
    assert_eq!(rec.count(), 1);

    for _ in 0..4 {
        tap(&mut pilot, UP);
    }
    assert_eq!(pilot.value(), 10.0);
    assert_eq!(rec.count(), 5);

    tap(&mut pilot, UP);
    assert_eq!(pilot.value(), 10.0);
    assert_eq!(rec.count(), 5);
}

#[test]
fn test_decrement_scenario_step_three() {
    let (mut pilot, rec) = pilot(
        StepperConfig::new()
            .with_bounds(0.0, 10.0)
            .with_step_value(3.0)
            .with_value(5.0),
    );
    tap(&mut pilot, DOWN);
    assert_eq!(pilot.value(), 2.0);
    tap(&mut pilot, DOWN);
    assert_eq!(pilot.value(), 0.0);
    tap(&mut pilot, DOWN);
    assert_eq!(pilot.value(), 0.0);
    assert_eq!(rec.values(), vec![2.0, 0.0]);
}

#[test]
fn test_press_outside_does_nothing() {
    let (mut pilot, rec) = pilot(StepperConfig::new());
    tap(&mut pilot, (10, 10));
    assert_eq!(pilot.value(), 0.0);
    assert_eq!(rec.count(), 0);
}

#[test]
fn test_keyboard_steps() {
    let (mut pilot, rec) = pilot(StepperConfig::new().with_value(5.0));
    pilot.press_key(Key::Up);
    pilot.press_key(Key::Up);
    pilot.press_key(Key::Down);
    pilot.press_key(Key::Char('-'));
    assert_eq!(pilot.value(), 5.0);
    assert_eq!(rec.values(), vec![6.0, 7.0, 6.0, 5.0]);
}

// ---------------------------------------------------------------------------
// Auto-repeat
// ---------------------------------------------------------------------------

fn repeating(max: f64) -> StepperConfig {
    StepperConfig::new()
        .with_bounds(0.0, max)
        .with_auto_repeat(true)
        .with_auto_repeat_interval(100 * MS)
}

#[test]
fn test_hold_repeats_per_interval() {
    let (mut pilot, rec) = pilot(repeating(100.0));
    pilot.press(UP.0, UP.1);
    for _ in 0..7 {
        pilot.advance(50 * MS);
    }
    // 350ms held: one step on press plus floor(350 / 100) repeats.
    assert_eq!(pilot.value(), 4.0);
    assert_eq!(rec.count(), 4);
}

#[test]
fn test_release_mid_repeat_stops_notifications() {
    let (mut pilot, rec) = pilot(repeating(100.0));
    pilot.press(UP.0, UP.1);
    pilot.advance(250 * MS);
    pilot.release(UP.0, UP.1);
    let after_release = rec.count();

    pilot.advance(2000 * MS);
    assert_eq!(rec.count(), after_release);
    assert_eq!(pilot.value(), 3.0);
}

#[test]
fn test_repeat_saturates_at_maximum() {
    let (mut pilot, rec) = pilot(repeating(5.0));
    pilot.press(UP.0, UP.1);
    pilot.advance(5000 * MS);
    assert_eq!(pilot.value(), 5.0);
    assert_eq!(rec.count(), 5);
    assert_eq!(pilot.app().next_deadline(), None);
}

#[test]
fn test_drag_across_halves_reverses_repeat() {
    let (mut pilot, rec) = pilot(repeating(100.0).with_value(50.0));
    pilot.press(UP.0, UP.1);
    pilot.advance(200 * MS);
    assert_eq!(pilot.value(), 53.0);

    pilot.drag(DOWN.0, DOWN.1);
    pilot.advance(300 * MS);
    assert_eq!(pilot.value(), 50.0);
    assert_eq!(rec.values(), vec![51.0, 52.0, 53.0, 52.0, 51.0, 50.0]);
}

#[test]
fn test_drag_off_control_cancels() {
    let (mut pilot, rec) = pilot(repeating(100.0));
    pilot.press(UP.0, UP.1);
    pilot.drag(UP.0, 20);
    assert!(!pilot.stepper().is_pressed());
    pilot.advance(1000 * MS);
    assert_eq!(rec.count(), 1);
}

#[test]
fn test_focus_loss_cancels_repeat() {
    let (mut pilot, rec) = pilot(repeating(100.0));
    pilot.press(UP.0, UP.1);
    pilot.input(InputEvent::FocusLost);
    pilot.advance(1000 * MS);
    assert_eq!(rec.count(), 1);
}

// ---------------------------------------------------------------------------
// Single press policy
// ---------------------------------------------------------------------------

#[test]
fn test_second_button_rejected_while_pressed() {
    let (mut pilot, rec) = pilot(repeating(100.0));
    pilot.press(UP.0, UP.1);
    pilot.press_with(MouseBtn::Right, DOWN.0, DOWN.1);
    pilot.release_with(MouseBtn::Right, DOWN.0, DOWN.1);

    // The left press is still active and still incrementing.
    assert!(pilot.stepper().is_pressed());
    pilot.advance(100 * MS);
    assert_eq!(rec.values(), vec![1.0, 2.0]);
}

// ---------------------------------------------------------------------------
// Value-changed listeners
// ---------------------------------------------------------------------------

#[test]
fn test_listener_observes_plain_stepper() {
    let mut pilot = Pilot::new(repeating(100.0));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    pilot
        .stepper_mut()
        .on_value_changed(move |value| sink.borrow_mut().push(value));

    pilot.press(UP.0, UP.1);
    pilot.advance(200 * MS);
    pilot.release(UP.0, UP.1);
    tap(&mut pilot, DOWN);

    assert!(!pilot.stepper().has_delegate());
    assert_eq!(*seen.borrow(), vec![1.0, 2.0, 3.0, 2.0]);
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn test_declarative_config_drives_pilot() {
    let config = AppConfig::new()
        .with_stepper_description(
            "VerticalStepper {
                minimum-value: -1;
                maximum-value: 1;
                step-value: 0.5;
                auto-repeat: true;
                auto-repeat-interval: 100ms;
            }",
        )
        .unwrap();
    let mut pilot = Pilot::with_config(config);
    pilot.press(DOWN.0, DOWN.1);
    pilot.advance(1000 * MS);
    assert_eq!(pilot.value(), -1.0);
}

#[test]
fn test_initial_value_is_silent() {
    let (mut pilot, rec) = pilot(StepperConfig::new().with_bounds(0.0, 10.0));
    pilot.stepper_mut().set_initial_value(15.0);
    assert_eq!(pilot.value(), 10.0);
    pilot.stepper_mut().set_initial_value(-3.0);
    assert_eq!(pilot.value(), 0.0);
    assert_eq!(rec.count(), 0);
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn test_stepper_renders_both_arrows() {
    let output = render_to_string(&VerticalStepper::new(), 3, 4);
    assert!(output.contains('▲'));
    assert!(output.contains('▼'));
}

#[test]
fn test_pilot_screen_text() {
    let pilot = Pilot::with_config(AppConfig::new().with_region(Region::new(0, 0, 3, 2)));
    assert_eq!(pilot.render_to_text(), " ▲\n ▼");
}
