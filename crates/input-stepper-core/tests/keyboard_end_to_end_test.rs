//! Keystrokes and change events driven through the robot, the way a
//! browser would deliver them.

use input_stepper_core::prelude::*;
use input_stepper_testing::robot_assertions::{assert_amount, assert_buttons, assert_events};
use input_stepper_testing::{FakeInput, FakeRoot, StepperRobot};

fn robot(input: &str, config: StepperConfig) -> StepperRobot {
    StepperRobot::bind(FakeRoot::standard(FakeInput::new(input)), config)
        .expect("standard markup binds")
}

#[test]
fn typed_digits_commit_on_enter() {
    let mut robot = robot("", StepperConfig::default().with_max(100));
    robot.clear_input();
    robot.type_text("27");
    assert_eq!(robot.input_value(), "27");

    assert!(robot.press(KeyCode::Enter), "enter must not submit the form");
    assert_amount(&robot, 27, "after enter");
    assert_events(&robot, &["change"], "enter commit");

    // Blur after the commit finds nothing new.
    robot.blur();
    assert_events(&robot, &["change"], "blur after enter");
}

#[test]
fn typed_value_is_clamped_on_commit() {
    let mut robot = robot("", StepperConfig::default().with_max(50));
    robot.clear_input();
    robot.type_text("999");
    robot.blur();
    assert_amount(&robot, 50, "clamped to max");
    assert_buttons(&robot, false, true, "at max");
}

#[test]
fn letters_commit_and_are_blocked() {
    let mut robot = robot("", StepperConfig::default().with_max(100));
    robot.clear_input();
    robot.type_text("12x");
    assert_eq!(robot.input_value(), "12");
    assert_amount(&robot, 12, "commit on letter");
}

#[test]
fn shifted_digits_are_blocked() {
    let mut robot = robot("5", StepperConfig::default().with_max(100));
    assert!(robot.press_with(KeyCode::Digit1, Modifiers::SHIFT));
    assert_eq!(robot.input_value(), "5");
    assert_events(&robot, &[], "no commit for shifted digit");
}

#[test]
fn numpad_digits_type() {
    let mut robot = robot("", StepperConfig::default().with_max(100));
    robot.clear_input();
    assert!(!robot.press(KeyCode::Numpad4));
    assert!(!robot.press(KeyCode::Numpad2));
    assert_eq!(robot.input_value(), "42");
}

#[test]
fn arrows_step_by_one_and_shift_by_ten() {
    let mut robot = robot("", StepperConfig::default().with_max(100));
    robot.press(KeyCode::ArrowUp);
    assert_amount(&robot, 1, "up");
    robot.press_with(KeyCode::ArrowUp, Modifiers::SHIFT);
    assert_amount(&robot, 11, "shift up");
    robot.press_with(KeyCode::ArrowDown, Modifiers::SHIFT);
    assert_amount(&robot, 1, "shift down");
    robot.press(KeyCode::ArrowDown);
    assert_amount(&robot, 0, "down");
    assert_events(
        &robot,
        &[
            "change", "increase", "change", "increase", "change", "decrease", "change",
            "decrease",
        ],
        "arrow sequence",
    );
}

#[test]
fn arrows_stop_at_the_limits() {
    let mut robot = robot("95", StepperConfig::default().with_max(100));
    robot.press_with(KeyCode::ArrowUp, Modifiers::SHIFT);
    assert_amount(&robot, 100, "clamped");
    assert_buttons(&robot, false, true, "at max");

    robot.take_events();
    robot.press_with(KeyCode::ArrowUp, Modifiers::SHIFT);
    assert_amount(&robot, 100, "still at max");
    assert_events(&robot, &[], "disabled increase ignores arrows");

    robot.stepper().set_min(100);
    assert!(robot.press(KeyCode::ArrowDown));
    assert_events(&robot, &[], "disabled decrease ignores arrows");
}

#[test]
fn down_at_min_still_commits_typed_text() {
    let mut robot = robot("", StepperConfig::default().with_max(10));
    assert_buttons(&robot, true, false, "starts at min");
    robot.clear_input();
    robot.type_text("4");

    assert!(robot.press(KeyCode::ArrowDown));
    assert_amount(&robot, 4, "typed text committed");
    assert_eq!(robot.input_value(), "4");
    assert_events(&robot, &["change"], "commit without a step");
    assert_buttons(&robot, false, false, "inside the range");
}

#[test]
fn down_steps_from_the_stored_amount_then_commits() {
    let mut robot = robot("6", StepperConfig::default().with_max(10));
    robot.clear_input();
    robot.type_text("9");

    robot.press(KeyCode::ArrowDown);
    assert_amount(&robot, 5, "stepped from the stored amount");
    assert_eq!(robot.input_value(), "5");
    assert_events(&robot, &["change", "decrease"], "step overwrote the typed text");
}

#[test]
fn editing_keys_and_shortcuts_pass_through() {
    let mut robot = robot("3", StepperConfig::default().with_max(100));
    for key in [
        KeyCode::Backspace,
        KeyCode::Delete,
        KeyCode::Tab,
        KeyCode::Escape,
        KeyCode::Home,
        KeyCode::End,
        KeyCode::ArrowLeft,
        KeyCode::ArrowRight,
    ] {
        assert!(!robot.press(key), "{key:?} must pass");
    }
    let ctrl = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };
    assert!(!robot.press_with(KeyCode::Other(65), ctrl));
    assert_events(&robot, &[], "nothing committed");
    assert_amount(&robot, 3, "unchanged");
}

#[test]
fn clearing_then_change_resets_to_initial_value() {
    let mut robot = robot(
        "",
        StepperConfig::default()
            .with_min(0)
            .with_max(10)
            .with_initial_value(3),
    );
    assert_amount(&robot, 3, "initial");

    robot.clear_input();
    robot.blur();
    assert_amount(&robot, 3, "reset to initial, not min");
    assert_events(&robot, &[], "amount never changed");
}

#[test]
fn clearing_after_stepping_writes_initial_value() {
    let mut robot = robot("", StepperConfig::default().with_max(10).with_initial_value(3));
    robot.click_increase();
    robot.click_increase();
    robot.click_increase();
    assert_amount(&robot, 6, "stepped");
    robot.take_events();

    robot.clear_input();
    robot.blur();
    assert_amount(&robot, 3, "reset");
    assert_events(&robot, &["change"], "reset notifies");
}

#[test]
fn trailing_garbage_is_cleaned_up_on_commit() {
    let mut robot = robot("7", StepperConfig::default().with_max(10));
    robot.replace_text("7abc");
    robot.fire_change();
    assert_amount(&robot, 7, "display restored");
    assert_events(&robot, &[], "same amount, no notification");
}
