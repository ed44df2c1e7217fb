//! Assertion utilities for robot testing
//!
//! Helpers that check the amount, the displayed text and the button state
//! together, so a test failure shows the whole stepper at once.

use crate::robot::StepperRobot;

fn describe(robot: &StepperRobot) -> String {
    format!(
        "amount={} input={:?} decrease_disabled={} increase_disabled={}",
        robot.amount(),
        robot.input_value(),
        robot.decrease_disabled(),
        robot.increase_disabled()
    )
}

/// Assert the stored amount and the displayed text both equal `expected`.
pub fn assert_amount(robot: &StepperRobot, expected: i64, msg: &str) {
    assert!(
        robot.amount() == expected && robot.input_value() == expected.to_string(),
        "{}: expected amount {}, got {}",
        msg,
        expected,
        describe(robot)
    );
}

/// Assert which buttons are disabled.
///
/// Checks the platform flag and the disabled class together.
pub fn assert_buttons(
    robot: &StepperRobot,
    decrease_disabled: bool,
    increase_disabled: bool,
    msg: &str,
) {
    let class_name = robot
        .stepper()
        .read(|controller| controller.config().disabled_class_name.clone());
    let decrease_marked = robot
        .decrease_button()
        .classes()
        .iter()
        .any(|class| *class == class_name);
    let increase_marked = robot
        .increase_button()
        .classes()
        .iter()
        .any(|class| *class == class_name);
    assert!(
        robot.decrease_disabled() == decrease_disabled
            && decrease_marked == decrease_disabled
            && robot.increase_disabled() == increase_disabled
            && increase_marked == increase_disabled,
        "{}: expected decrease_disabled={} increase_disabled={}, got {} (classes: {:?} / {:?})",
        msg,
        decrease_disabled,
        increase_disabled,
        describe(robot),
        robot.decrease_button().classes(),
        robot.increase_button().classes()
    );
}

/// Assert the recorded event names, in order.
pub fn assert_events(robot: &StepperRobot, expected: &[&str], msg: &str) {
    let actual = robot.event_names();
    assert_eq!(actual, expected, "{}: unexpected events", msg);
}
