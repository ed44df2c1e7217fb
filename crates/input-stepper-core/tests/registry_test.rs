//! One stepper per root element.

use input_stepper_core::prelude::*;
use input_stepper_core::ElementRole;
use input_stepper_testing::{init_logging, FakeButton, FakeInput, FakeRoot, StepperRobot};

#[test]
fn binding_twice_returns_the_existing_stepper() {
    init_logging();
    let mut registry = StepperRegistry::new();
    let root = FakeRoot::standard(FakeInput::new("4"));
    let config = StepperConfig::default().with_max(10);

    let first = registry.bind(root.clone(), &config).unwrap();
    assert!(first.is_new());
    first.handle().increase(1);

    let second = registry
        .bind(root.clone(), &StepperConfig::default().with_max(1))
        .unwrap();
    assert!(!second.is_new());
    assert!(first.handle().ptr_eq(second.handle()));
    assert_eq!(registry.len(), 1);

    // The second configuration was ignored.
    assert_eq!(second.handle().amount(), 5);
    assert_eq!(second.handle().read(|c| c.state().max()), Some(10));
}

#[test]
fn rebinding_registers_no_duplicate_work() {
    init_logging();
    let mut registry = StepperRegistry::new();
    let root = FakeRoot::standard(FakeInput::new(""));
    let config = StepperConfig::default().with_max(10);
    let handle = registry.bind(root.clone(), &config).unwrap().into_handle();
    registry.bind(root.clone(), &config).unwrap();
    registry.bind(root.clone(), &config).unwrap();

    let mut robot = StepperRobot::from_handle(handle);
    robot.click_increase();
    assert_eq!(robot.event_names(), vec!["change", "increase"]);
}

#[test]
fn roots_are_independent() {
    let mut registry = StepperRegistry::new();
    let config = StepperConfig::default().with_max(10);
    let left = registry
        .bind(FakeRoot::standard(FakeInput::new("1")), &config)
        .unwrap()
        .into_handle();
    let right = registry
        .bind(FakeRoot::standard(FakeInput::new("8")), &config)
        .unwrap()
        .into_handle();

    left.increase(1);
    right.decrease(3);
    assert_eq!(left.amount(), 2);
    assert_eq!(right.amount(), 5);
    assert_eq!(registry.len(), 2);
    assert!(registry.contains(left.key()));
    assert!(registry.get(right.key()).is_some_and(|h| h.ptr_eq(&right)));
}

#[test]
fn failed_bind_leaves_root_unbound() {
    let mut registry = StepperRegistry::new();
    let root = FakeRoot::new()
        .with_input("input", FakeInput::new(""))
        .with_button("[data-input-stepper-increase]", FakeButton::new());

    let err = registry
        .bind(root.clone(), &StepperConfig::default())
        .err()
        .expect("decrease button is missing");
    assert!(matches!(
        err,
        BindError::MissingElement {
            role: ElementRole::DecreaseButton,
            ..
        }
    ));
    assert!(registry.is_empty());
    assert!(!registry.contains(root.key()));
}
