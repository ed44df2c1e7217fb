//! Robot-style driver for a stepper bound to a [`FakeRoot`].
//!
//! The robot plays the browser's part: it routes keystrokes through the
//! stepper's key-down listener and, when the listener does not prevent the
//! default, types the character into the input. It fires `change` on blur
//! only after the user edited the content, and refuses clicks on disabled
//! buttons.
//!
//! # Example
//!
//! ```
//! use input_stepper_core::{KeyCode, StepperConfig};
//! use input_stepper_testing::{FakeInput, FakeRoot, StepperRobot};
//!
//! let mut robot = StepperRobot::bind(
//!     FakeRoot::standard(FakeInput::new("")),
//!     StepperConfig::default().with_max(5),
//! )
//! .unwrap();
//!
//! robot.click_increase();
//! robot.press(KeyCode::ArrowUp);
//! assert_eq!(robot.amount(), 2);
//! ```

use crate::fake_dom::{FakeButton, FakeInput, FakeRoot, RecordedEvent};
use input_stepper_core::{
    BindError, InputElement, KeyCode, KeyEvent, Modifiers, StepperConfig, StepperHandle,
};

pub struct StepperRobot {
    root: FakeRoot,
    stepper: StepperHandle<FakeRoot>,
    input: FakeInput,
    increase_button: FakeButton,
    decrease_button: FakeButton,
    edited: bool,
}

/// Character a keystroke inserts when its default action runs.
fn typed_char(key: KeyCode, modifiers: Modifiers) -> Option<char> {
    if modifiers.is_shortcut() {
        return None;
    }
    if let Some(digit) = key.digit_value() {
        return char::from_digit(u32::from(digit), 10);
    }
    match key {
        KeyCode::Period | KeyCode::NumpadDecimal => Some('.'),
        KeyCode::NumpadSubtract => Some('-'),
        _ => None,
    }
}

/// Key a character is typed with on a US layout.
fn key_for_char(ch: char) -> KeyCode {
    if let Some(digit) = ch.to_digit(10) {
        return KeyCode::digit(digit as u8).unwrap_or(KeyCode::Other(ch as u32));
    }
    match ch {
        '.' => KeyCode::Period,
        '-' => KeyCode::Other(189),
        ' ' => KeyCode::Other(32),
        other => KeyCode::Other(other.to_ascii_uppercase() as u32),
    }
}

impl StepperRobot {
    /// Binds a stepper to `root` and wraps it.
    pub fn bind(root: FakeRoot, config: StepperConfig) -> Result<Self, BindError> {
        let input_selector = config.input_selector.clone();
        let increase_selector = config.increase_button_selector.clone();
        let decrease_selector = config.decrease_button_selector.clone();
        let stepper = StepperHandle::bind(root.clone(), config)?;
        Ok(Self::attach(
            root,
            stepper,
            &input_selector,
            &increase_selector,
            &decrease_selector,
        ))
    }

    /// Wraps an already bound stepper.
    pub fn from_handle(stepper: StepperHandle<FakeRoot>) -> Self {
        let (input_selector, increase_selector, decrease_selector) = stepper.read(|controller| {
            let config = controller.config();
            (
                config.input_selector.clone(),
                config.increase_button_selector.clone(),
                config.decrease_button_selector.clone(),
            )
        });
        let root = stepper.host().clone();
        Self::attach(
            root,
            stepper,
            &input_selector,
            &increase_selector,
            &decrease_selector,
        )
    }

    fn attach(
        root: FakeRoot,
        stepper: StepperHandle<FakeRoot>,
        input_selector: &str,
        increase_selector: &str,
        decrease_selector: &str,
    ) -> Self {
        let input = root.input(input_selector).unwrap_or_default();
        let increase_button = root.button(increase_selector).unwrap_or_default();
        let decrease_button = root.button(decrease_selector).unwrap_or_default();
        Self {
            root,
            stepper,
            input,
            increase_button,
            decrease_button,
            edited: false,
        }
    }

    pub fn stepper(&self) -> &StepperHandle<FakeRoot> {
        &self.stepper
    }

    pub fn root(&self) -> &FakeRoot {
        &self.root
    }

    pub fn input(&self) -> &FakeInput {
        &self.input
    }

    pub fn increase_button(&self) -> &FakeButton {
        &self.increase_button
    }

    pub fn decrease_button(&self) -> &FakeButton {
        &self.decrease_button
    }

    /// Presses `key` without modifiers. Returns true if the default was prevented.
    pub fn press(&mut self, key: KeyCode) -> bool {
        self.press_with(key, Modifiers::NONE)
    }

    /// Presses `key` with `modifiers`. Returns true if the default was prevented.
    pub fn press_with(&mut self, key: KeyCode, modifiers: Modifiers) -> bool {
        let event = KeyEvent::key_down_with_modifiers(key, modifiers);
        let prevented = self.stepper.on_key_down(&event);
        if !prevented {
            if let Some(ch) = typed_char(key, modifiers) {
                self.input.insert(ch.encode_utf8(&mut [0; 4]));
                self.edited = true;
            }
        }
        prevented
    }

    /// Types `text` one keystroke at a time.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press(key_for_char(ch));
        }
    }

    /// Replaces the content as a paste or select-and-delete would.
    pub fn replace_text(&mut self, text: &str) {
        self.input.set_value(text);
        self.edited = true;
    }

    pub fn clear_input(&mut self) {
        self.replace_text("");
    }

    /// Leaves the input; fires `change` if the user edited it.
    pub fn blur(&mut self) {
        if self.edited {
            self.edited = false;
            self.stepper.on_change();
        }
    }

    /// Fires `change` regardless of edits.
    pub fn fire_change(&mut self) {
        self.edited = false;
        self.stepper.on_change();
    }

    /// Clicks the increase button. Disabled buttons swallow the click.
    pub fn click_increase(&mut self) -> bool {
        if self.increase_button.is_disabled() {
            return false;
        }
        self.stepper.on_increase_click()
    }

    /// Clicks the decrease button. Disabled buttons swallow the click.
    pub fn click_decrease(&mut self) -> bool {
        if self.decrease_button.is_disabled() {
            return false;
        }
        self.stepper.on_decrease_click()
    }

    pub fn amount(&self) -> i64 {
        self.stepper.amount()
    }

    pub fn input_value(&self) -> String {
        self.input.value()
    }

    pub fn increase_disabled(&self) -> bool {
        self.increase_button.is_disabled()
    }

    pub fn decrease_disabled(&self) -> bool {
        self.decrease_button.is_disabled()
    }

    pub fn events(&self) -> Vec<RecordedEvent> {
        self.root.events()
    }

    pub fn take_events(&self) -> Vec<RecordedEvent> {
        self.root.take_events()
    }

    /// Names of recorded events, in dispatch order.
    pub fn event_names(&self) -> Vec<&'static str> {
        self.root
            .events()
            .iter()
            .map(|recorded| recorded.event.name())
            .collect()
    }
}
