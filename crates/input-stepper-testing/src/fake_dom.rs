//! In-memory stand-ins for the stepper's DOM elements.
//!
//! Selectors are matched verbatim: an element registered under `"input"` is
//! found by exactly that selector string and nothing else.

use input_stepper_core::config::{DEFAULT_DECREASE_SELECTOR, DEFAULT_INCREASE_SELECTOR};
use input_stepper_core::{
    BindError, ButtonElement, ElementKey, InputElement, StepperEvent, StepperHandle, StepperHost,
};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ROOT_KEY: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Default)]
struct FakeInputState {
    value: String,
    attributes: BTreeMap<String, String>,
}

/// A text input.
#[derive(Debug, Clone, Default)]
pub struct FakeInput {
    state: Rc<RefCell<FakeInputState>>,
}

impl FakeInput {
    pub fn new(value: &str) -> Self {
        let input = Self::default();
        input.state.borrow_mut().value = value.to_owned();
        input
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Appends text at the caret, as a keystroke's default action would.
    pub fn insert(&self, text: &str) {
        self.state.borrow_mut().value.push_str(text);
    }

    pub fn attributes(&self) -> BTreeMap<String, String> {
        self.state.borrow().attributes.clone()
    }
}

impl InputElement for FakeInput {
    fn value(&self) -> String {
        self.state.borrow().value.clone()
    }

    fn set_value(&self, value: &str) {
        self.state.borrow_mut().value = value.to_owned();
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.state
            .borrow_mut()
            .attributes
            .insert(name.to_owned(), value.to_owned());
    }
}

#[derive(Debug, Default)]
struct FakeButtonState {
    classes: BTreeSet<String>,
    disabled: bool,
    attributes: BTreeMap<String, String>,
}

/// A button.
#[derive(Debug, Clone, Default)]
pub struct FakeButton {
    state: Rc<RefCell<FakeButtonState>>,
}

impl FakeButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.state
            .borrow_mut()
            .attributes
            .insert(name.to_owned(), value.to_owned());
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.state.borrow().disabled
    }

    pub fn classes(&self) -> Vec<String> {
        self.state.borrow().classes.iter().cloned().collect()
    }
}

impl ButtonElement for FakeButton {
    fn has_class(&self, class_name: &str) -> bool {
        self.state.borrow().classes.contains(class_name)
    }

    fn add_class(&self, class_name: &str) {
        self.state.borrow_mut().classes.insert(class_name.to_owned());
    }

    fn remove_class(&self, class_name: &str) {
        self.state.borrow_mut().classes.remove(class_name);
    }

    fn set_disabled(&self, disabled: bool) {
        self.state.borrow_mut().disabled = disabled;
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }
}

/// A notification as observed by a page listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedEvent {
    pub event: StepperEvent,
    /// Stepper amount read through the stepper reference at dispatch time.
    pub amount: i64,
}

/// Page listener for stepper notifications on the input.
pub type FakeListener = Rc<dyn Fn(&StepperEvent, &StepperHandle<FakeRoot>)>;

struct FakeRootInner {
    key: ElementKey,
    inputs: RefCell<Vec<(String, FakeInput)>>,
    buttons: RefCell<Vec<(String, FakeButton)>>,
    events: RefCell<Vec<RecordedEvent>>,
    listeners: RefCell<Vec<FakeListener>>,
}

/// A root container. Clones share identity.
#[derive(Clone)]
pub struct FakeRoot {
    inner: Rc<FakeRootInner>,
}

impl Default for FakeRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeRoot {
    /// An empty root with a fresh identity.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(FakeRootInner {
                key: ElementKey(NEXT_ROOT_KEY.fetch_add(1, Ordering::Relaxed)),
                inputs: RefCell::new(Vec::new()),
                buttons: RefCell::new(Vec::new()),
                events: RefCell::new(Vec::new()),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Root with an input and both buttons under the default selectors.
    pub fn standard(input: FakeInput) -> Self {
        Self::new()
            .with_input("input", input)
            .with_button(DEFAULT_INCREASE_SELECTOR, FakeButton::new())
            .with_button(DEFAULT_DECREASE_SELECTOR, FakeButton::new())
    }

    pub fn with_input(self, selector: &str, input: FakeInput) -> Self {
        self.inner
            .inputs
            .borrow_mut()
            .push((selector.to_owned(), input));
        self
    }

    pub fn with_button(self, selector: &str, button: FakeButton) -> Self {
        self.inner
            .buttons
            .borrow_mut()
            .push((selector.to_owned(), button));
        self
    }

    /// Input registered under `selector`.
    pub fn input(&self, selector: &str) -> Option<FakeInput> {
        self.inner
            .inputs
            .borrow()
            .iter()
            .find(|(registered, _)| registered == selector)
            .map(|(_, input)| input.clone())
    }

    /// Button registered under `selector`.
    pub fn button(&self, selector: &str) -> Option<FakeButton> {
        self.inner
            .buttons
            .borrow()
            .iter()
            .find(|(registered, _)| registered == selector)
            .map(|(_, button)| button.clone())
    }

    /// Attaches a page listener for stepper notifications.
    pub fn add_listener(
        &self,
        listener: impl Fn(&StepperEvent, &StepperHandle<FakeRoot>) + 'static,
    ) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub fn events(&self) -> Vec<RecordedEvent> {
        self.inner.events.borrow().clone()
    }

    pub fn take_events(&self) -> Vec<RecordedEvent> {
        std::mem::take(&mut *self.inner.events.borrow_mut())
    }
}

impl StepperHost for FakeRoot {
    type Input = FakeInput;
    type Button = FakeButton;

    fn key(&self) -> ElementKey {
        self.inner.key
    }

    fn find_input(&self, selector: &str) -> Result<Option<FakeInput>, BindError> {
        Ok(self.input(selector))
    }

    fn find_button(&self, selector: &str) -> Result<Option<FakeButton>, BindError> {
        Ok(self.button(selector))
    }

    fn dispatch(&self, _input: &FakeInput, event: &StepperEvent, stepper: &StepperHandle<Self>) {
        self.inner.events.borrow_mut().push(RecordedEvent {
            event: *event,
            amount: stepper.amount(),
        });

        // The stepper listens for change on its own input.
        if *event == StepperEvent::Change {
            stepper.on_change();
        }

        let listeners = self.inner.listeners.borrow().clone();
        for listener in listeners {
            listener(event, stepper);
        }
    }
}
