//! The stepper controller: value storage, clamping and button state.

use crate::amount::{clamp_amount, parse_amount, RawAmount};
use crate::config::StepperConfig;
use crate::events::{EventQueue, StepperEvent};
use crate::host::{BindError, ButtonElement, ElementRole, InputElement, StepperHost};
use crate::key_event::KeyEvent;
use crate::keyboard::{classify_key, KeyAction};

/// Input hint restricting on-screen keyboards to digits.
pub const NUMERIC_PATTERN: &str = "[0-9]*";

/// Mutable stepper state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepperState {
    /// `None` only before the first write during construction.
    amount: Option<i64>,
    min: Option<i64>,
    max: Option<i64>,
    initial_value: i64,
}

impl StepperState {
    pub fn amount(&self) -> Option<i64> {
        self.amount
    }

    pub fn min(&self) -> Option<i64> {
        self.min
    }

    pub fn max(&self) -> Option<i64> {
        self.max
    }

    pub fn initial_value(&self) -> i64 {
        self.initial_value
    }
}

/// Controller for one bound root element.
///
/// Notifications produced by a mutation are queued rather than raised
/// directly; [`crate::StepperHandle`] drains them once the mutation has
/// finished. Use the controller directly only when you deliver them
/// yourself via [`StepperController::take_events`].
pub struct StepperController<H: StepperHost> {
    config: StepperConfig,
    input: H::Input,
    increase_button: H::Button,
    decrease_button: H::Button,
    state: StepperState,
    pending: EventQueue,
}

fn declared_limit<I: InputElement>(input: &I, name: &str) -> Option<i64> {
    input
        .attribute(name)
        .filter(|value| !value.is_empty())
        .and_then(|value| parse_amount(&value))
}

fn step_or_one(step: i64) -> i64 {
    if step == 0 {
        1
    } else {
        step
    }
}

impl<H: StepperHost> StepperController<H> {
    /// Resolves the child elements of `host` and performs the initial silent write.
    pub fn new(host: &H, config: StepperConfig) -> Result<Self, BindError> {
        let input = host
            .find_input(&config.input_selector)?
            .ok_or_else(|| BindError::MissingElement {
                role: ElementRole::Input,
                selector: config.input_selector.clone(),
            })?;
        let decrease_button = host
            .find_button(&config.decrease_button_selector)?
            .ok_or_else(|| BindError::MissingElement {
                role: ElementRole::DecreaseButton,
                selector: config.decrease_button_selector.clone(),
            })?;
        let increase_button = host
            .find_button(&config.increase_button_selector)?
            .ok_or_else(|| BindError::MissingElement {
                role: ElementRole::IncreaseButton,
                selector: config.increase_button_selector.clone(),
            })?;

        let min = declared_limit(&input, "min").unwrap_or(config.min);
        let max = declared_limit(&input, "max").or(config.max);
        let initial_value = parse_amount(&input.value())
            .or(config.initial_value)
            .unwrap_or(min);
        log::trace!("stepper {} limits [{min}, {max:?}], initial {initial_value}", host.key());

        let mut controller = Self {
            config,
            input,
            increase_button,
            decrease_button,
            state: StepperState {
                amount: None,
                min: Some(min),
                max,
                initial_value,
            },
            pending: EventQueue::new(),
        };

        controller.set_value(initial_value, true);
        controller.refresh_buttons();
        controller.input.set_attribute("pattern", NUMERIC_PATTERN);

        Ok(controller)
    }

    pub fn config(&self) -> &StepperConfig {
        &self.config
    }

    pub fn state(&self) -> &StepperState {
        &self.state
    }

    pub fn input(&self) -> &H::Input {
        &self.input
    }

    pub fn increase_button(&self) -> &H::Button {
        &self.increase_button
    }

    pub fn decrease_button(&self) -> &H::Button {
        &self.decrease_button
    }

    /// Current stored amount.
    pub fn amount(&self) -> i64 {
        self.state.amount.unwrap_or(self.state.initial_value)
    }

    /// Raw input content, unparsed.
    pub fn value(&self) -> String {
        self.input.value()
    }

    /// Parses `raw` and writes it, unless it equals the stored amount.
    ///
    /// Unparseable input stands for the initial value in that comparison.
    pub fn set_value(&mut self, raw: impl Into<RawAmount>, silent: bool) {
        let parsed = raw.into().parse();
        if self.state.amount == Some(parsed.unwrap_or(self.state.initial_value)) {
            return;
        }
        self.apply(parsed, silent);
    }

    /// Commits whatever the input currently displays.
    pub fn commit(&mut self) {
        let content = self.input.value();
        self.set_value(content, false);
        self.resync_display();
    }

    /// Moves the lower limit and re-normalizes the displayed content silently.
    ///
    /// Unparseable input removes the lower limit.
    pub fn set_min(&mut self, raw: impl Into<RawAmount>) {
        self.state.min = raw.into().parse();
        self.reapply_limits();
    }

    /// Moves the upper limit and re-normalizes the displayed content silently.
    ///
    /// Unparseable input removes the upper limit.
    pub fn set_max(&mut self, raw: impl Into<RawAmount>) {
        self.state.max = raw.into().parse();
        self.reapply_limits();
    }

    /// Steps up by `step` (0 counts as 1) unless the increase button is disabled.
    ///
    /// Returns false when the request was ignored.
    pub fn increase(&mut self, step: i64) -> bool {
        if self.increase_button.has_class(&self.config.disabled_class_name) {
            return false;
        }
        let target = self.amount().saturating_add(step_or_one(step));
        self.set_value(target, false);
        self.pending.push(StepperEvent::Increase { step });
        true
    }

    /// Steps down by `step` (0 counts as 1) unless the decrease button is disabled.
    ///
    /// Returns false when the request was ignored.
    pub fn decrease(&mut self, step: i64) -> bool {
        if self.decrease_button.has_class(&self.config.disabled_class_name) {
            return false;
        }
        let target = self.amount().saturating_sub(step_or_one(step));
        self.set_value(target, false);
        self.pending.push(StepperEvent::Decrease { step });
        true
    }

    /// Step for a click on the increase button, from its data attribute.
    pub fn increase_click_step(&self) -> i64 {
        Self::click_step(
            &self.increase_button,
            &self.config.increase_step_data_attribute(),
        )
    }

    /// Step for a click on the decrease button, from its data attribute.
    pub fn decrease_click_step(&self) -> i64 {
        Self::click_step(
            &self.decrease_button,
            &self.config.decrease_step_data_attribute(),
        )
    }

    fn click_step(button: &H::Button, attribute: &str) -> i64 {
        button
            .attribute(attribute)
            .and_then(|value| parse_amount(&value))
            .filter(|step| *step != 0)
            .unwrap_or(1)
    }

    /// Applies the keyboard rules to a key-down event.
    ///
    /// Returns true when the platform default action must be suppressed.
    pub fn handle_key_down(&mut self, event: &KeyEvent) -> bool {
        let outcome = classify_key(event);
        match outcome.action {
            KeyAction::None => {}
            KeyAction::Commit => self.commit(),
            KeyAction::Increase(step) => {
                self.increase(step);
            }
            KeyAction::Decrease(step) => {
                self.decrease(step);
            }
            KeyAction::DecreaseThenCommit(step) => {
                self.decrease(step);
                self.commit();
            }
        }
        outcome.prevent_default
    }

    /// Reacts to the platform change event on the input.
    pub fn handle_change(&mut self) {
        let content = self.input.value();
        if content.is_empty() {
            let initial_value = self.state.initial_value;
            self.set_value(initial_value, false);
        } else {
            self.set_value(content, false);
        }
        self.resync_display();
    }

    // A commit that parses to the stored amount writes nothing, which would
    // leave "" or "7abc" on screen. Show the amount again without notifying.
    fn resync_display(&self) {
        let shown = self.amount().to_string();
        if self.input.value() != shown {
            self.input.set_value(&shown);
        }
    }

    /// Drains notifications queued since the last call.
    pub fn take_events(&mut self) -> EventQueue {
        std::mem::take(&mut self.pending)
    }

    fn reapply_limits(&mut self) {
        let content = parse_amount(&self.input.value());
        self.apply(content, true);
    }

    fn apply(&mut self, parsed: Option<i64>, silent: bool) {
        let amount = clamp_amount(
            parsed.unwrap_or(self.state.initial_value),
            self.state.min,
            self.state.max,
        );
        self.state.amount = Some(amount);
        self.input.set_value(&amount.to_string());
        if !silent {
            self.pending.push(StepperEvent::Change);
        }
        self.refresh_buttons();
    }

    fn refresh_buttons(&self) {
        let amount = self.amount();
        let at_min = self.state.min.is_some_and(|min| amount <= min);
        let at_max = self.state.max.is_some_and(|max| amount >= max);
        self.set_button_enabled(&self.decrease_button, !at_min);
        self.set_button_enabled(&self.increase_button, !at_max);
    }

    fn set_button_enabled(&self, button: &H::Button, enabled: bool) {
        let class_name = &self.config.disabled_class_name;
        if enabled {
            button.remove_class(class_name);
        } else {
            button.add_class(class_name);
        }
        button.set_disabled(!enabled);
    }
}
