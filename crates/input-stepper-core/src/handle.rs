//! Shared handle to a bound controller.
//!
//! Platform listeners each capture a clone of the handle. Every entry point
//! borrows the controller for the duration of the mutation only, then hands
//! the queued notifications to the host. A listener reacting to one of those
//! notifications can therefore call back into the same stepper.

use crate::amount::RawAmount;
use crate::config::StepperConfig;
use crate::controller::StepperController;
use crate::events::EventQueue;
use crate::host::{BindError, ElementKey, StepperHost};
use crate::key_event::KeyEvent;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

pub struct StepperHandle<H: StepperHost> {
    host: H,
    controller: Rc<RefCell<StepperController<H>>>,
}

impl<H: StepperHost> Clone for StepperHandle<H> {
    fn clone(&self) -> Self {
        Self {
            host: self.host.clone(),
            controller: Rc::clone(&self.controller),
        }
    }
}

impl<H: StepperHost> fmt::Debug for StepperHandle<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("StepperHandle");
        debug.field("key", &self.key());
        match self.controller.try_borrow() {
            Ok(controller) => debug.field("state", controller.state()),
            Err(_) => debug.field("state", &"<borrowed>"),
        };
        debug.finish()
    }
}

impl<H: StepperHost> StepperHandle<H> {
    /// Builds a controller for `host`. Does not consult any registry.
    pub fn bind(host: H, config: StepperConfig) -> Result<Self, BindError> {
        let controller = StepperController::new(&host, config)?;
        Ok(Self {
            host,
            controller: Rc::new(RefCell::new(controller)),
        })
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn key(&self) -> ElementKey {
        self.host.key()
    }

    /// Returns true if both handles refer to the same controller.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller)
    }

    /// Reads controller state.
    pub fn read<R>(&self, f: impl FnOnce(&StepperController<H>) -> R) -> R {
        f(&self.controller.borrow())
    }

    /// Mutates the controller, then delivers queued notifications.
    pub fn update<R>(&self, f: impl FnOnce(&mut StepperController<H>) -> R) -> R {
        let (result, events, input) = {
            let mut controller = self.controller.borrow_mut();
            let result = f(&mut controller);
            (result, controller.take_events(), controller.input().clone())
        };
        self.deliver(&input, events);
        result
    }

    fn deliver(&self, input: &H::Input, events: EventQueue) {
        for event in events {
            log::trace!("stepper {} emits {event}", self.key());
            self.host.dispatch(input, &event, self);
        }
    }

    pub fn amount(&self) -> i64 {
        self.read(|controller| controller.amount())
    }

    pub fn value(&self) -> String {
        self.read(|controller| controller.value())
    }

    pub fn set_value(&self, raw: impl Into<RawAmount>, silent: bool) {
        let raw = raw.into();
        self.update(|controller| controller.set_value(raw, silent));
    }

    pub fn set_min(&self, raw: impl Into<RawAmount>) {
        let raw = raw.into();
        self.update(|controller| controller.set_min(raw));
    }

    pub fn set_max(&self, raw: impl Into<RawAmount>) {
        let raw = raw.into();
        self.update(|controller| controller.set_max(raw));
    }

    pub fn increase(&self, step: i64) -> bool {
        self.update(|controller| controller.increase(step))
    }

    pub fn decrease(&self, step: i64) -> bool {
        self.update(|controller| controller.decrease(step))
    }

    /// Key-down listener body. Returns true when the default must be prevented.
    pub fn on_key_down(&self, event: &KeyEvent) -> bool {
        self.update(|controller| controller.handle_key_down(event))
    }

    /// Change listener body.
    pub fn on_change(&self) {
        self.update(|controller| controller.handle_change());
    }

    /// Increase-button click listener body.
    pub fn on_increase_click(&self) -> bool {
        self.update(|controller| {
            let step = controller.increase_click_step();
            controller.increase(step)
        })
    }

    /// Decrease-button click listener body.
    pub fn on_decrease_click(&self) -> bool {
        self.update(|controller| {
            let step = controller.decrease_click_step();
            controller.decrease(step)
        })
    }
}
