//! Core runtime for input steppers.
//!
//! A stepper augments a numeric text input with increase/decrease buttons,
//! keeps the value inside an integer range and mirrors the range limits onto
//! the buttons' disabled state. Everything here is platform-independent: the
//! DOM (or a fake of it) is reached through the traits in [`host`].

pub mod amount;
pub mod config;
pub mod controller;
pub mod events;
pub mod handle;
pub mod host;
pub mod key_event;
pub mod keyboard;
pub mod registry;

pub use amount::{clamp_amount, parse_amount, RawAmount};
pub use config::StepperConfig;
pub use controller::{StepperController, StepperState};
pub use events::{EventQueue, StepperEvent};
pub use handle::StepperHandle;
pub use host::{BindError, ButtonElement, ElementKey, ElementRole, InputElement, StepperHost};
pub use key_event::{KeyCode, KeyEvent, Modifiers};
pub use keyboard::{classify_key, KeyAction, KeyOutcome};
pub use registry::{Binding, StepperRegistry};

pub mod prelude {
    pub use crate::config::StepperConfig;
    pub use crate::events::StepperEvent;
    pub use crate::handle::StepperHandle;
    pub use crate::host::{BindError, ButtonElement, ElementKey, InputElement, StepperHost};
    pub use crate::key_event::{KeyCode, KeyEvent, Modifiers};
    pub use crate::registry::{Binding, StepperRegistry};
}
