//! Platform abstraction for the elements a stepper binds to.
//!
//! The controller never owns elements. Hosts hand out cheap, cloneable
//! handles (a `web_sys::Element` wrapper in the browser, an `Rc` in tests)
//! whose methods take `&self`, matching how DOM nodes are shared.

use crate::events::StepperEvent;
use crate::handle::StepperHandle;
use std::fmt;

/// Identity of a bound root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementKey(pub u64);

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which child of the root a selector was meant to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    Input,
    IncreaseButton,
    DecreaseButton,
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ElementRole::Input => "input",
            ElementRole::IncreaseButton => "increase button",
            ElementRole::DecreaseButton => "decrease button",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    MissingElement {
        role: ElementRole,
        selector: String,
    },
    Platform(String),
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::MissingElement { role, selector } => {
                write!(f, "no {role} matches selector `{selector}`")
            }
            BindError::Platform(reason) => write!(f, "platform error: {reason}"),
        }
    }
}

impl std::error::Error for BindError {}

/// The numeric text input.
pub trait InputElement: Clone {
    /// Current displayed content.
    fn value(&self) -> String;

    /// Replaces the displayed content without raising platform events.
    fn set_value(&self, value: &str);

    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&self, name: &str, value: &str);
}

/// An increase or decrease button.
pub trait ButtonElement: Clone {
    fn has_class(&self, class_name: &str) -> bool;

    fn add_class(&self, class_name: &str);

    fn remove_class(&self, class_name: &str);

    /// Sets or clears the platform's non-interactive flag.
    fn set_disabled(&self, disabled: bool);

    fn attribute(&self, name: &str) -> Option<String>;
}

/// A root element a stepper can bind to.
pub trait StepperHost: Clone + Sized + 'static {
    type Input: InputElement;
    type Button: ButtonElement;

    /// Stable identity of the root, used to refuse double binding.
    fn key(&self) -> ElementKey;

    /// First descendant input matching `selector`.
    fn find_input(&self, selector: &str) -> Result<Option<Self::Input>, BindError>;

    /// First descendant button matching `selector`.
    fn find_button(&self, selector: &str) -> Result<Option<Self::Button>, BindError>;

    /// Raises `event` on `input`.
    ///
    /// Called after the controller borrow is released, so listeners may
    /// call back into `stepper`.
    fn dispatch(&self, input: &Self::Input, event: &StepperEvent, stepper: &StepperHandle<Self>);
}
