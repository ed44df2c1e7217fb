//! Notifications a stepper emits on its input element.

use smallvec::SmallVec;
use std::fmt;

/// A notification raised by the controller.
///
/// `Change` only follows an actual non-silent write. `Increase`/`Decrease`
/// follow every accepted step request, even when the value was already at
/// its limit and nothing was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepperEvent {
    Change,
    Increase { step: i64 },
    Decrease { step: i64 },
}

impl StepperEvent {
    /// DOM event type name.
    pub fn name(&self) -> &'static str {
        match self {
            StepperEvent::Change => "change",
            StepperEvent::Increase { .. } => "increase",
            StepperEvent::Decrease { .. } => "decrease",
        }
    }

    /// The requested step, for step notifications.
    pub fn step(&self) -> Option<i64> {
        match self {
            StepperEvent::Change => None,
            StepperEvent::Increase { step } | StepperEvent::Decrease { step } => Some(*step),
        }
    }
}

impl fmt::Display for StepperEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.step() {
            Some(step) => write!(f, "{}({step})", self.name()),
            None => f.write_str(self.name()),
        }
    }
}

/// Notifications queued during one controller mutation.
///
/// A step request yields at most a `change` followed by the step event.
pub type EventQueue = SmallVec<[StepperEvent; 2]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_dom_event_types() {
        assert_eq!(StepperEvent::Change.name(), "change");
        assert_eq!(StepperEvent::Increase { step: 1 }.name(), "increase");
        assert_eq!(StepperEvent::Decrease { step: 10 }.name(), "decrease");
    }

    #[test]
    fn display_includes_step() {
        assert_eq!(StepperEvent::Increase { step: 5 }.to_string(), "increase(5)");
        assert_eq!(StepperEvent::Change.to_string(), "change");
        assert_eq!(StepperEvent::Change.step(), None);
    }
}
