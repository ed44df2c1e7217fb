//! Stepper configuration.

/// Default selector locating the increase button within the root.
pub const DEFAULT_INCREASE_SELECTOR: &str = "[data-input-stepper-increase]";
/// Default selector locating the decrease button within the root.
pub const DEFAULT_DECREASE_SELECTOR: &str = "[data-input-stepper-decrease]";
/// Default data attribute (without the `data-` prefix) holding the per-click increase step.
pub const DEFAULT_INCREASE_STEP_ATTRIBUTE: &str = "input-stepper-increase";
/// Default data attribute (without the `data-` prefix) holding the per-click decrease step.
pub const DEFAULT_DECREASE_STEP_ATTRIBUTE: &str = "input-stepper-decrease";
/// Default class marking a disabled button.
pub const DEFAULT_DISABLED_CLASS: &str = "is-disabled";
/// Default selector locating the numeric input within the root.
pub const DEFAULT_INPUT_SELECTOR: &str = "input";
/// Default lower limit.
pub const DEFAULT_MIN: i64 = 0;

/// Per-instance stepper options.
///
/// Built once before binding and never changed afterwards; the limits it
/// carries are only starting points, the controller may move them later via
/// `set_min`/`set_max`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepperConfig {
    pub increase_button_selector: String,
    pub decrease_button_selector: String,
    pub increase_step_attribute: String,
    pub decrease_step_attribute: String,
    pub disabled_class_name: String,
    pub input_selector: String,
    pub initial_value: Option<i64>,
    pub min: i64,
    /// Upper limit; `None` is unbounded.
    pub max: Option<i64>,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            increase_button_selector: DEFAULT_INCREASE_SELECTOR.to_owned(),
            decrease_button_selector: DEFAULT_DECREASE_SELECTOR.to_owned(),
            increase_step_attribute: DEFAULT_INCREASE_STEP_ATTRIBUTE.to_owned(),
            decrease_step_attribute: DEFAULT_DECREASE_STEP_ATTRIBUTE.to_owned(),
            disabled_class_name: DEFAULT_DISABLED_CLASS.to_owned(),
            input_selector: DEFAULT_INPUT_SELECTOR.to_owned(),
            initial_value: None,
            min: DEFAULT_MIN,
            max: None,
        }
    }
}

impl StepperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_increase_button_selector(mut self, selector: impl Into<String>) -> Self {
        self.increase_button_selector = selector.into();
        self
    }

    pub fn with_decrease_button_selector(mut self, selector: impl Into<String>) -> Self {
        self.decrease_button_selector = selector.into();
        self
    }

    pub fn with_increase_step_attribute(mut self, name: impl Into<String>) -> Self {
        self.increase_step_attribute = name.into();
        self
    }

    pub fn with_decrease_step_attribute(mut self, name: impl Into<String>) -> Self {
        self.decrease_step_attribute = name.into();
        self
    }

    pub fn with_disabled_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.disabled_class_name = class_name.into();
        self
    }

    pub fn with_input_selector(mut self, selector: impl Into<String>) -> Self {
        self.input_selector = selector.into();
        self
    }

    pub fn with_initial_value(mut self, value: i64) -> Self {
        self.initial_value = Some(value);
        self
    }

    pub fn with_min(mut self, min: i64) -> Self {
        self.min = min;
        self
    }

    pub fn with_max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    /// Removes the upper limit.
    pub fn unbounded(mut self) -> Self {
        self.max = None;
        self
    }

    /// Full attribute name (`data-…`) for the increase step override.
    pub fn increase_step_data_attribute(&self) -> String {
        format!("data-{}", self.increase_step_attribute)
    }

    /// Full attribute name (`data-…`) for the decrease step override.
    pub fn decrease_step_data_attribute(&self) -> String {
        format!("data-{}", self.decrease_step_attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_markup_conventions() {
        let config = StepperConfig::default();
        assert_eq!(config.increase_button_selector, "[data-input-stepper-increase]");
        assert_eq!(config.decrease_button_selector, "[data-input-stepper-decrease]");
        assert_eq!(config.increase_step_attribute, "input-stepper-increase");
        assert_eq!(config.decrease_step_attribute, "input-stepper-decrease");
        assert_eq!(config.disabled_class_name, "is-disabled");
        assert_eq!(config.input_selector, "input");
        assert_eq!(config.initial_value, None);
        assert_eq!(config.min, 0);
        assert_eq!(config.max, None);
    }

    #[test]
    fn builder_overrides_fields() {
        let config = StepperConfig::new()
            .with_min(-5)
            .with_max(5)
            .with_initial_value(2)
            .with_disabled_class_name("off")
            .with_input_selector(".qty");
        assert_eq!(config.min, -5);
        assert_eq!(config.max, Some(5));
        assert_eq!(config.initial_value, Some(2));
        assert_eq!(config.disabled_class_name, "off");
        assert_eq!(config.input_selector, ".qty");
        assert_eq!(config.unbounded().max, None);
    }

    #[test]
    fn step_attributes_gain_data_prefix() {
        let config = StepperConfig::default().with_increase_step_attribute("up");
        assert_eq!(config.increase_step_data_attribute(), "data-up");
        assert_eq!(
            config.decrease_step_data_attribute(),
            "data-input-stepper-decrease"
        );
    }
}
