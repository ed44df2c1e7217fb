//! Options builder exposed to JavaScript.

use crate::stepper::InputStepper;
use input_stepper_core::StepperConfig;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Mutable options bag mirroring [`StepperConfig`].
///
/// ```js
/// const options = new InputStepperOptions();
/// options.max = 10;
/// options.selectorInput = "input.amount";
/// options.bind(".stepper");
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct InputStepperOptions {
    config: StepperConfig,
}

impl InputStepperOptions {
    pub fn config(&self) -> &StepperConfig {
        &self.config
    }
}

impl From<StepperConfig> for InputStepperOptions {
    fn from(config: StepperConfig) -> Self {
        Self { config }
    }
}

#[wasm_bindgen]
impl InputStepperOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    #[wasm_bindgen(setter = selectorButtonIncrease)]
    pub fn set_selector_button_increase(&mut self, selector: String) {
        self.config.increase_button_selector = selector;
    }

    #[wasm_bindgen(setter = selectorButtonDecrease)]
    pub fn set_selector_button_decrease(&mut self, selector: String) {
        self.config.decrease_button_selector = selector;
    }

    /// Attribute name without the `data-` prefix.
    #[wasm_bindgen(setter = dataAttributeIncrease)]
    pub fn set_data_attribute_increase(&mut self, name: String) {
        self.config.increase_step_attribute = name;
    }

    #[wasm_bindgen(setter = dataAttributeDecrease)]
    pub fn set_data_attribute_decrease(&mut self, name: String) {
        self.config.decrease_step_attribute = name;
    }

    #[wasm_bindgen(setter = classNameDisabled)]
    pub fn set_class_name_disabled(&mut self, class_name: String) {
        self.config.disabled_class_name = class_name;
    }

    #[wasm_bindgen(setter = selectorInput)]
    pub fn set_selector_input(&mut self, selector: String) {
        self.config.input_selector = selector;
    }

    #[wasm_bindgen(setter = initialValue)]
    pub fn set_initial_value(&mut self, value: Option<f64>) {
        self.config.initial_value = value.filter(|v| v.is_finite()).map(|v| v.trunc() as i64);
    }

    #[wasm_bindgen(setter)]
    pub fn set_min(&mut self, min: f64) {
        if min.is_finite() {
            self.config.min = min.trunc() as i64;
        }
    }

    /// A missing or non-finite maximum leaves the stepper unbounded above.
    #[wasm_bindgen(setter)]
    pub fn set_max(&mut self, max: Option<f64>) {
        self.config.max = max.filter(|v| v.is_finite()).map(|v| v.trunc() as i64);
    }

    /// Binds every element matching `selector`; returns how many were newly bound.
    pub fn bind(&self, selector: &str) -> Result<u32, JsValue> {
        crate::bind_selector(selector, &self.config)
    }

    #[wasm_bindgen(js_name = bindElement)]
    pub fn bind_element(&self, root: &Element) -> Result<InputStepper, JsValue> {
        crate::bind_element(root, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_fill_the_config() {
        let mut options = InputStepperOptions::new();
        options.set_selector_input("input.amount".into());
        options.set_data_attribute_increase("up".into());
        options.set_class_name_disabled("off".into());
        options.set_min(-3.7);
        options.set_max(Some(12.0));
        options.set_initial_value(Some(4.0));

        let config = options.config();
        assert_eq!(config.input_selector, "input.amount");
        assert_eq!(config.increase_step_data_attribute(), "data-up");
        assert_eq!(config.disabled_class_name, "off");
        assert_eq!(config.min, -3);
        assert_eq!(config.max, Some(12));
        assert_eq!(config.initial_value, Some(4));
    }

    #[test]
    fn non_finite_max_is_unbounded() {
        let mut options = InputStepperOptions::from(StepperConfig::default().with_max(5));
        options.set_max(Some(f64::INFINITY));
        assert_eq!(options.config().max, None);

        options.set_max(Some(5.0));
        options.set_max(None);
        assert_eq!(options.config().max, None);
    }
}
