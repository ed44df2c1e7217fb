//! JavaScript-facing stepper object.

use crate::dom::WebRoot;
use input_stepper_core::{RawAmount, StepperHandle};
use wasm_bindgen::prelude::*;

/// A bound stepper, as seen from JavaScript.
///
/// Every `increase`/`decrease` DOM event carries one of these as the second
/// element of its `detail`. All copies share the same controller.
#[wasm_bindgen]
pub struct InputStepper {
    handle: StepperHandle<WebRoot>,
}

impl From<StepperHandle<WebRoot>> for InputStepper {
    fn from(handle: StepperHandle<WebRoot>) -> Self {
        Self { handle }
    }
}

impl InputStepper {
    pub fn handle(&self) -> &StepperHandle<WebRoot> {
        &self.handle
    }
}

/// Converts a JS argument (number or string) to a raw amount.
fn raw_from_js(value: &JsValue) -> RawAmount {
    if let Some(number) = value.as_f64() {
        if number.is_finite() {
            return RawAmount::Int(number.trunc() as i64);
        }
        return RawAmount::Text(String::new());
    }
    RawAmount::Text(value.as_string().unwrap_or_default())
}

fn step_from_js(step: Option<f64>) -> i64 {
    step.filter(|step| step.is_finite())
        .map(|step| step.trunc() as i64)
        .unwrap_or(1)
}

#[wasm_bindgen]
impl InputStepper {
    /// Current input content, unparsed.
    #[wasm_bindgen(js_name = getValue)]
    pub fn get_value(&self) -> String {
        self.handle.value()
    }

    /// Stored amount.
    #[wasm_bindgen(getter)]
    pub fn value(&self) -> f64 {
        self.handle.amount() as f64
    }

    #[wasm_bindgen(js_name = setValue)]
    pub fn set_value(&self, raw: JsValue, silent: Option<bool>) {
        self.handle
            .set_value(raw_from_js(&raw), silent.unwrap_or(false));
    }

    #[wasm_bindgen(js_name = setMin)]
    pub fn set_min(&self, raw: JsValue) {
        self.handle.set_min(raw_from_js(&raw));
    }

    #[wasm_bindgen(js_name = setMax)]
    pub fn set_max(&self, raw: JsValue) {
        self.handle.set_max(raw_from_js(&raw));
    }

    /// Steps up; `step` defaults to 1.
    pub fn increase(&self, step: Option<f64>) -> bool {
        self.handle.increase(step_from_js(step))
    }

    /// Steps down; `step` defaults to 1.
    pub fn decrease(&self, step: Option<f64>) -> bool {
        self.handle.decrease(step_from_js(step))
    }
}
