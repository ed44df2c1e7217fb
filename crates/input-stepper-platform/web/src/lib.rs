//! Browser bindings for input steppers.
//!
//! Roots are looked up with CSS selectors, bound once, and wired to DOM
//! listeners. Notifications leave as bubbling `change`, `increase` and
//! `decrease` events on the input.

pub mod dom;
pub mod keyboard;
pub mod listeners;
pub mod options;
pub mod stepper;

pub use dom::{WebButton, WebInput, WebRoot};
pub use options::InputStepperOptions;
pub use stepper::InputStepper;

use input_stepper_core::{BindError, Binding, StepperConfig, StepperRegistry};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

thread_local! {
    static REGISTRY: RefCell<StepperRegistry<WebRoot>> = RefCell::new(StepperRegistry::new());
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
}

/// Binds `root`, attaching listeners only the first time it is seen.
pub fn bind(root: Element, config: &StepperConfig) -> Result<Binding<WebRoot>, BindError> {
    let binding = REGISTRY.with(|registry| registry.borrow_mut().bind(WebRoot::new(root), config))?;
    if binding.is_new() {
        listeners::attach(binding.handle()).map_err(|err| {
            BindError::Platform(format!("could not attach listeners: {err:?}"))
        })?;
    }
    Ok(binding)
}

/// Binds every element in the document matching `selector`.
///
/// Stops at the first root that fails to bind; roots bound before it stay bound.
pub fn bind_all(selector: &str, config: &StepperConfig) -> Result<Vec<Binding<WebRoot>>, JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or("no document available")?;
    let nodes = document.query_selector_all(selector)?;

    let mut bindings = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        let Some(element) = nodes.item(index).and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        bindings.push(bind(element, config).map_err(to_js_error)?);
    }
    Ok(bindings)
}

fn to_js_error(err: BindError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

pub(crate) fn bind_selector(selector: &str, config: &StepperConfig) -> Result<u32, JsValue> {
    let bindings = bind_all(selector, config)?;
    let bound = bindings.iter().filter(|binding| binding.is_new()).count() as u32;
    log::info!("bound {bound} new stepper(s) for `{selector}`");
    Ok(bound)
}

pub(crate) fn bind_element(root: &Element, config: &StepperConfig) -> Result<InputStepper, JsValue> {
    bind(root.clone(), config)
        .map(|binding| InputStepper::from(binding.into_handle()))
        .map_err(to_js_error)
}

/// Binds every match of `selector`; returns how many roots were newly bound.
///
/// `options` is consumed on the JS side; use `InputStepperOptions.bind` to reuse one.
#[wasm_bindgen(js_name = bindInputSteppers)]
pub fn bind_input_steppers(
    selector: &str,
    options: Option<InputStepperOptions>,
) -> Result<u32, JsValue> {
    let options = options.unwrap_or_default();
    bind_selector(selector, options.config())
}

/// Binds a single root and returns its stepper, the existing one on re-bind.
#[wasm_bindgen(js_name = bindInputStepper)]
pub fn bind_input_stepper(
    root: &Element,
    options: Option<InputStepperOptions>,
) -> Result<InputStepper, JsValue> {
    let options = options.unwrap_or_default();
    bind_element(root, options.config())
}
