//! `web-sys` elements as stepper host elements.

use crate::stepper::InputStepper;
use input_stepper_core::{
    BindError, ButtonElement, ElementKey, InputElement, StepperEvent, StepperHandle, StepperHost,
};
use js_sys::{Array, Reflect};
use std::cell::Cell;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CustomEvent, CustomEventInit, Element, Event, EventInit, HtmlElement, HtmlInputElement,
};

/// Expando property carrying a root's identity.
const KEY_PROPERTY: &str = "__inputStepperKey";

thread_local! {
    static NEXT_KEY: Cell<u64> = const { Cell::new(1) };
}

fn platform_error(err: JsValue) -> BindError {
    BindError::Platform(
        err.as_string()
            .or_else(|| {
                err.dyn_ref::<js_sys::Error>()
                    .map(|error| String::from(error.message()))
            })
            .unwrap_or_else(|| format!("{err:?}")),
    )
}

/// Reads the identity stamped on `element`, stamping a fresh one if absent.
fn element_key(element: &Element) -> ElementKey {
    let property = JsValue::from_str(KEY_PROPERTY);
    if let Some(key) = Reflect::get(element, &property)
        .ok()
        .and_then(|value| value.as_f64())
    {
        return ElementKey(key as u64);
    }

    let key = NEXT_KEY.with(|next| {
        let key = next.get();
        next.set(key + 1);
        key
    });
    if let Err(err) = Reflect::set(element, &property, &JsValue::from_f64(key as f64)) {
        log::warn!("could not stamp stepper identity: {err:?}");
    }
    ElementKey(key)
}

/// The stepper's `<input>`.
#[derive(Debug, Clone, PartialEq)]
pub struct WebInput {
    element: HtmlInputElement,
}

impl WebInput {
    pub fn element(&self) -> &HtmlInputElement {
        &self.element
    }
}

impl InputElement for WebInput {
    fn value(&self) -> String {
        self.element.value()
    }

    fn set_value(&self, value: &str) {
        self.element.set_value(value);
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(err) = self.element.set_attribute(name, value) {
            log::warn!("could not set input attribute {name}: {err:?}");
        }
    }
}

/// An increase or decrease control. Any element works, not only `<button>`.
#[derive(Debug, Clone, PartialEq)]
pub struct WebButton {
    element: HtmlElement,
}

impl WebButton {
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl ButtonElement for WebButton {
    fn has_class(&self, class_name: &str) -> bool {
        self.element.class_list().contains(class_name)
    }

    fn add_class(&self, class_name: &str) {
        if let Err(err) = self.element.class_list().add_1(class_name) {
            log::warn!("could not add class {class_name}: {err:?}");
        }
    }

    fn remove_class(&self, class_name: &str) {
        if let Err(err) = self.element.class_list().remove_1(class_name) {
            log::warn!("could not remove class {class_name}: {err:?}");
        }
    }

    fn set_disabled(&self, disabled: bool) {
        let result = if disabled {
            self.element.set_attribute("disabled", "disabled")
        } else {
            self.element.remove_attribute("disabled")
        };
        if let Err(err) = result {
            log::warn!("could not toggle disabled: {err:?}");
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }
}

/// A root element in the page.
#[derive(Debug, Clone, PartialEq)]
pub struct WebRoot {
    element: Element,
    key: ElementKey,
}

impl WebRoot {
    pub fn new(element: Element) -> Self {
        let key = element_key(&element);
        Self { element, key }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    fn query(&self, selector: &str) -> Result<Option<Element>, BindError> {
        self.element.query_selector(selector).map_err(platform_error)
    }
}

impl StepperHost for WebRoot {
    type Input = WebInput;
    type Button = WebButton;

    fn key(&self) -> ElementKey {
        self.key
    }

    fn find_input(&self, selector: &str) -> Result<Option<WebInput>, BindError> {
        let Some(element) = self.query(selector)? else {
            return Ok(None);
        };
        element
            .dyn_into::<HtmlInputElement>()
            .map(|element| Some(WebInput { element }))
            .map_err(|_| {
                BindError::Platform(format!("`{selector}` does not match an <input> element"))
            })
    }

    fn find_button(&self, selector: &str) -> Result<Option<WebButton>, BindError> {
        let Some(element) = self.query(selector)? else {
            return Ok(None);
        };
        element
            .dyn_into::<HtmlElement>()
            .map(|element| Some(WebButton { element }))
            .map_err(|_| BindError::Platform(format!("`{selector}` does not match an HTML element")))
    }

    fn dispatch(&self, input: &WebInput, event: &StepperEvent, stepper: &StepperHandle<Self>) {
        if let Err(err) = dispatch_dom_event(input.element(), event, stepper) {
            log::warn!("could not dispatch {event}: {err:?}");
        }
    }
}

/// Raises `event` on `target` as a bubbling DOM event.
///
/// `change` is a plain `Event`; step notifications are `CustomEvent`s whose
/// `detail` is `[step, stepper]`.
fn dispatch_dom_event(
    target: &HtmlInputElement,
    event: &StepperEvent,
    stepper: &StepperHandle<WebRoot>,
) -> Result<(), JsValue> {
    let dom_event: Event = match event.step() {
        None => {
            let init = EventInit::new();
            init.set_bubbles(true);
            Event::new_with_event_init_dict(event.name(), &init)?
        }
        Some(step) => {
            let detail = Array::of2(
                &JsValue::from_f64(step as f64),
                &JsValue::from(InputStepper::from(stepper.clone())),
            );
            let init = CustomEventInit::new();
            init.set_bubbles(true);
            init.set_detail(&detail);
            CustomEvent::new_with_event_init_dict(event.name(), &init)?.into()
        }
    };
    target.dispatch_event(&dom_event)?;
    Ok(())
}
