//! DOM listeners wiring a bound root to its controller.

use crate::dom::WebRoot;
use crate::keyboard::key_event_from_dom;
use input_stepper_core::StepperHandle;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, MouseEvent};

/// Installs `keydown`, `change` and button `click` listeners.
///
/// The closures are leaked; a bound root stays bound for the page's lifetime.
pub fn attach(stepper: &StepperHandle<WebRoot>) -> Result<(), JsValue> {
    let (input, increase, decrease) = stepper.read(|controller| {
        (
            controller.input().element().clone(),
            controller.increase_button().element().clone(),
            controller.decrease_button().element().clone(),
        )
    });

    {
        let stepper = stepper.clone();
        let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if stepper.on_key_down(&key_event_from_dom(&event)) {
                event.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let stepper = stepper.clone();
        // Also runs for our own `change`; the amount is already stored then.
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            stepper.on_change();
        }) as Box<dyn FnMut(_)>);
        input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let stepper = stepper.clone();
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            event.prevent_default();
            stepper.on_increase_click();
        }) as Box<dyn FnMut(_)>);
        increase.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let stepper = stepper.clone();
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            event.prevent_default();
            stepper.on_decrease_click();
        }) as Box<dyn FnMut(_)>);
        decrease.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    log::debug!("listeners attached to stepper {}", stepper.key());
    Ok(())
}
