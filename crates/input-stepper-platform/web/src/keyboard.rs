//! DOM keyboard events to stepper key events.

use input_stepper_core::{KeyCode, KeyEvent, Modifiers};
use web_sys::KeyboardEvent;

/// Maps a `KeyboardEvent.code` value, falling back to the legacy `keyCode`.
pub fn key_code_from_dom(code: &str, legacy_code: u32) -> KeyCode {
    if let Some(digit) = code.strip_prefix("Digit").and_then(single_digit) {
        return KeyCode::digit(digit).unwrap_or(KeyCode::Other(legacy_code));
    }
    if let Some(digit) = code.strip_prefix("Numpad").and_then(single_digit) {
        return KeyCode::numpad_digit(digit).unwrap_or(KeyCode::Other(legacy_code));
    }
    match code {
        "ArrowUp" => KeyCode::ArrowUp,
        "ArrowDown" => KeyCode::ArrowDown,
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        "Home" => KeyCode::Home,
        "End" => KeyCode::End,
        "Backspace" => KeyCode::Backspace,
        "Delete" => KeyCode::Delete,
        "Enter" | "NumpadEnter" => KeyCode::Enter,
        "Tab" => KeyCode::Tab,
        "Escape" => KeyCode::Escape,
        "Period" => KeyCode::Period,
        "NumpadDecimal" => KeyCode::NumpadDecimal,
        "NumpadSubtract" => KeyCode::NumpadSubtract,
        _ => KeyCode::from_legacy_code(legacy_code),
    }
}

fn single_digit(rest: &str) -> Option<u8> {
    match rest.as_bytes() {
        [digit @ b'0'..=b'9'] => Some(digit - b'0'),
        _ => None,
    }
}

/// Translates a `keydown` event.
pub fn key_event_from_dom(event: &KeyboardEvent) -> KeyEvent {
    let modifiers = Modifiers {
        shift: event.shift_key(),
        ctrl: event.ctrl_key(),
        alt: event.alt_key(),
        meta: event.meta_key(),
    };
    #[allow(deprecated)]
    let legacy_code = event.key_code();
    KeyEvent::key_down_with_modifiers(key_code_from_dom(&event.code(), legacy_code), modifiers)
}
