//! Keyboard input event types for input steppers.
//!
//! Platform adapters translate their native key events into these types
//! before handing them to the controller, so the filtering rules in
//! [`crate::keyboard`] never see a platform type.

use std::fmt;

/// Modifier keys state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key is pressed.
    pub shift: bool,
    /// Control key is pressed.
    pub ctrl: bool,
    /// Alt key is pressed (Option on macOS).
    pub alt: bool,
    /// Meta/Super key is pressed (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers pressed.
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Shift only.
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Returns true if a shortcut modifier (meta, alt or ctrl) is pressed.
    pub fn is_shortcut(&self) -> bool {
        self.meta || self.alt || self.ctrl
    }
}

/// Keys the stepper distinguishes.
///
/// Keys without a dedicated variant map to [`KeyCode::Other`] carrying the
/// legacy DOM key code, so filtering stays total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Top-row digits
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,

    // Numeric keypad
    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    NumpadDecimal,
    NumpadSubtract,

    // Navigation
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,

    // Editing
    Backspace,
    Delete,
    Enter,
    Tab,
    Escape,
    Period,

    /// Anything else, by legacy key code.
    Other(u32),
}

impl KeyCode {
    /// Maps a legacy DOM `keyCode` value.
    pub fn from_legacy_code(code: u32) -> KeyCode {
        match code {
            8 => KeyCode::Backspace,
            9 => KeyCode::Tab,
            13 => KeyCode::Enter,
            27 => KeyCode::Escape,
            35 => KeyCode::End,
            36 => KeyCode::Home,
            37 => KeyCode::ArrowLeft,
            38 => KeyCode::ArrowUp,
            39 => KeyCode::ArrowRight,
            40 => KeyCode::ArrowDown,
            46 => KeyCode::Delete,
            48..=57 => Self::digit((code - 48) as u8).unwrap_or(KeyCode::Other(code)),
            96..=105 => Self::numpad_digit((code - 96) as u8).unwrap_or(KeyCode::Other(code)),
            109 => KeyCode::NumpadSubtract,
            110 => KeyCode::NumpadDecimal,
            190 => KeyCode::Period,
            other => KeyCode::Other(other),
        }
    }

    /// Top-row digit key for `value` (0–9).
    pub fn digit(value: u8) -> Option<KeyCode> {
        Some(match value {
            0 => KeyCode::Digit0,
            1 => KeyCode::Digit1,
            2 => KeyCode::Digit2,
            3 => KeyCode::Digit3,
            4 => KeyCode::Digit4,
            5 => KeyCode::Digit5,
            6 => KeyCode::Digit6,
            7 => KeyCode::Digit7,
            8 => KeyCode::Digit8,
            9 => KeyCode::Digit9,
            _ => return None,
        })
    }

    /// Keypad digit key for `value` (0–9).
    pub fn numpad_digit(value: u8) -> Option<KeyCode> {
        Some(match value {
            0 => KeyCode::Numpad0,
            1 => KeyCode::Numpad1,
            2 => KeyCode::Numpad2,
            3 => KeyCode::Numpad3,
            4 => KeyCode::Numpad4,
            5 => KeyCode::Numpad5,
            6 => KeyCode::Numpad6,
            7 => KeyCode::Numpad7,
            8 => KeyCode::Numpad8,
            9 => KeyCode::Numpad9,
            _ => return None,
        })
    }

    /// The digit this key types, from either keyboard row.
    pub fn digit_value(&self) -> Option<u8> {
        match self {
            KeyCode::Digit0 | KeyCode::Numpad0 => Some(0),
            KeyCode::Digit1 | KeyCode::Numpad1 => Some(1),
            KeyCode::Digit2 | KeyCode::Numpad2 => Some(2),
            KeyCode::Digit3 | KeyCode::Numpad3 => Some(3),
            KeyCode::Digit4 | KeyCode::Numpad4 => Some(4),
            KeyCode::Digit5 | KeyCode::Numpad5 => Some(5),
            KeyCode::Digit6 | KeyCode::Numpad6 => Some(6),
            KeyCode::Digit7 | KeyCode::Numpad7 => Some(7),
            KeyCode::Digit8 | KeyCode::Numpad8 => Some(8),
            KeyCode::Digit9 | KeyCode::Numpad9 => Some(9),
            _ => None,
        }
    }

    /// Returns true for digit keys on either keyboard row.
    pub fn is_digit(&self) -> bool {
        self.digit_value().is_some()
    }
}

/// A key-down event. The stepper never looks at key releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub key_code: KeyCode,
    /// Current state of modifier keys.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Creates a key down event without modifiers.
    pub fn key_down(key_code: KeyCode) -> Self {
        Self::key_down_with_modifiers(key_code, Modifiers::NONE)
    }

    /// Creates a key down event with modifiers.
    pub fn key_down_with_modifiers(key_code: KeyCode, modifiers: Modifiers) -> Self {
        Self {
            key_code,
            modifiers,
        }
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyEvent({:?}, {:?})", self.key_code, self.modifiers)
    }
}
