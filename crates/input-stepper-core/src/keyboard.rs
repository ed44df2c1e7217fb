//! Key-down filtering for the stepper input.
//!
//! The input accepts unshifted digits from either keyboard row and nothing
//! else that would insert text. Navigation and editing keys pass through
//! untouched, arrows step the value, and any other key commits whatever the
//! user typed so far.

use crate::key_event::{KeyCode, KeyEvent};

/// Step used by arrow keys while shift is held.
pub const SHIFT_STEP: i64 = 10;
/// Step used by arrow keys otherwise.
pub const DEFAULT_STEP: i64 = 1;

/// What the controller should do in response to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    /// Re-read the input content and commit it.
    Commit,
    Increase(i64),
    Decrease(i64),
    /// Step down, then commit the input content as any other key would.
    DecreaseThenCommit(i64),
}

/// Decision for a single key-down event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOutcome {
    pub action: KeyAction,
    /// Suppress the platform default (text insertion, form submit, caret move).
    pub prevent_default: bool,
}

impl KeyOutcome {
    const fn pass(action: KeyAction) -> Self {
        Self {
            action,
            prevent_default: false,
        }
    }

    const fn block(action: KeyAction) -> Self {
        Self {
            action,
            prevent_default: true,
        }
    }
}

fn is_editing_key(key: KeyCode) -> bool {
    matches!(
        key,
        KeyCode::Delete
            | KeyCode::Backspace
            | KeyCode::Tab
            | KeyCode::Escape
            | KeyCode::Enter
            | KeyCode::NumpadDecimal
            | KeyCode::NumpadSubtract
            | KeyCode::Period
    )
}

// Up is part of the legacy 35..=39 range, Down is not.
fn is_navigation_key(key: KeyCode) -> bool {
    matches!(
        key,
        KeyCode::End | KeyCode::Home | KeyCode::ArrowLeft | KeyCode::ArrowUp | KeyCode::ArrowRight
    )
}

/// Classifies a key-down event on the stepper input.
pub fn classify_key(event: &KeyEvent) -> KeyOutcome {
    let key = event.key_code;

    if key == KeyCode::Enter {
        return KeyOutcome::block(KeyAction::Commit);
    }

    let step = if event.modifiers.shift {
        SHIFT_STEP
    } else {
        DEFAULT_STEP
    };
    let arrow = match key {
        KeyCode::ArrowUp => Some(KeyAction::Increase(step)),
        KeyCode::ArrowDown => Some(KeyAction::Decrease(step)),
        _ => None,
    };

    if is_editing_key(key) || event.modifiers.is_shortcut() || is_navigation_key(key) {
        return KeyOutcome::pass(arrow.unwrap_or(KeyAction::None));
    }

    if key.is_digit() {
        return KeyOutcome {
            action: KeyAction::None,
            prevent_default: event.modifiers.shift,
        };
    }

    match arrow {
        Some(KeyAction::Decrease(step)) => KeyOutcome::block(KeyAction::DecreaseThenCommit(step)),
        _ => KeyOutcome::block(KeyAction::Commit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key_event::Modifiers;

    fn press(key: KeyCode) -> KeyOutcome {
        classify_key(&KeyEvent::key_down(key))
    }

    fn press_with(key: KeyCode, modifiers: Modifiers) -> KeyOutcome {
        classify_key(&KeyEvent::key_down_with_modifiers(key, modifiers))
    }

    #[test]
    fn enter_commits_and_blocks_submit() {
        let outcome = press(KeyCode::Enter);
        assert_eq!(outcome.action, KeyAction::Commit);
        assert!(outcome.prevent_default);
    }

    #[test]
    fn arrows_step_by_one_or_ten() {
        assert_eq!(press(KeyCode::ArrowUp).action, KeyAction::Increase(1));
        assert_eq!(
            press_with(KeyCode::ArrowUp, Modifiers::SHIFT).action,
            KeyAction::Increase(10)
        );
        assert_eq!(
            press(KeyCode::ArrowDown).action,
            KeyAction::DecreaseThenCommit(1)
        );
        assert_eq!(
            press_with(KeyCode::ArrowDown, Modifiers::SHIFT).action,
            KeyAction::DecreaseThenCommit(10)
        );
    }

    #[test]
    fn up_passes_through_and_down_is_blocked() {
        assert!(!press(KeyCode::ArrowUp).prevent_default);
        assert!(press(KeyCode::ArrowDown).prevent_default);
    }

    #[test]
    fn plain_digits_type_on_both_rows() {
        for value in 0..=9 {
            let top = KeyCode::digit(value).unwrap();
            let pad = KeyCode::numpad_digit(value).unwrap();
            assert_eq!(press(top), KeyOutcome::pass(KeyAction::None));
            assert_eq!(press(pad), KeyOutcome::pass(KeyAction::None));
        }
    }

    #[test]
    fn shifted_digits_are_blocked_without_commit() {
        let outcome = press_with(KeyCode::Digit3, Modifiers::SHIFT);
        assert_eq!(outcome.action, KeyAction::None);
        assert!(outcome.prevent_default);
    }

    #[test]
    fn editing_and_navigation_keys_pass() {
        for key in [
            KeyCode::Backspace,
            KeyCode::Delete,
            KeyCode::Tab,
            KeyCode::Escape,
            KeyCode::NumpadDecimal,
            KeyCode::NumpadSubtract,
            KeyCode::Period,
            KeyCode::Home,
            KeyCode::End,
            KeyCode::ArrowLeft,
            KeyCode::ArrowRight,
        ] {
            assert_eq!(press(key), KeyOutcome::pass(KeyAction::None), "{key:?}");
        }
    }

    #[test]
    fn shortcuts_pass() {
        let ctrl = Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        };
        let meta = Modifiers {
            meta: true,
            ..Modifiers::NONE
        };
        assert_eq!(
            press_with(KeyCode::Other(86), ctrl),
            KeyOutcome::pass(KeyAction::None)
        );
        assert_eq!(
            press_with(KeyCode::Other(65), meta),
            KeyOutcome::pass(KeyAction::None)
        );
        assert_eq!(
            press_with(KeyCode::ArrowDown, ctrl),
            KeyOutcome::pass(KeyAction::Decrease(1))
        );
    }

    #[test]
    fn other_keys_commit_and_block() {
        let letter = press(KeyCode::Other(65));
        assert_eq!(letter.action, KeyAction::Commit);
        assert!(letter.prevent_default);

        let space = press_with(KeyCode::Other(32), Modifiers::SHIFT);
        assert_eq!(space.action, KeyAction::Commit);
        assert!(space.prevent_default);
    }
}
