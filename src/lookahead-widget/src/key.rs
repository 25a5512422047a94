//! Navigation keys and the outcome of dispatching them.

use crossterm::event::{KeyCode, KeyEvent};

use crate::event::AutocompleteEvent;

/// Key code of the Up arrow.
pub const KEY_CODE_UP: u32 = 38;
/// Key code of the Down arrow.
pub const KEY_CODE_DOWN: u32 = 40;
/// Key code of Enter.
pub const KEY_CODE_ENTER: u32 = 13;
/// Key code of Escape.
pub const KEY_CODE_ESCAPE: u32 = 27;

/// A key as seen by the interaction controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Move the active item up, wrapping to the last candidate
    Up,
    /// Move the active item down, wrapping to the first candidate
    Down,
    /// Select
    Enter,
    /// Clear the term
    Escape,
    /// Anything else; ignored by the controller
    Other,
}

impl NavKey {
    /// Map a raw key code.
    pub fn from_key_code(code: u32) -> Self {
        match code {
            KEY_CODE_UP => NavKey::Up,
            KEY_CODE_DOWN => NavKey::Down,
            KEY_CODE_ENTER => NavKey::Enter,
            KEY_CODE_ESCAPE => NavKey::Escape,
            _ => NavKey::Other,
        }
    }
}

impl From<KeyCode> for NavKey {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Up => NavKey::Up,
            KeyCode::Down => NavKey::Down,
            KeyCode::Enter => NavKey::Enter,
            KeyCode::Esc => NavKey::Escape,
            _ => NavKey::Other,
        }
    }
}

impl From<&KeyEvent> for NavKey {
    fn from(key: &KeyEvent) -> Self {
        NavKey::from(key.code)
    }
}

/// What dispatching a key did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// The host should suppress the key's default behavior
    pub prevent_default: bool,
    /// Notification emitted by the key, if any
    pub event: Option<AutocompleteEvent>,
}

impl KeyOutcome {
    /// Nothing happened.
    pub fn ignored() -> Self {
        Self::default()
    }

    /// Navigation key: default behavior suppressed, no notification.
    pub fn navigated() -> Self {
        Self {
            prevent_default: true,
            event: None,
        }
    }

    /// A key that may have emitted a notification.
    pub fn emitted(event: Option<AutocompleteEvent>) -> Self {
        Self {
            prevent_default: false,
            event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_raw_key_codes() {
        assert_eq!(NavKey::from_key_code(38), NavKey::Up);
        assert_eq!(NavKey::from_key_code(40), NavKey::Down);
        assert_eq!(NavKey::from_key_code(13), NavKey::Enter);
        assert_eq!(NavKey::from_key_code(27), NavKey::Escape);
        assert_eq!(NavKey::from_key_code(65), NavKey::Other);
    }

    #[test]
    fn test_crossterm_keys() {
        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(NavKey::from(&key), NavKey::Escape);
        assert_eq!(NavKey::from(KeyCode::Char('k')), NavKey::Other);
        assert_eq!(NavKey::from(KeyCode::Tab), NavKey::Other);
    }
}
