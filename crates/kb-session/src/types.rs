use kb_core::settings::{settings, DocumentSettings, Settings};
use kb_core::KeyboardType;

/// A user action on the on-screen keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Insert text (a letter, digit, symbol or emoji).
    Character(String),
    Space,
    Newline,
    Backspace,
    Shift,
    /// Second tap of a quick shift double tap.
    ShiftDoubleTap,
    /// Explicit layout switch, e.g. the "123" or "ABC" key.
    SwitchKeyboard(KeyboardType),
}

impl KeyboardAction {
    pub fn character(s: &str) -> Self {
        KeyboardAction::Character(s.to_string())
    }
}

/// Text edit the host should apply to its document, in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// Number of grapheme clusters to delete before the cursor, one per
    /// host `deleteBackward` call.
    pub delete_backward: usize,
    pub insert: String,
}

impl TextEdit {
    pub(crate) fn insert(text: &str) -> Self {
        Self {
            delete_backward: 0,
            insert: text.to_string(),
        }
    }

    pub(crate) fn delete(count: usize) -> Self {
        Self {
            delete_backward: count,
            insert: String::new(),
        }
    }
}

/// Response from `handle_action`, returned to the caller (Swift via FFI).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub edit: Option<TextEdit>,
    pub keyboard_type: KeyboardType,
    pub keyboard_type_changed: bool,
}

/// Per-session behavior, taken from the global settings by default.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub document: DocumentSettings,
    pub end_sentence_on_double_space: bool,
    pub double_tap_shift_locks_caps: bool,
}

impl SessionConfig {
    pub fn from_settings(s: &Settings) -> Self {
        Self {
            document: s.document.clone(),
            end_sentence_on_double_space: s.behavior.end_sentence_on_double_space,
            double_tap_shift_locks_caps: s.behavior.double_tap_shift_locks_caps,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from_settings(settings())
    }
}
