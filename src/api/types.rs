use kb_core::{
    AutocapitalizationMode, InputContext, KeyboardCase, KeyboardLocale, KeyboardType, Resolution,
};
use kb_session::{ActionResponse, KeyboardAction, TextEdit};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum KbError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum KbKeyboardCase {
    Lowercased,
    Uppercased,
    CapsLocked,
}

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum KbKeyboardType {
    Alphabetic { keyboard_case: KbKeyboardCase },
    Numeric,
    Symbolic,
    Emoji,
    Custom { name: String },
}

/// Mirrors `UITextAutocapitalizationType`. `Off` stands for `.none`, which
/// would clash with `Optional.none` in Swift.
#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum KbAutocapitalization {
    Off,
    AllCharacters,
    Sentences,
    Words,
}

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum KbAction {
    Character { text: String },
    Space,
    Newline,
    Backspace,
    Shift,
    ShiftDoubleTap,
    SwitchKeyboard { keyboard_type: KbKeyboardType },
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Record)]
pub struct KbInputContext {
    pub keyboard_type: KbKeyboardType,
    pub autocapitalization: Option<KbAutocapitalization>,
    pub text_before_cursor: Option<String>,
    pub is_cursor_at_new_sentence: bool,
    pub is_cursor_at_new_word: bool,
    pub locale_identifier: String,
}

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Record)]
pub struct KbResolution {
    pub keyboard_type: KbKeyboardType,
    pub should_persist: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Record)]
pub struct KbTextEdit {
    pub delete_backward: u32,
    pub insert: String,
}

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Record)]
pub struct KbActionResponse {
    pub edit: Option<KbTextEdit>,
    pub keyboard_type: KbKeyboardType,
    pub keyboard_type_changed: bool,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

impl From<KbKeyboardCase> for KeyboardCase {
    fn from(c: KbKeyboardCase) -> Self {
        match c {
            KbKeyboardCase::Lowercased => KeyboardCase::Lowercased,
            KbKeyboardCase::Uppercased => KeyboardCase::Uppercased,
            KbKeyboardCase::CapsLocked => KeyboardCase::CapsLocked,
        }
    }
}

impl From<KeyboardCase> for KbKeyboardCase {
    fn from(c: KeyboardCase) -> Self {
        match c {
            KeyboardCase::Lowercased => KbKeyboardCase::Lowercased,
            KeyboardCase::Uppercased => KbKeyboardCase::Uppercased,
            KeyboardCase::CapsLocked => KbKeyboardCase::CapsLocked,
        }
    }
}

impl From<KbKeyboardType> for KeyboardType {
    fn from(t: KbKeyboardType) -> Self {
        match t {
            KbKeyboardType::Alphabetic { keyboard_case } => {
                KeyboardType::Alphabetic(keyboard_case.into())
            }
            KbKeyboardType::Numeric => KeyboardType::Numeric,
            KbKeyboardType::Symbolic => KeyboardType::Symbolic,
            KbKeyboardType::Emoji => KeyboardType::Emoji,
            KbKeyboardType::Custom { name } => KeyboardType::Custom(name),
        }
    }
}

impl From<KeyboardType> for KbKeyboardType {
    fn from(t: KeyboardType) -> Self {
        match t {
            KeyboardType::Alphabetic(c) => KbKeyboardType::Alphabetic {
                keyboard_case: c.into(),
            },
            KeyboardType::Numeric => KbKeyboardType::Numeric,
            KeyboardType::Symbolic => KbKeyboardType::Symbolic,
            KeyboardType::Emoji => KbKeyboardType::Emoji,
            KeyboardType::Custom(name) => KbKeyboardType::Custom { name },
        }
    }
}

impl From<KbAutocapitalization> for AutocapitalizationMode {
    fn from(m: KbAutocapitalization) -> Self {
        match m {
            KbAutocapitalization::Off => AutocapitalizationMode::None,
            KbAutocapitalization::AllCharacters => AutocapitalizationMode::AllCharacters,
            KbAutocapitalization::Sentences => AutocapitalizationMode::Sentences,
            KbAutocapitalization::Words => AutocapitalizationMode::Words,
        }
    }
}

impl From<KbInputContext> for InputContext {
    fn from(c: KbInputContext) -> Self {
        InputContext {
            keyboard_type: c.keyboard_type.into(),
            autocapitalization: c.autocapitalization.map(Into::into),
            text_before_cursor: c.text_before_cursor,
            is_cursor_at_new_sentence: c.is_cursor_at_new_sentence,
            is_cursor_at_new_word: c.is_cursor_at_new_word,
            locale: KeyboardLocale::new(c.locale_identifier),
        }
    }
}

impl From<Resolution> for KbResolution {
    fn from(r: Resolution) -> Self {
        KbResolution {
            keyboard_type: r.keyboard_type.into(),
            should_persist: r.should_persist,
        }
    }
}

impl From<KbAction> for KeyboardAction {
    fn from(a: KbAction) -> Self {
        match a {
            KbAction::Character { text } => KeyboardAction::Character(text),
            KbAction::Space => KeyboardAction::Space,
            KbAction::Newline => KeyboardAction::Newline,
            KbAction::Backspace => KeyboardAction::Backspace,
            KbAction::Shift => KeyboardAction::Shift,
            KbAction::ShiftDoubleTap => KeyboardAction::ShiftDoubleTap,
            KbAction::SwitchKeyboard { keyboard_type } => {
                KeyboardAction::SwitchKeyboard(keyboard_type.into())
            }
        }
    }
}

impl From<TextEdit> for KbTextEdit {
    fn from(e: TextEdit) -> Self {
        KbTextEdit {
            delete_backward: e.delete_backward as u32,
            insert: e.insert,
        }
    }
}

impl From<ActionResponse> for KbActionResponse {
    fn from(r: ActionResponse) -> Self {
        KbActionResponse {
            edit: r.edit.map(Into::into),
            keyboard_type: r.keyboard_type.into(),
            keyboard_type_changed: r.keyboard_type_changed,
        }
    }
}
