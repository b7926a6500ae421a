use serde::{Deserialize, Serialize};

use crate::document;
use crate::keyboard::{AutocapitalizationMode, KeyboardType};
use crate::locale::KeyboardLocale;
use crate::settings::DocumentSettings;

/// Snapshot of the host text-input state for one resolution.
///
/// `keyboard_type` is the ambient value owned by the host. Resolution only
/// reads it, except for the reversion to letters after a number or symbol
/// followed by a space (see [`crate::resolver`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputContext {
    pub keyboard_type: KeyboardType,
    /// `None` when the host has no autocapitalization capability.
    #[serde(default)]
    pub autocapitalization: Option<AutocapitalizationMode>,
    #[serde(default)]
    pub text_before_cursor: Option<String>,
    #[serde(default)]
    pub is_cursor_at_new_sentence: bool,
    #[serde(default)]
    pub is_cursor_at_new_word: bool,
    #[serde(default)]
    pub locale: KeyboardLocale,
}

impl InputContext {
    pub fn new(keyboard_type: KeyboardType) -> Self {
        Self {
            keyboard_type,
            autocapitalization: None,
            text_before_cursor: None,
            is_cursor_at_new_sentence: false,
            is_cursor_at_new_word: false,
            locale: KeyboardLocale::default(),
        }
    }

    /// Build a context whose cursor predicates are derived from
    /// `text_before_cursor` with the given delimiter rules.
    pub fn from_document(
        keyboard_type: KeyboardType,
        autocapitalization: Option<AutocapitalizationMode>,
        text_before_cursor: Option<String>,
        locale: KeyboardLocale,
        rules: &DocumentSettings,
    ) -> Self {
        let mut ctx = Self {
            keyboard_type,
            autocapitalization,
            text_before_cursor,
            is_cursor_at_new_sentence: false,
            is_cursor_at_new_word: false,
            locale,
        };
        ctx.refresh_cursor_predicates(rules);
        ctx
    }

    /// Recompute both cursor predicates from `text_before_cursor`.
    pub fn refresh_cursor_predicates(&mut self, rules: &DocumentSettings) {
        let before = self.text_before_cursor.as_deref();
        self.is_cursor_at_new_sentence =
            document::is_cursor_at_new_sentence_with_trailing_whitespace(before, rules);
        self.is_cursor_at_new_word = document::is_cursor_at_new_word(before, rules);
    }

    pub fn with_autocapitalization(mut self, mode: AutocapitalizationMode) -> Self {
        self.autocapitalization = Some(mode);
        self
    }

    pub fn with_text_before_cursor(mut self, text: impl Into<String>) -> Self {
        self.text_before_cursor = Some(text.into());
        self
    }

    pub fn with_locale(mut self, locale: impl Into<KeyboardLocale>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_new_sentence(mut self, at_new_sentence: bool) -> Self {
        self.is_cursor_at_new_sentence = at_new_sentence;
        self
    }

    pub fn with_new_word(mut self, at_new_word: bool) -> Self {
        self.is_cursor_at_new_word = at_new_word;
        self
    }
}
