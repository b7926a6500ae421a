//! Stateful keyboard session owning the current keyboard type.
//!
//! `KeyboardSession` is the host context object: it keeps the ambient
//! keyboard type and a mirror of the text before the cursor, processes each
//! keyboard action, and re-resolves the keyboard type whenever the text
//! changes. Responses tell the Swift frontend which edit to apply and which
//! layout to show.

mod actions;
mod types;

#[cfg(test)]
mod tests;

use tracing::debug;

use kb_core::{resolve_in_place, AutocapitalizationMode, InputContext, KeyboardLocale, KeyboardType};

pub use types::{ActionResponse, KeyboardAction, SessionConfig, TextEdit};

pub struct KeyboardSession {
    context: InputContext,
    pub(crate) config: SessionConfig,
}

impl KeyboardSession {
    pub fn new(locale: KeyboardLocale, autocapitalization: Option<AutocapitalizationMode>) -> Self {
        Self::with_config(locale, autocapitalization, SessionConfig::default())
    }

    pub fn with_config(
        locale: KeyboardLocale,
        autocapitalization: Option<AutocapitalizationMode>,
        config: SessionConfig,
    ) -> Self {
        let mut context = InputContext::new(KeyboardType::LOWERCASED);
        context.autocapitalization = autocapitalization;
        context.locale = locale;
        let mut session = Self { context, config };
        session.sync();
        session
    }

    pub fn context(&self) -> &InputContext {
        &self.context
    }

    pub fn keyboard_type(&self) -> &KeyboardType {
        &self.context.keyboard_type
    }

    pub fn text_before_cursor(&self) -> Option<&str> {
        self.context.text_before_cursor.as_deref()
    }

    /// Host notification that the document changed outside the keyboard
    /// (cursor moved, text pasted, field switched).
    pub fn set_document(&mut self, text_before_cursor: Option<String>) -> KeyboardType {
        self.context.text_before_cursor = text_before_cursor;
        self.sync();
        self.context.keyboard_type.clone()
    }

    pub fn set_autocapitalization(&mut self, mode: Option<AutocapitalizationMode>) -> KeyboardType {
        self.context.autocapitalization = mode;
        self.sync();
        self.context.keyboard_type.clone()
    }

    pub fn set_locale(&mut self, locale: KeyboardLocale) -> KeyboardType {
        self.context.locale = locale;
        self.sync();
        self.context.keyboard_type.clone()
    }

    /// Re-derive the cursor predicates and adopt the resolved keyboard type.
    fn sync(&mut self) {
        self.context.refresh_cursor_predicates(&self.config.document);
        let previous = self.context.keyboard_type.clone();
        let resolved = resolve_in_place(&mut self.context);
        self.context.keyboard_type = resolved;
        if self.context.keyboard_type != previous {
            debug!(from = %previous, to = %self.context.keyboard_type, "keyboard type changed");
        }
    }

    fn set_keyboard_type(&mut self, keyboard_type: KeyboardType) {
        self.context.keyboard_type = keyboard_type;
    }

    fn text_mut(&mut self) -> &mut String {
        self.context.text_before_cursor.get_or_insert_with(String::new)
    }
}
