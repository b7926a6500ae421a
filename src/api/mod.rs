//! UniFFI export layer — type-safe Swift bindings for the keyboard engine.
//!
//! Each public type here maps to a generated Swift class, struct, or enum.

mod session;
mod types;

#[cfg(test)]
mod tests;

pub use session::KbSession;
pub use types::{
    KbAction, KbActionResponse, KbAutocapitalization, KbError, KbInputContext, KbKeyboardCase,
    KbKeyboardType, KbResolution, KbTextEdit,
};

use std::path::Path;

use kb_core::{InputContext, KeyboardLocale};

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Keyboard type to show next for a host-built context.
#[uniffi::export]
fn resolve_keyboard_type(context: KbInputContext) -> KbResolution {
    kb_core::resolve(&context.into()).into()
}

/// Build a context whose cursor predicates are derived from the text before
/// the cursor, for hosts that cannot supply them.
#[uniffi::export]
fn document_context(
    keyboard_type: KbKeyboardType,
    autocapitalization: Option<KbAutocapitalization>,
    text_before_cursor: Option<String>,
    locale_identifier: String,
) -> KbInputContext {
    let rules = &kb_core::settings::settings().document;
    let ctx = InputContext::from_document(
        keyboard_type.clone().into(),
        autocapitalization.map(Into::into),
        text_before_cursor,
        KeyboardLocale::new(locale_identifier.as_str()),
        rules,
    );
    KbInputContext {
        keyboard_type,
        autocapitalization,
        text_before_cursor: ctx.text_before_cursor,
        is_cursor_at_new_sentence: ctx.is_cursor_at_new_sentence,
        is_cursor_at_new_word: ctx.is_cursor_at_new_word,
        locale_identifier,
    }
}

#[uniffi::export]
fn locale_is_right_to_left(locale_identifier: String) -> bool {
    KeyboardLocale::new(locale_identifier).is_right_to_left()
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), KbError> {
    let content = std::fs::read_to_string(&path).map_err(|e| KbError::Io {
        msg: format!("{path}: {e}"),
    })?;
    kb_core::settings::init_custom(content)
        .map_err(|e| KbError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn settings_default_config() -> String {
    kb_core::settings::default_toml().to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
