
use kb_core::settings::{parse_settings_toml, DEFAULT_SETTINGS_TOML};
use kb_core::{AutocapitalizationMode, KeyboardLocale};

use super::{ActionResponse, KeyboardAction, KeyboardSession, SessionConfig};

pub(super) fn default_config() -> SessionConfig {
    SessionConfig::from_settings(&parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap())
}

pub(super) fn make_session(mode: Option<AutocapitalizationMode>) -> KeyboardSession {
    KeyboardSession::with_config(KeyboardLocale::new("en_US"), mode, default_config())
}

// Helper: simulate typing a string one key at a time
pub(super) fn type_string(session: &mut KeyboardSession, s: &str) -> Vec<ActionResponse> {
    s.chars()
        .map(|ch| {
            let action = match ch {
                ' ' => KeyboardAction::Space,
                '\n' => KeyboardAction::Newline,
                _ => KeyboardAction::Character(ch.to_string()),
            };
            session.handle_action(action)
        })
        .collect()
}
