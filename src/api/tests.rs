use std::io::Write;

use super::*;

fn context(keyboard_type: KbKeyboardType, text: Option<&str>) -> KbInputContext {
    KbInputContext {
        keyboard_type,
        autocapitalization: Some(KbAutocapitalization::Sentences),
        text_before_cursor: text.map(str::to_string),
        is_cursor_at_new_sentence: false,
        is_cursor_at_new_word: false,
        locale_identifier: "en_US".to_string(),
    }
}

fn lowercased() -> KbKeyboardType {
    KbKeyboardType::Alphabetic {
        keyboard_case: KbKeyboardCase::Lowercased,
    }
}

fn uppercased() -> KbKeyboardType {
    KbKeyboardType::Alphabetic {
        keyboard_case: KbKeyboardCase::Uppercased,
    }
}

#[test]
fn test_engine_version() {
    assert_eq!(engine_version(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_resolve_caps_lock() {
    let caps = KbKeyboardType::Alphabetic {
        keyboard_case: KbKeyboardCase::CapsLocked,
    };
    let mut ctx = context(caps.clone(), Some("abc"));
    ctx.is_cursor_at_new_sentence = true;
    let r = resolve_keyboard_type(ctx);
    assert_eq!(r.keyboard_type, caps);
    assert!(!r.should_persist);
}

#[test]
fn test_resolve_sentence_start() {
    let mut ctx = context(lowercased(), Some("Yes. "));
    ctx.is_cursor_at_new_sentence = true;
    assert_eq!(resolve_keyboard_type(ctx).keyboard_type, uppercased());
}

#[test]
fn test_resolve_off_mode_lowercases() {
    let mut ctx = context(uppercased(), None);
    ctx.autocapitalization = Some(KbAutocapitalization::Off);
    ctx.is_cursor_at_new_sentence = true;
    assert_eq!(resolve_keyboard_type(ctx).keyboard_type, lowercased());
}

#[test]
fn test_resolve_numeric_single_and_double_space() {
    let r = resolve_keyboard_type(context(KbKeyboardType::Numeric, Some("hello ")));
    assert_eq!(r.keyboard_type, lowercased());
    assert!(r.should_persist);

    let r = resolve_keyboard_type(context(KbKeyboardType::Numeric, Some("hello  ")));
    assert_eq!(r.keyboard_type, KbKeyboardType::Numeric);
    assert!(!r.should_persist);
}

#[test]
fn test_resolve_custom_type_roundtrips() {
    let custom = KbKeyboardType::Custom {
        name: "phone".to_string(),
    };
    let r = resolve_keyboard_type(context(custom.clone(), Some("555 ")));
    assert_eq!(r.keyboard_type, custom);
}

#[test]
fn test_document_context_derives_predicates() {
    let ctx = document_context(
        lowercased(),
        Some(KbAutocapitalization::Words),
        Some("Hello, ".to_string()),
        "en_US".to_string(),
    );
    assert!(!ctx.is_cursor_at_new_sentence);
    assert!(ctx.is_cursor_at_new_word);
    assert_eq!(resolve_keyboard_type(ctx).keyboard_type, uppercased());
}

#[test]
fn test_locale_is_right_to_left() {
    assert!(locale_is_right_to_left("he_IL".to_string()));
    assert!(!locale_is_right_to_left("en_US".to_string()));
}

#[test]
fn test_session_roundtrip() {
    let session = KbSession::new("en_US".to_string(), Some(KbAutocapitalization::Sentences));
    assert_eq!(session.keyboard_type(), uppercased());

    let resp = session.handle_action(KbAction::Character {
        text: "Y".to_string(),
    });
    assert_eq!(resp.keyboard_type, lowercased());
    assert!(resp.keyboard_type_changed);
    assert_eq!(
        resp.edit,
        Some(KbTextEdit {
            delete_backward: 0,
            insert: "Y".to_string(),
        })
    );

    session.handle_action(KbAction::Character {
        text: "o".to_string(),
    });
    session.handle_action(KbAction::Space);
    let resp = session.handle_action(KbAction::Space);
    assert_eq!(
        resp.edit,
        Some(KbTextEdit {
            delete_backward: 1,
            insert: ". ".to_string(),
        })
    );
    assert_eq!(resp.keyboard_type, uppercased());
    assert_eq!(session.text_before_cursor(), Some("Yo. ".to_string()));
}

#[test]
fn test_session_switch_and_document() {
    let session = KbSession::new("en_US".to_string(), None);
    let resp = session.handle_action(KbAction::SwitchKeyboard {
        keyboard_type: KbKeyboardType::Symbolic,
    });
    assert_eq!(resp.keyboard_type, KbKeyboardType::Symbolic);
    assert!(resp.edit.is_none());

    assert_eq!(
        session.set_document(Some("#1 ".to_string())),
        lowercased()
    );
    assert_eq!(
        session.set_autocapitalization(Some(KbAutocapitalization::AllCharacters)),
        uppercased()
    );
    assert_eq!(session.set_locale("ar".to_string()), lowercased());
}

#[test]
fn test_settings_default_config_parses() {
    let toml = settings_default_config();
    assert!(kb_core::settings::parse_settings_toml(&toml).is_ok());
}

#[test]
fn test_settings_load_missing_file() {
    let err = settings_load_config("/nonexistent/kb-settings.toml".to_string()).unwrap_err();
    assert!(matches!(err, KbError::Io { .. }));
}

#[test]
fn test_settings_load_invalid_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[document]\nsentence_delimiters = []").unwrap();
    let path = file.path().to_string_lossy().into_owned();
    let err = settings_load_config(path).unwrap_err();
    assert!(matches!(err, KbError::InvalidData { .. }));
}

#[test]
fn test_settings_load_after_session_is_rejected() {
    let _session = KbSession::new("en_US".to_string(), None);

    let custom = settings_default_config().replace(
        "end_sentence_on_double_space = true",
        "end_sentence_on_double_space = false",
    );
    assert_ne!(custom, settings_default_config());
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(custom.as_bytes()).unwrap();
    let path = file.path().to_string_lossy().into_owned();

    let err = settings_load_config(path).unwrap_err();
    assert!(matches!(err, KbError::InvalidData { ref msg } if msg.contains("already in use")));
    assert!(kb_core::settings::settings().behavior.end_sentence_on_double_space);
}
