use std::sync::{Arc, Mutex};

use kb_core::KeyboardLocale;
use kb_session::KeyboardSession;

use super::types::{KbAction, KbActionResponse, KbAutocapitalization, KbKeyboardType};

/// One keyboard session per text field the extension is attached to.
#[derive(uniffi::Object)]
pub struct KbSession {
    session: Mutex<KeyboardSession>,
}

#[uniffi::export]
impl KbSession {
    #[uniffi::constructor]
    pub fn new(
        locale_identifier: String,
        autocapitalization: Option<KbAutocapitalization>,
    ) -> Arc<Self> {
        let session = KeyboardSession::new(
            KeyboardLocale::new(locale_identifier),
            autocapitalization.map(Into::into),
        );
        Arc::new(Self {
            session: Mutex::new(session),
        })
    }

    pub fn handle_action(&self, action: KbAction) -> KbActionResponse {
        let mut session = self.session.lock().unwrap();
        session.handle_action(action.into()).into()
    }

    pub fn set_document(&self, text_before_cursor: Option<String>) -> KbKeyboardType {
        let mut session = self.session.lock().unwrap();
        session.set_document(text_before_cursor).into()
    }

    pub fn set_autocapitalization(
        &self,
        autocapitalization: Option<KbAutocapitalization>,
    ) -> KbKeyboardType {
        let mut session = self.session.lock().unwrap();
        session
            .set_autocapitalization(autocapitalization.map(Into::into))
            .into()
    }

    pub fn set_locale(&self, locale_identifier: String) -> KbKeyboardType {
        let mut session = self.session.lock().unwrap();
        session
            .set_locale(KeyboardLocale::new(locale_identifier))
            .into()
    }

    pub fn keyboard_type(&self) -> KbKeyboardType {
        self.session.lock().unwrap().keyboard_type().clone().into()
    }

    pub fn text_before_cursor(&self) -> Option<String> {
        self.session
            .lock()
            .unwrap()
            .text_before_cursor()
            .map(str::to_string)
    }
}
