use tracing::debug_span;
use unicode_segmentation::UnicodeSegmentation;

use kb_core::{KeyboardCase, KeyboardType};

use super::types::{ActionResponse, KeyboardAction, TextEdit};
use super::KeyboardSession;

impl KeyboardSession {
    /// Process a keyboard action. Text-changing actions re-resolve the
    /// keyboard type; shift and layout switches set it directly.
    pub fn handle_action(&mut self, action: KeyboardAction) -> ActionResponse {
        let _span = debug_span!("handle_action", ?action).entered();
        let previous = self.keyboard_type().clone();

        let edit = match action {
            KeyboardAction::Character(text) if text.is_empty() => None,
            KeyboardAction::Character(text) => Some(self.insert(&text)),
            KeyboardAction::Space => Some(self.space()),
            KeyboardAction::Newline => Some(self.insert("\n")),
            KeyboardAction::Backspace => self.delete_backward(),
            KeyboardAction::Shift => {
                self.shift(false);
                None
            }
            KeyboardAction::ShiftDoubleTap => {
                self.shift(true);
                None
            }
            KeyboardAction::SwitchKeyboard(keyboard_type) => {
                self.set_keyboard_type(keyboard_type);
                None
            }
        };

        if edit.is_some() {
            self.sync();
        }

        let keyboard_type = self.keyboard_type().clone();
        ActionResponse {
            edit,
            keyboard_type_changed: keyboard_type != previous,
            keyboard_type,
        }
    }

    fn insert(&mut self, text: &str) -> TextEdit {
        self.text_mut().push_str(text);
        TextEdit::insert(text)
    }

    /// Removes one grapheme cluster, as the host's `deleteBackward` does.
    fn delete_backward(&mut self) -> Option<TextEdit> {
        let text = self.context.text_before_cursor.as_mut()?;
        let (start, _) = text.grapheme_indices(true).next_back()?;
        text.truncate(start);
        Some(TextEdit::delete(1))
    }

    /// A space right after "word " ends the sentence: "word " becomes "word. ".
    fn space(&mut self) -> TextEdit {
        if self.config.end_sentence_on_double_space && self.should_end_sentence() {
            let text = self.text_mut();
            text.pop();
            text.push_str(". ");
            return TextEdit {
                delete_backward: 1,
                insert: ". ".to_string(),
            };
        }
        self.insert(" ")
    }

    fn should_end_sentence(&self) -> bool {
        let Some(word) = self
            .text_before_cursor()
            .and_then(|before| before.strip_suffix(' '))
        else {
            return false;
        };
        match word.chars().last() {
            Some(c) => !self.config.document.is_word_delimiter(c),
            None => false,
        }
    }

    fn shift(&mut self, double_tap: bool) {
        let next = match self.keyboard_type().case() {
            Some(_) if double_tap && self.config.double_tap_shift_locks_caps => {
                KeyboardCase::CapsLocked
            }
            Some(KeyboardCase::Lowercased) => KeyboardCase::Uppercased,
            Some(KeyboardCase::Uppercased | KeyboardCase::CapsLocked) => KeyboardCase::Lowercased,
            // Shift on a non-letter layout returns to letters.
            None => KeyboardCase::Lowercased,
        };
        self.set_keyboard_type(KeyboardType::Alphabetic(next));
    }
}
