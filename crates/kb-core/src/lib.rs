//! Keyboard model and keyboard-type resolution for the keyboard extension.
//!
//! The resolver decides which keyboard (letters in some case, numbers,
//! symbols) to show next, from a snapshot of the host text-input state.

pub mod context;
pub mod document;
pub mod keyboard;
pub mod locale;
pub mod resolver;
pub mod settings;

pub use context::InputContext;
pub use keyboard::{AutocapitalizationMode, KeyboardCase, KeyboardType, ParseKeyboardError};
pub use locale::KeyboardLocale;
pub use resolver::{resolve, resolve_in_place, Resolution};
