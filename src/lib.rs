//! Keyboard extension engine.
//!
//! Re-exports the pure Rust crates and exposes them to the Swift keyboard
//! extension through UniFFI.

uniffi::setup_scaffolding!();

pub mod api;
mod trace_init;

pub use kb_core::{
    resolve, resolve_in_place, AutocapitalizationMode, InputContext, KeyboardCase,
    KeyboardLocale, KeyboardType, Resolution,
};
pub use kb_session::{ActionResponse, KeyboardAction, KeyboardSession, SessionConfig, TextEdit};
