//! Keyboard type resolution.
//!
//! Decides which keyboard to show next from an [`InputContext`]. Rules are
//! tried in order and the first one that produces a type wins:
//!
//! 1. caps lock keeps the current type
//! 2. autocapitalization picks the case of an alphabetic keyboard
//! 3. a numeric or symbolic keyboard followed by a single space reverts to
//!    letters, then step 2 picks the case
//! 4. otherwise the current type is kept
//!
//! Step 3 is the only one that changes the ambient keyboard type. It is
//! reported through [`Resolution::should_persist`]; [`resolve_in_place`]
//! applies it to a context the caller owns.

#[cfg(test)]
mod proptest_rules;

use std::fmt;

use tracing::{debug, debug_span};

use crate::context::InputContext;
use crate::document::ends_with_single_space;
use crate::keyboard::{AutocapitalizationMode, KeyboardCase, KeyboardType};

/// Which rule produced a [`Resolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionStep {
    CapsLocked,
    Autocapitalization,
    AfterNonAlphabeticSpace,
    Unchanged,
}

impl ResolutionStep {
    pub fn as_str(self) -> &'static str {
        match self {
            ResolutionStep::CapsLocked => "caps_locked",
            ResolutionStep::Autocapitalization => "autocapitalization",
            ResolutionStep::AfterNonAlphabeticSpace => "after_non_alphabetic_space",
            ResolutionStep::Unchanged => "unchanged",
        }
    }
}

impl fmt::Display for ResolutionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub keyboard_type: KeyboardType,
    /// The current keyboard type was reassigned while resolving. The caller
    /// should store `keyboard_type` as its new ambient type.
    pub should_persist: bool,
    pub step: ResolutionStep,
}

impl Resolution {
    fn new(keyboard_type: KeyboardType, step: ResolutionStep) -> Self {
        Self {
            keyboard_type,
            should_persist: step == ResolutionStep::AfterNonAlphabeticSpace,
            step,
        }
    }
}

/// Resolve the keyboard type to show next. Never fails: missing context
/// falls through to the current type.
pub fn resolve(ctx: &InputContext) -> Resolution {
    let current = &ctx.keyboard_type;
    let _span = debug_span!("resolve", current = %current).entered();

    let resolution = if current.is_alphabetic_case(KeyboardCase::CapsLocked) {
        Resolution::new(current.clone(), ResolutionStep::CapsLocked)
    } else if let Some(t) = autocapitalized_type(ctx, current) {
        Resolution::new(t, ResolutionStep::Autocapitalization)
    } else if let Some(t) = type_after_non_alphabetic_space(ctx) {
        Resolution::new(t, ResolutionStep::AfterNonAlphabeticSpace)
    } else {
        Resolution::new(current.clone(), ResolutionStep::Unchanged)
    };

    debug!(
        resolved = %resolution.keyboard_type,
        step = resolution.step.as_str(),
        persist = resolution.should_persist
    );
    resolution
}

/// Resolve and store the reassigned keyboard type back into `ctx` when
/// resolution asks for it.
pub fn resolve_in_place(ctx: &mut InputContext) -> KeyboardType {
    let resolution = resolve(ctx);
    if resolution.should_persist {
        ctx.keyboard_type = resolution.keyboard_type.clone();
    }
    resolution.keyboard_type
}

/// Case chosen by the host's autocapitalization hint, evaluated against
/// `current` rather than `ctx.keyboard_type` so step 3 can re-run it.
fn autocapitalized_type(ctx: &InputContext, current: &KeyboardType) -> Option<KeyboardType> {
    let mode = ctx.autocapitalization?;
    if !current.is_alphabetic() {
        return None;
    }
    // Right-to-left scripts have no letter case to pick.
    if ctx.locale.is_right_to_left() {
        return Some(KeyboardType::LOWERCASED);
    }
    let uppercase = match mode {
        AutocapitalizationMode::AllCharacters => true,
        AutocapitalizationMode::Sentences => ctx.is_cursor_at_new_sentence,
        AutocapitalizationMode::Words => ctx.is_cursor_at_new_word,
        AutocapitalizationMode::None => false,
    };
    Some(if uppercase {
        KeyboardType::UPPERCASED
    } else {
        KeyboardType::LOWERCASED
    })
}

fn type_after_non_alphabetic_space(ctx: &InputContext) -> Option<KeyboardType> {
    if !ctx.keyboard_type.is_numeric_or_symbolic() {
        return None;
    }
    let before = ctx.text_before_cursor.as_deref()?;
    if !ends_with_single_space(before) {
        return None;
    }
    // The reverted type stands on its own when the host has no
    // autocapitalization hint.
    let reverted = KeyboardType::LOWERCASED;
    Some(autocapitalized_type(ctx, &reverted).unwrap_or(reverted))
}
