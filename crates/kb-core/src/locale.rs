//! Keyboard locale and its writing direction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Language codes whose scripts are written right to left.
const RIGHT_TO_LEFT_LANGUAGES: &[&str] = &[
    "ar", "arc", "ckb", "dv", "fa", "he", "iw", "ks", "ps", "sd", "ug", "ur", "yi",
];

/// Script subtags written right to left.
const RIGHT_TO_LEFT_SCRIPTS: &[&str] = &[
    "adlm", "arab", "hebr", "mand", "nkoo", "rohg", "samr", "syrc", "thaa",
];

/// A locale identifier such as `en_US`, `he-IL` or `ar`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyboardLocale {
    identifier: String,
}

impl KeyboardLocale {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Lowercased language subtag: `"he"` for `"he_IL"`.
    pub fn language_code(&self) -> String {
        self.identifier
            .split(['_', '-', '@', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }

    /// Lowercased script subtag, if any: `"arab"` for `"pa_Arab_PK"`.
    pub fn script_code(&self) -> Option<String> {
        let subtags = self.identifier.split(['@', '.']).next().unwrap_or_default();
        subtags
            .split(['_', '-'])
            .skip(1)
            .find(|t| t.len() == 4 && t.chars().all(|c| c.is_ascii_alphabetic()))
            .map(str::to_ascii_lowercase)
    }

    /// An explicit script subtag decides; otherwise the language does.
    pub fn is_right_to_left(&self) -> bool {
        match self.script_code() {
            Some(script) => RIGHT_TO_LEFT_SCRIPTS.contains(&script.as_str()),
            None => RIGHT_TO_LEFT_LANGUAGES.contains(&self.language_code().as_str()),
        }
    }
}

impl Default for KeyboardLocale {
    fn default() -> Self {
        Self::new("en_US")
    }
}

impl fmt::Display for KeyboardLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier)
    }
}

impl From<&str> for KeyboardLocale {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_code_strips_region_and_script() {
        assert_eq!(KeyboardLocale::new("en_US").language_code(), "en");
        assert_eq!(KeyboardLocale::new("he-IL").language_code(), "he");
        assert_eq!(KeyboardLocale::new("AR").language_code(), "ar");
        assert_eq!(KeyboardLocale::new("ckb_IQ@calendar=gregorian").language_code(), "ckb");
        assert_eq!(KeyboardLocale::new("").language_code(), "");
    }

    #[test]
    fn right_to_left_locales() {
        for id in ["ar", "ar_SA", "he_IL", "iw", "fa-IR", "ur_PK", "yi"] {
            assert!(KeyboardLocale::new(id).is_right_to_left(), "{id}");
        }
        for id in ["en_US", "de", "ja_JP", "zh-Hans", "arn", ""] {
            assert!(!KeyboardLocale::new(id).is_right_to_left(), "{id}");
        }
    }

    #[test]
    fn script_subtag_decides_direction() {
        assert_eq!(KeyboardLocale::new("pa_Arab_PK").script_code().as_deref(), Some("arab"));
        assert_eq!(KeyboardLocale::new("en_US").script_code(), None);
        for id in ["pa-Arab", "uz_Arab", "az-Arab-IR", "ms_Arab", "dv-Thaa", "ff-Adlm"] {
            assert!(KeyboardLocale::new(id).is_right_to_left(), "{id}");
        }
        for id in ["ks-Deva", "uz-Latn", "sr_Cyrl_RS", "zh-Hant-TW"] {
            assert!(!KeyboardLocale::new(id).is_right_to_left(), "{id}");
        }
    }
}
