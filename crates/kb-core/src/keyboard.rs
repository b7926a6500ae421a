//! Keyboard types, letter case, and autocapitalization modes.
//!
//! Each type has a compact textual form used by the CLI, JSON input and
//! logs: `alphabetic:lowercased`, `numeric`, `custom:<name>`, and so on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseKeyboardError {
    #[error("unknown keyboard case: {0}")]
    Case(String),
    #[error("unknown keyboard type: {0}")]
    Type(String),
    #[error("unknown autocapitalization mode: {0}")]
    Autocapitalization(String),
}

/// Letter case of an alphabetic keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardCase {
    Lowercased,
    Uppercased,
    /// Sticky uppercase. Overrides every automatic case heuristic.
    CapsLocked,
}

impl KeyboardCase {
    pub fn as_str(self) -> &'static str {
        match self {
            KeyboardCase::Lowercased => "lowercased",
            KeyboardCase::Uppercased => "uppercased",
            KeyboardCase::CapsLocked => "capslocked",
        }
    }

    pub fn is_uppercased(self) -> bool {
        !matches!(self, KeyboardCase::Lowercased)
    }
}

impl fmt::Display for KeyboardCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyboardCase {
    type Err = ParseKeyboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lowercased" | "lower" => Ok(KeyboardCase::Lowercased),
            "uppercased" | "upper" => Ok(KeyboardCase::Uppercased),
            "capslocked" | "caps_locked" | "capslock" => Ok(KeyboardCase::CapsLocked),
            _ => Err(ParseKeyboardError::Case(s.to_string())),
        }
    }
}

/// The keyboard layout family currently shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum KeyboardType {
    Alphabetic(KeyboardCase),
    Numeric,
    Symbolic,
    Emoji,
    /// A host-defined keyboard, identified by name.
    Custom(String),
}

impl KeyboardType {
    pub const LOWERCASED: KeyboardType = KeyboardType::Alphabetic(KeyboardCase::Lowercased);
    pub const UPPERCASED: KeyboardType = KeyboardType::Alphabetic(KeyboardCase::Uppercased);
    pub const CAPS_LOCKED: KeyboardType = KeyboardType::Alphabetic(KeyboardCase::CapsLocked);

    pub fn is_alphabetic(&self) -> bool {
        matches!(self, KeyboardType::Alphabetic(_))
    }

    /// True when this is an alphabetic keyboard in exactly `case`.
    pub fn is_alphabetic_case(&self, case: KeyboardCase) -> bool {
        matches!(self, KeyboardType::Alphabetic(c) if *c == case)
    }

    /// Numeric and symbolic keyboards are the ones that revert to letters
    /// after a space.
    pub fn is_numeric_or_symbolic(&self) -> bool {
        matches!(self, KeyboardType::Numeric | KeyboardType::Symbolic)
    }

    pub fn case(&self) -> Option<KeyboardCase> {
        match self {
            KeyboardType::Alphabetic(c) => Some(*c),
            _ => None,
        }
    }
}

impl Default for KeyboardType {
    fn default() -> Self {
        KeyboardType::LOWERCASED
    }
}

impl fmt::Display for KeyboardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyboardType::Alphabetic(case) => write!(f, "alphabetic:{case}"),
            KeyboardType::Numeric => f.write_str("numeric"),
            KeyboardType::Symbolic => f.write_str("symbolic"),
            KeyboardType::Emoji => f.write_str("emoji"),
            KeyboardType::Custom(name) => write!(f, "custom:{name}"),
        }
    }
}

impl FromStr for KeyboardType {
    type Err = ParseKeyboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (head, tail) = match s.split_once(':') {
            Some((h, t)) => (h, Some(t)),
            None => (s, None),
        };
        match (head.to_ascii_lowercase().as_str(), tail) {
            // A bare "alphabetic" means the resting lowercase layout.
            ("alphabetic", None) => Ok(KeyboardType::LOWERCASED),
            ("alphabetic", Some(case)) => Ok(KeyboardType::Alphabetic(case.parse()?)),
            ("numeric", None) => Ok(KeyboardType::Numeric),
            ("symbolic", None) => Ok(KeyboardType::Symbolic),
            ("emoji", None) => Ok(KeyboardType::Emoji),
            ("custom", Some(name)) if !name.is_empty() => Ok(KeyboardType::Custom(name.to_string())),
            _ => Err(ParseKeyboardError::Type(s.to_string())),
        }
    }
}

impl TryFrom<String> for KeyboardType {
    type Error = ParseKeyboardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<KeyboardType> for String {
    fn from(t: KeyboardType) -> Self {
        t.to_string()
    }
}

/// Host hint for when text input should start in uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutocapitalizationMode {
    None,
    AllCharacters,
    Sentences,
    Words,
}

impl AutocapitalizationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            AutocapitalizationMode::None => "none",
            AutocapitalizationMode::AllCharacters => "all_characters",
            AutocapitalizationMode::Sentences => "sentences",
            AutocapitalizationMode::Words => "words",
        }
    }
}

impl fmt::Display for AutocapitalizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AutocapitalizationMode {
    type Err = ParseKeyboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "none" => Ok(AutocapitalizationMode::None),
            "all_characters" | "allcharacters" | "all" => Ok(AutocapitalizationMode::AllCharacters),
            "sentences" => Ok(AutocapitalizationMode::Sentences),
            "words" => Ok(AutocapitalizationMode::Words),
            _ => Err(ParseKeyboardError::Autocapitalization(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keyboard_types() {
        assert_eq!("numeric".parse(), Ok(KeyboardType::Numeric));
        assert_eq!("Symbolic".parse(), Ok(KeyboardType::Symbolic));
        assert_eq!("alphabetic".parse(), Ok(KeyboardType::LOWERCASED));
        assert_eq!("alphabetic:upper".parse(), Ok(KeyboardType::UPPERCASED));
        assert_eq!("alphabetic:capslocked".parse(), Ok(KeyboardType::CAPS_LOCKED));
        assert_eq!(
            "custom:hex".parse(),
            Ok(KeyboardType::Custom("hex".to_string()))
        );
    }

    #[test]
    fn parse_keyboard_type_errors() {
        assert!(matches!(
            "numeric:upper".parse::<KeyboardType>(),
            Err(ParseKeyboardError::Type(_))
        ));
        assert!(matches!(
            "custom:".parse::<KeyboardType>(),
            Err(ParseKeyboardError::Type(_))
        ));
        assert!(matches!(
            "alphabetic:shouty".parse::<KeyboardType>(),
            Err(ParseKeyboardError::Case(_))
        ));
    }

    #[test]
    fn display_matches_parse() {
        for t in [
            KeyboardType::LOWERCASED,
            KeyboardType::UPPERCASED,
            KeyboardType::CAPS_LOCKED,
            KeyboardType::Numeric,
            KeyboardType::Symbolic,
            KeyboardType::Emoji,
            KeyboardType::Custom("phone".to_string()),
        ] {
            assert_eq!(t.to_string().parse::<KeyboardType>(), Ok(t));
        }
    }

    #[test]
    fn alphabetic_case_checks() {
        assert!(KeyboardType::CAPS_LOCKED.is_alphabetic_case(KeyboardCase::CapsLocked));
        assert!(!KeyboardType::UPPERCASED.is_alphabetic_case(KeyboardCase::CapsLocked));
        assert!(!KeyboardType::Numeric.is_alphabetic());
        assert!(KeyboardType::Symbolic.is_numeric_or_symbolic());
        assert!(!KeyboardType::Emoji.is_numeric_or_symbolic());
        assert_eq!(KeyboardType::Emoji.case(), None);
    }

    #[test]
    fn serde_uses_textual_form() {
        let json = serde_json::to_string(&KeyboardType::UPPERCASED).unwrap();
        assert_eq!(json, "\"alphabetic:uppercased\"");
        let t: KeyboardType = serde_json::from_str("\"numeric\"").unwrap();
        assert_eq!(t, KeyboardType::Numeric);
        assert!(serde_json::from_str::<KeyboardType>("\"qwerty\"").is_err());
    }

    #[test]
    fn parse_autocapitalization() {
        assert_eq!(
            "all-characters".parse(),
            Ok(AutocapitalizationMode::AllCharacters)
        );
        assert_eq!("Words".parse(), Ok(AutocapitalizationMode::Words));
        assert!("always".parse::<AutocapitalizationMode>().is_err());
    }
}
