//! Core types and structures for pass-forge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shortest password the generator will produce
pub const MIN_LENGTH: usize = 4;

/// Longest password the generator will produce
pub const MAX_LENGTH: usize = 32;

/// Length used when nothing else is configured
pub const DEFAULT_LENGTH: usize = 12;

/// A class of characters that can be switched on or off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// Every class, in the order their sets are concatenated
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    /// The literal characters belonging to this class
    pub fn chars(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            CharacterClass::Numbers => "0123456789",
            CharacterClass::Symbols => "!@#$%^&*()_+-=[]{}|;:,.<>?",
        }
    }

    /// Human readable toggle label
    pub fn label(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Uppercase letters",
            CharacterClass::Lowercase => "Lowercase letters",
            CharacterClass::Numbers => "Numbers",
            CharacterClass::Symbols => "Symbols",
        }
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharacterClass::Uppercase => write!(f, "uppercase"),
            CharacterClass::Lowercase => write!(f, "lowercase"),
            CharacterClass::Numbers => write!(f, "numbers"),
            CharacterClass::Symbols => write!(f, "symbols"),
        }
    }
}

/// Options for a single generation call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub length: usize,
    pub use_uppercase: bool,
    pub use_lowercase: bool,
    pub use_numbers: bool,
    pub use_symbols: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            use_uppercase: true,
            use_lowercase: true,
            use_numbers: true,
            use_symbols: false,
        }
    }
}

impl GenerationOptions {
    /// Options with only the given classes enabled
    pub fn with_classes(length: usize, classes: &[CharacterClass]) -> Self {
        let mut options = Self {
            length,
            use_uppercase: false,
            use_lowercase: false,
            use_numbers: false,
            use_symbols: false,
        };
        for class in classes {
            options.set(*class, true);
        }
        options
    }

    /// Whether a class is switched on
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.use_uppercase,
            CharacterClass::Lowercase => self.use_lowercase,
            CharacterClass::Numbers => self.use_numbers,
            CharacterClass::Symbols => self.use_symbols,
        }
    }

    /// Switch a class on or off
    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        match class {
            CharacterClass::Uppercase => self.use_uppercase = enabled,
            CharacterClass::Lowercase => self.use_lowercase = enabled,
            CharacterClass::Numbers => self.use_numbers = enabled,
            CharacterClass::Symbols => self.use_symbols = enabled,
        }
    }

    /// Enabled classes in charset order
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.is_enabled(*class))
            .collect()
    }
}

/// Heuristic strength label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthLevel::Weak => write!(f, "weak"),
            StrengthLevel::Medium => write!(f, "medium"),
            StrengthLevel::Strong => write!(f, "strong"),
        }
    }
}

/// Where random indices come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RandomSource {
    /// Process-wide thread-local generator
    #[default]
    Thread,
    /// Operating system CSPRNG
    Os,
}

impl std::fmt::Display for RandomSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RandomSource::Thread => write!(f, "thread"),
            RandomSource::Os => write!(f, "os"),
        }
    }
}

impl std::str::FromStr for RandomSource {
    type Err = crate::error::PassForgeError;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "thread" | "fast" => Ok(RandomSource::Thread),
            "os" | "secure" => Ok(RandomSource::Os),
            other => Err(crate::error::PassForgeError::validation(format!(
                "unknown random source '{}', expected 'thread' or 'os'",
                other
            ))),
        }
    }
}

/// One generated password together with everything derived from it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub password: String,
    pub length: usize,
    pub strength: StrengthLevel,
    pub score: u8,
    pub options: GenerationOptions,
    /// Set when the lowercase fallback had to be applied
    pub corrected: bool,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_match_initial_widget_state() {
        let options = GenerationOptions::default();
        assert_eq!(options.length, 12);
        assert!(options.use_uppercase && options.use_lowercase && options.use_numbers);
        assert!(!options.use_symbols);
    }

    #[test]
    fn test_enabled_classes_keep_fixed_order() {
        let options = GenerationOptions::with_classes(
            8,
            &[CharacterClass::Symbols, CharacterClass::Uppercase],
        );
        assert_eq!(
            options.enabled_classes(),
            vec![CharacterClass::Uppercase, CharacterClass::Symbols]
        );
    }

    #[test]
    fn test_class_display() {
        let names: Vec<String> = CharacterClass::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(names, ["uppercase", "lowercase", "numbers", "symbols"]);
    }

    #[test]
    fn test_random_source_parsing() {
        assert_eq!("OS".parse::<RandomSource>().unwrap(), RandomSource::Os);
        assert_eq!("thread".parse::<RandomSource>().unwrap(), RandomSource::Thread);
        assert!("dice".parse::<RandomSource>().is_err());
    }

    #[test]
    fn test_strength_serializes_lowercase() {
        let json = serde_json::to_string(&StrengthLevel::Strong).unwrap();
        assert_eq!(json, "\"strong\"");
    }
}
