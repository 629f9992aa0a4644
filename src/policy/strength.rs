//! Strength heuristic
//!
//! The score only looks at the password length and the classes that were
//! declared when it was generated. It is a label, not an entropy estimate.

use crate::types::{GenerationOptions, StrengthLevel};

/// Additive score in `0..=7`
pub fn strength_score(password: &str, options: &GenerationOptions) -> u8 {
    let length = password.chars().count();
    let mut score = 0;

    if length >= 8 {
        score += 1;
    }
    if length >= 12 {
        score += 1;
    }

    if options.use_uppercase {
        score += 1;
    }
    if options.use_lowercase {
        score += 1;
    }
    if options.use_numbers {
        score += 1;
    }
    if options.use_symbols {
        score += 2;
    }

    score
}

/// Classify a password. An empty password (nothing generated yet) is Medium.
pub fn score_strength(password: &str, options: &GenerationOptions) -> StrengthLevel {
    if password.is_empty() {
        return StrengthLevel::Medium;
    }

    match strength_score(password, options) {
        0..=3 => StrengthLevel::Weak,
        4..=5 => StrengthLevel::Medium,
        _ => StrengthLevel::Strong,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CharacterClass;

    #[test]
    fn test_empty_password_is_medium() {
        let none = GenerationOptions::with_classes(4, &[]);
        let all = GenerationOptions::with_classes(32, &CharacterClass::ALL);
        assert_eq!(score_strength("", &none), StrengthLevel::Medium);
        assert_eq!(score_strength("", &all), StrengthLevel::Medium);
    }

    #[test]
    fn test_long_password_with_every_class_is_strong() {
        let options = GenerationOptions::with_classes(14, &CharacterClass::ALL);
        let password = "a".repeat(14);
        assert_eq!(strength_score(&password, &options), 7);
        assert_eq!(score_strength(&password, &options), StrengthLevel::Strong);
    }

    #[test]
    fn test_short_lowercase_is_weak() {
        let options = GenerationOptions::with_classes(4, &[CharacterClass::Lowercase]);
        assert_eq!(strength_score("abcd", &options), 1);
        assert_eq!(score_strength("abcd", &options), StrengthLevel::Weak);
    }

    #[test]
    fn test_thresholds() {
        // default widget state: 12 chars, upper+lower+numbers = 2 + 3
        let options = GenerationOptions::default();
        assert_eq!(score_strength(&"x".repeat(12), &options), StrengthLevel::Medium);

        // 8 chars, upper+lower = 1 + 2
        let options = GenerationOptions::with_classes(
            8,
            &[CharacterClass::Uppercase, CharacterClass::Lowercase],
        );
        assert_eq!(score_strength(&"x".repeat(8), &options), StrengthLevel::Weak);

        // 8 chars, lower+symbols = 1 + 1 + 2
        let options = GenerationOptions::with_classes(
            8,
            &[CharacterClass::Lowercase, CharacterClass::Symbols],
        );
        assert_eq!(score_strength(&"x".repeat(8), &options), StrengthLevel::Medium);

        // 12 chars, upper+numbers+symbols = 2 + 1 + 1 + 2
        let options = GenerationOptions::with_classes(
            12,
            &[CharacterClass::Uppercase, CharacterClass::Numbers, CharacterClass::Symbols],
        );
        assert_eq!(score_strength(&"x".repeat(12), &options), StrengthLevel::Strong);
    }

    #[test]
    fn test_content_is_ignored() {
        // Flags decide, not the characters actually present.
        let options = GenerationOptions::with_classes(8, &[CharacterClass::Numbers]);
        assert_eq!(
            score_strength("Aa1!Aa1!", &options),
            score_strength("00000000", &options)
        );
    }
}
