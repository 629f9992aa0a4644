//! Charset construction

use crate::types::{CharacterClass, GenerationOptions};

/// Concatenate the sets of every enabled class in fixed class order.
///
/// When no class is enabled the charset falls back to lowercase letters and
/// the returned options have `use_lowercase` forced on. Callers must store
/// the returned options back into their own state.
pub fn build_charset(options: &GenerationOptions) -> (Vec<char>, GenerationOptions) {
    let mut corrected = *options;

    let mut charset: Vec<char> = CharacterClass::ALL
        .iter()
        .filter(|class| options.is_enabled(**class))
        .flat_map(|class| class.chars().chars())
        .collect();

    if charset.is_empty() {
        tracing::debug!("no character class enabled, falling back to lowercase");
        charset = CharacterClass::Lowercase.chars().chars().collect();
        corrected.use_lowercase = true;
    }

    (charset, corrected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(options: &GenerationOptions) -> String {
        build_charset(options).0.into_iter().collect()
    }

    #[test]
    fn test_all_classes_concatenated_in_order() {
        let options = GenerationOptions::with_classes(12, &CharacterClass::ALL);
        let expected = format!(
            "{}{}{}{}",
            CharacterClass::Uppercase.chars(),
            CharacterClass::Lowercase.chars(),
            CharacterClass::Numbers.chars(),
            CharacterClass::Symbols.chars()
        );
        assert_eq!(joined(&options), expected);
        assert_eq!(expected.len(), 26 + 26 + 10 + 26);
    }

    #[test]
    fn test_toggle_order_does_not_matter() {
        let mut options = GenerationOptions::with_classes(12, &[CharacterClass::Symbols]);
        assert_eq!(joined(&options), "!@#$%^&*()_+-=[]{}|;:,.<>?");

        options.use_uppercase = true;
        assert_eq!(
            joined(&options),
            "ABCDEFGHIJKLMNOPQRSTUVWXYZ!@#$%^&*()_+-=[]{}|;:,.<>?"
        );
    }

    #[test]
    fn test_empty_selection_falls_back_to_lowercase() {
        let options = GenerationOptions::with_classes(10, &[]);
        let (charset, corrected) = build_charset(&options);

        assert_eq!(charset.iter().collect::<String>(), "abcdefghijklmnopqrstuvwxyz");
        assert!(corrected.use_lowercase);
        assert!(!corrected.use_uppercase && !corrected.use_numbers && !corrected.use_symbols);
        assert_eq!(corrected.length, 10);
    }

    #[test]
    fn test_no_correction_when_a_class_is_enabled() {
        let options = GenerationOptions::with_classes(10, &[CharacterClass::Numbers]);
        let (charset, corrected) = build_charset(&options);
        assert_eq!(charset.len(), 10);
        assert_eq!(corrected, options);
    }
}
