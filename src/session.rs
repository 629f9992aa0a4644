//! Caller-owned generator state
//!
//! [`GeneratorSession`] holds the options the user is editing together with
//! the password and strength derived from them. Every mutation is followed by
//! an explicit recomputation; corrected options coming back from the engine
//! are written back so the toggles always reflect what was generated.

use chrono::{DateTime, Utc};

use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::policy;
use crate::types::{
    CharacterClass, GenerationOptions, GenerationReport, RandomSource, StrengthLevel,
};

#[derive(Debug, Clone)]
pub struct GeneratorSession {
    options: GenerationOptions,
    source: RandomSource,
    password: String,
    strength: StrengthLevel,
    corrected: bool,
    generated_at: DateTime<Utc>,
}

impl GeneratorSession {
    /// Create a session and generate its first password
    pub fn new(options: GenerationOptions, source: RandomSource) -> Self {
        let mut session = Self {
            options: GenerationOptions {
                length: policy::clamp_length(options.length),
                ..options
            },
            source,
            password: String::new(),
            strength: StrengthLevel::Medium,
            corrected: false,
            generated_at: Utc::now(),
        };
        session.regenerate();
        session
    }

    /// Session with the default options and the thread RNG
    pub fn with_defaults() -> Self {
        Self::new(GenerationOptions::default(), RandomSource::default())
    }

    /// Options that produced the current password
    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Current password, empty until something was generated
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Strength label of the current password
    pub fn strength(&self) -> StrengthLevel {
        self.strength
    }

    /// Raw additive score behind [`Self::strength`]
    pub fn score(&self) -> u8 {
        policy::strength_score(&self.password, &self.options)
    }

    /// Whether the last generation had to switch lowercase on
    pub fn was_corrected(&self) -> bool {
        self.corrected
    }

    /// Generate a fresh password from the current options.
    ///
    /// Returns `true` when the lowercase fallback was applied.
    pub fn regenerate(&mut self) -> bool {
        let (password, corrected) = policy::generate_from_source(&self.options, self.source);

        self.corrected = corrected != self.options;
        if self.corrected {
            tracing::info!("all character classes were disabled, lowercase re-enabled");
        }

        self.options = corrected;
        self.password = password;
        self.generated_at = Utc::now();
        self.strength = policy::score_strength(&self.password, &self.options);

        tracing::debug!(
            length = self.options.length,
            strength = %self.strength,
            source = %self.source,
            "password regenerated"
        );

        self.corrected
    }

    /// Move the length by `delta` (clamped) and regenerate
    pub fn adjust_length(&mut self, delta: i64) -> usize {
        self.options.length = policy::adjust_length(self.options.length, delta);
        self.regenerate();
        self.options.length
    }

    /// Set an absolute length (clamped) and regenerate
    pub fn set_length(&mut self, length: usize) -> usize {
        self.options.length = policy::clamp_length(length);
        self.regenerate();
        self.options.length
    }

    /// Flip a class and regenerate. Returns the class's resulting state.
    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        let enabled = !self.options.is_enabled(class);
        self.set_class(class, enabled)
    }

    /// Switch a class on or off and regenerate.
    ///
    /// Returns the class's state afterwards, which differs from `enabled`
    /// when the lowercase fallback kicked in.
    pub fn set_class(&mut self, class: CharacterClass, enabled: bool) -> bool {
        tracing::debug!(class = %class, enabled, "character class changed");
        self.options.set(class, enabled);
        self.regenerate();
        self.options.is_enabled(class)
    }

    /// Replace every option at once and regenerate
    pub fn set_options(&mut self, options: GenerationOptions) {
        self.options = GenerationOptions {
            length: policy::clamp_length(options.length),
            ..options
        };
        self.regenerate();
    }

    /// Snapshot of the current password for reporting
    pub fn report(&self) -> GenerationReport {
        GenerationReport {
            password: self.password.clone(),
            length: self.password.chars().count(),
            strength: self.strength,
            score: self.score(),
            options: self.options,
            corrected: self.corrected,
            generated_at: self.generated_at,
        }
    }

    /// Copy the current password. Does nothing when there is no password.
    pub fn copy_to(&self, clipboard: &dyn Clipboard) -> Result<()> {
        if self.password.is_empty() {
            return Ok(());
        }
        clipboard.copy(&self.password)?;
        tracing::info!(clipboard = clipboard.name(), "password copied");
        Ok(())
    }
}

impl Default for GeneratorSession {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;

    #[test]
    fn test_initial_generation() {
        let session = GeneratorSession::with_defaults();
        assert_eq!(session.password().len(), 12);
        assert_eq!(session.strength(), StrengthLevel::Medium);
        assert!(!session.was_corrected());
    }

    #[test]
    fn test_disabling_everything_reenables_lowercase() {
        let mut session = GeneratorSession::with_defaults();
        session.toggle(CharacterClass::Uppercase);
        session.toggle(CharacterClass::Numbers);
        assert!(session.options().use_lowercase);

        // Switching off the last enabled class is undone by the engine.
        let enabled = session.toggle(CharacterClass::Lowercase);
        assert!(enabled);
        assert!(session.was_corrected());
        assert!(session.options().use_lowercase);
        assert!(session.password().chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_length_changes_are_clamped_and_regenerate() {
        let mut session = GeneratorSession::with_defaults();
        assert_eq!(session.adjust_length(1), 13);
        assert_eq!(session.password().len(), 13);

        assert_eq!(session.set_length(100), 32);
        assert_eq!(session.password().len(), 32);

        assert_eq!(session.adjust_length(-50), 4);
        assert_eq!(session.password().len(), 4);
    }

    #[test]
    fn test_strength_follows_options() {
        let mut session = GeneratorSession::with_defaults();
        session.set_class(CharacterClass::Symbols, true);
        assert_eq!(session.score(), 7);
        assert_eq!(session.strength(), StrengthLevel::Strong);

        session.set_options(GenerationOptions::with_classes(4, &[CharacterClass::Numbers]));
        assert_eq!(session.strength(), StrengthLevel::Weak);
    }

    #[test]
    fn test_new_clamps_length() {
        let session = GeneratorSession::new(
            GenerationOptions { length: 1, ..Default::default() },
            RandomSource::Os,
        );
        assert_eq!(session.options().length, 4);
        assert_eq!(session.password().len(), 4);
    }

    #[test]
    fn test_report_reflects_session() {
        let session = GeneratorSession::with_defaults();
        let report = session.report();
        assert_eq!(report.password, session.password());
        assert_eq!(report.length, 12);
        assert_eq!(report.score, 5);
        assert!(!report.corrected);
    }

    #[test]
    fn test_report_keeps_generation_time() {
        let session = GeneratorSession::with_defaults();
        let first = session.report();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = session.report();
        assert_eq!(first.generated_at, second.generated_at);

        let mut session = session;
        session.regenerate();
        assert!(session.report().generated_at > first.generated_at);
    }

    #[test]
    fn test_empty_password_copies_nothing() {
        let mut session = GeneratorSession::with_defaults();
        session.password.clear();

        let clipboard = MemoryClipboard::new();
        session.copy_to(&clipboard).unwrap();
        assert!(clipboard.contents().is_none());
    }

    #[test]
    fn test_copy_to_clipboard() {
        let session = GeneratorSession::with_defaults();
        let clipboard = MemoryClipboard::new();
        session.copy_to(&clipboard).unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some(session.password()));
    }
}
