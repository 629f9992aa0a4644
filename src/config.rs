//! Configuration loaded from the environment
//!
//! Every value has a default, so an empty environment is valid. `.env` files
//! are picked up by [`crate::init`] before this runs.

use crate::config_error;
use crate::error::{PassForgeError, Result};
use crate::policy::clamp_length;
use crate::types::{CharacterClass, GenerationOptions, RandomSource};

pub const ENV_LENGTH: &str = "PASS_FORGE_LENGTH";
pub const ENV_UPPERCASE: &str = "PASS_FORGE_UPPERCASE";
pub const ENV_LOWERCASE: &str = "PASS_FORGE_LOWERCASE";
pub const ENV_NUMBERS: &str = "PASS_FORGE_NUMBERS";
pub const ENV_SYMBOLS: &str = "PASS_FORGE_SYMBOLS";
pub const ENV_RNG: &str = "PASS_FORGE_RNG";
pub const ENV_COUNT: &str = "PASS_FORGE_COUNT";
pub const ENV_LOG: &str = "PASS_FORGE_LOG";

/// Upper bound on passwords printed in one run
pub const MAX_COUNT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub options: GenerationOptions,
    pub random_source: RandomSource,
    pub count: usize,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            options: GenerationOptions::default(),
            random_source: RandomSource::default(),
            count: 1,
            log_filter: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_LENGTH) {
            let length: usize = raw.trim().parse().map_err(|_| {
                config_error!("{} must be a whole number, got '{}'", ENV_LENGTH, raw)
            })?;
            config.options.length = clamp_length(length);
        }

        let toggles = [
            (ENV_UPPERCASE, CharacterClass::Uppercase),
            (ENV_LOWERCASE, CharacterClass::Lowercase),
            (ENV_NUMBERS, CharacterClass::Numbers),
            (ENV_SYMBOLS, CharacterClass::Symbols),
        ];
        for (key, class) in toggles {
            if let Some(raw) = lookup(key) {
                config.options.set(class, parse_bool(key, &raw)?);
            }
        }

        if let Some(raw) = lookup(ENV_RNG) {
            config.random_source = raw
                .parse()
                .map_err(|e: PassForgeError| config_error!("{}: {}", ENV_RNG, e))?;
        }

        if let Some(raw) = lookup(ENV_COUNT) {
            config.count = parse_count(&raw)
                .map_err(|e| config_error!("{}: {}", ENV_COUNT, e))?;
        }

        if let Some(raw) = lookup(ENV_LOG) {
            let filter = raw.trim();
            if !filter.is_empty() {
                config.log_filter = filter.to_string();
            }
        }

        Ok(config)
    }
}

/// Parse a password count in `1..=MAX_COUNT`
pub fn parse_count(raw: &str) -> Result<usize> {
    let count: usize = raw
        .trim()
        .parse()
        .map_err(|_| PassForgeError::validation(format!("'{}' is not a whole number", raw)))?;
    if !(1..=MAX_COUNT).contains(&count) {
        return Err(PassForgeError::validation(format!(
            "count must be between 1 and {}, got {}",
            MAX_COUNT, count
        )));
    }
    Ok(count)
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(config_error!("{} must be true or false, got '{}'", key, raw)),
    }
}
