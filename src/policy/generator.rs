//! Random password sampling

use rand::rngs::OsRng;
use rand::Rng;

use super::charset::build_charset;
use crate::types::{GenerationOptions, RandomSource};

/// Generate a password using the process-wide thread RNG.
///
/// Not deterministic: identical options give different passwords.
pub fn generate(options: &GenerationOptions) -> String {
    generate_with(options, &mut rand::thread_rng())
}

/// Generate a password drawing indices from `rng`
pub fn generate_with<R: Rng + ?Sized>(options: &GenerationOptions, rng: &mut R) -> String {
    generate_corrected(options, rng).0
}

/// Generate a password and return the options that actually produced it.
///
/// Each character is an independent uniform draw (with replacement) over the
/// charset indices. `options.length` is expected to be clamped already.
pub fn generate_corrected<R: Rng + ?Sized>(
    options: &GenerationOptions,
    rng: &mut R,
) -> (String, GenerationOptions) {
    let (charset, corrected) = build_charset(options);

    let password: String = (0..corrected.length)
        .map(|_| charset[rng.gen_range(0..charset.len())])
        .collect();

    (password, corrected)
}

/// Generate with the configured [`RandomSource`]
pub fn generate_from_source(
    options: &GenerationOptions,
    source: RandomSource,
) -> (String, GenerationOptions) {
    match source {
        RandomSource::Thread => generate_corrected(options, &mut rand::thread_rng()),
        RandomSource::Os => generate_corrected(options, &mut OsRng),
    }
}
