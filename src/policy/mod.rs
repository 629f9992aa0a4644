//! Password policy engine
//!
//! Pure functions that turn [`GenerationOptions`](crate::types::GenerationOptions) into a charset, a password
//! and a strength label. Nothing here performs I/O; the only impure step is
//! drawing random indices in [`generate`].

mod charset;
mod generator;
mod strength;

pub use charset::build_charset;
pub use generator::{generate, generate_corrected, generate_from_source, generate_with};
pub use strength::{score_strength, strength_score};

use crate::types::{MAX_LENGTH, MIN_LENGTH};

/// Move a length by `delta`, clamped to the supported range.
pub fn adjust_length(current: usize, delta: i64) -> usize {
    let current = i64::try_from(current).unwrap_or(i64::MAX);
    let target = current.saturating_add(delta);
    target.clamp(MIN_LENGTH as i64, MAX_LENGTH as i64) as usize
}

/// Clamp an absolute length into the supported range
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_length_bounds() {
        assert_eq!(adjust_length(4, -1), 4);
        assert_eq!(adjust_length(32, 1), 32);
    }

    #[test]
    fn test_adjust_length_steps() {
        assert_eq!(adjust_length(12, 1), 13);
        assert_eq!(adjust_length(12, -1), 11);
        assert_eq!(adjust_length(12, -100), 4);
        assert_eq!(adjust_length(12, i64::MAX), 32);
        assert_eq!(adjust_length(usize::MAX, i64::MIN), 4);
    }

    #[test]
    fn test_clamp_length() {
        assert_eq!(clamp_length(0), 4);
        assert_eq!(clamp_length(99), 32);
        assert_eq!(clamp_length(16), 16);
    }
}
