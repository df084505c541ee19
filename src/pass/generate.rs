//! Password sampling.

use rand::Error;
use zeroize::Zeroize;

use super::charset;
use crate::config::{GenerationConfig, MAX_LENGTH, MIN_LENGTH};
use crate::entropy::RandomSource;

/// Build the charset for `config` and sample a password from it.
///
/// `Ok(None)` means the charset was empty (no class selected, or every
/// candidate excluded) — an expected terminal state, not a fault. `Err`
/// means the randomness source failed; the caller keeps whatever password
/// it already had.
pub fn generate<S: RandomSource>(
    config: &GenerationConfig,
    source: &mut S,
) -> Result<Option<String>, Error> {
    let chars = charset::build(config);
    sample(&chars, config.length(), source)
}

/// Sample a `length`-character password uniformly from `chars`.
///
/// Length is clamped into `[MIN_LENGTH, MAX_LENGTH]` regardless of what the
/// caller asked for. Each position is an independent draw (sampling with
/// replacement), so repeats are expected.
pub fn sample<S: RandomSource>(
    chars: &[char],
    length: usize,
    source: &mut S,
) -> Result<Option<String>, Error> {
    if chars.is_empty() {
        return Ok(None);
    }

    let length = length.clamp(MIN_LENGTH, MAX_LENGTH);

    let mut draws = vec![0u32; length];
    source.fill_u32(&mut draws)?;

    // Modulo reduction carries a small charset-size-dependent bias,
    // negligible at these pool sizes and kept for compatibility with the
    // original selection behavior.
    let password: String = draws
        .iter()
        .map(|&draw| chars[draw as usize % chars.len()])
        .collect();

    draws.zeroize();
    Ok(Some(password))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::EntropySource;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn charset() -> Vec<char> {
        "abcdefghijklmnopqrstuvwxyz0123456789".chars().collect()
    }

    #[test]
    fn sample_has_exact_length_and_membership() {
        let chars = charset();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for length in [MIN_LENGTH, 16, 77, MAX_LENGTH] {
            let password = sample(&chars, length, &mut rng).unwrap().unwrap();
            assert_eq!(password.chars().count(), length);
            assert!(password.chars().all(|c| chars.contains(&c)));
        }
    }

    #[test]
    fn length_is_clamped() {
        let chars = charset();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let short = sample(&chars, 2, &mut rng).unwrap().unwrap();
        assert_eq!(short.chars().count(), MIN_LENGTH);
        let long = sample(&chars, 9999, &mut rng).unwrap().unwrap();
        assert_eq!(long.chars().count(), MAX_LENGTH);
    }

    #[test]
    fn empty_charset_yields_none() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(sample(&[], 16, &mut rng).unwrap(), None);
    }

    #[test]
    fn same_seed_reproduces_same_password() {
        let chars = charset();
        let a = sample(&chars, 32, &mut ChaCha8Rng::seed_from_u64(9))
            .unwrap()
            .unwrap();
        let b = sample(&chars, 32, &mut ChaCha8Rng::seed_from_u64(9))
            .unwrap()
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn consecutive_draws_differ() {
        // Statistical, not exact: two 16-char draws from a 36-char pool
        // colliding is ~2^-83.
        let chars = charset();
        let mut source = EntropySource::init();
        let a = sample(&chars, 16, &mut source).unwrap().unwrap();
        let b = sample(&chars, 16, &mut source).unwrap().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn generate_honors_empty_selection() {
        let mut config = GenerationConfig::default();
        config.include_lowercase = false;
        config.include_uppercase = false;
        config.include_numbers = false;
        config.include_symbols = false;
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        assert_eq!(generate(&config, &mut rng).unwrap(), None);
    }

    #[test]
    fn generate_uses_config_length_and_charset() {
        let mut config = GenerationConfig::default();
        config.set_length(24);
        config.include_uppercase = false;
        config.include_numbers = false;
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let password = generate(&config, &mut rng).unwrap().unwrap();
        assert_eq!(password.chars().count(), 24);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
        // exclude_similar is on by default
        assert!(!password.contains('l'));
    }
}
