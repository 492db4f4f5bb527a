use log::debug;
use rand::Rng;
use zeroize::Zeroizing;

use crate::alphabet::Alphabet;
use crate::options::GenerationOptions;

/// Draws `length` characters from the alphabet, with replacement.
pub fn build_with_rng<R: Rng + ?Sized>(alphabet: &Alphabet, length: usize, rng: &mut R) -> String {
    let mut password = String::with_capacity(length);
    for _ in 0..length {
        password.push(alphabet.sample(rng));
    }

    password
}

pub fn build(
    length: usize,
    use_digits: bool,
    use_special_chars: bool,
    use_upper_case: bool,
) -> String {
    let alphabet = Alphabet::compose(use_digits, use_special_chars, use_upper_case);
    debug!("drawing {} characters from an alphabet of {}", length, alphabet.len());

    build_with_rng(&alphabet, length, &mut rand::thread_rng())
}

pub fn generate_with_rng<R: Rng + ?Sized>(
    options: &GenerationOptions,
    rng: &mut R,
) -> Zeroizing<String> {
    let alphabet = Alphabet::from_options(options);
    debug!(
        "drawing {} characters from an alphabet of {}",
        options.length(),
        alphabet.len()
    );

    Zeroizing::new(build_with_rng(&alphabet, options.length(), rng))
}

pub fn generate(options: &GenerationOptions) -> Zeroizing<String> {
    generate_with_rng(options, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{DIGITS, LOWER_CASE, SPECIAL_CHARS, UPPER_CASE};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_lengths() {
        for length in 4..=16 {
            let password = build(length, true, true, true);
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn test_zero_length() {
        assert_eq!(build(0, false, false, false), "");
        assert_eq!(build(0, true, true, true), "");
    }

    #[test]
    fn test_lower_case_only() {
        let password = build(8, false, false, false);
        assert_eq!(password.len(), 8);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_membership() {
        for (digits, special, upper) in [
            (true, false, false),
            (false, true, false),
            (false, false, true),
            (true, true, true),
        ] {
            let alphabet = Alphabet::compose(digits, special, upper);
            for _ in 0..50 {
                let password = build(16, digits, special, upper);
                assert!(password.chars().all(|c| alphabet.contains(c)), "{}", password);
            }
        }
    }

    #[test]
    fn test_disabled_classes_never_appear() {
        let password = build(16, true, false, false);
        assert!(!password.contains(|c: char| SPECIAL_CHARS.contains(c) || UPPER_CASE.contains(c)));

        let password = build(16, false, true, false);
        assert!(!password.contains(|c: char| DIGITS.contains(c) || UPPER_CASE.contains(c)));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let options = GenerationOptions::new(12, true, true, true).unwrap();

        let first = generate_with_rng(&options, &mut StdRng::seed_from_u64(42));
        let second = generate_with_rng(&options, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
        assert_eq!(first.len(), 12);
    }

    #[test]
    fn test_generate() {
        let options = GenerationOptions::new(10, false, false, false).unwrap();
        let password = generate(&options);
        assert_eq!(password.len(), 10);
        assert!(password.chars().all(|c| LOWER_CASE.contains(c)));
    }
}
