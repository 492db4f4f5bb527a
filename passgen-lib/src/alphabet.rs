use rand::Rng;

use crate::options::GenerationOptions;

pub const LOWER_CASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL_CHARS: &str = "~!@#$%^&*()";
pub const UPPER_CASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Characters eligible for a draw, in concatenation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    pub fn compose(use_digits: bool, use_special_chars: bool, use_upper_case: bool) -> Alphabet {
        let mut chars: Vec<char> = LOWER_CASE.chars().collect();

        // Order matters: lower, digits, special, upper
        if use_digits {
            chars.extend(DIGITS.chars());
        }
        if use_special_chars {
            chars.extend(SPECIAL_CHARS.chars());
        }
        if use_upper_case {
            chars.extend(UPPER_CASE.chars());
        }

        Alphabet { chars }
    }

    pub fn from_options(options: &GenerationOptions) -> Alphabet {
        Alphabet::compose(
            options.use_digits,
            options.use_special_chars,
            options.use_upper_case,
        )
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Index in `0..len()`, never one past the end.
    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.gen_range(0..self.chars.len())
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.chars[self.sample_index(rng)]
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.chars {
            std::fmt::Write::write_char(f, *c)?;
        }
        Ok(())
    }
}
