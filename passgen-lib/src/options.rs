use crate::validation::{validate_length, ValidationError, MAX_LENGTH, MIN_LENGTH};

/// Parameters for a single generation call.
///
/// Built fresh from the form on every submission and never mutated afterwards.
/// The lower-case alphabet is always part of the draw; the flags only add to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    length: usize,
    pub use_digits: bool,
    pub use_special_chars: bool,
    pub use_upper_case: bool,
}

impl GenerationOptions {
    pub fn new(
        length: usize,
        use_digits: bool,
        use_special_chars: bool,
        use_upper_case: bool,
    ) -> Result<Self, ValidationError> {
        if length < MIN_LENGTH {
            return Err(ValidationError::TooShort);
        }

        if length > MAX_LENGTH {
            return Err(ValidationError::TooLong);
        }

        Ok(Self {
            length,
            use_digits,
            use_special_chars,
            use_upper_case,
        })
    }

    /// Runs the raw length text through the validator before building the options.
    pub fn from_raw(
        raw_length: &str,
        use_digits: bool,
        use_special_chars: bool,
        use_upper_case: bool,
    ) -> Result<Self, ValidationError> {
        let length = validate_length(raw_length)?;
        Self::new(length, use_digits, use_special_chars, use_upper_case)
    }

    pub fn length(&self) -> usize {
        self.length
    }
}
