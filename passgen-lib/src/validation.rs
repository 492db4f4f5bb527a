use std::num::IntErrorKind;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Required,
    TooShort,
    TooLong,
    NotANumber(String),
}

impl ValidationError {
    /// True for the errors raised by a number outside `MIN_LENGTH..=MAX_LENGTH`.
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::TooShort | Self::TooLong)
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::Required => f.write_str("This field is required"),
            Self::TooShort => f.write_fmt(std::format_args!("Should be min {} length", MIN_LENGTH)),
            Self::TooLong => f.write_fmt(std::format_args!(
                "only a max of {} length is allowed",
                MAX_LENGTH
            )),
            Self::NotANumber(value) => {
                f.write_fmt(std::format_args!("\"{}\" is not a whole number", value))
            }
        };
    }
}

impl std::error::Error for ValidationError {}

/// Checks the raw text of the length field and returns the accepted length.
pub fn validate_length(raw: &str) -> Result<usize, ValidationError> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required);
    }

    let value: i64 = match raw.parse() {
        Ok(value) => value,
        Err(error) => {
            return match error.kind() {
                IntErrorKind::PosOverflow => Err(ValidationError::TooLong),
                IntErrorKind::NegOverflow => Err(ValidationError::TooShort),
                _ => Err(ValidationError::NotANumber(raw.to_string())),
            }
        }
    };

    if value < MIN_LENGTH as i64 {
        return Err(ValidationError::TooShort);
    }

    if value > MAX_LENGTH as i64 {
        return Err(ValidationError::TooLong);
    }

    Ok(value as usize)
}

/// Derived state of the length field, recomputed from the raw input on every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStatus {
    pub valid: bool,
    pub error: Option<String>,
}

impl FieldStatus {
    pub fn check(raw: &str) -> FieldStatus {
        match validate_length(raw) {
            Ok(_) => FieldStatus {
                valid: true,
                error: None,
            },
            Err(error) => FieldStatus {
                valid: false,
                error: Some(error.to_string()),
            },
        }
    }
}
