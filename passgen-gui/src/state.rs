use log::info;

use passgen_lib::{
    generator::generate,
    options::GenerationOptions,
    validation::{FieldStatus, ValidationError},
    zeroize::Zeroizing,
};

/// View-model behind the form. Owns the raw input, the toggles and the
/// last generated password.
#[derive(Default)]
pub struct FormState {
    pub length_input: String,
    pub touched: bool,
    pub use_upper_case: bool,
    pub use_digits: bool,
    pub use_special_chars: bool,
    password: Option<Zeroizing<String>>,
}

impl FormState {
    pub fn status(&self) -> FieldStatus {
        FieldStatus::check(&self.length_input)
    }

    /// Error to render next to the length field, only once it has been touched.
    pub fn visible_error(&self) -> Option<String> {
        if !self.touched {
            return None;
        }

        self.status().error
    }

    /// An untouched empty field does not block Generate; any typed value is checked as it changes.
    pub fn can_submit(&self) -> bool {
        if !self.touched && self.length_input.trim().is_empty() {
            return true;
        }

        self.status().valid
    }

    pub fn options(&self) -> Result<GenerationOptions, ValidationError> {
        GenerationOptions::from_raw(
            &self.length_input,
            self.use_digits,
            self.use_special_chars,
            self.use_upper_case,
        )
    }

    pub fn submit(&mut self) -> Result<(), ValidationError> {
        self.touched = true;

        let options = self.options()?;
        info!("generating a password of length {}", options.length());
        self.password = Some(generate(&options));

        Ok(())
    }

    pub fn reset(&mut self) {
        info!("resetting form");
        *self = FormState::default();
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_ref().map(|password| password.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passgen_lib::alphabet::Alphabet;

    #[test]
    fn test_initial() {
        let state = FormState::default();
        assert!(state.password().is_none());
        assert!(state.can_submit());
        assert_eq!(state.visible_error(), None);
        assert!(!state.use_upper_case && !state.use_digits && !state.use_special_chars);
    }

    #[test]
    fn test_submit_valid() {
        let mut state = FormState::default();
        state.length_input = String::from("12");
        state.use_digits = true;
        state.use_upper_case = true;

        state.submit().unwrap();

        let password = state.password().unwrap();
        assert_eq!(password.len(), 12);
        let alphabet = Alphabet::compose(true, false, true);
        assert!(password.chars().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn test_submit_invalid() {
        let mut state = FormState::default();
        state.length_input = String::from("3");

        let error = state.submit().unwrap_err();
        assert!(error.is_range_error());
        assert!(state.password().is_none());
        assert!(state.touched);
        assert!(!state.can_submit());
        assert_eq!(
            state.visible_error().as_deref(),
            Some("Should be min 4 length")
        );
    }

    #[test]
    fn test_submit_empty() {
        let mut state = FormState::default();
        assert_eq!(state.submit(), Err(ValidationError::Required));
        assert_eq!(
            state.visible_error().as_deref(),
            Some("This field is required")
        );
    }

    #[test]
    fn test_error_hidden_until_touched() {
        let mut state = FormState::default();
        state.length_input = String::from("40");
        assert_eq!(state.visible_error(), None);

        state.touched = true;
        assert!(state.visible_error().is_some());
    }

    #[test]
    fn test_invalid_input_blocks_submit_before_blur() {
        let mut state = FormState::default();
        state.length_input = String::from("40");
        assert!(!state.touched);
        assert!(!state.can_submit());

        state.length_input = String::from("12");
        assert!(state.can_submit());

        state.length_input.clear();
        assert!(state.can_submit());
        state.touched = true;
        assert!(!state.can_submit());
    }

    #[test]
    fn test_invalid_submit_keeps_previous_password() {
        let mut state = FormState::default();
        state.length_input = String::from("8");
        state.submit().unwrap();
        let previous = state.password().unwrap().to_string();

        state.length_input = String::from("99");
        assert!(state.submit().is_err());
        assert_eq!(state.password(), Some(previous.as_str()));
    }

    #[test]
    fn test_reset() {
        let mut state = FormState::default();
        state.length_input = String::from("16");
        state.use_upper_case = true;
        state.use_digits = true;
        state.use_special_chars = true;
        state.submit().unwrap();
        assert!(state.password().is_some());

        state.reset();

        assert!(!state.use_upper_case);
        assert!(!state.use_digits);
        assert!(!state.use_special_chars);
        assert!(state.password().is_none());
        assert!(state.length_input.is_empty());
        assert!(!state.touched);
    }

    #[test]
    fn test_reset_from_initial() {
        let mut state = FormState::default();
        state.reset();
        assert!(state.password().is_none());
        assert!(!state.use_upper_case && !state.use_digits && !state.use_special_chars);
    }
}
