use serde::{Deserialize, Serialize};

use crate::{normalize, validate, FieldConfig, InputKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Visual status of a field border/indicator.
pub enum FieldStatus {
    /// Not yet blurred; default styling.
    Neutral,
    /// Touched and invalid.
    Error,
    /// Touched and valid.
    Success,
}

impl FieldStatus {
    /// Stable token used in `data-ui-status`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Mutable state owned by one rendered field.
pub struct FieldState {
    /// Last committed (normalized) value.
    pub raw_value: String,
    /// Result of the most recent validation.
    pub is_valid: bool,
    /// Set on first blur and never cleared.
    pub is_touched: bool,
    /// Whether a password field currently hides its value.
    pub is_masked: bool,
}

impl FieldState {
    /// Initial state: valid, untouched, and masked for password fields.
    pub fn new(config: &FieldConfig) -> Self {
        Self {
            raw_value: String::new(),
            is_valid: true,
            is_touched: false,
            is_masked: config.kind == InputKind::Password,
        }
    }

    /// Handles an input event and returns the normalized value to hand to the owner.
    ///
    /// The value is propagated even when invalid; validity only affects display.
    pub fn on_change(&mut self, config: &FieldConfig, raw: &str) -> String {
        let value = normalize(raw, config.normalize_mode());
        if config.validator.is_some() {
            self.is_valid = validate(&value, config.validator.as_ref());
        }
        self.raw_value.clone_from(&value);
        value
    }

    /// Handles a blur event: marks the field touched and revalidates.
    pub fn on_blur(&mut self, config: &FieldConfig) {
        self.is_touched = true;
        if config.validator.is_some() {
            self.is_valid = validate(&self.raw_value, config.validator.as_ref());
        }
    }

    /// Syncs a value written by the owner; neither normalizes nor validates.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.raw_value = value.into();
    }

    /// Flips password visibility. Has no effect on value or validity.
    pub fn toggle_visibility(&mut self) {
        self.is_masked = !self.is_masked;
    }

    /// Border/indicator status for the current state.
    pub fn status(&self) -> FieldStatus {
        match (self.is_touched, self.is_valid) {
            (false, _) => FieldStatus::Neutral,
            (true, false) => FieldStatus::Error,
            (true, true) => FieldStatus::Success,
        }
    }

    /// Helper text to show, if the current value is invalid.
    pub fn error_message<'a>(&self, config: &'a FieldConfig) -> Option<&'a str> {
        (!self.is_valid).then_some(config.invalid_message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn email_config() -> FieldConfig {
        FieldConfig::new("Email", InputKind::Email)
            .with_validator(crate::Validator::new(|value| value.contains('@')))
            .with_invalid_message("Enter a valid email")
    }

    #[test]
    fn starts_valid_untouched_and_neutral() {
        let state = FieldState::new(&email_config());
        assert!(state.is_valid);
        assert!(!state.is_touched);
        assert!(!state.is_masked);
        assert_eq!(state.status(), FieldStatus::Neutral);
    }

    #[test]
    fn change_returns_normalized_value_even_when_invalid() {
        let config = email_config();
        let mut state = FieldState::new(&config);

        let emitted = state.on_change(&config, "علی ali۱");
        assert_eq!(emitted, "ali1");
        assert_eq!(state.raw_value, "ali1");
        assert!(!state.is_valid);
        assert_eq!(state.status(), FieldStatus::Neutral);
        assert_eq!(state.error_message(&config), Some("Enter a valid email"));
    }

    #[test]
    fn blur_touches_and_revalidates() {
        let config = email_config();
        let mut state = FieldState::new(&config);
        state.set_value("nobody");
        state.on_blur(&config);

        assert!(state.is_touched);
        assert_eq!(state.status(), FieldStatus::Error);

        state.on_change(&config, "a@b.ir");
        assert_eq!(state.status(), FieldStatus::Success);
        assert_eq!(state.error_message(&config), None);
    }

    #[test]
    fn field_without_validator_stays_valid() {
        let config = FieldConfig::new("Note", InputKind::Text);
        let mut state = FieldState::new(&config);
        state.on_change(&config, "");
        state.on_blur(&config);
        assert!(state.is_valid);
        assert_eq!(state.status(), FieldStatus::Success);
    }

    #[test]
    fn password_visibility_toggle_is_presentational() {
        let config = FieldConfig::new("Password", InputKind::Password)
            .with_validator(crate::Validator::new(|value| value.len() >= 8));
        let mut state = FieldState::new(&config);
        assert!(state.is_masked);

        state.on_change(&config, "short");
        let before = (state.raw_value.clone(), state.is_valid);
        state.toggle_visibility();
        assert!(!state.is_masked);
        assert_eq!((state.raw_value.clone(), state.is_valid), before);
        state.toggle_visibility();
        assert!(state.is_masked);
    }
}
