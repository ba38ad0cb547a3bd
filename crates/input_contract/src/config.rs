use serde::{Deserialize, Serialize};

use crate::{NormalizeMode, Validator};

/// Helper text shown under an invalid field when no message is configured.
pub const DEFAULT_INVALID_MESSAGE: &str = "Invalid input";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Kind of value a field collects.
pub enum InputKind {
    /// Free text.
    Text,
    /// Email address; restricted to ASCII.
    Email,
    /// Secret text with a visibility toggle.
    Password,
    /// Numeric text; restricted to digits and `.`.
    Number,
}

impl Default for InputKind {
    fn default() -> Self {
        Self::Text
    }
}

impl InputKind {
    /// HTML `type` attribute for the rendered `<input>`.
    ///
    /// Numbers render as plain text so Persian digits can be typed and canonicalized.
    /// Passwords render as text while the user has revealed them.
    pub fn html_type(self, masked: bool) -> &'static str {
        match self {
            Self::Text | Self::Number => "text",
            Self::Email => "email",
            Self::Password if masked => "password",
            Self::Password => "text",
        }
    }

    /// Stable token used in `data-ui-*` attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Per-instance configuration snapshot for a validated field.
pub struct FieldConfig {
    /// Visible label.
    pub label: String,
    /// Kind of value collected.
    pub kind: InputKind,
    /// Placeholder text.
    pub placeholder: String,
    /// Marks the label as required.
    pub required: bool,
    /// Disables editing.
    pub disabled: bool,
    /// Restricts input to ASCII letters, digits, `@`, and `.` regardless of kind.
    pub restrict_to_ascii: bool,
    /// Optional validity predicate.
    pub validator: Option<Validator>,
    /// Helper text shown while the value is invalid.
    pub invalid_message: String,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            kind: InputKind::Text,
            placeholder: String::new(),
            required: false,
            disabled: false,
            restrict_to_ascii: false,
            validator: None,
            invalid_message: DEFAULT_INVALID_MESSAGE.to_string(),
        }
    }
}

impl FieldConfig {
    /// Creates a config with defaults for every optional setting.
    pub fn new(label: impl Into<String>, kind: InputKind) -> Self {
        Self {
            label: label.into(),
            kind,
            ..Self::default()
        }
    }

    /// Sets the placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Marks the field required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Disables the field.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Restricts input to ASCII.
    pub fn restrict_to_ascii(mut self, restrict: bool) -> Self {
        self.restrict_to_ascii = restrict;
        self
    }

    /// Installs a validity predicate.
    pub fn with_validator(mut self, validator: impl Into<Validator>) -> Self {
        self.validator = Some(validator.into());
        self
    }

    /// Overrides the invalid-value helper text.
    pub fn with_invalid_message(mut self, message: impl Into<String>) -> Self {
        self.invalid_message = message.into();
        self
    }

    /// Filters implied by the field kind and the ASCII restriction.
    pub fn normalize_mode(&self) -> NormalizeMode {
        NormalizeMode {
            digits_only: self.kind == InputKind::Number,
            ascii_only: self.restrict_to_ascii || self.kind == InputKind::Email,
        }
    }

    /// Label text with a trailing `*` for required fields.
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_widget_contract() {
        let config = FieldConfig::new("Name", InputKind::Text);
        assert!(!config.required);
        assert!(!config.disabled);
        assert!(!config.restrict_to_ascii);
        assert!(config.validator.is_none());
        assert_eq!(config.invalid_message, "Invalid input");
        assert_eq!(config.placeholder, "");
    }

    #[test]
    fn mode_follows_kind_and_ascii_flag() {
        assert_eq!(
            FieldConfig::new("", InputKind::Text).normalize_mode(),
            NormalizeMode::PASSTHROUGH
        );
        assert_eq!(
            FieldConfig::new("", InputKind::Number).normalize_mode(),
            NormalizeMode::DIGITS_ONLY
        );
        assert_eq!(
            FieldConfig::new("", InputKind::Email).normalize_mode(),
            NormalizeMode::ASCII_ONLY
        );
        assert_eq!(
            FieldConfig::new("", InputKind::Password)
                .restrict_to_ascii(true)
                .normalize_mode(),
            NormalizeMode::ASCII_ONLY
        );
    }

    #[test]
    fn required_fields_get_an_asterisk() {
        let config = FieldConfig::new("Email", InputKind::Email);
        assert_eq!(config.display_label(), "Email");
        assert_eq!(config.required(true).display_label(), "Email *");
    }

    #[test]
    fn html_type_hides_numbers_and_revealed_passwords() {
        assert_eq!(InputKind::Number.html_type(true), "text");
        assert_eq!(InputKind::Email.html_type(true), "email");
        assert_eq!(InputKind::Password.html_type(true), "password");
        assert_eq!(InputKind::Password.html_type(false), "text");
    }

    #[test]
    fn kind_deserializes_from_lowercase_names() {
        let kind: InputKind = serde_json::from_str("\"password\"").expect("known kind");
        assert_eq!(kind, InputKind::Password);
    }
}
