//! Page theme configuration: text direction, font stack, and display locale.

use leptos::{logging, provide_context, use_context};
use locale_format::DisplayLocale;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Font stack applied to the page root when the config leaves it unset.
pub const DEFAULT_FONT_FAMILY: &str = "Roboto, Arial, sans-serif";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Document text direction.
pub enum TextDirection {
    /// Left to right.
    Ltr,
    /// Right to left.
    Rtl,
}

impl Default for TextDirection {
    fn default() -> Self {
        Self::Rtl
    }
}

impl TextDirection {
    /// Value for the HTML `dir` attribute.
    pub fn token(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Theme snapshot provided to every primitive below a [`crate::PageLayout`].
pub struct ThemeConfig {
    /// Document text direction.
    pub direction: TextDirection,
    /// CSS `font-family` stack.
    pub font_family: String,
    /// Locale used by formatted display primitives.
    pub locale: DisplayLocale,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            direction: TextDirection::Rtl,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            locale: DisplayLocale::Persian,
        }
    }
}

#[derive(Debug, Error)]
/// Errors raised while loading a theme configuration.
pub enum ThemeConfigError {
    /// The document was not a valid theme JSON object.
    #[error("invalid theme config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The font stack was present but blank.
    #[error("theme font_family must not be empty")]
    EmptyFontFamily,
}

impl ThemeConfig {
    /// Parses a JSON theme document; omitted keys take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ThemeConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.font_family.trim().is_empty() {
            return Err(ThemeConfigError::EmptyFontFamily);
        }
        Ok(config)
    }

    /// Parses a JSON theme document, logging and falling back to defaults on failure.
    pub fn from_json_or_default(raw: &str) -> Self {
        Self::from_json(raw).unwrap_or_else(|err| {
            logging::warn!("theme config load failed, using defaults: {err}");
            Self::default()
        })
    }

    /// Inline style for the page root.
    pub fn root_style(&self) -> String {
        format!("font-family: {};", self.font_family)
    }
}

/// Makes `theme` available to descendants via context.
pub fn provide_theme(theme: ThemeConfig) {
    provide_context(theme);
}

/// Returns the nearest provided theme, or the default RTL Persian theme.
pub fn use_theme() -> ThemeConfig {
    use_context::<ThemeConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_theme_is_rtl_persian() {
        let theme = ThemeConfig::default();
        assert_eq!(theme.direction, TextDirection::Rtl);
        assert_eq!(theme.direction.token(), "rtl");
        assert_eq!(theme.font_family, "Roboto, Arial, sans-serif");
        assert_eq!(theme.locale, DisplayLocale::Persian);
    }

    #[test]
    fn partial_json_keeps_defaults_for_missing_keys() {
        let theme = ThemeConfig::from_json(r#"{ "locale": "english" }"#).expect("valid theme");
        assert_eq!(
            theme,
            ThemeConfig {
                locale: DisplayLocale::English,
                ..ThemeConfig::default()
            }
        );
    }

    #[test]
    fn full_json_overrides_every_key() {
        let theme = ThemeConfig::from_json(
            r#"{ "direction": "ltr", "font_family": "Vazirmatn, sans-serif", "locale": "persian" }"#,
        )
        .expect("valid theme");
        assert_eq!(theme.direction, TextDirection::Ltr);
        assert_eq!(theme.root_style(), "font-family: Vazirmatn, sans-serif;");
    }

    #[test]
    fn malformed_or_blank_configs_are_rejected() {
        assert!(matches!(
            ThemeConfig::from_json(r#"{ "direction": "sideways" }"#),
            Err(ThemeConfigError::Parse(_))
        ));
        assert!(matches!(
            ThemeConfig::from_json(r#"{ "font_family": "  " }"#),
            Err(ThemeConfigError::EmptyFontFamily)
        ));
    }

    #[test]
    fn fallback_loader_returns_defaults() {
        assert_eq!(
            ThemeConfig::from_json_or_default("not json"),
            ThemeConfig::default()
        );
    }
}
