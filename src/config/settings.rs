//! User settings and preferences for StatCode
//!
//! This module defines the `Settings` struct that holds the user-configurable
//! options (theme, font size, autosave interval), with serde support for JSON
//! persistence under the `settings` storage key.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Theme Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Available color themes for the editors and toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Gradient,
    Futuristic,
    Hacker,
}

impl Theme {
    /// Get all available themes, in settings-form order.
    pub fn all() -> &'static [Theme] {
        &[
            Theme::Dark,
            Theme::Light,
            Theme::Gradient,
            Theme::Futuristic,
            Theme::Hacker,
        ]
    }

    /// Get the display name for the theme.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Gradient => "Gradient",
            Theme::Futuristic => "Futuristic",
            Theme::Hacker => "Hacker",
        }
    }

    /// Whether the theme uses a dark background.
    pub fn is_dark(&self) -> bool {
        !matches!(self, Theme::Light)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// User preferences.
///
/// Serialized as `{theme, fontSize, autosaveInterval}`. Missing fields take
/// their defaults via `#[serde(default)]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Color theme
    pub theme: Theme,

    /// Editor font size (in points)
    pub font_size: u32,

    /// Autosave interval in seconds
    pub autosave_interval: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            font_size: Self::DEFAULT_FONT_SIZE,
            autosave_interval: Self::DEFAULT_AUTOSAVE_INTERVAL,
        }
    }
}

impl Settings {
    // ─────────────────────────────────────────────────────────────────────────
    // Validation Constants and Sanitization
    // ─────────────────────────────────────────────────────────────────────────

    /// Font size used when none (or zero) is given.
    pub const DEFAULT_FONT_SIZE: u32 = 14;
    /// Autosave interval used when none (or zero) is given.
    pub const DEFAULT_AUTOSAVE_INTERVAL: u32 = 5;
    /// Minimum allowed font size.
    pub const MIN_FONT_SIZE: u32 = 8;
    /// Maximum allowed font size.
    pub const MAX_FONT_SIZE: u32 = 72;
    /// Minimum autosave interval in seconds.
    pub const MIN_AUTOSAVE_INTERVAL: u32 = 1;
    /// Maximum autosave interval in seconds.
    pub const MAX_AUTOSAVE_INTERVAL: u32 = 3600;

    /// Sanitize settings: zero values fall back to defaults, everything else
    /// is clamped to its valid range.
    pub fn sanitize(&mut self) {
        if self.font_size == 0 {
            self.font_size = Self::DEFAULT_FONT_SIZE;
        }
        self.font_size = self
            .font_size
            .clamp(Self::MIN_FONT_SIZE, Self::MAX_FONT_SIZE);

        if self.autosave_interval == 0 {
            self.autosave_interval = Self::DEFAULT_AUTOSAVE_INTERVAL;
        }
        self.autosave_interval = self
            .autosave_interval
            .clamp(Self::MIN_AUTOSAVE_INTERVAL, Self::MAX_AUTOSAVE_INTERVAL);
    }

    /// Return a sanitized copy.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.sanitize();
        self
    }

    /// Deserialize settings and sanitize them.
    pub fn from_json_sanitized(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Font size as egui points.
    pub fn font_points(&self) -> f32 {
        self.font_size as f32
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.font_size, 14);
        assert_eq!(settings.autosave_interval, 5);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert_eq!(json, r#"{"theme":"dark","fontSize":14,"autosaveInterval":5}"#);
    }

    #[test]
    fn test_theme_serialization() {
        assert_eq!(serde_json::to_string(&Theme::Hacker).unwrap(), "\"hacker\"");
        assert_eq!(
            serde_json::from_str::<Theme>("\"futuristic\"").unwrap(),
            Theme::Futuristic
        );
        assert!(serde_json::from_str::<Theme>("\"neon\"").is_err());
    }

    #[test]
    fn test_deserialize_partial_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"theme": "light"}"#).unwrap();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.font_size, 14);
        assert_eq!(settings.autosave_interval, 5);
    }

    #[test]
    fn test_deserialize_empty_object() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let settings: Settings =
            serde_json::from_str(r#"{"theme": "gradient", "language": "en"}"#).unwrap();
        assert_eq!(settings.theme, Theme::Gradient);
    }

    #[test]
    fn test_sanitize_zero_falls_back_to_defaults() {
        let settings = Settings {
            theme: Theme::Hacker,
            font_size: 0,
            autosave_interval: 0,
        }
        .sanitized();
        assert_eq!(settings.font_size, Settings::DEFAULT_FONT_SIZE);
        assert_eq!(settings.autosave_interval, Settings::DEFAULT_AUTOSAVE_INTERVAL);
        assert_eq!(settings.theme, Theme::Hacker);
    }

    #[test]
    fn test_sanitize_clamps_ranges() {
        let mut settings = Settings {
            font_size: 3,
            autosave_interval: 100_000,
            ..Settings::default()
        };
        settings.sanitize();
        assert_eq!(settings.font_size, Settings::MIN_FONT_SIZE);
        assert_eq!(settings.autosave_interval, Settings::MAX_AUTOSAVE_INTERVAL);

        settings.font_size = 500;
        settings.sanitize();
        assert_eq!(settings.font_size, Settings::MAX_FONT_SIZE);
    }

    #[test]
    fn test_from_json_sanitized() {
        let settings = Settings::from_json_sanitized(r#"{"fontSize": 0}"#).unwrap();
        assert_eq!(settings.font_size, 14);
        assert!(Settings::from_json_sanitized(r#"{"fontSize": "big"}"#).is_err());
    }

    #[test]
    fn test_only_light_theme_is_light() {
        for theme in Theme::all() {
            assert_eq!(theme.is_dark(), *theme != Theme::Light);
        }
    }
}
