//! Theme System for StatCode
//!
//! Each `config::Theme` maps to a `ThemeColors` palette. The palette is turned
//! into egui `Visuals` by `visuals.rs` and applied by the `ThemeManager`.
//! Editor text colors come from syntect (see `markdown::syntax`); this module
//! covers the surrounding chrome.
//!
//! # Usage
//!
//! ```ignore
//! use crate::theme::ThemeManager;
//! use crate::config::Theme;
//!
//! let mut manager = ThemeManager::new(Theme::Hacker);
//! manager.apply(&ctx);
//! ```

pub mod manager;
pub mod visuals;

pub use manager::ThemeManager;

use crate::config::Theme;
use eframe::egui::Color32;

// ─────────────────────────────────────────────────────────────────────────────
// Theme Colors
// ─────────────────────────────────────────────────────────────────────────────

/// Palette for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    /// Main panel background
    pub background: Color32,
    /// Toolbar and inactive widget background
    pub background_secondary: Color32,
    /// Editor text area background
    pub editor_background: Color32,
    pub border: Color32,
    pub text: Color32,
    pub text_muted: Color32,
    /// Buttons, active tab, focus outlines
    pub accent: Color32,
    pub selection: Color32,
    /// Top toolbar fill
    pub toolbar: Color32,
    pub dark: bool,
}

impl ThemeColors {
    /// Palette for the given theme.
    pub fn from_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color32::from_rgb(30, 30, 30),
                background_secondary: Color32::from_rgb(37, 37, 38),
                editor_background: Color32::from_rgb(24, 24, 24),
                border: Color32::from_rgb(60, 60, 60),
                text: Color32::from_rgb(212, 212, 212),
                text_muted: Color32::from_rgb(140, 140, 140),
                accent: Color32::from_rgb(0, 122, 204),
                selection: Color32::from_rgb(38, 79, 120),
                toolbar: Color32::from_rgb(45, 45, 48),
                dark: true,
            },
            Theme::Light => Self {
                background: Color32::from_rgb(255, 255, 255),
                background_secondary: Color32::from_rgb(243, 243, 243),
                editor_background: Color32::from_rgb(250, 250, 250),
                border: Color32::from_rgb(210, 210, 210),
                text: Color32::from_rgb(40, 40, 40),
                text_muted: Color32::from_rgb(110, 110, 110),
                accent: Color32::from_rgb(0, 102, 204),
                selection: Color32::from_rgb(173, 214, 255),
                toolbar: Color32::from_rgb(230, 230, 230),
                dark: false,
            },
            Theme::Gradient => Self {
                background: Color32::from_rgb(43, 16, 85),
                background_secondary: Color32::from_rgb(60, 25, 110),
                editor_background: Color32::from_rgb(32, 12, 64),
                border: Color32::from_rgb(117, 79, 168),
                text: Color32::from_rgb(240, 230, 255),
                text_muted: Color32::from_rgb(185, 165, 215),
                accent: Color32::from_rgb(255, 126, 179),
                selection: Color32::from_rgb(120, 60, 150),
                toolbar: Color32::from_rgb(82, 36, 128),
                dark: true,
            },
            Theme::Futuristic => Self {
                background: Color32::from_rgb(10, 15, 31),
                background_secondary: Color32::from_rgb(16, 24, 48),
                editor_background: Color32::from_rgb(6, 10, 22),
                border: Color32::from_rgb(0, 150, 170),
                text: Color32::from_rgb(0, 229, 255),
                text_muted: Color32::from_rgb(90, 160, 190),
                accent: Color32::from_rgb(0, 229, 255),
                selection: Color32::from_rgb(0, 80, 110),
                toolbar: Color32::from_rgb(12, 30, 60),
                dark: true,
            },
            Theme::Hacker => Self {
                background: Color32::from_rgb(0, 0, 0),
                background_secondary: Color32::from_rgb(8, 18, 8),
                editor_background: Color32::from_rgb(0, 0, 0),
                border: Color32::from_rgb(0, 120, 0),
                text: Color32::from_rgb(0, 255, 0),
                text_muted: Color32::from_rgb(0, 170, 0),
                accent: Color32::from_rgb(57, 255, 20),
                selection: Color32::from_rgb(0, 90, 0),
                toolbar: Color32::from_rgb(0, 30, 0),
                dark: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_flag_matches_theme() {
        for theme in Theme::all() {
            assert_eq!(ThemeColors::from_theme(*theme).dark, theme.is_dark());
        }
    }

    #[test]
    fn test_palettes_are_distinct() {
        let backgrounds: Vec<Color32> = Theme::all()
            .iter()
            .map(|t| ThemeColors::from_theme(*t).background)
            .collect();
        for (i, a) in backgrounds.iter().enumerate() {
            for b in &backgrounds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_selection_differs_from_background() {
        for theme in Theme::all() {
            let colors = ThemeColors::from_theme(*theme);
            assert_ne!(colors.selection, colors.background);
        }
    }
}
