//! Theme Manager for StatCode
//!
//! Holds the current theme, caches its egui `Visuals` and applies them to
//! the egui context when the theme changes.
//!
//! # Usage
//!
//! ```ignore
//! use crate::theme::ThemeManager;
//! use crate::config::Theme;
//!
//! let mut manager = ThemeManager::new(Theme::Dark);
//! manager.apply_if_needed(&ctx);
//!
//! manager.set_theme(Theme::Gradient);
//! manager.apply_if_needed(&ctx);
//! ```

use eframe::egui::{Context, Visuals};
use log::{debug, info};

use super::{visuals::create_visuals, ThemeColors};
use crate::config::Theme;

// ─────────────────────────────────────────────────────────────────────────────
// Theme Manager
// ─────────────────────────────────────────────────────────────────────────────

/// Manages theme state and applies themes to the egui context.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    current_theme: Theme,
    /// Cached visuals for the current theme
    cached_visuals: Option<Visuals>,
    /// Whether the theme needs to be reapplied
    needs_apply: bool,
}

impl ThemeManager {
    /// Create a new ThemeManager with the given initial theme.
    pub fn new(theme: Theme) -> Self {
        info!("ThemeManager initialized with theme: {:?}", theme);
        Self {
            current_theme: theme,
            cached_visuals: None,
            needs_apply: true,
        }
    }

    /// Set the theme and mark for reapplication.
    ///
    /// This doesn't apply the theme immediately - call `apply()` to update the UI.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.current_theme != theme {
            info!("Theme changed from {:?} to {:?}", self.current_theme, theme);
            self.current_theme = theme;
            self.cached_visuals = None;
            self.needs_apply = true;
        }
    }

    /// Apply the current theme to the egui context.
    pub fn apply(&mut self, ctx: &Context) {
        let visuals = self.get_or_create_visuals();
        ctx.set_visuals(visuals);
        self.needs_apply = false;
        debug!("Applied theme: {:?}", self.current_theme);
    }

    /// Apply the theme only if it changed since the last apply.
    ///
    /// Returns `true` if the theme was applied.
    pub fn apply_if_needed(&mut self, ctx: &Context) -> bool {
        if self.needs_apply {
            self.apply(ctx);
            true
        } else {
            false
        }
    }

    fn get_or_create_visuals(&mut self) -> Visuals {
        if let Some(ref visuals) = self.cached_visuals {
            return visuals.clone();
        }
        let visuals = create_visuals(self.current_theme);
        self.cached_visuals = Some(visuals.clone());
        visuals
    }

    /// Palette of the current theme.
    pub fn colors(&self) -> ThemeColors {
        ThemeColors::from_theme(self.current_theme)
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_manager_new() {
        let manager = ThemeManager::new(Theme::Hacker);
        assert_eq!(manager.current_theme, Theme::Hacker);
        assert!(manager.needs_apply);
    }

    #[test]
    fn test_theme_manager_default() {
        assert_eq!(ThemeManager::default().current_theme, Theme::Dark);
    }

    #[test]
    fn test_theme_manager_set_theme() {
        let mut manager = ThemeManager::new(Theme::Light);
        manager.needs_apply = false;

        manager.set_theme(Theme::Futuristic);
        assert_eq!(manager.current_theme, Theme::Futuristic);
        assert!(manager.needs_apply);
        assert!(manager.cached_visuals.is_none());
    }

    #[test]
    fn test_theme_manager_set_same_theme() {
        let mut manager = ThemeManager::new(Theme::Light);
        manager.needs_apply = false;

        manager.set_theme(Theme::Light);
        assert!(!manager.needs_apply);
    }

    #[test]
    fn test_apply_if_needed() {
        let ctx = Context::default();
        let mut manager = ThemeManager::new(Theme::Light);

        assert!(manager.apply_if_needed(&ctx));
        assert!(!ctx.style().visuals.dark_mode);
        assert!(!manager.apply_if_needed(&ctx));

        manager.set_theme(Theme::Gradient);
        assert!(manager.apply_if_needed(&ctx));
        assert!(ctx.style().visuals.dark_mode);
    }

    #[test]
    fn test_colors_follow_theme() {
        let manager = ThemeManager::new(Theme::Hacker);
        assert_eq!(manager.colors(), ThemeColors::from_theme(Theme::Hacker));
    }
}
