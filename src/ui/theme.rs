//! Theme definitions for reimburse

use gpui::{rgb, Hsla};

use crate::config;

/// Semantic color slot a widget asks the theme for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Primary,
    Secondary,
    Tertiary,
}

/// Color palette for the application
#[derive(Clone, Debug)]
pub struct ThemeColors {
    // Backgrounds
    pub background: Hsla,
    pub surface: Hsla,
    pub surface_elevated: Hsla,

    // Text
    pub text_primary: Hsla,
    pub text_secondary: Hsla,
    pub text_muted: Hsla,

    // Borders
    pub border: Hsla,

    // Semantic roles
    pub primary: Hsla,
    pub secondary: Hsla,
    pub tertiary: Hsla,
    /// Foreground drawn on top of a filled role color.
    pub on_role: Hsla,
}

impl ThemeColors {
    /// Dark theme colors
    pub fn dark() -> Self {
        Self {
            // Backgrounds
            background: rgb(0x1a1a1a).into(),
            surface: rgb(0x242424).into(),
            surface_elevated: rgb(0x2e2e2e).into(),

            // Text
            text_primary: rgb(0xffffff).into(),
            text_secondary: rgb(0xa0a0a0).into(),
            text_muted: rgb(0x666666).into(),

            // Borders
            border: rgb(0x3a3a3a).into(),

            // Roles
            primary: rgb(0x4caf50).into(),
            secondary: rgb(0xb0a58f).into(),
            tertiary: rgb(0x4a9eff).into(),
            on_role: rgb(0x101010).into(),
        }
    }

    /// Light theme colors
    pub fn light() -> Self {
        Self {
            // Backgrounds
            background: rgb(0xffffff).into(),
            surface: rgb(0xf5f5f5).into(),
            surface_elevated: rgb(0xffffff).into(),

            // Text
            text_primary: rgb(0x1a1a1a).into(),
            text_secondary: rgb(0x666666).into(),
            text_muted: rgb(0x999999).into(),

            // Borders
            border: rgb(0xe0e0e0).into(),

            // Roles
            primary: rgb(0x34a853).into(),
            secondary: rgb(0x7a6f5c).into(),
            tertiary: rgb(0x1a73e8).into(),
            on_role: rgb(0xffffff).into(),
        }
    }

    /// Resolve a semantic role to a concrete color.
    pub fn role(&self, role: ColorRole) -> Hsla {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::Secondary => self.secondary,
            ColorRole::Tertiary => self.tertiary,
        }
    }
}

/// Theme mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// The settings value that pins this mode.
    pub fn setting(self) -> config::Theme {
        match self {
            ThemeMode::Dark => config::Theme::Dark,
            ThemeMode::Light => config::Theme::Light,
        }
    }
}

/// Application theme
#[derive(Clone, Debug)]
pub struct Theme {
    pub mode: ThemeMode,
    pub colors: ThemeColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create dark theme
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            colors: ThemeColors::dark(),
        }
    }

    /// Create light theme
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            colors: ThemeColors::light(),
        }
    }

    /// Build the theme selected in settings.
    ///
    /// `system_prefers_dark` is consulted only for [`config::Theme::System`].
    pub fn from_setting(setting: config::Theme, system_prefers_dark: bool) -> Self {
        match setting {
            config::Theme::Dark => Self::dark(),
            config::Theme::Light => Self::light(),
            config::Theme::System if system_prefers_dark => Self::dark(),
            config::Theme::System => Self::light(),
        }
    }

    /// Toggle between light and dark
    pub fn toggle(&mut self) {
        match self.mode {
            ThemeMode::Dark => *self = Self::light(),
            ThemeMode::Light => *self = Self::dark(),
        }
    }
}
