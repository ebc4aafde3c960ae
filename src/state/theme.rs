//! Light/dark theme preference.
//!
//! The theme is written to the `data-theme` attribute on `<html>` and to
//! `localStorage` under [`THEME_STORAGE_KEY`]. A missing or unknown stored
//! value falls back to [`Theme::Dark`].

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Color scheme applied to the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored theme name. Unknown names yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Human-readable name used in the screen reader announcement.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Tema Claro",
            Self::Dark => "Tema Escuro",
        }
    }

    /// Text announced through the polite live region after a change.
    #[must_use]
    pub fn announcement(self) -> String {
        format!("{} ativado", self.label())
    }

    /// CSS `display` values for the sun and moon icons, in that order.
    #[must_use]
    pub fn icon_display(self) -> (&'static str, &'static str) {
        match self {
            Self::Light => ("block", "none"),
            Self::Dark => ("none", "block"),
        }
    }
}

/// Owned theme state for the theme manager.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub current: Theme,
}

impl ThemeState {
    /// Build from the raw value found in storage, if any.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        let current = raw.and_then(Theme::parse).unwrap_or_default();
        Self { current }
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
    }

    /// Flip the theme and return the new value.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.current
    }
}

/// Whether a keydown is the theme shortcut (Ctrl+T).
#[must_use]
pub fn is_theme_shortcut(key: &str, ctrl: bool) -> bool {
    ctrl && key == "t"
}
