//! Theme preference resolution and toggle semantics.
//!
//! DESIGN
//! ======
//! Pure state only: the browser glue in `util::dark_mode` reads storage and
//! the OS hint, feeds them through here, and writes back whatever comes out.
//!
//! The OS hint only applies when no key is stored at all. A stored value that
//! is not `"dark"` means light, even if it is junk from an older build.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// A theme choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Parse one of the two storage literals.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }
}

/// What the theme key in storage holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoredTheme {
    /// No key.
    Absent,
    /// Key present with an empty string.
    Empty,
    /// One of the two literals.
    Known(Theme),
    /// Key present with any other non-empty value.
    Unrecognized,
}

impl StoredTheme {
    /// Classify the raw result of `localStorage.getItem`.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            None => Self::Absent,
            Some("") => Self::Empty,
            Some(value) => Theme::parse(value).map_or(Self::Unrecognized, Self::Known),
        }
    }
}

/// Whether dark mode should be applied, given the stored value and the OS hint.
pub fn is_dark_preferred(stored: StoredTheme, os_prefers_dark: bool) -> bool {
    match stored {
        StoredTheme::Absent => os_prefers_dark,
        StoredTheme::Known(theme) => theme.is_dark(),
        StoredTheme::Empty | StoredTheme::Unrecognized => false,
    }
}

/// Stored preference plus the class currently applied to `<html>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeState {
    pub stored: StoredTheme,
    pub applied_dark: bool,
}

impl ThemeState {
    /// State at page load: the applied class follows the resolved preference.
    pub fn resolve(stored: StoredTheme, os_prefers_dark: bool) -> Self {
        Self { stored, applied_dark: is_dark_preferred(stored, os_prefers_dark) }
    }

    /// Theme written by the next toggle.
    ///
    /// A non-empty stored value decides: `"light"` becomes dark, anything
    /// else becomes light. With no key or an empty one the toggle flips
    /// whatever class is applied.
    pub fn next_theme(self) -> Theme {
        match self.stored {
            StoredTheme::Known(Theme::Light) => Theme::Dark,
            StoredTheme::Known(Theme::Dark) | StoredTheme::Unrecognized => Theme::Light,
            StoredTheme::Absent | StoredTheme::Empty => Theme::from_dark(self.applied_dark).opposite(),
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        let next = self.next_theme();
        Self { stored: StoredTheme::Known(next), applied_dark: next.is_dark() }
    }
}
