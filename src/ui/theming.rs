// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme resolution.
//!
//! The theme is a two-state machine. The initial state comes from the stored
//! preference when one exists, otherwise from the ambient OS color scheme.
//! OS preference changes are not observed after startup.

use dark_light;
use iced::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeChoice {
    Light,
    Dark,
}

impl ThemeChoice {
    /// Resolves the startup theme: explicit stored choice first, ambient OS
    /// hint otherwise.
    #[must_use]
    pub fn from_stored(stored: Option<bool>) -> Self {
        match stored {
            Some(true) => ThemeChoice::Dark,
            Some(false) => ThemeChoice::Light,
            None => Self::ambient(),
        }
    }

    /// Detects the OS color scheme. Only an unambiguous dark signal selects
    /// dark mode; "unspecified" and detection errors resolve to light.
    #[must_use]
    pub fn ambient() -> Self {
        if matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)) {
            ThemeChoice::Dark
        } else {
            ThemeChoice::Light
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeChoice::Light => ThemeChoice::Dark,
            ThemeChoice::Dark => ThemeChoice::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == ThemeChoice::Dark
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        match self {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_preference_wins_over_ambient() {
        assert_eq!(ThemeChoice::from_stored(Some(true)), ThemeChoice::Dark);
        assert_eq!(ThemeChoice::from_stored(Some(false)), ThemeChoice::Light);
    }

    #[test]
    fn no_stored_preference_uses_ambient_detection() {
        // Ambient detection is system dependent; just verify it resolves to
        // one of the two states without panicking.
        let choice = ThemeChoice::from_stored(None);
        assert!(matches!(choice, ThemeChoice::Light | ThemeChoice::Dark));
    }

    #[test]
    fn toggled_flips_both_ways() {
        assert_eq!(ThemeChoice::Light.toggled(), ThemeChoice::Dark);
        assert_eq!(ThemeChoice::Dark.toggled(), ThemeChoice::Light);
    }

    #[test]
    fn is_dark_matches_variant() {
        assert!(ThemeChoice::Dark.is_dark());
        assert!(!ThemeChoice::Light.is_dark());
    }

    #[test]
    fn iced_theme_maps_variants() {
        assert!(matches!(ThemeChoice::Light.iced_theme(), Theme::Light));
        assert!(matches!(ThemeChoice::Dark.iced_theme(), Theme::Dark));
    }
}
