// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.
//!
//! Every themed color is a pure function of the dark-mode flag: the flag maps
//! to a [`ThemeMode`], and the mode maps to one [`StyleTokens`] record that is
//! computed once per render and handed to the views.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Iced built-in theme used for widgets without a custom style.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }
}

/// Colors derived from the theme mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleTokens {
    pub mode: ThemeMode,

    // Surfaces
    pub page_background: Color,
    pub nav_background: Color,
    pub tile_placeholder: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,

    // Dark-mode switch
    pub toggle_track: Color,
    pub toggle_knob: Color,
    pub toggle_icon: Color,
}

impl StyleTokens {
    /// Light mode.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            page_background: palette::WHITE,
            nav_background: Color {
                a: opacity::NAV_SURFACE,
                ..palette::WHITE
            },
            tile_placeholder: palette::GRAY_200,
            text_primary: palette::BLACK,
            text_secondary: palette::GRAY_600,
            toggle_track: palette::GRAY_200,
            toggle_knob: palette::WHITE,
            toggle_icon: palette::GRAY_600,
        }
    }

    /// Dark mode.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            page_background: palette::GRAY_900,
            nav_background: Color {
                a: opacity::NAV_SURFACE,
                ..palette::GRAY_900
            },
            tile_placeholder: palette::GRAY_800,
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_300,
            toggle_track: palette::GRAY_600,
            toggle_knob: palette::GRAY_800,
            toggle_icon: palette::GRAY_200,
        }
    }

    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Text color for a navigation label.
    #[must_use]
    pub fn label_color(&self, active: bool) -> Color {
        if active {
            self.text_primary
        } else {
            self.text_secondary
        }
    }
}
