// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Every style takes the current [`StyleTokens`] so buttons follow the
//! portfolio's own light/dark palette rather than Iced's built-in theme.

use crate::ui::design_tokens::{opacity, palette, radius};
use crate::ui::theming::StyleTokens;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Text-only category button (navigation bar and mobile menu).
///
/// The active category uses the primary text color, the others the secondary
/// one. Hovering an inactive label brightens it to the primary color.
pub fn category(
    tokens: StyleTokens,
    active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => tokens.text_primary,
            _ => tokens.label_color(active),
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            ..button::Style::default()
        }
    }
}

/// Borderless icon button (hamburger).
pub fn icon(tokens: StyleTokens) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: None,
        text_color: tokens.text_secondary,
        border: Border::default(),
        ..button::Style::default()
    }
}

/// Pill-shaped track of the dark-mode switch.
pub fn toggle_track(tokens: StyleTokens) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: Some(Background::Color(tokens.toggle_track)),
        text_color: tokens.toggle_icon,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Grid tile: the photo surface itself is the clickable area.
pub fn tile(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: palette::WHITE,
        border: Border {
            radius: radius::NONE.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Close button floating on the lightbox backdrop.
pub fn lightbox_close(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::CAPTION_SCRIM,
        _ => opacity::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_700
        })),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_category_uses_primary_text() {
        let tokens = StyleTokens::light();
        let style = category(tokens, true)(&Theme::Light, button::Status::Active);
        assert_eq!(style.text_color, tokens.text_primary);
    }

    #[test]
    fn inactive_category_uses_secondary_text_until_hovered() {
        let tokens = StyleTokens::dark();
        let style_fn = category(tokens, false);

        let idle = style_fn(&Theme::Dark, button::Status::Active);
        let hovered = style_fn(&Theme::Dark, button::Status::Hovered);

        assert_eq!(idle.text_color, tokens.text_secondary);
        assert_eq!(hovered.text_color, tokens.text_primary);
    }

    #[test]
    fn toggle_track_follows_mode() {
        let light = toggle_track(StyleTokens::light())(&Theme::Light, button::Status::Active);
        let dark = toggle_track(StyleTokens::dark())(&Theme::Dark, button::Status::Active);
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn lightbox_close_highlights_on_hover() {
        let idle = lightbox_close(&Theme::Dark, button::Status::Active);
        let hovered = lightbox_close(&Theme::Dark, button::Status::Hovered);
        assert_ne!(idle.background, hovered.background);
    }
}
