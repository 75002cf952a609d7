// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the grid hover caption and the lightbox.
//!
//! Overlays sit on top of photos, so they keep the same dark scrim and white
//! text in both light and dark mode.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, GRAY_300, WHITE},
};
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Caption text color on overlays.
pub const TEXT: Color = WHITE;

/// Secondary caption text color on overlays.
pub const TEXT_SECONDARY: Color = GRAY_300;

/// Scrim revealed over a grid tile on hover.
#[must_use]
pub fn caption_scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::CAPTION_SCRIM,
            ..BLACK
        })),
        text_color: Some(TEXT),
        ..Default::default()
    }
}

/// Full-window backdrop of the lightbox.
#[must_use]
pub fn lightbox_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::LIGHTBOX_BACKDROP,
            ..BLACK
        })),
        text_color: Some(TEXT),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lightbox_is_darker_than_caption() {
        let (Some(Background::Color(caption)), Some(Background::Color(lightbox))) = (
            caption_scrim(&Theme::Light).background,
            lightbox_backdrop(&Theme::Light).background,
        ) else {
            panic!("expected solid backgrounds");
        };
        assert!(lightbox.a > caption.a);
    }
}
