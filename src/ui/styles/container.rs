// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::radius;
use crate::ui::theming::StyleTokens;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Page surface behind the grid and the mobile menu.
pub fn page(tokens: StyleTokens) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(tokens.page_background)),
        text_color: Some(tokens.text_primary),
        ..Default::default()
    }
}

/// Translucent navigation bar surface.
pub fn navbar(tokens: StyleTokens) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(tokens.nav_background)),
        text_color: Some(tokens.text_primary),
        ..Default::default()
    }
}

/// Round knob of the dark-mode switch.
pub fn toggle_knob(tokens: StyleTokens) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(tokens.toggle_knob)),
        text_color: Some(tokens.toggle_icon),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Neutral surface shown behind a photo until its image resolves.
pub fn tile_placeholder(tokens: StyleTokens) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(tokens.tile_placeholder)),
        text_color: Some(tokens.text_secondary),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_and_navbar_share_hue() {
        let tokens = StyleTokens::dark();
        let page = page(tokens)(&Theme::Dark);
        let nav = navbar(tokens)(&Theme::Dark);

        let (Some(Background::Color(page_bg)), Some(Background::Color(nav_bg))) =
            (page.background, nav.background)
        else {
            panic!("expected solid backgrounds");
        };
        assert_eq!(page_bg.r, nav_bg.r);
        assert!(nav_bg.a < page_bg.a);
    }
}
