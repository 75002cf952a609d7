// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the four regions from the current [`ViewState`]. Style tokens and
//! grid metrics are derived once here and passed down.

use super::view_state::{Lightbox, ViewState};
use super::Message;
use crate::domain::ui::{Breakpoint, GridMetrics};
use crate::i18n::fluent::I18n;
use crate::ui::lightbox::{self, ViewContext as LightboxViewContext};
use crate::ui::mobile_menu::{self, ViewContext as MobileMenuViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::photo_grid::{self, ViewContext as PhotoGridViewContext};
use crate::ui::styles;
use crate::ui::theming::{StyleTokens, ThemeMode};
use iced::{
    widget::{opaque, Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a ViewState,
    pub window_width: f32,
    pub image_base: &'a str,
}

/// Renders the page, with the mobile menu and lightbox layered on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let tokens = StyleTokens::for_mode(ThemeMode::from_dark_flag(ctx.state.is_dark_mode()));
    let breakpoint = Breakpoint::from_width(ctx.window_width);

    let navbar = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        tokens,
        active_category: ctx.state.active_category(),
        is_dark_mode: ctx.state.is_dark_mode(),
        menu_open: ctx.state.is_menu_open(),
        breakpoint,
    })
    .map(Message::Navbar);

    let grid = photo_grid::view(PhotoGridViewContext {
        photos: ctx.state.visible_photos().collect(),
        tokens,
        metrics: GridMetrics::for_width(ctx.window_width),
        image_base: ctx.image_base,
    })
    .map(Message::Grid);

    let mut body = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(grid);

    // The menu flag survives a resize; only its overlay depends on the width.
    if ctx.state.is_menu_open() && breakpoint.is_narrow() {
        let menu = mobile_menu::view(MobileMenuViewContext {
            i18n: ctx.i18n,
            tokens,
            active_category: ctx.state.active_category(),
        })
        .map(Message::MobileMenu);
        body = body.push(opaque(menu));
    }

    let page = Container::new(
        Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(navbar)
            .push(body),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page(tokens));

    let mut root = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    if let Lightbox::Open(photo) = ctx.state.lightbox() {
        let overlay = lightbox::view(LightboxViewContext {
            i18n: ctx.i18n,
            tokens,
            photo,
            image_base: ctx.image_base,
        })
        .map(Message::Lightbox);
        root = root.push(opaque(overlay));
    }

    root.into()
}
