// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with brand label, category filters, and dark-mode switch.
//!
//! On medium and wide windows the categories are inline buttons next to the
//! regular switch. On narrow windows they move into the mobile menu, and the
//! bar shows a compact switch plus the hamburger button instead.

use crate::domain::portfolio::Category;
use crate::domain::ui::layout::layout_bounds;
use crate::domain::ui::Breakpoint;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::StyleTokens;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, tooltip, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub tokens: StyleTokens,
    pub active_category: Category,
    pub is_dark_mode: bool,
    pub menu_open: bool,
    pub breakpoint: Breakpoint,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    SelectCategory(Category),
    ToggleDarkMode,
    ToggleMenu,
}

/// Dark-mode switch dimensions.
#[derive(Debug, Clone, Copy)]
enum SwitchSize {
    Regular,
    Compact,
}

impl SwitchSize {
    fn track(self) -> (f32, f32) {
        match self {
            SwitchSize::Regular => (sizing::TOGGLE_TRACK_WIDTH, sizing::TOGGLE_TRACK_HEIGHT),
            SwitchSize::Compact => (
                sizing::TOGGLE_TRACK_WIDTH_COMPACT,
                sizing::TOGGLE_TRACK_HEIGHT_COMPACT,
            ),
        }
    }

    fn knob(self) -> f32 {
        match self {
            SwitchSize::Regular => sizing::TOGGLE_KNOB,
            SwitchSize::Compact => sizing::TOGGLE_KNOB_COMPACT,
        }
    }

    fn icon(self) -> f32 {
        match self {
            SwitchSize::Regular => sizing::ICON_SM,
            SwitchSize::Compact => sizing::ICON_XS,
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("brand-label"))
        .size(typography::BRAND)
        .color(ctx.tokens.text_primary);

    let mut row = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if ctx.breakpoint.is_narrow() {
        row = row
            .push(build_switch(&ctx, SwitchSize::Compact))
            .push(build_hamburger(&ctx));
    } else {
        row = row
            .push(build_categories(&ctx))
            .push(build_switch(&ctx, SwitchSize::Regular));
    }

    let inner = Container::new(row)
        .max_width(layout_bounds::CONTENT_MAX_WIDTH)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([0.0, ctx.breakpoint.side_padding()])
        .align_y(Vertical::Center);

    Container::new(inner)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .style(styles::container::navbar(ctx.tokens))
        .into()
}

/// Inline category buttons, in display order.
fn build_categories<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Category::ALL
        .iter()
        .fold(
            Row::new().spacing(spacing::XL).align_y(Vertical::Center),
            |row, &category| {
                let label = Text::new(ctx.i18n.tr(category.i18n_key())).size(typography::BODY);
                row.push(
                    button(label)
                        .on_press(Message::SelectCategory(category))
                        .padding([spacing::XXS, 0.0])
                        .style(styles::button::category(
                            ctx.tokens,
                            category == ctx.active_category,
                        )),
                )
            },
        )
        .into()
}

/// Pill switch whose knob sits left (sun) in light mode and right (moon) in
/// dark mode.
fn build_switch<'a>(ctx: &ViewContext<'a>, size: SwitchSize) -> Element<'a, Message> {
    let (track_width, track_height) = size.track();
    let knob_side = size.knob();
    let inset = (track_height - knob_side) / 2.0;

    let glyph = if ctx.is_dark_mode {
        icons::moon()
    } else {
        icons::sun()
    };

    let knob = container(icons::tinted(glyph, size.icon(), ctx.tokens.toggle_icon))
        .center(Length::Fixed(knob_side))
        .style(styles::container::toggle_knob(ctx.tokens));

    let knob_position = if ctx.is_dark_mode {
        Horizontal::Right
    } else {
        Horizontal::Left
    };

    let track = container(knob)
        .width(Length::Fixed(track_width))
        .height(Length::Fixed(track_height))
        .padding(inset)
        .align_x(knob_position)
        .align_y(Vertical::Center);

    let switch = button(track)
        .on_press(Message::ToggleDarkMode)
        .padding(0)
        .style(styles::button::toggle_track(ctx.tokens));

    let hint = if ctx.is_dark_mode {
        ctx.i18n.tr("navbar-toggle-light-mode")
    } else {
        ctx.i18n.tr("navbar-toggle-dark-mode")
    };

    tooltip(switch, Text::new(hint), tooltip::Position::Bottom)
        .gap(spacing::XXS)
        .into()
}

/// Hamburger button; shows a close glyph while the menu is open.
fn build_hamburger<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let (glyph, hint) = if ctx.menu_open {
        (icons::close(), ctx.i18n.tr("navbar-close-menu"))
    } else {
        (icons::menu(), ctx.i18n.tr("navbar-open-menu"))
    };

    let menu_button = button(icons::tinted(glyph, sizing::ICON_MD, ctx.tokens.text_secondary))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS)
        .style(styles::button::icon(ctx.tokens));

    tooltip(menu_button, Text::new(hint), tooltip::Position::Bottom)
        .gap(spacing::XXS)
        .into()
}
