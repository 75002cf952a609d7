// SPDX-License-Identifier: MPL-2.0
//! Full-window overlay presenting one enlarged photo.
//!
//! The only interaction is the close button: while the lightbox is mounted,
//! the app wraps it in an opaque layer so the grid below stays unreachable.

use crate::domain::portfolio::placeholder::{self, LIGHTBOX};
use crate::domain::portfolio::Photo;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::StyleTokens;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, image, stack, tooltip, Column, Container, Row, Space, Text},
    ContentFit, Element, Length,
};

/// Contextual data needed to render the lightbox.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub tokens: StyleTokens,
    pub photo: &'static Photo,
    pub image_base: &'a str,
}

/// Messages emitted by the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Close,
}

/// Render the lightbox.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let close_button = button(icons::tinted(
        icons::close(),
        sizing::ICON_MD,
        styles::overlay::TEXT,
    ))
    .on_press(Message::Close)
    .padding(spacing::XS)
    .style(styles::button::lightbox_close);

    let close_row = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(tooltip(
            close_button,
            Text::new(ctx.i18n.tr("lightbox-close")),
            tooltip::Position::Left,
        ));

    let max_height = sizing::LIGHTBOX_MAX_WIDTH / LIGHTBOX.aspect_ratio();

    let surface = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::tile_placeholder(ctx.tokens));

    let picture = image(image::Handle::from_path(placeholder::locator(
        ctx.image_base,
        LIGHTBOX,
    )))
    .width(Length::Fill)
    .height(Length::Fill)
    .content_fit(ContentFit::Contain);

    let frame = Container::new(stack![surface, picture])
        .width(Length::Fill)
        .height(Length::Fill)
        .max_width(sizing::LIGHTBOX_MAX_WIDTH)
        .max_height(max_height);

    let title = Text::new(ctx.photo.title)
        .size(typography::TITLE_MD)
        .color(styles::overlay::TEXT);

    let description = Text::new(ctx.photo.description)
        .size(typography::BODY)
        .color(styles::overlay::TEXT_SECONDARY);

    let body = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .max_width(sizing::LIGHTBOX_MAX_WIDTH)
        .push(frame)
        .push(title)
        .push(description);

    let layout = Column::new()
        .spacing(spacing::SM)
        .push(close_row)
        .push(
            Container::new(body)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );

    Container::new(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(styles::overlay::lightbox_backdrop)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::portfolio::PHOTOS;

    #[test]
    fn lightbox_renders_every_photo() {
        let i18n = I18n::default();
        for photo in &PHOTOS {
            let _element = view(ViewContext {
                i18n: &i18n,
                tokens: StyleTokens::dark(),
                photo,
                image_base: "/api/placeholder",
            });
        }
    }
}
