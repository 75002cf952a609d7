// SPDX-License-Identifier: MPL-2.0
//! Responsive grid of photo tiles.
//!
//! Tiles are square and laid out row by row using [`GridMetrics`]. Each tile
//! shows the thumbnail over a neutral surface and reveals a caption scrim with
//! the title and description while hovered. Pressing a tile asks the app to
//! open the lightbox.

use crate::domain::portfolio::placeholder::{self, THUMBNAIL};
use crate::domain::portfolio::{Photo, PhotoId};
use crate::domain::ui::GridMetrics;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::StyleTokens;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{
        button, container, hover, image, scrollable, stack, Column, Container, Row, Space,
        Text,
    },
    ContentFit, Element, Length,
};

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    /// Photos of the active category, in catalog order.
    pub photos: Vec<&'static Photo>,
    pub tokens: StyleTokens,
    pub metrics: GridMetrics,
    pub image_base: &'a str,
}

/// Messages emitted by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    PhotoSelected(PhotoId),
}

/// Render the grid inside a vertical scrollable.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let locator = placeholder::locator(ctx.image_base, THUMBNAIL);
    let metrics = ctx.metrics;

    let rows = ctx.photos.chunks(metrics.columns).fold(
        Column::new().spacing(metrics.gap),
        |column, chunk| {
            let row = chunk.iter().fold(Row::new().spacing(metrics.gap), |row, &photo| {
                row.push(build_tile(photo, &locator, ctx.tokens, metrics.tile_side))
            });
            column.push(row)
        },
    );

    let content = Container::new(rows)
        .width(Length::Fixed(metrics.content_width))
        .padding([spacing::XL, 0.0]);

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// One clickable square tile.
fn build_tile<'a>(
    photo: &'static Photo,
    locator: &str,
    tokens: StyleTokens,
    side: f32,
) -> Element<'a, Message> {
    let surface = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::tile_placeholder(tokens));

    let thumbnail = image(image::Handle::from_path(locator))
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Cover);

    let caption = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(photo.title).size(typography::TITLE_SM))
        .push(
            Text::new(photo.description)
                .size(typography::BODY_SM)
                .color(styles::overlay::TEXT_SECONDARY),
        );

    let scrim = container(caption)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_y(Vertical::Bottom)
        .style(styles::overlay::caption_scrim);

    button(hover(stack![surface, thumbnail], scrim))
        .on_press(Message::PhotoSelected(photo.id))
        .padding(0)
        .width(Length::Fixed(side))
        .height(Length::Fixed(side))
        .style(styles::button::tile)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::portfolio::{filter_by_category, Category, PHOTOS};

    fn context(category: Category, window_width: f32) -> ViewContext<'static> {
        ViewContext {
            photos: filter_by_category(&PHOTOS, category).collect(),
            tokens: StyleTokens::light(),
            metrics: GridMetrics::for_width(window_width),
            image_base: "/api/placeholder",
        }
    }

    #[test]
    fn grid_renders_for_every_breakpoint() {
        for width in [360.0, 800.0, 1440.0] {
            let _element = view(context(Category::Home, width));
        }
    }

    #[test]
    fn grid_renders_empty_category() {
        let mut ctx = context(Category::Tokyo, 1024.0);
        ctx.photos.clear();
        let _element = view(ctx);
    }
}
