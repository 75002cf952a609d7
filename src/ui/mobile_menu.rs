// SPDX-License-Identifier: MPL-2.0
//! Full-screen category menu for narrow windows.
//!
//! The app only mounts this region while the hamburger is open and the window
//! is narrow; it covers the grid below the navigation bar.

use crate::domain::portfolio::Category;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::StyleTokens;
use iced::{
    widget::{button, Column, Container, Text},
    Element, Length,
};

/// Contextual data needed to render the mobile menu.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub tokens: StyleTokens,
    pub active_category: Category,
}

/// Messages emitted by the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    SelectCategory(Category),
}

/// Render the mobile menu.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let entries = Category::ALL.iter().fold(
        Column::new().spacing(spacing::XS).width(Length::Fill),
        |column, &category| {
            let label = Text::new(ctx.i18n.tr(category.i18n_key())).size(typography::BODY_LG);
            column.push(
                button(label)
                    .on_press(Message::SelectCategory(category))
                    .padding([spacing::SM, spacing::MD])
                    .width(Length::Fill)
                    .style(styles::button::category(
                        ctx.tokens,
                        category == ctx.active_category,
                    )),
            )
        },
    );

    Container::new(entries)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([spacing::MD, spacing::XS])
        .style(styles::container::page(ctx.tokens))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_menu_renders_in_both_modes() {
        let i18n = I18n::default();
        for tokens in [StyleTokens::light(), StyleTokens::dark()] {
            let _element = view(ViewContext {
                i18n: &i18n,
                tokens,
                active_category: Category::Food,
            });
        }
    }
}
