// SPDX-License-Identifier: MPL-2.0
//! Portfolio categories.
//!
//! Categories are a closed set: they double as filter keys for the photo grid
//! and as navigation labels, so their declaration order is the display order.

use std::fmt;

/// A photo category, in navigation display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Home,
    Tokyo,
    Portrait,
    Food,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::Home,
        Category::Tokyo,
        Category::Portrait,
        Category::Food,
    ];

    /// The category selected when the portfolio first opens.
    #[must_use]
    pub const fn first() -> Self {
        Self::ALL[0]
    }

    /// Canonical (untranslated) label.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Home => "Home",
            Category::Tokyo => "Tokyo",
            Category::Portrait => "Portrait",
            Category::Food => "Food",
        }
    }

    /// Fluent message key for the navigation label.
    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Category::Home => "category-home",
            Category::Tokyo => "category-tokyo",
            Category::Portrait => "category-portrait",
            Category::Food => "category-food",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
