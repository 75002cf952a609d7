// SPDX-License-Identifier: MPL-2.0
//! User interface regions and styling.
//!
//! Regions follow the Elm-style "state down, messages up" pattern: each one
//! is a stateless `view(ViewContext) -> Element<Message>` function, and the
//! app owns all state and maps region messages into its own.
//!
//! # Regions
//!
//! - [`navbar`] - Brand label, category filters, dark-mode switch, hamburger
//! - [`mobile_menu`] - Full-screen category list for narrow windows
//! - [`photo_grid`] - Responsive grid of photos of the active category
//! - [`lightbox`] - Enlarged view of the selected photo
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark mode and the derived style tokens
//! - [`icons`] - SVG icon loading and tinting

pub mod design_tokens;
pub mod icons;
pub mod lightbox;
pub mod mobile_menu;
pub mod navbar;
pub mod photo_grid;
pub mod styles;
pub mod theming;
