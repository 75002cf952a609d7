// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a single-page photo portfolio built with the Iced GUI framework.
//!
//! It shows a navigation bar with category filters and a dark/light switch, a
//! responsive grid of the active category's photos, and a lightbox for one
//! enlarged photo. Strings are localized with Fluent and a read-only
//! `settings.toml` tunes the image service and window size.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
