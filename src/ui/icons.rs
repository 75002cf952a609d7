// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and their handles
//! are cached using `OnceLock`. They are drawn with `currentColor` strokes and
//! tinted at render time with [`tinted`], so a single asset serves both themes.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `close` not `close_lightbox`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(menu, "menu.svg", "Menu icon: three horizontal bars.");
define_icon!(close, "close.svg", "Close icon: diagonal cross.");
define_icon!(sun, "sun.svg", "Sun icon: circle with rays.");
define_icon!(moon, "moon.svg", "Moon icon: crescent.");

/// Sizes an icon to a square of `size` pixels and tints it with `color`.
pub fn tinted<'a>(icon: Svg<'a>, size: f32, color: Color) -> Svg<'a> {
    icon.width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
}
