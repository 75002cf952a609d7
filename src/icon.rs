// SPDX-License-Identifier: MPL-2.0
//! Window icon.
//!
//! The brand SVG is embedded and rasterized at startup into an RGBA buffer for
//! the title bar and task switcher. Rendering failures fall back to the
//! platform's default icon.

use iced::window::{icon, Icon};
use resvg::usvg;

/// Side of the rasterized window icon, in pixels.
const ICON_SIDE: u32 = 128;

const SVG_SOURCE: &str = include_str!("../assets/branding/iced_folio.svg");

/// Rasterizes the brand SVG into a window icon.
///
/// Returns `None` if parsing or rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    let pixels = rasterize(SVG_SOURCE, ICON_SIDE)?;
    match icon::from_rgba(pixels, ICON_SIDE, ICON_SIDE) {
        Ok(icon) => Some(icon),
        Err(err) => {
            tracing::warn!(error = %err, "window icon rejected");
            None
        }
    }
}

/// Renders `svg` scaled to a `side` x `side` RGBA buffer.
fn rasterize(svg: &str, side: u32) -> Option<Vec<u8>> {
    let tree = match usvg::Tree::from_data(svg.as_bytes(), &usvg::Options::default()) {
        Ok(tree) => tree,
        Err(err) => {
            tracing::warn!(error = %err, "window icon SVG could not be parsed");
            return None;
        }
    };

    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        side as f32 / size.width(),
        side as f32 / size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(side, side)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Some(pixmap.take())
}
