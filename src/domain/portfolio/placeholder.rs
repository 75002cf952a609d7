// SPDX-License-Identifier: MPL-2.0
//! Image locators for the external placeholder service.
//!
//! Photos carry no image data. Each rendering site asks for an image of a
//! given size, and the locator is templated as `{base}/{width}/{height}`.

/// Requested pixel size of a placeholder image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    #[must_use]
    pub fn aspect_ratio(self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Size requested for grid tiles.
pub const THUMBNAIL: ImageSize = ImageSize::new(400, 400);

/// Size requested for the lightbox.
pub const LIGHTBOX: ImageSize = ImageSize::new(800, 600);

/// Builds the locator for an image of `size` under `base`.
///
/// A trailing slash on `base` is ignored.
#[must_use]
pub fn locator(base: &str, size: ImageSize) -> String {
    format!(
        "{}/{}/{}",
        base.trim_end_matches('/'),
        size.width,
        size.height
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locator_is_templated_by_width_then_height() {
        assert_eq!(locator("/api/placeholder", THUMBNAIL), "/api/placeholder/400/400");
        assert_eq!(locator("/api/placeholder", LIGHTBOX), "/api/placeholder/800/600");
    }

    #[test]
    fn locator_ignores_trailing_slash() {
        assert_eq!(locator("/srv/images/", ImageSize::new(10, 20)), "/srv/images/10/20");
    }

    #[test]
    fn lightbox_is_landscape_and_thumbnail_is_square() {
        assert!(LIGHTBOX.aspect_ratio() > 1.0);
        assert_eq!(THUMBNAIL.width, THUMBNAIL.height);
    }
}
