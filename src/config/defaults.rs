// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Placeholder image service
//! - **Window**: Initial and minimum window size

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Base locator of the external placeholder image service.
pub const DEFAULT_IMAGE_BASE: &str = "/api/placeholder";

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width; wide enough for the three-column grid.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;

/// Default window height.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Minimum window width (a phone-sized viewport).
pub const MIN_WINDOW_WIDTH: f32 = 360.0;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Maximum window dimension accepted from the config file.
pub const MAX_WINDOW_DIMENSION: f32 = 8192.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WINDOW_WIDTH > 0.0);
    assert!(MIN_WINDOW_HEIGHT > 0.0);
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
    assert!(MAX_WINDOW_DIMENSION > DEFAULT_WINDOW_WIDTH);
    assert!(MAX_WINDOW_DIMENSION > DEFAULT_WINDOW_HEIGHT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_base_has_no_trailing_slash() {
        assert!(!DEFAULT_IMAGE_BASE.ends_with('/'));
    }

    #[test]
    fn default_window_opens_wide_layout() {
        use crate::domain::ui::Breakpoint;
        assert_eq!(
            Breakpoint::from_width(DEFAULT_WINDOW_WIDTH),
            Breakpoint::Wide
        );
        assert!(Breakpoint::from_width(MIN_WINDOW_WIDTH).is_narrow());
    }
}
