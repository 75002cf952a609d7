// SPDX-License-Identifier: MPL-2.0
//! Responsive layout rules.
//!
//! The window width selects a [`Breakpoint`], which in turn decides whether the
//! navigation shows inline category buttons or the compact hamburger, and how
//! many columns the photo grid uses. [`GridMetrics`] turns a window width into
//! concrete tile sizes so tiles stay square.

/// Layout constants, in logical pixels.
pub mod layout_bounds {
    /// Widths below this use the compact (narrow) layout.
    pub const MEDIUM_MIN_WIDTH: f32 = 768.0;
    /// Widths at or above this use the three-column layout.
    pub const WIDE_MIN_WIDTH: f32 = 1024.0;
    /// Maximum width of the page content.
    pub const CONTENT_MAX_WIDTH: f32 = 1280.0;
    /// Gap between grid tiles.
    pub const GRID_GAP: f32 = 32.0;
    /// Smallest tile side the grid will produce.
    pub const MIN_TILE_SIDE: f32 = 64.0;
}

/// Viewport width class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Narrow,
    Medium,
    Wide,
}

impl Breakpoint {
    /// Classifies a window width.
    #[must_use]
    pub fn from_width(width: f32) -> Self {
        if width >= layout_bounds::WIDE_MIN_WIDTH {
            Breakpoint::Wide
        } else if width >= layout_bounds::MEDIUM_MIN_WIDTH {
            Breakpoint::Medium
        } else {
            Breakpoint::Narrow
        }
    }

    /// Whether the compact navigation (toggle + hamburger) is shown.
    #[must_use]
    pub fn is_narrow(self) -> bool {
        matches!(self, Breakpoint::Narrow)
    }

    /// Number of grid columns.
    #[must_use]
    pub fn columns(self) -> usize {
        match self {
            Breakpoint::Narrow => 1,
            Breakpoint::Medium => 2,
            Breakpoint::Wide => 3,
        }
    }

    /// Horizontal page padding around the content.
    #[must_use]
    pub fn side_padding(self) -> f32 {
        match self {
            Breakpoint::Narrow => 16.0,
            Breakpoint::Medium => 24.0,
            Breakpoint::Wide => 32.0,
        }
    }
}

/// Concrete grid geometry for one window width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    pub columns: usize,
    pub content_width: f32,
    pub tile_side: f32,
    pub gap: f32,
}

impl GridMetrics {
    /// Computes the grid for a window of `window_width`.
    #[must_use]
    pub fn for_width(window_width: f32) -> Self {
        let breakpoint = Breakpoint::from_width(window_width);
        let columns = breakpoint.columns();
        let gap = layout_bounds::GRID_GAP;

        let available = (window_width - 2.0 * breakpoint.side_padding()).max(0.0);
        let content_width = available.min(layout_bounds::CONTENT_MAX_WIDTH);

        let gaps = gap * (columns - 1) as f32;
        let tile_side =
            ((content_width - gaps) / columns as f32).max(layout_bounds::MIN_TILE_SIDE);

        Self {
            columns,
            content_width,
            tile_side,
            gap,
        }
    }

    /// Number of rows needed for `count` tiles.
    #[must_use]
    pub fn rows_for(&self, count: usize) -> usize {
        count.div_ceil(self.columns)
    }
}

const _: () = {
    assert!(layout_bounds::MEDIUM_MIN_WIDTH < layout_bounds::WIDE_MIN_WIDTH);
    assert!(layout_bounds::WIDE_MIN_WIDTH < layout_bounds::CONTENT_MAX_WIDTH);
    assert!(layout_bounds::GRID_GAP > 0.0);
    assert!(layout_bounds::MIN_TILE_SIDE > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn breakpoints_follow_width_thresholds() {
        assert_eq!(Breakpoint::from_width(375.0), Breakpoint::Narrow);
        assert_eq!(Breakpoint::from_width(767.9), Breakpoint::Narrow);
        assert_eq!(Breakpoint::from_width(768.0), Breakpoint::Medium);
        assert_eq!(Breakpoint::from_width(1023.0), Breakpoint::Medium);
        assert_eq!(Breakpoint::from_width(1024.0), Breakpoint::Wide);
    }

    #[test]
    fn columns_grow_with_breakpoint() {
        assert_eq!(Breakpoint::Narrow.columns(), 1);
        assert_eq!(Breakpoint::Medium.columns(), 2);
        assert_eq!(Breakpoint::Wide.columns(), 3);
    }

    #[test]
    fn tiles_fill_content_width() {
        let metrics = GridMetrics::for_width(1100.0);
        assert_eq!(metrics.columns, 3);
        let used = metrics.tile_side * 3.0 + metrics.gap * 2.0;
        assert_abs_diff_eq!(used, metrics.content_width, epsilon = 1e-3);
    }

    #[test]
    fn content_width_is_capped() {
        let metrics = GridMetrics::for_width(2560.0);
        assert_abs_diff_eq!(
            metrics.content_width,
            layout_bounds::CONTENT_MAX_WIDTH,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn tiny_window_keeps_minimum_tile() {
        let metrics = GridMetrics::for_width(10.0);
        assert_eq!(metrics.columns, 1);
        assert_abs_diff_eq!(metrics.tile_side, layout_bounds::MIN_TILE_SIDE);
    }

    #[test]
    fn rows_round_up() {
        let metrics = GridMetrics::for_width(1100.0);
        assert_eq!(metrics.rows_for(0), 0);
        assert_eq!(metrics.rows_for(2), 1);
        assert_eq!(metrics.rows_for(4), 2);
    }
}
