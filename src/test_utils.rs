// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Re-exports `approx::assert_abs_diff_eq`, which handles floating-point
//! precision issues that `assert_eq!` cannot. Layout metrics are `f32`.

pub use approx::assert_abs_diff_eq;

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;
