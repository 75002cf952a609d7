// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core portfolio logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`portfolio`]: Catalog types ([`Category`](portfolio::Category),
//!   [`Photo`](portfolio::Photo)), the category filter, and image locators
//! - [`ui`]: Responsive layout rules ([`Breakpoint`](ui::Breakpoint),
//!   [`GridMetrics`](ui::GridMetrics))

pub mod portfolio;
pub mod ui;
