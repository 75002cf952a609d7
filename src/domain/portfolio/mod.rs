// SPDX-License-Identifier: MPL-2.0
//! Portfolio domain types: categories, the static photo catalog, and image
//! locators.

pub mod category;
pub mod photo;
pub mod placeholder;

// Re-export commonly used types
pub use category::Category;
pub use photo::{filter_by_category, photo_by_id, Photo, PhotoId, PHOTOS};
pub use placeholder::ImageSize;
