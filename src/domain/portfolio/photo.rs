// SPDX-License-Identifier: MPL-2.0
//! Static photo catalog and the category filter.

use super::category::Category;
use std::fmt;

/// Unique identifier of a photo in the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhotoId(u32);

impl PhotoId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One portfolio entry. Photos are immutable seed data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: PhotoId,
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
}

/// The portfolio, in display order.
pub static PHOTOS: [Photo; 6] = [
    Photo {
        id: PhotoId::new(1),
        category: Category::Home,
        title: "Time",
        description: "Welcome",
    },
    Photo {
        id: PhotoId::new(2),
        category: Category::Home,
        title: "HOME",
        description: "Sam",
    },
    Photo {
        id: PhotoId::new(3),
        category: Category::Tokyo,
        title: "City Lights",
        description: "Tokyo at night",
    },
    Photo {
        id: PhotoId::new(4),
        category: Category::Tokyo,
        title: "Street Scene",
        description: "Rain-soaked streets of Kyoto",
    },
    Photo {
        id: PhotoId::new(5),
        category: Category::Portrait,
        title: "Me",
        description: "It me",
    },
    Photo {
        id: PhotoId::new(6),
        category: Category::Food,
        title: "El Pueblo",
        description: "The best dollar tacos on Earth",
    },
];

/// Looks up a photo of the static catalog by id.
#[must_use]
pub fn photo_by_id(id: PhotoId) -> Option<&'static Photo> {
    PHOTOS.iter().find(|photo| photo.id == id)
}

/// Returns the photos of `category` from `photos`, preserving their order.
///
/// A category without photos yields an empty iterator.
pub fn filter_by_category<'a>(
    photos: &'a [Photo],
    category: Category,
) -> impl Iterator<Item = &'a Photo> + 'a {
    photos.iter().filter(move |photo| photo.category == category)
}
