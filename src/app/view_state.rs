// SPDX-License-Identifier: MPL-2.0
//! The portfolio's view state and its transitions.
//!
//! This is the only mutable state of the application. Every user intent maps
//! to exactly one method here, and each method completes the whole transition
//! before returning, so a render never observes a half-applied change.

use crate::domain::portfolio::{filter_by_category, photo_by_id, Category, Photo, PhotoId, PHOTOS};

/// Lightbox state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(&'static Photo),
}

impl Lightbox {
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Lightbox::Open(_))
    }
}

/// View state owned by the application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    active_category: Category,
    is_dark_mode: bool,
    is_menu_open: bool,
    lightbox: Lightbox,
}

impl ViewState {
    /// Initial state: first category, light mode, menu closed, lightbox closed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active_category: Category::first(),
            is_dark_mode: false,
            is_menu_open: false,
            lightbox: Lightbox::Closed,
        }
    }

    #[must_use]
    pub fn active_category(&self) -> Category {
        self.active_category
    }

    #[must_use]
    pub fn is_dark_mode(&self) -> bool {
        self.is_dark_mode
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.is_menu_open
    }

    #[must_use]
    pub fn lightbox(&self) -> Lightbox {
        self.lightbox
    }

    /// Photo shown in the lightbox, if open.
    #[must_use]
    pub fn selected_photo(&self) -> Option<&'static Photo> {
        match self.lightbox {
            Lightbox::Open(photo) => Some(photo),
            Lightbox::Closed => None,
        }
    }

    /// Photos of the active category, in catalog order.
    pub fn visible_photos(&self) -> impl Iterator<Item = &'static Photo> {
        filter_by_category(&PHOTOS, self.active_category)
    }

    /// Switches the filter and closes the mobile menu in one step.
    pub fn select_category(&mut self, category: Category) {
        self.active_category = category;
        self.is_menu_open = false;
        tracing::debug!(%category, menu_open = false, "category selected");
    }

    pub fn toggle_dark_mode(&mut self) {
        self.is_dark_mode = !self.is_dark_mode;
        tracing::debug!(dark_mode = self.is_dark_mode, "dark mode toggled");
    }

    /// Flips the mobile menu. The active category is left untouched.
    pub fn toggle_menu(&mut self) {
        self.is_menu_open = !self.is_menu_open;
        tracing::debug!(menu_open = self.is_menu_open, "menu toggled");
    }

    /// Opens the lightbox on `id`.
    ///
    /// Only valid from `Closed`; returns `false` and leaves the state unchanged
    /// when the lightbox is already open or the id is not in the catalog.
    pub fn select_photo(&mut self, id: PhotoId) -> bool {
        if let Lightbox::Open(current) = self.lightbox {
            tracing::debug!(
                photo_id = %id,
                open_photo_id = %current.id,
                "photo selection ignored while lightbox is open"
            );
            return false;
        }

        match photo_by_id(id) {
            Some(photo) => {
                self.lightbox = Lightbox::Open(photo);
                tracing::debug!(photo_id = %id, "lightbox opened");
                true
            }
            None => {
                tracing::warn!(photo_id = %id, "unknown photo id");
                false
            }
        }
    }

    pub fn close_lightbox(&mut self) {
        if let Lightbox::Open(photo) = self.lightbox {
            tracing::debug!(photo_id = %photo.id, "lightbox closed");
        }
        self.lightbox = Lightbox::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theming::{StyleTokens, ThemeMode};

    #[test]
    fn initial_state_matches_defaults() {
        let state = ViewState::new();
        assert_eq!(state.active_category(), Category::Home);
        assert!(!state.is_dark_mode());
        assert!(!state.is_menu_open());
        assert_eq!(state.lightbox(), Lightbox::Closed);
        assert_eq!(state, ViewState::default());
    }

    #[test]
    fn selecting_category_closes_menu_atomically() {
        let mut state = ViewState::new();
        state.toggle_menu();
        assert!(state.is_menu_open());

        state.select_category(Category::Tokyo);

        assert_eq!(state.active_category(), Category::Tokyo);
        assert!(!state.is_menu_open());
    }

    #[test]
    fn toggling_menu_keeps_category() {
        let mut state = ViewState::new();
        state.select_category(Category::Food);

        state.toggle_menu();
        assert_eq!(state.active_category(), Category::Food);
        state.toggle_menu();
        assert_eq!(state.active_category(), Category::Food);
        assert!(!state.is_menu_open());
    }

    #[test]
    fn double_dark_mode_toggle_restores_tokens() {
        let mut state = ViewState::new();
        let before = StyleTokens::for_mode(ThemeMode::from_dark_flag(state.is_dark_mode()));

        state.toggle_dark_mode();
        let during = StyleTokens::for_mode(ThemeMode::from_dark_flag(state.is_dark_mode()));
        state.toggle_dark_mode();
        let after = StyleTokens::for_mode(ThemeMode::from_dark_flag(state.is_dark_mode()));

        assert_ne!(before, during);
        assert_eq!(before, after);
    }

    #[test]
    fn lightbox_opens_and_closes_for_every_photo() {
        for photo in &PHOTOS {
            let mut state = ViewState::new();
            assert!(state.select_photo(photo.id));
            assert!(std::ptr::eq(state.selected_photo().unwrap(), photo));

            state.close_lightbox();
            assert_eq!(state.lightbox(), Lightbox::Closed);
        }
    }

    #[test]
    fn selecting_while_open_is_ignored() {
        let mut state = ViewState::new();
        assert!(state.select_photo(PhotoId::new(1)));
        assert!(!state.select_photo(PhotoId::new(2)));
        assert_eq!(state.selected_photo().map(|p| p.id), Some(PhotoId::new(1)));
    }

    #[test]
    fn unknown_photo_keeps_lightbox_closed() {
        let mut state = ViewState::new();
        assert!(!state.select_photo(PhotoId::new(999)));
        assert!(!state.lightbox().is_open());
    }

    #[test]
    fn closing_a_closed_lightbox_is_a_no_op() {
        let mut state = ViewState::new();
        state.close_lightbox();
        assert_eq!(state, ViewState::new());
    }

    #[test]
    fn visible_photos_follow_active_category() {
        let mut state = ViewState::new();
        state.select_category(Category::Tokyo);
        let titles: Vec<_> = state.visible_photos().map(|p| p.title).collect();
        assert_eq!(titles, ["City Lights", "Street Scene"]);
    }
}
