// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Each region message maps onto one [`ViewState`] transition. None of them
//! start background work, so every handler returns `Task::none()`.

use super::view_state::ViewState;
use super::Message;
use crate::ui::lightbox;
use crate::ui::mobile_menu;
use crate::ui::navbar;
use crate::ui::photo_grid;
use iced::{Size, Task};

/// Mutable application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub state: &'a mut ViewState,
    pub window_width: &'a mut f32,
}

/// Dispatches a top-level message.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(message) => handle_navbar_message(ctx, message),
        Message::MobileMenu(message) => handle_mobile_menu_message(ctx, message),
        Message::Grid(message) => handle_grid_message(ctx, message),
        Message::Lightbox(message) => handle_lightbox_message(ctx, message),
        Message::WindowResized(size) => handle_window_resized(ctx, size),
    }
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match message {
        navbar::Message::SelectCategory(category) => ctx.state.select_category(category),
        navbar::Message::ToggleDarkMode => ctx.state.toggle_dark_mode(),
        navbar::Message::ToggleMenu => ctx.state.toggle_menu(),
    }
    Task::none()
}

pub fn handle_mobile_menu_message(
    ctx: &mut UpdateContext<'_>,
    message: mobile_menu::Message,
) -> Task<Message> {
    match message {
        mobile_menu::Message::SelectCategory(category) => ctx.state.select_category(category),
    }
    Task::none()
}

pub fn handle_grid_message(
    ctx: &mut UpdateContext<'_>,
    message: photo_grid::Message,
) -> Task<Message> {
    match message {
        photo_grid::Message::PhotoSelected(id) => {
            ctx.state.select_photo(id);
        }
    }
    Task::none()
}

pub fn handle_lightbox_message(
    ctx: &mut UpdateContext<'_>,
    message: lightbox::Message,
) -> Task<Message> {
    match message {
        lightbox::Message::Close => ctx.state.close_lightbox(),
    }
    Task::none()
}

/// Tracks the window width used for breakpoints and grid metrics.
fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    if (*ctx.window_width - size.width).abs() > f32::EPSILON {
        tracing::trace!(width = size.width, "window width changed");
        *ctx.window_width = size.width;
    }
    Task::none()
}
