// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::lightbox;
use crate::ui::mobile_menu;
use crate::ui::navbar;
use crate::ui::photo_grid;
use iced::Size;

/// Top-level messages consumed by `App::update`. The variants forward
/// region messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    MobileMenu(mobile_menu::Message),
    Grid(photo_grid::Message),
    Lightbox(lightbox::Message),
    /// The window was opened or resized to this logical size.
    WindowResized(Size),
}

/// Runtime flags passed from `main.rs` to the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override (`--lang`).
    pub lang: Option<String>,
    /// Optional configuration directory override (`--config-dir`).
    pub config_dir: Option<String>,
}
