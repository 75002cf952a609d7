// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translation files are embedded at compile time from `assets/i18n/`.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Region fallback (`fr-CA` resolves to the bundled `fr`)
//! - Fallback to `en-US` when no bundled locale matches

pub mod fluent;
