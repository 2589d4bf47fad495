// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is an architecture portfolio viewer built with the Iced GUI
//! framework.
//!
//! It shows a studio's projects as a full-window slideshow with per-project
//! galleries and sliding information panels, and demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod catalog;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod navigation;
pub mod overlay;
pub mod ui;
