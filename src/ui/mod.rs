// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`home`] - Full-window slideshow with the studio wordmark and links
//! - [`project`] - Per-project gallery with edge paging zones
//! - [`panels`] - Sliding contact/about/about-project overlays
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (media frame)
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod home;
pub mod panels;
pub mod project;
pub mod styles;
pub mod theming;
