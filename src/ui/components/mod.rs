// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! # Components
//!
//! - [`media_frame`] - Image frame with a neutral placeholder for missing
//!   files, used by the home slideshow and the project gallery

pub mod media_frame;
