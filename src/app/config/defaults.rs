// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Default delay between automatic slide advances (in seconds).
///
/// Matches the cadence of the practice's website slideshow.
pub const DEFAULT_SLIDESHOW_INTERVAL_SECS: u64 = 5;

/// Minimum configurable slideshow interval (in seconds).
pub const MIN_SLIDESHOW_INTERVAL_SECS: u64 = 1;

/// Maximum configurable slideshow interval (in seconds).
pub const MAX_SLIDESHOW_INTERVAL_SECS: u64 = 60;

/// Whether the home slideshow auto-advances by default.
pub const DEFAULT_SLIDESHOW_AUTOPLAY: bool = true;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Initial window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Smallest window size that still fits the gallery footer.
pub const MIN_WINDOW_WIDTH: f32 = 640.0;

/// Smallest window size that still fits the gallery footer.
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Slideshow interval validation
    assert!(MIN_SLIDESHOW_INTERVAL_SECS > 0);
    assert!(MAX_SLIDESHOW_INTERVAL_SECS >= MIN_SLIDESHOW_INTERVAL_SECS);
    assert!(DEFAULT_SLIDESHOW_INTERVAL_SECS >= MIN_SLIDESHOW_INTERVAL_SECS);
    assert!(DEFAULT_SLIDESHOW_INTERVAL_SECS <= MAX_SLIDESHOW_INTERVAL_SECS);

    // Window size validation
    assert!(MIN_WINDOW_WIDTH > 0.0);
    assert!(MIN_WINDOW_HEIGHT > 0.0);
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
};
