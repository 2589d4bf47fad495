// SPDX-License-Identifier: MPL-2.0
//! Extensible theming system.

use crate::ui::design_tokens::{opacity, palette};
use dark_light;
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_scrim: Color,
    pub surface_edge_hover: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,
    pub text_label: Color,

    // Separators
    pub separator: Color,
    pub separator_soft: Color,

    // Colors over imagery
    pub overlay_text: Color,
    pub overlay_text_soft: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_scrim: Color {
                a: opacity::SCRIM,
                ..palette::BLACK
            },
            surface_edge_hover: Color {
                a: opacity::EDGE_HOVER,
                ..palette::BLACK
            },

            text_primary: palette::BLACK,
            text_secondary: palette::GRAY_800,
            text_tertiary: palette::GRAY_500,
            text_label: palette::GRAY_400,

            separator: palette::GRAY_200,
            separator_soft: palette::GRAY_100,

            overlay_text: palette::WHITE,
            overlay_text_soft: Color {
                a: opacity::SOFT,
                ..palette::WHITE
            },
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: Color::from_rgb(0.07, 0.07, 0.07),
            surface_scrim: Color {
                a: opacity::SCRIM,
                ..palette::BLACK
            },
            surface_edge_hover: Color {
                a: opacity::EDGE_HOVER,
                ..palette::WHITE
            },

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            text_tertiary: palette::GRAY_400,
            text_label: palette::GRAY_500,

            separator: palette::GRAY_800,
            separator_soft: Color::from_rgb(0.13, 0.13, 0.13),

            overlay_text: palette::WHITE,
            overlay_text_soft: Color {
                a: opacity::SOFT,
                ..palette::WHITE
            },
        }
    }

    /// Detects the system theme and returns the appropriate `ColorScheme`.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Dark) = dark_light::detect() {
            Self::dark()
        } else {
            Self::light() // Default to light for Light mode or on error
        }
    }
}

/// Global theme configuration.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to light on detection error
                matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
            }
        }
    }
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        };

        Self { colors, mode }
    }
}
