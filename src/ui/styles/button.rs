// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for text-link buttons (navigation, panel actions).
///
/// Transparent background; hovering dims the label to `hover_alpha`.
pub fn link(
    text_color: Color,
    hover_alpha: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = match status {
            button::Status::Hovered | button::Status::Pressed => Color {
                a: hover_alpha,
                ..text_color
            },
            _ => text_color,
        };

        button::Style {
            background: None,
            text_color: color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Style for the invisible edge navigation zones of the gallery.
///
/// `tint` already carries its alpha. A `resting` zone keeps the tint while
/// idle, marking the side the current image entered from.
pub fn edge_zone(tint: Color, resting: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(tint)),
            _ if resting => Some(Background::Color(tint)),
            _ => None,
        };

        button::Style {
            background,
            text_color: Color::TRANSPARENT,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Style for a slide indicator dot.
///
/// Outlined and dimmed while inactive; filled when selected or hovered.
pub fn indicator(
    color: Color,
    selected: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let filled = selected || matches!(status, button::Status::Hovered);

        let (background, border_color) = if filled {
            (Some(Background::Color(color)), color)
        } else {
            (
                None,
                Color {
                    a: opacity::DIMMED,
                    ..color
                },
            )
        };

        button::Style {
            background,
            text_color: Color::TRANSPARENT,
            border: Border {
                color: border_color,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
