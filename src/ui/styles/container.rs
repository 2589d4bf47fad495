// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::shadow;
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Style for the screen background surface.
pub fn page(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Style for the translucent scrim drawn over the home slideshow image.
pub fn scrim(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Style for sliding side panels (contact, about, project info).
pub fn panel(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Style for the placeholder frame shown when an image file is missing.
pub fn placeholder(background: Color, text: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        ..Default::default()
    }
}

/// Style for hairline separators built from a 1px-high container.
pub fn hairline(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_carries_elevation() {
        let theme = Theme::Light;
        let style = panel(Color::WHITE)(&theme);

        assert!(style.shadow.blur_radius > 0.0);
        assert!(matches!(
            style.background,
            Some(Background::Color(c)) if c == Color::WHITE
        ));
    }
}
