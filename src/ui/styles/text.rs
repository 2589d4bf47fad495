// SPDX-License-Identifier: MPL-2.0
//! Text styles.

use iced::widget::text;
use iced::{Color, Theme};

/// Text in a fixed color, independent of the Iced theme.
pub fn tinted(color: Color) -> impl Fn(&Theme) -> text::Style {
    move |_theme: &Theme| text::Style { color: Some(color) }
}
