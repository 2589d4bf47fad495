// SPDX-License-Identifier: MPL-2.0
//! Image frame that degrades to a neutral placeholder.
//!
//! Gallery photographs are plain files under the assets directory and may be
//! absent (fresh checkout, misconfigured assets path). Screens must keep a
//! stable layout either way, so this draws the image when the file exists and
//! an empty labeled frame when it does not.

use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{Handle, Image};
use iced::widget::{Container, Text};
use iced::{ContentFit, Element, Length};
use std::path::Path;

use crate::ui::design_tokens::typography;

/// Render the image at `relative_path` under `assets_dir`, or a placeholder
/// frame carrying `missing_label` when the file is not there.
pub fn view<'a, Message: 'a>(
    assets_dir: &Path,
    relative_path: &str,
    missing_label: String,
    scheme: &ColorScheme,
    content_fit: ContentFit,
) -> Element<'a, Message> {
    let path = assets_dir.join(relative_path);

    if path.is_file() {
        Image::new(Handle::from_path(path))
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(content_fit)
            .into()
    } else {
        let label = Text::new(missing_label)
            .size(typography::BODY)
            .font(typography::FONT)
            .style(styles::text::tinted(scheme.text_label));

        Container::new(label)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::placeholder(
                scheme.separator_soft,
                scheme.text_label,
            ))
            .into()
    }
}
