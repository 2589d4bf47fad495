// SPDX-License-Identifier: MPL-2.0
//! Project gallery screen.
//!
//! Shows one image of the active project at a time between a wordmark
//! header and a caption footer. Invisible click zones along the left and
//! right edges page through the gallery; the zone on the side the current
//! image entered from keeps a faint resting tint as a direction cue.

use crate::catalog::Project;
use crate::i18n::fluent::I18n;
use crate::navigation::{Direction, SlideNavigator};
use crate::ui::components::media_frame;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Row, Space, Stack, Text};
use iced::{ContentFit, Element, Length};
use std::path::Path;

/// Contextual data needed to render the project gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a AppTheme,
    pub project: &'static Project,
    pub navigator: &'a SlideNavigator,
    pub assets_dir: &'a Path,
}

/// Messages emitted by the project gallery.
#[derive(Debug, Clone)]
pub enum Message {
    /// The left edge zone was clicked (or the left arrow key pressed).
    PreviousRequested,
    /// The right edge zone was clicked (or the right arrow key pressed).
    NextRequested,
    /// Mouse wheel movement, positive toward the next image.
    WheelScrolled(f32),
    /// The wordmark or the close glyph was clicked.
    CloseRequested,
    AboutProjectOpened,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    CloseProject,
    OpenAboutProject,
}

/// Process a gallery message and return the corresponding event.
pub fn update(message: Message, navigator: &mut SlideNavigator) -> Event {
    match message {
        Message::PreviousRequested => {
            navigator.retreat();
            Event::None
        }
        Message::NextRequested => {
            navigator.advance();
            Event::None
        }
        Message::WheelScrolled(delta) => {
            navigator.on_wheel(delta);
            Event::None
        }
        Message::CloseRequested => Event::CloseProject,
        Message::AboutProjectOpened => Event::OpenAboutProject,
    }
}

/// Render the project gallery.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .push(build_header(&ctx))
        .push(build_gallery(&ctx))
        .push(build_footer(&ctx))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Build the header row: wordmark on the left, close glyph on the right.
///
/// Both lead back to the home screen, mirroring the wordmark link on the
/// home screen itself.
fn build_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = &ctx.theme.colors;

    let wordmark = button(
        Text::new(ctx.i18n.tr("app-title"))
            .size(typography::TITLE_MD)
            .font(typography::FONT),
    )
    .padding(0)
    .style(styles::button::link(colors.text_primary, opacity::HOVER))
    .on_press(Message::CloseRequested);

    let close = button(
        Text::new("\u{d7}")
            .size(typography::TITLE_LG)
            .font(typography::FONT),
    )
    .padding(0)
    .style(styles::button::link(colors.text_primary, opacity::HOVER))
    .on_press(Message::CloseRequested);

    Row::new()
        .push(wordmark)
        .push(Space::new().width(Length::Fill))
        .push(close)
        .align_y(Vertical::Center)
        .padding(spacing::LG)
        .into()
}

/// Build the central area: the current image with its counter, overlaid
/// with the paging zones along both edges.
fn build_gallery<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = &ctx.theme.colors;
    let image_path = ctx.project.images[ctx.navigator.current_index()];

    let frame = Container::new(media_frame::view(
        ctx.assets_dir,
        image_path,
        ctx.i18n.tr("placeholder-missing-image"),
        colors,
        ContentFit::Contain,
    ))
    .max_width(sizing::CONTENT_MAX_WIDTH)
    .width(Length::Fill)
    .height(Length::Fill);

    let counter = Text::new(ctx.navigator.counter_label())
        .size(typography::BODY_SM)
        .font(typography::FONT)
        .style(styles::text::tinted(colors.text_tertiary));

    let centered = Container::new(
        Column::new()
            .push(frame)
            .push(counter)
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .padding([0.0, spacing::LG]);

    let direction = ctx.navigator.last_direction();
    let zones = Row::new()
        .push(build_edge_zone(
            ctx,
            Message::PreviousRequested,
            direction == Direction::Left,
        ))
        .push(
            Space::new()
                .width(Length::FillPortion(3))
                .height(Length::Fill),
        )
        .push(build_edge_zone(
            ctx,
            Message::NextRequested,
            direction == Direction::Right,
        ))
        .width(Length::Fill)
        .height(Length::Fill);

    Stack::new()
        .push(centered)
        .push(zones)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Build one invisible paging zone covering a fifth of the window width.
fn build_edge_zone<'a>(
    ctx: &ViewContext<'a>,
    message: Message,
    resting: bool,
) -> Element<'a, Message> {
    let colors = &ctx.theme.colors;

    button(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .padding(0)
        .style(styles::button::edge_zone(colors.surface_edge_hover, resting))
        .on_press(message)
        .into()
}

/// Build the footer row: project caption on the left, the about-project
/// link on the right.
fn build_footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = &ctx.theme.colors;

    let caption = Column::new()
        .push(
            Text::new(ctx.project.name)
                .size(typography::TITLE_MD)
                .font(typography::FONT)
                .style(styles::text::tinted(colors.text_primary)),
        )
        .push(
            Text::new(ctx.project.location)
                .size(typography::BODY)
                .font(typography::FONT)
                .style(styles::text::tinted(colors.text_tertiary)),
        )
        .spacing(spacing::XXS);

    let about = button(
        Text::new(ctx.i18n.tr("gallery-about-project"))
            .size(typography::BODY)
            .font(typography::FONT),
    )
    .padding(0)
    .style(styles::button::link(colors.text_primary, opacity::DIMMED))
    .on_press(Message::AboutProjectOpened);

    Row::new()
        .push(caption)
        .push(Space::new().width(Length::Fill))
        .push(about)
        .align_y(Vertical::Center)
        .padding(spacing::LG)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::ui::theming::ThemeMode;

    fn test_ctx<'a>(
        i18n: &'a I18n,
        theme: &'a AppTheme,
        navigator: &'a SlideNavigator,
    ) -> ViewContext<'a> {
        ViewContext {
            i18n,
            theme,
            project: catalog::default_project(),
            navigator,
            assets_dir: Path::new("assets"),
        }
    }

    #[test]
    fn project_view_renders() {
        let i18n = I18n::default();
        let theme = AppTheme::new(ThemeMode::Light);
        let navigator = SlideNavigator::new(catalog::default_project().images.len());
        let _element = view(test_ctx(&i18n, &theme, &navigator));
    }

    #[test]
    fn project_view_renders_for_every_catalog_entry() {
        let i18n = I18n::default();
        let theme = AppTheme::new(ThemeMode::Light);
        for project in catalog::projects() {
            let navigator = SlideNavigator::new(project.images.len());
            let ctx = ViewContext {
                i18n: &i18n,
                theme: &theme,
                project,
                navigator: &navigator,
                assets_dir: Path::new("assets"),
            };
            let _element = view(ctx);
        }
    }

    #[test]
    fn edge_clicks_page_through_the_gallery() {
        let mut navigator = SlideNavigator::new(5);
        let _ = update(Message::NextRequested, &mut navigator);
        assert_eq!(navigator.current_index(), 1);
        let _ = update(Message::PreviousRequested, &mut navigator);
        assert_eq!(navigator.current_index(), 0);
    }

    #[test]
    fn wheel_pages_by_sign() {
        let mut navigator = SlideNavigator::new(5);
        let _ = update(Message::WheelScrolled(1.0), &mut navigator);
        assert_eq!(navigator.current_index(), 1);
        let _ = update(Message::WheelScrolled(-3.5), &mut navigator);
        assert_eq!(navigator.current_index(), 0);
        // A zero delta is not a transition.
        let _ = update(Message::WheelScrolled(0.0), &mut navigator);
        assert_eq!(navigator.current_index(), 0);
    }

    #[test]
    fn close_and_about_emit_routing_events() {
        let mut navigator = SlideNavigator::new(5);
        navigator.go_to(3);
        assert!(matches!(
            update(Message::CloseRequested, &mut navigator),
            Event::CloseProject
        ));
        assert!(matches!(
            update(Message::AboutProjectOpened, &mut navigator),
            Event::OpenAboutProject
        ));
        // Routing events leave the cursor where it was.
        assert_eq!(navigator.current_index(), 3);
    }
}
