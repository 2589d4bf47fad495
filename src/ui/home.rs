// SPDX-License-Identifier: MPL-2.0
//! Home screen with the auto-advancing project slideshow.
//!
//! A full-window photograph sits under a dark scrim; the studio wordmark,
//! the contact/about links, the current slide's caption block, and the
//! indicator dots float above it. The slideshow cursor itself lives in the
//! application state and is only read here.

use crate::catalog::{self, MediaItem};
use crate::i18n::fluent::I18n;
use crate::navigation::SlideNavigator;
use crate::ui::components::media_frame;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Row, Space, Stack, Text};
use iced::{ContentFit, Element, Length};
use std::path::Path;

/// Contextual data needed to render the home screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a AppTheme,
    pub navigator: &'a SlideNavigator,
    pub assets_dir: &'a Path,
}

/// Messages emitted by the home screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// An indicator dot was clicked.
    SlideSelected(usize),
    /// Advance one slide (keyboard).
    NextRequested,
    /// Go back one slide (keyboard).
    PreviousRequested,
    /// The current slide's title was clicked.
    ProjectOpened(&'static str),
    ContactOpened,
    AboutOpened,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenProject(&'static str),
    OpenContact,
    OpenAbout,
}

/// Process a home screen message and return the corresponding event.
pub fn update(message: Message, navigator: &mut SlideNavigator) -> Event {
    match message {
        Message::SlideSelected(index) => {
            navigator.go_to(index);
            Event::None
        }
        Message::NextRequested => {
            navigator.advance();
            Event::None
        }
        Message::PreviousRequested => {
            navigator.retreat();
            Event::None
        }
        Message::ProjectOpened(slug) => Event::OpenProject(slug),
        Message::ContactOpened => Event::OpenContact,
        Message::AboutOpened => Event::OpenAbout,
    }
}

/// Render the home screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let colors = &ctx.theme.colors;
    let slides = catalog::home_slides();
    let slide = &slides[ctx.navigator.current_index()];

    let background = media_frame::view(
        ctx.assets_dir,
        slide.image_path,
        ctx.i18n.tr("placeholder-missing-image"),
        colors,
        ContentFit::Cover,
    );

    let scrim = Container::new(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::scrim(colors.surface_scrim));

    Stack::new()
        .push(background)
        .push(scrim)
        .push(build_header(&ctx))
        .push(build_contact_link(&ctx))
        .push(build_about_link(&ctx))
        .push(build_slide_info(&ctx, slide))
        .push(build_indicators(&ctx, slides.len()))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Build the studio wordmark in the top-left corner.
fn build_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = &ctx.theme.colors;

    let logo = Text::new(ctx.i18n.tr("app-title"))
        .size(typography::TITLE_LG)
        .font(typography::FONT)
        .style(styles::text::tinted(colors.overlay_text));

    Container::new(logo)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Left)
        .align_y(Vertical::Top)
        .padding(spacing::XL)
        .into()
}

/// Build the contact link anchored to the left edge.
fn build_contact_link<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = &ctx.theme.colors;

    let link = button(
        Text::new(ctx.i18n.tr("nav-contact"))
            .size(typography::BODY)
            .font(typography::FONT),
    )
    .padding(0)
    .style(styles::button::link(colors.overlay_text, opacity::HOVER))
    .on_press(Message::ContactOpened);

    Container::new(link)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Left)
        .align_y(Vertical::Center)
        .padding(spacing::XL)
        .into()
}

/// Build the about link anchored to the right edge.
fn build_about_link<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = &ctx.theme.colors;

    let link = button(
        Text::new(ctx.i18n.tr("nav-about"))
            .size(typography::BODY)
            .font(typography::FONT),
    )
    .padding(0)
    .style(styles::button::link(colors.overlay_text, opacity::HOVER))
    .on_press(Message::AboutOpened);

    Container::new(link)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Center)
        .padding(spacing::XL)
        .into()
}

/// Build the centered caption block for the current slide.
fn build_slide_info<'a>(ctx: &ViewContext<'a>, slide: &'static MediaItem) -> Element<'a, Message> {
    let colors = &ctx.theme.colors;

    let ordinal = Text::new(slide.ordinal_label)
        .size(typography::CAPTION)
        .font(typography::FONT)
        .style(styles::text::tinted(colors.overlay_text_soft));

    let title_text = Text::new(slide.display_name)
        .size(typography::DISPLAY)
        .font(typography::FONT);

    // The title doubles as the entry to the project gallery.
    let title: Element<'a, Message> = match slide.route_slug {
        Some(slug) => button(title_text)
            .padding(0)
            .style(styles::button::link(colors.overlay_text, opacity::HOVER))
            .on_press(Message::ProjectOpened(slug))
            .into(),
        None => title_text
            .style(styles::text::tinted(colors.overlay_text))
            .into(),
    };

    let location = Text::new(slide.location_label)
        .size(typography::BODY)
        .font(typography::FONT)
        .style(styles::text::tinted(colors.overlay_text_soft));

    let info = Column::new()
        .spacing(spacing::XS)
        .max_width(sizing::HOME_INFO_MAX_WIDTH)
        .push(ordinal)
        .push(title)
        .push(location);

    Container::new(info)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// Build the row of indicator dots along the bottom edge.
fn build_indicators<'a>(ctx: &ViewContext<'a>, count: usize) -> Element<'a, Message> {
    let colors = &ctx.theme.colors;
    let current = ctx.navigator.current_index();

    let mut dots = Row::new().spacing(spacing::SM);
    for index in 0..count {
        dots = dots.push(
            button(
                Space::new()
                    .width(sizing::INDICATOR_DOT)
                    .height(sizing::INDICATOR_DOT),
            )
            .padding(0)
            .style(styles::button::indicator(
                colors.overlay_text,
                index == current,
            ))
            .on_press(Message::SlideSelected(index)),
        );
    }

    Container::new(dots)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .padding(spacing::XL)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theming::ThemeMode;

    fn test_theme() -> AppTheme {
        AppTheme::new(ThemeMode::Light)
    }

    #[test]
    fn home_view_renders() {
        let i18n = I18n::default();
        let theme = test_theme();
        let navigator = SlideNavigator::new(catalog::home_slides().len());
        let ctx = ViewContext {
            i18n: &i18n,
            theme: &theme,
            navigator: &navigator,
            assets_dir: Path::new("assets"),
        };
        let _element = view(ctx);
    }

    #[test]
    fn home_view_renders_every_slide() {
        let i18n = I18n::default();
        let theme = test_theme();
        let count = catalog::home_slides().len();
        for index in 0..count {
            let mut navigator = SlideNavigator::new(count);
            navigator.go_to(index);
            let ctx = ViewContext {
                i18n: &i18n,
                theme: &theme,
                navigator: &navigator,
                assets_dir: Path::new("assets"),
            };
            let _element = view(ctx);
        }
    }

    #[test]
    fn selecting_a_slide_moves_the_cursor() {
        let mut navigator = SlideNavigator::new(4);
        let event = update(Message::SlideSelected(2), &mut navigator);
        assert_eq!(navigator.current_index(), 2);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn keyboard_navigation_wraps() {
        let mut navigator = SlideNavigator::new(4);
        let _ = update(Message::PreviousRequested, &mut navigator);
        assert_eq!(navigator.current_index(), 3);
        let _ = update(Message::NextRequested, &mut navigator);
        assert_eq!(navigator.current_index(), 0);
    }

    #[test]
    fn opening_a_project_emits_its_slug() {
        let mut navigator = SlideNavigator::new(4);
        let event = update(Message::ProjectOpened("haus-m"), &mut navigator);
        assert!(matches!(event, Event::OpenProject("haus-m")));
        // Navigation state is untouched by routing events.
        assert_eq!(navigator.current_index(), 0);
    }

    #[test]
    fn panel_links_emit_open_events() {
        let mut navigator = SlideNavigator::new(4);
        assert!(matches!(
            update(Message::ContactOpened, &mut navigator),
            Event::OpenContact
        ));
        assert!(matches!(
            update(Message::AboutOpened, &mut navigator),
            Event::OpenAbout
        ));
    }
}
