// SPDX-License-Identifier: MPL-2.0
//! Sliding overlay panels: contact, about, and about-project.
//!
//! Each panel covers half the window and floats above the screen content;
//! the contact panel docks to the left edge, the other two to the right.
//! Which panels are open is tracked by [`OverlayState`] in the application
//! state; this module only renders and closes them.

use crate::catalog::Project;
use crate::i18n::fluent::I18n;
use crate::overlay::{OverlayState, Panel};
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::alignment::Vertical;
use iced::widget::{button, scrollable, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Contextual data needed to render an overlay panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a AppTheme,
    /// Project described by the about-project panel.
    pub project: &'static Project,
}

/// Messages emitted by the overlay panels.
#[derive(Debug, Clone)]
pub enum Message {
    /// The close glyph of the given panel was clicked.
    Closed(Panel),
}

/// Process a panel message.
pub fn update(message: Message, overlays: &mut OverlayState) {
    match message {
        Message::Closed(panel) => overlays.close(panel),
    }
}

/// Render one open panel as a full-window layer.
pub fn view<'a>(ctx: ViewContext<'a>, panel: Panel) -> Element<'a, Message> {
    let content = match panel {
        Panel::Contact => build_contact(&ctx),
        Panel::About => build_about(&ctx),
        Panel::AboutProject => build_about_project(&ctx),
    };

    let colors = &ctx.theme.colors;

    let close = button(
        Text::new("\u{d7}")
            .size(typography::TITLE_LG)
            .font(typography::FONT),
    )
    .padding(0)
    .style(styles::button::link(colors.text_primary, opacity::HOVER))
    .on_press(Message::Closed(panel));

    let body = Column::new()
        .push(Row::new().push(Space::new().width(Length::Fill)).push(close))
        .push(scrollable(content).height(Length::Fill))
        .spacing(spacing::LG);

    let sheet = Container::new(body)
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .padding(spacing::XL)
        .style(styles::container::panel(colors.surface_primary));

    let spacer = Space::new()
        .width(Length::FillPortion(1))
        .height(Length::Fill);

    // The contact panel docks left, the other two dock right.
    let layer = match panel {
        Panel::Contact => Row::new().push(sheet).push(spacer),
        Panel::About | Panel::AboutProject => Row::new().push(spacer).push(sheet),
    };

    layer.width(Length::Fill).height(Length::Fill).into()
}

fn build_contact<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = &ctx.theme.colors;

    let mut column = Column::new()
        .push(
            Text::new(ctx.i18n.tr("contact-title"))
                .size(typography::TITLE_LG)
                .font(typography::FONT)
                .style(styles::text::tinted(colors.text_primary)),
        )
        .push(
            Text::new(ctx.i18n.tr("contact-intro"))
                .size(typography::BODY)
                .font(typography::FONT)
                .style(styles::text::tinted(colors.text_secondary)),
        )
        .spacing(spacing::LG);

    for (label_key, value_key) in [
        ("contact-address-label", "contact-address"),
        ("contact-phone-label", "contact-phone"),
        ("contact-email-label", "contact-email"),
    ] {
        column = column.push(
            Column::new()
                .push(
                    Text::new(ctx.i18n.tr(label_key))
                        .size(typography::BODY_SM)
                        .font(typography::FONT)
                        .style(styles::text::tinted(colors.text_label)),
                )
                .push(
                    Text::new(ctx.i18n.tr(value_key))
                        .size(typography::BODY)
                        .font(typography::FONT)
                        .style(styles::text::tinted(colors.text_secondary)),
                )
                .spacing(spacing::XXS),
        );
    }

    column.into()
}

fn build_about<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = &ctx.theme.colors;

    Column::new()
        .push(
            Text::new(ctx.i18n.tr("about-title"))
                .size(typography::TITLE_LG)
                .font(typography::FONT)
                .style(styles::text::tinted(colors.text_primary)),
        )
        .push(
            Text::new(ctx.i18n.tr("about-lead"))
                .size(typography::BODY_LG)
                .font(typography::FONT)
                .style(styles::text::tinted(colors.text_tertiary)),
        )
        .push(
            Text::new(ctx.i18n.tr("about-body"))
                .size(typography::BODY)
                .font(typography::FONT)
                .style(styles::text::tinted(colors.text_secondary)),
        )
        .spacing(spacing::LG)
        .into()
}

fn build_about_project<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = &ctx.theme.colors;
    let project = ctx.project;

    let mut column = Column::new()
        .push(
            Text::new(project.name)
                .size(typography::TITLE_LG)
                .font(typography::FONT)
                .style(styles::text::tinted(colors.text_primary)),
        )
        .push(
            Text::new(project.location)
                .size(typography::BODY)
                .font(typography::FONT)
                .style(styles::text::tinted(colors.text_tertiary)),
        )
        .push(
            Text::new(project.description)
                .size(typography::BODY_LG)
                .font(typography::FONT)
                .style(styles::text::tinted(colors.text_secondary)),
        )
        .push(build_hairline(colors.separator))
        .spacing(spacing::LG);

    for (label_key, value) in [
        ("detail-year", project.details.year),
        ("detail-area", project.details.area),
        ("detail-type", project.details.kind),
    ] {
        column = column
            .push(
                Row::new()
                    .push(
                        Text::new(ctx.i18n.tr(label_key))
                            .size(typography::BODY)
                            .font(typography::FONT)
                            .style(styles::text::tinted(colors.text_label)),
                    )
                    .push(Space::new().width(Length::Fill))
                    .push(
                        Text::new(value)
                            .size(typography::BODY_LG)
                            .font(typography::FONT)
                            .style(styles::text::tinted(colors.text_secondary)),
                    )
                    .align_y(Vertical::Center),
            )
            .push(build_hairline(colors.separator_soft));
    }

    column.into()
}

/// A full-width 1px separator line.
fn build_hairline<'a>(color: iced::Color) -> Element<'a, Message> {
    Container::new(Space::new().width(Length::Fill).height(sizing::HAIRLINE))
        .width(Length::Fill)
        .style(styles::container::hairline(color))
        .into()
}
