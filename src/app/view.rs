// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current
//! screen based on application state, with any open overlay panels
//! stacked above it.

use super::{Message, Screen};
use crate::catalog;
use crate::i18n::fluent::I18n;
use crate::navigation::SlideNavigator;
use crate::overlay::{OverlayState, Panel};
use crate::ui::home;
use crate::ui::panels;
use crate::ui::project;
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::widget::{Container, Stack};
use iced::{Element, Length};
use std::path::Path;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a AppTheme,
    pub screen: Screen,
    pub home_navigator: &'a SlideNavigator,
    pub gallery_navigator: &'a SlideNavigator,
    pub current_project: &'static catalog::Project,
    pub overlays: &'a OverlayState,
    pub assets_dir: &'a Path,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => view_home(&ctx),
        Screen::Project => view_project(&ctx),
    };

    let page = Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page(ctx.theme.colors.surface_primary));

    let mut layers = Stack::new()
        .push(page)
        .width(Length::Fill)
        .height(Length::Fill);

    for &panel in panels_for(ctx.screen) {
        if ctx.overlays.is_open(panel) {
            layers = layers.push(view_panel(&ctx, panel));
        }
    }

    layers.into()
}

/// Panels that can appear above the given screen, bottom-up.
///
/// The ordering matters when two panels are open at once: contact
/// renders above about, and Escape dismisses in that same order.
fn panels_for(screen: Screen) -> &'static [Panel] {
    match screen {
        Screen::Home => &[Panel::About, Panel::Contact],
        Screen::Project => &[Panel::AboutProject],
    }
}

fn view_home<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    home::view(home::ViewContext {
        i18n: ctx.i18n,
        theme: ctx.theme,
        navigator: ctx.home_navigator,
        assets_dir: ctx.assets_dir,
    })
    .map(Message::Home)
}

fn view_project<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    project::view(project::ViewContext {
        i18n: ctx.i18n,
        theme: ctx.theme,
        project: ctx.current_project,
        navigator: ctx.gallery_navigator,
        assets_dir: ctx.assets_dir,
    })
    .map(Message::Project)
}

fn view_panel<'a>(ctx: &ViewContext<'a>, panel: Panel) -> Element<'a, Message> {
    panels::view(
        panels::ViewContext {
            i18n: ctx.i18n,
            theme: ctx.theme,
            project: ctx.current_project,
        },
        panel,
    )
    .map(Message::Panels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theming::ThemeMode;

    #[test]
    fn home_view_renders_with_open_panels() {
        let i18n = I18n::default();
        let theme = AppTheme::new(ThemeMode::Light);
        let home_navigator = SlideNavigator::new(catalog::home_slides().len());
        let gallery_navigator = SlideNavigator::new(catalog::default_project().images.len());
        let mut overlays = OverlayState::default();
        overlays.open(Panel::Contact);
        overlays.open(Panel::About);

        let _element = view(ViewContext {
            i18n: &i18n,
            theme: &theme,
            screen: Screen::Home,
            home_navigator: &home_navigator,
            gallery_navigator: &gallery_navigator,
            current_project: catalog::default_project(),
            overlays: &overlays,
            assets_dir: Path::new("assets"),
        });
    }

    #[test]
    fn project_view_renders_with_about_panel() {
        let i18n = I18n::default();
        let theme = AppTheme::new(ThemeMode::Light);
        let home_navigator = SlideNavigator::new(catalog::home_slides().len());
        let gallery_navigator = SlideNavigator::new(catalog::default_project().images.len());
        let mut overlays = OverlayState::default();
        overlays.open(Panel::AboutProject);

        let _element = view(ViewContext {
            i18n: &i18n,
            theme: &theme,
            screen: Screen::Project,
            home_navigator: &home_navigator,
            gallery_navigator: &gallery_navigator,
            current_project: catalog::default_project(),
            overlays: &overlays,
            assets_dir: Path::new("assets"),
        });
    }
}
