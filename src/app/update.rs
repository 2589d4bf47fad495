// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers the main
//! `App::update` delegates to. Handlers receive an [`UpdateContext`]
//! with mutable references into the application state.

use super::{Message, Screen};
use crate::catalog;
use crate::navigation::SlideNavigator;
use crate::overlay::{OverlayState, Panel};
use crate::ui::home::{self, Event as HomeEvent};
use crate::ui::panels;
use crate::ui::project::{self, Event as ProjectEvent};
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub home_navigator: &'a mut SlideNavigator,
    pub gallery_navigator: &'a mut SlideNavigator,
    pub current_project: &'a mut &'static catalog::Project,
    pub overlays: &'a mut OverlayState,
}

/// Handles messages from the home screen.
pub fn handle_home_message(ctx: &mut UpdateContext, message: home::Message) -> Task<Message> {
    match home::update(message, ctx.home_navigator) {
        HomeEvent::None => {}
        HomeEvent::OpenProject(slug) => open_project(ctx, slug),
        HomeEvent::OpenContact => ctx.overlays.open(Panel::Contact),
        HomeEvent::OpenAbout => ctx.overlays.open(Panel::About),
    }
    Task::none()
}

/// Handles messages from the project gallery.
pub fn handle_project_message(ctx: &mut UpdateContext, message: project::Message) -> Task<Message> {
    match project::update(message, ctx.gallery_navigator) {
        ProjectEvent::None => {}
        ProjectEvent::CloseProject => close_project(ctx),
        ProjectEvent::OpenAboutProject => ctx.overlays.open(Panel::AboutProject),
    }
    Task::none()
}

/// Handles messages from the overlay panels.
pub fn handle_panels_message(ctx: &mut UpdateContext, message: panels::Message) -> Task<Message> {
    panels::update(message, ctx.overlays);
    Task::none()
}

/// Advances the home slideshow by one slide.
///
/// A tick can already be in flight when the screen switches, so it is
/// ignored unless the home screen is still active.
pub fn handle_slideshow_tick(ctx: &mut UpdateContext) -> Task<Message> {
    if *ctx.screen == Screen::Home {
        ctx.home_navigator.on_timer_tick();
    }
    Task::none()
}

/// Handles Escape: closes the topmost panel, or leaves the gallery when
/// no panel is open.
pub fn handle_escape(ctx: &mut UpdateContext) -> Task<Message> {
    if !ctx.overlays.close_topmost() && *ctx.screen == Screen::Project {
        close_project(ctx);
    }
    Task::none()
}

/// Switches to the gallery of the given project.
///
/// The gallery always starts at the first image and with every panel
/// closed. Unrecognized slugs resolve through the catalog fallback.
pub fn open_project(ctx: &mut UpdateContext, slug: &str) {
    let project = catalog::find(slug);
    *ctx.current_project = project;
    *ctx.gallery_navigator = SlideNavigator::new(project.images.len());
    *ctx.overlays = OverlayState::default();
    *ctx.screen = Screen::Project;
}

/// Returns to the home screen, closing every panel.
///
/// The slideshow restarts from the first slide, the same state a
/// first visit sees.
fn close_project(ctx: &mut UpdateContext) {
    *ctx.home_navigator = SlideNavigator::new(catalog::home_slides().len());
    *ctx.overlays = OverlayState::default();
    *ctx.screen = Screen::Home;
}
