// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module handles routing of native events (keyboard, mouse wheel)
//! to the appropriate screen components based on the current application
//! state, plus the slideshow auto-advance timer.

use super::{Message, Screen};
use crate::ui::home;
use crate::ui::project;
use iced::keyboard;
use iced::keyboard::key::Named;
use iced::mouse;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the appropriate event subscription based on the current screen.
///
/// - Home: arrow keys step the slideshow, Escape closes panels.
/// - Project: arrow keys and the mouse wheel page the gallery, Escape
///   closes panels first and then the gallery itself.
///
/// Events are only routed when no widget captured them, so typing or
/// scrolling inside an open panel never drives the slide cursor.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Home => event::listen_with(|event, status, _window_id| {
            if let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = &event {
                return match status {
                    event::Status::Ignored => map_home_key(key),
                    event::Status::Captured => None,
                };
            }
            None
        }),
        Screen::Project => event::listen_with(|event, status, _window_id| {
            if let event::Event::Mouse(mouse::Event::WheelScrolled { delta }) = &event {
                return match status {
                    event::Status::Ignored => map_wheel(*delta),
                    event::Status::Captured => None,
                };
            }
            if let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = &event {
                return match status {
                    event::Status::Ignored => map_project_key(key),
                    event::Status::Captured => None,
                };
            }
            None
        }),
    }
}

/// Creates the slideshow auto-advance subscription.
///
/// The timer only exists on the home screen while autoplay is enabled;
/// on the project screen the subscription is dropped, so no ticks fire
/// there and the timer restarts fresh when the home screen returns.
pub fn create_tick_subscription(
    screen: Screen,
    autoplay: bool,
    interval: Duration,
) -> Subscription<Message> {
    if screen == Screen::Home && autoplay {
        time::every(interval).map(Message::SlideshowTick)
    } else {
        Subscription::none()
    }
}

fn map_home_key(key: &keyboard::Key) -> Option<Message> {
    match key {
        keyboard::Key::Named(Named::ArrowRight) => {
            Some(Message::Home(home::Message::NextRequested))
        }
        keyboard::Key::Named(Named::ArrowLeft) => {
            Some(Message::Home(home::Message::PreviousRequested))
        }
        keyboard::Key::Named(Named::Escape) => Some(Message::EscapePressed),
        _ => None,
    }
}

fn map_project_key(key: &keyboard::Key) -> Option<Message> {
    match key {
        keyboard::Key::Named(Named::ArrowRight) => {
            Some(Message::Project(project::Message::NextRequested))
        }
        keyboard::Key::Named(Named::ArrowLeft) => {
            Some(Message::Project(project::Message::PreviousRequested))
        }
        keyboard::Key::Named(Named::Escape) => Some(Message::EscapePressed),
        _ => None,
    }
}

/// Maps a wheel movement to a gallery paging message.
///
/// Scrolling down reads as "show me the next image", but pointing down
/// is negative `y` in iced, so the sign is flipped before it reaches
/// the navigator.
fn map_wheel(delta: mouse::ScrollDelta) -> Option<Message> {
    let y = match delta {
        mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => y,
    };
    (y != 0.0).then(|| Message::Project(project::Message::WheelScrolled(-y)))
}
