// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::home;
use crate::ui::panels;
use crate::ui::project;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Home(home::Message),
    Project(project::Message),
    Panels(panels::Message),
    /// Periodic tick advancing the home slideshow.
    SlideshowTick(Instant),
    /// Escape closes the topmost panel first, then the project gallery.
    EscapePressed,
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
///
/// Directory overrides (`--config-dir`, `--assets-dir`) are applied before
/// the application starts and are not carried here.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `de-DE`, `en-US`).
    pub lang: Option<String>,
    /// Optional project slug to open directly in its gallery.
    pub slug: Option<String>,
}
