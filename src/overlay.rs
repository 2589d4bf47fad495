// SPDX-License-Identifier: MPL-2.0
//! Overlay panel visibility state.
//!
//! Three surfaces can cover the screens: the contact slide-in, the
//! about-the-practice slide-in, and the about-project modal. Their
//! flags are independent booleans. Opening one never closes another;
//! the layered look when two are open is intended behavior, not a
//! missing exclusivity rule.

/// Identifies one overlay surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// Contact slide-in (address, phone, mail).
    Contact,
    /// About-the-practice slide-in.
    About,
    /// About-project modal on the gallery screen.
    AboutProject,
}

/// Visibility flags for all overlay surfaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayState {
    /// Whether the contact slide-in is visible.
    pub contact_open: bool,
    /// Whether the about slide-in is visible.
    pub about_open: bool,
    /// Whether the about-project modal is visible.
    pub about_project_open: bool,
}

impl OverlayState {
    /// Shows a panel. Unconditional; cannot fail.
    pub fn open(&mut self, panel: Panel) {
        *self.flag_mut(panel) = true;
    }

    /// Hides a panel. Unconditional; cannot fail.
    pub fn close(&mut self, panel: Panel) {
        *self.flag_mut(panel) = false;
    }

    /// Flips a panel's visibility.
    pub fn toggle(&mut self, panel: Panel) {
        let flag = self.flag_mut(panel);
        *flag = !*flag;
    }

    /// Whether the given panel is visible.
    #[must_use]
    pub fn is_open(&self, panel: Panel) -> bool {
        match panel {
            Panel::Contact => self.contact_open,
            Panel::About => self.about_open,
            Panel::AboutProject => self.about_project_open,
        }
    }

    /// Whether any overlay surface is visible.
    #[must_use]
    pub fn any_open(&self) -> bool {
        self.contact_open || self.about_open || self.about_project_open
    }

    /// Closes the topmost visible surface, modal before slide-ins.
    ///
    /// Returns `true` if something was closed. Used by the Escape key,
    /// which dismisses one layer per press.
    pub fn close_topmost(&mut self) -> bool {
        if self.about_project_open {
            self.about_project_open = false;
        } else if self.contact_open {
            self.contact_open = false;
        } else if self.about_open {
            self.about_open = false;
        } else {
            return false;
        }
        true
    }

    fn flag_mut(&mut self, panel: Panel) -> &mut bool {
        match panel {
            Panel::Contact => &mut self.contact_open,
            Panel::About => &mut self.about_open,
            Panel::AboutProject => &mut self.about_project_open,
        }
    }
}
