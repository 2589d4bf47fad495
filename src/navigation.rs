// SPDX-License-Identifier: MPL-2.0
//! Slide navigation state machine.
//!
//! The application keeps one `SlideNavigator` per screen: the home
//! slideshow drives its own from a timer, the project gallery from
//! clicks, keys, and the mouse wheel. The navigator only tracks
//! position over a fixed non-empty list; it never touches the catalog
//! or the renderer.
//!
//! Every operation is total. The index invariant
//! `current_index < item_count` holds after construction and after
//! every transition, so callers can index their slide list without
//! checking bounds.

/// Direction of the most recent transition.
///
/// Selects which side the incoming slide animates from; it has no
/// effect on position arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// The slide entered from the left (backward navigation).
    Left,
    /// The slide entered from the right (forward navigation).
    #[default]
    Right,
}

/// Cursor over a fixed ordered list of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideNavigator {
    current_index: usize,
    item_count: usize,
    last_direction: Direction,
}

impl SlideNavigator {
    /// Creates a navigator positioned at the first slide.
    ///
    /// `item_count` is clamped to at least 1 so every operation stays
    /// total; the catalog never produces an empty list.
    #[must_use]
    pub fn new(item_count: usize) -> Self {
        Self {
            current_index: 0,
            item_count: item_count.max(1),
            last_direction: Direction::default(),
        }
    }

    /// Moves to the next slide, wrapping to the first after the last.
    pub fn advance(&mut self) {
        self.last_direction = Direction::Right;
        self.current_index = (self.current_index + 1) % self.item_count;
    }

    /// Moves to the previous slide, wrapping to the last before the first.
    pub fn retreat(&mut self) {
        self.last_direction = Direction::Left;
        self.current_index = if self.current_index == 0 {
            self.item_count - 1
        } else {
            self.current_index - 1
        };
    }

    /// Jumps directly to `index`.
    ///
    /// The only callers are fixed indicator controls, so an
    /// out-of-range `index` is a programmer error; it is ignored
    /// rather than surfaced. The transition direction is derived from
    /// the relative position of the target.
    pub fn go_to(&mut self, index: usize) {
        if index >= self.item_count {
            return;
        }
        self.last_direction = if index < self.current_index {
            Direction::Left
        } else {
            Direction::Right
        };
        self.current_index = index;
    }

    /// Timer callback; identical to [`advance`](Self::advance).
    pub fn on_timer_tick(&mut self) {
        self.advance();
    }

    /// Maps a wheel or drag delta to a discrete transition.
    ///
    /// Positive delta advances, negative retreats, zero is a no-op.
    /// Callers translate their input convention (wheel axis sign,
    /// drag distance) into this one before calling.
    pub fn on_wheel(&mut self, delta: f32) {
        if delta > 0.0 {
            self.advance();
        } else if delta < 0.0 {
            self.retreat();
        }
    }

    /// Current position, always `< item_count`.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of slides; at least 1.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Direction of the most recent transition.
    #[must_use]
    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    /// Position caption in the `current/total` form, e.g. `"7/20"`.
    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("{}/{}", self.current_index + 1, self.item_count)
    }
}
