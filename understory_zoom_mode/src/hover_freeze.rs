// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover-freeze zoom: the lens follows the pointer until a click pins it.
//!
//! ## Behavior
//!
//! - Entering the element shows the overlay; moving tracks the lens; leaving
//!   hides it.
//! - Clicking while the overlay is hidden shows it at the click position.
//! - Clicking while the overlay is visible toggles the freeze. Freezing asks
//!   the surface to redraw once; unfreezing is silent and tracking resumes on
//!   the next move.
//! - While frozen, enter, leave, and move are ignored and wheel zoom is
//!   suppressed.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_zoom_mode::hover_freeze::HoverFreezeZoomMode;
//! use understory_zoom_mode::mode::ZoomMode;
//! use understory_zoom_mode::surface::ZoomSurface;
//!
//! #[derive(Default)]
//! struct Lens {
//!     visible: bool,
//!     center: Point,
//! }
//!
//! impl ZoomSurface for Lens {
//!     fn zooming_enabled(&self) -> bool {
//!         self.visible
//!     }
//!     fn zoom_on(&mut self, event: Point) {
//!         self.visible = true;
//!         self.center = event;
//!     }
//!     fn zoom_off(&mut self) {
//!         self.visible = false;
//!     }
//!     fn calculate_zoom_position(&mut self, event: Point) {
//!         self.center = event;
//!     }
//!     fn mark_for_check(&mut self) {}
//! }
//!
//! let mut mode = HoverFreezeZoomMode::new(Lens::default());
//!
//! mode.on_mouse_enter(Point::new(10.0, 10.0));
//! mode.on_mouse_move(Point::new(20.0, 15.0));
//! assert_eq!(mode.surface().center, Point::new(20.0, 15.0));
//!
//! // Click to freeze: movement and leaving no longer affect the lens.
//! mode.on_click(Point::new(20.0, 15.0));
//! assert!(mode.is_frozen());
//! mode.on_mouse_move(Point::new(90.0, 90.0));
//! mode.on_mouse_leave();
//! assert!(mode.surface().visible);
//! assert_eq!(mode.surface().center, Point::new(20.0, 15.0));
//! assert!(!mode.on_mouse_wheel());
//! ```

use kurbo::Point;
use tracing::trace;

use crate::mode::ZoomMode;
use crate::surface::ZoomSurface;

/// Whether the lens follows the pointer or is pinned in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FreezeState {
    /// The lens tracks pointer movement.
    #[default]
    Tracking,
    /// The lens is pinned; hover, leave, and movement are ignored.
    Frozen,
}

impl FreezeState {
    /// The opposite state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Tracking => Self::Frozen,
            Self::Frozen => Self::Tracking,
        }
    }
}

/// What a click does to a freeze left over from before the overlay was hidden.
///
/// The mode never observes the surface being hidden by someone else. If that
/// happens while frozen, the next click finds zooming disabled and shows the
/// overlay again; this policy decides whether the freeze survives that click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StaleFreeze {
    /// Clear the freeze whenever a click has to turn zooming back on.
    #[default]
    Reset,
    /// Leave the freeze untouched, so the overlay reappears already frozen.
    Keep,
}

/// Hover-freeze trigger mode driving a [`ZoomSurface`].
///
/// The surface is injected at construction. Pass `&mut surface` to lend it
/// for the lifetime of the mode, or move it in and reach it through
/// [`HoverFreezeZoomMode::surface`] and [`HoverFreezeZoomMode::surface_mut`].
#[derive(Clone, Debug)]
pub struct HoverFreezeZoomMode<S> {
    surface: S,
    state: FreezeState,
    stale_freeze: StaleFreeze,
}

impl<S: ZoomSurface> HoverFreezeZoomMode<S> {
    /// Create an unfrozen mode driving `surface`.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            state: FreezeState::Tracking,
            stale_freeze: StaleFreeze::default(),
        }
    }

    /// Builder form of [`HoverFreezeZoomMode::set_stale_freeze`].
    #[must_use]
    pub fn with_stale_freeze(mut self, policy: StaleFreeze) -> Self {
        self.stale_freeze = policy;
        self
    }

    /// Current stale freeze policy.
    pub fn stale_freeze(&self) -> StaleFreeze {
        self.stale_freeze
    }

    /// Set how a click treats a freeze left over from a hidden overlay.
    pub fn set_stale_freeze(&mut self, policy: StaleFreeze) {
        self.stale_freeze = policy;
    }

    /// Current freeze state.
    pub fn state(&self) -> FreezeState {
        self.state
    }

    /// Returns `true` while the lens is pinned.
    pub fn is_frozen(&self) -> bool {
        self.state == FreezeState::Frozen
    }

    /// Shared access to the driven surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the driven surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consume the mode, returning the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}

impl<S: ZoomSurface> ZoomMode for HoverFreezeZoomMode<S> {
    fn on_click(&mut self, event: Point) {
        if !self.surface.zooming_enabled() {
            if self.is_frozen() && self.stale_freeze == StaleFreeze::Reset {
                trace!("clearing stale freeze");
                self.state = FreezeState::Tracking;
            }
            self.surface.zoom_on(event);
            return;
        }

        self.state = self.state.toggled();
        trace!(frozen = self.is_frozen(), x = event.x, y = event.y, "freeze toggled");
        if self.is_frozen() {
            self.surface.mark_for_check();
        }
    }

    fn on_mouse_enter(&mut self, event: Point) {
        if self.is_frozen() {
            trace!(x = event.x, y = event.y, "enter ignored while frozen");
            return;
        }
        self.surface.zoom_on(event);
    }

    fn on_mouse_leave(&mut self) {
        if self.is_frozen() {
            trace!("leave ignored while frozen");
            return;
        }
        if self.surface.zooming_enabled() {
            self.surface.zoom_off();
        }
    }

    fn on_mouse_move(&mut self, event: Point) {
        // Frozen lenses stay put.
        if !self.is_frozen() && self.surface.zooming_enabled() {
            self.surface.calculate_zoom_position(event);
        }
    }

    fn on_mouse_wheel(&self) -> bool {
        !self.is_frozen()
    }
}
