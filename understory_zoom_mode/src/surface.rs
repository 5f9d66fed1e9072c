// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The zoom surface: the magnification engine a trigger mode drives.
//!
//! A surface owns overlay visibility and lens placement. Trigger modes only
//! read [`ZoomSurface::zooming_enabled`] and issue commands; they never
//! compute lens coordinates or render anything themselves.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_zoom_mode::surface::ZoomSurface;
//!
//! #[derive(Default)]
//! struct Lens {
//!     visible: bool,
//!     center: Point,
//!     dirty: bool,
//! }
//!
//! impl ZoomSurface for Lens {
//!     fn zooming_enabled(&self) -> bool {
//!         self.visible
//!     }
//!     fn zoom_on(&mut self, event: Point) {
//!         self.visible = true;
//!         self.center = event;
//!         self.dirty = true;
//!     }
//!     fn zoom_off(&mut self) {
//!         self.visible = false;
//!         self.dirty = true;
//!     }
//!     fn calculate_zoom_position(&mut self, event: Point) {
//!         self.center = event;
//!         self.dirty = true;
//!     }
//!     fn mark_for_check(&mut self) {
//!         self.dirty = true;
//!     }
//! }
//!
//! let mut lens = Lens::default();
//! lens.zoom_on(Point::new(12.0, 8.0));
//! assert!(lens.zooming_enabled());
//! ```

use kurbo::Point;

/// Commands and queries a trigger mode needs from the magnification view.
///
/// Pointer events are positions in the widget's local coordinate space. The
/// mode forwards them untouched, so the surface decides how to map them to a
/// lens offset.
pub trait ZoomSurface {
    /// Returns `true` while the magnified overlay is visible.
    fn zooming_enabled(&self) -> bool;

    /// Show the overlay, seeding the lens position from `event`.
    ///
    /// Implementations are responsible for any redraw this needs.
    fn zoom_on(&mut self, event: Point);

    /// Hide the overlay.
    fn zoom_off(&mut self);

    /// Recompute the lens placement for the pointer at `event`.
    fn calculate_zoom_position(&mut self, event: Point);

    /// Request a redraw of the overlay at its current position.
    fn mark_for_check(&mut self);
}

impl<S: ZoomSurface + ?Sized> ZoomSurface for &mut S {
    fn zooming_enabled(&self) -> bool {
        (**self).zooming_enabled()
    }

    fn zoom_on(&mut self, event: Point) {
        (**self).zoom_on(event);
    }

    fn zoom_off(&mut self) {
        (**self).zoom_off();
    }

    fn calculate_zoom_position(&mut self, event: Point) {
        (**self).calculate_zoom_position(event);
    }

    fn mark_for_check(&mut self) {
        (**self).mark_for_check();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Flag {
        on: bool,
        refreshes: u32,
        last: Option<Point>,
    }

    impl ZoomSurface for Flag {
        fn zooming_enabled(&self) -> bool {
            self.on
        }
        fn zoom_on(&mut self, event: Point) {
            self.on = true;
            self.last = Some(event);
        }
        fn zoom_off(&mut self) {
            self.on = false;
        }
        fn calculate_zoom_position(&mut self, event: Point) {
            self.last = Some(event);
        }
        fn mark_for_check(&mut self) {
            self.refreshes += 1;
        }
    }

    fn drive<S: ZoomSurface>(mut surface: S) {
        surface.zoom_on(Point::new(1.0, 2.0));
        surface.calculate_zoom_position(Point::new(3.0, 4.0));
        surface.mark_for_check();
    }

    #[test]
    fn borrowed_surface_forwards_to_owner() {
        let mut flag = Flag::default();

        drive(&mut flag);

        assert!(flag.on, "zoom_on should reach the borrowed surface");
        assert_eq!(flag.last, Some(Point::new(3.0, 4.0)));
        assert_eq!(flag.refreshes, 1);
    }

    #[test]
    fn borrowed_surface_reports_owner_state() {
        fn toggle<S: ZoomSurface>(mut surface: S) -> bool {
            if surface.zooming_enabled() {
                surface.zoom_off();
            } else {
                surface.zoom_on(Point::ZERO);
            }
            surface.zooming_enabled()
        }

        let mut flag = Flag::default();

        assert!(toggle(&mut flag), "hidden surface should be shown");
        assert!(!toggle(&mut flag), "visible surface should be hidden");
        assert!(!flag.on, "owner should observe the last command");
    }
}
