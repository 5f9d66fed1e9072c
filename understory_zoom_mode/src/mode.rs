// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger modes: the capability set shared by every zoom trigger strategy.
//!
//! A trigger mode maps pointer input on the zoomable element to commands on a
//! [`ZoomSurface`](crate::surface::ZoomSurface). Hosts pick one mode per
//! widget and feed it every enter, leave, move, click, and wheel event, either
//! through the individual handlers or through [`ZoomMode::dispatch`].
//!
//! ## Routing with `dispatch`
//!
//! ```
//! use kurbo::Point;
//! use understory_zoom_mode::mode::{ZoomInput, ZoomMode};
//!
//! /// A mode that never reacts and always allows wheel zoom.
//! struct Inert;
//!
//! impl ZoomMode for Inert {
//!     fn on_click(&mut self, _event: Point) {}
//!     fn on_mouse_enter(&mut self, _event: Point) {}
//!     fn on_mouse_leave(&mut self) {}
//!     fn on_mouse_move(&mut self, _event: Point) {}
//!     fn on_mouse_wheel(&self) -> bool {
//!         true
//!     }
//! }
//!
//! let mut mode = Inert;
//! assert!(mode.dispatch(ZoomInput::Enter(Point::new(4.0, 4.0))));
//! assert!(mode.dispatch(ZoomInput::Wheel));
//! ```

use kurbo::Point;

/// Pointer input delivered to a trigger mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomInput {
    /// The element was clicked at the given position.
    Click(Point),
    /// The pointer entered the element at the given position.
    Enter(Point),
    /// The pointer left the element.
    Leave,
    /// The pointer moved to the given position inside the element.
    Move(Point),
    /// The wheel was turned over the element.
    Wheel,
}

/// Event handlers every zoom trigger mode provides.
///
/// Handlers run to completion and are delivered serially by the host's event
/// loop. None of them can fail.
pub trait ZoomMode {
    /// Handle a click on the zoomable element.
    fn on_click(&mut self, event: Point);

    /// Handle the pointer entering the zoomable element.
    fn on_mouse_enter(&mut self, event: Point);

    /// Handle the pointer leaving the zoomable element.
    fn on_mouse_leave(&mut self);

    /// Handle pointer movement over the zoomable element.
    fn on_mouse_move(&mut self, event: Point);

    /// Returns whether wheel-driven zoom level changes are allowed right now.
    ///
    /// `false` asks the host to suppress its default wheel behavior.
    fn on_mouse_wheel(&self) -> bool;

    /// Route `input` to the matching handler.
    ///
    /// Returns whether the host may run its default behavior for the input:
    /// the result of [`ZoomMode::on_mouse_wheel`] for [`ZoomInput::Wheel`],
    /// and `true` for everything else.
    fn dispatch(&mut self, input: ZoomInput) -> bool {
        match input {
            ZoomInput::Click(event) => self.on_click(event),
            ZoomInput::Enter(event) => self.on_mouse_enter(event),
            ZoomInput::Leave => self.on_mouse_leave(),
            ZoomInput::Move(event) => self.on_mouse_move(event),
            ZoomInput::Wheel => return self.on_mouse_wheel(),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the last handler hit so routing can be checked.
    #[derive(Debug, Default)]
    struct Probe {
        last: Option<ZoomInput>,
        wheel_allowed: bool,
    }

    impl ZoomMode for Probe {
        fn on_click(&mut self, event: Point) {
            self.last = Some(ZoomInput::Click(event));
        }
        fn on_mouse_enter(&mut self, event: Point) {
            self.last = Some(ZoomInput::Enter(event));
        }
        fn on_mouse_leave(&mut self) {
            self.last = Some(ZoomInput::Leave);
        }
        fn on_mouse_move(&mut self, event: Point) {
            self.last = Some(ZoomInput::Move(event));
        }
        fn on_mouse_wheel(&self) -> bool {
            self.wheel_allowed
        }
    }

    #[test]
    fn dispatch_routes_pointer_inputs() {
        let mut probe = Probe::default();
        let inputs = [
            ZoomInput::Click(Point::new(1.0, 1.0)),
            ZoomInput::Enter(Point::new(2.0, 2.0)),
            ZoomInput::Leave,
            ZoomInput::Move(Point::new(3.0, 3.0)),
        ];

        for input in inputs {
            assert!(probe.dispatch(input), "non-wheel input always allows defaults");
            assert_eq!(probe.last, Some(input), "input routed to its handler");
        }
    }

    #[test]
    fn dispatch_wheel_returns_gate() {
        let mut probe = Probe::default();
        assert!(!probe.dispatch(ZoomInput::Wheel), "closed gate suppresses default");
        assert_eq!(probe.last, None, "wheel touches no handler state");

        probe.wheel_allowed = true;
        assert!(probe.dispatch(ZoomInput::Wheel), "open gate allows default");
    }
}
