// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_zoom_mode --heading-base-level=0

//! Understory Zoom Mode: trigger modes for image zoom overlays.
//!
//! An image-magnification widget shows a zoomed lens over its image. *When*
//! that lens appears, follows the pointer, stays pinned, or disappears is
//! decided by a trigger mode. This crate provides that decision layer as
//! small, headless state machines:
//!
//! - [`surface`]: the [`ZoomSurface`](surface::ZoomSurface) trait a mode drives
//! - [`mode`]: the [`ZoomMode`](mode::ZoomMode) handler set shared by all modes
//! - [`hover_freeze`]: a lens that follows hover and can be pinned by clicking
//!
//! ## Design Philosophy
//!
//! A trigger mode only reads whether zooming is enabled and issues commands.
//! It does not render, compute lens offsets, or own any windowing state:
//!
//! - **Injected surface**: each mode is constructed with the surface it drives,
//!   so it can be tested against a recording mock.
//! - **Infallible handlers**: every handler is total over its state and
//!   produces only surface commands or a boolean.
//! - **Serial delivery**: handlers take `&mut self` and run to completion,
//!   matching how UI event loops deliver pointer input.
//!
//! ## Hover-freeze
//!
//! ```rust
//! use kurbo::Point;
//! use understory_zoom_mode::hover_freeze::{FreezeState, HoverFreezeZoomMode};
//! use understory_zoom_mode::mode::{ZoomInput, ZoomMode};
//! use understory_zoom_mode::surface::ZoomSurface;
//!
//! #[derive(Default)]
//! struct Overlay {
//!     visible: bool,
//!     redraws: u32,
//! }
//!
//! impl ZoomSurface for Overlay {
//!     fn zooming_enabled(&self) -> bool {
//!         self.visible
//!     }
//!     fn zoom_on(&mut self, _event: Point) {
//!         self.visible = true;
//!         self.redraws += 1;
//!     }
//!     fn zoom_off(&mut self) {
//!         self.visible = false;
//!         self.redraws += 1;
//!     }
//!     fn calculate_zoom_position(&mut self, _event: Point) {
//!         self.redraws += 1;
//!     }
//!     fn mark_for_check(&mut self) {
//!         self.redraws += 1;
//!     }
//! }
//!
//! let mut overlay = Overlay::default();
//! let mut mode = HoverFreezeZoomMode::new(&mut overlay);
//!
//! // Hover shows the lens, a click pins it.
//! mode.dispatch(ZoomInput::Enter(Point::new(4.0, 4.0)));
//! mode.dispatch(ZoomInput::Click(Point::new(4.0, 4.0)));
//! assert_eq!(mode.state(), FreezeState::Frozen);
//!
//! // Pinned lenses ignore the wheel and survive leaving the element.
//! assert!(!mode.dispatch(ZoomInput::Wheel));
//! mode.dispatch(ZoomInput::Leave);
//! drop(mode);
//! assert!(overlay.visible);
//! ```
//!
//! ## Features
//!
//! - `std` (default): build Kurbo and `tracing` against the standard library.
//! - `libm`: use `libm` for Kurbo's float math in `no_std` builds.
//!
//! Transitions are reported through `tracing` at the `TRACE` level.
//!
//! This crate is `no_std` compatible.

#![no_std]

pub mod hover_freeze;
pub mod mode;
pub mod surface;
