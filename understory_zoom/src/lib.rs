// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_zoom --heading-base-level=0

//! Understory Zoom: headless pinch, pan and double-tap zoom for content in a
//! fixed viewport.
//!
//! This crate models the interaction layer of an image viewer page: content of
//! a known intrinsic size sits inside a viewport, is fitted and centered once,
//! and can then be zoomed and panned by touch while always staying in bounds.
//! Touch sequences that do not zoom are classified into taps and vertical
//! swipes so an enclosing pager can navigate between items.
//!
//! It focuses on:
//! - Fitting content into the viewport and deriving zoom limits
//!   ([`fit`]).
//! - A single owned translate + uniform scale transform ([`TransformStore`]).
//! - Boundary correction after every change ([`bounds`]).
//! - Pinch zoom about a focal point ([`pinch`]), centroid panning with a drag
//!   threshold ([`pan`]), and an explicitly stepped double-tap animation
//!   ([`animator`]).
//! - Tap/swipe classification on release ([`classify`]) and touch arbitration
//!   with a horizontally-paging host ([`host`]).
//!
//! It does **not** recognize gestures from raw input on its own, own a timer,
//! or render anything. Hosts are expected to:
//! - Report viewport and content sizes as layout happens.
//! - Forward raw pointer events plus the results of their platform's scale and
//!   double-tap recognizers.
//! - Call [`ZoomController::tick`] every
//!   [`ZoomConfig::frame_interval`] while a double-tap animation runs.
//! - Render the content with [`ZoomController::transform`] (see
//!   `understory_zoom_snapshot` for an offscreen render hook).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_zoom::{
//!     NavigationEvent, PointerEvent, ScaleGesture, Standalone, ZoomConfig, ZoomController,
//! };
//!
//! let mut zoom = ZoomController::new(ZoomConfig::default());
//! zoom.set_viewport(Size::new(1000.0, 2000.0));
//! zoom.set_content(Size::new(2000.0, 1000.0));
//!
//! // Wide content is fitted to the viewport width.
//! let bounds = zoom.scale_bounds().unwrap();
//! assert_eq!(bounds.init, 0.5);
//! assert!(!zoom.is_zoomed());
//!
//! // Pinch out about the center; the zoom is capped at `bounds.max`.
//! zoom.on_scale(ScaleGesture::new(10.0, (500.0, 1000.0)));
//! assert_eq!(zoom.current_scale(), bounds.max);
//! assert!(zoom.is_zoomed());
//!
//! // A touch that barely moves is a tap.
//! let mut host = Standalone;
//! zoom.on_pointer_event(PointerEvent::down(0, (10.0, 10.0)), &mut host);
//! let event = zoom.on_pointer_event(PointerEvent::up(0, (12.0, 11.0)), &mut host);
//! assert_eq!(event, Some(NavigationEvent::Tap));
//! ```
//!
//! ## Double tap
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_zoom::ZoomController;
//!
//! let mut zoom = ZoomController::default();
//! zoom.set_double_tap_enabled(true);
//! zoom.set_viewport(Size::new(400.0, 400.0));
//! zoom.set_content(Size::new(800.0, 800.0));
//!
//! assert!(zoom.on_double_tap(Point::new(100.0, 100.0)));
//! // A host would call this from a 16 ms timer.
//! while zoom.tick() {}
//! let mid = zoom.scale_bounds().unwrap().mid;
//! assert!((zoom.current_scale() - mid).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - The transform is axis‑aligned with a **uniform** scale; rotation is out
//!   of scope.
//! - Every mutation is immediately followed by boundary correction, so the
//!   transform is safe to render after any entry point returns.
//! - Per-axis overflow is recomputed from the mapped content rect whenever it
//!   is needed rather than cached between handlers.
//! - Everything runs on the caller's thread; nothing blocks.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod animator;
pub mod bounds;
pub mod classify;
mod config;
mod controller;
pub mod fit;
pub mod geometry;
pub mod host;
pub mod pan;
pub mod pinch;
mod pointer;
mod store;

pub use classify::NavigationEvent;
pub use config::ZoomConfig;
pub use controller::{ZoomController, ZoomDebugInfo};
pub use fit::ScaleBounds;
pub use host::{HostContainer, Standalone};
pub use pinch::ScaleGesture;
pub use pointer::{PointerEvent, PointerId, PointerPhase};
pub use store::TransformStore;
