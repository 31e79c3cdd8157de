// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Affine, Point, Rect, Size};

use crate::animator::DoubleTapAnimator;
use crate::bounds;
use crate::classify::{NavigationEvent, Thresholds, classify};
use crate::config::ZoomConfig;
use crate::fit::{ScaleBounds, fit_content};
use crate::geometry::Overflow;
use crate::host::{self, HostContainer};
use crate::pan::{self, PanTracker};
use crate::pinch::{self, ScaleGesture};
use crate::pointer::{ActivePointers, GestureSession, PointerEvent, PointerPhase};
use crate::store::TransformStore;

type NavigationHandler = Box<dyn FnMut(NavigationEvent)>;

/// Zoomable content inside a fixed viewport.
///
/// `ZoomController` is the single owner of the content transform. Hosts feed
/// it layout notifications, raw pointer events, recognized scale gestures and
/// double taps, and an animation tick; it keeps the content fitted, bounded
/// and centered, and reports taps and vertical swipes as [`NavigationEvent`]s.
///
/// Every entry point runs to completion and leaves the transform boundary
/// corrected, so [`ZoomController::transform`] is always safe to render.
pub struct ZoomController {
    config: ZoomConfig,
    viewport: Size,
    store: TransformStore,
    /// Present iff content has been fitted; doubles as the "initialized" guard.
    bounds: Option<ScaleBounds>,
    swipe_threshold: f64,
    scale_enabled: bool,
    double_tap_enabled: bool,
    pointers: ActivePointers,
    session: Option<GestureSession>,
    pan: PanTracker,
    animator: DoubleTapAnimator,
    on_navigate: Option<NavigationHandler>,
}

impl fmt::Debug for ZoomController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoomController")
            .field("config", &self.config)
            .field("viewport", &self.viewport)
            .field("store", &self.store)
            .field("bounds", &self.bounds)
            .field("scale_enabled", &self.scale_enabled)
            .field("double_tap_enabled", &self.double_tap_enabled)
            .field("session", &self.session)
            .field("animator", &self.animator)
            .finish_non_exhaustive()
    }
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}

impl ZoomController {
    /// Creates a controller with no viewport and no content.
    ///
    /// Scaling starts enabled and double tap starts disabled.
    #[must_use]
    pub fn new(config: ZoomConfig) -> Self {
        let config = config.normalized();
        Self {
            config,
            viewport: Size::ZERO,
            store: TransformStore::new(),
            bounds: None,
            swipe_threshold: 0.0,
            scale_enabled: true,
            double_tap_enabled: false,
            pointers: ActivePointers::default(),
            session: None,
            pan: PanTracker::new(config.touch_slop),
            animator: DoubleTapAnimator::new(config.grow_step, config.shrink_step),
            on_navigate: None,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Layout and content
    // -------------------------------------------------------------------------

    /// Sets the viewport size after layout.
    ///
    /// Recomputes the swipe threshold and fits pending content. Content that
    /// is already fitted keeps its zoom but is corrected into the new bounds.
    pub fn set_viewport(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.swipe_threshold = viewport.height * self.config.swipe_threshold_fraction;
        log::debug!(
            "viewport {}x{}, swipe threshold {}",
            viewport.width,
            viewport.height,
            self.swipe_threshold
        );
        if self.bounds.is_some() {
            bounds::correct(&mut self.store, viewport);
        } else {
            self.try_fit();
        }
    }

    /// Notifies the controller that content of intrinsic size `content` is
    /// available.
    ///
    /// Ignored while fitted content is present (call [`ZoomController::reset`]
    /// first) and for empty sizes.
    pub fn set_content(&mut self, content: Size) {
        if self.bounds.is_some() {
            log::debug!("content already fitted; ignoring repeat notification");
            return;
        }
        if !(content.width > 0.0 && content.height > 0.0) {
            log::debug!(
                "ignoring empty content {}x{}",
                content.width,
                content.height
            );
            return;
        }
        self.store.set_content(Some(content));
        self.try_fit();
    }

    /// Clears the transform and the content. The next
    /// [`ZoomController::set_content`] fits from scratch.
    pub fn reset(&mut self) {
        self.store.reset();
        self.bounds = None;
        self.animator.stop();
        log::debug!("reset");
    }

    fn try_fit(&mut self) {
        if self.bounds.is_some() {
            return;
        }
        let Some(content) = self.store.content() else {
            return;
        };
        let Some(fit) = fit_content(
            self.viewport,
            content,
            self.config.mid_scale_multiplier,
            self.config.max_scale_multiplier,
        ) else {
            return;
        };
        log::debug!(
            "fitted {}x{} into {}x{}: scale {} (mid {}, max {})",
            content.width,
            content.height,
            self.viewport.width,
            self.viewport.height,
            fit.bounds.init,
            fit.bounds.mid,
            fit.bounds.max
        );
        self.store.set_transform(fit.transform);
        self.bounds = Some(fit.bounds);
    }

    // -------------------------------------------------------------------------
    // Toggles and callbacks
    // -------------------------------------------------------------------------

    /// Enables or disables pinch zoom.
    pub fn set_scale_enabled(&mut self, enabled: bool) {
        self.scale_enabled = enabled;
    }

    /// Returns `true` if pinch zoom is enabled.
    #[must_use]
    pub fn is_scale_enabled(&self) -> bool {
        self.scale_enabled
    }

    /// Enables or disables double-tap zoom.
    pub fn set_double_tap_enabled(&mut self, enabled: bool) {
        self.double_tap_enabled = enabled;
    }

    /// Returns `true` if double-tap zoom is enabled.
    #[must_use]
    pub fn is_double_tap_enabled(&self) -> bool {
        self.double_tap_enabled
    }

    /// Registers the receiver of navigation events, replacing any previous
    /// one.
    pub fn set_navigation_handler(&mut self, handler: impl FnMut(NavigationEvent) + 'static) {
        self.on_navigate = Some(Box::new(handler));
    }

    /// Drops the navigation handler; later events are discarded.
    pub fn clear_navigation_handler(&mut self) {
        self.on_navigate = None;
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Handles one raw pointer event.
    ///
    /// Returns the navigation event produced when the last pointer lifts, if
    /// any; the same event is also passed to the registered handler.
    pub fn on_pointer_event<H: HostContainer + ?Sized>(
        &mut self,
        event: PointerEvent,
        host: &mut H,
    ) -> Option<NavigationEvent> {
        match event.phase {
            PointerPhase::Down => {
                if self.pointers.is_empty() {
                    self.session = Some(GestureSession::new(event.id, event.position));
                }
                self.pointers.press(event.id, event.position);
                self.track_pointers();
                self.claim_from_host(host);
                None
            }
            PointerPhase::Move => {
                if !self.pointers.move_to(event.id, event.position) {
                    return None;
                }
                if let Some(session) = &mut self.session {
                    session.observe(event.id, event.position);
                }
                self.claim_from_host(host);
                self.track_pointers();
                let centroid = self.pointers.centroid()?;
                if let (Some(delta), Some(_)) = (self.pan.drag_delta(centroid), self.bounds) {
                    pan::apply(&mut self.store, self.viewport, delta);
                }
                None
            }
            PointerPhase::Up => {
                if !self.pointers.release(event.id) {
                    return None;
                }
                if let Some(session) = &mut self.session {
                    session.observe(event.id, event.position);
                }
                if !self.pointers.is_empty() {
                    self.track_pointers();
                    return None;
                }
                self.pan.end();
                let session = self.session.take()?;
                let event = classify(session.displacement, self.thresholds())?;
                self.emit(event);
                Some(event)
            }
            PointerPhase::Cancel => {
                self.pointers.clear();
                self.session = None;
                self.pan.end();
                None
            }
        }
    }

    /// Accepts or rejects the start of a scale gesture.
    pub fn on_scale_begin(&mut self) -> bool {
        let accepted = self.scale_enabled && self.bounds.is_some();
        log::debug!("scale begin (accepted: {accepted})");
        accepted
    }

    /// Handles one scale gesture update. Returns `true` if the zoom changed.
    pub fn on_scale(&mut self, gesture: ScaleGesture) -> bool {
        if !self.scale_enabled {
            return false;
        }
        let Some(bounds) = self.bounds else {
            return false;
        };
        pinch::apply(&mut self.store, self.viewport, &bounds, gesture)
    }

    /// Notes the end of a scale gesture.
    pub fn on_scale_end(&mut self) {
        log::debug!("scale end at {}", self.store.current_scale());
    }

    /// Handles a recognized double tap at `position`.
    ///
    /// Starts an animation towards the mid or fitted scale; call
    /// [`ZoomController::tick`] every [`ZoomConfig::frame_interval`] until it
    /// returns `false`. Taps during a running animation are ignored.
    pub fn on_double_tap(&mut self, position: Point) -> bool {
        if !self.double_tap_enabled {
            return false;
        }
        let Some(bounds) = self.bounds else {
            return false;
        };
        self.animator.start(self.store.current_scale(), &bounds, position)
    }

    /// Advances a running double-tap animation by one frame.
    ///
    /// Returns `true` while more frames are needed.
    pub fn tick(&mut self) -> bool {
        self.animator.step(&mut self.store, self.viewport)
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Returns the content-to-viewport transform to render with.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.store.transform()
    }

    /// Returns the current uniform zoom.
    #[must_use]
    pub fn current_scale(&self) -> f64 {
        self.store.current_scale()
    }

    /// Returns `true` if the content extends past the viewport on either axis.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        Overflow::exceeding(self.store.mapped_content_rect(), self.viewport, 0.0).any()
    }

    /// Returns the zoom limits once content has been fitted.
    #[must_use]
    pub fn scale_bounds(&self) -> Option<ScaleBounds> {
        self.bounds
    }

    /// Returns the content rect in viewport coordinates.
    #[must_use]
    pub fn mapped_content_rect(&self) -> Rect {
        self.store.mapped_content_rect()
    }

    /// Returns the viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Returns the intrinsic content size, if any.
    #[must_use]
    pub fn content(&self) -> Option<Size> {
        self.store.content()
    }

    /// Returns `true` while a double-tap animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    /// Returns the vertical travel a release needs to count as a swipe.
    #[must_use]
    pub fn swipe_threshold(&self) -> f64 {
        self.swipe_threshold
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ZoomDebugInfo {
        ZoomDebugInfo {
            viewport: self.viewport,
            content: self.store.content(),
            transform: self.store.transform(),
            mapped_content_rect: self.store.mapped_content_rect(),
            scale: self.store.current_scale(),
            bounds: self.bounds,
            swipe_threshold: self.swipe_threshold,
            active_pointers: self.pointers.len(),
            dragging: self.pan.is_dragging(),
            animation_target: self.animator.target(),
        }
    }

    fn thresholds(&self) -> Thresholds {
        Thresholds {
            tap: self.config.paging_touch_slop,
            swipe: self.swipe_threshold,
        }
    }

    fn track_pointers(&mut self) {
        if let Some(centroid) = self.pointers.centroid() {
            self.pan.track(centroid, self.pointers.len());
        }
    }

    fn claim_from_host<H: HostContainer + ?Sized>(&self, host: &mut H) {
        if self.bounds.is_none() {
            return;
        }
        host::resolve(
            host,
            self.store.mapped_content_rect(),
            self.viewport,
            self.config.zoom_tolerance,
        );
    }

    fn emit(&mut self, event: NavigationEvent) {
        log::debug!("navigation: {event:?}");
        if let Some(handler) = &mut self.on_navigate {
            handler(event);
        }
    }
}

/// Debug snapshot of a [`ZoomController`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomDebugInfo {
    /// Viewport size.
    pub viewport: Size,
    /// Intrinsic content size, if any.
    pub content: Option<Size>,
    /// Current content transform.
    pub transform: Affine,
    /// Content rect in viewport coordinates.
    pub mapped_content_rect: Rect,
    /// Current uniform zoom.
    pub scale: f64,
    /// Zoom limits, once fitted.
    pub bounds: Option<ScaleBounds>,
    /// Vertical swipe threshold.
    pub swipe_threshold: f64,
    /// Number of pointers in contact.
    pub active_pointers: usize,
    /// Whether the current touch sequence is panning.
    pub dragging: bool,
    /// Target of the running double-tap animation.
    pub animation_target: Option<f64>,
}
