// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-centroid panning with a drag threshold.
//!
//! ## Usage
//!
//! 1) On every pointer event, call [`PanTracker::track`] with the centroid of
//!    all active pointers and their count. A change in count rebases the
//!    tracker so adding or lifting a finger never makes the content jump.
//! 2) On pointer moves, call [`PanTracker::drag_delta`] to get the frame delta
//!    once the drag threshold has been crossed.
//! 3) Feed that delta to [`apply`], which drops axes the content fits on and
//!    runs boundary correction.
//! 4) Call [`PanTracker::end`] on release or cancel.
//!
//! ```
//! use kurbo::Point;
//! use understory_zoom::pan::PanTracker;
//!
//! let mut pan = PanTracker::new(8.0);
//! pan.track(Point::new(0.0, 0.0), 1);
//!
//! // Below the slop: nothing yet.
//! pan.track(Point::new(3.0, 4.0), 1);
//! assert_eq!(pan.drag_delta(Point::new(3.0, 4.0)), None);
//!
//! // Cumulative movement crosses the slop; the frame delta is reported.
//! pan.track(Point::new(9.0, 4.0), 1);
//! let delta = pan.drag_delta(Point::new(9.0, 4.0)).unwrap();
//! assert_eq!((delta.x, delta.y), (6.0, 0.0));
//! ```

use kurbo::{Point, Size, Vec2};

use crate::bounds;
use crate::geometry::{Overflow, exceeds_slop};
use crate::store::TransformStore;

/// Tracks the pointer centroid across frames and decides when a touch
/// sequence has become a drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanTracker {
    slop: f64,
    pointer_count: usize,
    /// Centroid at the last rebase; the drag threshold is measured from here.
    anchor: Option<Point>,
    /// Centroid seen on the previous frame.
    last: Option<Point>,
    dragging: bool,
}

impl PanTracker {
    /// Creates a tracker with the given drag threshold in viewport units.
    #[must_use]
    pub fn new(slop: f64) -> Self {
        Self {
            slop,
            ..Self::default()
        }
    }

    /// Returns the drag threshold.
    #[must_use]
    pub fn slop(&self) -> f64 {
        self.slop
    }

    /// Records the active pointer count, rebasing if it changed.
    ///
    /// Returns `true` if a rebase happened.
    pub fn track(&mut self, centroid: Point, pointer_count: usize) -> bool {
        if pointer_count == self.pointer_count && self.anchor.is_some() {
            return false;
        }
        self.pointer_count = pointer_count;
        self.dragging = false;
        self.anchor = Some(centroid);
        self.last = Some(centroid);
        true
    }

    /// Advances to `centroid` and returns the delta since the previous frame
    /// if a drag is in progress.
    ///
    /// The drag starts once the centroid has moved strictly more than the slop
    /// away from where it was at the last rebase.
    pub fn drag_delta(&mut self, centroid: Point) -> Option<Vec2> {
        let anchor = self.anchor?;
        let last = self.last.replace(centroid).unwrap_or(anchor);
        if !self.dragging {
            self.dragging = exceeds_slop(centroid - anchor, self.slop);
        }
        self.dragging.then(|| centroid - last)
    }

    /// Returns `true` once the drag threshold has been crossed.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Returns the pointer count seen by the last [`PanTracker::track`].
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointer_count
    }

    /// Forgets the current touch sequence.
    pub fn end(&mut self) {
        *self = Self::new(self.slop);
    }
}

/// Pans `store` by `delta`, followed by boundary correction.
///
/// Axes on which the content is smaller than the viewport are not panned.
/// Returns `true` if any translation was requested.
pub fn apply(store: &mut TransformStore, viewport: Size, delta: Vec2) -> bool {
    if store.content().is_none() {
        return false;
    }
    let pannable = Overflow::covering(store.mapped_content_rect(), viewport);
    let delta = Vec2::new(
        if pannable.x { delta.x } else { 0.0 },
        if pannable.y { delta.y } else { 0.0 },
    );
    if delta == Vec2::ZERO {
        return false;
    }
    log::trace!("pan: translate by ({}, {})", delta.x, delta.y);
    store.translate_by(delta);
    bounds::correct(store, viewport);
    true
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{PanTracker, apply};
    use crate::store::TransformStore;

    #[test]
    fn slop_is_cumulative_since_rebase() {
        let mut pan = PanTracker::new(10.0);
        pan.track(Point::new(100.0, 100.0), 1);

        // Many small frames, each well under the slop.
        for i in 1..=4 {
            let p = Point::new(100.0 + 2.0 * f64::from(i), 100.0);
            pan.track(p, 1);
            assert_eq!(pan.drag_delta(p), None);
        }
        let p = Point::new(112.0, 100.0);
        pan.track(p, 1);
        assert_eq!(pan.drag_delta(p), Some(Vec2::new(4.0, 0.0)));
        assert!(pan.is_dragging());

        let p = Point::new(113.0, 98.0);
        assert_eq!(pan.drag_delta(p), Some(Vec2::new(1.0, -2.0)));
    }

    #[test]
    fn pointer_count_change_rebases_without_jump() {
        let mut pan = PanTracker::new(1.0);
        pan.track(Point::new(0.0, 0.0), 1);
        let _ = pan.drag_delta(Point::new(20.0, 0.0));
        assert!(pan.is_dragging());

        // A second finger lands far away; the centroid jumps.
        assert!(pan.track(Point::new(200.0, 50.0), 2));
        assert!(!pan.is_dragging());
        assert_eq!(pan.drag_delta(Point::new(200.5, 50.0)), None);
        assert_eq!(
            pan.drag_delta(Point::new(205.0, 50.0)),
            Some(Vec2::new(4.5, 0.0))
        );
    }

    #[test]
    fn same_count_does_not_rebase() {
        let mut pan = PanTracker::new(1.0);
        assert!(pan.track(Point::ZERO, 1));
        assert!(!pan.track(Point::new(5.0, 5.0), 1));
        assert_eq!(pan.pointer_count(), 1);
    }

    #[test]
    fn untracked_delta_is_none() {
        let mut pan = PanTracker::new(1.0);
        assert_eq!(pan.drag_delta(Point::new(50.0, 50.0)), None);
        pan.track(Point::ZERO, 1);
        pan.end();
        assert_eq!(pan.drag_delta(Point::new(50.0, 50.0)), None);
        assert_eq!(pan.slop(), 1.0);
    }

    #[test]
    fn fitting_axis_is_not_panned() {
        let viewport = Size::new(100.0, 100.0);
        let mut store = TransformStore::new();
        // Wider than the viewport, shorter than it, centered vertically.
        store.set_content(Some(Size::new(300.0, 50.0)));
        store.translate_by(Vec2::new(-100.0, 25.0));

        assert!(apply(&mut store, viewport, Vec2::new(30.0, 40.0)));
        let rect = store.mapped_content_rect();
        assert_eq!(rect.x0, -70.0);
        assert_eq!(rect.y0, 25.0);

        // Only the fitting axis moves: nothing to do.
        assert!(!apply(&mut store, viewport, Vec2::new(0.0, 40.0)));
    }

    #[test]
    fn pan_is_clamped_at_edges() {
        let viewport = Size::new(100.0, 100.0);
        let mut store = TransformStore::new();
        store.set_content(Some(Size::new(300.0, 300.0)));

        apply(&mut store, viewport, Vec2::new(500.0, -500.0));
        let rect = store.mapped_content_rect();
        assert_eq!(rect.x0, 0.0);
        assert_eq!(rect.y1, 100.0);
    }
}
