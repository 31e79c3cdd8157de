// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch zoom.

use kurbo::{Point, Size};

use crate::bounds;
use crate::fit::ScaleBounds;
use crate::store::TransformStore;

/// One update from the host's multi-touch scale recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleGesture {
    /// Scale change since the previous update (`> 1` spreads, `< 1` pinches).
    pub factor: f64,
    /// Point the gesture scales about, in viewport coordinates.
    pub focal: Point,
}

impl ScaleGesture {
    /// Creates a scale update.
    #[must_use]
    pub fn new(factor: f64, focal: impl Into<Point>) -> Self {
        Self {
            factor,
            focal: focal.into(),
        }
    }
}

/// Returns the factor to actually apply when scaling from `current` by
/// `factor`, or `None` if the update must be ignored.
///
/// The result lands the scale inside `[bounds.init, bounds.max]`. Updates that
/// would push further past a bound the scale already sits on are ignored, as
/// are non-finite or non-positive factors.
#[must_use]
pub fn bounded_factor(current: f64, factor: f64, bounds: &ScaleBounds) -> Option<f64> {
    if !factor.is_finite() || factor <= 0.0 || current <= 0.0 {
        return None;
    }
    let can_grow = current < bounds.max && factor > 1.0;
    let can_shrink = current > bounds.init && factor < 1.0;
    if !can_grow && !can_shrink {
        return None;
    }
    let target = current * factor;
    if target > bounds.max {
        Some(bounds.max / current)
    } else if target < bounds.init {
        Some(bounds.init / current)
    } else {
        Some(factor)
    }
}

/// Applies one pinch update to `store`, followed by boundary correction.
///
/// Returns `true` if the transform changed. Updates without content are
/// swallowed.
pub fn apply(
    store: &mut TransformStore,
    viewport: Size,
    bounds: &ScaleBounds,
    gesture: ScaleGesture,
) -> bool {
    if store.content().is_none() {
        return false;
    }
    let current = store.current_scale();
    let Some(factor) = bounded_factor(current, gesture.factor, bounds) else {
        return false;
    };
    log::trace!(
        "pinch: scale {current} x {factor} about ({}, {})",
        gesture.focal.x,
        gesture.focal.y
    );
    store.scale_about(factor, gesture.focal);
    bounds::correct(store, viewport);
    true
}
