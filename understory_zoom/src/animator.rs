// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated double-tap zoom.
//!
//! The animator is a plain state machine; it owns no timer. The host calls
//! [`DoubleTapAnimator::step`] on a fixed cadence (see
//! [`ZoomConfig::frame_interval`](crate::ZoomConfig::frame_interval)) for as
//! long as [`DoubleTapAnimator::is_active`] reports `true`.
//!
//! Each step multiplies the scale by a constant factor about the tapped point.
//! Once the scale reaches or passes the target, a final step lands exactly on
//! it, so the terminal scale never depends on the step factor.

use kurbo::{Point, Size};

use crate::bounds;
use crate::fit::ScaleBounds;
use crate::store::TransformStore;

/// Default per-step factor when zooming in.
pub const GROW_STEP: f64 = 1.07;
/// Default per-step factor when zooming out.
pub const SHRINK_STEP: f64 = 0.97;

/// Relative slack when deciding whether the scale already sits at `mid`.
const SCALE_TOLERANCE: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Animation {
    target: f64,
    step: f64,
    focal: Point,
}

/// Drives a double-tap zoom towards the mid or fitted scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DoubleTapAnimator {
    grow: f64,
    shrink: f64,
    active: Option<Animation>,
}

impl Default for DoubleTapAnimator {
    fn default() -> Self {
        Self::new(GROW_STEP, SHRINK_STEP)
    }
}

impl DoubleTapAnimator {
    /// Creates an idle animator with the given step factors.
    ///
    /// `grow` should be greater than `1` and `shrink` in `(0, 1)`; a factor
    /// outside its range is replaced by [`GROW_STEP`] or [`SHRINK_STEP`].
    #[must_use]
    pub fn new(grow: f64, shrink: f64) -> Self {
        let grow = if grow.is_finite() && grow > 1.0 {
            grow
        } else {
            GROW_STEP
        };
        let shrink = if shrink > 0.0 && shrink < 1.0 {
            shrink
        } else {
            SHRINK_STEP
        };
        Self {
            grow,
            shrink,
            active: None,
        }
    }

    /// Starts an animation about `focal`.
    ///
    /// Targets `bounds.mid` when `current` is below it (within floating
    /// tolerance), `bounds.init` otherwise. Returns `false` without doing
    /// anything if an animation is already running.
    pub fn start(&mut self, current: f64, bounds: &ScaleBounds, focal: Point) -> bool {
        if self.active.is_some() {
            return false;
        }
        let target = if current < bounds.mid * (1.0 - SCALE_TOLERANCE) {
            bounds.mid
        } else {
            bounds.init
        };
        let step = if target > current {
            self.grow
        } else {
            self.shrink
        };
        log::debug!("double tap: animating scale {current} -> {target}");
        self.active = Some(Animation {
            target,
            step,
            focal,
        });
        true
    }

    /// Advances the animation by one frame.
    ///
    /// Returns `true` while more steps are needed. Losing the content stops
    /// the animation.
    pub fn step(&mut self, store: &mut TransformStore, viewport: Size) -> bool {
        let Some(anim) = self.active else {
            return false;
        };
        if store.content().is_none() {
            self.active = None;
            return false;
        }

        store.scale_about(anim.step, anim.focal);
        bounds::correct(store, viewport);

        let current = store.current_scale();
        let growing = anim.step > 1.0;
        if (growing && current < anim.target) || (!growing && current > anim.target) {
            log::trace!("double tap: step to {current}");
            return true;
        }

        store.scale_about(anim.target / current, anim.focal);
        bounds::correct(store, viewport);
        self.active = None;
        log::debug!("double tap: settled at {}", anim.target);
        false
    }

    /// Returns `true` while an animation is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Returns the scale being animated towards, if any.
    #[must_use]
    pub fn target(&self) -> Option<f64> {
        self.active.map(|anim| anim.target)
    }

    /// Abandons any running animation where it is.
    pub fn stop(&mut self) {
        self.active = None;
    }
}
