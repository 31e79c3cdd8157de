// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::animator::{GROW_STEP, SHRINK_STEP};

/// Tunables for a [`ZoomController`](crate::ZoomController).
///
/// All distances are in viewport units (typically device pixels). The
/// defaults match common touch-platform values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Pointer travel before a touch sequence starts panning.
    pub touch_slop: f64,
    /// Total travel below which a release counts as a tap.
    pub paging_touch_slop: f64,
    /// Fraction of the viewport height a vertical drag must exceed to count
    /// as a swipe.
    pub swipe_threshold_fraction: f64,
    /// Per-frame double-tap factor when zooming in.
    pub grow_step: f64,
    /// Per-frame double-tap factor when zooming out.
    pub shrink_step: f64,
    /// Double-tap zoom level relative to the fitted scale.
    pub mid_scale_multiplier: f64,
    /// Maximum zoom level relative to the fitted scale.
    pub max_scale_multiplier: f64,
    /// Cadence at which hosts should call
    /// [`ZoomController::tick`](crate::ZoomController::tick).
    pub frame_interval: Duration,
    /// Overflow below this does not count as zoomed when arbitrating touches
    /// with a host pager.
    pub zoom_tolerance: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            touch_slop: 8.0,
            paging_touch_slop: 16.0,
            swipe_threshold_fraction: 0.4,
            grow_step: GROW_STEP,
            shrink_step: SHRINK_STEP,
            mid_scale_multiplier: 2.0,
            max_scale_multiplier: 4.0,
            frame_interval: Duration::from_millis(16),
            zoom_tolerance: 0.01,
        }
    }
}

impl ZoomConfig {
    /// Sets the drag threshold.
    #[must_use]
    pub fn with_touch_slop(mut self, slop: f64) -> Self {
        self.touch_slop = slop;
        self
    }

    /// Sets the tap threshold.
    #[must_use]
    pub fn with_paging_touch_slop(mut self, slop: f64) -> Self {
        self.paging_touch_slop = slop;
        self
    }

    /// Sets the swipe threshold as a fraction of the viewport height.
    #[must_use]
    pub fn with_swipe_threshold_fraction(mut self, fraction: f64) -> Self {
        self.swipe_threshold_fraction = fraction;
        self
    }

    /// Sets the double-tap step factors.
    #[must_use]
    pub fn with_steps(mut self, grow: f64, shrink: f64) -> Self {
        self.grow_step = grow;
        self.shrink_step = shrink;
        self
    }

    /// Sets the mid and max zoom multipliers.
    #[must_use]
    pub fn with_scale_multipliers(mut self, mid: f64, max: f64) -> Self {
        self.mid_scale_multiplier = mid;
        self.max_scale_multiplier = max;
        self
    }

    /// Sets the animation cadence.
    #[must_use]
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    /// Returns a copy with out-of-range values replaced.
    ///
    /// - Negative or non-finite distances and fractions become their defaults.
    /// - Step factors on the wrong side of `1` become their defaults.
    /// - Multipliers below `1` are raised to `1`, and `max` to at least `mid`.
    #[must_use]
    pub fn normalized(self) -> Self {
        let defaults = Self::default();
        let distance = |v: f64, d: f64| if v.is_finite() && v >= 0.0 { v } else { d };
        let mid = if self.mid_scale_multiplier.is_finite() {
            self.mid_scale_multiplier.max(1.0)
        } else {
            defaults.mid_scale_multiplier
        };
        let max = if self.max_scale_multiplier.is_finite() {
            self.max_scale_multiplier.max(mid)
        } else {
            defaults.max_scale_multiplier.max(mid)
        };
        Self {
            touch_slop: distance(self.touch_slop, defaults.touch_slop),
            paging_touch_slop: distance(self.paging_touch_slop, defaults.paging_touch_slop),
            swipe_threshold_fraction: distance(
                self.swipe_threshold_fraction,
                defaults.swipe_threshold_fraction,
            ),
            grow_step: if self.grow_step.is_finite() && self.grow_step > 1.0 {
                self.grow_step
            } else {
                defaults.grow_step
            },
            shrink_step: if self.shrink_step > 0.0 && self.shrink_step < 1.0 {
                self.shrink_step
            } else {
                defaults.shrink_step
            },
            mid_scale_multiplier: mid,
            max_scale_multiplier: max,
            frame_interval: self.frame_interval,
            zoom_tolerance: distance(self.zoom_tolerance, defaults.zoom_tolerance),
        }
    }
}
