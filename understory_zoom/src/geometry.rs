// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small geometric helpers shared by the gesture handlers.
//!
//! All transforms handled by this crate are axis-aligned with a uniform scale,
//! so a mapped rectangle is always exactly the bounding box of its corners and
//! the scale can be read straight off the matrix diagonal.

use kurbo::{Affine, Rect, Size, Vec2};

/// Maps `rect` through `transform` and returns the axis-aligned result.
#[must_use]
pub fn map_rect(transform: Affine, rect: Rect) -> Rect {
    transform.transform_rect_bbox(rect)
}

/// Returns the uniform scale component of `transform`.
///
/// Only meaningful for translate + uniform scale transforms, which is all this
/// crate ever produces.
#[must_use]
pub fn uniform_scale(transform: Affine) -> f64 {
    transform.as_coeffs()[0]
}

/// Returns `true` if `delta` is strictly longer than `slop`.
///
/// Compares squared lengths so no square root is needed in `no_std` builds.
#[must_use]
pub fn exceeds_slop(delta: Vec2, slop: f64) -> bool {
    let slop = slop.max(0.0);
    delta.hypot2() > slop * slop
}

/// Per-axis comparison between a mapped content rect and the viewport.
///
/// These flags are always recomputed from the current mapped rect at the point
/// of use; they are never cached between handlers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overflow {
    /// The horizontal axis satisfies the comparison.
    pub x: bool,
    /// The vertical axis satisfies the comparison.
    pub y: bool,
}

impl Overflow {
    /// Axes on which the content is at least as large as the viewport.
    ///
    /// Content may be panned along (and is clamped on) exactly these axes.
    #[must_use]
    pub fn covering(mapped: Rect, viewport: Size) -> Self {
        Self {
            x: mapped.width() >= viewport.width,
            y: mapped.height() >= viewport.height,
        }
    }

    /// Axes on which the content exceeds the viewport by more than `tolerance`.
    #[must_use]
    pub fn exceeding(mapped: Rect, viewport: Size, tolerance: f64) -> Self {
        Self {
            x: mapped.width() - viewport.width > tolerance,
            y: mapped.height() - viewport.height > tolerance,
        }
    }

    /// Returns `true` if either axis is set.
    #[must_use]
    pub fn any(self) -> bool {
        self.x || self.y
    }
}
