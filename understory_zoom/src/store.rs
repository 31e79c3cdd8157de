// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owner of the content transform.

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::geometry::{map_rect, uniform_scale};

/// Accumulates the translate + uniform scale transform placing content in the
/// viewport.
///
/// Both mutators post-multiply: the new operation is applied after everything
/// already in the transform, in viewport coordinates. Nothing here validates
/// its arguments; callers clamp factors and run boundary correction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformStore {
    transform: Affine,
    content: Option<Size>,
}

impl TransformStore {
    /// Creates an identity store with no content.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Replaces the whole transform, as done by the initial fit.
    pub fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    /// Returns the intrinsic content size, if content is set.
    #[must_use]
    pub fn content(&self) -> Option<Size> {
        self.content
    }

    /// Sets or clears the intrinsic content size.
    pub fn set_content(&mut self, content: Option<Size>) {
        self.content = content;
    }

    /// Scales by `factor` about `focal`, in viewport coordinates.
    pub fn scale_about(&mut self, factor: f64, focal: Point) {
        self.transform = self.transform.then_scale_about(factor, focal);
    }

    /// Translates by `delta`, in viewport coordinates.
    pub fn translate_by(&mut self, delta: Vec2) {
        self.transform = self.transform.then_translate(delta);
    }

    /// Returns the uniform scale of the transform.
    #[must_use]
    pub fn current_scale(&self) -> f64 {
        uniform_scale(self.transform)
    }

    /// Returns the content rect mapped into the viewport, or [`Rect::ZERO`]
    /// when there is no content.
    #[must_use]
    pub fn mapped_content_rect(&self) -> Rect {
        match self.content {
            Some(size) => map_rect(self.transform, size.to_rect()),
            None => Rect::ZERO,
        }
    }

    /// Restores the identity transform and drops the content.
    pub fn reset(&mut self) {
        self.transform = Affine::IDENTITY;
        self.content = None;
    }
}
