// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary correction after every transform mutation.
//!
//! Each axis is handled independently:
//! - content at least as large as the viewport never leaves a gap at either
//!   edge;
//! - content smaller than the viewport is centered exactly, overriding any
//!   pending pan on that axis.

use kurbo::{Rect, Size, Vec2};

use crate::store::TransformStore;

/// Computes the translation that brings `mapped` back into its allowed
/// position inside a viewport of size `viewport`.
///
/// Returns [`Vec2::ZERO`] when `mapped` is already in bounds.
#[must_use]
pub fn correction(mapped: Rect, viewport: Size) -> Vec2 {
    Vec2::new(
        axis_correction(mapped.x0, mapped.x1, viewport.width),
        axis_correction(mapped.y0, mapped.y1, viewport.height),
    )
}

fn axis_correction(lead: f64, trail: f64, extent: f64) -> f64 {
    let size = trail - lead;
    if size < extent {
        return extent / 2.0 - (lead + size / 2.0);
    }
    // A gap at the trailing edge wins over one at the leading edge; both can
    // only occur together if `size < extent`, handled above.
    let mut delta = 0.0;
    if lead > 0.0 {
        delta = -lead;
    }
    if trail < extent {
        delta = extent - trail;
    }
    delta
}

/// Applies [`correction`] to `store` as a single translation.
///
/// Does nothing when no content is set.
pub fn correct(store: &mut TransformStore, viewport: Size) {
    if store.content().is_none() {
        return;
    }
    let delta = correction(store.mapped_content_rect(), viewport);
    if delta != Vec2::ZERO {
        store.translate_by(delta);
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::{correct, correction};
    use crate::store::TransformStore;

    const VIEWPORT: Size = Size::new(100.0, 200.0);

    #[test]
    fn in_bounds_rect_needs_no_correction() {
        let mapped = Rect::new(-50.0, -20.0, 150.0, 300.0);
        assert_eq!(correction(mapped, VIEWPORT), Vec2::ZERO);
    }

    #[test]
    fn leading_gap_is_closed() {
        let mapped = Rect::new(10.0, 30.0, 310.0, 430.0);
        assert_eq!(correction(mapped, VIEWPORT), Vec2::new(-10.0, -30.0));
    }

    #[test]
    fn trailing_gap_is_closed() {
        let mapped = Rect::new(-300.0, -400.0, 90.0, 150.0);
        assert_eq!(correction(mapped, VIEWPORT), Vec2::new(10.0, 50.0));
    }

    #[test]
    fn small_content_is_centered_per_axis() {
        // Narrow but tall: centered horizontally, clamped vertically.
        let mapped = Rect::new(70.0, 5.0, 90.0, 405.0);
        let delta = correction(mapped, VIEWPORT);
        assert_eq!(delta, Vec2::new(-30.0, -5.0));
        let fixed = mapped + delta;
        assert!((fixed.center().x - 50.0).abs() < 1e-12);
        assert!((fixed.y0 - 0.0).abs() < 1e-12);
    }

    #[test]
    fn correcting_is_idempotent() {
        let mut store = TransformStore::new();
        store.set_content(Some(Size::new(80.0, 500.0)));
        store.scale_about(1.7, Point::new(90.0, 10.0));
        store.translate_by(Vec2::new(400.0, -900.0));

        correct(&mut store, VIEWPORT);
        let once = store.transform().as_coeffs();
        correct(&mut store, VIEWPORT);
        let twice = store.transform().as_coeffs();
        for (a, b) in once.iter().zip(twice.iter()) {
            assert!((a - b).abs() < 1e-9, "second pass moved the content");
        }
        let mapped = store.mapped_content_rect();
        assert!(mapped.x0 <= 1e-9 && mapped.x1 >= VIEWPORT.width - 1e-9);
        assert!(mapped.y0 <= 1e-9 && mapped.y1 >= VIEWPORT.height - 1e-9);
    }

    #[test]
    fn empty_store_is_left_alone() {
        let mut store = TransformStore::new();
        store.translate_by(Vec2::new(7.0, 7.0));
        correct(&mut store, VIEWPORT);
        assert_eq!(store.transform().translation(), Vec2::new(7.0, 7.0));
    }
}
