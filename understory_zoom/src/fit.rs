// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Initial fit of content into the viewport.

use kurbo::{Affine, Size};

/// Zoom limits derived from the initial fit.
///
/// Invariant: `0 < init <= mid <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBounds {
    /// Scale at which the content was fitted; also the minimum zoom.
    pub init: f64,
    /// Double-tap target when zooming in.
    pub mid: f64,
    /// Maximum zoom.
    pub max: f64,
}

impl ScaleBounds {
    /// Derives bounds from a fitted scale and the mid/max multipliers.
    ///
    /// Multipliers below `1.0` are raised to `1.0`, and `max` never drops
    /// below `mid`, so the ordering invariant holds for any input.
    #[must_use]
    pub fn from_init(init: f64, mid_multiplier: f64, max_multiplier: f64) -> Self {
        let mid = init * mid_multiplier.max(1.0);
        let max = (init * max_multiplier.max(1.0)).max(mid);
        Self { init, mid, max }
    }

    /// Clamps `scale` into `[init, max]`.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.init, self.max)
    }
}

/// Result of fitting content into a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fit {
    /// Derived zoom limits.
    pub bounds: ScaleBounds,
    /// Transform placing the content centered at `bounds.init`.
    pub transform: Affine,
}

/// Picks the initial scale for `content` inside `viewport`.
///
/// - Fits the width but is taller than the viewport: fit the height, let
///   the width float centered.
/// - Fits the height but is wider than the viewport: fit the width.
/// - Larger or smaller on both axes: uniform fit using the smaller ratio.
///
/// An axis that matches the viewport exactly counts as fitting, so content
/// the size of the viewport keeps its natural size.
///
/// Returns `None` for empty or non-finite sizes.
#[must_use]
pub fn fit_scale(viewport: Size, content: Size) -> Option<f64> {
    if !is_positive(viewport) || !is_positive(content) {
        return None;
    }
    let width_ratio = viewport.width / content.width;
    let height_ratio = viewport.height / content.height;

    let fits_width = content.width <= viewport.width;
    let fits_height = content.height <= viewport.height;

    let scale = match (fits_width, fits_height) {
        (true, false) => height_ratio,
        (false, true) => width_ratio,
        _ => width_ratio.min(height_ratio),
    };
    Some(scale)
}

/// Fits `content` into `viewport`, centering it.
///
/// The content center is first moved onto the viewport center, then the
/// content is scaled about that center.
#[must_use]
pub fn fit_content(
    viewport: Size,
    content: Size,
    mid_multiplier: f64,
    max_multiplier: f64,
) -> Option<Fit> {
    let init = fit_scale(viewport, content)?;
    let view_center = viewport.to_rect().center();
    let content_center = content.to_rect().center();
    let transform = Affine::translate(view_center - content_center)
        .then_scale_about(init, view_center);
    Some(Fit {
        bounds: ScaleBounds::from_init(init, mid_multiplier, max_multiplier),
        transform,
    })
}

fn is_positive(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size};

    use super::{ScaleBounds, fit_content, fit_scale};
    use crate::geometry::{map_rect, uniform_scale};

    const EPS: f64 = 1e-9;

    fn fitted_rect(viewport: Size, content: Size) -> Rect {
        let fit = fit_content(viewport, content, 2.0, 4.0).unwrap();
        map_rect(fit.transform, content.to_rect())
    }

    #[test]
    fn wide_content_in_tall_viewport_fits_width() {
        let viewport = Size::new(1000.0, 2000.0);
        let content = Size::new(2000.0, 1000.0);
        let fit = fit_content(viewport, content, 2.0, 4.0).unwrap();
        assert!((fit.bounds.init - 0.5).abs() < EPS);
        assert!((fit.bounds.mid - 1.0).abs() < EPS);
        assert!((fit.bounds.max - 2.0).abs() < EPS);
        assert!((uniform_scale(fit.transform) - 0.5).abs() < EPS);

        let rect = map_rect(fit.transform, content.to_rect());
        assert!((rect.x0 - 0.0).abs() < EPS);
        assert!((rect.x1 - 1000.0).abs() < EPS);
        assert!((rect.center().y - 1000.0).abs() < EPS);
    }

    #[test]
    fn tall_narrow_content_fits_height_and_stays_centered() {
        let viewport = Size::new(800.0, 600.0);
        let content = Size::new(400.0, 1200.0);
        let rect = fitted_rect(viewport, content);
        assert!((rect.height() - 600.0).abs() < EPS);
        assert!((rect.width() - 200.0).abs() < EPS);
        assert!((rect.center().x - 400.0).abs() < EPS);
    }

    #[test]
    fn both_larger_uses_smaller_ratio() {
        let viewport = Size::new(400.0, 300.0);
        let content = Size::new(1600.0, 600.0);
        assert!((fit_scale(viewport, content).unwrap() - 0.25).abs() < EPS);
        let rect = fitted_rect(viewport, content);
        assert!(rect.width() <= viewport.width + EPS);
        assert!(rect.height() <= viewport.height + EPS);
        assert!((rect.width() - 400.0).abs() < EPS);
    }

    #[test]
    fn both_smaller_scales_up_uniformly() {
        let viewport = Size::new(400.0, 300.0);
        let content = Size::new(100.0, 50.0);
        assert!((fit_scale(viewport, content).unwrap() - 4.0).abs() < EPS);
        let rect = fitted_rect(viewport, content);
        assert!((rect.width() - 400.0).abs() < EPS);
        assert!(rect.height() <= viewport.height + EPS);
        assert!((rect.center().y - 150.0).abs() < EPS);
    }

    #[test]
    fn matching_width_still_fits_height() {
        let viewport = Size::new(400.0, 300.0);
        let content = Size::new(400.0, 900.0);
        let scale = fit_scale(viewport, content).unwrap();
        assert!((scale - 1.0 / 3.0).abs() < EPS);
        let rect = fitted_rect(viewport, content);
        assert!((rect.height() - 300.0).abs() < EPS);
        assert!(rect.width() <= viewport.width + EPS);
        assert!((rect.center().x - 200.0).abs() < EPS);
    }

    #[test]
    fn matching_height_still_fits_width() {
        let viewport = Size::new(400.0, 300.0);
        let content = Size::new(1200.0, 300.0);
        let scale = fit_scale(viewport, content).unwrap();
        assert!((scale - 1.0 / 3.0).abs() < EPS);
        let rect = fitted_rect(viewport, content);
        assert!((rect.width() - 400.0).abs() < EPS);
        assert!(rect.height() <= viewport.height + EPS);
    }

    #[test]
    fn viewport_sized_content_keeps_natural_size() {
        let viewport = Size::new(400.0, 300.0);
        assert!((fit_scale(viewport, viewport).unwrap() - 1.0).abs() < EPS);
        // One axis matching, the other smaller: already fits.
        let content = Size::new(400.0, 100.0);
        assert!((fit_scale(viewport, content).unwrap() - 1.0).abs() < EPS);
    }

    #[test]
    fn degenerate_sizes_do_not_fit() {
        let square = Size::new(10.0, 10.0);
        assert!(fit_scale(Size::ZERO, square).is_none());
        assert!(fit_scale(square, Size::new(0.0, 10.0)).is_none());
        assert!(fit_scale(square, Size::new(-5.0, 10.0)).is_none());
        assert!(fit_scale(Size::new(f64::NAN, 10.0), square).is_none());
    }

    #[test]
    fn bounds_are_ordered() {
        let bounds = ScaleBounds::from_init(0.3, 2.0, 4.0);
        assert!(bounds.init <= bounds.mid && bounds.mid <= bounds.max);

        // Bad multipliers are repaired rather than producing inverted bounds.
        let bounds = ScaleBounds::from_init(0.3, 0.5, 0.1);
        assert!(bounds.init <= bounds.mid && bounds.mid <= bounds.max);
        assert!((bounds.clamp(10.0) - bounds.max).abs() < EPS);
        assert!((bounds.clamp(0.0) - bounds.init).abs() < EPS);
    }
}
