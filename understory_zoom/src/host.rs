// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch arbitration with an enclosing horizontally-paging container.
//!
//! While the content is zoomed past the viewport, horizontal drags should pan
//! the content rather than flip pages. The controller asks the host to stop
//! intercepting the current touch sequence on every pointer down and move for
//! as long as that holds.

use kurbo::{Rect, Size};

use crate::geometry::Overflow;

/// The container the zoomable content is embedded in.
pub trait HostContainer {
    /// Returns `true` if the container pages horizontally and may steal
    /// horizontal drags.
    fn is_horizontal_pager(&self) -> bool;

    /// Asks the container not to intercept the current touch sequence.
    fn disallow_intercept(&mut self);
}

/// A host that never competes for touches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Standalone;

impl HostContainer for Standalone {
    fn is_horizontal_pager(&self) -> bool {
        false
    }

    fn disallow_intercept(&mut self) {}
}

/// Returns `true` if the content should keep the touch sequence for itself.
///
/// That is the case when `mapped` exceeds `viewport` by more than `tolerance`
/// on either axis.
#[must_use]
pub fn should_claim_touch(mapped: Rect, viewport: Size, tolerance: f64) -> bool {
    Overflow::exceeding(mapped, viewport, tolerance).any()
}

/// Claims the touch sequence from `host` if it is a pager and the content is
/// zoomed in. Returns `true` if the host was asked.
pub fn resolve<H: HostContainer + ?Sized>(
    host: &mut H,
    mapped: Rect,
    viewport: Size,
    tolerance: f64,
) -> bool {
    if !host.is_horizontal_pager() || !should_claim_touch(mapped, viewport, tolerance) {
        return false;
    }
    host.disallow_intercept();
    true
}
