// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Release-time classification of a touch sequence into navigation events.

use kurbo::Vec2;

/// Navigation request produced when a touch sequence ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavigationEvent {
    /// The pointer barely moved.
    Tap,
    /// A downward swipe: go to the previous item.
    SwipePrev,
    /// An upward swipe: go to the next item.
    SwipeNext,
}

/// Distances used by [`classify`], in viewport units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    /// Movement below this on both axes is a tap.
    pub tap: f64,
    /// Vertical movement above this is a swipe.
    pub swipe: f64,
}

/// Classifies the total displacement of a touch sequence.
///
/// - Both `|dx|` and `|dy|` below `tap`: [`NavigationEvent::Tap`].
/// - Otherwise, `|dy|` above `swipe`: [`NavigationEvent::SwipePrev`] when
///   dragging down, [`NavigationEvent::SwipeNext`] when dragging up.
/// - Anything else is ambiguous and produces nothing.
#[must_use]
pub fn classify(displacement: Vec2, thresholds: Thresholds) -> Option<NavigationEvent> {
    let tap = thresholds.tap.abs();
    let (dx, dy) = (displacement.x.abs(), displacement.y.abs());
    if dx < tap && dy < tap {
        return Some(NavigationEvent::Tap);
    }
    if dy > thresholds.swipe {
        return Some(if displacement.y > 0.0 {
            NavigationEvent::SwipePrev
        } else {
            NavigationEvent::SwipeNext
        });
    }
    None
}
