// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw pointer input and per-sequence bookkeeping.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// Identifier the host assigns to a pointer for the duration of a contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// Lifecycle phase of a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// The pointer made contact.
    Down,
    /// The pointer moved while in contact.
    Move,
    /// The pointer lifted.
    Up,
    /// The platform aborted the whole touch sequence.
    Cancel,
}

/// One raw pointer event in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Which pointer this event is about.
    pub id: PointerId,
    /// Pointer position.
    pub position: Point,
    /// What happened.
    pub phase: PointerPhase,
}

impl PointerEvent {
    /// Creates an event.
    #[must_use]
    pub fn new(id: u64, position: impl Into<Point>, phase: PointerPhase) -> Self {
        Self {
            id: PointerId(id),
            position: position.into(),
            phase,
        }
    }

    /// Shorthand for a [`PointerPhase::Down`] event.
    #[must_use]
    pub fn down(id: u64, position: impl Into<Point>) -> Self {
        Self::new(id, position, PointerPhase::Down)
    }

    /// Shorthand for a [`PointerPhase::Move`] event.
    #[must_use]
    pub fn moved(id: u64, position: impl Into<Point>) -> Self {
        Self::new(id, position, PointerPhase::Move)
    }

    /// Shorthand for a [`PointerPhase::Up`] event.
    #[must_use]
    pub fn up(id: u64, position: impl Into<Point>) -> Self {
        Self::new(id, position, PointerPhase::Up)
    }

    /// Shorthand for a [`PointerPhase::Cancel`] event.
    #[must_use]
    pub fn cancel(id: u64) -> Self {
        Self::new(id, Point::ZERO, PointerPhase::Cancel)
    }
}

/// Pointers currently in contact, in the order they went down.
#[derive(Clone, Debug, Default)]
pub(crate) struct ActivePointers {
    pointers: SmallVec<[(PointerId, Point); 4]>,
}

impl ActivePointers {
    pub(crate) fn press(&mut self, id: PointerId, position: Point) {
        match self.pointers.iter_mut().find(|(p, _)| *p == id) {
            // A repeated down for a known pointer just moves it.
            Some((_, pos)) => *pos = position,
            None => self.pointers.push((id, position)),
        }
    }

    /// Returns `false` for pointers that never went down.
    pub(crate) fn move_to(&mut self, id: PointerId, position: Point) -> bool {
        match self.pointers.iter_mut().find(|(p, _)| *p == id) {
            Some((_, pos)) => {
                *pos = position;
                true
            }
            None => false,
        }
    }

    pub(crate) fn release(&mut self, id: PointerId) -> bool {
        let before = self.pointers.len();
        self.pointers.retain(|(p, _)| *p != id);
        self.pointers.len() != before
    }

    pub(crate) fn centroid(&self) -> Option<Point> {
        if self.pointers.is_empty() {
            return None;
        }
        let sum = self
            .pointers
            .iter()
            .fold(Vec2::ZERO, |acc, (_, p)| acc + p.to_vec2());
        #[allow(clippy::cast_precision_loss, reason = "pointer counts are tiny")]
        let n = self.pointers.len() as f64;
        Some((sum / n).to_point())
    }

    pub(crate) fn len(&self) -> usize {
        self.pointers.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.pointers.clear();
    }
}

/// Bookkeeping for one touch sequence, from the first down to the last up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct GestureSession {
    /// The pointer that started the sequence; its travel is what gets
    /// classified on release.
    pub(crate) primary: PointerId,
    pub(crate) down: Point,
    pub(crate) displacement: Vec2,
}

impl GestureSession {
    pub(crate) fn new(primary: PointerId, down: Point) -> Self {
        Self {
            primary,
            down,
            displacement: Vec2::ZERO,
        }
    }

    /// Records the primary pointer's latest position; other pointers are
    /// ignored.
    pub(crate) fn observe(&mut self, id: PointerId, position: Point) {
        if id == self.primary {
            self.displacement = position - self.down;
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{ActivePointers, GestureSession, PointerId};

    #[test]
    fn centroid_tracks_all_pointers() {
        let mut pointers = ActivePointers::default();
        assert_eq!(pointers.centroid(), None);

        pointers.press(PointerId(1), Point::new(0.0, 0.0));
        pointers.press(PointerId(2), Point::new(10.0, 20.0));
        assert_eq!(pointers.centroid(), Some(Point::new(5.0, 10.0)));
        assert_eq!(pointers.len(), 2);

        assert!(pointers.move_to(PointerId(2), Point::new(20.0, 0.0)));
        assert!(!pointers.move_to(PointerId(9), Point::new(20.0, 0.0)));
        assert_eq!(pointers.centroid(), Some(Point::new(10.0, 0.0)));

        assert!(pointers.release(PointerId(1)));
        assert!(!pointers.release(PointerId(1)));
        assert_eq!(pointers.centroid(), Some(Point::new(20.0, 0.0)));

        pointers.clear();
        assert!(pointers.is_empty());
    }

    #[test]
    fn repeated_down_does_not_duplicate() {
        let mut pointers = ActivePointers::default();
        pointers.press(PointerId(1), Point::new(0.0, 0.0));
        pointers.press(PointerId(1), Point::new(4.0, 4.0));
        assert_eq!(pointers.len(), 1);
        assert_eq!(pointers.centroid(), Some(Point::new(4.0, 4.0)));
    }

    #[test]
    fn session_follows_primary_only() {
        let mut session = GestureSession::new(PointerId(1), Point::new(10.0, 10.0));
        session.observe(PointerId(2), Point::new(500.0, 500.0));
        assert_eq!(session.displacement, Vec2::ZERO);
        session.observe(PointerId(1), Point::new(15.0, -20.0));
        assert_eq!(session.displacement, Vec2::new(5.0, -30.0));
    }
}
