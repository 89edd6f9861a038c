use web_time::Instant;

use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    /// The platform took the pointer away (system gesture, scroll parent...).
    Cancel,
}

/// One pointer sample, in the widget's local coordinates.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub event: PointerEventKind,
    pub position: Vec2,
    pub timestamp: Instant,
}

impl PointerEvent {
    pub fn touch(id: u64, event: PointerEventKind, position: Vec2, timestamp: Instant) -> Self {
        Self {
            id: PointerId(id),
            event,
            position,
            timestamp,
        }
    }
}
