//! Single-finger pan recognition for the selector.
//!
//! [`PanResponder`] turns raw pointer events into four outcomes: nothing yet,
//! a tap (the gesture never left the deadzone), activation (the finger moved
//! far enough to become a drag), and the end of an active drag, either
//! released by the user or terminated by the platform. The end outcomes carry
//! a [`GestureState`] with net displacement and release velocity, which
//! [`classify_swipe`] maps to a discrete direction.

use selector_core::*;
use smallvec::SmallVec;
use web_time::Instant;

/// Movement (px, either axis) a touch must exceed before it counts as a drag.
pub const ACTIVATION_SLOP: f32 = 5.0;
/// Minimum horizontal release speed for a swipe, in px per millisecond.
pub const SWIPE_MIN_VELOCITY: f32 = 0.1;
/// Vertical displacement (px) at or beyond which a gesture is not a swipe.
pub const SWIPE_MAX_VERTICAL: f32 = 80.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Accumulated state of the current gesture.
///
/// `dx`/`dy` are measured from where the first finger went down; `vx`/`vy`
/// are px/ms between the two most recent samples of that finger.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureState {
    pub x0: f32,
    pub y0: f32,
    pub dx: f32,
    pub dy: f32,
    pub vx: f32,
    pub vy: f32,
    pub touch_count: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutcome {
    None,
    Tap(Vec2),
    Activated,
    Released(GestureState),
    Terminated(GestureState),
}

/// Exactly one finger down, and it has left the deadzone on either axis.
pub fn should_activate(touch_count: usize, dx: f32, dy: f32) -> bool {
    touch_count == 1 && !(dx.abs() < ACTIVATION_SLOP && dy.abs() < ACTIVATION_SLOP)
}

/// Horizontal flick classification. `None` means "not a swipe".
pub fn classify_swipe(dx: f32, dy: f32, vx: f32) -> Option<SwipeDirection> {
    if vx.abs() > SWIPE_MIN_VELOCITY && dy.abs() < SWIPE_MAX_VERTICAL {
        Some(if dx > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        })
    } else {
        None
    }
}

impl GestureState {
    pub fn swipe_direction(&self) -> Option<SwipeDirection> {
        classify_swipe(self.dx, self.dy, self.vx)
    }
}

#[derive(Default)]
pub struct PanResponder {
    touches: SmallVec<[(PointerId, Vec2); 4]>,
    primary: Option<PointerId>,
    last_sample: Option<(Vec2, Instant)>,
    state: GestureState,
    active: bool,
    multi_touch: bool,
}

impl PanResponder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn handle_pointer(&mut self, ev: &PointerEvent) -> GestureOutcome {
        match ev.event {
            PointerEventKind::Down => self.on_down(ev),
            PointerEventKind::Move => self.on_move(ev),
            PointerEventKind::Up => self.on_up(ev),
            PointerEventKind::Cancel => self.on_cancel(ev),
        }
    }

    fn on_down(&mut self, ev: &PointerEvent) -> GestureOutcome {
        if self.touches.iter().any(|(id, _)| *id == ev.id) {
            return GestureOutcome::None;
        }
        self.touches.push((ev.id, ev.position));
        if self.touches.len() == 1 {
            self.primary = Some(ev.id);
            self.last_sample = Some((ev.position, ev.timestamp));
            self.state = GestureState {
                x0: ev.position.x,
                y0: ev.position.y,
                ..GestureState::default()
            };
            self.active = false;
            self.multi_touch = false;
        } else {
            self.multi_touch = true;
        }
        self.state.touch_count = self.touches.len();

        if !self.active && should_activate(self.state.touch_count, self.state.dx, self.state.dy) {
            self.active = true;
            return GestureOutcome::Activated;
        }
        GestureOutcome::None
    }

    fn on_move(&mut self, ev: &PointerEvent) -> GestureOutcome {
        let Some(slot) = self.touches.iter_mut().find(|(id, _)| *id == ev.id) else {
            return GestureOutcome::None;
        };
        slot.1 = ev.position;

        if self.primary == Some(ev.id) {
            self.track(ev.position, ev.timestamp);
        }

        if !self.active && should_activate(self.touches.len(), self.state.dx, self.state.dy) {
            self.active = true;
            log::trace!(
                "pan responder activated at dx={} dy={}",
                self.state.dx,
                self.state.dy
            );
            return GestureOutcome::Activated;
        }
        GestureOutcome::None
    }

    fn on_up(&mut self, ev: &PointerEvent) -> GestureOutcome {
        let Some(pos) = self.touches.iter().position(|(id, _)| *id == ev.id) else {
            return GestureOutcome::None;
        };
        self.touches.remove(pos);
        if self.primary == Some(ev.id) {
            self.track(ev.position, ev.timestamp);
        }
        if !self.touches.is_empty() {
            return GestureOutcome::None;
        }

        let outcome = if self.active {
            GestureOutcome::Released(self.state)
        } else if !self.multi_touch && self.primary == Some(ev.id) {
            GestureOutcome::Tap(ev.position)
        } else {
            GestureOutcome::None
        };
        self.reset();
        outcome
    }

    fn on_cancel(&mut self, ev: &PointerEvent) -> GestureOutcome {
        if !self.touches.iter().any(|(id, _)| *id == ev.id) {
            return GestureOutcome::None;
        }
        let outcome = if self.active {
            GestureOutcome::Terminated(self.state)
        } else {
            GestureOutcome::None
        };
        self.reset();
        outcome
    }

    fn track(&mut self, p: Vec2, t: Instant) {
        self.state.dx = p.x - self.state.x0;
        self.state.dy = p.y - self.state.y0;
        if let Some((last_p, last_t)) = self.last_sample {
            let dt_ms = t.saturating_duration_since(last_t).as_secs_f32() * 1000.0;
            if dt_ms > 0.0 {
                self.state.vx = (p.x - last_p.x) / dt_ms;
                self.state.vy = (p.y - last_p.y) / dt_ms;
            }
        }
        self.last_sample = Some((p, t));
    }

    fn reset(&mut self) {
        self.touches.clear();
        self.primary = None;
        self.last_sample = None;
        self.active = false;
        self.multi_touch = false;
        self.state.touch_count = 0;
    }
}
