use crate::coords::Vec2;

use super::gesture::{Gesture, GesturePhase};

/// Raw single-pointer input, in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
    Pressed { pos: Vec2 },
    Moved { pos: Vec2 },
    Released { pos: Vec2 },
    /// The platform took the pointer away (focus loss, second touch, ...).
    Cancelled,
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum Tracking {
    Idle,
    Pressed { start: Vec2, last: Vec2 },
    Panning { last: Vec2 },
}

/// Turns a raw pointer stream into tap and pan gestures.
///
/// A press that is released within `slop` logical pixels of where it started is
/// a tap. Moving further than `slop` while held starts a pan, which then reports
/// every move until release.
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    slop: f32,
    tracking: Tracking,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SLOP)
    }
}

impl GestureRecognizer {
    pub const DEFAULT_SLOP: f32 = 4.0;

    pub fn new(slop: f32) -> Self {
        Self { slop: slop.max(0.0), tracking: Tracking::Idle }
    }

    /// True while a press or pan is in progress.
    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.tracking != Tracking::Idle
    }

    /// Feeds one pointer event; returns the gesture update it produced, if any.
    pub fn handle(&mut self, event: PointerEvent) -> Option<Gesture> {
        match (self.tracking, event) {
            (_, PointerEvent::Pressed { pos }) => {
                // A press while tracking means we missed a release; start over.
                self.tracking = Tracking::Pressed { start: pos, last: pos };
                None
            }

            (Tracking::Pressed { start, .. }, PointerEvent::Moved { pos }) => {
                let d = pos - start;
                if d.dot(d) > self.slop * self.slop {
                    self.tracking = Tracking::Panning { last: pos };
                    Some(Gesture::pan(GesturePhase::Began, pos))
                } else {
                    self.tracking = Tracking::Pressed { start, last: pos };
                    None
                }
            }
            (Tracking::Panning { .. }, PointerEvent::Moved { pos }) => {
                self.tracking = Tracking::Panning { last: pos };
                Some(Gesture::pan(GesturePhase::Changed, pos))
            }
            (Tracking::Idle, PointerEvent::Moved { .. }) => None,

            (Tracking::Pressed { .. }, PointerEvent::Released { pos }) => {
                self.tracking = Tracking::Idle;
                Some(Gesture::tap(pos))
            }
            (Tracking::Panning { .. }, PointerEvent::Released { pos }) => {
                self.tracking = Tracking::Idle;
                Some(Gesture::pan(GesturePhase::Ended, pos))
            }
            (Tracking::Idle, PointerEvent::Released { .. }) => None,

            (Tracking::Pressed { last, .. }, PointerEvent::Cancelled) => {
                self.tracking = Tracking::Idle;
                Some(Gesture::new(super::GestureKind::Tap, GesturePhase::Failed, last))
            }
            (Tracking::Panning { last }, PointerEvent::Cancelled) => {
                self.tracking = Tracking::Idle;
                Some(Gesture::pan(GesturePhase::Cancelled, last))
            }
            (Tracking::Idle, PointerEvent::Cancelled) => None,
        }
    }
}
