use crate::coords::Vec2;

/// Single-point gesture family.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GestureKind {
    /// Press and release without moving past the slop distance.
    Tap,
    /// Press, move, release.
    Pan,
}

/// Lifecycle phase of a gesture.
///
/// A tap only ever reports `Ended` (or `Failed`); a pan reports
/// `Began`, any number of `Changed`, then `Ended` or `Cancelled`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GesturePhase {
    Possible,
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

impl GesturePhase {
    /// Phases that carry a meaningful location for the receiving widget.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, GesturePhase::Began | GesturePhase::Changed | GesturePhase::Ended)
    }
}

/// A recognized gesture update at `location` (logical pixels, root space).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Gesture {
    pub kind: GestureKind,
    pub phase: GesturePhase,
    pub location: Vec2,
}

impl Gesture {
    #[inline]
    pub const fn new(kind: GestureKind, phase: GesturePhase, location: Vec2) -> Self {
        Self { kind, phase, location }
    }

    /// A completed tap.
    #[inline]
    pub const fn tap(location: Vec2) -> Self {
        Self::new(GestureKind::Tap, GesturePhase::Ended, location)
    }

    #[inline]
    pub const fn pan(phase: GesturePhase, location: Vec2) -> Self {
        Self::new(GestureKind::Pan, phase, location)
    }
}
