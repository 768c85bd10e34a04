use chroma_engine::coords::Vec2;
use chroma_engine::input::Gesture;

/// Input events routed through the widget tree.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Mouse moved to `pos` (fired every frame).
    Hover { pos: Vec2 },
    /// Primary button went down at `pos`.
    PressStart { pos: Vec2 },
    /// Primary button pressed and released at `pos` without dragging.
    Click { pos: Vec2 },
    /// Mouse moved while the primary button is held.
    /// `pos` is the current cursor position; `start` is where the drag began.
    Drag { pos: Vec2, start: Vec2 },
    /// Primary button released after a drag.
    ///
    /// Fires even when `pos` is outside the widget; use `rect.contains(start)`
    /// to check ownership of the drag.
    DragEnd { pos: Vec2, start: Vec2 },
    /// A gesture produced by `chroma_engine::input::GestureRecognizer`,
    /// delivered as-is.
    Gesture(Gesture),
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing to siblings / parents.
    Consumed,
    /// Event was not handled; keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
