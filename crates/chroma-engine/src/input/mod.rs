//! Input subsystem.
//!
//! Public API is platform-agnostic. Hosts translate their pointer events into
//! [`PointerEvent`]s; [`GestureRecognizer`] turns those into tap/pan [`Gesture`]s.

mod gesture;
mod recognizer;

pub use gesture::{Gesture, GestureKind, GesturePhase};
pub use recognizer::{GestureRecognizer, PointerEvent};
