//! Chroma UI: retained widgets on top of `chroma-engine`.
//!
//! The centerpiece is [`ColorPicker`](widgets::color_picker::ColorPicker), a
//! gradient picker that reports the color under a tap or pan to a
//! [`ColorPickerDelegate`](widgets::color_picker::ColorPickerDelegate).
//! [`PickerController`](controller::PickerController) wires it to a preview
//! [`Swatch`](widgets::swatch::Swatch).
//!
//! # Quick start
//!
//! ```rust,ignore
//! use chroma_ui::prelude::*;
//!
//! let viewport = Viewport::new(375.0, 667.0);
//! let mut ui = UiScene::new();
//! let mut root: Element = PickerController::new(viewport.rect()).into();
//!
//! // Per frame:
//! ui.frame(&mut root, viewport, &UiInput { mouse_pos, mouse_pressed });
//! let pixmap = ui.render(viewport)?;
//! ```

pub mod constraints;
pub mod controller;
pub mod event;
pub mod gradients;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything needed to build and extend the UI.
pub mod prelude {
    pub use crate::constraints::{Constraints, Edges};
    pub use crate::controller::PickerController;
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::gradients::GradientKind;
    pub use crate::painter::Painter;
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        color_picker::{ColorPicker, ColorPickerDelegate, SamplingStrategy, PICKER_HEIGHT_FRACTION},
        swatch::{Swatch, SwatchHandle},
    };

    // Re-export the engine primitives everyone needs.
    pub use chroma_engine::coords::{ColorRgba, Rect, Vec2, Viewport};
    pub use chroma_engine::input::{Gesture, GestureKind, GesturePhase, GestureRecognizer, PointerEvent};
    pub use chroma_engine::paint::{Color, ColorStop, LinearGradient, Paint};
}
