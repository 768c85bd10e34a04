use chroma_engine::coords::{ColorRgba, Rect, Vec2};

use crate::constraints::{inset_rect, Constraints, Edges};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;
use crate::widgets::color_picker::{ColorPicker, SamplingStrategy};
use crate::widgets::swatch::{Swatch, SwatchHandle};

/// Picker + preview screen.
///
/// The picker occupies the bottom third of the root rect; the swatch fills the
/// space above it, inset by `margin`. Every color the picker reports becomes
/// the swatch background.
pub struct PickerController {
    root: Rect,
    margin: f32,
    picker: ColorPicker,
    preview: Swatch,
}

impl PickerController {
    pub fn new(root: Rect) -> Self {
        let preview = Swatch::default();
        let handle = preview.handle();

        let mut picker = ColorPicker::with_reference(root);
        picker.set_delegate(move |color: ColorRgba| handle.set(color));

        Self { root, margin: 16.0, picker, preview }
    }

    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin.max(0.0);
        self
    }

    pub fn sampling(mut self, sampling: SamplingStrategy) -> Self {
        self.picker = self.picker.sampling(sampling);
        self
    }

    #[inline]
    pub fn root(&self) -> Rect {
        self.root
    }

    /// Re-lays out both children for a new root rect.
    pub fn resize(&mut self, root: Rect) {
        self.root = root;
        self.picker.sized_relative_to(root);
    }

    /// Where the picker is drawn and hit-tested.
    pub fn picker_rect(&self) -> Rect {
        self.picker.frame().unwrap_or(self.root)
    }

    /// The area above the picker, inset by the margin.
    pub fn preview_rect(&self) -> Rect {
        let picker = self.picker_rect();
        let above = Rect::new(
            self.root.origin.x,
            self.root.origin.y,
            self.root.size.x,
            (picker.origin.y - self.root.origin.y).max(0.0),
        );
        inset_rect(above, Edges::all(self.margin))
    }

    /// Color currently shown by the preview.
    pub fn preview_color(&self) -> ColorRgba {
        self.preview.color()
    }

    pub fn preview_handle(&self) -> SwatchHandle {
        self.preview.handle()
    }

    pub fn picker(&self) -> &ColorPicker {
        &self.picker
    }
}

impl Widget for PickerController {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        constraints.constrain(self.root.size)
    }

    fn paint(&self, painter: &mut Painter, _rect: Rect) {
        let preview = self.preview_rect();
        if !preview.is_empty() {
            self.preview.paint(painter, preview);
        }
        self.picker.paint(painter, self.picker_rect());
    }

    fn on_event(&mut self, event: &UiEvent, _rect: Rect) -> EventResult {
        let picker_rect = self.picker_rect();
        self.picker.on_event(event, picker_rect)
    }
}
