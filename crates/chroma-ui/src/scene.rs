use chroma_engine::coords::{Rect, Vec2, Viewport};
use chroma_engine::raster::{Pixmap, RasterError, Rasterizer};
use chroma_engine::scene::DrawList;

use crate::constraints::Constraints;
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Element;

/// Distance the pointer must travel while held before a press becomes a drag.
const DRAG_THRESHOLD: f32 = 4.0;

// ── UiInput ───────────────────────────────────────────────────────────────

/// Snapshot of pointer state for one UI frame.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    /// Current cursor position in logical pixels.
    pub mouse_pos: Vec2,
    /// `true` while the primary button is held down.
    pub mouse_pressed: bool,
}

#[derive(Debug, Clone, Copy, Default)]
struct PressState {
    start: Option<Vec2>,
    dragging: bool,
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Top-level coordinator that owns per-frame resources.
///
/// Each [`frame`](Self::frame) lays out and paints the root into the owned
/// `DrawList`, then turns the pointer snapshot into `UiEvent`s (press, drag,
/// click, drag end) by comparing it with the previous frame.
/// [`render`](Self::render) rasterizes the last frame.
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let mut root: Element = PickerController::new(viewport.rect()).into();
/// ui.frame(&mut root, viewport, &UiInput { mouse_pos, mouse_pressed });
/// let pixmap = ui.render(viewport)?;
/// ```
pub struct UiScene {
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
    pub rasterizer: Rasterizer,
    press: PressState,
}

impl UiScene {
    pub fn new() -> Self {
        Self { draw_list: DrawList::new(), rasterizer: Rasterizer::new(), press: PressState::default() }
    }

    /// Measure, paint, then route this frame's pointer events to `root`.
    ///
    /// The root is borrowed so state (the picker's drag tracking, the preview
    /// color) persists across frames.
    pub fn frame(&mut self, root: &mut Element, viewport: Viewport, input: &UiInput) -> &mut DrawList {
        self.draw_list.clear();

        // ── measure ───────────────────────────────────────────────────────
        let rect = root_rect(root, viewport);

        // ── paint ─────────────────────────────────────────────────────────
        {
            let mut painter = Painter::new(&mut self.draw_list);
            root.paint(&mut painter, rect);
        }

        // ── events ────────────────────────────────────────────────────────
        for event in self.pointer_events(input) {
            let result = root.on_event(&event, rect);
            log::trace!("{event:?} -> {result:?}");
        }

        &mut self.draw_list
    }

    /// Routes a single event (typically a recognized gesture) to `root`.
    pub fn dispatch(&mut self, root: &mut Element, viewport: Viewport, event: &UiEvent) -> EventResult {
        root.on_event(event, root_rect(root, viewport))
    }

    /// Rasterizes the draw list recorded by the last [`frame`](Self::frame).
    pub fn render(&mut self, viewport: Viewport) -> Result<Pixmap, RasterError> {
        self.rasterizer.render_viewport(&mut self.draw_list, viewport)
    }

    fn pointer_events(&mut self, input: &UiInput) -> Vec<UiEvent> {
        let pos = input.mouse_pos;
        let mut events = vec![UiEvent::Hover { pos }];

        match (self.press.start, input.mouse_pressed) {
            (None, true) => {
                self.press = PressState { start: Some(pos), dragging: false };
                events.push(UiEvent::PressStart { pos });
            }
            (Some(start), true) => {
                let d = pos - start;
                if self.press.dragging || d.dot(d) > DRAG_THRESHOLD * DRAG_THRESHOLD {
                    self.press.dragging = true;
                    events.push(UiEvent::Drag { pos, start });
                }
            }
            (Some(start), false) => {
                events.push(if self.press.dragging {
                    UiEvent::DragEnd { pos, start }
                } else {
                    UiEvent::Click { pos }
                });
                self.press = PressState::default();
            }
            (None, false) => {}
        }
        events
    }
}

/// The root is placed at the viewport origin with the size it measures to.
fn root_rect(root: &Element, viewport: Viewport) -> Rect {
    let size = root.measure(Constraints::loose(viewport.size()));
    Rect::from_origin_size(Vec2::zero(), size)
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(x: f32, y: f32, pressed: bool) -> UiInput {
        UiInput { mouse_pos: Vec2::new(x, y), mouse_pressed: pressed }
    }

    fn kinds(events: &[UiEvent]) -> Vec<&'static str> {
        events
            .iter()
            .map(|e| match e {
                UiEvent::Hover { .. } => "hover",
                UiEvent::PressStart { .. } => "press",
                UiEvent::Click { .. } => "click",
                UiEvent::Drag { .. } => "drag",
                UiEvent::DragEnd { .. } => "drag_end",
                UiEvent::Gesture(_) => "gesture",
            })
            .collect()
    }

    #[test]
    fn press_and_release_in_place_clicks() {
        let mut ui = UiScene::new();
        assert_eq!(kinds(&ui.pointer_events(&input(5.0, 5.0, true))), vec!["hover", "press"]);
        assert_eq!(kinds(&ui.pointer_events(&input(6.0, 5.0, true))), vec!["hover"]);
        assert_eq!(kinds(&ui.pointer_events(&input(6.0, 5.0, false))), vec!["hover", "click"]);
    }

    #[test]
    fn moving_while_pressed_drags() {
        let mut ui = UiScene::new();
        ui.pointer_events(&input(0.0, 0.0, true));
        assert_eq!(kinds(&ui.pointer_events(&input(20.0, 0.0, true))), vec!["hover", "drag"]);
        // Once dragging, even small moves keep reporting.
        assert_eq!(kinds(&ui.pointer_events(&input(21.0, 0.0, true))), vec!["hover", "drag"]);
        let end = ui.pointer_events(&input(21.0, 0.0, false));
        assert_eq!(kinds(&end), vec!["hover", "drag_end"]);
        match &end[1] {
            UiEvent::DragEnd { start, .. } => assert_eq!(*start, Vec2::zero()),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn frames_drive_picker_into_preview() {
        use chroma_engine::coords::ColorRgba;

        use crate::controller::PickerController;

        let viewport = Viewport::new(200.0, 300.0);
        let mut ui = UiScene::new();
        let controller = PickerController::new(viewport.rect());
        let preview = controller.preview_handle();
        let mut root: Element = controller.into();

        // Press inside the picker (bottom third), drag off the left edge, release.
        ui.frame(&mut root, viewport, &input(100.0, 250.0, true));
        assert_ne!(preview.get(), ColorRgba::white());
        ui.frame(&mut root, viewport, &input(-20.0, 250.0, true));
        assert_eq!(preview.get(), ColorRgba::black());
        ui.frame(&mut root, viewport, &input(-20.0, 250.0, false));
        assert_eq!(preview.get(), ColorRgba::black());

        let pixmap = ui.render(viewport).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (200, 300));
        // Preview area (top-left, inside the margin) now shows black.
        assert_eq!(pixmap.pixel(50, 50), Some([0, 0, 0, 255]));
    }

    #[test]
    fn root_is_laid_out_at_its_measured_size() {
        use crate::widgets::color_picker::ColorPicker;

        let viewport = Viewport::new(200.0, 300.0);
        let root: Element = ColorPicker::with_reference(Rect::new(0.0, 0.0, 100.0, 300.0)).into();
        let rect = root_rect(&root, viewport);
        assert_eq!(rect.origin, Vec2::zero());
        assert_eq!(rect.size.x, 100.0);
        assert!((rect.size.y - 99.0).abs() < 1e-3);

        let mut ui = UiScene::new();
        let mut root = root;
        ui.frame(&mut root, viewport, &UiInput::default());
        let pixmap = ui.render(viewport).unwrap();
        // Nothing is painted right of the measured width.
        assert_eq!(pixmap.pixel(150, 50), Some([0, 0, 0, 0]));
        assert_eq!(pixmap.pixel(50, 50).map(|px| px[3]), Some(255));
    }

    #[test]
    fn idle_pointer_only_hovers() {
        let mut ui = UiScene::new();
        assert_eq!(kinds(&ui.pointer_events(&input(1.0, 1.0, false))), vec!["hover"]);
    }
}
