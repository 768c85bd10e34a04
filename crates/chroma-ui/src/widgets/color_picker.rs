use chroma_engine::coords::{ColorRgba, Rect, Vec2};
use chroma_engine::input::{Gesture, GestureKind, GesturePhase};
use chroma_engine::paint::Color;
use chroma_engine::raster::Rasterizer;
use chroma_engine::scene::DrawList;

use crate::constraints::Constraints;
use crate::event::{EventResult, UiEvent};
use crate::gradients::GradientKind;
use crate::painter::Painter;
use crate::widget::Widget;

/// Share of the reference height the picker takes in [`ColorPicker::sized_relative_to`].
pub const PICKER_HEIGHT_FRACTION: f32 = 0.33;

/// Preferred size when neither a frame nor finite constraints are available.
const FALLBACK_SIZE: Vec2 = Vec2::new(320.0, 160.0);

// ── delegate ──────────────────────────────────────────────────────────────

/// Receives every color the picker resolves.
///
/// Implemented for any `FnMut(ColorRgba)`, so a closure is usually enough:
///
/// ```rust,ignore
/// picker.set_delegate(move |c: ColorRgba| swatch.set(c));
/// ```
pub trait ColorPickerDelegate {
    fn color_changed(&mut self, color: ColorRgba);
}

impl<F: FnMut(ColorRgba)> ColorPickerDelegate for F {
    #[inline]
    fn color_changed(&mut self, color: ColorRgba) {
        self(color)
    }
}

// ── sampling ──────────────────────────────────────────────────────────────

/// How a touch inside the bounds becomes a color.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum SamplingStrategy {
    /// Re-render the picker into a 1×1 target under the touch and read the pixel back.
    #[default]
    Readback,
    /// Evaluate both ramps at the touch point and composite them in floating point.
    Analytic,
}

// ── ColorPicker ───────────────────────────────────────────────────────────

/// Gradient color picker.
///
/// Paints a vertical hue ramp with a horizontal transparency ramp composited
/// over it. Taps and pans inside the bounds report the color under the
/// pointer; once a pan leaves the bounds the report becomes an opaque gray
/// whose level follows the horizontal position (black at the left edge,
/// white at the right edge).
///
/// # Example
/// ```rust,ignore
/// let mut picker = ColorPicker::with_reference(root_rect);
/// picker.set_delegate(|c: ColorRgba| log::info!("picked {c:?}"));
/// ```
pub struct ColorPicker {
    frame: Option<Rect>,
    sampling: SamplingStrategy,
    rasterizer: Rasterizer,
    delegate: Option<Box<dyn ColorPickerDelegate>>,
    /// A pan that began inside the bounds is in progress.
    tracking: bool,
}

impl ColorPicker {
    /// An unsized picker; the parent assigns its rect at paint time, or call
    /// [`set_frame`](Self::set_frame) / [`sized_relative_to`](Self::sized_relative_to).
    pub fn new() -> Self {
        Self {
            frame: None,
            sampling: SamplingStrategy::default(),
            rasterizer: Rasterizer::new(),
            delegate: None,
            tracking: false,
        }
    }

    /// A picker sized against `reference` (see [`sized_relative_to`](Self::sized_relative_to)).
    pub fn with_reference(reference: Rect) -> Self {
        let mut picker = Self::new();
        picker.sized_relative_to(reference);
        picker
    }

    pub fn sampling(mut self, sampling: SamplingStrategy) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn delegate(mut self, delegate: impl ColorPickerDelegate + 'static) -> Self {
        self.set_delegate(delegate);
        self
    }

    /// Installs the listener, replacing any previous one.
    pub fn set_delegate(&mut self, delegate: impl ColorPickerDelegate + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    #[inline]
    pub fn has_delegate(&self) -> bool {
        self.delegate.is_some()
    }

    #[inline]
    pub fn frame(&self) -> Option<Rect> {
        self.frame
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = Some(frame);
    }

    /// Full width of `reference`, [`PICKER_HEIGHT_FRACTION`] of its height,
    /// flush with its bottom edge.
    pub fn sized_relative_to(&mut self, reference: Rect) {
        let height = reference.size.y * PICKER_HEIGHT_FRACTION;
        let frame = Rect::new(
            reference.origin.x,
            reference.origin.y + reference.size.y - height,
            reference.size.x,
            height,
        );
        log::debug!("color picker sized to {frame:?} against {reference:?}");
        self.frame = Some(frame);
    }

    // ── color resolution ──────────────────────────────────────────────────

    /// Resolves `gesture` against `bounds` and notifies the delegate.
    ///
    /// Only `Began`, `Changed` and `Ended` produce a color; other phases are
    /// ignored and return `None`.
    pub fn handle_gesture(&mut self, gesture: &Gesture, bounds: Rect) -> Option<ColorRgba> {
        if !gesture.phase.is_active() {
            log::trace!("color picker ignoring {:?} {:?}", gesture.kind, gesture.phase);
            return None;
        }

        let color = self.color_at(gesture.location, bounds);
        log::debug!(
            "color picker {:?}/{:?} at ({:.1}, {:.1}) -> {color:?}",
            gesture.kind,
            gesture.phase,
            gesture.location.x,
            gesture.location.y,
        );

        if let Some(delegate) = self.delegate.as_mut() {
            delegate.color_changed(color);
        }
        Some(color)
    }

    /// The color a touch at `location` selects, without notifying anyone.
    pub fn color_at(&self, location: Vec2, bounds: Rect) -> ColorRgba {
        if !bounds.contains(location) {
            return edge_gray(location, bounds);
        }
        match self.sampling {
            SamplingStrategy::Readback => self.read_back(location, bounds),
            SamplingStrategy::Analytic => composite_at(location, bounds),
        }
    }

    fn read_back(&self, location: Vec2, bounds: Rect) -> ColorRgba {
        let mut list = DrawList::new();
        {
            let mut painter = Painter::new(&mut list);
            self.paint(&mut painter, bounds);
        }
        match self.rasterizer.sample(&mut list, location) {
            Ok(color) => color,
            Err(e) => {
                log::warn!("color picker readback failed at {location:?}: {e}; using edge gray");
                edge_gray(location, bounds)
            }
        }
    }

    fn owns(&self, gesture: &Gesture, bounds: Rect) -> bool {
        match (gesture.kind, gesture.phase) {
            (_, GesturePhase::Began) | (GestureKind::Tap, _) => bounds.contains(gesture.location),
            _ => self.tracking,
        }
    }
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new()
    }
}

/// Opaque gray at the horizontal fraction of `location` across `bounds`.
fn edge_gray(location: Vec2, bounds: Rect) -> ColorRgba {
    ColorRgba::gray(bounds.fraction_x(location), 1.0)
}

/// Both ramps evaluated at `location` and composited in paint order.
fn composite_at(location: Vec2, bounds: Rect) -> ColorRgba {
    GradientKind::ALL
        .iter()
        .fold(Color::transparent(), |dst, kind| {
            Color::from(kind.gradient(bounds).color_at(location)).over(dst)
        })
        .to_straight()
}

impl Widget for ColorPicker {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let preferred = match self.frame {
            Some(frame) => frame.size,
            None => constraints.max_or(FALLBACK_SIZE),
        };
        constraints.constrain(preferred)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        for kind in GradientKind::ALL {
            painter.fill_gradient(rect, kind.gradient(rect));
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        let gesture = match event {
            UiEvent::Gesture(g) => *g,
            UiEvent::PressStart { pos } => Gesture::pan(GesturePhase::Began, *pos),
            UiEvent::Click { pos } => Gesture::tap(*pos),
            UiEvent::Drag { pos, start } if rect.contains(*start) => {
                Gesture::pan(GesturePhase::Changed, *pos)
            }
            UiEvent::DragEnd { pos, start } if rect.contains(*start) => {
                Gesture::pan(GesturePhase::Ended, *pos)
            }
            _ => return EventResult::Ignored,
        };

        if !self.owns(&gesture, rect) {
            return EventResult::Ignored;
        }
        // Only a live pan keeps ownership; taps and cancelled pans release it.
        self.tracking = gesture.kind == GestureKind::Pan
            && matches!(gesture.phase, GesturePhase::Began | GesturePhase::Changed);

        self.handle_gesture(&gesture, rect);
        EventResult::Consumed
    }
}
