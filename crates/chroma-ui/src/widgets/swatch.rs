use std::cell::Cell;
use std::rc::Rc;

use chroma_engine::coords::{ColorRgba, Rect, Vec2};
use chroma_engine::paint::Color;

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::Widget;

/// Shared, single-threaded handle to a swatch's background color.
///
/// Clones point at the same color, so a picker delegate can hold one while the
/// swatch paints from another.
#[derive(Debug, Clone, Default)]
pub struct SwatchHandle(Rc<Cell<ColorRgba>>);

impl SwatchHandle {
    pub fn new(color: ColorRgba) -> Self {
        Self(Rc::new(Cell::new(color)))
    }

    #[inline]
    pub fn get(&self) -> ColorRgba {
        self.0.get()
    }

    #[inline]
    pub fn set(&self, color: ColorRgba) {
        self.0.set(color.clamped());
    }
}

/// Flat color preview.
///
/// ```rust,ignore
/// let swatch = Swatch::new(ColorRgba::white());
/// let handle = swatch.handle();
/// picker.set_delegate(move |c: ColorRgba| handle.set(c));
/// ```
pub struct Swatch {
    color: SwatchHandle,
    /// Drawn under the color so translucent picks stay visible.
    backdrop: Option<ColorRgba>,
}

impl Swatch {
    pub fn new(initial: ColorRgba) -> Self {
        Self { color: SwatchHandle::new(initial), backdrop: None }
    }

    pub fn backdrop(mut self, color: ColorRgba) -> Self {
        self.backdrop = Some(color);
        self
    }

    /// Another handle to this swatch's color.
    pub fn handle(&self) -> SwatchHandle {
        self.color.clone()
    }

    #[inline]
    pub fn color(&self) -> ColorRgba {
        self.color.get()
    }
}

impl Default for Swatch {
    fn default() -> Self {
        Self::new(ColorRgba::white())
    }
}

impl Widget for Swatch {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        constraints.constrain(constraints.max_or(Vec2::new(64.0, 64.0)))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        if let Some(backdrop) = self.backdrop {
            painter.fill_rect(rect, Color::from(backdrop));
        }
        painter.fill_rect(rect, Color::from(self.color.get()));
    }
}

#[cfg(test)]
mod tests {
    use chroma_engine::coords::Viewport;
    use chroma_engine::raster::Rasterizer;
    use chroma_engine::scene::DrawList;

    use super::*;

    #[test]
    fn handles_share_color() {
        let swatch = Swatch::default();
        let handle = swatch.handle();
        handle.set(ColorRgba::new(0.1, 0.2, 0.3, 1.0));
        assert_eq!(swatch.color(), ColorRgba::new(0.1, 0.2, 0.3, 1.0));
    }

    #[test]
    fn set_clamps_channels() {
        let handle = SwatchHandle::new(ColorRgba::black());
        handle.set(ColorRgba::new(2.0, -1.0, 0.5, 1.0));
        assert_eq!(handle.get(), ColorRgba::new(1.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn paints_current_color() {
        let swatch = Swatch::default();
        swatch.handle().set(ColorRgba::new(0.0, 0.0, 1.0, 1.0));
        let mut list = DrawList::new();
        {
            let mut painter = Painter::new(&mut list);
            swatch.paint(&mut painter, Rect::new(0.0, 0.0, 2.0, 2.0));
        }
        let pm = Rasterizer::new().render_viewport(&mut list, Viewport::new(2.0, 2.0)).unwrap();
        assert_eq!(pm.pixel(1, 1), Some([0, 0, 255, 255]));
    }

    #[test]
    fn backdrop_shows_through_translucent_color() {
        let swatch = Swatch::new(ColorRgba::new(0.0, 0.0, 0.0, 0.5)).backdrop(ColorRgba::white());
        let mut list = DrawList::new();
        {
            let mut painter = Painter::new(&mut list);
            swatch.paint(&mut painter, Rect::new(0.0, 0.0, 1.0, 1.0));
        }
        let pm = Rasterizer::new().render_viewport(&mut list, Viewport::new(1.0, 1.0)).unwrap();
        assert_eq!(pm.pixel(0, 0), Some([128, 128, 128, 255]));
    }
}
