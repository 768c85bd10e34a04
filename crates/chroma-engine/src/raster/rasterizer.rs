use crate::coords::{ColorRgba, Rect, Vec2, Viewport};
use crate::paint::{Color, Paint};
use crate::scene::shapes::rect::RectCmd;
use crate::scene::{DrawCmd, DrawList};

use super::{Pixmap, RasterError};

/// Replays a [`DrawList`] into a [`Pixmap`] on the CPU.
///
/// Coverage is point-sampled at pixel centers (no anti-aliasing); every covered
/// pixel is composited with premultiplied source-over in paint order.
#[derive(Debug, Clone)]
pub struct Rasterizer {
    /// Color the target is cleared to before replaying a draw list.
    pub background: Color,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self { background: Color::transparent() }
    }
}

impl Rasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears `target` and draws `draw_list` into it.
    ///
    /// `offset` is the logical position of the target's top-left corner; pixel
    /// `(x, y)` is shaded at `(x + 0.5, y + 0.5) + offset`.
    pub fn render(
        &self,
        draw_list: &mut DrawList,
        target: &mut Pixmap,
        offset: Vec2,
    ) -> Result<(), RasterError> {
        target.fill(self.background);

        for item in draw_list.iter_in_paint_order() {
            match &item.cmd {
                DrawCmd::Rect(cmd) => fill_rect(target, cmd, item.clip_rect, offset)?,
            }
        }
        Ok(())
    }

    /// Allocates a pixmap covering `viewport` and renders into it.
    pub fn render_viewport(
        &self,
        draw_list: &mut DrawList,
        viewport: Viewport,
    ) -> Result<Pixmap, RasterError> {
        let (width, height) = viewport.pixel_size();
        let mut target = Pixmap::new(width, height)?;
        self.render(draw_list, &mut target, Vec2::zero())?;
        Ok(target)
    }

    /// Renders `draw_list` into a 1×1 target centered on `point` and reads the
    /// composited color back (straight alpha).
    ///
    /// The single pixel is shaded exactly at `point`, so sampling at a pixel
    /// center reproduces that pixel of a full render. The target lives only for
    /// the duration of this call.
    pub fn sample(&self, draw_list: &mut DrawList, point: Vec2) -> Result<ColorRgba, RasterError> {
        let mut target = Pixmap::new(1, 1)?;
        self.render(draw_list, &mut target, point - Vec2::new(0.5, 0.5))?;
        Ok(target.pixel_color(0, 0).unwrap_or_default())
    }
}

fn fill_rect(
    target: &mut Pixmap,
    cmd: &RectCmd,
    clip: Option<Rect>,
    offset: Vec2,
) -> Result<(), RasterError> {
    if let Paint::LinearGradient(g) = &cmd.paint {
        g.validate()?;
    }

    let mut rect = cmd.rect.normalized();
    if let Some(clip) = clip {
        match rect.intersect(clip) {
            Some(r) => rect = r,
            None => return Ok(()),
        }
    }
    if rect.is_empty() || !rect.is_finite() {
        return Ok(());
    }

    let max = rect.max();
    let (x0, x1) = pixel_span(rect.origin.x - offset.x, max.x - offset.x, target.width());
    let (y0, y1) = pixel_span(rect.origin.y - offset.y, max.y - offset.y, target.height());

    for py in y0..y1 {
        for px in x0..x1 {
            let p = Vec2::new(px as f32 + 0.5 + offset.x, py as f32 + 0.5 + offset.y);
            target.blend_pixel(px, py, cmd.paint.shade(p));
        }
    }
    Ok(())
}

/// Pixel indices whose centers fall in `[lo, hi)`, clamped to `[0, limit)`.
fn pixel_span(lo: f32, hi: f32, limit: u32) -> (u32, u32) {
    let start = (lo - 0.5).ceil().clamp(0.0, limit as f32) as u32;
    let end = (hi - 0.5).ceil().clamp(0.0, limit as f32) as u32;
    (start, end.max(start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{ColorStop, GradientError, LinearGradient};
    use crate::scene::ZIndex;

    fn horizontal_ramp(width: f32) -> LinearGradient {
        LinearGradient::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(width, 0.0),
            vec![
                ColorStop::new(0.0, ColorRgba::black()),
                ColorStop::new(1.0, ColorRgba::white()),
            ],
        )
    }

    fn close(a: ColorRgba, b: ColorRgba, tol: f32) -> bool {
        (a.r - b.r).abs() <= tol
            && (a.g - b.g).abs() <= tol
            && (a.b - b.b).abs() <= tol
            && (a.a - b.a).abs() <= tol
    }

    // ── coverage ──────────────────────────────────────────────────────────

    #[test]
    fn pixel_span_uses_centers() {
        assert_eq!(pixel_span(0.0, 10.0, 100), (0, 10));
        assert_eq!(pixel_span(0.4, 1.6, 100), (0, 2));
        assert_eq!(pixel_span(0.6, 1.4, 100), (1, 1));
        assert_eq!(pixel_span(-5.0, 500.0, 8), (0, 8));
        assert_eq!(pixel_span(20.0, 30.0, 8), (8, 8));
    }

    #[test]
    fn solid_rect_covers_only_its_pixels() {
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex::new(0), Rect::new(1.0, 1.0, 2.0, 2.0), Color::from_straight(1.0, 0.0, 0.0, 1.0));
        let pm = Rasterizer::new().render_viewport(&mut list, Viewport::new(4.0, 4.0)).unwrap();
        assert_eq!(pm.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(pm.pixel(1, 1), Some([255, 0, 0, 255]));
        assert_eq!(pm.pixel(2, 2), Some([255, 0, 0, 255]));
        assert_eq!(pm.pixel(3, 3), Some([0, 0, 0, 0]));
    }

    #[test]
    fn gradient_fill_covers_whole_target() {
        for (w, h) in [(1.0, 1.0), (7.0, 3.0), (64.0, 21.0)] {
            let mut list = DrawList::new();
            list.push_gradient_rect(ZIndex::new(0), Rect::new(0.0, 0.0, w, h), horizontal_ramp(w));
            let pm = Rasterizer::new().render_viewport(&mut list, Viewport::new(w, h)).unwrap();
            assert!(pm.is_fully_covered(), "{w}x{h} not covered");
        }
    }

    #[test]
    fn clip_limits_fill() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 2.0, 4.0));
        list.push_solid_rect(ZIndex::new(0), Rect::new(0.0, 0.0, 4.0, 4.0), Color::from_straight(0.0, 0.0, 1.0, 1.0));
        list.pop_clip();
        let pm = Rasterizer::new().render_viewport(&mut list, Viewport::new(4.0, 4.0)).unwrap();
        assert_eq!(pm.pixel(1, 0), Some([0, 0, 255, 255]));
        assert_eq!(pm.pixel(2, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn background_is_cleared_first() {
        let mut list = DrawList::new();
        let raster = Rasterizer { background: Color::from_straight(1.0, 1.0, 1.0, 1.0) };
        let pm = raster.render_viewport(&mut list, Viewport::new(2.0, 2.0)).unwrap();
        assert_eq!(pm.pixel(1, 1), Some([255, 255, 255, 255]));
    }

    // ── compositing ───────────────────────────────────────────────────────

    #[test]
    fn later_items_composite_over_earlier() {
        let mut list = DrawList::new();
        let r = Rect::new(0.0, 0.0, 1.0, 1.0);
        list.push_solid_rect(ZIndex::new(0), r, Color::from_straight(1.0, 1.0, 1.0, 1.0));
        list.push_solid_rect(ZIndex::new(0), r, Color::from_straight(0.0, 0.0, 0.0, 0.5));
        let pm = Rasterizer::new().render_viewport(&mut list, Viewport::new(1.0, 1.0)).unwrap();
        let c = pm.pixel_color(0, 0).unwrap();
        assert!(close(c, ColorRgba::new(0.5, 0.5, 0.5, 1.0), 1.0 / 255.0));
    }

    // ── sampling ──────────────────────────────────────────────────────────

    #[test]
    fn sample_matches_full_render_pixel() {
        let (w, h) = (40.0, 10.0);
        let mut list = DrawList::new();
        list.push_gradient_rect(ZIndex::new(0), Rect::new(0.0, 0.0, w, h), horizontal_ramp(w));
        let raster = Rasterizer::new();
        let full = raster.render_viewport(&mut list, Viewport::new(w, h)).unwrap();

        for x in [0u32, 7, 19, 39] {
            let sampled = raster.sample(&mut list, Vec2::new(x as f32 + 0.5, 3.5)).unwrap();
            assert_eq!(Some(sampled), full.pixel_color(x, 3));
        }
    }

    #[test]
    fn sample_near_far_edge_stays_covered() {
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex::new(0), Rect::new(0.0, 0.0, 4.0, 4.0), Color::from_straight(1.0, 0.0, 0.0, 1.0));
        let c = Rasterizer::new().sample(&mut list, Vec2::new(3.9, 3.9)).unwrap();
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn sample_outside_all_geometry_is_transparent() {
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex::new(0), Rect::new(0.0, 0.0, 4.0, 4.0), Color::from_straight(1.0, 0.0, 0.0, 1.0));
        let c = Rasterizer::new().sample(&mut list, Vec2::new(50.0, 50.0)).unwrap();
        assert_eq!(c, ColorRgba::transparent());
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn invalid_gradient_is_reported() {
        let mut g = horizontal_ramp(10.0);
        g.stops.truncate(1);
        let mut list = DrawList::new();
        list.push_gradient_rect(ZIndex::new(0), Rect::new(0.0, 0.0, 10.0, 10.0), g);
        let err = Rasterizer::new().render_viewport(&mut list, Viewport::new(10.0, 10.0)).unwrap_err();
        assert!(matches!(err, RasterError::InvalidGradient(GradientError::TooFewStops { count: 1 })));
    }

    #[test]
    fn empty_viewport_is_an_error() {
        let mut list = DrawList::new();
        let err = Rasterizer::new().render_viewport(&mut list, Viewport::new(0.0, 10.0)).unwrap_err();
        assert!(matches!(err, RasterError::EmptyTarget { width: 0, height: 10 }));
    }
}
