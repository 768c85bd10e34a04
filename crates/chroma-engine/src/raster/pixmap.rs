use std::path::Path;

use crate::coords::ColorRgba;
use crate::paint::Color;

use super::RasterError;

/// CPU render target: premultiplied RGBA8, row-major, top-left origin.
///
/// Pixel `(x, y)` covers the logical square `[x, x + 1) × [y, y + 1)` (plus the
/// offset the rasterizer was given) and is shaded at its center.
#[derive(Debug, Clone, PartialEq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Pixmap {
    /// Allocates a transparent pixmap.
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::EmptyTarget { width, height });
        }
        let len = width as usize * height as usize;
        Ok(Self { width, height, pixels: vec![[0; 4]; len] })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fills every pixel with `color`.
    pub fn fill(&mut self, color: Color) {
        let px = color.to_premul_u8();
        self.pixels.fill(px);
    }

    /// Raw premultiplied bytes of pixel `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Un-premultiplied color of pixel `(x, y)`.
    #[inline]
    pub fn pixel_color(&self, x: u32, y: u32) -> Option<ColorRgba> {
        self.pixel(x, y).map(|px| Color::from_premul_u8(px).to_straight())
    }

    /// Composites `src` over pixel `(x, y)`. Out-of-range coordinates are ignored.
    #[inline]
    pub fn blend_pixel(&mut self, x: u32, y: u32, src: Color) {
        if let Some(i) = self.index(x, y) {
            let dst = Color::from_premul_u8(self.pixels[i]);
            self.pixels[i] = src.over(dst).to_premul_u8();
        }
    }

    /// Pixel storage viewed as a flat byte slice (4 bytes per pixel).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// True when no pixel has zero alpha.
    pub fn is_fully_covered(&self) -> bool {
        self.pixels.iter().all(|px| px[3] > 0)
    }

    /// Converts to a straight-alpha image for export.
    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let c = self.pixel_color(x, y).unwrap_or_default();
            image::Rgba(c.to_rgba8())
        })
    }

    /// Writes the pixmap as PNG (format chosen from the extension).
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RasterError> {
        self.to_image().save(path.as_ref())?;
        log::debug!("wrote {}x{} pixmap to {}", self.width, self.height, path.as_ref().display());
        Ok(())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_target_is_rejected() {
        assert!(matches!(Pixmap::new(0, 4), Err(RasterError::EmptyTarget { width: 0, height: 4 })));
        assert!(matches!(Pixmap::new(4, 0), Err(RasterError::EmptyTarget { .. })));
    }

    #[test]
    fn new_pixmap_is_transparent() {
        let pm = Pixmap::new(3, 2).unwrap();
        assert_eq!(pm.as_bytes().len(), 3 * 2 * 4);
        assert!(pm.as_bytes().iter().all(|&b| b == 0));
        assert!(!pm.is_fully_covered());
    }

    #[test]
    fn out_of_range_pixel_is_none() {
        let pm = Pixmap::new(2, 2).unwrap();
        assert_eq!(pm.pixel(2, 0), None);
        assert_eq!(pm.pixel(0, 2), None);
    }

    #[test]
    fn blend_over_transparent_stores_premultiplied() {
        let mut pm = Pixmap::new(1, 1).unwrap();
        pm.blend_pixel(0, 0, Color::from_straight(1.0, 0.0, 0.0, 0.5));
        assert_eq!(pm.pixel(0, 0), Some([128, 0, 0, 128]));
        let c = pm.pixel_color(0, 0).unwrap();
        assert!((c.r - 1.0).abs() < 1e-6);
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn to_image_unpremultiplies() {
        let mut pm = Pixmap::new(1, 1).unwrap();
        pm.fill(Color::from_straight(0.0, 1.0, 0.0, 0.5));
        let img = pm.to_image();
        assert_eq!(img.get_pixel(0, 0).0, [0, 255, 0, 128]);
    }
}
