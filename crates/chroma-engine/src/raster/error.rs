use std::fmt;

use crate::paint::GradientError;

/// Errors from CPU rendering and pixmap export.
#[derive(Debug)]
pub enum RasterError {
    /// A render target with zero width or height was requested.
    EmptyTarget { width: u32, height: u32 },
    /// A gradient fill failed validation.
    InvalidGradient(GradientError),
    /// Encoding or writing an image file failed.
    Image(image::ImageError),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::EmptyTarget { width, height } => {
                write!(f, "render target must be non-empty, got {width}x{height}")
            }
            RasterError::InvalidGradient(e) => write!(f, "invalid gradient: {e}"),
            RasterError::Image(e) => write!(f, "image export failed: {e}"),
        }
    }
}

impl std::error::Error for RasterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RasterError::InvalidGradient(e) => Some(e),
            RasterError::Image(e) => Some(e),
            RasterError::EmptyTarget { .. } => None,
        }
    }
}

impl From<GradientError> for RasterError {
    fn from(e: GradientError) -> Self {
        RasterError::InvalidGradient(e)
    }
}

impl From<image::ImageError> for RasterError {
    fn from(e: image::ImageError) -> Self {
        RasterError::Image(e)
    }
}
