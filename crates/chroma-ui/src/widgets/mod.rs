pub mod color_picker;
pub mod swatch;
