/// Source image bytes and raster decoding.
pub mod decode;
/// SVG rasterization for gauge output.
pub mod svg_raster;
/// Label font loading and text layout.
pub mod text;
