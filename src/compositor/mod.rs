//! Shape compositor: base image, optional annotation shape, and title label on one surface.

/// Drawing of a single annotation onto a surface.
pub mod draw;
/// Percentage-to-pixel geometry resolution.
pub mod geometry;
/// Raster surfaces sized to the source image.
pub mod surface;
