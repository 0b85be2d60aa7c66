use anyhow::Context;

use crate::foundation::{
    error::{AnnoviewError, AnnoviewResult},
    math::unpremultiply_rgba8_in_place,
};

// Avoid pathological allocations for scaled-up SVGs.
const MAX_DIM: u32 = 16_384;

/// Parse an SVG document into a `usvg` tree.
pub fn parse_svg(bytes: &[u8]) -> AnnoviewResult<usvg::Tree> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    Ok(tree)
}

/// Rasterize an SVG tree at `scale` into straight-alpha RGBA8.
pub fn rasterize_svg(tree: &usvg::Tree, scale: f32) -> AnnoviewResult<image::RgbaImage> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(AnnoviewError::validation(
            "svg raster scale must be finite and > 0",
        ));
    }

    fn to_px(v: f32) -> AnnoviewResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(AnnoviewError::render("svg has invalid width/height"));
        }
        Ok((v.ceil() as u32).max(1))
    }

    let size = tree.size();
    let width = to_px(size.width() * scale)?;
    let height = to_px(size.height() * scale)?;
    if width > MAX_DIM || height > MAX_DIM {
        return Err(AnnoviewError::render(format!(
            "svg raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| AnnoviewError::render("failed to allocate svg pixmap"))?;
    let xform = resvg::tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(tree, xform, &mut pixmap.as_mut());

    let mut data = pixmap.data().to_vec();
    unpremultiply_rgba8_in_place(&mut data);
    image::RgbaImage::from_raw(width, height, data)
        .ok_or_else(|| AnnoviewError::render("svg raster buffer size mismatch"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/svg_raster.rs"]
mod tests;
