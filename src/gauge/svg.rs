use std::fmt::Write as _;

use crate::{
    assets::svg_raster::{parse_svg, rasterize_svg},
    foundation::{core::Rgba8, error::AnnoviewResult},
    gauge::ScoreGauge,
};

/// Color of the unfilled background ring.
pub const TRACK_COLOR: Rgba8 = Rgba8::rgb(0xe5, 0xe7, 0xeb);

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

// SVG has no notion of NaN or infinity.
fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

/// Render `gauge` as a standalone SVG document with the progress ring at dash `offset`.
///
/// The ring is rotated by -90 degrees so that the sweep starts at 12 o'clock and runs
/// clockwise. The tier label is centred over the ring.
pub fn render_gauge_svg(gauge: &ScoreGauge, offset: f64) -> String {
    let size = f64::from(gauge.size_px);
    let center = size / 2.0;
    let radius = gauge.arc.radius;
    let circumference = gauge.arc.circumference();
    let offset = finite_or(offset, circumference);
    let stroke = gauge.stroke_width;
    let tier_color = gauge.tier.color().to_hex();
    let track_color = TRACK_COLOR.to_hex();

    let mut svg = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );
    let _ = writeln!(svg, "  <title>{}</title>", escape_xml(&gauge.label));
    let _ = writeln!(
        svg,
        r#"  <g transform="rotate(-90 {center} {center})">"#
    );
    let _ = writeln!(
        svg,
        r#"    <circle cx="{center}" cy="{center}" r="{radius}" fill="none" stroke="{track_color}" stroke-width="{stroke}"/>"#
    );
    let _ = writeln!(
        svg,
        r#"    <circle cx="{center}" cy="{center}" r="{radius}" fill="none" stroke="{tier_color}" stroke-width="{stroke}" stroke-dasharray="{circumference}" stroke-dashoffset="{offset}"/>"#
    );
    let _ = writeln!(svg, "  </g>");
    let _ = writeln!(
        svg,
        r#"  <text x="{center}" y="{center}" text-anchor="middle" dominant-baseline="central" font-family="sans-serif" font-size="14" font-weight="600" fill="{tier_color}">{}</text>"#,
        escape_xml(gauge.tier.label())
    );
    svg.push_str("</svg>\n");
    svg
}

/// Rasterize a gauge SVG produced by [`render_gauge_svg`] at `scale` into straight RGBA8.
pub fn rasterize_gauge(svg: &str, scale: f32) -> AnnoviewResult<image::RgbaImage> {
    let tree = parse_svg(svg.as_bytes())?;
    rasterize_svg(&tree, scale)
}

#[cfg(test)]
#[path = "../../tests/unit/gauge/svg.rs"]
mod tests;
