use std::sync::Arc;

use crate::{
    assets::{
        decode::DecodedImage,
        text::{LabelFont, TextBrushRgba8, TextLayoutEngine},
    },
    compositor::{geometry::PixelShape, surface::Surface},
    foundation::{
        core::{Rect, Rgba8},
        error::{AnnoviewError, AnnoviewResult},
    },
    model::{analysis::Annotation, color::parse_color},
};

/// Fixed drawing constants of the compositor.
#[derive(Clone, Debug, PartialEq)]
pub struct CompositorStyle {
    /// Shape outline width in pixels.
    pub stroke_width: f64,
    /// Alpha applied to the shape color for the interior fill.
    pub fill_alpha: u8,
    /// Outline color when the annotation has none.
    pub default_stroke: Rgba8,
    /// Title color when the annotation has none.
    pub default_label: Rgba8,
    /// Label plate inset from the top-left corner (and from the right edge).
    pub plate_inset: f64,
    /// Label plate height.
    pub plate_height: f64,
    /// Label plate color.
    pub plate_color: Rgba8,
    /// Title left padding inside the plate.
    pub title_padding: f64,
    /// Title font size in pixels.
    pub title_size_px: f32,
}

impl Default for CompositorStyle {
    fn default() -> Self {
        Self {
            stroke_width: 2.0,
            fill_alpha: 0x33,
            default_stroke: Rgba8::RED,
            default_label: Rgba8::BLACK,
            plate_inset: 10.0,
            plate_height: 30.0,
            // rgba(255, 255, 255, 0.9)
            plate_color: Rgba8::WHITE.with_alpha(230),
            title_padding: 10.0,
            title_size_px: 16.0,
        }
    }
}

impl CompositorStyle {
    /// Label plate rectangle for a surface of `width` pixels; `None` when it would be empty.
    pub fn plate_rect(&self, width: u32) -> Option<Rect> {
        let w = f64::from(width) - 2.0 * self.plate_inset;
        if w <= 0.0 {
            return None;
        }
        Some(Rect::new(
            self.plate_inset,
            self.plate_inset,
            self.plate_inset + w,
            self.plate_inset + self.plate_height,
        ))
    }
}

/// What a compositor call put on the surface besides the base image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Composited {
    /// The shape drawn, if any.
    pub shape: Option<PixelShape>,
    /// Whether title glyphs were drawn (requires a label font).
    pub title_drawn: bool,
}

/// Draws annotations onto surfaces. Holds the style, the optional label font, and text layout
/// state reused across calls.
pub struct Compositor {
    style: CompositorStyle,
    font: Option<LabelFont>,
    font_data: Option<vello_cpu::peniko::FontData>,
    text: TextLayoutEngine,
    reported_missing_font: bool,
}

impl Default for Compositor {
    /// Default style with the system bold sans-serif face for titles, when one is installed.
    fn default() -> Self {
        Self::new(CompositorStyle::default(), LabelFont::system_bold())
    }
}

impl Compositor {
    /// Create a compositor with exactly `font`. Without one, titles are reduced to the label
    /// plate.
    pub fn new(style: CompositorStyle, font: Option<LabelFont>) -> Self {
        let font_data = font.as_ref().map(LabelFont::font_data);
        Self {
            style,
            font,
            font_data,
            text: TextLayoutEngine::new(),
            reported_missing_font: false,
        }
    }

    /// Drawing constants in use.
    pub fn style(&self) -> &CompositorStyle {
        &self.style
    }

    /// Draw `image`, the annotation's shape, and the `title` label onto `surface`.
    ///
    /// The surface must have exactly the image's natural size. Every pixel of the surface is
    /// rewritten, so repeated calls with identical inputs produce identical pixels.
    pub fn draw_annotation(
        &mut self,
        surface: &mut Surface,
        image: &DecodedImage,
        annotation: &Annotation,
        title: &str,
    ) -> AnnoviewResult<Composited> {
        let size = surface.size();
        if size != image.size {
            return Err(AnnoviewError::render(format!(
                "surface is {}x{} but image is {}x{}",
                size.width, size.height, image.size.width, image.size.height
            )));
        }

        let (stroke, label) = self.resolve_colors(annotation);
        let shape = annotation
            .shape_coords()
            .and_then(|coords| PixelShape::resolve(coords, size));

        let (w16, h16) = surface.dims_u16();
        let mut ctx = vello_cpu::RenderContext::new(w16, h16);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        let image_paint = image_paint(image)?;
        ctx.set_paint(image_paint);
        ctx.fill_rect(&rect_to_cpu(size.bounds()));

        if let Some(shape) = shape {
            let path = bezpath_to_cpu(&shape.to_path());
            ctx.set_stroke(vello_cpu::kurbo::Stroke::new(self.style.stroke_width));
            ctx.set_paint(color_to_cpu(stroke));
            ctx.stroke_path(&path);
            ctx.set_paint(color_to_cpu(stroke.with_alpha(self.style.fill_alpha)));
            ctx.fill_path(&path);
        }

        let mut title_drawn = false;
        if let Some(plate) = self.style.plate_rect(size.width) {
            ctx.set_paint(color_to_cpu(self.style.plate_color));
            ctx.fill_rect(&rect_to_cpu(plate));
            title_drawn = self.draw_title(&mut ctx, plate, title, label)?;
        }

        ctx.flush();
        ctx.render_to_pixmap(surface.pixmap_mut());

        Ok(Composited { shape, title_drawn })
    }

    fn resolve_colors(&self, annotation: &Annotation) -> (Rgba8, Rgba8) {
        match annotation.color.as_deref().map(parse_color) {
            None => (self.style.default_stroke, self.style.default_label),
            Some(Ok(c)) => (c, c),
            Some(Err(e)) => {
                tracing::warn!(
                    color = annotation.color.as_deref().unwrap_or_default(),
                    error = %e,
                    "unparseable annotation color; using defaults"
                );
                (self.style.default_stroke, self.style.default_label)
            }
        }
    }

    fn draw_title(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        plate: Rect,
        title: &str,
        color: Rgba8,
    ) -> AnnoviewResult<bool> {
        let (Some(font), Some(font_data)) = (self.font.as_ref(), self.font_data.as_ref()) else {
            if !self.reported_missing_font {
                tracing::debug!("no label font configured; drawing label plates without titles");
                self.reported_missing_font = true;
            }
            return Ok(false);
        };
        if title.is_empty() {
            return Ok(false);
        }

        let brush = TextBrushRgba8 {
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        };
        let layout =
            self.text
                .layout_line(title, font.bytes(), self.style.title_size_px, brush)?;

        let dy = ((plate.height() - f64::from(layout.height())) / 2.0).max(0.0);
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            plate.x0 + self.style.title_padding,
            plate.y0 + dy,
        )));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(font_data)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }

        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(true)
    }
}

/// Draw one annotation with [`Compositor::default`].
pub fn draw_annotation(
    surface: &mut Surface,
    image: &DecodedImage,
    annotation: &Annotation,
    title: &str,
) -> AnnoviewResult<Composited> {
    Compositor::default().draw_annotation(surface, image, annotation, title)
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn image_paint(image: &DecodedImage) -> AnnoviewResult<vello_cpu::Image> {
    let w: u16 = image
        .size
        .width
        .try_into()
        .map_err(|_| AnnoviewError::render("image width exceeds u16"))?;
    let h: u16 = image
        .size
        .height
        .try_into()
        .map_err(|_| AnnoviewError::render("image height exceeds u16"))?;
    let rgba8_premul = image.rgba8_premul.as_slice();
    if rgba8_premul.len() != image.size.area() * 4 {
        return Err(AnnoviewError::render("decoded image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(image.size.area());
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, may_have_opacities);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compositor/draw.rs"]
mod tests;
