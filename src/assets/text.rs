use std::path::Path;
use std::sync::{Arc, OnceLock};

use anyhow::Context;

use crate::foundation::error::{AnnoviewError, AnnoviewResult};

/// RGBA8 brush color used by Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// Font face used for annotation titles. Expected to be a bold TrueType/OpenType face.
#[derive(Clone, Debug)]
pub struct LabelFont {
    bytes: Arc<Vec<u8>>,
}

impl LabelFont {
    /// Wrap raw font bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> AnnoviewResult<Self> {
        if bytes.is_empty() {
            return Err(AnnoviewError::validation("label font bytes are empty"));
        }
        Ok(Self {
            bytes: Arc::new(bytes),
        })
    }

    /// Load a font file.
    pub fn from_path(path: impl AsRef<Path>) -> AnnoviewResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("read label font '{}'", path.display()))?;
        Self::from_bytes(bytes)
    }

    /// Raw font bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// A bold sans-serif face from the installed system fonts, or `None` when there is none.
    ///
    /// The system font database is scanned once per process.
    pub fn system_bold() -> Option<Self> {
        static SYSTEM_BOLD: OnceLock<Option<LabelFont>> = OnceLock::new();
        SYSTEM_BOLD.get_or_init(find_system_bold).clone()
    }

    pub(crate) fn font_data(&self) -> vello_cpu::peniko::FontData {
        vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(self.bytes.as_ref().clone()),
            0,
        )
    }
}

const MIN_BOLD_WEIGHT: u16 = 600;

// Names of common sans-serif families, in preference order.
const SANS_HINTS: [&str; 4] = ["DejaVu Sans", "Liberation Sans", "Arial", "Sans"];

fn find_system_bold() -> Option<LabelFont> {
    use usvg::fontdb;

    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    // Only standalone faces: `FontData` and Parley both address face 0 of the blob.
    let standalone = |id: fontdb::ID| db.face(id).is_some_and(|f| f.index == 0);
    let query = fontdb::Query {
        families: &[fontdb::Family::SansSerif],
        weight: fontdb::Weight::BOLD,
        stretch: fontdb::Stretch::Normal,
        style: fontdb::Style::Normal,
    };
    let id = db.query(&query).filter(|id| standalone(*id)).or_else(|| {
        db.faces()
            .filter(|f| {
                f.index == 0
                    && f.weight.0 >= MIN_BOLD_WEIGHT
                    && f.style == fontdb::Style::Normal
                    && !f.monospaced
            })
            .min_by_key(|f| {
                let family = f.families.first().map(|(name, _)| name.as_str()).unwrap_or("");
                let rank = SANS_HINTS
                    .iter()
                    .position(|hint| family.contains(hint))
                    .unwrap_or(SANS_HINTS.len());
                (rank, f.weight.0.abs_diff(700), family.to_string())
            })
            .map(|f| f.id)
    });

    let Some(id) = id else {
        tracing::debug!("no bold system font found for annotation titles");
        return None;
    };
    let bytes = db.with_face_data(id, |data, _| data.to_vec())?;
    if let Some(face) = db.face(id) {
        tracing::debug!(font = %face.post_script_name, "using system font for annotation titles");
    }
    LabelFont::from_bytes(bytes).ok()
}

/// Stateful helper for building Parley text layouts from raw font bytes.
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub(crate) fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Shape and lay out a single line of text.
    pub(crate) fn layout_line(
        &mut self,
        text: &str,
        font_bytes: &[u8],
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> AnnoviewResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(AnnoviewError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            AnnoviewError::validation("no font families registered from font bytes")
        })?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| AnnoviewError::validation("registered font family has no name"))?
            .to_string();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/text.rs"]
mod tests;
