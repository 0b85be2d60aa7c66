//! Annoview renders the visual output of an AI image analysis.
//!
//! Given the bytes of an uploaded image and an [`AnalysisResult`], it:
//!
//! - reconstructs one overlay per annotation (base image, optional shape, title plate) on a
//!   [`Surface`] sized to the image's natural resolution, driven by an [`OverlayController`]
//! - turns every score into a [`ScoreGauge`] with a tier and an animated progress arc
//! - lays out the textual sections of the result as a [`Report`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;

pub(crate) mod animation;
/// Shape compositor.
pub mod compositor;
/// Score gauges.
pub mod gauge;
/// Analysis result data model.
pub mod model;
/// Overlay orchestration across annotations and input generations.
pub mod overlay;
/// Text report of an analysis result.
pub mod report;

pub use crate::animation::ease::Ease;
pub use crate::assets::decode::{
    DecodedImage, ImageDecoder, ImageSource, RasterDecoder, decode_image,
};
pub use crate::assets::text::LabelFont;
pub use crate::foundation::core::{Generation, PixelSize, Point, Rect, Rgba8, Rgba8Premul};
pub use crate::foundation::error::{AnnoviewError, AnnoviewResult};
pub use crate::foundation::math::percent_to_px;

pub use crate::compositor::draw::{Composited, Compositor, CompositorStyle, draw_annotation};
pub use crate::compositor::geometry::PixelShape;
pub use crate::compositor::surface::Surface;
pub use crate::gauge::arc::GaugeArc;
pub use crate::gauge::reveal::GaugeReveal;
pub use crate::gauge::svg::{rasterize_gauge, render_gauge_svg};
pub use crate::gauge::tier::ScoreTier;
pub use crate::gauge::{GaugeOpts, ScoreGauge, gauges_for};
pub use crate::model::analysis::{
    AnalysisEnvelope, AnalysisResult, Annotation, CircleCoords, Coordinates, RectangleCoords,
    ShapeKind, ShapeCoords,
};
pub use crate::model::color::parse_color;
pub use crate::overlay::controller::{
    DecodeTicket, DrawOutcome, OverlayController, Phase, RenderPass, SlotState,
};
pub use crate::overlay::opts::OverlayOpts;
pub use crate::report::{Report, ReportSection, humanize_key};
