use std::path::Path;

use anyhow::Context;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::foundation::error::{AnnoviewError, AnnoviewResult};

/// The document returned by the analysis service: `{ "data": { ... } }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisEnvelope {
    /// The analysis payload.
    pub data: AnalysisResult,
}

impl AnalysisEnvelope {
    /// Parse an envelope from a JSON string.
    pub fn from_json_str(s: &str) -> AnnoviewResult<Self> {
        serde_json::from_str(s).map_err(|e| AnnoviewError::serde(e.to_string()))
    }

    /// Read and parse an envelope from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> AnnoviewResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read analysis json '{}'", path.display()))?;
        Self::from_json_str(&s)
    }
}

/// Result of one remote analysis. Immutable once received; replaced wholesale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Regions of interest, in display order.
    #[serde(default)]
    pub markup: Vec<Annotation>,
    /// Free-text general analysis.
    #[serde(default)]
    pub analysis: String,
    /// Metric name to score, expected in `[0, 10]`.
    #[serde(default)]
    pub scores: IndexMap<String, f64>,
    /// Category name to suggestion items.
    #[serde(default)]
    pub suggestions: IndexMap<String, Vec<String>>,
    /// Arbitrary extra values. Only string values are presented.
    #[serde(default)]
    pub extras: IndexMap<String, serde_json::Value>,
}

impl AnalysisResult {
    /// String-valued extras in emission order.
    pub fn string_extras(&self) -> impl Iterator<Item = (&str, &str)> {
        self.extras
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k.as_str(), s)))
    }
}

/// Shape tag of an annotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// A circle described by `{cx, cy, radius}`.
    Circle,
    /// An axis-aligned rectangle described by `{x, y, width, height}`.
    Rectangle,
    /// Any tag this renderer does not know, or no tag at all; draws no shape.
    #[default]
    #[serde(other)]
    Unsupported,
}

/// One AI-identified region of interest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Which coordinate block to honor.
    #[serde(default, deserialize_with = "lenient_shape")]
    pub shape: ShapeKind,
    /// Location in percentage units.
    #[serde(default, deserialize_with = "lenient_coordinates")]
    pub coordinates: Coordinates,
    /// Stroke/label color, e.g. `#00ff00`.
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<String>,
    /// Commentary for this region.
    #[serde(default, deserialize_with = "lenient_string")]
    pub comment: String,
    /// Optional recommended action.
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub suggested_action: Option<String>,
}

/// The percentage unit tag; the only unit that draws a shape.
pub const PERCENT_UNIT: &str = "%";

/// Coordinate block of an annotation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Unit tag. Only [`PERCENT_UNIT`] is honored for drawing; a non-string unit reads as empty.
    #[serde(default, deserialize_with = "lenient_string")]
    pub unit: String,
    /// Circle geometry, used when the shape is a circle.
    #[serde(default, deserialize_with = "lenient_section")]
    pub circle: Option<CircleCoords>,
    /// Rectangle geometry, used when the shape is a rectangle.
    #[serde(default, deserialize_with = "lenient_section")]
    pub rectangle: Option<RectangleCoords>,
}

impl Coordinates {
    /// `true` when the unit is percentage.
    pub fn is_percent(&self) -> bool {
        self.unit == PERCENT_UNIT
    }
}

/// Circle geometry in percent of image width (`cx`, `radius`) and height (`cy`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CircleCoords {
    /// Center x, percent of width.
    #[serde(default, deserialize_with = "lenient_number")]
    pub cx: f64,
    /// Center y, percent of height.
    #[serde(default, deserialize_with = "lenient_number")]
    pub cy: f64,
    /// Radius, percent of width.
    #[serde(default, deserialize_with = "lenient_number")]
    pub radius: f64,
}

/// Rectangle geometry in percent of image width (`x`, `width`) and height (`y`, `height`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RectangleCoords {
    /// Left edge, percent of width.
    #[serde(default, deserialize_with = "lenient_number")]
    pub x: f64,
    /// Top edge, percent of height.
    #[serde(default, deserialize_with = "lenient_number")]
    pub y: f64,
    /// Width, percent of width.
    #[serde(default, deserialize_with = "lenient_number")]
    pub width: f64,
    /// Height, percent of height.
    #[serde(default, deserialize_with = "lenient_number")]
    pub height: f64,
}

/// Shape geometry in percentage space, resolved from an annotation's tag and coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeCoords {
    /// Circle geometry.
    Circle(CircleCoords),
    /// Rectangle geometry.
    Rectangle(RectangleCoords),
}

impl Annotation {
    /// The drawable shape, if any.
    ///
    /// `None` when the unit is not `%`, the tag is unsupported, or the coordinate block matching
    /// the tag is missing. Blocks not matching the tag are ignored.
    pub fn shape_coords(&self) -> Option<ShapeCoords> {
        if !self.coordinates.is_percent() {
            return None;
        }
        match self.shape {
            ShapeKind::Circle => self.coordinates.circle.map(ShapeCoords::Circle),
            ShapeKind::Rectangle => self.coordinates.rectangle.map(ShapeCoords::Rectangle),
            ShapeKind::Unsupported => None,
        }
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let v = serde_json::Value::deserialize(deserializer)?;
    Ok(v.as_f64().unwrap_or(0.0))
}

// Annotation fields degrade instead of rejecting the whole result.

fn lenient_shape<'de, D>(deserializer: D) -> Result<ShapeKind, D::Error>
where
    D: Deserializer<'de>,
{
    let v = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(v).unwrap_or_default())
}

fn lenient_coordinates<'de, D>(deserializer: D) -> Result<Coordinates, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_section(deserializer)?.unwrap_or_default())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = serde_json::Value::deserialize(deserializer)?;
    Ok(match v {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_section<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let v = serde_json::Value::deserialize(deserializer)?;
    if !v.is_object() {
        return Ok(None);
    }
    Ok(serde_json::from_value(v).ok())
}

#[cfg(test)]
#[path = "../../tests/unit/model/analysis.rs"]
mod tests;
