use std::path::PathBuf;

use crate::compositor::draw::CompositorStyle;

/// Environment variable naming a bold font file used for annotation titles.
pub const LABEL_FONT_ENV: &str = "ANNOVIEW_LABEL_FONT";
/// Environment variable overriding the title prefix (`"Annotation"`).
pub const TITLE_PREFIX_ENV: &str = "ANNOVIEW_TITLE_PREFIX";

/// Configuration of an [`crate::OverlayController`].
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayOpts {
    /// Titles read `"{title_prefix} {index + 1}"`.
    pub title_prefix: String,
    /// Font file for titles. Without one, only label plates are drawn.
    pub label_font: Option<PathBuf>,
    /// Drawing constants.
    pub style: CompositorStyle,
}

impl Default for OverlayOpts {
    fn default() -> Self {
        Self {
            title_prefix: "Annotation".to_string(),
            label_font: None,
            style: CompositorStyle::default(),
        }
    }
}

impl OverlayOpts {
    /// Defaults overridden by `ANNOVIEW_LABEL_FONT` and `ANNOVIEW_TITLE_PREFIX`.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Some(path) = std::env::var_os(LABEL_FONT_ENV).filter(|v| !v.is_empty()) {
            opts.label_font = Some(PathBuf::from(path));
        }
        if let Ok(prefix) = std::env::var(TITLE_PREFIX_ENV)
            && !prefix.trim().is_empty()
        {
            opts.title_prefix = prefix.trim().to_string();
        }
        opts
    }

    /// Title shown for the annotation at `index`.
    pub fn title_for(&self, index: usize) -> String {
        format!("{} {}", self.title_prefix, index + 1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/opts.rs"]
mod tests;
