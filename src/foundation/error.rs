/// Convenience result type used across annoview.
pub type AnnoviewResult<T> = Result<T, AnnoviewError>;

/// Top-level error taxonomy used by the crate APIs.
#[derive(thiserror::Error, Debug)]
pub enum AnnoviewError {
    /// Invalid caller-provided data (analysis JSON, options, dimensions).
    #[error("validation error: {0}")]
    Validation(String),

    /// The source image could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Errors while compositing onto a surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AnnoviewError {
    /// Build a [`AnnoviewError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`AnnoviewError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`AnnoviewError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`AnnoviewError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
