use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::{
    core::PixelSize,
    error::{AnnoviewError, AnnoviewResult},
    math::premultiply_rgba8_in_place,
};

/// Encoded bytes of the uploaded image, compared by value.
#[derive(Clone, Debug)]
pub struct ImageSource {
    bytes: Arc<[u8]>,
    fingerprint: u64,
}

impl ImageSource {
    /// Wrap encoded image bytes (PNG, JPEG, GIF, ...).
    pub fn from_bytes(bytes: impl Into<Arc<[u8]>>) -> Self {
        let bytes = bytes.into();
        let fingerprint = xxhash_rust::xxh3::xxh3_64(&bytes);
        Self { bytes, fingerprint }
    }

    /// Read encoded bytes from a file.
    pub fn from_path(path: impl AsRef<Path>) -> AnnoviewResult<Self> {
        let path = path.as_ref();
        let bytes =
            std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
        Ok(Self::from_bytes(bytes))
    }

    /// Encoded bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Stable content hash of the encoded bytes.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }
}

impl PartialEq for ImageSource {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.bytes, &other.bytes) {
            return true;
        }
        self.fingerprint == other.fingerprint && self.bytes == other.bytes
    }
}

impl Eq for ImageSource {}

/// Decoded raster image in premultiplied RGBA8 form at its natural size.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    /// Natural pixel dimensions.
    pub size: PixelSize,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl DecodedImage {
    /// Build from straight-alpha RGBA8 pixels.
    pub fn from_rgba8(width: u32, height: u32, mut rgba: Vec<u8>) -> AnnoviewResult<Self> {
        let size = PixelSize::new(width, height)?;
        if rgba.len() != size.area() * 4 {
            return Err(AnnoviewError::validation(format!(
                "rgba byte length {} does not match {width}x{height}",
                rgba.len()
            )));
        }
        premultiply_rgba8_in_place(&mut rgba);
        Ok(Self {
            size,
            rgba8_premul: Arc::new(rgba),
        })
    }
}

/// Decode encoded image bytes at their natural resolution.
pub fn decode_image(bytes: &[u8]) -> AnnoviewResult<DecodedImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| AnnoviewError::decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    DecodedImage::from_rgba8(width, height, rgba.into_raw())
}

/// Turns an [`ImageSource`] into pixels. The seam where hosts plug their own decoder.
pub trait ImageDecoder {
    /// Decode `source` at its natural size.
    fn decode(&mut self, source: &ImageSource) -> AnnoviewResult<DecodedImage>;
}

/// Decoder backed by the `image` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct RasterDecoder;

impl ImageDecoder for RasterDecoder {
    fn decode(&mut self, source: &ImageSource) -> AnnoviewResult<DecodedImage> {
        decode_image(source.bytes())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
