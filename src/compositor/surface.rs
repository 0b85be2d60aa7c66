use crate::foundation::{
    core::{PixelSize, Rgba8Premul},
    error::{AnnoviewError, AnnoviewResult},
    math::unpremultiply_rgba8_in_place,
};

/// A pixel-addressable drawing target sized to a source image.
///
/// Pixels are premultiplied RGBA8, row-major. A new surface is fully transparent.
pub struct Surface {
    size: PixelSize,
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface").field("size", &self.size).finish()
    }
}

impl Surface {
    /// Allocate a transparent surface of `size`.
    pub fn new(size: PixelSize) -> AnnoviewResult<Self> {
        let width: u16 = size
            .width
            .try_into()
            .map_err(|_| AnnoviewError::validation("surface width exceeds u16"))?;
        let height: u16 = size
            .height
            .try_into()
            .map_err(|_| AnnoviewError::validation("surface height exceeds u16"))?;
        Ok(Self {
            size,
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(width, height),
        })
    }

    /// Surface dimensions.
    pub fn size(&self) -> PixelSize {
        self.size
    }

    /// Premultiplied pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let i = (y as usize * self.size.width as usize + x as usize) * 4;
        let px = self.pixmap.data_as_u8_slice().get(i..i + 4)?;
        Some(Rgba8Premul {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        })
    }

    /// Premultiplied RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        self.pixmap.data_as_u8_slice_mut().fill(0);
    }

    /// Straight-alpha copy, suitable for PNG export or display.
    pub fn to_rgba_image(&self) -> AnnoviewResult<image::RgbaImage> {
        let mut data = self.data().to_vec();
        unpremultiply_rgba8_in_place(&mut data);
        image::RgbaImage::from_raw(self.size.width, self.size.height, data)
            .ok_or_else(|| AnnoviewError::render("surface buffer size mismatch"))
    }

    pub(crate) fn dims_u16(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub(crate) fn pixmap_mut(&mut self) -> &mut vello_cpu::Pixmap {
        &mut self.pixmap
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compositor/surface.rs"]
mod tests;
