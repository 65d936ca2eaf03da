use std::io::Cursor;

use anyhow::Context;

use crate::foundation::color::Color;
use crate::foundation::error::{HaloError, HaloResult};
use crate::foundation::math::{flatten_px, unpremultiply_px};

/// The square pixel surface every draw renders into (premultiplied RGBA8, row-major).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    size: u32,
    data: Vec<u8>,
}

impl Surface {
    /// Transparent `size` x `size` surface.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            data: vec![0u8; size as usize * size as usize * 4],
        }
    }

    /// Edge length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Raw premultiplied bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Reset to transparent, resizing if needed.
    pub fn clear(&mut self, size: u32) {
        let len = size as usize * size as usize * 4;
        self.size = size;
        self.data.clear();
        self.data.resize(len, 0);
    }

    /// Premultiplied pixel, or transparent outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        if x >= self.size || y >= self.size {
            return [0, 0, 0, 0];
        }
        let i = (y as usize * self.size as usize + x as usize) * 4;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Straight-alpha pixel as a [`Color`].
    pub fn color_at(&self, x: u32, y: u32) -> Color {
        let [r, g, b, a] = unpremultiply_px(self.pixel(x, y));
        Color::rgba(r, g, b, a)
    }

    /// Straight-alpha copy.
    pub fn to_rgba_image(&self) -> HaloResult<image::RgbaImage> {
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&unpremultiply_px([px[0], px[1], px[2], px[3]]));
        }
        image::RgbaImage::from_raw(self.size, self.size, out)
            .ok_or_else(|| HaloError::render("surface byte length mismatch"))
    }

    /// Opaque copy composited over `background`, for formats without partial alpha.
    pub fn flattened(&self, background: Color) -> HaloResult<image::RgbaImage> {
        let bg = [background.r, background.g, background.b];
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&flatten_px([px[0], px[1], px[2], px[3]], bg));
        }
        image::RgbaImage::from_raw(self.size, self.size, out)
            .ok_or_else(|| HaloError::render("surface byte length mismatch"))
    }

    /// Encode as PNG, keeping transparency outside the frame shape.
    pub fn encode_png(&self) -> HaloResult<Vec<u8>> {
        let img = self.to_rgba_image()?;
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .context("encode surface as png")?;
        Ok(buf)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
