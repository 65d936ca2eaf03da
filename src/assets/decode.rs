use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::{HaloError, HaloResult};
use crate::foundation::math::{premultiply_rgba8_in_place, unpremultiply_px};

/// Largest edge accepted for rasterized SVG icons.
const MAX_SVG_DIM: u32 = 4096;

/// Decoded raster in premultiplied RGBA8 form, plus a ready-to-draw paint.
#[derive(Clone)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
    pub(crate) paint: vello_cpu::Image,
}

impl std::fmt::Debug for PreparedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreparedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba8_premul.len())
            .finish()
    }
}

impl PreparedImage {
    /// Wrap premultiplied pixels. Dimensions must fit the rasterizer's `u16` addressing.
    pub fn from_premul(width: u32, height: u32, rgba8_premul: Vec<u8>) -> HaloResult<Self> {
        let pixmap = premul_bytes_to_pixmap(&rgba8_premul, width, height)?;
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba8_premul),
            paint: vello_cpu::Image {
                image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
                sampler: vello_cpu::peniko::ImageSampler::default(),
            },
        })
    }

    /// Straight-alpha copy for analysis and encoders.
    pub fn to_rgba_image(&self) -> HaloResult<image::RgbaImage> {
        let mut straight = Vec::with_capacity(self.rgba8_premul.len());
        for px in self.rgba8_premul.chunks_exact(4) {
            straight.extend_from_slice(&unpremultiply_px([px[0], px[1], px[2], px[3]]));
        }
        image::RgbaImage::from_raw(self.width, self.height, straight)
            .ok_or_else(|| HaloError::decode("prepared image byte length mismatch"))
    }

    pub(crate) fn size_f64(&self) -> (f64, f64) {
        (f64::from(self.width), f64::from(self.height))
    }
}

/// Decode an uploaded photo or texture (any format `image` recognizes).
pub fn decode_image(bytes: &[u8]) -> HaloResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(HaloError::decode("image has zero width or height"));
    }
    let (width, height, rgba) = fit_rasterizer(width, height, rgba);

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);
    PreparedImage::from_premul(width, height, rgba8_premul)
}

/// Parse SVG source with default options.
pub fn parse_svg(bytes: &[u8]) -> HaloResult<usvg::Tree> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    Ok(tree)
}

/// Rasterize an SVG tree so that it fills a `width` x `height` pixmap.
pub(crate) fn rasterize_svg(tree: &usvg::Tree, width: u32, height: u32) -> HaloResult<PreparedImage> {
    if width == 0 || height == 0 || width > MAX_SVG_DIM || height > MAX_SVG_DIM {
        return Err(HaloError::render(format!(
            "svg raster size {width}x{height} out of range (max {MAX_SVG_DIM})"
        )));
    }
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| HaloError::render("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    PreparedImage::from_premul(width, height, pixmap.data().to_vec())
}

/// Downscale oversized uploads so both edges fit in `u16`.
fn fit_rasterizer(width: u32, height: u32, rgba: image::RgbaImage) -> (u32, u32, image::RgbaImage) {
    let max = u32::from(u16::MAX);
    if width <= max && height <= max {
        return (width, height, rgba);
    }
    let s = f64::from(max) / f64::from(width.max(height));
    let w = ((f64::from(width) * s).floor() as u32).max(1);
    let h = ((f64::from(height) * s).floor() as u32).max(1);
    tracing::debug!(width, height, w, h, "downscaling oversized image");
    let resized = image::imageops::resize(&rgba, w, h, image::imageops::FilterType::Triangle);
    (w, h, resized)
}

pub(crate) fn premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> HaloResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| HaloError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| HaloError::render("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(HaloError::render("prepared image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
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

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
