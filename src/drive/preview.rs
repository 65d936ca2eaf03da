use std::io::Cursor;

use anyhow::Context;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;

use crate::foundation::color::Color;
use crate::foundation::error::{HaloError, HaloResult};
use crate::render::surface::Surface;

/// JPEG quality of preview thumbnails.
const THUMBNAIL_QUALITY: u8 = 80;

/// Trailing-edge debounce for preview sampling.
///
/// Every redraw calls [`Self::notify`]; [`Self::poll`] fires once the surface has been quiet for
/// `quiet_ms` and no gesture or animation is in progress.
#[derive(Clone, Debug)]
pub struct PreviewDebouncer {
    quiet_ms: f64,
    due_at: Option<f64>,
}

impl PreviewDebouncer {
    /// Debouncer with the given quiet period.
    pub fn new(quiet_ms: f64) -> Self {
        Self {
            quiet_ms: quiet_ms.max(0.0),
            due_at: None,
        }
    }

    /// A redraw happened at `now_ms`; push the deadline back.
    pub fn notify(&mut self, now_ms: f64) {
        self.due_at = Some(now_ms + self.quiet_ms);
    }

    /// Whether a sample is waiting for its quiet period.
    pub fn is_pending(&self) -> bool {
        self.due_at.is_some()
    }

    /// Returns `true` once when the deadline has passed. While `busy` the request stays pending.
    pub fn poll(&mut self, now_ms: f64, busy: bool) -> bool {
        match self.due_at {
            Some(due) if !busy && now_ms >= due => {
                self.due_at = None;
                true
            }
            _ => false,
        }
    }
}

/// Low-fidelity JPEG snapshot for UI mockups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Thumbnail {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// JPEG bytes.
    pub jpeg: Vec<u8>,
}

/// Downscale `surface` to `size` and encode it as JPEG over white.
pub fn make_thumbnail(surface: &Surface, size: u32) -> HaloResult<Thumbnail> {
    if size == 0 {
        return Err(HaloError::validation("thumbnail size must be > 0"));
    }
    let flat = surface.flattened(Color::WHITE)?;
    let small = image::imageops::resize(&flat, size, size, FilterType::Triangle);
    let rgb = image::DynamicImage::ImageRgba8(small).to_rgb8();

    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut Cursor::new(&mut jpeg), THUMBNAIL_QUALITY)
        .encode_image(&rgb)
        .context("encode preview thumbnail")?;
    Ok(Thumbnail {
        width: size,
        height: size,
        jpeg,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/drive/preview.rs"]
mod tests;
