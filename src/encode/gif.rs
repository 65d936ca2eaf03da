use anyhow::Context;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::color::Color;
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{HaloError, HaloResult};
use crate::render::surface::Surface;

/// Options for [`GifSink`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GifSinkOpts {
    /// NeuQuant speed, 1 (best) ..= 30 (fastest).
    pub speed: i32,
    /// Opaque color partially transparent pixels are flattened onto.
    pub background: Color,
}

impl Default for GifSinkOpts {
    fn default() -> Self {
        Self {
            speed: 10,
            background: Color::WHITE,
        }
    }
}

/// Animated GIF encoder writing into a byte buffer. Loops forever.
pub struct GifSink<'a> {
    out: Option<&'a mut Vec<u8>>,
    encoder: Option<GifEncoder<&'a mut Vec<u8>>>,
    opts: GifSinkOpts,
    fps: Option<Fps>,
    next: u64,
}

impl std::fmt::Debug for GifSink<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GifSink")
            .field("opts", &self.opts)
            .field("fps", &self.fps)
            .field("next", &self.next)
            .field("open", &self.encoder.is_some())
            .finish()
    }
}

impl<'a> GifSink<'a> {
    /// Sink that writes the finished GIF into `out`.
    pub fn new(out: &'a mut Vec<u8>, opts: GifSinkOpts) -> Self {
        Self {
            out: Some(out),
            encoder: None,
            opts,
            fps: None,
            next: 0,
        }
    }
}

/// Frame `idx`'s display time in centiseconds.
///
/// GIF delays are whole centiseconds. Each frame lasts from its own rounded timestamp to the
/// next one's, so the cumulative time of frame `i` never drifts from `i * 1000 / fps`.
pub(crate) fn delay_cs(fps: Fps, idx: FrameIndex) -> u32 {
    let at = |i: u64| (fps.frame_time_ms(FrameIndex(i)) / 10.0).round() as u32;
    (at(idx.0 + 1) - at(idx.0)).max(1)
}

impl FrameSink for GifSink<'_> {
    fn begin(&mut self, cfg: SinkConfig) -> HaloResult<()> {
        if !(1..=30).contains(&self.opts.speed) {
            return Err(HaloError::validation(format!(
                "gif speed must be 1..=30, got {}",
                self.opts.speed
            )));
        }
        let out = self
            .out
            .take()
            .ok_or_else(|| HaloError::export("gif sink already started"))?;
        out.clear();
        let mut encoder = GifEncoder::new_with_speed(out, self.opts.speed);
        encoder
            .set_repeat(Repeat::Infinite)
            .context("set gif repeat")?;
        self.encoder = Some(encoder);
        self.fps = Some(cfg.fps);
        self.next = 0;
        tracing::debug!(size = cfg.size, frames = cfg.frames, "gif encode started");
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Surface) -> HaloResult<()> {
        let (Some(encoder), Some(fps)) = (self.encoder.as_mut(), self.fps) else {
            return Err(HaloError::export("gif sink is not started"));
        };
        if idx.0 != self.next {
            return Err(HaloError::export(format!(
                "gif frames out of order: got {}, expected {}",
                idx.0, self.next
            )));
        }
        let rgba = frame.flattened(self.opts.background)?;
        let delay = Delay::from_numer_denom_ms(delay_cs(fps, idx) * 10, 1);
        encoder
            .encode_frame(Frame::from_parts(rgba, 0, 0, delay))
            .with_context(|| format!("encode gif frame {}", idx.0))?;
        self.next += 1;
        Ok(())
    }

    fn end(&mut self) -> HaloResult<()> {
        // Dropping the encoder writes the trailer.
        let encoder = self
            .encoder
            .take()
            .ok_or_else(|| HaloError::export("gif sink is not started"))?;
        drop(encoder);
        tracing::debug!(frames = self.next, "gif encode finished");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
