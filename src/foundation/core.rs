use crate::foundation::error::{HaloError, HaloResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Absolute 0-based frame index within an export run.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32, // must be > 0
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> HaloResult<Self> {
        if den == 0 {
            return Err(HaloError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(HaloError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in milliseconds.
    pub fn frame_duration_ms(self) -> f64 {
        1000.0 * f64::from(self.den) / f64::from(self.num)
    }

    /// Nominal timestamp of frame `idx` in milliseconds.
    pub fn frame_time_ms(self, idx: FrameIndex) -> f64 {
        (idx.0 as f64) * self.frame_duration_ms()
    }

    /// Number of whole frames needed to cover `secs` seconds.
    pub fn frames_for_secs(self, secs: f64) -> u64 {
        (secs * self.as_f64()).round().max(0.0) as u64
    }
}

/// Square logical drawing space.
///
/// All geometry, hit-testing and export happen in this space; the display size only matters at
/// the pointer boundary (see [`crate::DisplayMapping`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Edge length in logical pixels.
    pub size: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self { size: 1024 }
    }
}

impl Canvas {
    /// Create a validated canvas. Rasterization addresses pixels with `u16`.
    pub fn new(size: u32) -> HaloResult<Self> {
        if size == 0 {
            return Err(HaloError::validation("canvas size must be > 0"));
        }
        if size > u32::from(u16::MAX) {
            return Err(HaloError::validation(format!(
                "canvas size {size} exceeds {}",
                u16::MAX
            )));
        }
        Ok(Self { size })
    }

    /// Edge length as `f64`.
    pub fn size_f64(self) -> f64 {
        f64::from(self.size)
    }

    /// Half of the edge length.
    pub fn half(self) -> f64 {
        self.size_f64() / 2.0
    }

    /// Center of the canvas.
    pub fn center(self) -> Point {
        Point::new(self.half(), self.half())
    }

    /// Outer radius of the frame disk.
    pub fn radius(self) -> f64 {
        self.half()
    }

    /// Ratio of this canvas to the 1024 reference canvas that layer metrics are tuned for.
    pub fn unit(self) -> f64 {
        self.size_f64() / 1024.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
