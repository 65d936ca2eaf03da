//! Time-driven effects. Pure functions of elapsed time; nothing here touches editor state.

use crate::foundation::core::{Canvas, Point, Vec2};
use crate::foundation::math::{Fnv1a64, unit_f64};
use crate::model::layers::MotionEffect;

/// Pulse period in milliseconds.
pub(crate) const PULSE_PERIOD_MS: f64 = 400.0;
/// Pulse amplitude as a scale fraction.
pub(crate) const PULSE_AMPLITUDE: f64 = 0.1;
/// One full spin takes this long.
pub(crate) const SPIN_PERIOD_MS: f64 = 2000.0;
/// Chance that a sticker jitters on a given frame.
pub(crate) const GLITCH_PROBABILITY: f64 = 0.2;
/// Maximum jitter per axis at the reference canvas.
pub(crate) const GLITCH_MAX_OFFSET: f64 = 5.0;
/// Streaks in the rain overlay.
pub(crate) const RAIN_STREAKS: usize = 40;

/// Per-sticker adjustment for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionDelta {
    /// Multiplier on the sticker's scale.
    pub scale: f64,
    /// Degrees added to the sticker's rotation.
    pub rotation: f64,
    /// Offset added to the sticker's position.
    pub offset: Vec2,
}

impl MotionDelta {
    /// No adjustment.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        rotation: 0.0,
        offset: Vec2::ZERO,
    };
}

/// Adjustment for sticker `index` at `time_ms` on `canvas`.
///
/// Every effect is the identity at `time_ms == 0`, so the rest frame never moves.
pub fn motion_delta(effect: MotionEffect, time_ms: f64, index: usize, canvas: Canvas) -> MotionDelta {
    if time_ms == 0.0 {
        return MotionDelta::IDENTITY;
    }
    match effect {
        MotionEffect::None | MotionEffect::Rain => MotionDelta::IDENTITY,
        MotionEffect::Pulse => MotionDelta {
            scale: 1.0
                + PULSE_AMPLITUDE * (std::f64::consts::TAU * time_ms / PULSE_PERIOD_MS).sin(),
            ..MotionDelta::IDENTITY
        },
        MotionEffect::Spin => MotionDelta {
            rotation: 360.0 * time_ms / SPIN_PERIOD_MS,
            ..MotionDelta::IDENTITY
        },
        MotionEffect::Glitch => {
            let mut h = Fnv1a64::new_default();
            h.write_u64(time_ms.to_bits());
            h.write_u64(index as u64);
            let gate = h.finish();
            if unit_f64(gate) >= GLITCH_PROBABILITY {
                return MotionDelta::IDENTITY;
            }
            let amp = GLITCH_MAX_OFFSET * canvas.unit();
            let mut hx = Fnv1a64::new(gate);
            hx.write_u8(b'x');
            let mut hy = Fnv1a64::new(gate);
            hy.write_u8(b'y');
            MotionDelta {
                offset: Vec2::new(
                    (unit_f64(hx.finish()) * 2.0 - 1.0) * amp,
                    (unit_f64(hy.finish()) * 2.0 - 1.0) * amp,
                ),
                ..MotionDelta::IDENTITY
            }
        }
    }
}

/// Rain streak segments at `time_ms`: `(start, end)` in canvas space.
///
/// Each streak has a fixed seed-derived lane and length; its position wraps modulo the canvas,
/// so the overlay loops without particle state.
pub fn rain_streaks(canvas: Canvas, time_ms: f64) -> Vec<(Point, Point)> {
    let size = canvas.size_f64();
    let unit = canvas.unit();
    let speed = size / 1000.0;
    let drift = -0.25;
    (0..RAIN_STREAKS)
        .map(|i| {
            let seed = |tag: u8| {
                let mut h = Fnv1a64::new_default();
                h.write_u64(i as u64);
                h.write_u8(tag);
                unit_f64(h.finish())
            };
            let len = (20.0 + 20.0 * seed(b'l')) * unit;
            let v = speed * (0.8 + 0.4 * seed(b'v'));
            let y = (seed(b'y') * size + time_ms * v).rem_euclid(size);
            let x = (seed(b'x') * size + drift * time_ms * v).rem_euclid(size);
            let start = Point::new(x, y);
            (start, start + Vec2::new(drift * len, len))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/motion.rs"]
mod tests;
