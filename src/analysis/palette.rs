use rayon::prelude::*;

use crate::assets::decode::PreparedImage;
use crate::foundation::color::Color;
use crate::foundation::error::{HaloError, HaloResult};
use crate::foundation::math::unpremultiply_px;

/// Colors offered by default.
pub const DEFAULT_PALETTE_SIZE: usize = 3;

/// Channel bits kept when bucketing.
const QUANT_BITS: u32 = 4;
const BUCKETS: usize = 1 << (3 * QUANT_BITS);
/// Pixels this transparent are ignored.
const MIN_ALPHA: u8 = 128;
/// Squared RGB distance below which two palette entries count as the same color.
const MIN_DISTANCE_SQ: u32 = 48 * 48;
/// Sample at most this many pixels.
const MAX_SAMPLES: usize = 1 << 16;

#[derive(Clone, Copy, Default)]
struct Bucket {
    count: u64,
    r: u64,
    g: u64,
    b: u64,
}

impl Bucket {
    fn add(&mut self, o: &Self) {
        self.count += o.count;
        self.r += o.r;
        self.g += o.g;
        self.b += o.b;
    }

    fn mean(&self) -> Color {
        let n = self.count.max(1);
        Color::rgb((self.r / n) as u8, (self.g / n) as u8, (self.b / n) as u8)
    }
}

fn bucket_index(px: [u8; 4]) -> usize {
    let q = |c: u8| usize::from(c >> (8 - QUANT_BITS));
    (q(px[0]) << (2 * QUANT_BITS)) | (q(px[1]) << QUANT_BITS) | q(px[2])
}

/// Up to `k` dominant colors of `image`, most frequent first.
///
/// Pixels are quantized to a 4-bit-per-channel histogram; each bucket reports its mean color and
/// near-duplicates are skipped. Fails when the image has no opaque pixels.
pub fn extract_palette(image: &PreparedImage, k: usize) -> HaloResult<Vec<Color>> {
    if k == 0 {
        return Ok(Vec::new());
    }
    let px_count = image.rgba8_premul.len() / 4;
    let stride = px_count.div_ceil(MAX_SAMPLES).max(1);

    let hist = image
        .rgba8_premul
        .par_chunks_exact(4 * stride)
        .fold(
            || vec![Bucket::default(); BUCKETS],
            |mut acc, chunk| {
                let px = unpremultiply_px([chunk[0], chunk[1], chunk[2], chunk[3]]);
                if px[3] >= MIN_ALPHA {
                    let b = &mut acc[bucket_index(px)];
                    b.count += 1;
                    b.r += u64::from(px[0]);
                    b.g += u64::from(px[1]);
                    b.b += u64::from(px[2]);
                }
                acc
            },
        )
        .reduce(
            || vec![Bucket::default(); BUCKETS],
            |mut a, b| {
                for (x, y) in a.iter_mut().zip(&b) {
                    x.add(y);
                }
                a
            },
        );

    let mut ranked: Vec<&Bucket> = hist.iter().filter(|b| b.count > 0).collect();
    if ranked.is_empty() {
        return Err(HaloError::decode("image has no opaque pixels to sample"));
    }
    ranked.sort_by(|a, b| b.count.cmp(&a.count));

    let mut out: Vec<Color> = Vec::with_capacity(k);
    for b in ranked {
        let c = b.mean();
        if out.iter().all(|o| o.distance_sq(c) >= MIN_DISTANCE_SQ) {
            out.push(c);
            if out.len() == k {
                break;
            }
        }
    }
    tracing::debug!(colors = out.len(), "palette extracted");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/analysis/palette.rs"]
mod tests;
