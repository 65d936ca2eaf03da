use std::collections::HashMap;
use std::sync::Arc;

use crate::assets::decode::{PreparedImage, parse_svg, rasterize_svg};
use crate::assets::icons::icon_svg;

/// Raster sizes are rounded up to this step so small scale changes reuse a sprite.
pub(crate) const SPRITE_BUCKET: u32 = 32;
/// Largest sprite edge.
pub(crate) const MAX_SPRITE: u32 = 2048;

/// Rasterized sticker icons keyed by `(icon, pixel size)`.
#[derive(Debug, Default)]
pub(crate) struct SpriteCache {
    trees: HashMap<String, Option<Arc<usvg::Tree>>>,
    rasters: HashMap<(String, u32), Option<Arc<PreparedImage>>>,
}

impl SpriteCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Sprite for `icon` at least `px` pixels wide, or `None` when the icon is unknown or fails
    /// to rasterize (callers draw a placeholder).
    pub(crate) fn sprite(&mut self, icon: &str, px: f64) -> Option<Arc<PreparedImage>> {
        let size = bucket(px);
        let key = (icon.to_owned(), size);
        if let Some(hit) = self.rasters.get(&key) {
            return hit.clone();
        }
        let raster = self.tree(icon).and_then(|tree| match rasterize_svg(&tree, size, size) {
            Ok(img) => Some(Arc::new(img)),
            Err(e) => {
                tracing::warn!(icon, size, error = %e, "sticker raster failed");
                None
            }
        });
        tracing::debug!(icon, size, ok = raster.is_some(), "sticker sprite cached");
        self.rasters.insert(key, raster.clone());
        raster
    }

    fn tree(&mut self, icon: &str) -> Option<Arc<usvg::Tree>> {
        self.trees
            .entry(icon.to_owned())
            .or_insert_with(|| {
                let src = icon_svg(icon)?;
                match parse_svg(src.as_bytes()) {
                    Ok(tree) => Some(Arc::new(tree)),
                    Err(e) => {
                        tracing::warn!(icon, error = %e, "sticker icon failed to parse");
                        None
                    }
                }
            })
            .clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.rasters.len()
    }
}

pub(crate) fn bucket(px: f64) -> u32 {
    if !px.is_finite() || px <= 0.0 {
        return SPRITE_BUCKET;
    }
    let n = (px / f64::from(SPRITE_BUCKET)).ceil().max(1.0) as u32;
    (n * SPRITE_BUCKET).min(MAX_SPRITE)
}

#[cfg(test)]
#[path = "../../tests/unit/render/sprites.rs"]
mod tests;
