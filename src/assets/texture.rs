use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use crate::assets::decode::{PreparedImage, decode_image};
use crate::foundation::error::{HaloError, HaloResult};

/// Source of raw texture bytes, addressed by the `imageUrl` stored in a frame config.
pub trait TextureLoader {
    /// Fetch the encoded bytes behind `url`.
    fn load(&self, url: &str) -> HaloResult<Vec<u8>>;
}

/// Loads texture URLs as paths relative to a root directory.
#[derive(Clone, Debug)]
pub struct DirTextureLoader {
    root: PathBuf,
}

impl DirTextureLoader {
    /// Resolve URLs under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TextureLoader for DirTextureLoader {
    fn load(&self, url: &str) -> HaloResult<Vec<u8>> {
        let rel = normalize_rel_path(url.strip_prefix("file://").unwrap_or(url))?;
        let path = self.root.join(Path::new(&rel));
        std::fs::read(&path)
            .with_context(|| format!("read texture bytes from '{}'", path.display()))
            .map_err(HaloError::from)
    }
}

/// Load state of one texture URL.
#[derive(Clone, Debug)]
pub enum TextureState {
    /// Requested, not yet pumped.
    Pending,
    /// Decoded and drawable.
    Ready(Arc<PreparedImage>),
    /// The last load attempt failed.
    Failed(String),
}

/// Texture loads modeled as explicit deferred work.
///
/// Renders call [`TextureCache::request`] and draw whatever [`TextureCache::resolve`] returns; the
/// host calls [`TextureCache::pump`] between frames to perform the IO and decoding.
#[derive(Debug, Default)]
pub struct TextureCache {
    states: HashMap<String, TextureState>,
    queue: Vec<String>,
    last_ready: Option<Arc<PreparedImage>>,
}

impl TextureCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `url` unless it is already known. Returns its current state.
    pub fn request(&mut self, url: &str) -> &TextureState {
        if !self.states.contains_key(url) {
            tracing::debug!(url, "texture requested");
            self.queue.push(url.to_owned());
        }
        self.states
            .entry(url.to_owned())
            .or_insert(TextureState::Pending)
    }

    /// Current state of `url`, if it was ever requested.
    pub fn state(&self, url: &str) -> Option<&TextureState> {
        self.states.get(url)
    }

    /// Texture to draw for `url`: its own image once ready, the most recently loaded texture
    /// after a failed load, and `None` (draw the placeholder) while the load is pending.
    pub fn resolve(&self, url: &str) -> Option<Arc<PreparedImage>> {
        match self.states.get(url) {
            Some(TextureState::Ready(img)) => Some(img.clone()),
            Some(TextureState::Failed(_)) => self.last_ready.clone(),
            Some(TextureState::Pending) | None => None,
        }
    }

    /// Number of queued loads.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Perform every queued load. Failures are recorded, never returned.
    ///
    /// Returns the number of loads that completed successfully.
    pub fn pump(&mut self, loader: &dyn TextureLoader) -> usize {
        let mut ok = 0usize;
        for url in std::mem::take(&mut self.queue) {
            let state = match loader.load(&url).and_then(|bytes| decode_image(&bytes)) {
                Ok(img) => {
                    let img = Arc::new(img);
                    self.last_ready = Some(img.clone());
                    ok += 1;
                    tracing::debug!(url = %url, w = img.width, h = img.height, "texture ready");
                    TextureState::Ready(img)
                }
                Err(e) => {
                    tracing::warn!(url = %url, error = %e, "texture load failed");
                    TextureState::Failed(e.to_string())
                }
            };
            self.states.insert(url, state);
        }
        ok
    }

    /// Forget a failed URL so the next request retries it.
    pub fn retry(&mut self, url: &str) {
        if matches!(self.states.get(url), Some(TextureState::Failed(_))) {
            self.states.remove(url);
        }
    }
}

/// Normalize a relative asset path: `/` separators, no `.` segments, no absolute paths or `..`.
pub(crate) fn normalize_rel_path(source: &str) -> HaloResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(HaloError::validation("texture paths must be relative"));
    }
    if s.is_empty() {
        return Err(HaloError::validation("texture path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(HaloError::validation("texture paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(HaloError::validation("texture path must contain a file name"));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/texture.rs"]
mod tests;
