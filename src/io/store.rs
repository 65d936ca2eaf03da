use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::foundation::error::{HaloError, HaloResult};
use crate::foundation::math::Fnv1a64;
use crate::io::document::DesignDocument;

/// Everything handed to the persistence collaborator on publish.
#[derive(Clone, Debug, PartialEq)]
pub struct PublishRequest {
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// User tags.
    pub tags: Vec<String>,
    /// Frame and layers.
    pub document: DesignDocument,
    /// Rendered rest frame.
    pub png: Vec<u8>,
}

/// Metadata stored next to a published design.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedMeta {
    /// Assigned id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// User tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// External persistence for designs.
pub trait DesignStore {
    /// Raw JSON of the design `id`. Hydration is the caller's job.
    fn load(&self, id: &str) -> HaloResult<String>;
    /// Persist a design; returns its id.
    fn publish(&mut self, request: &PublishRequest) -> HaloResult<String>;
}

/// Receives the rendered profile picture.
pub trait AvatarSink {
    /// Take the PNG bytes.
    fn accept_avatar(&mut self, png: Vec<u8>) -> HaloResult<()>;
}

impl AvatarSink for Vec<u8> {
    fn accept_avatar(&mut self, png: Vec<u8>) -> HaloResult<()> {
        *self = png;
        Ok(())
    }
}

/// Stores each design as `<id>.json`, `<id>.png` and `<id>.meta.json` in one directory.
#[derive(Clone, Debug)]
pub struct DirDesignStore {
    root: PathBuf,
}

impl DirDesignStore {
    /// Store rooted at `root`; the directory is created on first publish.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory designs are written to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Metadata of design `id`.
    pub fn meta(&self, id: &str) -> HaloResult<PublishedMeta> {
        let path = self.path(id, "meta.json")?;
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("read '{}'", path.display()))?;
        serde_json::from_str(&text).map_err(|e| HaloError::serde(e.to_string()))
    }

    fn path(&self, id: &str, ext: &str) -> HaloResult<PathBuf> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(HaloError::validation(format!("invalid design id \"{id}\"")));
        }
        Ok(self.root.join(format!("{id}.{ext}")))
    }
}

/// Lowercase ASCII slug of `name`, at most 40 chars.
pub(crate) fn slug(name: &str) -> String {
    let mut out = String::new();
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
        if out.len() >= 40 {
            break;
        }
    }
    let trimmed = out.trim_end_matches('-');
    if trimmed.is_empty() {
        "design".to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn design_id(name: &str, json: &str, png: &[u8]) -> String {
    let mut h = Fnv1a64::new_default();
    h.write_bytes(json.as_bytes());
    h.write_u8(0);
    h.write_bytes(png);
    format!("{}-{:08x}", slug(name), h.finish() as u32)
}

impl DesignStore for DirDesignStore {
    fn load(&self, id: &str) -> HaloResult<String> {
        let path = self.path(id, "json")?;
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("read design '{}'", path.display()))?;
        Ok(text)
    }

    fn publish(&mut self, request: &PublishRequest) -> HaloResult<String> {
        if request.name.trim().is_empty() {
            return Err(HaloError::validation("design name must not be empty"));
        }
        let json = request.document.to_json()?;
        let id = design_id(&request.name, &json, &request.png);

        std::fs::create_dir_all(&self.root)
            .with_context(|| format!("create store dir '{}'", self.root.display()))?;
        let meta = PublishedMeta {
            id: id.clone(),
            name: request.name.trim().to_owned(),
            description: request.description.clone(),
            tags: request
                .tags
                .iter()
                .map(|t| t.trim().to_owned())
                .filter(|t| !t.is_empty())
                .collect(),
        };
        let meta_json =
            serde_json::to_string_pretty(&meta).map_err(|e| HaloError::serde(e.to_string()))?;

        for (ext, bytes) in [
            ("json", json.as_bytes()),
            ("png", request.png.as_slice()),
            ("meta.json", meta_json.as_bytes()),
        ] {
            let path = self.path(&id, ext)?;
            std::fs::write(&path, bytes).with_context(|| format!("write '{}'", path.display()))?;
        }
        tracing::info!(id = %id, root = %self.root.display(), "design published");
        Ok(id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/store.rs"]
mod tests;
