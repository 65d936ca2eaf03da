//! Engine configuration: built-in defaults, then an optional JSON file, then `HALOFRAME_*`
//! environment variables. The CLI applies its flags last.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::drive::export::GifExportOpts;
use crate::foundation::color::Color;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{HaloError, HaloResult};

/// Editor and export settings. Every field has a default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Logical canvas edge.
    pub canvas_size: u32,
    /// GIF capture rate.
    pub export_fps: u32,
    /// GIF clip length in seconds.
    pub export_duration_secs: f64,
    /// Quiet period before a preview thumbnail is sampled.
    pub preview_debounce_ms: f64,
    /// Preview thumbnail edge.
    pub thumbnail_size: u32,
    /// NeuQuant speed, 1 ..= 30.
    pub gif_speed: i32,
    /// GIF flatten color.
    pub export_background: Color,
    /// Font files loaded in addition to (or instead of) system fonts.
    pub font_files: Vec<PathBuf>,
    /// Load platform fonts.
    pub system_fonts: bool,
    /// Base directory relative texture URLs resolve against.
    pub asset_root: PathBuf,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_size: 1024,
            export_fps: 30,
            export_duration_secs: 2.0,
            preview_debounce_ms: 500.0,
            thumbnail_size: 256,
            gif_speed: 10,
            export_background: Color::WHITE,
            font_files: Vec::new(),
            system_fonts: true,
            asset_root: PathBuf::from("."),
        }
    }
}

impl EditorConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> HaloResult<Self> {
        serde_json::from_str(json).map_err(|e| HaloError::serde(e.to_string()))
    }

    /// Read a JSON config file.
    pub fn from_file(path: &Path) -> HaloResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json(&text)
    }

    /// Defaults, then `path` if given, then the process environment.
    pub fn load(path: Option<&Path>) -> HaloResult<Self> {
        let mut cfg = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        cfg.apply_env(|k| std::env::var(k).ok())?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Overlay `HALOFRAME_*` variables read through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> HaloResult<()> {
        fn parse<T: std::str::FromStr>(key: &str, raw: &str) -> HaloResult<T> {
            raw.trim()
                .parse()
                .map_err(|_| HaloError::validation(format!("{key}: cannot parse \"{raw}\"")))
        }

        if let Some(v) = lookup("HALOFRAME_CANVAS_SIZE") {
            self.canvas_size = parse("HALOFRAME_CANVAS_SIZE", &v)?;
        }
        if let Some(v) = lookup("HALOFRAME_EXPORT_FPS") {
            self.export_fps = parse("HALOFRAME_EXPORT_FPS", &v)?;
        }
        if let Some(v) = lookup("HALOFRAME_EXPORT_SECS") {
            self.export_duration_secs = parse("HALOFRAME_EXPORT_SECS", &v)?;
        }
        if let Some(v) = lookup("HALOFRAME_GIF_SPEED") {
            self.gif_speed = parse("HALOFRAME_GIF_SPEED", &v)?;
        }
        if let Some(v) = lookup("HALOFRAME_FONT") {
            self.font_files
                .extend(std::env::split_paths(&v).filter(|p| !p.as_os_str().is_empty()));
        }
        if let Some(v) = lookup("HALOFRAME_ASSET_ROOT") {
            self.asset_root = PathBuf::from(v);
        }
        Ok(())
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> HaloResult<()> {
        Canvas::new(self.canvas_size)?;
        Fps::new(self.export_fps, 1)?;
        if !self.export_duration_secs.is_finite() || self.export_duration_secs <= 0.0 {
            return Err(HaloError::validation("export_duration_secs must be > 0"));
        }
        if !(1..=30).contains(&self.gif_speed) {
            return Err(HaloError::validation("gif_speed must be 1..=30"));
        }
        if self.thumbnail_size == 0 {
            return Err(HaloError::validation("thumbnail_size must be > 0"));
        }
        if !self.preview_debounce_ms.is_finite() || self.preview_debounce_ms < 0.0 {
            return Err(HaloError::validation("preview_debounce_ms must be >= 0"));
        }
        Ok(())
    }

    /// Validated canvas.
    pub fn canvas(&self) -> HaloResult<Canvas> {
        Canvas::new(self.canvas_size)
    }

    /// GIF export options derived from this config.
    pub fn gif_opts(&self) -> HaloResult<GifExportOpts> {
        Ok(GifExportOpts {
            fps: Fps::new(self.export_fps, 1)?,
            duration_secs: self.export_duration_secs,
            speed: self.gif_speed,
            background: self.export_background,
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
