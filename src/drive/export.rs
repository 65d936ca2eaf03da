use crate::editor::state::{Editor, Notice};
use crate::encode::gif::GifSinkOpts;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::color::Color;
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{HaloError, HaloResult};
use crate::render::compositor::Compositor;
use crate::render::surface::Surface;

/// Longest accepted export.
const MAX_EXPORT_FRAMES: u64 = 1800;

/// Parameters of an animated GIF export.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GifExportOpts {
    /// Capture rate.
    pub fps: Fps,
    /// Clip length in seconds.
    pub duration_secs: f64,
    /// NeuQuant speed, 1 (best) ..= 30 (fastest).
    pub speed: i32,
    /// Flatten color for partially transparent pixels.
    pub background: Color,
}

impl Default for GifExportOpts {
    fn default() -> Self {
        Self {
            fps: Fps { num: 30, den: 1 },
            duration_secs: 2.0,
            speed: 10,
            background: Color::WHITE,
        }
    }
}

impl GifExportOpts {
    /// Number of frames captured: `fps * duration`.
    pub fn frame_count(&self) -> u64 {
        self.fps.frames_for_secs(self.duration_secs)
    }

    /// Nominal timestamp of frame `i`: `i * 1000 / fps`.
    pub fn frame_time_ms(&self, i: u64) -> f64 {
        self.fps.frame_time_ms(FrameIndex(i))
    }

    pub(crate) fn validate(&self) -> HaloResult<()> {
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(HaloError::validation("export duration must be > 0"));
        }
        let n = self.frame_count();
        if n == 0 || n > MAX_EXPORT_FRAMES {
            return Err(HaloError::validation(format!(
                "export frame count must be 1..={MAX_EXPORT_FRAMES}, got {n}"
            )));
        }
        Ok(())
    }

    pub(crate) fn sink_opts(&self) -> GifSinkOpts {
        GifSinkOpts {
            speed: self.speed,
            background: self.background,
        }
    }
}

/// Export state shown to the user. `Failed` is distinct from `Rendering` so the UI never looks
/// stuck.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ExportStatus {
    /// No export has run.
    #[default]
    Idle,
    /// Capturing frames.
    Rendering {
        /// Frames captured so far.
        frame: u64,
        /// Frames in the run.
        total: u64,
    },
    /// Last export succeeded.
    Done,
    /// Last export failed.
    Failed(String),
}

/// Progress callback payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExportProgress {
    /// Frames captured so far.
    pub frame: u64,
    /// Frames in the run.
    pub total: u64,
}

/// A finished GIF export.
#[derive(Clone, Debug, PartialEq)]
pub struct GifExport {
    /// Encoded GIF.
    pub bytes: Vec<u8>,
    /// The time each frame was rendered at, in milliseconds.
    pub frame_times_ms: Vec<f64>,
}

/// Capture `opts.frame_count()` frames at their nominal timestamps into `sink`.
///
/// Clears the selection, marks the editor as recording and owns `surface` for the whole run.
/// Whatever the outcome, the recording flag is cleared, the status is set to `Done` or
/// `Failed`, and the rest frame is redrawn.
pub(crate) fn capture_frames(
    editor: &mut Editor,
    compositor: &mut Compositor,
    surface: &mut Surface,
    opts: &GifExportOpts,
    sink: &mut dyn FrameSink,
    progress: &mut dyn FnMut(ExportProgress),
) -> HaloResult<Vec<f64>> {
    let total = opts.frame_count();
    editor.deselect();
    editor.set_recording(true);
    editor.set_export_status(ExportStatus::Rendering { frame: 0, total });

    let result = run(editor, compositor, surface, opts, sink, progress);

    editor.set_recording(false);
    match &result {
        Ok(times) => {
            tracing::info!(frames = times.len(), "gif export finished");
            editor.set_export_status(ExportStatus::Done);
        }
        Err(e) => {
            tracing::warn!(error = %e, "gif export failed");
            editor.set_export_status(ExportStatus::Failed(e.to_string()));
            editor.push_notice(Notice::ExportFailed(e.to_string()));
        }
    }
    if let Err(e) = compositor.draw(&editor.scene(), 0.0, surface) {
        tracing::warn!(error = %e, "rest frame redraw failed after export");
    }
    result
}

fn run(
    editor: &mut Editor,
    compositor: &mut Compositor,
    surface: &mut Surface,
    opts: &GifExportOpts,
    sink: &mut dyn FrameSink,
    progress: &mut dyn FnMut(ExportProgress),
) -> HaloResult<Vec<f64>> {
    opts.validate()?;
    let total = opts.frame_count();
    sink.begin(SinkConfig {
        size: editor.canvas().size,
        fps: opts.fps,
        frames: total,
    })?;

    let mut times = Vec::with_capacity(total as usize);
    for i in 0..total {
        let t = opts.frame_time_ms(i);
        compositor.draw(&editor.scene(), t, surface)?;
        sink.push_frame(FrameIndex(i), surface)?;
        times.push(t);
        editor.set_export_status(ExportStatus::Rendering {
            frame: i + 1,
            total,
        });
        progress(ExportProgress {
            frame: i + 1,
            total,
        });
    }
    sink.end()?;
    Ok(times)
}

#[cfg(test)]
#[path = "../../tests/unit/drive/export.rs"]
mod tests;
