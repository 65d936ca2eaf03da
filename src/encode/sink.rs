use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::HaloResult;
use crate::render::surface::Surface;

/// Configuration handed to a [`FrameSink`] before the first frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame edge length in pixels.
    pub size: u32,
    /// Capture rate.
    pub fps: Fps,
    /// Number of frames that will be pushed.
    pub frames: u64,
}

/// Consumer of exported frames.
///
/// Ordering contract: `push_frame` is called in strictly increasing [`FrameIndex`] order between
/// one `begin` and one `end`.
pub trait FrameSink {
    /// Start a run.
    fn begin(&mut self, cfg: SinkConfig) -> HaloResult<()>;
    /// Consume one rendered frame.
    fn push_frame(&mut self, idx: FrameIndex, frame: &Surface) -> HaloResult<()>;
    /// Finish the run.
    fn end(&mut self) -> HaloResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    /// Frames in push order.
    pub frames: Vec<(FrameIndex, Surface)>,
    ended: bool,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration of the last run.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Whether the last run reached `end`.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> HaloResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Surface) -> HaloResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> HaloResult<()> {
        self.ended = true;
        Ok(())
    }
}
