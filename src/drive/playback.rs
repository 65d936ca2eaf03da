use crate::model::layers::MotionEffect;

/// Handle of one scheduled redraw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameRequest(pub u64);

/// Host timer the preview loop schedules redraws on (an animation-frame callback, a timer).
pub trait FrameScheduler {
    /// Ask for one callback; the host later calls [`Playback::tick`].
    fn request_frame(&mut self) -> FrameRequest;
    /// Drop a pending callback.
    fn cancel(&mut self, request: FrameRequest);
}

/// Scheduler that only records requests; the caller ticks by hand.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next: u64,
    pending: Vec<FrameRequest>,
}

impl ManualScheduler {
    /// No pending requests.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests not yet cancelled or consumed.
    pub fn pending(&self) -> &[FrameRequest] {
        &self.pending
    }

    /// Consume the oldest pending request, as if its callback fired.
    pub fn fire(&mut self) -> Option<FrameRequest> {
        (!self.pending.is_empty()).then(|| self.pending.remove(0))
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameRequest {
        let r = FrameRequest(self.next);
        self.next += 1;
        self.pending.push(r);
        r
    }

    fn cancel(&mut self, request: FrameRequest) {
        self.pending.retain(|p| *p != request);
    }
}

/// Live preview loop state.
///
/// While running, every tick yields `elapsed = now - start` and schedules the next callback.
/// Stopping cancels the pending callback; the caller then draws the rest frame at `t = 0`.
#[derive(Debug, Default)]
pub struct Playback {
    start_ms: Option<f64>,
    pending: Option<FrameRequest>,
}

impl Playback {
    /// Stopped loop.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the loop is running.
    pub fn is_playing(&self) -> bool {
        self.start_ms.is_some()
    }

    /// Start at `now_ms` and schedule the first tick. Restarting resets the clock.
    pub fn start(&mut self, now_ms: f64, sched: &mut dyn FrameScheduler) {
        self.cancel_pending(sched);
        self.start_ms = Some(now_ms);
        self.pending = Some(sched.request_frame());
        tracing::debug!(now_ms, "playback started");
    }

    /// Stop and cancel the pending tick. Returns whether the loop was running.
    pub fn stop(&mut self, sched: &mut dyn FrameScheduler) -> bool {
        self.cancel_pending(sched);
        let was = self.start_ms.take().is_some();
        if was {
            tracing::debug!("playback stopped");
        }
        was
    }

    /// Handle a scheduler callback at `now_ms`.
    ///
    /// Returns the elapsed time to draw, or `None` when stopped. A static `effect` stops the
    /// loop, since there is nothing to animate.
    pub fn tick(
        &mut self,
        now_ms: f64,
        effect: MotionEffect,
        sched: &mut dyn FrameScheduler,
    ) -> Option<f64> {
        let start = self.start_ms?;
        self.pending = None;
        if !effect.is_animated() {
            self.stop(sched);
            return None;
        }
        self.pending = Some(sched.request_frame());
        Some((now_ms - start).max(0.0))
    }

    fn cancel_pending(&mut self, sched: &mut dyn FrameScheduler) {
        if let Some(r) = self.pending.take() {
            sched.cancel(r);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/drive/playback.rs"]
mod tests;
