//! Timing: the live preview loop, the offline GIF export and the debounced preview thumbnail.

pub(crate) mod export;
pub(crate) mod playback;
pub(crate) mod preview;
