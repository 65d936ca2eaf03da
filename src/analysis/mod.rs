//! Photo analysis: auto-fit scale and dominant colors.

pub(crate) mod autofit;
pub(crate) mod palette;
