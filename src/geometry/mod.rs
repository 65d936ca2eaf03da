//! Pivot rotation and pointer normalization shared by the renderer and the interaction controller.

pub(crate) mod display;
pub(crate) mod rotate;
