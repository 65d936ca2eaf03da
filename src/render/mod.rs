pub(crate) mod blur;
pub(crate) mod compositor;
pub(crate) mod frames;
pub(crate) mod motion;
pub(crate) mod painter;
pub(crate) mod plan;
pub(crate) mod sprites;
pub(crate) mod surface;
pub(crate) mod text;
