//! Transient editor data: frame styles, layers, selection and frame history.

pub(crate) mod frame;
pub(crate) mod history;
pub(crate) mod layers;
pub(crate) mod presets;
pub(crate) mod selection;
