pub(crate) mod decode;
pub(crate) mod fonts;
pub(crate) mod icons;
pub(crate) mod texture;
