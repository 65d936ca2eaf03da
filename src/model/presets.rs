use std::sync::OnceLock;

use crate::foundation::color::Color;
use crate::model::frame::{FrameConfig, ShapeType};

/// Fixed preset catalog, in panel order. The first entry seeds every new history.
pub fn presets() -> &'static [FrameConfig] {
    static CATALOG: OnceLock<Vec<FrameConfig>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

/// Look up a preset by id.
pub fn preset(id: &str) -> Option<&'static FrameConfig> {
    presets().iter().find(|p| p.id == id)
}

/// The preset a fresh editor starts with.
pub fn default_preset() -> FrameConfig {
    presets()[0].clone()
}

fn build_catalog() -> Vec<FrameConfig> {
    use ShapeType as S;

    let hex = |r, g, b| Color::rgb(r, g, b);
    vec![
        FrameConfig::new("classic", S::Solid, "Classic", hex(0xff, 0xff, 0xff), None, 20.0),
        FrameConfig::new("midnight", S::Solid, "Midnight", hex(0x11, 0x18, 0x27), None, 24.0),
        FrameConfig::new("dashed", S::Dashed, "Stitched", hex(0xf5, 0x9e, 0x0b), None, 12.0),
        FrameConfig::new(
            "sunset",
            S::Gradient,
            "Sunset",
            hex(0xf9, 0x73, 0x16),
            Some(hex(0xec, 0x48, 0x99)),
            24.0,
        ),
        FrameConfig::new(
            "ocean",
            S::Gradient,
            "Ocean",
            hex(0x06, 0xb6, 0xd4),
            Some(hex(0x3b, 0x82, 0xf6)),
            24.0,
        ),
        FrameConfig::new(
            "cyber-neon",
            S::Neon,
            "Cyber Neon",
            hex(0xd9, 0x46, 0xef),
            Some(hex(0x22, 0xd3, 0xee)),
            16.0,
        ),
        FrameConfig::new(
            "double-gold",
            S::Double,
            "Double Gold",
            hex(0xea, 0xb3, 0x08),
            Some(hex(0xff, 0xff, 0xff)),
            28.0,
        ),
        FrameConfig::new(
            "memphis-pop",
            S::Memphis,
            "Memphis Pop",
            hex(0xfa, 0xcc, 0x15),
            Some(hex(0x11, 0x18, 0x27)),
            20.0,
        ),
        FrameConfig::new(
            "geometric-dots",
            S::Geometric,
            "Geometric Dots",
            hex(0x10, 0xb9, 0x81),
            None,
            14.0,
        ),
        FrameConfig::new("star", S::Star, "Star", hex(0xfa, 0xcc, 0x15), None, 16.0),
        FrameConfig::new(
            "heart",
            S::Heart,
            "Sweetheart",
            hex(0xef, 0x44, 0x44),
            Some(hex(0xf4, 0x72, 0xb6)),
            18.0,
        ),
        FrameConfig::new("hexagon", S::Hexagon, "Hexagon", hex(0x63, 0x66, 0xf1), None, 18.0),
        FrameConfig::new(
            "textured",
            S::CustomImage,
            "Textured",
            hex(0x9c, 0xa3, 0xaf),
            Some(Color::rgba(0xff, 0xff, 0xff, 0)),
            36.0,
        )
        .with_image_url("textures/marble.png"),
        FrameConfig::new("none", S::None, "No Frame", hex(0xff, 0xff, 0xff), None, 5.0),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/model/presets.rs"]
mod tests;
