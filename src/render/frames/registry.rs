use std::collections::HashMap;
use std::sync::Arc;

use crate::model::frame::ShapeType;
use crate::render::frames::FrameRenderer;
use crate::render::frames::shapes::{HeartFrame, HexagonFrame, StarFrame};
use crate::render::frames::styles::{
    DashedFrame, DoubleFrame, GeometricFrame, GradientFrame, MemphisFrame, NeonFrame, NoFrame,
    SolidFrame,
};
use crate::render::frames::texture::TextureFrame;

/// Resolves a shape type to its renderer, building each renderer at most once.
#[derive(Debug, Default)]
pub struct RendererRegistry {
    cache: HashMap<ShapeType, Arc<dyn FrameRenderer>>,
}

impl RendererRegistry {
    /// Empty registry; renderers are built on first lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer for `shape`.
    pub fn get(&mut self, shape: ShapeType) -> Arc<dyn FrameRenderer> {
        self.cache
            .entry(shape)
            .or_insert_with(|| {
                tracing::debug!(?shape, "building frame renderer");
                build(shape)
            })
            .clone()
    }

    /// Number of renderers built so far.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether no renderer has been built yet.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

fn build(shape: ShapeType) -> Arc<dyn FrameRenderer> {
    match shape {
        ShapeType::None => Arc::new(NoFrame),
        ShapeType::Solid => Arc::new(SolidFrame),
        ShapeType::Dashed => Arc::new(DashedFrame),
        ShapeType::Gradient => Arc::new(GradientFrame),
        ShapeType::Neon => Arc::new(NeonFrame),
        ShapeType::Double => Arc::new(DoubleFrame),
        ShapeType::Memphis => Arc::new(MemphisFrame),
        ShapeType::Geometric => Arc::new(GeometricFrame),
        ShapeType::Star => Arc::new(StarFrame),
        ShapeType::Heart => Arc::new(HeartFrame),
        ShapeType::Hexagon => Arc::new(HexagonFrame),
        ShapeType::CustomImage => Arc::new(TextureFrame),
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/render/frames/registry.rs"]
mod tests;
