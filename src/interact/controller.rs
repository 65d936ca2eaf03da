use crate::assets::fonts::TextMetrics;
use crate::editor::state::Editor;
use crate::foundation::core::{Canvas, Point, Rect, Vec2};
use crate::geometry::display::DisplayMapping;
use crate::geometry::rotate::{normalize_deg, rad_to_deg};
use crate::interact::hit::{Handle, HitTarget, LayerMetrics, hit_test, layer_center};
use crate::model::selection::{InteractionMode, Selection};

/// The gesture in flight between pointer-down and pointer-up.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Gesture {
    /// Idle.
    #[default]
    None,
    /// Moving a sticker; `grab` is the pointer's offset from the sticker center at pointer-down.
    DragSticker {
        /// Sticker id.
        id: String,
        /// Pointer minus center at pointer-down.
        grab: Vec2,
    },
    /// Moving a straight text layer.
    DragText {
        /// Text id.
        id: String,
        /// Pointer minus anchor at pointer-down.
        grab: Vec2,
    },
    /// Sliding curved text along its circle.
    ArcText {
        /// Text id.
        id: String,
        /// Pointer angle at pointer-down, degrees.
        start_angle: f64,
        /// Layer rotation at pointer-down.
        start_rotation: f64,
    },
    /// Resizing the selected sticker from a corner.
    Scale {
        /// Sticker id.
        id: String,
    },
    /// Rotating the selected sticker by its top handle.
    Rotate {
        /// Sticker id.
        id: String,
    },
    /// Panning the photo.
    Pan {
        /// Pointer minus photo center at pointer-down.
        grab: Vec2,
    },
}

impl Gesture {
    fn mode(&self) -> InteractionMode {
        match self {
            Self::None => InteractionMode::None,
            Self::DragSticker { .. } | Self::DragText { .. } | Self::ArcText { .. } => {
                InteractionMode::Drag
            }
            Self::Scale { .. } => InteractionMode::Scale,
            Self::Rotate { .. } => InteractionMode::Rotate,
            Self::Pan { .. } => InteractionMode::Pan,
        }
    }
}

/// Pointer state machine over an [`Editor`].
///
/// Positions arrive in display (client) pixels and are mapped into logical canvas space first.
/// Only one gesture runs at a time; a second pointer-down while one is active is ignored.
#[derive(Clone, Debug)]
pub struct InteractionController {
    mapping: DisplayMapping,
    metrics: LayerMetrics,
    gesture: Gesture,
}

impl InteractionController {
    /// Controller for `canvas`, displayed at its logical size until [`Self::set_display`].
    pub fn new(canvas: Canvas) -> Self {
        Self {
            mapping: DisplayMapping::identity(canvas.size_f64()),
            metrics: LayerMetrics::for_canvas(canvas),
            gesture: Gesture::None,
        }
    }

    /// The canvas element's on-screen rect changed.
    pub fn set_display(&mut self, display: Rect) {
        self.mapping.set_display(display);
    }

    /// Display-to-canvas mapping.
    pub fn mapping(&self) -> &DisplayMapping {
        &self.mapping
    }

    /// Layer geometry used for hit-testing.
    pub fn metrics(&self) -> &LayerMetrics {
        &self.metrics
    }

    /// Gesture in flight.
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Classify a press and start the matching gesture.
    ///
    /// Returns `None` when the press was ignored (a gesture is already active, or an export owns
    /// the canvas).
    pub fn pointer_down(
        &mut self,
        editor: &mut Editor,
        client: Point,
        text: &mut dyn TextMetrics,
    ) -> Option<HitTarget> {
        if self.gesture != Gesture::None || editor.is_recording() {
            tracing::debug!(gesture = ?self.gesture, "pointer down ignored");
            return None;
        }
        let p = self.mapping.to_canvas(client);
        let target = hit_test(p, &editor.scene(), &self.metrics, text);
        let canvas = editor.canvas();

        self.gesture = match &target {
            HitTarget::Handle { sticker, handle } => match handle {
                Handle::Rotate => Gesture::Rotate {
                    id: sticker.clone(),
                },
                Handle::Scale(_) => Gesture::Scale {
                    id: sticker.clone(),
                },
            },
            HitTarget::Text(id) => {
                editor.select(Selection::Text(id.clone()));
                match editor.texts().iter().find(|t| &t.id == id) {
                    Some(t) if t.curved => Gesture::ArcText {
                        id: id.clone(),
                        start_angle: angle_deg(p, canvas.center()),
                        start_rotation: t.rotation,
                    },
                    Some(t) => Gesture::DragText {
                        id: id.clone(),
                        grab: p - layer_center(canvas, t.offset()),
                    },
                    None => Gesture::None,
                }
            }
            HitTarget::Sticker(id) => {
                editor.select(Selection::Sticker(id.clone()));
                match editor.stickers().iter().find(|s| &s.id == id) {
                    Some(s) => Gesture::DragSticker {
                        id: id.clone(),
                        grab: p - layer_center(canvas, s.offset()),
                    },
                    None => Gesture::None,
                }
            }
            HitTarget::Photo => {
                editor.deselect();
                Gesture::Pan {
                    grab: p - layer_center(canvas, editor.transform().position),
                }
            }
            HitTarget::Nothing => {
                editor.deselect();
                Gesture::None
            }
        };
        editor.set_mode(self.gesture.mode());
        Some(target)
    }

    /// Apply pointer motion to the active gesture. Returns whether state changed.
    pub fn pointer_move(&mut self, editor: &mut Editor, client: Point) -> bool {
        let p = self.mapping.to_canvas(client);
        let canvas = editor.canvas();
        let to_offset = |grab: Vec2| p - grab - canvas.center();

        match &self.gesture {
            Gesture::None => false,
            Gesture::DragSticker { id, grab } => {
                let v = to_offset(*grab);
                editor.sticker_mut(id).map(|s| s.set_offset(v)).is_some()
            }
            Gesture::DragText { id, grab } => {
                let v = to_offset(*grab);
                editor.text_mut(id).map(|t| t.set_offset(v)).is_some()
            }
            Gesture::ArcText {
                id,
                start_angle,
                start_rotation,
            } => {
                let delta = normalize_deg(angle_deg(p, canvas.center()) - start_angle);
                let rotation = normalize_deg(start_rotation + delta);
                editor.text_mut(id).map(|t| t.rotation = rotation).is_some()
            }
            Gesture::Scale { id } => {
                let base = self.metrics.sticker_base_radius();
                match editor.sticker_mut(id) {
                    Some(s) => {
                        let dist = p.distance(layer_center(canvas, s.offset()));
                        s.set_scale(dist / base);
                        true
                    }
                    None => false,
                }
            }
            Gesture::Rotate { id } => match editor.sticker_mut(id) {
                Some(s) => {
                    let center = layer_center(canvas, s.offset());
                    s.rotation = normalize_deg(angle_deg(p, center) + 90.0);
                    true
                }
                None => false,
            },
            Gesture::Pan { grab } => {
                editor.transform_mut().position = to_offset(*grab);
                true
            }
        }
    }

    /// End the gesture (pointer up, leave or cancel).
    pub fn pointer_up(&mut self, editor: &mut Editor) {
        if self.gesture != Gesture::None {
            tracing::debug!(gesture = ?self.gesture, "gesture ended");
        }
        self.gesture = Gesture::None;
        editor.set_mode(InteractionMode::None);
    }
}

/// Angle of `p` around `center` in degrees, clockwise from 3 o'clock.
fn angle_deg(p: Point, center: Point) -> f64 {
    let v = p - center;
    rad_to_deg(v.y.atan2(v.x))
}

#[cfg(test)]
#[path = "../../tests/unit/interact/controller.rs"]
mod tests;
