use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::editor::state::Editor;
use crate::foundation::error::{HaloError, HaloResult};
use crate::model::frame::FrameConfig;
use crate::model::layers::{StickerConfig, TextConfig};
use crate::model::presets::default_preset;

/// Serialized design: `{ "frameConfig": { ..frame, "stickers": [..] }, "textLayers": [..] }`.
#[derive(Clone, Debug, PartialEq)]
pub struct DesignDocument {
    /// Frame style.
    pub frame: FrameConfig,
    /// Sticker layers, bottom first.
    pub stickers: Vec<StickerConfig>,
    /// Text layers, bottom first.
    pub text_layers: Vec<TextConfig>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Wire {
    frame_config: WireFrame,
    #[serde(default)]
    text_layers: Vec<TextConfig>,
}

#[derive(Serialize, Deserialize)]
struct WireFrame {
    #[serde(flatten)]
    frame: FrameConfig,
    #[serde(default)]
    stickers: Vec<StickerConfig>,
}

impl Default for DesignDocument {
    fn default() -> Self {
        Self {
            frame: default_preset(),
            stickers: Vec::new(),
            text_layers: Vec::new(),
        }
    }
}

impl Serialize for DesignDocument {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Wire {
            frame_config: WireFrame {
                frame: self.frame.clone(),
                stickers: self.stickers.clone(),
            },
            text_layers: self.text_layers.clone(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DesignDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let w = Wire::deserialize(deserializer)?;
        Ok(Self {
            frame: w.frame_config.frame,
            stickers: w.frame_config.stickers,
            text_layers: w.text_layers,
        })
    }
}

impl DesignDocument {
    /// Snapshot of the editor's frame and layers.
    pub fn from_editor(editor: &Editor) -> Self {
        Self {
            frame: editor.frame().clone(),
            stickers: editor.stickers().to_vec(),
            text_layers: editor.texts().to_vec(),
        }
    }

    /// Strict parse; any malformed field is an error.
    pub fn from_json(json: &str) -> HaloResult<Self> {
        serde_json::from_str(json).map_err(|e| HaloError::serde(e.to_string()))
    }

    /// Pretty JSON.
    pub fn to_json(&self) -> HaloResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| HaloError::serde(e.to_string()))
    }

    /// Tolerant parse for documents from the outside world.
    ///
    /// Every frame field that is missing or malformed takes the base preset's value; malformed
    /// layers are dropped. Stickers may also sit at the top level next to `frameConfig`.
    /// Returns the document and the paths of the fields that were repaired.
    pub fn from_json_lenient(json: &str) -> (Self, Vec<String>) {
        let mut repaired = Vec::new();
        let root = match serde_json::from_str::<Value>(json) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                tracing::warn!("design document is not a JSON object; using defaults");
                return (Self::default(), vec!["$".to_owned()]);
            }
        };

        let empty = Map::new();
        let frame_obj = match root.get("frameConfig") {
            Some(Value::Object(m)) => m,
            other => {
                if other.is_some() {
                    repaired.push("frameConfig".to_owned());
                }
                &empty
            }
        };
        let frame = hydrate_frame(frame_obj, &mut repaired);

        let stickers_value = frame_obj
            .get("stickers")
            .map(|v| ("frameConfig.stickers", v))
            .or_else(|| root.get("stickers").map(|v| ("stickers", v)));
        let stickers: Vec<StickerConfig> = match stickers_value {
            Some((path, v)) => hydrate_list(path, v, &mut repaired),
            None => Vec::new(),
        };
        let text_layers: Vec<TextConfig> = match root.get("textLayers") {
            Some(v) => hydrate_list("textLayers", v, &mut repaired),
            None => Vec::new(),
        };

        if !repaired.is_empty() {
            tracing::warn!(fields = ?repaired, "design document repaired");
        }
        (
            Self {
                frame,
                stickers: stickers.into_iter().map(sanitize_sticker).collect(),
                text_layers: text_layers.into_iter().map(sanitize_text).collect(),
            },
            repaired,
        )
    }

    /// Replace the editor's frame (recorded in its history) and layers with this document's.
    pub fn apply_to(&self, editor: &mut Editor) {
        editor.set_frame(self.frame.clone());
        editor.replace_layers(self.stickers.clone(), self.text_layers.clone());
    }
}

fn field<T: DeserializeOwned>(
    obj: &Map<String, Value>,
    key: &str,
    repaired: &mut Vec<String>,
) -> Option<T> {
    let v = obj.get(key)?;
    if v.is_null() {
        return None;
    }
    match serde_json::from_value(v.clone()) {
        Ok(t) => Some(t),
        Err(e) => {
            tracing::debug!(key, error = %e, "frame field rejected");
            repaired.push(format!("frameConfig.{key}"));
            None
        }
    }
}

fn hydrate_frame(obj: &Map<String, Value>, repaired: &mut Vec<String>) -> FrameConfig {
    let base = default_preset();
    let mut frame = base.clone();
    if let Some(v) = field(obj, "id", repaired) {
        frame.id = v;
    }
    if let Some(v) = field(obj, "shapeType", repaired) {
        frame.shape_type = v;
    }
    if let Some(v) = field(obj, "name", repaired) {
        frame.name = v;
    }
    if let Some(v) = field(obj, "color1", repaired) {
        frame.color1 = v;
    }
    frame.color2 = field(obj, "color2", repaired);
    if let Some(v) = field::<f64>(obj, "width", repaired) {
        frame.width = v;
        frame.width = frame.clamped_width();
    }
    frame.image_url = field(obj, "imageUrl", repaired);

    if frame.shape_type.uses_color2() && frame.color2.is_none() {
        frame.color2 = base.color2.or_else(|| frame.shape_type.default_color2());
    }
    frame
}

fn hydrate_list<T: DeserializeOwned>(path: &str, v: &Value, repaired: &mut Vec<String>) -> Vec<T> {
    let Value::Array(items) = v else {
        repaired.push(path.to_owned());
        return Vec::new();
    };
    items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| match serde_json::from_value(item.clone()) {
            Ok(t) => Some(t),
            Err(e) => {
                tracing::debug!(path, index = i, error = %e, "layer dropped");
                repaired.push(format!("{path}[{i}]"));
                None
            }
        })
        .collect()
}

fn sanitize_sticker(mut s: StickerConfig) -> StickerConfig {
    s.set_scale(s.scale);
    s
}

fn sanitize_text(mut t: TextConfig) -> TextConfig {
    t.set_font_size(t.font_size);
    t
}

#[cfg(test)]
#[path = "../../tests/unit/io/document.rs"]
mod tests;
