/// The single selected layer, if any. Stickers and texts are mutually exclusive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    None,
    /// Sticker with the given id.
    Sticker(String),
    /// Text layer with the given id.
    Text(String),
}

impl Selection {
    /// Selected sticker id.
    pub fn sticker(&self) -> Option<&str> {
        match self {
            Self::Sticker(id) => Some(id),
            _ => None,
        }
    }

    /// Selected text id.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(id) => Some(id),
            _ => None,
        }
    }

    /// Whether anything is selected.
    pub fn is_some(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// What the active pointer gesture is doing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
    /// No gesture in flight.
    #[default]
    None,
    /// Moving a sticker or text layer.
    Drag,
    /// Resizing the selected sticker from a corner.
    Scale,
    /// Rotating the selected sticker from its top handle.
    Rotate,
    /// Moving the base photo.
    Pan,
}
