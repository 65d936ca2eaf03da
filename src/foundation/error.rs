/// Convenience result type used across Haloframe.
pub type HaloResult<T> = Result<T, HaloError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Rendering never returns these for recoverable conditions (missing textures, undecodable
/// stickers, missing fonts); those degrade to placeholders instead.
#[derive(thiserror::Error, Debug)]
pub enum HaloError {
    /// Invalid user-provided configuration or document data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while decoding photos, textures or icons.
    #[error("decode error: {0}")]
    Decode(String),

    /// Errors while planning or rasterizing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding or handing off export output.
    #[error("export error: {0}")]
    Export(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HaloError {
    /// Build a [`HaloError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HaloError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`HaloError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`HaloError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build a [`HaloError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
