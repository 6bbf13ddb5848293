/// Convenience result type used across wrapsmith.
pub type WrapResult<T> = Result<T, WrapError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Nothing in the engine is fatal: decode failures leave the affected asset absent and rendering
/// degrades to the silhouette or a blank buffer.
#[derive(thiserror::Error, Debug)]
pub enum WrapError {
    /// Invalid user-provided data (design documents, catalogs, buffer shapes, paths).
    #[error("validation error: {0}")]
    Validation(String),

    /// An encoded image could not be decoded into a raster asset.
    #[error("decode error: {0}")]
    Decode(String),

    /// A raster buffer could not be encoded for export.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WrapError {
    /// Build a [`WrapError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WrapError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`WrapError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
