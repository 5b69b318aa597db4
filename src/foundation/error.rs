/// Convenience result type used across pathloom.
pub type SketchResult<T> = Result<T, SketchError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum SketchError {
    /// Invalid user-provided configuration or spec data.
    #[error("config error: {0}")]
    Config(String),

    /// Errors while constructing or clipping a grid domain.
    #[error("domain error: {0}")]
    Domain(String),

    /// Errors while drawing finalized paths to a surface.
    #[error("draw error: {0}")]
    Draw(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SketchError {
    /// Build a [`SketchError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`SketchError::Domain`] value.
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    /// Build a [`SketchError::Draw`] value.
    pub fn draw(msg: impl Into<String>) -> Self {
        Self::Draw(msg.into())
    }

    /// Build a [`SketchError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
