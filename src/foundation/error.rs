/// Result type used across pictura.
pub type PicturaResult<T> = Result<T, PicturaError>;

/// Every failure a pictura operation can report.
#[derive(thiserror::Error, Debug)]
pub enum PicturaError {
    /// A raster source could not be decoded into a pixel buffer.
    #[error("construction failure: {0}")]
    Construction(String),

    /// Writing an encoded image failed.
    #[error("io failure: {0}")]
    Io(String),

    /// The rendering backend could not draw a node.
    #[error("render error: {0}")]
    Render(String),

    /// Misuse of an API or an invalid setting.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PicturaError {
    /// Build a [`PicturaError::Construction`] value.
    pub fn construction(msg: impl Into<String>) -> Self {
        Self::Construction(msg.into())
    }

    /// Build a [`PicturaError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Build a [`PicturaError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PicturaError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
