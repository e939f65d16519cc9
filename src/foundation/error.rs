/// Convenience result type used across inkdate.
pub type InkdateResult<T> = Result<T, InkdateError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Most rendering problems are recovered inside the engine (markup fallback, date-only
/// composites, clamped inputs). What reaches callers is either invalid configuration or a
/// failure outside the pipeline, such as writing an output file.
#[derive(thiserror::Error, Debug)]
pub enum InkdateError {
    /// Invalid user-provided options, configuration or catalog data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised while drawing or encoding an artifact.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while reading or decoding fonts and images.
    #[error("asset error: {0}")]
    Asset(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InkdateError {
    /// Build an [`InkdateError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`InkdateError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`InkdateError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build an [`InkdateError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for InkdateError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
