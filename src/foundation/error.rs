/// Convenience result type used across Orbitmap.
pub type OrbitmapResult<T> = Result<T, OrbitmapError>;

/// Top-level error taxonomy used by crate APIs.
#[derive(thiserror::Error, Debug)]
pub enum OrbitmapError {
    /// Invalid user-provided region, canvas, job, or threading data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while encoding or writing the output image.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OrbitmapError {
    /// Build a [`OrbitmapError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`OrbitmapError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
