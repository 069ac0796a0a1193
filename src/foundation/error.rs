/// Convenience result type used across cropview.
pub type CropViewResult<T> = Result<T, CropViewError>;

/// Top-level error taxonomy used by the crop calculator and the lifecycle controller.
#[derive(thiserror::Error, Debug)]
pub enum CropViewError {
    /// A viewport or content dimension was zero (programmer error, never clamped).
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// The video resource could not be opened or carries no usable video-track metadata.
    #[error("metadata unavailable: {0}")]
    MetadataUnavailable(String),

    /// The playback engine failed to create, bind, configure or start a session.
    #[error("playback start failure: {0}")]
    PlaybackStartFailure(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CropViewError {
    /// Build a [`CropViewError::InvalidDimension`] value.
    pub fn invalid_dimension(msg: impl Into<String>) -> Self {
        Self::InvalidDimension(msg.into())
    }

    /// Build a [`CropViewError::MetadataUnavailable`] value.
    pub fn metadata_unavailable(msg: impl Into<String>) -> Self {
        Self::MetadataUnavailable(msg.into())
    }

    /// Build a [`CropViewError::PlaybackStartFailure`] value.
    pub fn playback_start(msg: impl Into<String>) -> Self {
        Self::PlaybackStartFailure(msg.into())
    }

    /// Build a [`CropViewError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Re-tag any error as [`CropViewError::MetadataUnavailable`], keeping the message.
    pub(crate) fn into_metadata_unavailable(self) -> Self {
        match self {
            Self::MetadataUnavailable(_) => self,
            other => Self::MetadataUnavailable(other.to_string()),
        }
    }

    /// Re-tag any error as [`CropViewError::PlaybackStartFailure`], keeping the message.
    pub(crate) fn into_playback_start(self) -> Self {
        match self {
            Self::PlaybackStartFailure(_) => self,
            other => Self::PlaybackStartFailure(other.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
