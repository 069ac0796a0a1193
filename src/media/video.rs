use std::path::PathBuf;

use crate::foundation::core::VideoSize;

/// Opaque identifier of the video resource a view displays.
///
/// Supplied once by configuration. `Unset` and `Raw(0)` both mean "no video".
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoResource {
    /// No video configured.
    #[default]
    Unset,
    /// Integer resource handle resolved by the host (e.g. a packaged raw resource).
    Raw(u32),
    /// A file on disk.
    Path(PathBuf),
}

impl VideoResource {
    /// Map an integer handle to a resource; `0` is the "no video" sentinel.
    pub fn from_raw(id: u32) -> Self {
        if id == 0 { Self::Unset } else { Self::Raw(id) }
    }

    /// `true` when no video is configured.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset | Self::Raw(0))
    }
}

/// A video resource plus its lazily resolved native dimensions.
///
/// The resource is fixed for the descriptor's lifetime. Dimensions are cached on the first
/// successful resolution and never replaced afterwards.
#[derive(Clone, Debug)]
pub struct VideoDescriptor {
    resource: VideoResource,
    dimensions: Option<VideoSize>,
}

impl VideoDescriptor {
    /// A descriptor with no dimensions resolved yet.
    pub fn new(resource: VideoResource) -> Self {
        Self {
            resource,
            dimensions: None,
        }
    }

    /// The configured resource.
    pub fn resource(&self) -> &VideoResource {
        &self.resource
    }

    /// Cached native dimensions, if already resolved.
    pub fn dimensions(&self) -> Option<VideoSize> {
        self.dimensions
    }

    /// Cache `size` unless dimensions are already known. Returns the cached value.
    pub(crate) fn cache_dimensions(&mut self, size: VideoSize) -> VideoSize {
        *self.dimensions.get_or_insert(size)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/media/video.rs"]
mod tests;
