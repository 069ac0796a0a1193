use crate::foundation::core::VideoSize;
use crate::foundation::error::CropViewResult;
use crate::media::video::VideoResource;

/// Collaborator that reads the native width/height of a video resource.
///
/// Implementations may block on I/O. Failures should be reported as
/// [`CropViewError::MetadataUnavailable`](crate::CropViewError::MetadataUnavailable);
/// the lifecycle controller re-tags anything else.
pub trait MetadataResolver {
    /// Resolve the native raster size of `video`.
    fn resolve_dimensions(&self, video: &VideoResource) -> CropViewResult<VideoSize>;
}

impl<F> MetadataResolver for F
where
    F: Fn(&VideoResource) -> CropViewResult<VideoSize>,
{
    fn resolve_dimensions(&self, video: &VideoResource) -> CropViewResult<VideoSize> {
        self(video)
    }
}
