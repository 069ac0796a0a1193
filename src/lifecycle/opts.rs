use crate::foundation::error::{CropViewError, CropViewResult};
use crate::media::video::VideoResource;

/// What to do when the host reports a new viewport size for the bound surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizePolicy {
    /// Keep the transform computed when the surface became available.
    #[default]
    Ignore,
    /// Recompute and reapply the crop transform from the cached video dimensions.
    Recompute,
}

/// Construction-time configuration for a [`LifecycleController`](crate::LifecycleController).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ControllerOpts {
    /// The video to display. Fixed for the controller's lifetime.
    pub video: VideoResource,
    /// Behavior on surface size changes.
    pub resize_policy: ResizePolicy,
}

impl ControllerOpts {
    /// Options for `video` with the default resize policy.
    pub fn for_video(video: VideoResource) -> Self {
        Self {
            video,
            ..Self::default()
        }
    }

    /// Replace the resize policy.
    pub fn with_resize_policy(mut self, policy: ResizePolicy) -> Self {
        self.resize_policy = policy;
        self
    }

    /// Parse options from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> CropViewResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| CropViewError::serde(format!("controller options: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lifecycle/opts.rs"]
mod tests;
