//! cropview renders a looping video onto a host-managed surface, scaled to fill the viewport
//! while preserving the video's aspect ratio ("center-crop", like CSS `object-fit: cover`).
//!
//! # Pieces
//!
//! - [`compute_crop_transform`]: pure scale+translate transform that makes the shorter axis fill
//!   the viewport and centers the overflow of the longer one.
//! - [`LifecycleController`]: reacts to surface events from the windowing host
//!   ([`SurfaceListener`]), resolves native video dimensions once ([`MetadataResolver`]),
//!   applies the crop transform, and keeps exactly one looping [`PlaybackSession`] bound to the
//!   live surface.
//!
//! Decoding, surfaces and windowing stay outside the crate, behind [`PlaybackEngine`],
//! [`RenderSurface`] and [`MetadataResolver`]. In-memory implementations are provided for tests
//! and debugging; [`FfprobeResolver`] reads dimensions with the system `ffprobe` when the
//! `media-ffmpeg` feature is enabled.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod lifecycle;
mod media;
mod playback;

/// Shared transform helpers (crop computation, affine composition).
pub mod transform;

pub use foundation::core::{Affine, SurfaceId, Vec2, VideoSize, Viewport};
pub use foundation::error::{CropViewError, CropViewResult};
pub use lifecycle::controller::{Completion, LifecycleController, ResolveTicket};
pub use lifecycle::opts::{ControllerOpts, ResizePolicy};
pub use lifecycle::state::LifecycleState;
pub use media::metadata::MetadataResolver;
pub use media::probe::{FfprobeResolver, is_ffprobe_available, parse_ffprobe_dimensions};
pub use media::video::{VideoDescriptor, VideoResource};
pub use playback::engine::{PlaybackEngine, PlaybackSession};
pub use playback::memory::{
    FailPoint, InMemoryEngine, InMemorySession, InMemorySurface, PlaybackStats,
};
pub use playback::surface::{RenderSurface, SurfaceEvent, SurfaceListener};
pub use transform::crop::{CropAxis, CropTransform, compute_crop_transform, crop_transform_for};
