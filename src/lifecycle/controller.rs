//! Binds one looping playback session to one host surface at a time.
//!
//! Transitions run on the host's single UI/render thread. Dimension resolution can either run
//! inline ([`SurfaceListener::on_surface_available`]) or be split into
//! [`LifecycleController::bind_surface`] + [`ResolveTicket::resolve`] +
//! [`LifecycleController::complete_resolution`] so the blocking probe runs elsewhere. A ticket
//! outlived by its surface completes as [`Completion::Cancelled`].

use crate::foundation::core::{Affine, SurfaceId, VideoSize, Viewport};
use crate::foundation::error::{CropViewError, CropViewResult};
use crate::lifecycle::opts::{ControllerOpts, ResizePolicy};
use crate::lifecycle::state::LifecycleState;
use crate::media::metadata::MetadataResolver;
use crate::media::video::{VideoDescriptor, VideoResource};
use crate::playback::engine::{PlaybackEngine, PlaybackSession};
use crate::playback::surface::{RenderSurface, SurfaceListener};
use crate::transform::crop::crop_transform_for;

/// Result of [`LifecycleController::complete_resolution`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The crop transform was applied and a playback session started.
    Started,
    /// The surface went away (or was replaced) while dimensions were resolving.
    Cancelled,
}

/// A pending dimension resolution for one bound surface.
///
/// Tickets are `Send` so the resolution may run on a worker; completion must happen back on
/// the controller's thread.
#[derive(Clone, Debug)]
pub struct ResolveTicket {
    generation: u64,
    surface: SurfaceId,
    video: VideoResource,
    cached: Option<VideoSize>,
}

impl ResolveTicket {
    /// The surface this ticket was issued for.
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    /// The video to resolve.
    pub fn video(&self) -> &VideoResource {
        &self.video
    }

    /// `true` when dimensions are already cached and [`ResolveTicket::resolve`] does no I/O.
    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }

    /// Resolve the video's native size, using the cached value when there is one.
    pub fn resolve<M>(&self, resolver: &M) -> CropViewResult<VideoSize>
    where
        M: MetadataResolver + ?Sized,
    {
        if let Some(size) = self.cached {
            return Ok(size);
        }
        if self.video.is_unset() {
            return Err(CropViewError::metadata_unavailable(
                "no video resource configured",
            ));
        }
        resolver
            .resolve_dimensions(&self.video)
            .map_err(CropViewError::into_metadata_unavailable)
    }
}

struct SurfaceBinding<S> {
    surface: S,
    // Transform the surface carried when it was bound; the crop is post-concatenated onto it.
    base: Affine,
    viewport: Viewport,
}

/// State machine driving a looping, center-cropped video on host-managed surfaces.
///
/// Invariants:
/// - at most one playback session exists;
/// - a session is only created after dimensions resolved for the currently bound surface;
/// - the session is released before the controller returns to [`LifecycleState::Idle`],
///   and released on drop if the host never tore it down.
pub struct LifecycleController<S, M, P>
where
    S: RenderSurface,
    M: MetadataResolver,
    P: PlaybackEngine<S>,
{
    resize_policy: ResizePolicy,
    video: VideoDescriptor,
    metadata: M,
    engine: P,
    state: LifecycleState,
    binding: Option<SurfaceBinding<S>>,
    session: Option<P::Session>,
    generation: u64,
}

impl<S, M, P> LifecycleController<S, M, P>
where
    S: RenderSurface,
    M: MetadataResolver,
    P: PlaybackEngine<S>,
{
    /// Create an idle controller for `opts.video`.
    pub fn new(opts: ControllerOpts, metadata: M, engine: P) -> Self {
        Self {
            resize_policy: opts.resize_policy,
            video: VideoDescriptor::new(opts.video),
            metadata,
            engine,
            state: LifecycleState::Idle,
            binding: None,
            session: None,
            generation: 0,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// The video descriptor, including cached dimensions once resolved.
    pub fn video(&self) -> &VideoDescriptor {
        &self.video
    }

    /// The bound surface, if any.
    pub fn surface(&self) -> Option<&S> {
        self.binding.as_ref().map(|b| &b.surface)
    }

    /// Viewport of the bound surface, if any.
    pub fn viewport(&self) -> Option<Viewport> {
        self.binding.as_ref().map(|b| b.viewport)
    }

    /// `true` while a playback session is alive.
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// The configured resize policy.
    pub fn resize_policy(&self) -> ResizePolicy {
        self.resize_policy
    }

    /// The metadata collaborator.
    pub fn metadata(&self) -> &M {
        &self.metadata
    }

    /// The playback engine collaborator.
    pub fn engine(&self) -> &P {
        &self.engine
    }

    /// Bind `surface` and move to [`LifecycleState::SurfaceBound`].
    ///
    /// A surface that is already bound is torn down first, so a new surface always gets a
    /// fresh session. Pass the returned ticket to [`Self::complete_resolution`].
    #[tracing::instrument(skip(self, surface), fields(surface = %surface.id()))]
    pub fn bind_surface(&mut self, surface: S, width: u32, height: u32) -> ResolveTicket {
        if self.state.has_surface() {
            tracing::warn!(state = %self.state, "new surface while another is bound, releasing it");
            self.unbind();
        }

        self.generation += 1;
        let id = surface.id();
        let base = surface.transform();
        self.binding = Some(SurfaceBinding {
            surface,
            base,
            viewport: Viewport::new(width, height),
        });
        self.transition(LifecycleState::SurfaceBound);

        ResolveTicket {
            generation: self.generation,
            surface: id,
            video: self.video.resource().clone(),
            cached: self.video.dimensions(),
        }
    }

    /// Finish a resolution started by [`Self::bind_surface`].
    ///
    /// On success the crop transform is applied (`Ready`) and a looping session is started
    /// (`Playing`). Any failure releases what was created and leaves the controller `Idle`.
    /// Stale tickets are discarded with [`Completion::Cancelled`].
    #[tracing::instrument(skip(self, ticket, resolved), fields(surface = %ticket.surface))]
    pub fn complete_resolution(
        &mut self,
        ticket: ResolveTicket,
        resolved: CropViewResult<VideoSize>,
    ) -> CropViewResult<Completion> {
        if ticket.generation != self.generation || self.state != LifecycleState::SurfaceBound {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                state = %self.state,
                "discarding stale dimension resolution"
            );
            return Ok(Completion::Cancelled);
        }

        let size = match resolved {
            Ok(size) => self.video.cache_dimensions(size),
            Err(e) => {
                let e = e.into_metadata_unavailable();
                tracing::warn!(error = %e, "video dimensions unavailable");
                self.unbind();
                return Err(e);
            }
        };

        let applied = match self.viewport() {
            Some(viewport) => self.apply_crop(viewport, size),
            None => Ok(()),
        };
        if let Err(e) = applied {
            tracing::warn!(error = %e, "crop transform rejected");
            self.unbind();
            return Err(e);
        }
        self.transition(LifecycleState::Ready);

        if let Err(e) = self.start_session() {
            tracing::warn!(error = %e, "playback failed to start");
            self.unbind();
            return Err(e);
        }
        self.transition(LifecycleState::Playing);
        Ok(Completion::Started)
    }

    /// Component teardown. Releases any session and unbinds; safe to call in any state.
    #[tracing::instrument(skip(self))]
    pub fn detach(&mut self) {
        if self.binding.is_some() || self.session.is_some() {
            self.unbind();
        }
    }

    /// Crop the bound surface for `viewport`. The binding is left untouched on error.
    fn apply_crop(&mut self, viewport: Viewport, size: VideoSize) -> CropViewResult<()> {
        let Some(binding) = self.binding.as_mut() else {
            return Ok(());
        };
        let crop = crop_transform_for(viewport, size)?;
        binding.viewport = viewport;
        binding.surface.set_transform(crop.post_concat(binding.base));
        tracing::debug!(
            viewport = ?binding.viewport,
            video = %size,
            axis = ?crop.cropped_axis(),
            "applied crop transform"
        );
        Ok(())
    }

    fn start_session(&mut self) -> CropViewResult<()> {
        let Some(binding) = self.binding.as_ref() else {
            return Err(CropViewError::playback_start("no surface bound"));
        };

        let mut session = self
            .engine
            .create_session(self.video.resource())
            .map_err(CropViewError::into_playback_start)?;
        let started = session
            .bind_surface(&binding.surface)
            .and_then(|()| session.set_looping(true))
            .and_then(|()| session.start());

        match started {
            Ok(()) => {
                self.session = Some(session);
                Ok(())
            }
            Err(e) => {
                session.release();
                Err(e.into_playback_start())
            }
        }
    }

    fn unbind(&mut self) {
        if let Some(session) = self.session.take() {
            session.release();
            tracing::debug!("released playback session");
        }
        self.binding = None;
        // Invalidates any outstanding ticket.
        self.generation += 1;
        self.transition(LifecycleState::Idle);
    }

    fn transition(&mut self, next: LifecycleState) {
        if self.state != next {
            tracing::debug!(from = %self.state, to = %next, "lifecycle transition");
            self.state = next;
        }
    }
}

impl<S, M, P> SurfaceListener<S> for LifecycleController<S, M, P>
where
    S: RenderSurface,
    M: MetadataResolver,
    P: PlaybackEngine<S>,
{
    fn on_surface_available(&mut self, surface: S, width: u32, height: u32) -> CropViewResult<()> {
        let ticket = self.bind_surface(surface, width, height);
        let resolved = ticket.resolve(&self.metadata);
        self.complete_resolution(ticket, resolved).map(|_| ())
    }

    fn on_surface_size_changed(
        &mut self,
        surface: &S,
        width: u32,
        height: u32,
    ) -> CropViewResult<()> {
        let bound = self.binding.as_ref().map(|b| b.surface.id());
        if bound != Some(surface.id()) {
            tracing::debug!(surface = %surface.id(), "size change for an unbound surface ignored");
            return Ok(());
        }

        match self.resize_policy {
            ResizePolicy::Ignore => {
                tracing::trace!(width, height, "resize ignored by policy");
                Ok(())
            }
            ResizePolicy::Recompute => {
                let viewport = Viewport::new(width, height);
                if viewport.is_degenerate() {
                    tracing::warn!(width, height, "degenerate resize rejected");
                    return Err(CropViewError::invalid_dimension(format!(
                        "viewport must be non-zero, got {width}x{height}"
                    )));
                }
                match self.video.dimensions() {
                    Some(size) if self.state.is_transformed() => self.apply_crop(viewport, size),
                    _ => {
                        if let Some(binding) = self.binding.as_mut() {
                            binding.viewport = viewport;
                        }
                        Ok(())
                    }
                }
            }
        }
    }

    fn on_surface_destroyed(&mut self, surface: &S) -> bool {
        match self.binding.as_ref().map(|b| b.surface.id()) {
            Some(id) if id == surface.id() => self.unbind(),
            Some(id) => tracing::debug!(
                bound = %id,
                destroyed = %surface.id(),
                "destroy for a surface that is not bound ignored"
            ),
            None => tracing::trace!(surface = %surface.id(), "surface destroyed while idle"),
        }
        false
    }

    fn on_surface_updated(&mut self, surface: &S) {
        tracing::trace!(surface = %surface.id(), "frame presented");
    }
}

impl<S, M, P> Drop for LifecycleController<S, M, P>
where
    S: RenderSurface,
    M: MetadataResolver,
    P: PlaybackEngine<S>,
{
    fn drop(&mut self) {
        if self.session.is_some() {
            self.unbind();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lifecycle/controller.rs"]
mod tests;
