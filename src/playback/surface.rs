use crate::foundation::core::{Affine, SurfaceId};
use crate::foundation::error::CropViewResult;

/// A host-managed render target (e.g. a GPU-backed texture) whose lifetime the host controls.
///
/// Implementations are cheap handles; the host keeps its own copy and reports lifecycle events
/// for it through a [`SurfaceListener`].
pub trait RenderSurface {
    /// Stable identity of this surface. A new surface always has a new id.
    fn id(&self) -> SurfaceId;
    /// The transform the surface currently carries (e.g. orientation correction).
    fn transform(&self) -> Affine;
    /// Replace the surface transform.
    fn set_transform(&mut self, transform: Affine);
}

/// Lifecycle events a windowing host delivers for one surface.
#[derive(Clone, Debug)]
pub enum SurfaceEvent<S> {
    /// The surface became available with the given viewport size.
    Available {
        /// Surface handle.
        surface: S,
        /// Viewport width in pixels.
        width: u32,
        /// Viewport height in pixels.
        height: u32,
    },
    /// The surface's viewport changed size.
    SizeChanged {
        /// Surface handle.
        surface: S,
        /// Viewport width in pixels.
        width: u32,
        /// Viewport height in pixels.
        height: u32,
    },
    /// The surface is about to be destroyed.
    Destroyed {
        /// Surface handle.
        surface: S,
    },
    /// A new frame was presented on the surface.
    Updated {
        /// Surface handle.
        surface: S,
    },
}

/// The single capability a component registers with the windowing host.
///
/// All methods are invoked on the host's UI/render thread, never concurrently.
pub trait SurfaceListener<S> {
    /// A surface is ready to be drawn into.
    fn on_surface_available(&mut self, surface: S, width: u32, height: u32) -> CropViewResult<()>;

    /// The viewport of `surface` changed size.
    fn on_surface_size_changed(&mut self, surface: &S, width: u32, height: u32)
    -> CropViewResult<()>;

    /// `surface` is going away. Returns whether the listener retains the surface resource itself.
    fn on_surface_destroyed(&mut self, surface: &S) -> bool;

    /// A frame was presented on `surface`.
    fn on_surface_updated(&mut self, surface: &S);

    /// Dispatch a [`SurfaceEvent`] to the matching callback.
    ///
    /// `Destroyed` yields `Ok(retain)`; every other event yields `Ok(false)` on success.
    fn handle_event(&mut self, event: SurfaceEvent<S>) -> CropViewResult<bool> {
        match event {
            SurfaceEvent::Available {
                surface,
                width,
                height,
            } => self.on_surface_available(surface, width, height).map(|()| false),
            SurfaceEvent::SizeChanged {
                surface,
                width,
                height,
            } => self
                .on_surface_size_changed(&surface, width, height)
                .map(|()| false),
            SurfaceEvent::Destroyed { surface } => Ok(self.on_surface_destroyed(&surface)),
            SurfaceEvent::Updated { surface } => {
                self.on_surface_updated(&surface);
                Ok(false)
            }
        }
    }
}
