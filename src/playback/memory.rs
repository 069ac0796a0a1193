use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::foundation::core::{Affine, SurfaceId};
use crate::foundation::error::{CropViewError, CropViewResult};
use crate::media::video::VideoResource;
use crate::playback::engine::{PlaybackEngine, PlaybackSession};
use crate::playback::surface::RenderSurface;

/// In-memory surface handle for tests and debugging.
///
/// Clones share the same transform cell, the way a host keeps its own handle to a surface it
/// hands out.
#[derive(Clone, Debug)]
pub struct InMemorySurface {
    id: SurfaceId,
    transform: Rc<Cell<Affine>>,
}

impl InMemorySurface {
    /// A surface carrying the identity transform.
    pub fn new(id: u64) -> Self {
        Self::with_transform(id, Affine::IDENTITY)
    }

    /// A surface carrying `base` as its initial transform.
    pub fn with_transform(id: u64, base: Affine) -> Self {
        Self {
            id: SurfaceId(id),
            transform: Rc::new(Cell::new(base)),
        }
    }
}

impl RenderSurface for InMemorySurface {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn transform(&self) -> Affine {
        self.transform.get()
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform.set(transform);
    }
}

/// Step at which an [`InMemoryEngine`] should fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailPoint {
    /// `create_session` fails.
    Create,
    /// `bind_surface` fails.
    Bind,
    /// `start` fails.
    Start,
}

/// Counters recorded by [`InMemoryEngine`] and its sessions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaybackStats {
    /// Sessions successfully created.
    pub sessions_created: u32,
    /// Sessions successfully started.
    pub sessions_started: u32,
    /// Sessions released through [`PlaybackSession::release`].
    pub sessions_released: u32,
    /// Sessions dropped without being released.
    pub sessions_leaked: u32,
    /// Surfaces bound, in order.
    pub bound_surfaces: Vec<SurfaceId>,
    /// Looping flags set, in order.
    pub looping: Vec<bool>,
    /// Resources sessions were created for, in order.
    pub videos: Vec<VideoResource>,
}

impl PlaybackStats {
    /// Sessions created and not yet released.
    pub fn live_sessions(&self) -> u32 {
        self.sessions_created
            .saturating_sub(self.sessions_released)
            .saturating_sub(self.sessions_leaked)
    }
}

/// In-memory playback engine for tests and debugging.
///
/// Clones share the same counters.
#[derive(Clone, Debug, Default)]
pub struct InMemoryEngine {
    stats: Rc<RefCell<PlaybackStats>>,
    fail_at: Option<FailPoint>,
}

impl InMemoryEngine {
    /// An engine whose sessions always succeed.
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine that fails at `point` for every session.
    pub fn failing_at(point: FailPoint) -> Self {
        Self {
            fail_at: Some(point),
            ..Self::default()
        }
    }

    /// Snapshot of the recorded counters.
    pub fn stats(&self) -> PlaybackStats {
        self.stats.borrow().clone()
    }
}

impl<S: RenderSurface> PlaybackEngine<S> for InMemoryEngine {
    type Session = InMemorySession;

    fn create_session(&mut self, video: &VideoResource) -> CropViewResult<InMemorySession> {
        if self.fail_at == Some(FailPoint::Create) {
            return Err(CropViewError::playback_start("in-memory engine refused session"));
        }
        let mut stats = self.stats.borrow_mut();
        stats.sessions_created += 1;
        stats.videos.push(video.clone());
        Ok(InMemorySession {
            stats: Rc::clone(&self.stats),
            fail_at: self.fail_at,
            released: false,
        })
    }
}

/// Session produced by [`InMemoryEngine`].
#[derive(Debug)]
pub struct InMemorySession {
    stats: Rc<RefCell<PlaybackStats>>,
    fail_at: Option<FailPoint>,
    released: bool,
}

impl<S: RenderSurface> PlaybackSession<S> for InMemorySession {
    fn bind_surface(&mut self, surface: &S) -> CropViewResult<()> {
        if self.fail_at == Some(FailPoint::Bind) {
            return Err(CropViewError::playback_start("in-memory bind failed"));
        }
        self.stats.borrow_mut().bound_surfaces.push(surface.id());
        Ok(())
    }

    fn set_looping(&mut self, looping: bool) -> CropViewResult<()> {
        self.stats.borrow_mut().looping.push(looping);
        Ok(())
    }

    fn start(&mut self) -> CropViewResult<()> {
        if self.fail_at == Some(FailPoint::Start) {
            return Err(anyhow::anyhow!("in-memory decoder failed to start").into());
        }
        self.stats.borrow_mut().sessions_started += 1;
        Ok(())
    }

    fn release(mut self) {
        self.released = true;
        self.stats.borrow_mut().sessions_released += 1;
    }
}

impl Drop for InMemorySession {
    fn drop(&mut self) {
        if !self.released {
            self.stats.borrow_mut().sessions_leaked += 1;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/memory.rs"]
mod tests;
