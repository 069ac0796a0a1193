use crate::foundation::error::CropViewResult;
use crate::media::video::VideoResource;

/// Decode/playback engine that creates sessions for a video resource.
///
/// The engine itself is external; cropview only drives the session lifecycle.
pub trait PlaybackEngine<S> {
    /// Session type produced by this engine.
    type Session: PlaybackSession<S>;

    /// Create (but do not start) a session for `video`.
    fn create_session(&mut self, video: &VideoResource) -> CropViewResult<Self::Session>;
}

/// A live binding of one decode engine instance to one surface.
///
/// Call order is `bind_surface` → `set_looping` → `start`. [`PlaybackSession::release`] is the
/// terminal operation and consumes the session, so it can run at most once.
pub trait PlaybackSession<S> {
    /// Direct decoded frames into `surface`.
    fn bind_surface(&mut self, surface: &S) -> CropViewResult<()>;
    /// Loop the video indefinitely when `true`.
    fn set_looping(&mut self, looping: bool) -> CropViewResult<()>;
    /// Begin decoding and presenting frames.
    fn start(&mut self) -> CropViewResult<()>;
    /// Stop playback and free the underlying decoder.
    fn release(self);
}
