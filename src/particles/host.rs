//! Frame-loop lifecycle for the particle network.
//!
//! DESIGN
//! ======
//! [`ParticleNetwork`] owns the field and the surface and talks to the page
//! through a [`FrameHost`]: one outstanding frame request at a time, plus a
//! resize subscription. `start` registers both, `on_frame` draws and asks
//! for the next frame, and `stop` releases both. `Drop` calls `stop`, so
//! every way of tearing the view down (unmount, navigation, panic unwind)
//! cancels the pending frame and removes the resize listener.

use rand::Rng;
use tracing::debug;

use super::field::ParticleField;
use super::surface::Surface;

/// Handle of a scheduled frame callback, as returned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameId(pub i32);

/// Scheduler and event source the animation runs under.
pub trait FrameHost {
    /// Schedule one call to [`ParticleNetwork::on_frame`] at the next display
    /// refresh. `None` if the host cannot schedule frames.
    fn request_frame(&mut self) -> Option<FrameId>;

    fn cancel_frame(&mut self, id: FrameId);

    /// Start delivering [`ParticleNetwork::on_resize`]. Returns whether the
    /// subscription was made.
    fn watch_resize(&mut self) -> bool;

    fn unwatch_resize(&mut self);
}

pub struct ParticleNetwork<S: Surface, H: FrameHost> {
    field: ParticleField,
    surface: S,
    host: H,
    pending: Option<FrameId>,
    watching_resize: bool,
    running: bool,
    frames: u64,
}

impl<S: Surface, H: FrameHost> ParticleNetwork<S, H> {
    /// Size the surface to its container and seed the particles. Nothing is
    /// scheduled until [`ParticleNetwork::start`].
    pub fn new<R: Rng + ?Sized>(mut surface: S, host: H, rng: &mut R) -> Self {
        surface.fit();
        let (width, height) = surface.size();
        let field = ParticleField::seed(width, height, rng);
        Self { field, surface, host, pending: None, watching_resize: false, running: false, frames: 0 }
    }

    /// Subscribe to resizes and draw the first frame immediately. No-op if
    /// already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.watching_resize = self.host.watch_resize();
        let (width, height) = self.field.size();
        debug!(width, height, particles = self.field.particles().len(), "particle network started");
        self.on_frame();
    }

    /// Draw one frame and schedule the next. Ignored once stopped.
    pub fn on_frame(&mut self) {
        if !self.running {
            return;
        }
        self.pending = None;
        self.field.frame(&mut self.surface);
        self.frames += 1;
        self.pending = self.host.request_frame();
    }

    /// Pick up the surface's new size. Particles are not re-seeded.
    pub fn on_resize(&mut self) {
        self.surface.fit();
        let (width, height) = self.surface.size();
        self.field.resize(width, height);
    }

    /// Cancel the pending frame and drop the resize subscription. Idempotent.
    pub fn stop(&mut self) {
        if let Some(id) = self.pending.take() {
            self.host.cancel_frame(id);
        }
        if self.watching_resize {
            self.host.unwatch_resize();
            self.watching_resize = false;
        }
        if self.running {
            debug!(frames = self.frames, "particle network stopped");
        }
        self.running = false;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn frames_drawn(&self) -> u64 {
        self.frames
    }

    #[must_use]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

impl<S: Surface, H: FrameHost> Drop for ParticleNetwork<S, H> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "host_test.rs"]
mod tests;
