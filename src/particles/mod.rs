//! Particle network drawn behind the hero section.
//!
//! SYSTEM CONTEXT
//! ==============
//! `field` is the pure simulation, `surface` is the drawing seam it renders
//! through, and `host` ties both to a frame scheduler with guaranteed
//! teardown. The browser wiring lives in [`crate::web`]; tests and the CLI
//! drive the same code with in-memory surfaces and hosts.

pub mod field;
pub mod host;
pub mod surface;

pub use field::{CONNECTION_DISTANCE, PARTICLE_COUNT, Particle, ParticleColor, ParticleField};
pub use host::{FrameHost, FrameId, ParticleNetwork};
pub use surface::{CountingSurface, Surface};
