//! Particle simulation: seeding, motion, boundary reflection and drawing.
//!
//! Connections are found with an all-pairs scan every frame. At 80
//! particles that is 6400 distance checks, well inside one frame's budget;
//! a denser field would need a spatial index.

use rand::Rng;

use super::surface::Surface;

pub const PARTICLE_COUNT: usize = 80;
/// Maximum distance, in pixels, at which two particles are joined.
pub const CONNECTION_DISTANCE: f64 = 150.0;
/// Per-axis speed range is `±MAX_SPEED / 2` pixels per frame.
pub const MAX_SPEED: f64 = 0.3;
pub const MIN_RADIUS: f64 = 0.5;
pub const MAX_RADIUS: f64 = 2.0;
pub const LINE_WIDTH: f64 = 0.5;

const ACCENT_STROKE: &str = "rgba(199, 161, 74, 0.1)";
const NEUTRAL_STROKE: &str = "rgba(156, 163, 175, 0.05)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleColor {
    Gold,
    Gray,
    Graphite,
}

impl ParticleColor {
    pub const PALETTE: [Self; 3] = [Self::Gold, Self::Gray, Self::Graphite];

    /// Palette entry for the `index`-th particle.
    #[must_use]
    pub fn cycle(index: usize) -> Self {
        Self::PALETTE[index % Self::PALETTE.len()]
    }

    #[must_use]
    pub fn hex(self) -> &'static str {
        match self {
            Self::Gold => "#C7A14A",
            Self::Gray => "#9CA3AF",
            Self::Graphite => "#1C1F26",
        }
    }

    /// Stroke for lines drawn from a particle of this color.
    #[must_use]
    pub fn connection_stroke(self) -> &'static str {
        if self == Self::Gold { ACCENT_STROKE } else { NEUTRAL_STROKE }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub color: ParticleColor,
}

impl Particle {
    /// Advance one frame and reflect off the `width` x `height` bounds.
    ///
    /// Each axis flips at most once per call. There is no clamping; a
    /// particle may finish the frame slightly outside and come back on the
    /// next one.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
    }

    #[must_use]
    pub fn distance_to(&self, other: &Particle) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    /// Seed [`PARTICLE_COUNT`] particles uniformly over the surface.
    pub fn seed<R: Rng + ?Sized>(width: f64, height: f64, rng: &mut R) -> Self {
        Self::seed_n(PARTICLE_COUNT, width, height, rng)
    }

    pub fn seed_n<R: Rng + ?Sized>(count: usize, width: f64, height: f64, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|i| Particle {
                x: rng.random::<f64>() * width,
                y: rng.random::<f64>() * height,
                vx: (rng.random::<f64>() - 0.5) * MAX_SPEED,
                vy: (rng.random::<f64>() - 0.5) * MAX_SPEED,
                radius: rng.random::<f64>() * (MAX_RADIUS - MIN_RADIUS) + MIN_RADIUS,
                color: ParticleColor::cycle(i),
            })
            .collect();
        Self { particles, width, height }
    }

    #[must_use]
    pub fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
        Self { particles, width, height }
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Adopt new bounds. Particles keep their positions and velocities.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Run one animation frame: clear, then move, draw and connect each
    /// particle in turn.
    ///
    /// Connections from particle `i` are measured against the others as they
    /// stand at that moment, so earlier particles have already moved this
    /// frame and later ones have not.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();
        for i in 0..self.particles.len() {
            self.particles[i].advance(self.width, self.height);
            let p = self.particles[i];
            surface.fill_circle(p.x, p.y, p.radius, p.color.hex());

            let stroke = p.color.connection_stroke();
            for other in &self.particles {
                if p.distance_to(other) < CONNECTION_DISTANCE {
                    surface.stroke_line((p.x, p.y), (other.x, other.y), stroke, LINE_WIDTH);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "field_test.rs"]
mod tests;
