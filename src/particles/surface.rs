//! Drawing seam between the simulation and whatever it renders into.

use super::field::ParticleColor;

/// Minimal 2D drawing target. Coordinates are surface pixels.
pub trait Surface {
    /// Current drawable size as `(width, height)`.
    fn size(&self) -> (f64, f64);

    /// Re-read the size from the hosting container. No-op for fixed surfaces.
    fn fit(&mut self) {}

    fn clear(&mut self);

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str);

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64);
}

/// Surface that tallies draw calls instead of producing pixels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountingSurface {
    pub width: f64,
    pub height: f64,
    pub clears: usize,
    pub circles: usize,
    pub lines: usize,
    /// Lines drawn with the gold accent stroke.
    pub accent_lines: usize,
}

impl CountingSurface {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, ..Self::default() }
    }

    /// Zero the tallies, keeping the size.
    pub fn reset_counts(&mut self) {
        *self = Self::new(self.width, self.height);
    }
}

impl Surface for CountingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    fn fill_circle(&mut self, _x: f64, _y: f64, _radius: f64, _color: &str) {
        self.circles += 1;
    }

    fn stroke_line(&mut self, _from: (f64, f64), _to: (f64, f64), color: &str, _width: f64) {
        self.lines += 1;
        if color == ParticleColor::Gold.connection_stroke() {
            self.accent_lines += 1;
        }
    }
}
