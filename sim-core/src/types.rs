/// Identifier for a particle in a [`crate::field::ParticleField`].
///
/// This is an index into `ParticleField::particles`, and is only meaningful
/// until the next resize reseeds the set.
pub type ParticleId = usize;

/// An `[r, g, b]` colour triple.
pub type Rgb = [u8; 3];

/// Logical size of the drawing area, in the same units as particle positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

/// Backing pixel size of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    /// Scales `viewport` by the device pixel ratio, capped at `max_ratio`.
    ///
    /// Ratios below `1.0` (or non-finite ones) are treated as `1.0`.
    pub fn for_viewport(viewport: Viewport, pixel_ratio: f32, max_ratio: f32) -> Self {
        let ratio = if pixel_ratio.is_finite() && pixel_ratio > 1.0 {
            pixel_ratio.min(max_ratio)
        } else {
            1.0
        };
        Self {
            width: (viewport.width.max(0.0) * ratio).round() as u32,
            height: (viewport.height.max(0.0) * ratio).round() as u32,
        }
    }
}
