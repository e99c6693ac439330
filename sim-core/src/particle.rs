use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::{config::Config, types::Viewport};

/// A single drifting point of the field.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Current radius, oscillating around `base_radius`.
    pub radius: f32,
    pub base_radius: f32,
    /// Current opacity, oscillating around `base_alpha`.
    pub alpha: f32,
    pub base_alpha: f32,
    /// Index into [`Config::palette`].
    pub color_idx: usize,
    pub phase: f32,
    pub pulse_speed: f32,
    /// Independent phase offsets for the x and y drift noise.
    pub noise_offset: Vec2,
}

impl Particle {
    /// Spawns a particle at a uniformly random spot inside `viewport`.
    pub fn random(viewport: Viewport, cfg: &Config, rng: &mut impl Rng) -> Self {
        let pos = Vec2::new(
            rng.random::<f32>() * viewport.width,
            rng.random::<f32>() * viewport.height,
        );
        Self::random_at(pos, cfg, rng)
    }

    /// Spawns a particle at `pos` with randomized velocity, size, and pulse.
    pub fn random_at(pos: Vec2, cfg: &Config, rng: &mut impl Rng) -> Self {
        let speed = cfg.base_speed;
        Self {
            pos,
            vel: Vec2::new(
                (rng.random::<f32>() - 0.5) * speed * 2.0,
                (rng.random::<f32>() - 0.5) * speed * 2.0,
            ),
            radius: rng.random::<f32>() * 2.0 + 0.5,
            base_radius: rng.random::<f32>() * 2.0 + 0.5,
            alpha: rng.random::<f32>() * 0.5 + 0.2,
            base_alpha: rng.random::<f32>() * 0.5 + 0.2,
            color_idx: rng.random_range(0..cfg.palette.len().max(1)),
            phase: rng.random::<f32>() * TAU,
            pulse_speed: rng.random::<f32>() * 0.02 + 0.005,
            noise_offset: Vec2::new(rng.random::<f32>() * 1000.0, rng.random::<f32>() * 1000.0),
        }
    }

    /// Returns `true` if this particle is drawn with an extra halo.
    pub fn has_halo(&self, cfg: &Config) -> bool {
        self.base_radius > cfg.glow_threshold
    }
}
