use std::path::Path;

use serde::Deserialize;

use crate::{error::ConfigError, types::Rgb};

/// Tuning constants for a particle field.
///
/// Loaded once at startup. Any field missing from a TOML file falls back to
/// its [`Default`] value.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Viewport area covered by one particle.
    pub area_per_particle: f32,
    pub max_particles: usize,

    /// Link distance as a fraction of the viewport width.
    pub link_distance_ratio: f32,
    pub max_link_distance: f32,

    pub pointer_radius: f32,
    pub pointer_force: f32,
    /// Strength of the perpendicular term that bends the pull into an orbit.
    pub orbit_strength: f32,

    /// Half range of the initial velocity components.
    pub base_speed: f32,
    pub drift_accel: f32,
    pub drift_time_scale: f32,
    /// Field clock advance per particle update.
    pub clock_step: f32,

    pub damping: f32,
    pub max_speed: f32,
    pub wrap_margin: f32,

    pub link_opacity: f32,
    pub pointer_link_opacity: f32,
    pub link_width: f32,

    /// Particles whose base radius exceeds this get a halo.
    pub glow_threshold: f32,
    pub halo_scale: f32,
    pub halo_alpha: f32,

    pub max_pixel_ratio: f32,

    pub palette: Vec<Rgb>,
    pub link_color: Rgb,
    pub pointer_link_color: Rgb,
    pub background: Rgb,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            area_per_particle: 8000.0,
            max_particles: 200,
            link_distance_ratio: 0.12,
            max_link_distance: 150.0,
            pointer_radius: 200.0,
            pointer_force: 0.08,
            orbit_strength: 0.001,
            base_speed: 0.15,
            drift_accel: 0.003,
            drift_time_scale: 30.0,
            clock_step: 0.0001,
            damping: 0.98,
            max_speed: 1.0,
            wrap_margin: 50.0,
            link_opacity: 0.15,
            pointer_link_opacity: 0.2,
            link_width: 0.5,
            glow_threshold: 1.5,
            halo_scale: 3.0,
            halo_alpha: 0.1,
            max_pixel_ratio: 2.0,
            palette: vec![
                [59, 130, 246],  // blue
                [96, 165, 250],  // light blue
                [139, 92, 246],  // purple
                [99, 102, 241],  // indigo
                [147, 197, 253], // sky
            ],
            link_color: [59, 130, 246],
            pointer_link_color: [96, 165, 250],
            background: [6, 10, 20],
        }
    }
}

impl Config {
    /// Parses a config from TOML text and validates it.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads and parses a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let cfg = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.as_ref().display(), "loaded field config");
        Ok(cfg)
    }

    /// Rejects values that would stall or break the simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("area_per_particle", self.area_per_particle),
            ("max_link_distance", self.max_link_distance),
            ("pointer_radius", self.pointer_radius),
            ("max_speed", self.max_speed),
            ("max_pixel_ratio", self.max_pixel_ratio),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.wrap_margin < 0.0 || !self.wrap_margin.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "wrap_margin must be non-negative, got {}",
                self.wrap_margin
            )));
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "damping must be in (0, 1], got {}",
                self.damping
            )));
        }
        if self.max_particles == 0 {
            return Err(ConfigError::Invalid("max_particles must be at least 1".into()));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::Invalid("palette must not be empty".into()));
        }
        Ok(())
    }

    /// Number of particles for a viewport of the given area.
    pub fn particle_count(&self, area: f32) -> usize {
        let n = (area.max(0.0) / self.area_per_particle).floor() as usize;
        n.min(self.max_particles)
    }

    /// Maximum particle-to-particle link distance for a viewport width.
    pub fn link_distance(&self, width: f32) -> f32 {
        (width * self.link_distance_ratio).min(self.max_link_distance)
    }
}
