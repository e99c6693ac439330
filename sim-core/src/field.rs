use rand::{SeedableRng, rngs::StdRng};

use crate::{
    config::Config,
    links::{self, Link, PointerLink},
    particle::Particle,
    phases,
    pointer::Pointer,
    types::Viewport,
};

/// The whole simulation state: particles, pointer, clock, and the
/// viewport-derived thresholds.
#[derive(Debug)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub pointer: Pointer,
    cfg: Config,
    viewport: Viewport,
    link_distance: f32,
    clock: f64,
    rng: StdRng,
}

impl ParticleField {
    /// Creates a field for `viewport`, seeding particles from `seed`.
    ///
    /// The same seed, config, and viewport always produce the same field.
    pub fn new(viewport: Viewport, cfg: Config, seed: u64) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            pointer: Pointer::Inactive,
            link_distance: cfg.link_distance(viewport.width),
            cfg,
            viewport,
            clock: 0.0,
            rng: StdRng::seed_from_u64(seed),
        };
        field.reseed();
        field
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current maximum particle-to-particle link distance.
    pub fn link_distance(&self) -> f32 {
        self.link_distance
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Adopts a new viewport and rebuilds the particle set from scratch.
    ///
    /// No particle state survives a resize.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.link_distance = self.cfg.link_distance(viewport.width);
        self.reseed();
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            particles = self.particles.len(),
            link_distance = self.link_distance,
            "particle field resized"
        );
    }

    fn reseed(&mut self) {
        let count = self.cfg.particle_count(self.viewport.area());
        let (viewport, cfg, rng) = (self.viewport, &self.cfg, &mut self.rng);
        self.particles = (0..count)
            .map(|_| Particle::random(viewport, cfg, rng))
            .collect();
    }

    pub fn set_pointer(&mut self, pointer: Pointer) {
        self.pointer = pointer;
    }

    /// Advances every particle by one frame.
    ///
    /// ### Returns
    /// The number of particles the pointer influenced this frame.
    pub fn step(&mut self) -> usize {
        let mut influenced = 0;
        for p in &mut self.particles {
            if phases::update_particle(p, &mut self.clock, self.pointer, self.viewport, &self.cfg)
            {
                influenced += 1;
            }
        }
        influenced
    }

    /// Particle pairs closer than the current link distance.
    pub fn links(&self) -> Vec<Link> {
        links::particle_links(&self.particles, self.link_distance, self.cfg.link_opacity)
    }

    /// Like [`ParticleField::links`], reusing `out`.
    pub fn links_into(&self, out: &mut Vec<Link>) {
        links::particle_links_into(
            &self.particles,
            self.link_distance,
            self.cfg.link_opacity,
            out,
        );
    }

    /// Particles within the pointer influence radius.
    pub fn pointer_links(&self) -> Vec<PointerLink> {
        links::pointer_links(
            &self.particles,
            self.pointer,
            self.cfg.pointer_radius,
            self.cfg.pointer_link_opacity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn scenario_1600_by_900() {
        let field = ParticleField::new(Viewport::new(1600.0, 900.0), Config::default(), 1);

        assert_eq!(field.particles.len(), 180);
        assert_eq!(field.link_distance(), 150.0);
    }

    #[test]
    fn resize_recomputes_count_and_distance() {
        let mut field = ParticleField::new(Viewport::new(1600.0, 900.0), Config::default(), 1);

        field.resize(Viewport::new(375.0, 667.0));
        // 250125 / 8000 = 31.26
        assert_eq!(field.particles.len(), 31);
        assert!((field.link_distance() - 45.0).abs() < 1e-4);

        field.resize(Viewport::new(3840.0, 2160.0));
        assert_eq!(field.particles.len(), 200);
        assert_eq!(field.link_distance(), 150.0);

        field.resize(Viewport::new(50.0, 50.0));
        assert!(field.particles.is_empty());
    }

    #[test]
    fn resize_reseeds_particles_inside_new_viewport() {
        let mut field = ParticleField::new(Viewport::new(1600.0, 900.0), Config::default(), 3);
        field.resize(Viewport::new(400.0, 400.0));

        for p in &field.particles {
            assert!(p.pos.x >= 0.0 && p.pos.x <= 400.0);
            assert!(p.pos.y >= 0.0 && p.pos.y <= 400.0);
        }
    }

    #[test]
    fn same_seed_same_field() {
        let vp = Viewport::new(800.0, 600.0);
        let a = ParticleField::new(vp, Config::default(), 42);
        let b = ParticleField::new(vp, Config::default(), 42);

        assert_eq!(a.particles, b.particles);
    }

    #[test]
    fn speed_and_bounds_hold_after_many_steps() {
        let vp = Viewport::new(1024.0, 768.0);
        let cfg = Config::default();
        let margin = cfg.wrap_margin;
        let max_speed = cfg.max_speed;
        let mut field = ParticleField::new(vp, cfg, 9);
        field.set_pointer(Pointer::At(Vec2::new(512.0, 384.0)));

        for frame in 0..600 {
            // Sweep the pointer around to stir things up.
            let angle = frame as f32 * 0.05;
            field.set_pointer(Pointer::At(
                Vec2::new(512.0, 384.0) + Vec2::new(angle.cos(), angle.sin()) * 150.0,
            ));
            field.step();

            for p in &field.particles {
                assert!(p.vel.length() <= max_speed + 1e-5);
                assert!(p.pos.x >= -margin && p.pos.x <= vp.width + margin);
                assert!(p.pos.y >= -margin && p.pos.y <= vp.height + margin);
            }
        }
    }

    #[test]
    fn inactive_pointer_influences_nothing() {
        let mut field = ParticleField::new(Viewport::new(800.0, 600.0), Config::default(), 5);

        field.set_pointer(Pointer::from_host(Pointer::SENTINEL));

        assert_eq!(field.step(), 0);
        assert!(field.pointer_links().is_empty());
    }

    #[test]
    fn step_advances_clock_per_particle() {
        let mut field = ParticleField::new(Viewport::new(800.0, 600.0), Config::default(), 5);
        let n = field.particles.len() as f64;

        field.step();

        let step = f64::from(field.config().clock_step);
        assert!((field.clock() - n * step).abs() < 1e-9);
    }

    #[test]
    fn clock_keeps_advancing_past_2048() {
        let mut field = ParticleField::new(Viewport::new(1600.0, 900.0), Config::default(), 5);
        assert_eq!(field.particles.len(), 180);
        let step = f64::from(field.config().clock_step);

        // Just below the value where an f32 clock froze for good.
        field.clock = 2047.99;
        let mut last = field.clock();
        for _ in 0..600 {
            field.step();
            let now = field.clock();
            assert!(now > last, "clock stopped advancing at {now}");
            last = now;
        }

        let expected = 2047.99 + 600.0 * 180.0 * step;
        assert!((field.clock() - expected).abs() < 1e-6);
    }

    #[test]
    fn drift_keeps_particles_turning_late_in_a_run() {
        let mut field = ParticleField::new(Viewport::new(1600.0, 900.0), Config::default(), 8);
        field.clock = 4096.0;

        // With a frozen clock the drift is a constant push, so velocity
        // converges to a fixed vector; a live clock keeps it changing.
        for _ in 0..60 {
            field.step();
        }
        let before: Vec<Vec2> = field.particles.iter().map(|p| p.vel).collect();
        for _ in 0..600 {
            field.step();
        }

        let turned = field
            .particles
            .iter()
            .zip(&before)
            .filter(|(p, v)| p.vel.angle_to(**v).abs() > 1e-3)
            .count();
        assert!(turned > field.particles.len() / 2, "only {turned} particles turned");
    }

    #[test]
    fn links_match_pairwise_distances() {
        let field = ParticleField::new(Viewport::new(800.0, 600.0), Config::default(), 11);
        let max = field.link_distance();

        let links = field.links();
        for l in &links {
            let d = field.particles[l.a].pos.distance(field.particles[l.b].pos);
            assert!(d < max);
            let expected = (1.0 - d / max) * field.config().link_opacity;
            assert!((l.opacity - expected).abs() < 1e-5);
        }

        let n = field.particles.len();
        let close_pairs = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .filter(|&(i, j)| field.particles[i].pos.distance(field.particles[j].pos) < max)
            .count();
        assert_eq!(links.len(), close_pairs);
    }
}
