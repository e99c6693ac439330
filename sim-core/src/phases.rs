//! Per-particle update phases for the particle field.
//!
//! One frame applies, to every particle in order:
//! 1. [`drift_phase`] — smooth noise nudges the velocity.
//! 2. [`pointer_phase`] — a nearby pointer pulls the particle into an orbit.
//! 3. [`integrate_phase`] — damping, speed clamp, position update.
//! 4. [`wrap_phase`] — particles leaving the viewport reappear on the far side.
//! 5. [`pulse_phase`] — radius and opacity oscillate around their bases.
//!
//! [`update_particle`] runs all of them. The phases are pure functions of
//! their inputs, so they can be tested without any drawing surface.

use crate::{
    config::Config, noise::drift_noise, particle::Particle, pointer::Pointer, types::Viewport,
};

/// Adds a small noise-driven acceleration to the particle velocity.
///
/// Two independent noise signals are sampled at the particle's noise
/// offsets shifted by `t * cfg.drift_time_scale`, one per axis, and scaled
/// by `cfg.drift_accel`.
///
/// ### Parameters
/// - `p` - Particle whose velocity is nudged.
/// - `t` - Current field clock.
/// - `cfg` - Provides the drift time scale and acceleration.
pub fn drift_phase(p: &mut Particle, t: f64, cfg: &Config) {
    let shift = t * f64::from(cfg.drift_time_scale);
    let nx = drift_noise(f64::from(p.noise_offset.x) + shift);
    let ny = drift_noise(f64::from(p.noise_offset.y) + shift);
    p.vel.x += nx * cfg.drift_accel;
    p.vel.y += ny * cfg.drift_accel;
}

/// Applies the pointer force field to one particle.
///
/// Inside `cfg.pointer_radius` the force falls off linearly from `1` at the
/// pointer to `0` at the edge. The velocity receives an attraction term along
/// the particle-to-pointer vector and a smaller perpendicular term, which
/// turns a straight pull into an orbit.
///
/// ### Parameters
/// - `p` - Particle to push.
/// - `pointer` - Current pointer state; [`Pointer::Inactive`] does nothing.
/// - `cfg` - Provides radius, attraction and orbit strength.
///
/// ### Returns
/// `true` if the particle was inside the influence radius.
pub fn pointer_phase(p: &mut Particle, pointer: Pointer, cfg: &Config) -> bool {
    let Some(target) = pointer.position() else {
        return false;
    };

    let delta = target - p.pos;
    let dist = delta.length();
    if dist >= cfg.pointer_radius {
        return false;
    }

    let force = (cfg.pointer_radius - dist) / cfg.pointer_radius;
    p.vel += delta * force * cfg.pointer_force * 0.01;
    p.vel += delta.perp() * force * cfg.orbit_strength;
    true
}

/// Damps the velocity, clamps the speed, and moves the particle.
///
/// After this call `p.vel.length() <= cfg.max_speed` (up to rounding).
pub fn integrate_phase(p: &mut Particle, cfg: &Config) {
    p.vel *= cfg.damping;

    let speed = p.vel.length();
    if speed > cfg.max_speed {
        p.vel = p.vel / speed * cfg.max_speed;
    }

    p.pos += p.vel;
}

/// Wraps the particle across viewport edges with a margin buffer.
///
/// A particle leaving past `-margin` reappears at `size + margin` and vice
/// versa, so the result always lies in
/// `[-margin, width + margin] x [-margin, height + margin]`.
///
/// ### Parameters
/// - `p` - Particle to wrap.
/// - `viewport` - Current viewport size.
/// - `margin` - Distance outside the viewport a particle may travel before wrapping.
pub fn wrap_phase(p: &mut Particle, viewport: Viewport, margin: f32) {
    let max_x = viewport.width + margin;
    let max_y = viewport.height + margin;

    if p.pos.x < -margin {
        p.pos.x = max_x;
    } else if p.pos.x > max_x {
        p.pos.x = -margin;
    }

    if p.pos.y < -margin {
        p.pos.y = max_y;
    } else if p.pos.y > max_y {
        p.pos.y = -margin;
    }
}

/// Advances the pulse phase and derives the current radius and opacity.
pub fn pulse_phase(p: &mut Particle) {
    p.phase += p.pulse_speed;
    p.radius = p.base_radius + p.phase.sin() * 0.5;
    p.alpha = p.base_alpha + (p.phase * 0.7).sin() * 0.1;
}

/// Runs every update phase on one particle.
///
/// The field clock is advanced by `cfg.clock_step` before the drift is
/// sampled, so each particle in a frame sees a slightly later time.
///
/// ### Parameters
/// - `p` - Particle to update.
/// - `clock` - Field clock, advanced in place. Kept in `f64`: at the
///   per-update step an `f32` clock stops advancing once it reaches 2048.
/// - `pointer` - Current pointer state.
/// - `viewport` - Current viewport size.
/// - `cfg` - Simulation constants.
///
/// ### Returns
/// `true` if the pointer influenced this particle.
pub fn update_particle(
    p: &mut Particle,
    clock: &mut f64,
    pointer: Pointer,
    viewport: Viewport,
    cfg: &Config,
) -> bool {
    *clock += f64::from(cfg.clock_step);

    drift_phase(p, *clock, cfg);
    let influenced = pointer_phase(p, pointer, cfg);
    integrate_phase(p, cfg);
    wrap_phase(p, viewport, cfg.wrap_margin);
    pulse_phase(p);

    influenced
}
