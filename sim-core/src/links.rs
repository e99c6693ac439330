//! Proximity links drawn between particles and towards the pointer.

use glam::Vec2;

use crate::{particle::Particle, pointer::Pointer, types::ParticleId};

/// A line between two particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: ParticleId,
    pub b: ParticleId,
    pub opacity: f32,
}

/// A line from a particle to the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerLink {
    pub particle: ParticleId,
    pub target: Vec2,
    pub opacity: f32,
}

/// Opacity of a link of length `dist`, or `None` if it is too long to draw.
///
/// The opacity decays linearly from `scale` at distance zero to `0` at
/// `max_dist`.
#[inline]
pub fn link_opacity(dist: f32, max_dist: f32, scale: f32) -> Option<f32> {
    if dist < max_dist {
        Some((1.0 - dist / max_dist) * scale)
    } else {
        None
    }
}

/// Finds every unordered particle pair closer than `max_dist`.
///
/// This is a plain O(n²) scan; the particle count is capped, so a spatial
/// index would not pay for itself. Pairs are yielded with `a < b`.
pub fn particle_links(particles: &[Particle], max_dist: f32, scale: f32) -> Vec<Link> {
    let mut out = Vec::new();
    particle_links_into(particles, max_dist, scale, &mut out);
    out
}

/// Like [`particle_links`], reusing `out` as scratch storage.
pub fn particle_links_into(particles: &[Particle], max_dist: f32, scale: f32, out: &mut Vec<Link>) {
    out.clear();
    let max_d2 = max_dist * max_dist;

    for (i, a) in particles.iter().enumerate() {
        for (j, b) in particles.iter().enumerate().skip(i + 1) {
            let d2 = a.pos.distance_squared(b.pos);
            if d2 >= max_d2 {
                continue;
            }
            if let Some(opacity) = link_opacity(d2.sqrt(), max_dist, scale) {
                out.push(Link { a: i, b: j, opacity });
            }
        }
    }
}

/// Finds every particle within `radius` of an active pointer.
pub fn pointer_links(
    particles: &[Particle],
    pointer: Pointer,
    radius: f32,
    scale: f32,
) -> Vec<PointerLink> {
    let Some(target) = pointer.position() else {
        return Vec::new();
    };

    particles
        .iter()
        .enumerate()
        .filter_map(|(id, p)| {
            link_opacity(p.pos.distance(target), radius, scale).map(|opacity| PointerLink {
                particle: id,
                target,
                opacity,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32) -> Particle {
        Particle {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            radius: 1.0,
            base_radius: 1.0,
            alpha: 0.5,
            base_alpha: 0.5,
            color_idx: 0,
            phase: 0.0,
            pulse_speed: 0.01,
            noise_offset: Vec2::ZERO,
        }
    }

    #[test]
    fn link_opacity_decays_linearly() {
        assert_eq!(link_opacity(0.0, 150.0, 0.15), Some(0.15));
        let mid = link_opacity(75.0, 150.0, 0.15).unwrap();
        assert!((mid - 0.075).abs() < 1e-6);
        assert_eq!(link_opacity(150.0, 150.0, 0.15), None);
        assert_eq!(link_opacity(151.0, 150.0, 0.15), None);
    }

    #[test]
    fn particle_links_only_close_pairs() {
        let particles = vec![at(0.0, 0.0), at(30.0, 40.0), at(500.0, 500.0)];

        let links = particle_links(&particles, 150.0, 0.15);

        assert_eq!(links.len(), 1);
        let link = links[0];
        assert_eq!((link.a, link.b), (0, 1));
        // d = 50 -> (1 - 50/150) * 0.15 = 0.1
        assert!((link.opacity - 0.1).abs() < 1e-6);
    }

    #[test]
    fn particle_links_are_unordered_pairs() {
        let particles: Vec<Particle> = (0..5).map(|i| at(i as f32, 0.0)).collect();

        let links = particle_links(&particles, 150.0, 0.15);

        // All pairs are within range: 5 choose 2.
        assert_eq!(links.len(), 10);
        assert!(links.iter().all(|l| l.a < l.b));
    }

    #[test]
    fn pair_exactly_at_max_distance_is_not_linked() {
        let particles = vec![at(0.0, 0.0), at(150.0, 0.0)];
        assert!(particle_links(&particles, 150.0, 0.15).is_empty());
    }

    #[test]
    fn particle_links_into_clears_previous_output() {
        let particles = vec![at(0.0, 0.0), at(10.0, 0.0)];
        let mut out = vec![Link {
            a: 7,
            b: 9,
            opacity: 1.0,
        }];

        particle_links_into(&particles, 150.0, 0.15, &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!((out[0].a, out[0].b), (0, 1));
    }

    #[test]
    fn pointer_links_use_pointer_radius() {
        let particles = vec![at(0.0, 0.0), at(100.0, 0.0), at(300.0, 0.0)];
        let pointer = Pointer::At(Vec2::new(0.0, 0.0));

        let links = pointer_links(&particles, pointer, 200.0, 0.2);

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].particle, 0);
        assert!((links[0].opacity - 0.2).abs() < 1e-6);
        assert_eq!(links[1].particle, 1);
        assert!((links[1].opacity - 0.1).abs() < 1e-6);
        assert!(links.iter().all(|l| l.target == Vec2::ZERO));
    }

    #[test]
    fn inactive_pointer_has_no_links() {
        let particles = vec![at(0.0, 0.0), at(-999.0, -999.0)];

        assert!(pointer_links(&particles, Pointer::Inactive, 200.0, 0.2).is_empty());
        assert!(
            pointer_links(&particles, Pointer::from_host(Pointer::SENTINEL), 200.0, 0.2)
                .is_empty()
        );
    }
}
