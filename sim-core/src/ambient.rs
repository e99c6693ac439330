use glam::Vec2;

use crate::{
    config::Config,
    types::{Rgb, Viewport},
};

/// A large soft radial glow, fading from `alpha` at the centre to nothing at `radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientGlow {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub alpha: f32,
}

/// Converts a wall-clock time in seconds to the slow glow clock.
pub fn glow_time(now_seconds: f64) -> f32 {
    (now_seconds * 1000.0 * 0.0003) as f32
}

/// Palette slots the three glows take their colours from.
const GLOW_PALETTE_SLOTS: [usize; 3] = [0, 2, 1];

fn glow_color(cfg: &Config, glow: usize) -> Rgb {
    if cfg.palette.is_empty() {
        return cfg.link_color;
    }
    cfg.palette[GLOW_PALETTE_SLOTS[glow] % cfg.palette.len()]
}

/// The three decorative glows for glow clock `g`.
///
/// Their positions drift slowly around fixed anchors; they do not depend on
/// any particle state. Colours come from `cfg.palette` (first, third and
/// second entry, wrapping for short palettes).
pub fn ambient_glows(viewport: Viewport, g: f32, cfg: &Config) -> [AmbientGlow; 3] {
    let (w, h) = (viewport.width, viewport.height);
    [
        AmbientGlow {
            center: Vec2::new(
                w * 0.3 + (g * 0.7).sin() * 100.0,
                h * 0.4 + (g * 0.5).cos() * 80.0,
            ),
            radius: 300.0,
            color: glow_color(cfg, 0),
            alpha: 0.015,
        },
        AmbientGlow {
            center: Vec2::new(
                w * 0.7 + (g * 0.6).cos() * 120.0,
                h * 0.6 + (g * 0.4).sin() * 100.0,
            ),
            radius: 250.0,
            color: glow_color(cfg, 1),
            alpha: 0.012,
        },
        AmbientGlow {
            center: Vec2::new(
                w * 0.5 + (g * 0.8).sin() * 80.0,
                h * 0.2 + (g * 0.3).cos() * 60.0,
            ),
            radius: 200.0,
            color: glow_color(cfg, 2),
            alpha: 0.01,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glows_sit_on_their_anchors_at_time_zero() {
        let glows = ambient_glows(Viewport::new(1000.0, 500.0), 0.0, &Config::default());

        let close = |a: Vec2, b: Vec2| a.distance(b) < 1e-3;

        assert!(close(glows[0].center, Vec2::new(300.0, 280.0)));
        assert!(close(glows[1].center, Vec2::new(820.0, 300.0)));
        assert!(close(glows[2].center, Vec2::new(500.0, 160.0)));
    }

    #[test]
    fn glows_stay_near_anchors() {
        let vp = Viewport::new(1000.0, 500.0);
        let cfg = Config::default();
        for i in 0..500 {
            let glows = ambient_glows(vp, i as f32 * 0.37, &cfg);
            assert!((glows[0].center.x - 300.0).abs() <= 100.0 + 1e-3);
            assert!((glows[1].center.y - 300.0).abs() <= 100.0 + 1e-3);
            assert!((glows[2].center.y - 100.0).abs() <= 60.0 + 1e-3);
        }
    }

    #[test]
    fn default_palette_gives_blue_purple_light_blue() {
        let glows = ambient_glows(Viewport::new(800.0, 600.0), 1.0, &Config::default());

        assert_eq!(glows[0].color, [59, 130, 246]);
        assert_eq!(glows[1].color, [139, 92, 246]);
        assert_eq!(glows[2].color, [96, 165, 250]);
    }

    #[test]
    fn glows_follow_a_custom_palette() {
        let cfg = Config {
            palette: vec![[255, 0, 0], [0, 255, 0]],
            ..Config::default()
        };

        let glows = ambient_glows(Viewport::new(800.0, 600.0), 1.0, &cfg);

        assert_eq!(glows[0].color, [255, 0, 0]);
        // Slot 2 wraps around a two-entry palette.
        assert_eq!(glows[1].color, [255, 0, 0]);
        assert_eq!(glows[2].color, [0, 255, 0]);
    }

    #[test]
    fn empty_palette_falls_back_to_link_color() {
        let cfg = Config {
            palette: Vec::new(),
            link_color: [1, 2, 3],
            ..Config::default()
        };

        let glows = ambient_glows(Viewport::new(800.0, 600.0), 1.0, &cfg);

        assert!(glows.iter().all(|g| g.color == [1, 2, 3]));
    }

    #[test]
    fn glow_time_is_slow() {
        assert!((glow_time(10.0) - 3.0).abs() < 1e-6);
    }
}
