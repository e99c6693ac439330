//! Turns a particle field into drawing commands.
//!
//! The simulation never touches a real surface. A host implements
//! [`Canvas`] for whatever it draws on, and [`render_frame`] issues the
//! commands for one frame in back-to-front order.

use glam::Vec2;

use crate::{
    ambient::{AmbientGlow, ambient_glows},
    field::ParticleField,
    links::{Link, PointerLink},
    types::Rgb,
};

/// A 2D drawing surface in viewport coordinates.
pub trait Canvas {
    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Rgb);

    /// Draws a radial gradient fading from `glow.alpha` to transparent.
    fn radial_glow(&mut self, glow: &AmbientGlow);

    /// Strokes a straight line.
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgb, alpha: f32);

    /// Fills a disc.
    fn disc(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32);
}

/// What one frame drew.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub links: usize,
    pub pointer_links: usize,
    /// Particles the pointer pushed during the update.
    pub influenced: usize,
}

/// Draws the current field state.
///
/// Order: clear, ambient glows, particle links, pointer links, particles
/// (with halos for large ones).
///
/// ### Parameters
/// - `field` - Already-updated simulation state.
/// - `influenced` - Particles the pointer pushed during the update, reported back in the stats.
/// - `glow_time` - Slow clock for the ambient glows, see [`crate::ambient::glow_time`].
/// - `links` - Scratch buffer for particle links, reused across frames.
/// - `canvas` - Destination surface.
pub fn render_frame(
    field: &ParticleField,
    influenced: usize,
    glow_time: f32,
    links: &mut Vec<Link>,
    canvas: &mut impl Canvas,
) -> FrameStats {
    let cfg = field.config();
    canvas.clear(cfg.background);

    for glow in ambient_glows(field.viewport(), glow_time, cfg).iter() {
        canvas.radial_glow(glow);
    }

    field.links_into(links);
    for link in links.iter() {
        let a = field.particles[link.a].pos;
        let b = field.particles[link.b].pos;
        canvas.line(a, b, cfg.link_width, cfg.link_color, link.opacity);
    }

    let pointer_links: Vec<PointerLink> = field.pointer_links();
    for link in &pointer_links {
        let from = field.particles[link.particle].pos;
        canvas.line(
            from,
            link.target,
            cfg.link_width,
            cfg.pointer_link_color,
            link.opacity,
        );
    }

    for p in &field.particles {
        let color = cfg
            .palette
            .get(p.color_idx)
            .copied()
            .unwrap_or(cfg.link_color);
        canvas.disc(p.pos, p.radius, color, p.alpha);

        if p.has_halo(cfg) {
            canvas.disc(
                p.pos,
                p.radius * cfg.halo_scale,
                color,
                p.alpha * cfg.halo_alpha,
            );
        }
    }

    FrameStats {
        particles: field.particles.len(),
        links: links.len(),
        pointer_links: pointer_links.len(),
        influenced,
    }
}

/// A [`Canvas`] that records every command, for tests and headless runs.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

/// One recorded drawing command.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Rgb),
    Glow(AmbientGlow),
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgb,
        alpha: f32,
    },
    Disc {
        center: Vec2,
        radius: f32,
        color: Rgb,
        alpha: f32,
    },
}

impl RecordingCanvas {
    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn discs(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Disc { .. }))
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn radial_glow(&mut self, glow: &AmbientGlow) {
        self.commands.push(DrawCommand::Glow(*glow));
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgb, alpha: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
            alpha,
        });
    }

    fn disc(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32) {
        self.commands.push(DrawCommand::Disc {
            center,
            radius,
            color,
            alpha,
        });
    }
}
