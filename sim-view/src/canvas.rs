//! [`Canvas`] implementation on top of an egui painter.

use std::f32::consts::TAU;

use egui::{Color32, Mesh, Painter, Pos2, Shape, Stroke};
use glam::Vec2;
use particle_field::{ambient::AmbientGlow, render::Canvas, types::Rgb};

/// Number of rim vertices used to approximate a radial gradient.
const GLOW_SEGMENTS: usize = 48;

/// Draws field commands into `painter`, with viewport `(0, 0)` at `origin`.
pub struct PainterCanvas<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> PainterCanvas<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn to_screen(&self, p: Vec2) -> Pos2 {
        self.origin + egui::vec2(p.x, p.y)
    }
}

/// Converts a colour and a `0..=1` opacity to an egui colour.
pub fn color(rgb: Rgb, alpha: f32) -> Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(rgb[0], rgb[1], rgb[2], a)
}

impl Canvas for PainterCanvas<'_> {
    fn clear(&mut self, rgb: Rgb) {
        self.painter
            .rect_filled(self.painter.clip_rect(), 0.0, Color32::from_rgb(rgb[0], rgb[1], rgb[2]));
    }

    // egui has no gradient fill; a triangle fan with a transparent rim lets
    // the GPU interpolate the falloff.
    fn radial_glow(&mut self, glow: &AmbientGlow) {
        let center = self.to_screen(glow.center);
        let mut mesh = Mesh::default();
        mesh.colored_vertex(center, color(glow.color, glow.alpha));

        for i in 0..GLOW_SEGMENTS {
            let t = i as f32 / GLOW_SEGMENTS as f32 * TAU;
            let rim = center + egui::vec2(t.cos(), t.sin()) * glow.radius;
            mesh.colored_vertex(rim, color(glow.color, 0.0));
        }
        for i in 0..GLOW_SEGMENTS as u32 {
            let next = (i + 1) % GLOW_SEGMENTS as u32;
            mesh.add_triangle(0, i + 1, next + 1);
        }

        self.painter.add(Shape::mesh(mesh));
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, rgb: Rgb, alpha: f32) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            Stroke::new(width, color(rgb, alpha)),
        );
    }

    fn disc(&mut self, center: Vec2, radius: f32, rgb: Rgb, alpha: f32) {
        self.painter
            .circle_filled(self.to_screen(center), radius.max(0.0), color(rgb, alpha));
    }
}
