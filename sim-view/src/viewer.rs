//! Interactive particle network background built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the frame [`Controller`] and
//! implements [`eframe::App`] to feed it window input and draw its output
//! through a [`PainterCanvas`].

use eframe::App;
use glam::Vec2;
use particle_field::{
    config::Config,
    controller::{Controller, HostEvent, Lifecycle},
    render::FrameStats,
    types::{SurfaceSize, Viewport},
};
use rand::Rng;

use crate::canvas::PainterCanvas;

/// Viewport used until the first frame reports the real window size.
const INITIAL_VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 720.0,
};

/// Main application state for the viewer.
///
/// The per-frame update is:
/// 1. Translate window size and pointer/touch input into [`HostEvent`]s.
/// 2. Call [`Controller::frame`] with the egui clock.
/// 3. Request another repaint while running so the animation keeps going.
///
/// Pausing freezes the field but keeps drawing it.
///
/// ### Fields
/// - `controller` - Owns the particle field and the loop state.
/// - `last_stats` - Counts from the most recent frame, for the status bar.
/// - `surface` - Backing pixel size of the drawing area.
/// - `pointer_inside` - Whether the last frame saw a hovering pointer.
pub struct Viewer {
    controller: Controller,
    last_stats: FrameStats,
    surface: SurfaceSize,
    pointer_inside: bool,
}

impl Viewer {
    /// Creates a viewer with a freshly seeded field.
    pub fn new(cfg: Config) -> Self {
        let seed = rand::rng().random();
        Self::with_seed(cfg, seed)
    }

    /// Creates a viewer with a fixed seed.
    pub fn with_seed(cfg: Config, seed: u64) -> Self {
        let surface = SurfaceSize::for_viewport(INITIAL_VIEWPORT, 1.0, cfg.max_pixel_ratio);
        Self {
            controller: Controller::start(INITIAL_VIEWPORT, cfg, seed),
            last_stats: FrameStats::default(),
            surface,
            pointer_inside: false,
        }
    }

    fn toggle_running(&mut self) {
        match self.controller.state() {
            Lifecycle::Running => self.controller.pause(),
            Lifecycle::Paused | Lifecycle::Stopped => self.controller.resume(),
        }
    }

    /// Forwards the drawing area size and input of one egui frame.
    fn forward_input(&mut self, rect: egui::Rect, pixel_ratio: f32, input: FrameInput) {
        let viewport = Viewport::new(rect.width(), rect.height());
        let max_ratio = self.controller.field().config().max_pixel_ratio;
        self.surface = SurfaceSize::for_viewport(viewport, pixel_ratio, max_ratio);

        let events = host_events(
            self.controller.field().viewport(),
            viewport,
            rect.min,
            &input,
            self.pointer_inside,
        );
        self.pointer_inside = input.hover.is_some() || !input.touches.is_empty();

        for event in events {
            self.controller.handle(event);
        }
    }

    /// Builds the bottom status bar (counts, link distance, surface size).
    fn ui_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let running = self.controller.state() == Lifecycle::Running;
                if ui.button(if running { "⏸ Pause" } else { "▶ Run" }).clicked() {
                    self.toggle_running();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "surface = {}x{}",
                        self.surface.width, self.surface.height
                    ));
                    ui.label(format!(
                        "link distance = {:.1}",
                        self.controller.field().link_distance()
                    ));
                    ui.separator();
                    ui.label(format!("pointer links = {}", self.last_stats.pointer_links));
                    ui.label(format!("links = {}", self.last_stats.links));
                    ui.label(format!("particles = {}", self.last_stats.particles));
                });
            });
        });
    }

    /// Builds the central panel where the field is drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;
                let painter = ui.painter_at(rect);

                let hover = response.hover_pos();
                let input = ctx.input(|i| FrameInput {
                    hover,
                    touches: i
                        .events
                        .iter()
                        .filter_map(|e| match e {
                            egui::Event::Touch {
                                phase: egui::TouchPhase::Start | egui::TouchPhase::Move,
                                pos,
                                ..
                            } => Some(*pos),
                            _ => None,
                        })
                        .collect(),
                    time: i.time,
                });
                let now = input.time;
                self.forward_input(rect, ctx.pixels_per_point(), input);

                let mut canvas = PainterCanvas::new(&painter, rect.min);
                if let Some(stats) = self.controller.frame(now, &mut canvas) {
                    self.last_stats = stats;
                }
                // A paused field still redraws whenever egui repaints on input.
                if self.controller.state() == Lifecycle::Running {
                    ctx.request_repaint();
                }
            });
    }
}

/// Raw input sampled from one egui frame.
struct FrameInput {
    hover: Option<egui::Pos2>,
    touches: Vec<egui::Pos2>,
    time: f64,
}

fn to_field(p: egui::Pos2, origin: egui::Pos2) -> Vec2 {
    let local = p - origin;
    Vec2::new(local.x, local.y)
}

/// Translates one frame of window state into field events.
///
/// ### Parameters
/// - `current` - Viewport the field was last sized for.
/// - `viewport` - Viewport of the drawing area this frame.
/// - `origin` - Screen position of the drawing area's top-left corner.
/// - `input` - Pointer and touch input of this frame.
/// - `was_inside` - Whether the pointer hovered the area last frame.
fn host_events(
    current: Viewport,
    viewport: Viewport,
    origin: egui::Pos2,
    input: &FrameInput,
    was_inside: bool,
) -> Vec<HostEvent> {
    let mut events = Vec::with_capacity(2);

    if viewport != current && viewport.width > 0.0 && viewport.height > 0.0 {
        events.push(HostEvent::Resized(viewport));
    }

    if !input.touches.is_empty() {
        let touches = input.touches.iter().map(|&p| to_field(p, origin)).collect();
        events.push(HostEvent::TouchMoved(touches));
    } else if let Some(hover) = input.hover {
        events.push(HostEvent::PointerMoved(to_field(hover, origin)));
    } else if was_inside {
        events.push(HostEvent::PointerLeft);
    }

    events
}

impl App for Viewer {
    /// eframe callback that builds the status bar and draws the field.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}
