//! Frame loop ownership: host events in, one update+render pass per tick out.
//!
//! A [`Controller`] replaces a self-rescheduling animation callback. The host
//! (a window, a test, a headless benchmark) decides when frames happen and
//! feeds timestamps to [`Controller::frame`]; [`FixedTicker`] and [`run`]
//! provide a deterministic tick source.

use glam::Vec2;

use crate::{
    ambient::glow_time,
    config::Config,
    field::ParticleField,
    links::Link,
    pointer::Pointer,
    render::{Canvas, FrameStats, render_frame},
    types::Viewport,
};

/// Input the host forwards to the simulation.
#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
    Resized(Viewport),
    PointerMoved(Vec2),
    /// Active touch points; only the first one steers the field.
    TouchMoved(Vec<Vec2>),
    PointerLeft,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Running,
    /// Frames still draw, but the field is not advanced.
    Paused,
    Stopped,
}

/// Owns one particle field and drives it frame by frame.
#[derive(Debug)]
pub struct Controller {
    field: ParticleField,
    state: Lifecycle,
    links: Vec<Link>,
    frames: u64,
}

impl Controller {
    /// Builds the field and starts the loop.
    pub fn start(viewport: Viewport, cfg: Config, seed: u64) -> Self {
        let field = ParticleField::new(viewport, cfg, seed);
        tracing::info!(
            width = viewport.width,
            height = viewport.height,
            particles = field.particles.len(),
            "particle field started"
        );
        Self {
            field,
            state: Lifecycle::Running,
            links: Vec::new(),
            frames: 0,
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }

    pub fn state(&self) -> Lifecycle {
        self.state
    }

    /// Number of frames rendered since start.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Applies a host event. The next frame sees the result.
    pub fn handle(&mut self, event: HostEvent) {
        match event {
            HostEvent::Resized(viewport) => {
                if viewport != self.field.viewport() {
                    self.field.resize(viewport);
                }
            }
            HostEvent::PointerMoved(pos) => self.field.set_pointer(Pointer::from_host(pos)),
            HostEvent::TouchMoved(touches) => {
                if let Some(&first) = touches.first() {
                    self.field.set_pointer(Pointer::from_host(first));
                }
            }
            HostEvent::PointerLeft => self.field.set_pointer(Pointer::Inactive),
        }
    }

    /// Runs one update+render pass at wall-clock time `now_seconds`.
    ///
    /// A paused controller skips the update and redraws the field as it is.
    ///
    /// ### Returns
    /// What was drawn, or `None` if the loop has been stopped.
    pub fn frame(&mut self, now_seconds: f64, canvas: &mut impl Canvas) -> Option<FrameStats> {
        let influenced = match self.state {
            Lifecycle::Stopped => return None,
            Lifecycle::Paused => 0,
            Lifecycle::Running => self.field.step(),
        };

        let stats = render_frame(
            &self.field,
            influenced,
            glow_time(now_seconds),
            &mut self.links,
            canvas,
        );
        self.frames += 1;
        Some(stats)
    }

    /// Freezes the simulation while frames keep drawing. Has no effect on a
    /// stopped controller.
    pub fn pause(&mut self) {
        if self.state == Lifecycle::Running {
            tracing::debug!(frames = self.frames, "particle field paused");
            self.state = Lifecycle::Paused;
        }
    }

    /// Tears the loop down; later frames draw nothing.
    pub fn stop(&mut self) {
        if self.state != Lifecycle::Stopped {
            tracing::info!(frames = self.frames, "particle field stopped");
        }
        self.state = Lifecycle::Stopped;
    }

    /// Restarts a paused or stopped loop without reseeding.
    pub fn resume(&mut self) {
        if self.state != Lifecycle::Running {
            tracing::debug!(from = ?self.state, "particle field resumed");
        }
        self.state = Lifecycle::Running;
    }
}

/// Evenly spaced frame timestamps, in seconds.
#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    next: f64,
    interval: f64,
}

impl FixedTicker {
    pub fn new(start: f64, interval: f64) -> Self {
        Self {
            next: start,
            interval,
        }
    }

    /// A 60 Hz ticker starting at zero.
    pub fn sixty_hz() -> Self {
        Self::new(0.0, 1.0 / 60.0)
    }
}

impl Iterator for FixedTicker {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let now = self.next;
        self.next += self.interval;
        Some(now)
    }
}

/// Drives `controller` for up to `frames` ticks of `ticker`.
///
/// Stops early once the controller is stopped.
///
/// ### Returns
/// Stats for every frame that was drawn.
pub fn run(
    controller: &mut Controller,
    ticker: impl IntoIterator<Item = f64>,
    frames: usize,
    canvas: &mut impl Canvas,
) -> Vec<FrameStats> {
    ticker
        .into_iter()
        .take(frames)
        .map_while(|now| controller.frame(now, canvas))
        .collect()
}
