//! Application entry point for the particle field viewer.
//!
//! This binary sets up logging, loads the optional config file given as
//! the first argument, and hands the window over to [`Viewer`].

mod canvas;
mod viewer;

use particle_field::config::Config;
use tracing_subscriber::EnvFilter;
use viewer::Viewer;

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if the config file is unusable, or eframe fails to create the
///   window (no drawing surface means the loop never starts).
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = match std::env::args_os().nth(1) {
        Some(path) => Config::load(path).inspect_err(|e| tracing::error!("{e}"))?,
        None => Config::default(),
    };

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Particle Field",
        options,
        Box::new(move |_cc| Ok(Box::new(Viewer::new(cfg)))),
    )
    .inspect_err(|e| tracing::error!("failed to start viewer: {e}"))?;

    Ok(())
}
