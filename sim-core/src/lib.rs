//! Core 2-D particle network simulation library.
//!
//! Main components:
//! - [`field`] — the simulation state object and resize contract.
//! - [`phases`] — per-particle update phases (drift, pointer, integrate, wrap, pulse).
//! - [`links`] — proximity links between particles and to the pointer.
//! - [`render`] — the [`render::Canvas`] adapter trait and frame drawing.
//! - [`controller`] — host events, frame loop and a deterministic ticker.
//! - [`config`] — tuning constants, loadable from TOML.
//! - [`ambient`] — decorative background glows.
//! - [`particle`], [`pointer`], [`noise`], [`types`] — building blocks.

pub mod ambient;
pub mod config;
pub mod controller;
pub mod error;
pub mod field;
pub mod links;
pub mod noise;
pub mod particle;
pub mod phases;
pub mod pointer;
pub mod render;
pub mod types;
