//! Lucioles Player - windowed and headless front ends
//!
//! This crate provides the `PlayerApp` application handler that runs the
//! firefly simulation in a window, and a headless runner for smoke tests.

pub mod headless;
mod painter;
mod player_app;
mod render;

pub use player_app::PlayerApp;
