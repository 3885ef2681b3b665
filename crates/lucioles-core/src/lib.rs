//! Lucioles Core - Foundational types for the firefly simulation
//!
//! This crate provides the types that all other Lucioles crates depend on:
//! - `Color` - RGBA color with linear interpolation
//! - `Playfield` - the window bounds the swarm lives in
//! - `LuciolesConfig` - TOML configuration
//! - Error types and Result alias

pub mod config;
mod error;
mod types;

pub use config::{AudioSection, LuciolesConfig, MessageSection, SimulationSection, WindowSection};
pub use error::{LuciolesError, Result};
pub use glam::Vec2;
pub use types::{Color, Playfield};
