//! Lucioles - a firefly swarm you can scatter with a lantern
//!
//! Usage:
//!   lucioles [--config <lucioles.toml>] [--fireflies N] [--tick-rate HZ]
//!            [--seed N] [--show-fps] [--headless TICKS]

use anyhow::{Context, Result};
use clap::Parser;
use lucioles_core::LuciolesConfig;
use lucioles_player::{headless, PlayerApp};
use lucioles_swarm::lantern::PROXIMITY_CUE;
use lucioles_swarm::{Simulation, SwarmRng};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

#[derive(Parser)]
#[command(name = "lucioles")]
#[command(about = "Firefly swarm simulation - hold the mouse button to scatter them")]
struct Args {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of fireflies
    #[arg(long)]
    fireflies: Option<usize>,

    /// Ticks per second
    #[arg(long)]
    tick_rate: Option<f64>,

    /// Seed for a reproducible swarm
    #[arg(long)]
    seed: Option<u64>,

    /// Show the FPS readout from the start (toggle with R)
    #[arg(long)]
    show_fps: bool,

    /// Run this many ticks without a window, then exit
    #[arg(long, value_name = "TICKS")]
    headless: Option<u64>,
}

impl Args {
    fn load_config(&self) -> Result<LuciolesConfig> {
        let mut config = match &self.config {
            Some(path) => LuciolesConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => LuciolesConfig::default(),
        };

        if let Some(fireflies) = self.fireflies {
            config.simulation.fireflies = fireflies;
        }
        if let Some(tick_rate) = self.tick_rate {
            config.simulation.tick_rate = tick_rate;
        }
        if self.seed.is_some() {
            config.simulation.seed = self.seed;
        }
        if self.show_fps {
            config.simulation.show_fps = true;
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = args.load_config()?;

    let rng = match config.simulation.seed {
        Some(seed) => {
            tracing::info!(seed, "using fixed seed");
            SwarmRng::new(seed)
        }
        None => SwarmRng::from_entropy(),
    };
    let mut sim = Simulation::new(&config, rng);

    if let Some(ticks) = args.headless {
        let dt = (1.0 / config.simulation.tick_rate) as f32;
        let report = headless::run(&mut sim, ticks, dt);
        println!(
            "{} ticks, {} fireflies, {} draw commands in the last frame",
            report.ticks, report.fireflies, report.last_frame_commands
        );
        return Ok(());
    }

    config.check_assets().context("Missing asset")?;
    let audio = lucioles_audio::start(&config.audio, PROXIMITY_CUE).context("Failed to start audio")?;

    println!("Controls:");
    println!("  Hold left mouse  - Scatter nearby fireflies");
    println!("  Mouse wheel      - Resize the lantern");
    println!("  Click            - Dismiss the message");
    println!("  R                - Toggle FPS");
    println!("  Escape           - Exit");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = PlayerApp::new(config, sim, audio);
    event_loop.run_app(&mut app)?;

    if let Some(e) = app.take_error() {
        return Err(e).context("Player stopped");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "lucioles",
            "--fireflies",
            "12",
            "--tick-rate",
            "30",
            "--seed",
            "7",
            "--show-fps",
        ]);
        let config = args.load_config().unwrap();
        assert_eq!(config.simulation.fireflies, 12);
        assert_eq!(config.simulation.tick_rate, 30.0);
        assert_eq!(config.simulation.seed, Some(7));
        assert!(config.simulation.show_fps);
    }

    #[test]
    fn test_invalid_tick_rate_rejected() {
        let args = Args::parse_from(["lucioles", "--tick-rate", "0"]);
        assert!(args.load_config().is_err());
    }

    #[test]
    fn test_headless_flag() {
        let args = Args::parse_from(["lucioles", "--headless", "100"]);
        assert_eq!(args.headless, Some(100));
        assert!(args.config.is_none());
    }
}
