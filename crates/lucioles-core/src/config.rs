//! Simulation configuration loaded from TOML
//!
//! Every key is optional; a missing table or key falls back to the defaults
//! below. Relative asset paths are resolved against the directory holding the
//! config file.

use crate::error::{LuciolesError, Result};
use crate::types::{Color, Playfield};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LuciolesConfig {
    pub window: WindowSection,
    pub simulation: SimulationSection,
    pub audio: AudioSection,
    pub message: MessageSection,
}

/// `[window]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSection {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background: [u8; 3],
}

impl Default for WindowSection {
    fn default() -> Self {
        Self {
            title: "Lucioles".into(),
            width: 800,
            height: 600,
            background: [0, 0, 0],
        }
    }
}

/// `[simulation]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSection {
    /// Number of fireflies spawned at startup
    pub fireflies: usize,
    /// Target ticks per second
    pub tick_rate: f64,
    /// Fixed RNG seed; random when absent
    pub seed: Option<u64>,
    /// Start with the FPS overlay visible
    pub show_fps: bool,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            fireflies: 100,
            tick_rate: 60.0,
            seed: None,
            show_fps: false,
        }
    }
}

/// `[audio]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSection {
    /// Background track, looped for the whole run
    pub music: Option<PathBuf>,
    /// Proximity cue played while fireflies are inside the lantern
    pub cue: Option<PathBuf>,
    /// Linear master volume
    pub volume: f64,
}

impl Default for AudioSection {
    fn default() -> Self {
        Self {
            music: None,
            cue: None,
            volume: 1.0,
        }
    }
}

/// `[message]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageSection {
    pub text: String,
    /// TTF/OTF file; the default UI font when absent
    pub font: Option<PathBuf>,
    pub font_size: f32,
    pub countdown: f32,
    pub fade_in: f32,
    pub fade_out: f32,
    /// Defaults to (width / 2, -50)
    pub start_position: Option<[f32; 2]>,
    /// Defaults to (width / 2, 50)
    pub end_position: Option<[f32; 2]>,
    /// Defaults to the background color
    pub start_color: Option<[u8; 3]>,
    pub end_color: [u8; 3],
}

impl Default for MessageSection {
    fn default() -> Self {
        Self {
            text: "click with your mouse".into(),
            font: None,
            font_size: 32.0,
            countdown: 3.0,
            fade_in: 2.0,
            fade_out: 2.0,
            start_position: None,
            end_position: None,
            start_color: None,
            end_color: [255, 182, 193],
        }
    }
}

impl LuciolesConfig {
    /// Load and validate a config file, resolving asset paths next to it
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&text)?;
        if let Some(dir) = path.parent() {
            config.resolve_paths(dir);
        }
        Ok(config)
    }

    /// Parse and validate config text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(LuciolesError::ValidationError(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if !(self.simulation.tick_rate > 0.0 && self.simulation.tick_rate <= 1000.0) {
            return Err(out_of_range("simulation.tick_rate", 0.0, 1000.0, self.simulation.tick_rate));
        }
        if !(0.0..=2.0).contains(&self.audio.volume) {
            return Err(out_of_range("audio.volume", 0.0, 2.0, self.audio.volume));
        }
        for (field, value) in [
            ("message.countdown", self.message.countdown),
            ("message.fade_in", self.message.fade_in),
            ("message.fade_out", self.message.fade_out),
        ] {
            if !(value > 0.0) {
                return Err(LuciolesError::ValidationError(format!(
                    "{field} must be positive, got {value}"
                )));
            }
        }
        if !(self.message.font_size > 0.0) {
            return Err(LuciolesError::ValidationError(format!(
                "message.font_size must be positive, got {}",
                self.message.font_size
            )));
        }
        Ok(())
    }

    /// Make relative asset paths relative to `base`
    pub fn resolve_paths(&mut self, base: &Path) {
        for path in [
            &mut self.audio.music,
            &mut self.audio.cue,
            &mut self.message.font,
        ]
        .into_iter()
        .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }

    /// Every configured asset must exist; missing files are fatal at startup
    pub fn check_assets(&self) -> Result<()> {
        for path in [&self.audio.music, &self.audio.cue, &self.message.font]
            .into_iter()
            .flatten()
        {
            if !path.is_file() {
                return Err(LuciolesError::AssetNotFound(path.clone()));
            }
        }
        Ok(())
    }

    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.window.width as f32, self.window.height as f32)
    }

    pub fn background(&self) -> Color {
        let [r, g, b] = self.window.background;
        Color::from_rgb8(r, g, b)
    }
}

fn out_of_range(field: &str, min: f64, max: f64, value: f64) -> LuciolesError {
    LuciolesError::ValueOutOfRange {
        field: field.into(),
        min,
        max,
        value,
    }
}
