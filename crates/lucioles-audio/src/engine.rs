//! Audio engine wrapping Kira's AudioManager
//!
//! Handles sound loading, background music and named cues.
//! Degrades gracefully when no audio device is available.

use kira::sound::static_sound::{StaticSoundData, StaticSoundHandle};
use kira::sound::PlaybackState;
use kira::{AudioManager, AudioManagerSettings, DefaultBackend, Tween};
use lucioles_core::{LuciolesError, Result};
use lucioles_runtime::CuePlayer;
use std::collections::HashMap;
use std::path::Path;

/// Wraps Kira's AudioManager with a sound cache and per-cue handles
pub struct AudioEngine {
    manager: Option<AudioManager<DefaultBackend>>,
    sound_cache: HashMap<String, StaticSoundData>,
    /// Last handle started for each cue, used to keep `play` idempotent
    cues: HashMap<String, StaticSoundHandle>,
    music: Option<StaticSoundHandle>,
    master_volume: f64,
}

impl Default for AudioEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioEngine {
    pub fn new() -> Self {
        // Try to create the audio manager; run silent if there is no device
        let manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .map_err(|e| tracing::warn!("no audio device available ({e}), running silent"))
            .ok();

        Self {
            manager,
            sound_cache: HashMap::new(),
            cues: HashMap::new(),
            music: None,
            master_volume: 1.0,
        }
    }

    /// Whether audio is actually available
    pub fn is_available(&self) -> bool {
        self.manager.is_some()
    }

    /// Load a sound file into the cache under `name`
    pub fn load_sound(&mut self, name: &str, path: &Path) -> Result<()> {
        if self.sound_cache.contains_key(name) {
            return Ok(());
        }
        if !path.exists() {
            return Err(LuciolesError::AssetNotFound(path.to_path_buf()));
        }

        let sound_data = StaticSoundData::from_file(path).map_err(|e| {
            LuciolesError::AudioError(format!("failed to load '{}': {e}", path.display()))
        })?;

        tracing::info!(name, path = %path.display(), "loaded sound");
        self.sound_cache.insert(name.to_string(), sound_data);
        Ok(())
    }

    /// Check if a sound is already loaded
    pub fn has_sound(&self, name: &str) -> bool {
        self.sound_cache.contains_key(name)
    }

    /// Linear amplitude applied to everything started afterwards (0.0-2.0)
    pub fn set_master_volume(&mut self, volume: f64) {
        self.master_volume = volume.clamp(0.0, 2.0);
        if let Some(music) = &mut self.music {
            music.set_volume(amplitude_to_db(self.master_volume), Tween::default());
        }
    }

    pub fn master_volume(&self) -> f64 {
        self.master_volume
    }

    /// Start a cached sound as looping background music, replacing any
    /// track already playing
    pub fn play_music(&mut self, name: &str) -> Result<()> {
        if let Some(mut previous) = self.music.take() {
            previous.stop(Tween::default());
        }

        let Some(data) = self.prepared(name)? else {
            return Ok(());
        };
        let Some(manager) = &mut self.manager else {
            return Ok(());
        };

        let handle = manager
            .play(data.loop_region(..))
            .map_err(|e| LuciolesError::AudioError(format!("failed to play '{name}': {e}")))?;
        self.music = Some(handle);
        Ok(())
    }

    /// Stop the background track, if one is playing
    pub fn stop_music(&mut self) {
        if let Some(mut music) = self.music.take() {
            music.stop(Tween::default());
        }
    }

    /// Whether `cue` was started and has not finished or been stopped
    pub fn is_cue_playing(&self, cue: &str) -> bool {
        self.cues
            .get(cue)
            .is_some_and(|handle| handle.state() == PlaybackState::Playing)
    }

    /// Cached sound data with the master volume applied. `None` when the
    /// engine is silent.
    fn prepared(&self, name: &str) -> Result<Option<StaticSoundData>> {
        if self.manager.is_none() {
            return Ok(None);
        }
        let data = self
            .sound_cache
            .get(name)
            .ok_or_else(|| LuciolesError::AudioError(format!("sound not cached: {name}")))?
            .clone();
        Ok(Some(data.volume(amplitude_to_db(self.master_volume))))
    }

    fn start_cue(&mut self, cue: &str) -> Result<()> {
        if self.is_cue_playing(cue) {
            return Ok(());
        }
        let Some(data) = self.prepared(cue)? else {
            return Ok(());
        };
        let Some(manager) = &mut self.manager else {
            return Ok(());
        };

        let handle = manager
            .play(data)
            .map_err(|e| LuciolesError::AudioError(format!("failed to play '{cue}': {e}")))?;
        self.cues.insert(cue.to_string(), handle);
        Ok(())
    }
}

impl CuePlayer for AudioEngine {
    fn play(&mut self, cue: &str) {
        // A cue that was never configured is simply not heard
        if !self.has_sound(cue) {
            return;
        }
        if let Err(e) = self.start_cue(cue) {
            tracing::warn!("{e}");
        }
    }

    fn stop(&mut self, cue: &str) {
        if let Some(mut handle) = self.cues.remove(cue) {
            handle.stop(Tween::default());
        }
    }
}

/// Convert linear amplitude (0.0-2.0) to decibels
fn amplitude_to_db(amplitude: f64) -> kira::Decibels {
    if amplitude <= 0.0 {
        kira::Decibels(-60.0) // silence
    } else {
        kira::Decibels((20.0 * (amplitude as f32).log10()).max(-60.0))
    }
}
