//! Lucioles Audio - Sound playback (Kira backend)
//!
//! - `AudioEngine` - wraps Kira's AudioManager, caches sounds, loops the
//!   background track and implements `CuePlayer` for the simulation
//! - `start` - builds an engine from the `[audio]` config table

pub mod engine;

pub use engine::AudioEngine;

use lucioles_core::{AudioSection, Result};

/// Name the background track is cached under
pub const MUSIC: &str = "music";

/// Build an engine from the `[audio]` table: load the cue under `cue_name`,
/// load and start the background music. Missing files are errors; a missing
/// audio device is not.
pub fn start(section: &AudioSection, cue_name: &str) -> Result<AudioEngine> {
    let mut engine = AudioEngine::new();
    engine.set_master_volume(section.volume);

    if let Some(cue) = &section.cue {
        engine.load_sound(cue_name, cue)?;
    }
    if let Some(music) = &section.music {
        engine.load_sound(MUSIC, music)?;
        engine.play_music(MUSIC)?;
    }

    tracing::debug!(
        available = engine.is_available(),
        volume = engine.master_volume(),
        "audio started"
    );
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucioles_runtime::CuePlayer;

    #[test]
    fn test_start_without_assets() {
        // No sounds configured: a silent engine either way
        let mut engine = start(&AudioSection::default(), "firefly").unwrap();
        assert!(!engine.has_sound("firefly"));
        assert!(!engine.has_sound(MUSIC));
        engine.play("firefly");
        engine.stop("firefly");
    }

    #[test]
    fn test_start_with_missing_music_fails() {
        let section = AudioSection {
            music: Some("/no/such/track.ogg".into()),
            ..AudioSection::default()
        };
        assert!(start(&section, "firefly").is_err());
    }
}
