//! Sound cue collaborator

/// Fire-and-forget playback of named sound cues
pub trait CuePlayer {
    /// Start `cue`. Does nothing while the cue is already playing.
    fn play(&mut self, cue: &str);

    /// Stop `cue` if it is playing
    fn stop(&mut self, cue: &str);
}

/// Cue player for headless runs and machines without an audio device
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentCues;

impl CuePlayer for SilentCues {
    fn play(&mut self, _cue: &str) {}

    fn stop(&mut self, _cue: &str) {}
}
