//! Normalized progress timer

/// Tracks progress through a duration as a value in [0, 1].
///
/// A looping timer produces a repeating ramp. A one-shot timer saturates at 1
/// and stays there, which owners use to detect exhaustion.
#[derive(Debug, Clone, PartialEq)]
pub struct Timer {
    elapsed: f32,
    duration: f32,
    looping: bool,
}

impl Timer {
    /// `duration` must be positive
    pub fn new(duration: f32, looping: bool) -> Self {
        debug_assert!(duration > 0.0, "timer duration must be positive");
        Self {
            elapsed: 0.0,
            duration,
            looping,
        }
    }

    pub fn looping(duration: f32) -> Self {
        Self::new(duration, true)
    }

    pub fn one_shot(duration: f32) -> Self {
        Self::new(duration, false)
    }

    /// Advance by `dt` seconds and return the new progress
    pub fn step(&mut self, dt: f32) -> f32 {
        self.elapsed += dt;
        self.progress()
    }

    /// Progress without advancing
    pub fn progress(&self) -> f32 {
        let ratio = self.elapsed / self.duration;
        if self.looping {
            ratio % 1.0
        } else {
            ratio.min(1.0)
        }
    }

    /// Set the elapsed time explicitly. A nonzero seed desynchronizes timers
    /// that would otherwise animate in lockstep.
    pub fn reset(&mut self, seed: f32) {
        self.elapsed = seed;
    }

    pub fn reset_to_zero(&mut self) {
        self.reset(0.0);
    }

    /// True strictly inside the window: false at exactly 0 and exactly `duration`
    pub fn is_running(&self) -> bool {
        self.elapsed > 0.0 && self.elapsed < self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }
}
