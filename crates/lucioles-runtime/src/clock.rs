//! Game clock with fixed-rate tick pacing

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Number of recent ticks averaged for the FPS readout
const FPS_WINDOW: usize = 10;

/// Longest delta handed to the simulation, to avoid huge jumps after a stall
const MAX_DELTA: f64 = 0.25;

/// Tracks tick timing and paces ticks to a target rate
pub struct GameClock {
    /// Total elapsed game time in seconds
    pub total_time: f64,
    /// Time covered by the last tick in seconds
    pub delta_time: f64,
    /// Target interval between ticks (default: 1/60 second)
    pub tick_interval: f64,
    /// Instant of the last tick, None before the first one
    last_instant: Option<Instant>,
    /// Recent raw tick durations for the FPS estimate
    recent: VecDeque<f64>,
    ticks: u64,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            tick_interval: 1.0 / 60.0,
            last_instant: None,
            recent: VecDeque::with_capacity(FPS_WINDOW),
            ticks: 0,
        }
    }
}

impl GameClock {
    /// Create a new game clock with the default 60Hz tick rate
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a game clock with a custom tick rate
    pub fn with_tick_rate(hz: f64) -> Self {
        Self {
            tick_interval: 1.0 / hz,
            ..Self::default()
        }
    }

    /// Advance the clock to now. Call once per tick.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Advance the clock to `now` and return the tick's delta time in seconds.
    /// The first tick reports zero.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        self.ticks += 1;

        let Some(last) = self.last_instant.replace(now) else {
            self.delta_time = 0.0;
            return 0.0;
        };

        let elapsed = now.saturating_duration_since(last).as_secs_f64();
        if self.recent.len() == FPS_WINDOW {
            self.recent.pop_front();
        }
        self.recent.push_back(elapsed);

        if elapsed > MAX_DELTA {
            tracing::debug!(elapsed, "tick stalled, clamping delta");
        }
        self.delta_time = elapsed.min(MAX_DELTA);
        self.total_time += self.delta_time;
        self.delta_time as f32
    }

    /// When the next tick is due. Immediately if no tick has happened yet.
    pub fn next_deadline(&self) -> Instant {
        match self.last_instant {
            Some(last) => last + Duration::from_secs_f64(self.tick_interval),
            None => Instant::now(),
        }
    }

    /// True once the tick interval has passed since the last tick
    pub fn is_tick_due(&self, now: Instant) -> bool {
        match self.last_instant {
            Some(_) => now >= self.next_deadline(),
            None => true,
        }
    }

    /// Rolling frames-per-second over the last few ticks
    pub fn fps(&self) -> f32 {
        let total: f64 = self.recent.iter().sum();
        if total <= 0.0 {
            return 0.0;
        }
        (self.recent.len() as f64 / total) as f32
    }

    /// Number of ticks since creation
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_defaults() {
        let clock = GameClock::new();
        assert!((clock.tick_interval - 1.0 / 60.0).abs() < 1e-10);
        assert_eq!(clock.total_time, 0.0);
        assert_eq!(clock.delta_time, 0.0);
        assert_eq!(clock.fps(), 0.0);
    }

    #[test]
    fn test_custom_tick_rate() {
        let clock = GameClock::with_tick_rate(30.0);
        assert!((clock.tick_interval - 1.0 / 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_first_tick_zero_delta() {
        let mut clock = GameClock::new();
        assert_eq!(clock.tick(), 0.0);
        assert_eq!(clock.ticks(), 1);
    }

    #[test]
    fn test_delta_between_ticks() {
        let mut clock = GameClock::new();
        let start = Instant::now();
        clock.tick_at(start);
        let dt = clock.tick_at(start + Duration::from_millis(20));
        assert!((dt - 0.02).abs() < 1e-4);
        assert!((clock.total_time - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_delta_clamped_after_stall() {
        let mut clock = GameClock::new();
        let start = Instant::now();
        clock.tick_at(start);
        let dt = clock.tick_at(start + Duration::from_secs(3));
        assert!((dt - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_fps_rolling_average() {
        let mut clock = GameClock::new();
        let mut now = Instant::now();
        clock.tick_at(now);
        for _ in 0..30 {
            now += Duration::from_millis(25);
            clock.tick_at(now);
        }
        assert!((clock.fps() - 40.0).abs() < 0.5);
    }

    #[test]
    fn test_deadline_pacing() {
        let mut clock = GameClock::with_tick_rate(50.0);
        let start = Instant::now();
        assert!(clock.is_tick_due(start));

        clock.tick_at(start);
        let wait = clock.next_deadline() - start;
        assert!((wait.as_secs_f64() - 0.02).abs() < 1e-6);
        assert!(!clock.is_tick_due(start + Duration::from_millis(10)));
        assert!(clock.is_tick_due(start + Duration::from_millis(20)));
    }
}
