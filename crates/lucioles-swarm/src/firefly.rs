//! Firefly: a seek-and-arrive particle with a pulsing glow

use crate::rand::SwarmRng;
use lucioles_core::{Color, Playfield, Vec2};
use lucioles_runtime::{Surface, Timer};

/// Full glow, also the fixed color in jitter mode
pub const BRIGHT: Color = Color::new(173.0 / 255.0, 1.0, 0.0, 1.0);
/// Darkest point of the pulse
pub const DARK: Color = Color::new(26.0 / 255.0, 36.0 / 255.0, 7.0 / 255.0, 1.0);

/// Speed in jitter mode, overriding the per-firefly cruising speed
pub const JITTER_SPEED: f32 = 100.0;
/// Arrival tolerance of a wandering target
pub const WANDER_TARGET_RADIUS: f32 = 16.0;

const RADIUS_RANGE: (f32, f32) = (4.0, 7.0);
const SPEED_RANGE: (f32, f32) = (10.0, 50.0);
const PULSE_PERIOD_RANGE: (f32, f32) = (1.0, 5.0);

/// The point a firefly steers toward and how close counts as arrived
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub position: Vec2,
    pub radius: f32,
}

impl Target {
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self { position, radius }
    }

    /// Random target anywhere on the playfield
    pub fn wander(rng: &mut SwarmRng, playfield: &Playfield) -> Self {
        Self::new(rng.point_in_playfield(playfield), WANDER_TARGET_RADIUS)
    }

    pub fn is_reached_from(&self, position: Vec2) -> bool {
        self.position.distance(position) <= self.radius
    }
}

#[derive(Debug, Clone)]
pub struct Firefly {
    position: Vec2,
    radius: f32,
    speed: f32,
    color: Color,
    jitter: bool,
    target: Target,
    pulse: Timer,
}

impl Firefly {
    /// Firefly with explicit kinematics and a one-second pulse
    pub fn new(position: Vec2, radius: f32, speed: f32, target: Target) -> Self {
        Self {
            position,
            radius,
            speed,
            color: BRIGHT,
            jitter: false,
            target,
            pulse: Timer::looping(1.0),
        }
    }

    /// Random firefly somewhere on the playfield. The pulse starts at a random
    /// phase so the swarm does not blink in unison.
    pub fn spawn(rng: &mut SwarmRng, playfield: &Playfield) -> Self {
        let position = rng.point_in_playfield(playfield);
        let radius = rng.range(RADIUS_RANGE.0, RADIUS_RANGE.1);
        let speed = rng.range(SPEED_RANGE.0, SPEED_RANGE.1);
        let target = Target::wander(rng, playfield);

        let period = rng.range(PULSE_PERIOD_RANGE.0, PULSE_PERIOD_RANGE.1);
        let mut pulse = Timer::looping(period);
        pulse.reset(rng.range(0.0, period));

        Self {
            pulse,
            ..Self::new(position, radius, speed, target)
        }
    }

    pub fn update(&mut self, dt: f32, rng: &mut SwarmRng, playfield: &Playfield) {
        self.color = if self.jitter {
            BRIGHT
        } else {
            BRIGHT.lerp(DARK, self.pulse.step(dt))
        };

        // No direction when sitting exactly on the target; stay put this tick
        if let Some(direction) = (self.target.position - self.position).try_normalize() {
            let speed = if self.jitter { JITTER_SPEED } else { self.speed };
            self.position += direction * speed * dt;
        }

        if self.target.is_reached_from(self.position) {
            self.target = Target::wander(rng, playfield);
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.circle_filled(self.position, self.radius, self.color);
    }

    pub fn set_jitter(&mut self, jitter: bool) {
        self.jitter = jitter;
    }

    /// Replace the current target
    pub fn retarget(&mut self, target: Target) {
        self.target = target;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_jittery(&self) -> bool {
        self.jitter
    }

    pub fn target(&self) -> Target {
        self.target
    }
}
