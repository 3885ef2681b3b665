//! Lantern: pointer-bound area that scatters nearby fireflies

use crate::firefly::{Firefly, Target};
use crate::rand::SwarmRng;
use lucioles_core::{Color, Vec2};
use lucioles_runtime::{CuePlayer, InputFrame, Surface, Timer};

pub const MIN_RADIUS: f32 = 20.0;
pub const MAX_RADIUS: f32 = 150.0;
pub const DEFAULT_RADIUS: f32 = 50.0;
/// Radius change per wheel notch
pub const RADIUS_STEP: f32 = 5.0;
/// How long the area stays drawn after a release or a resize
pub const AFTERGLOW: f32 = 0.5;

/// Cue played while at least one firefly is inside the lantern
pub const PROXIMITY_CUE: &str = "firefly";

pub struct Lantern {
    position: Vec2,
    radius: f32,
    visible: bool,
    color: Color,
    afterglow: Timer,
}

impl Default for Lantern {
    fn default() -> Self {
        Self::new()
    }
}

impl Lantern {
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            radius: DEFAULT_RADIUS,
            visible: false,
            color: Color::new(236.0 / 255.0, 100.0 / 255.0, 75.0 / 255.0, 1.0),
            afterglow: Timer::one_shot(AFTERGLOW),
        }
    }

    /// Follow the pointer, resize on wheel, and flag every firefly inside the
    /// area while the primary button is held. Returns how many fireflies are
    /// jittery this tick.
    pub fn update(
        &mut self,
        dt: f32,
        input: &InputFrame,
        fireflies: &mut [Firefly],
        rng: &mut SwarmRng,
        cues: &mut dyn CuePlayer,
    ) -> usize {
        let held = input.primary_held();
        self.position = input.pointer_position();
        self.visible = held || self.afterglow.is_running();

        if self.afterglow.is_running() {
            self.afterglow.step(dt);
        } else {
            self.afterglow.reset_to_zero();
        }

        if let Some(steps) = input.wheel_delta() {
            self.afterglow.reset_to_zero();
            self.afterglow.step(dt);
            self.set_radius(self.radius + RADIUS_STEP * steps);
        }

        let mut jittery = 0;
        for firefly in fireflies.iter_mut() {
            let inside = held && self.position.distance(firefly.position()) <= self.radius;
            firefly.set_jitter(inside);

            if inside {
                let position = rng.point_around(self.position, self.radius);
                let radius = rng.range(MIN_RADIUS, MAX_RADIUS);
                firefly.retarget(Target::new(position, radius));
                jittery += 1;
            }
        }

        if jittery > 0 {
            cues.play(PROXIMITY_CUE);
        } else {
            cues.stop(PROXIMITY_CUE);
        }

        jittery
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        if self.visible {
            surface.circle_filled(self.position, self.radius, self.color);
        }
    }

    /// Set the radius, clamped to [MIN_RADIUS, MAX_RADIUS]
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.clamp(MIN_RADIUS, MAX_RADIUS);
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
