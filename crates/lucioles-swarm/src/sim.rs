//! Tick driver tying the swarm, the lantern and the message together

use crate::firefly::Firefly;
use crate::lantern::Lantern;
use crate::message::{FadingMessage, MessageConfig};
use crate::rand::SwarmRng;
use lucioles_core::{Color, LuciolesConfig, Playfield, Vec2};
use lucioles_runtime::{CuePlayer, FontId, InputFrame, KeyCode, Surface};

const FPS_POSITION: Vec2 = Vec2::new(10.0, 5.0);

/// What the outer loop should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub struct Simulation {
    playfield: Playfield,
    background: Color,
    rng: SwarmRng,
    fireflies: Vec<Firefly>,
    lantern: Lantern,
    message: FadingMessage,
    show_fps: bool,
    ticks: u64,
}

impl Simulation {
    pub fn new(config: &LuciolesConfig, mut rng: SwarmRng) -> Self {
        let playfield = config.playfield();
        let background = config.background();

        let fireflies: Vec<Firefly> = (0..config.simulation.fireflies)
            .map(|_| Firefly::spawn(&mut rng, &playfield))
            .collect();
        let message = FadingMessage::new(MessageConfig::from_section(
            &config.message,
            &playfield,
            background,
        ));

        tracing::info!(
            fireflies = fireflies.len(),
            width = playfield.width,
            height = playfield.height,
            "simulation ready"
        );

        Self {
            playfield,
            background,
            rng,
            fireflies,
            lantern: Lantern::new(),
            message,
            show_fps: config.simulation.show_fps,
            ticks: 0,
        }
    }

    /// Run one tick. The message goes first, then the lantern hands its
    /// overrides to the fireflies, then every firefly moves.
    pub fn update(&mut self, input: &InputFrame, dt: f32, cues: &mut dyn CuePlayer) -> LoopControl {
        self.ticks += 1;

        self.message.update(dt, input);
        self.lantern
            .update(dt, input, &mut self.fireflies, &mut self.rng, cues);
        for firefly in &mut self.fireflies {
            firefly.update(dt, &mut self.rng, &self.playfield);
        }

        if input.key_pressed(KeyCode::KeyR) {
            self.show_fps = !self.show_fps;
            tracing::debug!(show_fps = self.show_fps, "fps overlay toggled");
        }

        if input.quit_requested() || input.key_pressed(KeyCode::Escape) {
            tracing::info!(ticks = self.ticks, "quit requested");
            return LoopControl::Exit;
        }
        LoopControl::Continue
    }

    pub fn draw(&self, surface: &mut dyn Surface, fps: f32) {
        surface.fill(self.background);
        self.message.draw(surface);
        self.lantern.draw(surface);
        for firefly in &self.fireflies {
            firefly.draw(surface);
        }

        if self.show_fps {
            surface.text_at(
                &format!("{fps:.0} FPS"),
                FPS_POSITION,
                Color::from_rgb8(200, 200, 200),
                &FontId::Default,
            );
        }
    }

    pub fn fireflies(&self) -> &[Firefly] {
        &self.fireflies
    }

    pub fn fireflies_mut(&mut self) -> &mut [Firefly] {
        &mut self.fireflies
    }

    pub fn lantern(&self) -> &Lantern {
        &self.lantern
    }

    pub fn message(&self) -> &FadingMessage {
        &self.message
    }

    pub fn playfield(&self) -> Playfield {
        self.playfield
    }

    pub fn show_fps(&self) -> bool {
        self.show_fps
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }
}
