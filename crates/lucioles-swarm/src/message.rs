//! Fading on-screen message: waits, slides in, slides back out on a click

use lucioles_core::{Color, MessageSection, Playfield, Vec2};
use lucioles_runtime::{FontId, InputFrame, MouseButton, Surface, Timer};

/// Font resource name the player registers for the message
pub const MESSAGE_FONT: &str = "message";

/// The countdown before the reveal is not a state of its own: the message
/// sits at its start values in `FadeIn` until the countdown is exhausted.
/// A fully revealed message stays in `FadeIn` until dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageState {
    FadeIn,
    FadeOut,
}

/// Every option a `FadingMessage` recognizes
#[derive(Debug, Clone, PartialEq)]
pub struct MessageConfig {
    pub text: String,
    /// Seconds before the fade-in starts
    pub countdown: f32,
    pub fade_in: f32,
    pub fade_out: f32,
    pub start_position: Vec2,
    pub end_position: Vec2,
    pub start_color: Color,
    pub end_color: Color,
    pub font: FontId,
}

impl MessageConfig {
    /// Defaults: slide from above the top edge to 50px below it, fading from
    /// the background color to pink
    pub fn for_playfield(text: impl Into<String>, playfield: &Playfield, background: Color) -> Self {
        let x = playfield.width / 2.0;
        Self {
            text: text.into(),
            countdown: 3.0,
            fade_in: 2.0,
            fade_out: 2.0,
            start_position: Vec2::new(x, -50.0),
            end_position: Vec2::new(x, 50.0),
            start_color: background,
            end_color: Color::from_rgb8(255, 182, 193),
            font: FontId::Named(MESSAGE_FONT.into()),
        }
    }

    /// Apply a `[message]` config table on top of the playfield defaults
    pub fn from_section(section: &MessageSection, playfield: &Playfield, background: Color) -> Self {
        let mut config = Self::for_playfield(section.text.clone(), playfield, background);
        config.countdown = section.countdown;
        config.fade_in = section.fade_in;
        config.fade_out = section.fade_out;
        if let Some([x, y]) = section.start_position {
            config.start_position = Vec2::new(x, y);
        }
        if let Some([x, y]) = section.end_position {
            config.end_position = Vec2::new(x, y);
        }
        if let Some([r, g, b]) = section.start_color {
            config.start_color = Color::from_rgb8(r, g, b);
        }
        let [r, g, b] = section.end_color;
        config.end_color = Color::from_rgb8(r, g, b);
        config
    }
}

pub struct FadingMessage {
    text: String,
    font: FontId,
    state: MessageState,

    countdown: Timer,
    fade_in: Timer,
    fade_out: Timer,

    start_position: Vec2,
    end_position: Vec2,
    position: Vec2,

    start_color: Color,
    end_color: Color,
    color: Color,
}

impl FadingMessage {
    pub fn new(config: MessageConfig) -> Self {
        Self {
            text: config.text,
            font: config.font,
            state: MessageState::FadeIn,
            countdown: Timer::one_shot(config.countdown),
            fade_in: Timer::one_shot(config.fade_in),
            fade_out: Timer::one_shot(config.fade_out),
            start_position: config.start_position,
            end_position: config.end_position,
            position: config.start_position,
            start_color: config.start_color,
            end_color: config.end_color,
            color: config.start_color,
        }
    }

    pub fn update(&mut self, dt: f32, input: &InputFrame) {
        if input.mouse_pressed(MouseButton::Primary) && self.state != MessageState::FadeOut {
            tracing::debug!(from = ?self.state, "message dismissed");
            self.state = MessageState::FadeOut;
        }

        let waited = self.countdown.elapsed();
        self.countdown.step(dt);
        if self.countdown.is_running() {
            return;
        }
        // Only the part of the tick past the countdown animates
        let dt = (self.countdown.elapsed() - waited.max(self.countdown.duration())).max(0.0);

        match self.state {
            MessageState::FadeIn => {
                let t = self.fade_in.step(dt);
                self.position = self.start_position.lerp(self.end_position, t);
                self.color = self.start_color.lerp(self.end_color, t);
            }
            MessageState::FadeOut => {
                // Interpolate from the live values so a dismissal mid-fade
                // continues from wherever the message is
                let t = self.fade_out.step(dt);
                self.position = self.position.lerp(self.start_position, t);
                self.color = self.color.lerp(self.start_color, t);
            }
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.text(&self.text, self.position, self.color, &self.font);
    }

    pub fn state(&self) -> MessageState {
        self.state
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Fully faded back out
    pub fn is_finished(&self) -> bool {
        self.state == MessageState::FadeOut && self.fade_out.progress() >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucioles_runtime::{DrawCommand, DrawList, InputEvent};

    fn config(countdown: f32, fade_in: f32) -> MessageConfig {
        MessageConfig {
            countdown,
            fade_in,
            start_position: Vec2::new(400.0, -50.0),
            end_position: Vec2::new(400.0, 50.0),
            start_color: Color::BLACK,
            end_color: Color::WHITE,
            ..MessageConfig::for_playfield("hello", &Playfield::default(), Color::BLACK)
        }
    }

    fn idle() -> InputFrame {
        InputFrame::default()
    }

    fn click() -> InputFrame {
        InputFrame::default().with_event(InputEvent::MouseButtonDown(MouseButton::Primary))
    }

    #[test]
    fn holds_at_start_during_countdown() {
        let mut msg = FadingMessage::new(config(3.0, 2.0));
        msg.update(1.0, &idle());
        msg.update(1.0, &idle());
        assert_eq!(msg.state(), MessageState::FadeIn);
        assert_eq!(msg.position(), Vec2::new(400.0, -50.0));
        assert_eq!(msg.color(), Color::BLACK);
    }

    #[test]
    fn fade_in_starts_when_countdown_is_exhausted() {
        let mut msg = FadingMessage::new(config(3.0, 2.0));
        for _ in 0..3 {
            msg.update(1.0, &idle());
        }
        // Countdown sits exactly at its duration: revealed, but no fade-in
        // time has passed yet
        assert_eq!(msg.state(), MessageState::FadeIn);
        assert_eq!(msg.position(), Vec2::new(400.0, -50.0));
        assert_eq!(msg.color(), Color::BLACK);

        msg.update(1.0, &idle());
        assert_eq!(msg.state(), MessageState::FadeIn);
        assert!((msg.position().y - 0.0).abs() < 1e-4);
        assert!((msg.color().r - 0.5).abs() < 1e-4);
    }

    #[test]
    fn revealed_message_stays_in_fade_in() {
        let mut msg = FadingMessage::new(config(3.0, 2.0));
        for _ in 0..10 {
            msg.update(1.0, &idle());
        }
        assert_eq!(msg.state(), MessageState::FadeIn);
        assert_eq!(msg.position(), Vec2::new(400.0, 50.0));
        assert_eq!(msg.color(), Color::WHITE);
        assert!(!msg.is_finished());
    }

    #[test]
    fn tick_straddling_countdown_end_animates_the_overflow() {
        let mut msg = FadingMessage::new(config(3.0, 2.0));
        msg.update(2.5, &idle());
        assert_eq!(msg.position(), Vec2::new(400.0, -50.0));

        // 0.5s of countdown left, 0.5s of fade-in
        msg.update(1.0, &idle());
        assert!((msg.position().y - (-25.0)).abs() < 1e-3);
    }

    #[test]
    fn half_second_ticks_into_fade_in() {
        let mut msg = FadingMessage::new(config(3.0, 2.0));
        for _ in 0..6 {
            msg.update(0.5, &idle());
        }
        assert_eq!(msg.position(), Vec2::new(400.0, -50.0));
        msg.update(0.5, &idle());
        assert!((msg.position().y - (-25.0)).abs() < 1e-3);
        msg.update(0.5, &idle());
        assert!((msg.position().y - 0.0).abs() < 1e-3);
        assert_eq!(msg.state(), MessageState::FadeIn);
    }

    #[test]
    fn dismissal_mid_fade_in_is_continuous() {
        let mut msg = FadingMessage::new(config(1.0, 4.0));
        for _ in 0..3 {
            msg.update(1.0, &idle());
        }
        let pos = msg.position();
        let color = msg.color();
        assert_eq!(msg.state(), MessageState::FadeIn);
        assert!(pos.y > -50.0 && pos.y < 50.0);

        // Zero-length tick: fade-out starts exactly where the fade-in left off
        msg.update(0.0, &click());
        assert_eq!(msg.state(), MessageState::FadeOut);
        assert_eq!(msg.position(), pos);
        assert_eq!(msg.color(), color);

        // Next tick interpolates from that live value toward the start
        msg.update(0.5, &idle());
        let t = 0.5 / 2.0;
        let expected = pos.lerp(Vec2::new(400.0, -50.0), t);
        assert!((msg.position() - expected).length() < 1e-4);
        assert!(msg.position().y < pos.y);
    }

    #[test]
    fn fade_out_is_terminal_and_saturates() {
        let mut msg = FadingMessage::new(config(1.0, 1.0));
        msg.update(1.0, &idle());
        msg.update(1.0, &idle());
        assert_eq!(msg.position(), Vec2::new(400.0, 50.0));

        msg.update(1.0, &click());
        assert_eq!(msg.state(), MessageState::FadeOut);
        msg.update(1.0, &idle());
        assert!(msg.is_finished());
        assert_eq!(msg.position(), Vec2::new(400.0, -50.0));
        assert_eq!(msg.color(), Color::BLACK);

        msg.update(1.0, &click());
        assert_eq!(msg.state(), MessageState::FadeOut);
        assert_eq!(msg.position(), Vec2::new(400.0, -50.0));
    }

    #[test]
    fn dismissal_during_countdown_stays_hidden() {
        let mut msg = FadingMessage::new(config(3.0, 2.0));
        msg.update(1.0, &click());
        assert_eq!(msg.state(), MessageState::FadeOut);
        for _ in 0..5 {
            msg.update(1.0, &idle());
        }
        assert_eq!(msg.position(), Vec2::new(400.0, -50.0));
        assert_eq!(msg.color(), Color::BLACK);
    }

    #[test]
    fn draws_centered_text() {
        let msg = FadingMessage::new(config(3.0, 2.0));
        let mut list = DrawList::new();
        msg.draw(&mut list);
        match &list.commands()[0] {
            DrawCommand::Text {
                text,
                centered,
                font,
                ..
            } => {
                assert_eq!(text, "hello");
                assert!(*centered);
                assert_eq!(font, &FontId::Named(MESSAGE_FONT.into()));
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn section_overrides_defaults() {
        let section = MessageSection {
            start_position: Some([1.0, 2.0]),
            start_color: Some([255, 255, 255]),
            fade_out: 9.0,
            ..MessageSection::default()
        };
        let field = Playfield::new(1000.0, 500.0);
        let config = MessageConfig::from_section(&section, &field, Color::BLACK);
        assert_eq!(config.start_position, Vec2::new(1.0, 2.0));
        assert_eq!(config.end_position, Vec2::new(500.0, 50.0));
        assert_eq!(config.start_color, Color::WHITE);
        assert_eq!(config.fade_out, 9.0);
        assert_eq!(config.text, "click with your mouse");
    }
}
