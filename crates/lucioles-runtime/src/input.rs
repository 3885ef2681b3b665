//! Input collection and the per-tick input snapshot

use crate::event::{InputEvent, MouseButton};
use lucioles_core::Vec2;
use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Collects window input between ticks
pub struct InputState {
    /// Discrete events since the last tick, in arrival order
    events: Vec<InputEvent>,
    /// Keys currently held down (suppresses key repeat)
    keys_down: HashSet<KeyCode>,
    /// Mouse buttons currently held down
    mouse_buttons_down: HashSet<MouseButton>,
    /// Current pointer position in logical window pixels
    pub pointer_position: Vec2,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            keys_down: HashSet::new(),
            mouse_buttons_down: HashSet::new(),
            pointer_position: Vec2::ZERO,
        }
    }

    /// Process a key press event
    pub fn process_key_down(&mut self, key: KeyCode) {
        if self.keys_down.insert(key) {
            self.events.push(InputEvent::KeyDown(key));
        }
    }

    /// Process a key release event
    pub fn process_key_up(&mut self, key: KeyCode) {
        self.keys_down.remove(&key);
    }

    /// Process mouse button press
    pub fn process_mouse_button_down(&mut self, button: MouseButton) {
        if self.mouse_buttons_down.insert(button) {
            self.events.push(InputEvent::MouseButtonDown(button));
        }
    }

    /// Process mouse button release
    pub fn process_mouse_button_up(&mut self, button: MouseButton) {
        self.mouse_buttons_down.remove(&button);
    }

    /// Process pointer movement
    pub fn process_mouse_move(&mut self, x: f32, y: f32) {
        self.pointer_position = Vec2::new(x, y);
    }

    /// Process a wheel scroll of `steps` notches
    pub fn process_wheel(&mut self, steps: f32) {
        if steps != 0.0 {
            self.events.push(InputEvent::Wheel(steps));
        }
    }

    /// Ask the loop to stop after the current tick
    pub fn request_quit(&mut self) {
        self.events.push(InputEvent::Quit);
    }

    /// Is a mouse button currently held?
    pub fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons_down.contains(&button)
    }

    /// Capture everything since the last tick into an immutable snapshot
    pub fn begin_tick(&mut self) -> InputFrame {
        InputFrame {
            events: std::mem::take(&mut self.events),
            primary_held: self.is_mouse_button_down(MouseButton::Primary),
            pointer_position: self.pointer_position,
        }
    }
}

/// Input for one tick. Built once and shared read-only by every component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputFrame {
    events: Vec<InputEvent>,
    primary_held: bool,
    pointer_position: Vec2,
}

impl InputFrame {
    pub fn new(events: Vec<InputEvent>, primary_held: bool, pointer_position: Vec2) -> Self {
        Self {
            events,
            primary_held,
            pointer_position,
        }
    }

    /// Frame with no events and the pointer at `pointer_position`
    pub fn idle(pointer_position: Vec2) -> Self {
        Self::new(Vec::new(), false, pointer_position)
    }

    pub fn with_event(mut self, event: InputEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn with_primary_held(mut self, held: bool) -> Self {
        self.primary_held = held;
        self
    }

    pub fn quit_requested(&self) -> bool {
        self.events.iter().any(|e| matches!(e, InputEvent::Quit))
    }

    /// Was `key` pressed during this tick?
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, InputEvent::KeyDown(k) if *k == key))
    }

    /// Was `button` pressed during this tick?
    pub fn mouse_pressed(&self, button: MouseButton) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, InputEvent::MouseButtonDown(b) if *b == button))
    }

    /// Is the primary button held at the start of this tick?
    pub fn primary_held(&self) -> bool {
        self.primary_held
    }

    pub fn pointer_position(&self) -> Vec2 {
        self.pointer_position
    }

    /// Delta of the first wheel event this tick, if any
    pub fn wheel_delta(&self) -> Option<f32> {
        self.events.iter().find_map(|e| match e {
            InputEvent::Wheel(delta) => Some(*delta),
            _ => None,
        })
    }

    pub fn events(&self) -> &[InputEvent] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_press_recorded_once() {
        let mut input = InputState::new();

        input.process_key_down(KeyCode::KeyR);
        // OS key repeat while held
        input.process_key_down(KeyCode::KeyR);

        let frame = input.begin_tick();
        assert!(frame.key_pressed(KeyCode::KeyR));
        assert_eq!(frame.events().len(), 1);

        // Snapshot drained the bus
        let frame = input.begin_tick();
        assert!(!frame.key_pressed(KeyCode::KeyR));

        input.process_key_up(KeyCode::KeyR);
        input.process_key_down(KeyCode::KeyR);
        assert!(input.begin_tick().key_pressed(KeyCode::KeyR));
    }

    #[test]
    fn test_held_state_persists_across_ticks() {
        let mut input = InputState::new();
        input.process_mouse_button_down(MouseButton::Primary);

        let first = input.begin_tick();
        assert!(first.primary_held());
        assert!(first.mouse_pressed(MouseButton::Primary));

        let second = input.begin_tick();
        assert!(second.primary_held());
        assert!(!second.mouse_pressed(MouseButton::Primary));

        input.process_mouse_button_up(MouseButton::Primary);
        assert!(!input.begin_tick().primary_held());
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_input() {
        let mut input = InputState::new();
        input.process_mouse_move(10.0, 20.0);
        let frame = input.begin_tick();

        input.process_mouse_move(30.0, 40.0);
        input.request_quit();

        assert_eq!(frame.pointer_position(), Vec2::new(10.0, 20.0));
        assert!(!frame.quit_requested());
        assert!(input.begin_tick().quit_requested());
    }

    #[test]
    fn test_first_wheel_event_wins() {
        let mut input = InputState::new();
        input.process_wheel(0.0);
        input.process_wheel(-1.0);
        input.process_wheel(3.0);

        let frame = input.begin_tick();
        assert_eq!(frame.wheel_delta(), Some(-1.0));
        assert_eq!(input.begin_tick().wheel_delta(), None);
    }

    #[test]
    fn test_events_keep_arrival_order() {
        let mut input = InputState::new();
        input.process_key_down(KeyCode::KeyR);
        input.process_wheel(1.0);
        input.process_mouse_button_down(MouseButton::Primary);
        input.request_quit();

        let frame = input.begin_tick();
        assert_eq!(
            frame.events(),
            &[
                InputEvent::KeyDown(KeyCode::KeyR),
                InputEvent::Wheel(1.0),
                InputEvent::MouseButtonDown(MouseButton::Primary),
                InputEvent::Quit,
            ]
        );
        assert!(input.begin_tick().events().is_empty());
    }

    #[test]
    fn test_frame_builders() {
        let frame = InputFrame::idle(Vec2::new(1.0, 2.0))
            .with_primary_held(true)
            .with_event(InputEvent::MouseButtonDown(MouseButton::Secondary));
        assert!(frame.primary_held());
        assert!(frame.mouse_pressed(MouseButton::Secondary));
        assert!(!frame.mouse_pressed(MouseButton::Primary));
        assert!(!frame.quit_requested());
    }
}
