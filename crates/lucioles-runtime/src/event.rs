//! Discrete input events collected between ticks

use winit::keyboard::KeyCode;

/// Mouse buttons the simulation distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
}

impl MouseButton {
    /// Map a winit button; extra buttons are ignored
    pub fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        match button {
            winit::event::MouseButton::Left => Some(Self::Primary),
            winit::event::MouseButton::Right => Some(Self::Secondary),
            winit::event::MouseButton::Middle => Some(Self::Middle),
            _ => None,
        }
    }
}

/// One discrete event, in arrival order
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Window close or other shutdown request
    Quit,
    KeyDown(KeyCode),
    MouseButtonDown(MouseButton),
    /// Signed wheel steps, positive = away from the user
    Wheel(f32),
}
