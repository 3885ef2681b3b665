//! Color and playfield types

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// RGBA color, components in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Linear interpolation, `t` clamped to [0, 1]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Channels quantized to 8 bits (r, g, b, a)
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Channels as (r, g, b, a) floats
    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Rectangular area the swarm lives in, origin at the top-left corner
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_rgb8() {
        let c = Color::from_rgb8(255, 136, 68);
        assert!((c.r - 1.0).abs() < 1e-6);
        assert!((c.g - 0.533).abs() < 0.01);
        assert!((c.b - 0.267).abs() < 0.01);
        assert_eq!(c.to_array()[3], 1.0);
        assert_eq!(c.to_rgba8(), [255, 136, 68, 255]);
    }

    #[test]
    fn test_color_lerp_endpoints() {
        let bright = Color::from_rgb8(173, 255, 0);
        let dark = Color::from_rgb8(26, 36, 7);
        assert_eq!(bright.lerp(dark, 0.0), bright);
        let end = bright.lerp(dark, 1.0);
        for (a, b) in end.to_array().iter().zip(dark.to_array()) {
            assert!((a - b).abs() < 1e-6);
        }

        let mid = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert!((mid.a - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_color_lerp_clamps_progress() {
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 2.0), Color::WHITE);
        assert_eq!(Color::BLACK.lerp(Color::WHITE, -1.0), Color::BLACK);
    }

    #[test]
    fn test_rgba8_roundtrip_of_known_color() {
        let pink = Color::from_rgb8(255, 182, 193);
        assert_eq!(pink.to_rgba8(), [255, 182, 193, 255]);
    }

    #[test]
    fn test_playfield_contains() {
        let field = Playfield::new(800.0, 600.0);
        assert_eq!(field.center(), Vec2::new(400.0, 300.0));
        assert!(field.contains(Vec2::new(0.0, 600.0)));
        assert!(!field.contains(Vec2::new(-1.0, 10.0)));
        assert!(!field.contains(Vec2::new(10.0, 601.0)));
    }
}
