//! Drawing collaborator and a recorded draw list

use lucioles_core::{Color, Vec2};

/// Named font resource a text primitive is drawn with
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FontId {
    /// Small UI font (FPS readout, fallback)
    Default,
    /// A font registered by name at startup
    Named(String),
}

/// Anything the simulation can draw onto
pub trait Surface {
    /// Paint the whole surface
    fn fill(&mut self, color: Color);

    fn circle_filled(&mut self, center: Vec2, radius: f32, color: Color);

    /// Draw `text` centered on `center`
    fn text(&mut self, text: &str, center: Vec2, color: Color, font: &FontId);

    /// Draw `text` with its top-left corner at `origin`
    fn text_at(&mut self, text: &str, origin: Vec2, color: Color, font: &FontId);
}

/// A single recorded primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill(Color),
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Text {
        text: String,
        position: Vec2,
        centered: bool,
        color: Color,
        font: FontId,
    },
}

/// Records primitives in call order so a backend can present them later
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }
}

impl Surface for DrawList {
    fn fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn circle_filled(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn text(&mut self, text: &str, center: Vec2, color: Color, font: &FontId) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            position: center,
            centered: true,
            color,
            font: font.clone(),
        });
    }

    fn text_at(&mut self, text: &str, origin: Vec2, color: Color, font: &FontId) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            position: origin,
            centered: false,
            color,
            font: font.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut list = DrawList::new();
        list.fill(Color::BLACK);
        list.circle_filled(Vec2::new(1.0, 2.0), 3.0, Color::WHITE);
        list.text("hi", Vec2::ZERO, Color::WHITE, &FontId::Default);

        assert_eq!(list.len(), 3);
        assert_eq!(list.commands()[0], DrawCommand::Fill(Color::BLACK));
        assert_eq!(list.circle_count(), 1);
        assert!(matches!(
            &list.commands()[2],
            DrawCommand::Text { text, centered: true, .. } if text == "hi"
        ));

        list.clear();
        assert!(list.is_empty());
    }
}
