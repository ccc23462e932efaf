use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;
use orrery::prelude::{Painter, Rgb};

/// depth between consecutive primitives, so each draw lands above the last
const Z_STEP: f32 = 0.01;

#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    /// world position of the label's top-left corner
    pub pos: Vec2,
    pub z: f32,
    pub color: Color,
}

pub fn to_color(c: Rgb) -> Color {
    Color::srgb_u8(c.0, c.1, c.2)
}

/// Maps screen pixels (origin top left, y down) to world units for a
/// camera centered on the window (origin in the middle, y up).
pub fn screen_to_world(p: orrery::math::Vec2, screen: Vec2) -> Vec2 {
    Vec2::new(p.x - screen.x / 2.0, screen.y / 2.0 - p.y)
}

pub struct Canvas<'w, 's> {
    pub painter: ShapePainter<'w, 's>,
    pub text_labels: Vec<TextLabel>,
    pub clear_color: Option<Color>,
    screen: Vec2,
    line_thickness: f32,
    draws: u32,
}

impl<'w, 's> Canvas<'w, 's> {
    pub fn new(mut painter: ShapePainter<'w, 's>, screen: Vec2, line_thickness: f32) -> Self {
        painter.reset();
        Self {
            painter,
            text_labels: Vec::new(),
            clear_color: None,
            screen,
            line_thickness,
            draws: 0,
        }
    }

    fn place(&mut self, p: orrery::math::Vec2) -> Vec3 {
        self.draws += 1;
        screen_to_world(p, self.screen).extend(self.draws as f32 * Z_STEP)
    }
}

impl Painter for Canvas<'_, '_> {
    fn clear(&mut self, color: Rgb) {
        self.clear_color = Some(to_color(color));
    }

    fn filled_circle(&mut self, center: orrery::math::Vec2, radius: f32, color: Rgb) {
        let pos = self.place(center);
        self.painter.set_translation(pos);
        self.painter.color = to_color(color);
        self.painter.hollow = false;
        self.painter.circle(radius);
    }

    fn circle(&mut self, center: orrery::math::Vec2, radius: f32, color: Rgb) {
        let pos = self.place(center);
        self.painter.set_translation(pos);
        self.painter.color = to_color(color);
        self.painter.hollow = true;
        self.painter.thickness = self.line_thickness;
        self.painter.circle(radius);
    }

    fn text(&mut self, text: &str, pos: orrery::math::Vec2, color: Rgb) {
        let p = self.place(pos);
        self.text_labels.push(TextLabel {
            text: text.to_string(),
            pos: p.truncate(),
            z: p.z,
            color: to_color(color),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_corners() {
        let screen = Vec2::new(800.0, 600.0);
        let c = |x, y| screen_to_world(orrery::math::Vec2::new(x, y), screen);
        assert_eq!(c(400.0, 300.0), Vec2::ZERO);
        assert_eq!(c(0.0, 0.0), Vec2::new(-400.0, 300.0));
        assert_eq!(c(800.0, 600.0), Vec2::new(400.0, -300.0));
        // one planet radius below the sun on screen is below it in the world
        assert_eq!(c(400.0, 310.0), Vec2::new(0.0, -10.0));
    }

    #[test]
    fn colors() {
        assert_eq!(to_color(Rgb(255, 165, 0)), Color::srgb_u8(255, 165, 0));
    }
}
