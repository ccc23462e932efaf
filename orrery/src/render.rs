use crate::body::Rgb;
use crate::math::Vec2;
use crate::nanotime::Nanotime;
use crate::system::{Palette, SolarSystem};
use crate::transforms::{evaluate, BodyPose, ScenePose};
use serde::Serialize;

/// gap between a body's disk and its label
pub const LABEL_OFFSET: f32 = 6.0;

/// Drawing capability supplied by a rendering backend. Coordinates are
/// screen pixels, y pointing down.
pub trait Painter {
    fn clear(&mut self, color: Rgb);

    fn filled_circle(&mut self, center: Vec2, radius: f32, color: Rgb);

    /// one pixel wide outline
    fn circle(&mut self, center: Vec2, radius: f32, color: Rgb);

    /// `pos` is the top-left corner of the rendered text
    fn text(&mut self, text: &str, pos: Vec2, color: Rgb);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear {
        color: Rgb,
    },
    FilledCircle {
        center: Vec2,
        radius: f32,
        color: Rgb,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgb,
    },
    Text {
        text: String,
        pos: Vec2,
        color: Rgb,
    },
}

/// Records draw calls instead of rasterizing them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DisplayList(pub Vec<DrawCommand>);

impl DisplayList {
    pub fn new() -> Self {
        DisplayList::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Painter for DisplayList {
    fn clear(&mut self, color: Rgb) {
        self.0.push(DrawCommand::Clear { color });
    }

    fn filled_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.0.push(DrawCommand::FilledCircle {
            center,
            radius,
            color,
        });
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.0.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn text(&mut self, text: &str, pos: Vec2, color: Rgb) {
        self.0.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            color,
        });
    }
}

/// up and to the right of the body's disk
pub fn label_position(pose: &BodyPose) -> Vec2 {
    let d = pose.radius + LABEL_OFFSET;
    pose.center + Vec2::new(d, -d)
}

pub fn draw_scene<P: Painter + ?Sized>(system: &SolarSystem, stamp: Nanotime, painter: &mut P) {
    let pose = evaluate(system, stamp);
    draw_pose(system, &pose, painter);
}

/// Paints a precomputed pose. Bodies go down in registry order, so later
/// bodies overlay earlier ones.
pub fn draw_pose<P: Painter + ?Sized>(system: &SolarSystem, pose: &ScenePose, painter: &mut P) {
    let palette = &system.palette;
    let sun = &system.sun;

    painter.clear(palette.background);
    painter.filled_circle(pose.sun_center, sun.radius, sun.color);
    painter.filled_circle(pose.sun_marker, sun.marker_radius, sun.marker_color);

    for body in &pose.bodies {
        draw_body(body, palette, painter);
        painter.text(body.name, label_position(body), palette.label);
    }
}

fn draw_body<P: Painter + ?Sized>(pose: &BodyPose, palette: &Palette, painter: &mut P) {
    painter.circle(pose.orbit_center, pose.orbit_radius, palette.orbit);
    painter.filled_circle(pose.center, pose.radius, pose.color);
    if let Some(m) = pose.marker {
        painter.filled_circle(m, palette.marker_radius, palette.marker);
    }
    if let Some(r) = pose.ring_radius {
        painter.circle(pose.center, r, palette.ring);
    }
    for s in &pose.satellites {
        draw_body(s, palette, painter);
    }
}
