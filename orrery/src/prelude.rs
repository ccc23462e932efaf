pub use crate::body::{Body, Rgb};
pub use crate::clock::Clock;
pub use crate::math::{polar, swept_angle, Vec2, PI};
pub use crate::nanotime::Nanotime;
pub use crate::render::{draw_pose, draw_scene, DisplayList, DrawCommand, Painter};
pub use crate::system::{
    load_system_from_file, write_system_to_file, Palette, SolarSystem, Sun, HEIGHT, WIDTH,
};
pub use crate::transforms::{evaluate, BodyPose, ScenePose};
