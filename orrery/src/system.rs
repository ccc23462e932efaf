use crate::body::{Body, Rgb};
use crate::math::Vec2;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sun {
    pub radius: f32,
    pub color: Rgb,
    pub spin_speed: f32,
    pub marker_radius: f32,
    pub marker_color: Rgb,
}

impl Default for Sun {
    fn default() -> Self {
        Sun {
            radius: 34.0,
            color: Rgb(255, 165, 0),
            spin_speed: 0.6,
            marker_radius: 4.0,
            marker_color: Rgb(255, 50, 0),
        }
    }
}

/// Colors and sizes shared by every body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Rgb,
    pub orbit: Rgb,
    pub marker: Rgb,
    pub marker_radius: f32,
    pub ring: Rgb,
    pub label: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Rgb::BLACK,
            orbit: Rgb(60, 60, 60),
            marker: Rgb::WHITE,
            marker_radius: 2.0,
            ring: Rgb(200, 180, 140),
            label: Rgb(250, 250, 250),
        }
    }
}

/// canvas size in pixels; scenes cannot change it
pub const WIDTH: f32 = 800.0;
pub const HEIGHT: f32 = 600.0;

/// The body registry plus the fixed scene it lives in. Screen coordinates:
/// origin at the top left, y pointing down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolarSystem {
    #[serde(default)]
    pub sun: Sun,
    #[serde(default)]
    pub palette: Palette,
    pub bodies: Vec<Body>,
}

impl Default for SolarSystem {
    fn default() -> Self {
        let planet = |name: &str, color: Rgb, radius: f32, orbit: f32, speed: f32, spin: f32| {
            Body::new(name, color, radius, orbit, speed).with_spin(spin)
        };

        let moon = Body::new("Moon", Rgb(192, 192, 192), 3.0, 20.0, 0.09);

        SolarSystem {
            sun: Sun::default(),
            palette: Palette::default(),
            bodies: vec![
                planet("Mercury", Rgb(180, 180, 180), 4.0, 60.0, 0.04, 0.5),
                planet("Venus", Rgb(220, 180, 140), 6.0, 100.0, 0.03, 0.3),
                planet("Earth", Rgb(0, 120, 255), 9.0, 140.0, 0.02, 1.0).with_satellite(moon),
                planet("Mars", Rgb(200, 80, 40), 6.0, 180.0, 0.018, 0.8),
                planet("Jupiter", Rgb(210, 160, 110), 18.0, 230.0, 0.01, 1.5),
                planet("Saturn", Rgb(210, 200, 150), 16.0, 270.0, 0.008, 1.2).with_ring(),
                planet("Uranus", Rgb(150, 210, 230), 12.0, 310.0, 0.006, 0.9),
                planet("Neptune", Rgb(50, 90, 200), 12.0, 350.0, 0.005, 0.9),
            ],
        }
    }
}

impl SolarSystem {
    /// where the sun sits, and the point every planet orbits
    pub fn center(&self) -> Vec2 {
        Vec2::new(WIDTH, HEIGHT) / 2.0
    }

    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find_map(|b| b.find(name))
    }

    pub fn validate(&self) -> Result<(), String> {
        let radii = [
            ("sun.radius", self.sun.radius),
            ("sun.marker_radius", self.sun.marker_radius),
            ("palette.marker_radius", self.palette.marker_radius),
        ];
        for (name, r) in radii {
            if !r.is_finite() || r < 0.0 {
                return Err(format!("{name} must be finite and non-negative, got {r}"));
            }
        }
        if !self.sun.spin_speed.is_finite() {
            return Err("sun.spin_speed must be finite".into());
        }
        self.bodies.iter().try_for_each(Body::validate)
    }
}

pub fn load_system_from_file(path: &Path) -> Result<SolarSystem, Box<dyn Error>> {
    let s = std::fs::read_to_string(path)?;
    let system: SolarSystem = serde_yaml::from_str(&s)?;
    system.validate()?;
    Ok(system)
}

pub fn write_system_to_file(path: &Path, system: &SolarSystem) -> Result<(), Box<dyn Error>> {
    let s = serde_yaml::to_string(system)?;
    Ok(std::fs::write(path, s)?)
}
