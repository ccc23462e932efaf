use serde::{Deserialize, Serialize};

/// 8-bit RGB triple, serialized as `[r, g, b]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

/// A planet or moon. Orbits are circles around whatever the body is
/// attached to: the sun for registry entries, the parent for satellites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub name: String,
    pub color: Rgb,
    /// size of the drawn disk, pixels
    pub radius: f32,
    pub orbit_radius: f32,
    /// radians per second
    pub orbit_speed: f32,
    /// radians per second; bodies without one draw no spin marker
    #[serde(default)]
    pub spin_speed: Option<f32>,
    #[serde(default)]
    pub has_ring: bool,
    #[serde(default)]
    pub satellites: Vec<Body>,
}

impl Body {
    pub fn new(
        name: impl Into<String>,
        color: Rgb,
        radius: f32,
        orbit_radius: f32,
        orbit_speed: f32,
    ) -> Self {
        Body {
            name: name.into(),
            color,
            radius,
            orbit_radius,
            orbit_speed,
            spin_speed: None,
            has_ring: false,
            satellites: Vec::new(),
        }
    }

    pub fn with_spin(mut self, spin_speed: f32) -> Self {
        self.spin_speed = Some(spin_speed);
        self
    }

    pub fn with_ring(mut self) -> Self {
        self.has_ring = true;
        self
    }

    pub fn with_satellite(mut self, satellite: Body) -> Self {
        self.satellites.push(satellite);
        self
    }

    /// depth-first search through this body and its satellites
    pub fn find(&self, name: &str) -> Option<&Body> {
        if self.name == name {
            return Some(self);
        }
        self.satellites.iter().find_map(|s| s.find(name))
    }

    pub fn validate(&self) -> Result<(), String> {
        let finite = [self.radius, self.orbit_radius, self.orbit_speed]
            .into_iter()
            .chain(self.spin_speed)
            .all(f32::is_finite);
        if !finite {
            return Err(format!("{}: parameters must be finite", self.name));
        }
        if self.radius < 0.0 || self.orbit_radius < 0.0 {
            return Err(format!("{}: radii must not be negative", self.name));
        }
        self.satellites.iter().try_for_each(Body::validate)
    }
}
