//! Time to screen-space geometry. Everything here is recomputed from the
//! clock each frame; nothing is carried over between frames.

use crate::body::{Body, Rgb};
use crate::math::{polar, swept_angle, Vec2};
use crate::nanotime::Nanotime;
use crate::system::{SolarSystem, Sun};
use serde::Serialize;

/// spin markers sit at this fraction of their body's radius
pub const MARKER_DISTANCE: f32 = 0.7;

/// ring radius as a multiple of the ringed body's radius
pub const RING_SCALE: f32 = 1.8;

pub fn angle_at(stamp: Nanotime, rate: f32) -> f32 {
    swept_angle(stamp.to_secs_f64(), rate)
}

/// displacement from the orbit center at `stamp`
pub fn orbital_offset(stamp: Nanotime, orbit_radius: f32, rate: f32) -> Vec2 {
    polar(orbit_radius, angle_at(stamp, rate))
}

pub fn orbital_position(stamp: Nanotime, center: Vec2, orbit_radius: f32, rate: f32) -> Vec2 {
    center + orbital_offset(stamp, orbit_radius, rate)
}

pub fn spin_marker(stamp: Nanotime, center: Vec2, radius: f32, rate: f32) -> Vec2 {
    center + polar(radius * MARKER_DISTANCE, angle_at(stamp, rate))
}

pub fn sun_marker(stamp: Nanotime, center: Vec2, sun: &Sun) -> Vec2 {
    spin_marker(stamp, center, sun.radius, sun.spin_speed)
}

impl Body {
    /// position when orbiting `center`
    pub fn position(&self, stamp: Nanotime, center: Vec2) -> Vec2 {
        orbital_position(stamp, center, self.orbit_radius, self.orbit_speed)
    }

    pub fn marker(&self, stamp: Nanotime, position: Vec2) -> Option<Vec2> {
        let rate = self.spin_speed?;
        Some(spin_marker(stamp, position, self.radius, rate))
    }

    pub fn ring_radius(&self) -> Option<f32> {
        self.has_ring.then(|| self.radius * RING_SCALE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyPose<'a> {
    pub name: &'a str,
    pub color: Rgb,
    pub radius: f32,
    pub center: Vec2,
    pub orbit_center: Vec2,
    pub orbit_radius: f32,
    pub marker: Option<Vec2>,
    pub ring_radius: Option<f32>,
    pub satellites: Vec<BodyPose<'a>>,
}

impl<'a> BodyPose<'a> {
    /// Poses `body` around `orbit_center`. Satellites are posed around the
    /// position just computed for `body`, so they always follow the parent's
    /// current location.
    pub fn new(body: &'a Body, stamp: Nanotime, orbit_center: Vec2) -> Self {
        let center = body.position(stamp, orbit_center);
        BodyPose {
            name: &body.name,
            color: body.color,
            radius: body.radius,
            center,
            orbit_center,
            orbit_radius: body.orbit_radius,
            marker: body.marker(stamp, center),
            ring_radius: body.ring_radius(),
            satellites: body
                .satellites
                .iter()
                .map(|s| BodyPose::new(s, stamp, center))
                .collect(),
        }
    }

    pub fn find(&self, name: &str) -> Option<&BodyPose<'a>> {
        if self.name == name {
            return Some(self);
        }
        self.satellites.iter().find_map(|s| s.find(name))
    }
}

/// Every body's geometry at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenePose<'a> {
    pub stamp: Nanotime,
    pub sun_center: Vec2,
    pub sun_marker: Vec2,
    pub bodies: Vec<BodyPose<'a>>,
}

impl<'a> ScenePose<'a> {
    pub fn find(&self, name: &str) -> Option<&BodyPose<'a>> {
        self.bodies.iter().find_map(|b| b.find(name))
    }
}

pub fn evaluate(system: &SolarSystem, stamp: Nanotime) -> ScenePose<'_> {
    let sun_center = system.center();
    ScenePose {
        stamp,
        sun_center,
        sun_marker: sun_marker(stamp, sun_center, &system.sun),
        bodies: system
            .bodies
            .iter()
            .map(|b| BodyPose::new(b, stamp, sun_center))
            .collect(),
    }
}
