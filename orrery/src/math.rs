pub use glam::f32::Vec2;

pub const PI: f32 = std::f32::consts::PI;

/// Angle swept after `secs` seconds at `rate` radians per second, wrapped
/// into [0, 2pi). The product is formed in f64 so long sessions keep their
/// precision before trig is applied.
pub fn swept_angle(secs: f64, rate: f32) -> f32 {
    let tau = std::f64::consts::TAU;
    let a = (secs * rate as f64).rem_euclid(tau) as f32;
    if a >= std::f32::consts::TAU {
        0.0
    } else {
        a
    }
}

/// point at `radius` along `angle`, measured from +x towards +y
pub fn polar(radius: f32, angle: f32) -> Vec2 {
    Vec2::from_angle(angle) * radius
}
