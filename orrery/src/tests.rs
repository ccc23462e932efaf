use crate::prelude::*;
use crate::transforms::*;
use approx::assert_relative_eq;

const TAU: f64 = std::f64::consts::TAU;

fn stamps() -> Vec<Nanotime> {
    [0.0, 0.016, 1.0, 13.37, 157.08, 999.9, 86400.0]
        .into_iter()
        .map(Nanotime::secs_f64)
        .collect()
}

#[test]
fn everything_starts_on_the_x_axis() {
    let system = SolarSystem::default();
    let pose = evaluate(&system, Nanotime::zero());
    let sun = system.center();
    for (body, p) in system.bodies.iter().zip(&pose.bodies) {
        assert_eq!(p.center, sun + Vec2::new(body.orbit_radius, 0.0));
    }
}

#[test]
fn orbits_are_periodic() {
    let system = SolarSystem::default();
    let center = system.center();
    for body in &system.bodies {
        let period = TAU / body.orbit_speed as f64;
        for t in stamps() {
            let later = t + Nanotime::secs_f64(period);
            let a = body.position(t, center);
            let b = body.position(later, center);
            assert_relative_eq!(a.x, b.x, epsilon = 1E-2);
            assert_relative_eq!(a.y, b.y, epsilon = 1E-2);
        }
    }
}

#[test]
fn moon_composes_with_parent() {
    let system = SolarSystem::default();
    let earth = system.body("Earth").unwrap();
    let moon = system.body("Moon").unwrap();
    for t in stamps() {
        let planet = orbital_position(t, system.center(), earth.orbit_radius, earth.orbit_speed);
        let offset = orbital_offset(t, moon.orbit_radius, moon.orbit_speed);
        let pose = evaluate(&system, t);
        let m = pose.find("Moon").unwrap().center;
        assert_relative_eq!(m.x, planet.x + offset.x, epsilon = 1E-4);
        assert_relative_eq!(m.y, planet.y + offset.y, epsilon = 1E-4);
    }
}

#[test]
fn markers_ride_at_seven_tenths() {
    let system = SolarSystem::default();
    for t in stamps() {
        let pose = evaluate(&system, t);
        for p in &pose.bodies {
            let m = p.marker.unwrap();
            assert_relative_eq!(m.distance(p.center), 0.7 * p.radius, epsilon = 1E-4);
        }
        let d = pose.sun_marker.distance(pose.sun_center);
        assert_relative_eq!(d, 0.7 * system.sun.radius, epsilon = 1E-4);
    }
}

#[test]
fn drawing_leaves_registry_untouched() {
    let system = SolarSystem::default();
    let snapshot = system.clone();
    let mut clock = Clock::new();
    for i in 0..500 {
        clock.advance(Nanotime::millis(7 + i % 40));
        let mut list = DisplayList::new();
        draw_scene(&system, clock.elapsed(), &mut list);
        assert!(!list.is_empty());
    }
    assert_eq!(system, snapshot);
}

#[test]
fn earth_half_orbit() {
    let system = SolarSystem::default();
    let t = Nanotime::secs_f64(157.08);
    let earth = evaluate(&system, t).find("Earth").unwrap().center;
    assert_relative_eq!(earth.x, 260.0, epsilon = 1E-2);
    assert_relative_eq!(earth.y, 300.0, epsilon = 1E-2);
}

#[test]
fn long_sessions_stay_precise() {
    // a year of 60 Hz frames, checked against the closed form in f64
    let system = SolarSystem::default();
    let mut clock = Clock::new();
    let dt = Nanotime::secs_f64(1.0 / 60.0);
    let frames = 60 * 60 * 24 * 365u64;
    clock.advance(Nanotime::nanos(dt.inner() * frames as i64));

    let secs = clock.elapsed().inner() as f64 / 1E9;
    let (cx, cy) = (400.0f64, 300.0f64);
    let pose = evaluate(&system, clock.elapsed());

    for (body, p) in system.bodies.iter().zip(&pose.bodies) {
        let angle = (secs * body.orbit_speed as f64).rem_euclid(TAU);
        let x = cx + body.orbit_radius as f64 * angle.cos();
        let y = cy + body.orbit_radius as f64 * angle.sin();
        assert_relative_eq!(p.center.x as f64, x, epsilon = 1E-3);
        assert_relative_eq!(p.center.y as f64, y, epsilon = 1E-3);

        let spin = (secs * body.spin_speed.unwrap() as f64).rem_euclid(TAU);
        let d = 0.7 * body.radius as f64;
        let m = p.marker.unwrap();
        assert_relative_eq!(m.x as f64, x + d * spin.cos(), epsilon = 1E-3);
        assert_relative_eq!(m.y as f64, y + d * spin.sin(), epsilon = 1E-3);
    }
}

#[test]
fn clock_and_transforms_agree() {
    let clock = Clock::at(Nanotime::secs(12));
    assert_eq!(clock.angle(0.02), angle_at(clock.elapsed(), 0.02));
}
