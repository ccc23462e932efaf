use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use orrery::math::swept_angle;
use orrery::nanotime::Nanotime;
use orrery::render::{draw_scene, DisplayList};
use orrery::system::SolarSystem;
use orrery::transforms::evaluate;

fn criterion_benchmark(c: &mut Criterion) {
    let system = SolarSystem::default();

    c.bench_function("evaluate", |b| {
        b.iter(|| {
            let t = black_box(Nanotime::secs_f32(32.5));
            evaluate(&system, t);
        })
    });

    c.bench_function("draw_scene", |b| {
        b.iter(|| {
            let t = black_box(Nanotime::secs_f32(32.5));
            let mut list = DisplayList::new();
            draw_scene(&system, t, &mut list);
            list
        })
    });

    c.bench_function("swept_angle", |b| {
        b.iter(|| {
            let t = black_box(86400.0 * 365.0);
            swept_angle(t, black_box(0.02))
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
