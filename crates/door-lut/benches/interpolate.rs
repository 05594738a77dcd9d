//! 插值与选表性能基准测试
//!
//! 每个仿真周期都会调用一次，需要远低于 1kHz 周期预算。

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use door_lut::{FORCE_TABLES, TableSelector, interpolate};
use door_protocol::{BenchmarkProfile, Deg, RotationDirection};

fn bench_interpolate(c: &mut Criterion) {
    let table = FORCE_TABLES.table(BenchmarkProfile::SuddenRamp, RotationDirection::Clockwise);

    c.bench_function("interpolate_sudden_ramp_cw", |b| {
        let mut angle = -200.0;
        b.iter(|| {
            angle = if angle > 200.0 { -200.0 } else { angle + 0.37 };
            black_box(interpolate(
                table,
                Deg(black_box(angle)),
                Some(RotationDirection::Clockwise),
            ));
        });
    });
}

fn bench_select_cached(c: &mut Criterion) {
    let mut selector = TableSelector::new();
    selector.select("Wind Ramp", "CCW");

    c.bench_function("select_cached", |b| {
        b.iter(|| {
            black_box(selector.select(black_box("Wind Ramp"), black_box("CCW")));
        });
    });
}

fn bench_select_alternating(c: &mut Criterion) {
    let mut selector = TableSelector::new();
    let mut flip = false;

    c.bench_function("select_alternating", |b| {
        b.iter(|| {
            flip = !flip;
            let side = if flip { "CW" } else { "CCW" };
            black_box(selector.select("Sudden Force", side));
        });
    });
}

criterion_group!(
    benches,
    bench_interpolate,
    bench_select_cached,
    bench_select_alternating
);
criterion_main!(benches);
