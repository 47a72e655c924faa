use bridge_geometry::girder::span_lengths;
use bridge_geometry::{BridgeConfig, BridgeGeometry, ShapeMode};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("bridge_geometry_build");

    // Element lengths from coarse design models down to fine buffeting meshes
    let max_lengths = vec![100.0, 25.0, 5.0, 1.0];

    for &shape in &[ShapeMode::Curved, ShapeMode::Straight] {
        for &max_length in &max_lengths {
            let config = BridgeConfig {
                fem_max_length: max_length,
                shape,
                ..Default::default()
            };

            group.bench_with_input(
                BenchmarkId::new(shape.to_string(), format!("max_length={}", max_length)),
                &config,
                |b, config| b.iter(|| BridgeGeometry::build(black_box(config))),
            );
        }
    }

    group.finish();
}

fn benchmark_span_lengths(c: &mut Criterion) {
    let positions: Vec<f64> = (1..50).map(|k| k as f64 * 100.0).collect();

    c.bench_function("span_lengths_5000m_1m", |b| {
        b.iter(|| span_lengths(black_box(5000.0), black_box(&positions), black_box(1.0)))
    });
}

criterion_group!(benches, benchmark_build, benchmark_span_lengths);
criterion_main!(benches);
