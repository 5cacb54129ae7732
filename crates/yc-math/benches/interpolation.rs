use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use yc_math::{Cubic, Interpolator, Linear, LogLinear};

fn discount_nodes() -> (Vec<f64>, Vec<f64>) {
    let nodes = [
        (0.0, 1.0),
        (0.25, 0.995),
        (0.5, 0.989),
        (1.0, 0.978),
        (2.0, 0.955),
        (3.0, 0.932),
        (5.0, 0.886),
        (7.0, 0.844),
        (10.0, 0.786),
        (20.0, 0.620),
        (30.0, 0.510),
    ];
    nodes.iter().copied().unzip()
}

fn bench_evaluate(c: &mut Criterion) {
    let (xs, ys) = discount_nodes();
    let queries: Vec<f64> = (1..=10_000).map(|i| 30.0 * i as f64 / 10_000.0).collect();
    let schemes: [(&str, &dyn Interpolator); 3] =
        [("linear", &Linear), ("log_linear", &LogLinear), ("cubic", &Cubic)];

    let mut group = c.benchmark_group("interpolation_evaluate");
    group.throughput(Throughput::Elements(queries.len() as u64));
    for (name, scheme) in schemes {
        let interp = scheme.interpolate(&xs, &ys).unwrap();
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &t in &queries {
                    acc += interp.evaluate(black_box(t), false).unwrap();
                }
                black_box(acc)
            })
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let (xs, ys) = discount_nodes();
    let mut group = c.benchmark_group("interpolation_build");
    group.bench_function("log_linear", |b| {
        b.iter(|| LogLinear.interpolate(black_box(&xs), black_box(&ys)).unwrap())
    });
    group.bench_function("cubic", |b| {
        b.iter(|| Cubic.interpolate(black_box(&xs), black_box(&ys)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_build);
criterion_main!(benches);
