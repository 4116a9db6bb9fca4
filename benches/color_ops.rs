use colorsort::distance::{euclidean, mean_distance};
use colorsort::ranker::argsort;
use colorsort::TargetColor;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_parse_color(c: &mut Criterion) {
    c.bench_function("parse_color", |b| {
        b.iter(|| TargetColor::parse(black_box("#FF5733")))
    });
}

fn bench_euclidean(c: &mut Criterion) {
    let a = [255.0, 87.0, 51.0];
    let z = [51.0, 87.0, 255.0];
    c.bench_function("euclidean", |b| {
        b.iter(|| euclidean(black_box(&a), black_box(&z)))
    });
}

fn bench_mean_distance(c: &mut Criterion) {
    let target = TargetColor::new(0xBA, 0xDA, 0x55);
    // One 256x256 thumbnail worth of pixels
    let pixels: Vec<[u8; 3]> = (0..256 * 256)
        .map(|i| [(i % 256) as u8, (i / 256) as u8, (i % 97) as u8])
        .collect();
    c.bench_function("mean_distance_256x256", |b| {
        b.iter(|| mean_distance(black_box(&target), black_box(&pixels).iter().copied()))
    });
}

fn bench_argsort(c: &mut Criterion) {
    let scores: Vec<f64> = (0..10_000).map(|i| ((i * 7919) % 10_007) as f64).collect();
    c.bench_function("argsort_10k", |b| b.iter(|| argsort(black_box(&scores))));
}

criterion_group!(
    benches,
    bench_parse_color,
    bench_euclidean,
    bench_mean_distance,
    bench_argsort,
);
criterion_main!(benches);
