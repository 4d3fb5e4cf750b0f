use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexcoord::{Hex, HexFrac, Layout, OrientationKind, Parity, Point};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");

    let layout = Layout::new(
        OrientationKind::Pointy,
        Parity::Even,
        Point::new(24.0, 24.0),
        Point::new(512.0, 384.0),
    )
    .unwrap();
    let hex = Hex::new(17, -40, 23).unwrap();
    let pixel = Point::new(137.3, -912.8);

    group.bench_function("hex to pixel", |b| {
        b.iter(|| layout.hex_to_pixel(black_box(hex)))
    });
    group.bench_function("pixel to hex", |b| {
        b.iter(|| layout.pixel_to_hex(black_box(pixel)))
    });
    group.bench_function("hex corners", |b| {
        b.iter(|| layout.hex_corners(black_box(hex)))
    });
    group.bench_function("round", |b| {
        b.iter(|| black_box(HexFrac::new(3.4, -1.7, -1.7)).round())
    });
    group.bench_function("offset round trip", |b| {
        b.iter(|| layout.offset_to_hex(layout.hex_to_offset(black_box(hex))))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
