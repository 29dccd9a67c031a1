// Criterion benchmarks for HackMix generators

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hackmix::core::{ChartGenerator, FileIntake, PlaylistGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_playlist(c: &mut Criterion) {
    let generator = PlaylistGenerator::with_default_catalog();
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("generate_playlist", |b| {
        b.iter(|| generator.generate(black_box("late night drive"), &mut rng));
    });
}

fn bench_charts(c: &mut Criterion) {
    let generator = ChartGenerator::new();
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("generate_charts", |b| {
        b.iter(|| generator.generate(&mut rng));
    });
}

fn bench_csv_intake(c: &mut Criterion) {
    let intake = FileIntake::new(64 * 1024 * 1024);

    let mut group = c.benchmark_group("csv_intake");

    for row_count in [10, 1_000, 100_000].iter() {
        let mut csv = String::from("month,revenue,users\n");
        for i in 0..*row_count {
            csv.push_str(&format!("m{},{},{}\n", i, 1000 + i, 500 + i));
        }

        group.bench_with_input(BenchmarkId::new("parse", row_count), row_count, |b, _| {
            b.iter(|| intake.parse(black_box("data.csv"), black_box(csv.as_bytes())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_playlist, bench_charts, bench_csv_intake);

criterion_main!(benches);
