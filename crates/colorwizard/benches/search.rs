use criterion::{criterion_group, criterion_main, Criterion};
use colorwizard::{mix_oklch_linear, Color, ContrastSearch};

pub fn run_benchmarks(c: &mut Criterion) {
    let reference: Color = "#3366cc".parse().expect("reference color should parse");

    let mut group = c.benchmark_group("contrast-search");
    group.sample_size(10);

    let narrow = ContrastSearch::builder().target(4.5, 0.1).build();
    group.bench_function("hue-0", |b| b.iter(|| narrow.run(&reference)));

    let wide = ContrastSearch::builder()
        .hue_constraint(10.0)
        .range(4.5, 7.0)
        .build();
    group.bench_function("hue-10", |b| b.iter(|| wide.run(&reference)));

    group.finish();

    c.bench_function("mix-oklch-100", |b| {
        b.iter(|| mix_oklch_linear("#3366cc", "#ffcc00", 100))
    });
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
