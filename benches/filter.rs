use criterion::{Criterion, criterion_group, criterion_main};
use rand::RngExt as _;
use rand::distr::Alphanumeric;

use pathrank::prelude::*;

const CANDIDATES: usize = 100_000;

fn random_segment(len: usize) -> String {
    rand::rng().sample_iter(&Alphanumeric).take(len).map(char::from).collect()
}

fn random_paths() -> Vec<String> {
    let mut rng = rand::rng();
    (0..CANDIDATES)
        .map(|_| {
            let depth = rng.random_range(0..6);
            let mut path: Vec<String> = (0..depth).map(|_| random_segment(rng.random_range(2..10))).collect();
            path.push(format!("{}.rs", random_segment(rng.random_range(3..16))));
            path.join("/")
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let paths = random_paths();

    c.bench_function("default", |b| {
        let options = Options::default();
        b.iter(|| filter(&paths, "test", &options));
    });
    c.bench_function("path", |b| {
        let options = OptionsBuilder::default().use_path_scoring(true).build().unwrap();
        b.iter(|| filter(&paths, "src/test", &options));
    });
    c.bench_function("ext_bonus", |b| {
        let options = OptionsBuilder::default()
            .use_path_scoring(true)
            .use_extension_bonus(true)
            .build()
            .unwrap();
        b.iter(|| filter(&paths, "test.rs", &options));
    });
    c.bench_function("max_results", |b| {
        let options = OptionsBuilder::default().max_results(20).build().unwrap();
        b.iter(|| filter(&paths, "test", &options));
    });
    c.bench_function("parallel", |b| {
        let options = Options::default();
        b.iter(|| par_filter(&paths, "test", &options));
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = criterion_benchmark
);
criterion_main!(benches);
