use roshambo::game::*;
use roshambo::stats::*;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        resolving_uniform_draw,
        resolving_seeded_draw,
        recording_memory_commit,
}

fn resolving_uniform_draw(c: &mut criterion::Criterion) {
    let resolver = Resolver::default();
    c.bench_function("resolve a Round with a uniform draw", |b| {
        b.iter(|| resolver.resolve(Choice::Rock))
    });
}

fn resolving_seeded_draw(c: &mut criterion::Criterion) {
    let resolver = Resolver::new(Seeded::from(0));
    c.bench_function("resolve a Round with a seeded draw", |b| {
        b.iter(|| resolver.resolve(Choice::Paper))
    });
}

fn recording_memory_commit(c: &mut criterion::Criterion) {
    let aggregator = Aggregator::default();
    let round = Round::new(Choice::Scissors, Choice::Paper);
    c.bench_function("commit a Round to the Memory store", |b| {
        b.iter(|| futures::executor::block_on(aggregator.record(&round)))
    });
}
