use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::atomic::AtomicBool;

use battleplan::board::STANDARD_RULES;
use battleplan::protocol::parse_force;
use battleplan::resolve::compare;
use battleplan::search::{search, search_with, Permutations, SearchConfig};

const EXAMPLE_OWN: &str = "Militia#5;FootArcher#3";
const EXAMPLE_OPP: &str = "Spearmen#4;CavalryArcher#2";

// No arrangement wins, so every ordering is visited.
const HOPELESS_OWN: &str = "Militia#1;Militia#1;Militia#1;Militia#1;Militia#1;Militia#1;Militia#1;Militia#1";
const HOPELESS_OPP: &str = "HeavyCavalry#9;HeavyCavalry#9;HeavyCavalry#9;HeavyCavalry#9;HeavyCavalry#9;HeavyCavalry#9;HeavyCavalry#9;HeavyCavalry#9";

fn bench_compare(c: &mut Criterion) {
    let own = parse_force(EXAMPLE_OWN).unwrap();
    let opp = parse_force(EXAMPLE_OPP).unwrap();
    c.bench_function("compare_single_matchup", |b| {
        b.iter(|| compare(black_box(&own[0]), black_box(&opp[0])))
    });
}

fn bench_permutations_8(c: &mut Criterion) {
    c.bench_function("permutations_8_all", |b| {
        b.iter(|| {
            let mut perms = Permutations::new(black_box(8));
            let mut count = 0u64;
            while perms.next_order().is_some() {
                count += 1;
            }
            count
        })
    });
}

fn bench_search_example(c: &mut Criterion) {
    let own = parse_force(EXAMPLE_OWN).unwrap();
    let opp = parse_force(EXAMPLE_OPP).unwrap();
    c.bench_function("search_example_2v2", |b| {
        b.iter(|| search(black_box(&own), black_box(&opp)))
    });
}

fn bench_search_exhaustive_8(c: &mut Criterion) {
    let own = parse_force(HOPELESS_OWN).unwrap();
    let opp = parse_force(HOPELESS_OPP).unwrap();
    c.bench_function("search_exhaustive_8v8", |b| {
        b.iter(|| search(black_box(&own), black_box(&opp)))
    });
}

fn bench_search_exhaustive_8_parallel(c: &mut Criterion) {
    let own = parse_force(HOPELESS_OWN).unwrap();
    let opp = parse_force(HOPELESS_OPP).unwrap();
    let config = SearchConfig {
        threads: 4,
        ..SearchConfig::default()
    };
    c.bench_function("search_exhaustive_8v8_4_threads", |b| {
        b.iter(|| {
            search_with(
                black_box(&own),
                black_box(&opp),
                &STANDARD_RULES,
                &config,
                &AtomicBool::new(false),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_compare,
    bench_permutations_8,
    bench_search_example,
    bench_search_exhaustive_8,
    bench_search_exhaustive_8_parallel,
);
criterion_main!(benches);
