use chained_multimap::{ChainedMultimap, ChainedSet};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{n:016x}")
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("chained_multimap_insert_10k", |b| {
        let keys: Vec<_> = lcg(1).take(10_000).map(key).collect();
        b.iter_batched(
            ChainedMultimap::<u64>::new,
            |mut m| {
                for (i, k) in keys.iter().enumerate() {
                    m.insert(k, i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("chained_multimap_get_hit", |b| {
        let mut m = ChainedMultimap::new();
        let keys: Vec<_> = lcg(7).take(20_000).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            m.insert(k, i as u64);
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(m.get(k));
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("chained_multimap_get_miss", |b| {
        let mut m = ChainedMultimap::new();
        for (i, x) in lcg(11).take(10_000).enumerate() {
            m.insert(&key(x), i as u64);
        }
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            // keys drawn from a disjoint part of the generator's sequence
            let k = key(miss.next().unwrap());
            black_box(m.get(&k));
        })
    });
}

fn bench_set_contains(c: &mut Criterion) {
    c.bench_function("chained_set_contains_allow_list", |b| {
        let states = [
            "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
            "Delaware", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa",
            "Kansas", "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan",
            "Minnesota", "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada",
            "New Hampshire", "New Jersey", "New Mexico", "New York", "North Carolina",
            "North Dakota", "Ohio", "Oklahoma", "Oregon", "Pennsylvania", "Rhode Island",
            "South Carolina", "South Dakota", "Tennessee", "Texas", "Utah", "Vermont", "Virginia",
            "Washington", "West Virginia", "Wisconsin", "Wyoming",
        ];
        let set: ChainedSet = states.iter().copied().collect();
        let mut it = states.iter().cycle();
        b.iter(|| {
            let state = it.next().unwrap();
            black_box(set.contains(state));
        })
    });
}

criterion_group!(
    benches,
    bench_insert,
    bench_get_hit,
    bench_get_miss,
    bench_set_contains
);
criterion_main!(benches);
