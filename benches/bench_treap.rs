use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng, XorShiftRng};
use star_treap::treap::{RandomPriority, Treap};
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 1000;

fn bench_treap_insert(c: &mut Criterion) {
    c.bench_function("bench treap insert", |b| {
        b.iter(|| {
            let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
            let priorities = RandomPriority::from_seed([2, 2, 2, 2]);
            let mut treap = Treap::with_priority_source("bench", priorities);
            for _ in 0..NUM_OF_OPERATIONS {
                let key = rng.next_u32();
                let val = rng.next_u32();

                treap.insert(key, val);
            }
        })
    });
}

fn bench_treap_get(c: &mut Criterion) {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let priorities = RandomPriority::from_seed([2, 2, 2, 2]);
    let mut treap = Treap::with_priority_source("bench", priorities);
    let mut values = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        let val = rng.next_u32();

        treap.insert(key, val);
        values.push(key);
    }

    c.bench_function("bench treap get", move |b| {
        b.iter(|| {
            for key in &values {
                black_box(treap.get(key));
            }
        })
    });
}

fn bench_btreemap_insert(c: &mut Criterion) {
    c.bench_function("bench btreemap insert", |b| {
        b.iter(|| {
            let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
            let mut map = BTreeMap::new();
            for _ in 0..NUM_OF_OPERATIONS {
                let key = rng.next_u32();
                let val = rng.next_u32();

                map.insert(key, val);
            }
        })
    });
}

fn bench_btreemap_get(c: &mut Criterion) {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = BTreeMap::new();
    let mut values = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        let val = rng.next_u32();

        map.insert(key, val);
        values.push(key);
    }

    c.bench_function("bench btreemap get", move |b| {
        b.iter(|| {
            for key in &values {
                black_box(map.get(key));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_treap_insert,
    bench_treap_get,
    bench_btreemap_insert,
    bench_btreemap_get,
);
criterion_main!(benches);
