//! Benchmarks for `VersionTree`: amortized insert cost (including the
//! occasional relabel/grow), and steady-state `before` query cost.
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use persist::vtree::VersionTree;

const CHAIN_LENGTHS: [i64; 4] = [1 << 8, 1 << 10, 1 << 12, 1 << 14];

/// Amortized cost of `insert` along a long chain, which forces both local
/// relabeling and, eventually, whole-space growth.
pub fn insert_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_chain");
    group.throughput(Throughput::Elements(1));

    for &len in &CHAIN_LENGTHS {
        group.bench_with_input(BenchmarkId::new("version_tree", len), &len, |b, &len| {
            b.iter(|| {
                let mut tree = VersionTree::new();
                for v in 1..len {
                    tree.insert(v, v - 1).unwrap();
                }
                std::hint::black_box(&tree);
            });
        });
    }

    group.finish();
}

/// Amortized cost of `insert` under wide fan-out (every version a child of
/// the root), a different access pattern than a chain.
pub fn insert_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_fanout");
    group.throughput(Throughput::Elements(1));

    for &len in &CHAIN_LENGTHS {
        group.bench_with_input(BenchmarkId::new("version_tree", len), &len, |b, &len| {
            b.iter(|| {
                let mut tree = VersionTree::new();
                for v in 1..len {
                    tree.insert(v, 0).unwrap();
                }
                std::hint::black_box(&tree);
            });
        });
    }

    group.finish();
}

/// `before` is meant to be O(1): steady-state query cost should stay flat as
/// the tree grows.
pub fn before_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("before_query");
    group.throughput(Throughput::Elements(1));

    for &len in &CHAIN_LENGTHS {
        let mut tree = VersionTree::new();
        for v in 1..len {
            tree.insert(v, v - 1).unwrap();
        }

        group.bench_with_input(BenchmarkId::new("version_tree", len), &len, |b, &len| {
            b.iter(|| std::hint::black_box(tree.before(0, len - 1).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, insert_chain, insert_fanout, before_query);
criterion_main!(benches);
