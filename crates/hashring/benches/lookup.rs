//! Benchmarks for ring lookup and membership churn.
//!
//! Measures `get` latency across ring sizes and the cost of a host
//! joining and leaving with various virtual-node counts.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hashring::RingBuilder;

fn bench_get(c: &mut Criterion) {
    let host_counts: &[usize] = &[4, 16, 64];

    let mut group = c.benchmark_group("get");
    for &hosts in host_counts {
        let ring = RingBuilder::new().with_virtual_nodes(128).build();
        for i in 0..hosts {
            ring.add(&format!("host-{i}"));
        }

        group.bench_with_input(BenchmarkId::new("v128", hosts), &ring, |b, ring| {
            let mut i = 0u64;
            b.iter(|| {
                i = i.wrapping_add(1);
                ring.get(&format!("key-{i}")).unwrap()
            });
        });
    }
    group.finish();
}

fn bench_get_replicated(c: &mut Criterion) {
    let ring = RingBuilder::new()
        .with_replication_factor(3)
        .with_virtual_nodes(128)
        .build();
    for i in 0..16 {
        ring.add(&format!("host-{i}"));
    }

    c.bench_function("get/r3_16_hosts", |b| {
        let mut i = 0u64;
        b.iter(|| {
            i = i.wrapping_add(1);
            ring.get(&format!("key-{i}")).unwrap()
        });
    });
}

fn bench_membership_churn(c: &mut Criterion) {
    let vnode_counts: &[usize] = &[0, 64, 256];

    let mut group = c.benchmark_group("membership");
    for &vnodes in vnode_counts {
        let ring = RingBuilder::new().with_virtual_nodes(vnodes).build();
        for i in 0..16 {
            ring.add(&format!("host-{i}"));
        }

        group.bench_with_input(
            BenchmarkId::new("add_remove", vnodes),
            &ring,
            |b, ring| {
                b.iter(|| {
                    ring.add("joining-host");
                    ring.remove("joining-host");
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_get,
    bench_get_replicated,
    bench_membership_churn
);
criterion_main!(benches);
