use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use redblack::RbTree;

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    order: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.order), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for n_values in [1, 100, 1_000, 10_000] {
        let random = Lfsr::default().keys(n_values);
        bench_param(&mut g, "random", random);

        // Sorted input drives the rebalancing down the same spine for every
        // insert.
        let ascending = (0..n_values as u16).collect();
        bench_param(&mut g, "ascending", ascending);
    }
}

/// Measure the time needed to insert all of `keys`, in order, into an empty
/// tree.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, order: &'static str, keys: Vec<u16>)
where
    M: Measurement,
{
    let bench_name = BenchName {
        order,
        n_values: keys.len(),
    };
    g.throughput(Throughput::Elements(keys.len() as _)); // Keys inserted per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            RbTree::default,
            |mut t| {
                for &k in &keys {
                    t.insert(k, 42_usize);
                }
                t
            },
            criterion::BatchSize::PerIteration,
        );
    });
}
