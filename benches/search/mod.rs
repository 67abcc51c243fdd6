use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use redblack::{NodeId, RbTree};

use crate::Lfsr;

/// The number of distinct keys in the tree built for the duplicate key
/// benchmark.
const DUPLICATE_DOMAIN: u16 = 64;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    lookup: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.lookup), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("search");

    for n_values in [100, 1_000, 10_000] {
        bench_param(&mut g, n_values);
    }
}

/// For a tree of `n_values` unique keys, compare resolving every node by
/// descending from the root with its key against resolving it through the
/// [`NodeId`] returned at insert time.
///
/// A second tree holding the same number of nodes drawn from only
/// [`DUPLICATE_DOMAIN`] keys measures searches that stop at the first of
/// many equal keys on the way down.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let keys = Lfsr::default().keys(n_values);

    let mut t = RbTree::default();
    let ids = keys
        .iter()
        .map(|&k| t.insert(k, usize::from(k)))
        .collect::<Vec<NodeId>>();

    g.throughput(Throughput::Elements(n_values as _)); // Lookups per second

    let bench_name = BenchName {
        lookup: "by_key",
        n_values,
    };
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| {
            let mut sum = 0;
            for k in &keys {
                sum += t.get(k).copied().unwrap_or_default();
            }
            sum
        })
    });

    let bench_name = BenchName {
        lookup: "by_handle",
        n_values,
    };
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| {
            let mut sum = 0;
            for &id in &ids {
                sum += t.node(id).map(|n| *n.value()).unwrap_or_default();
            }
            sum
        })
    });

    // Every lookup in this tree is a hit on a key held by roughly
    // n_values / DUPLICATE_DOMAIN nodes.
    let dups = keys
        .iter()
        .map(|&k| (k % DUPLICATE_DOMAIN, usize::from(k)))
        .collect::<RbTree<_, _>>();

    let bench_name = BenchName {
        lookup: "duplicates",
        n_values,
    };
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| {
            let mut all_hit = true;
            for k in &keys {
                all_hit &= dups.search(&(k % DUPLICATE_DOMAIN)).is_some();
            }
            assert!(all_hit);
        })
    });
}
