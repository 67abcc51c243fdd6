use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use redblack::RbTree;

use crate::Lfsr;

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("remove");

    for n_values in [100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    // Generate the tree.
    let keys = Lfsr::default().keys(n_values);
    let t = keys.iter().map(|&k| (k, 42_usize)).collect::<RbTree<_, _>>();

    bench_inserted(n_values, g, &t, &keys);
    bench_ascending(n_values, g, &t, &keys);
    bench_descending(n_values, g, &t, &keys);
}

/// Generate a benchmark measuring the time needed to remove every key from
/// `t`, in the order produced by `$order` from the inserted keys.
macro_rules! remove_bench {
    (
        $name:ident,
        $order:expr
    ) => {
        paste::paste! {
            fn [<bench_ $name>]<M>(
                n_values: usize,
                g: &mut BenchmarkGroup<M>,
                t: &RbTree<u16, usize>,
                keys: &[u16],
            )
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    n_values,
                    bench_name: stringify!($name),
                };

                let order: fn(&mut Vec<u16>) = $order;
                let mut keys = keys.to_vec();
                order(&mut keys);

                g.throughput(Throughput::Elements(n_values as _));
                // Keys removed per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter_batched(
                        || t.clone(),
                        |mut t| {
                            for k in &keys {
                                t.remove(k).unwrap();
                            }
                            t
                        },
                        BatchSize::LargeInput,
                    )
                });
            }
        }
    };
}

remove_bench!(inserted, |_keys| {});
remove_bench!(ascending, |keys| keys.sort_unstable());
remove_bench!(descending, |keys| keys.sort_unstable_by(|a, b| b.cmp(a)));
