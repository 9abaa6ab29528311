use criterion::Criterion;

mod operations;

/// Register all order book benchmarks.
pub fn register_benchmarks(c: &mut Criterion) {
    operations::register_benchmarks(c);
}
