use criterion::{BenchmarkId, Criterion};
use limit_book::{Order, OrderBook, OrderUpdate, Side};
use std::hint::black_box;

/// Builds a book with `count` orders spread over 500 price levels, alternating sides.
fn populated_book(count: u64) -> OrderBook {
    OrderBook::from_orders((1..=count).map(|id| {
        let price = 1000 + u128::from(id % 500);
        let side = if id % 2 == 0 { Side::Bid } else { Side::Ask };
        Order::new(id, side, price, 10).expect("valid bench order")
    }))
    .expect("unique bench ids")
}

/// Register benchmarks for add, remove, update and snapshot.
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Operations");

    for &order_count in &[100u64, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("append", order_count),
            &order_count,
            |b, &count| {
                b.iter(|| black_box(populated_book(count)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("remove_all", order_count),
            &order_count,
            |b, &count| {
                b.iter_with_setup(
                    || populated_book(count),
                    |mut book| {
                        for id in 1..=count {
                            black_box(book.remove(id));
                        }
                        assert!(book.is_empty());
                    },
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("update_price", order_count),
            &order_count,
            |b, &count| {
                b.iter_with_setup(
                    || populated_book(count),
                    |mut book| {
                        for id in 1..=count {
                            let price = 2000 + u128::from(id % 50);
                            let _ = black_box(book.update(id, &[OrderUpdate::Price(price)]));
                        }
                    },
                );
            },
        );

        let book = populated_book(order_count);
        group.bench_with_input(
            BenchmarkId::new("snapshot", order_count),
            &book,
            |b, book| {
                b.iter(|| black_box(book.snapshot()));
            },
        );
    }

    group.finish();
}
