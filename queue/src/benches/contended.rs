use criterion::{criterion_group, Criterion};
use ordered_queue::{Item, OrderedQueue};
use std::{sync::Arc, thread, time::Instant};

const ITEMS: u64 = 10_000;

/// Benchmark draining items from several producers with a single blocked consumer.
fn bench_contended(c: &mut Criterion) {
    for producers in [1u64, 4, 8] {
        c.bench_function(
            &format!("{}/producers={} items={}", module_path!(), producers, ITEMS),
            |b| {
                b.iter_custom(|iters| {
                    let start = Instant::now();
                    for _ in 0..iters {
                        let queue: Arc<OrderedQueue<u64, ()>> = Arc::new(OrderedQueue::new());
                        let handles: Vec<_> = (0..producers)
                            .map(|producer| {
                                let queue = queue.clone();
                                thread::spawn(move || {
                                    for i in 0..ITEMS / producers {
                                        let sequence = producer * ITEMS + i;
                                        queue.push(Item::new(-(sequence as i64), sequence, ()));
                                    }
                                })
                            })
                            .collect();
                        for _ in 0..(ITEMS / producers) * producers {
                            queue.pop();
                        }
                        for handle in handles {
                            handle.join().unwrap();
                        }
                    }
                    start.elapsed()
                });
            },
        );
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_contended,
}
