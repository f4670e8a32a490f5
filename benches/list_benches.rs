use chain_collections::linked_list::list::LinkedList;
use chain_collections::queue::fifo::Queue;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::Rng;

const SIZES: [usize; 2] = [64, 512];

fn queue_churn_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_churn");

    for size in [256usize, 4096] {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                let mut q = Queue::new();
                for i in 0..size as i32 {
                    q.enqueue(black_box(i));
                }
                while let Ok(value) = q.dequeue() {
                    black_box(value);
                }
            })
        });
    }

    group.finish();
}

fn insertion_sort_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion_sort");
    let mut rng = rand::rng();

    for size in SIZES {
        let random: Vec<i32> = (0..size).map(|_| rng.random_range(-10_000..10_000)).collect();
        let mut ascending = random.clone();
        ascending.sort_unstable();

        group.bench_function(BenchmarkId::new("random", size), |b| {
            b.iter_with_setup(
                || random.iter().copied().collect::<LinkedList>(),
                |mut list| {
                    list.sort();
                    list
                },
            )
        });

        group.bench_function(BenchmarkId::new("ascending", size), |b| {
            b.iter_with_setup(
                || ascending.iter().copied().collect::<LinkedList>(),
                |mut list| {
                    list.sort();
                    list
                },
            )
        });
    }

    group.finish();
}

criterion_group!(benches, queue_churn_benchmark, insertion_sort_benchmark);
criterion_main!(benches);
