use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use inventory_server::store::InventoryStore;
use tokio::runtime::Runtime;

fn filled_store(rt: &Runtime, size: usize) -> (InventoryStore, String) {
    rt.block_on(async {
        let store = InventoryStore::new();
        let mut last = String::new();
        for i in 0..size {
            last = store.create(format!("item {}", i), String::new(), None).await.id;
        }
        (store, last)
    })
}

fn benchmark_find_by_id(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("find_by_id_last");

    for size in [100usize, 1_000, 10_000] {
        let (store, last) = filled_store(&rt, size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| rt.block_on(async { black_box(store.find_by_id(&last).await) }));
        });
    }
    group.finish();
}

fn benchmark_all_snapshot(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let (store, _) = filled_store(&rt, 1_000);

    c.bench_function("all_snapshot_1000", |b| {
        b.iter(|| rt.block_on(async { black_box(store.all().await.len()) }));
    });
}

criterion_group!(benches, benchmark_find_by_id, benchmark_all_snapshot);
criterion_main!(benches);
