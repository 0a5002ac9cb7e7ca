use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockroom_catalog::Product;
use stockroom_registry::Warehouse;

fn populated(count: u32) -> Warehouse {
    let mut warehouse = Warehouse::new();
    for i in 0..count {
        warehouse.add_product(Product::new(
            format!("Part {i}"),
            format!("SKU-{i:06}"),
            i % 50,
            format!("A{}", i % 10),
        ));
    }
    warehouse
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for count in [100u32, 1_000, 10_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| black_box(populated(count)));
        });
    }
    group.finish();
}

fn bench_search_by_name(c: &mut Criterion) {
    let warehouse = populated(10_000);
    c.bench_function("search_by_name/worst_case_scan", |b| {
        // The queried name matches nothing, so every entry is visited.
        b.iter(|| black_box(warehouse.search_product_by_name("unstocked part")));
    });
}

fn bench_inventory_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("inventory_report");
    for count in [100u32, 1_000, 10_000] {
        let warehouse = populated(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &warehouse, |b, w| {
            b.iter(|| black_box(w.inventory_report()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_search_by_name, bench_inventory_report);
criterion_main!(benches);
