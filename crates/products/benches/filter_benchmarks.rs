use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use shopfront_products::{
    Category, FilterRequest, PriceBound, compare_by_id, filter, generate_local, generate_remote,
    merge_catalogs,
};

/// Page-sized catalog (local + remote segments) and a synthetic large one.
fn catalogs() -> Vec<(&'static str, Vec<shopfront_products::Product>)> {
    vec![
        ("page", merge_catalogs(generate_local(100), generate_remote(24))),
        ("large", generate_local(10_000)),
    ]
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    let requests = [
        ("unconstrained", FilterRequest::default()),
        ("text", FilterRequest::new().with_text("pro")),
        (
            "combined",
            FilterRequest::new()
                .with_text("lamp")
                .with_category(Category::Home)
                .with_min_price(20u64)
                .with_max_price(PriceBound::parse("120"))
                .with_only_in_stock(true),
        ),
    ];

    for (catalog_name, catalog) in catalogs() {
        group.throughput(Throughput::Elements(catalog.len() as u64));
        for (request_name, request) in &requests {
            group.bench_with_input(
                BenchmarkId::new(*request_name, catalog_name),
                &catalog,
                |b, catalog| b.iter(|| filter(black_box(catalog), black_box(request))),
            );
        }
    }

    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let catalog = merge_catalogs(generate_local(100), generate_remote(24));
    c.bench_function("compare_by_id/page", |b| {
        b.iter(|| compare_by_id(black_box(&catalog), Some("42"), Some("api-17")))
    });
}

criterion_group!(benches, bench_filter, bench_compare);
criterion_main!(benches);
