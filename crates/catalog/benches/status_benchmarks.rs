use chrono::Utc;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use storefront_catalog::{
    ProductVariant, StatusFlags, StoredQuantity, is_backorder, is_low_quantity, is_sold_out,
};
use storefront_core::{ProductId, ShopId};

fn make_variants(n: usize) -> Vec<ProductVariant> {
    let now = Utc::now();
    let shop_id = ShopId::new();
    let parent = ProductId::new();

    (0..n)
        .map(|i| ProductVariant {
            id: ProductId::new(),
            shop_id,
            ancestors: vec![parent],
            title: format!("Variant {i}"),
            option_title: None,
            sku: Some(format!("SKU-{i}")),
            price: Some(1000 + i as u64),
            // Mix of tracked/untracked and stocked/empty variants so no
            // predicate short-circuits on the first element.
            inventory_management: i % 3 != 0,
            inventory_policy: i % 2 == 0,
            inventory_quantity: (i % 7) as i64,
            low_inventory_warning_threshold: 5,
            created_at: now,
            updated_at: now,
        })
        .collect()
}

fn bench_status_predicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("variant_status");

    for size in [1usize, 8, 64, 512] {
        let variants = make_variants(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(
            BenchmarkId::new("is_sold_out", size),
            &variants,
            |b, vs| b.iter(|| is_sold_out(black_box(vs), &StoredQuantity)),
        );
        group.bench_with_input(
            BenchmarkId::new("is_low_quantity", size),
            &variants,
            |b, vs| b.iter(|| is_low_quantity(black_box(vs), &StoredQuantity)),
        );
        group.bench_with_input(
            BenchmarkId::new("is_backorder", size),
            &variants,
            |b, vs| b.iter(|| is_backorder(black_box(vs))),
        );
        group.bench_with_input(BenchmarkId::new("evaluate", size), &variants, |b, vs| {
            b.iter(|| StatusFlags::evaluate(black_box(vs), &StoredQuantity))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_status_predicates);
criterion_main!(benches);
