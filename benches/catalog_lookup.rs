use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;
use tokio::runtime::Runtime;

use celebrations_rs::models::{DetailPage, ResolverMode};
use celebrations_rs::repositories::{CatalogTable, InMemoryCatalogRepository};
use celebrations_rs::services::CatalogService;
use celebrations_rs::views::{render_detail, render_listing};

fn catalog_service(mode: ResolverMode) -> CatalogService {
    let table = CatalogTable::seed().expect("seed catalog is valid");
    CatalogService::new(Arc::new(InMemoryCatalogRepository::new(table)), mode)
}

fn bench_resolve(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let keyed = catalog_service(ResolverMode::Keyed);
    let fixed = catalog_service(ResolverMode::Fixed);

    let mut group = c.benchmark_group("resolve");
    group.bench_function("keyed_hit", |b| {
        b.iter(|| {
            rt.block_on(async {
                black_box(
                    keyed
                        .resolve("candlelight-dinners", "private-beach-dinner")
                        .await
                        .unwrap(),
                )
            })
        })
    });
    group.bench_function("keyed_miss", |b| {
        b.iter(|| {
            rt.block_on(async {
                black_box(keyed.resolve("candlelight-dinners", "nope").await.unwrap())
            })
        })
    });
    group.bench_function("fixed", |b| {
        b.iter(|| {
            rt.block_on(async {
                black_box(fixed.resolve("anything", "romantic-dinner").await.unwrap())
            })
        })
    });
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let service = catalog_service(ResolverMode::Keyed);

    let listing = rt
        .block_on(service.get_listing("balloon-bouquet"))
        .unwrap();
    c.bench_function("render_listing", |b| {
        b.iter(|| black_box(render_listing(&listing)))
    });

    c.bench_function("load_and_render_detail", |b| {
        b.iter(|| {
            rt.block_on(async {
                let mut page = DetailPage::new();
                service
                    .load_detail(&mut page, Some("candlelight-dinners"), Some("rooftop-dinner"))
                    .await;
                black_box(render_detail(&page))
            })
        })
    });
}

criterion_group!(benches, bench_resolve, bench_render);
criterion_main!(benches);
