use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use worldmap_core::prelude::*;

/// A collection roughly the size of the world dataset (~180 countries).
fn synthetic_collection(n: usize) -> String {
    let features: Vec<String> = (0..n)
        .map(|i| {
            let lng = (i % 36) as f64 * 10.0 - 180.0;
            let lat = (i / 36) as f64 * 10.0 - 60.0;
            format!(
                r#"{{"type":"Feature","properties":{{"name":"Country {i} Republic"}},"geometry":{{"type":"Polygon","coordinates":[[[{lng},{lat}],[{},{lat}],[{},{}],[{lng},{}],[{lng},{lat}]]]}}}}"#,
                lng + 9.0,
                lng + 9.0,
                lat + 9.0,
                lat + 9.0
            )
        })
        .collect();
    format!(r#"{{"type":"FeatureCollection","features":[{}]}}"#, features.join(","))
}

fn bench_search(c: &mut Criterion) {
    let slot = DatasetSlot::new();
    let dataset = CountryDataset::parse(&synthetic_collection(180)).expect("synthetic dataset");
    slot.fill(dataset).expect("fresh slot");
    let flags = DataCatalog::embedded().expect("embedded catalog").flags.clone();
    let mut search = SearchController::new(slot, flags, "none.png");
    let mut view = HeadlessSearchView::new();

    c.bench_function("search: keystroke 'rep'", |b| {
        b.iter(|| {
            search.on_input(black_box("rep"), &mut view);
        })
    });

    c.bench_function("search: keystroke no match", |b| {
        b.iter(|| search.evaluate(black_box("zzz")))
    });
}

fn bench_format(c: &mut Criterion) {
    c.bench_function("format_number 40886.25", |b| {
        b.iter(|| format_number(black_box(40_886.25)))
    });
    c.bench_function("format_number 1.5e12", |b| {
        b.iter(|| format_number(black_box(1.5e12)))
    });
}

criterion_group!(benches, bench_search, bench_format);
criterion_main!(benches);
