// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for catalog projections.
//!
//! Measures the performance of:
//! - Tag index derivation over a large catalog
//! - Filtering by a common and a rare tag
//! - Filtering with the "all" selection

use astro_gallery::domain::{Catalog, Photo, PhotoId, TagFilter, TagIndex};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const PHOTOS: u32 = 10_000;

/// Synthetic catalog: every photo is "deep-sky", one in a hundred is "rare",
/// and the rest rotate through fifty object tags.
fn synthetic_photos() -> Vec<Photo> {
    (0..PHOTOS)
        .map(|id| {
            let mut tags = vec!["deep-sky".to_string(), format!("object-{}", id % 50)];
            if id % 100 == 0 {
                tags.push("rare".to_string());
            }
            Photo {
                id: PhotoId::new(id),
                title: format!("Target {id}"),
                description: String::new(),
                date: "2024-01-01".to_string(),
                location: String::new(),
                equipment: String::new(),
                images: vec![format!("https://example.org/{id}.jpg")],
                tags,
            }
        })
        .collect()
}

fn bench_tag_index(c: &mut Criterion) {
    let photos = synthetic_photos();
    let mut group = c.benchmark_group("catalog");

    group.bench_function("build_tag_index", |b| {
        b.iter(|| black_box(TagIndex::build(black_box(&photos))));
    });

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let Ok(catalog) = Catalog::new(synthetic_photos()) else {
        panic!("synthetic catalog must be valid");
    };
    let mut group = c.benchmark_group("catalog");

    for label in ["all", "deep-sky", "rare"] {
        let filter = TagFilter::from_label(label);
        group.bench_function(format!("filter_{label}"), |b| {
            b.iter(|| black_box(catalog.filter(black_box(&filter))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tag_index, bench_filter);
criterion_main!(benches);
