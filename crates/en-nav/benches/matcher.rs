//! Benchmarks for reordering large category listings.
//!
//! Run with: `cargo bench --bench matcher`

use std::hint::black_box;

use camino::{Utf8Path, Utf8PathBuf};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use en_core::{Category, FileListing};
use en_nav::rules::{CONTROLLERS_TO_MODELS, MODELS_TO_CONTROLLERS, compile_all};
use en_nav::{RelatedCategory, RelatedFileMatcher};

// =============================================================================
// Benchmark Data
// =============================================================================

const LISTING_SIZES: &[usize] = &[100, 1_000, 10_000];

fn model_listing(size: usize) -> FileListing {
    (0..size)
        .map(|i| Utf8PathBuf::from(format!("/p/app/models/group_{}/model_{i}.js", i % 10)))
        .collect()
}

fn controller_listing(size: usize) -> FileListing {
    (0..size)
        .map(|i| Utf8PathBuf::from(format!("/p/app/controllers/model_{i}s_controller.js")))
        .collect()
}

// =============================================================================
// Matcher Benchmarks
// =============================================================================

fn bench_controller_to_models(c: &mut Criterion) {
    let rules = compile_all(CONTROLLERS_TO_MODELS).unwrap();
    let matcher = RelatedFileMatcher::new(Category::Models, Utf8Path::new("/p/app/models"))
        .with_related(RelatedCategory {
            category: Category::Controllers,
            root: Utf8Path::new("/p/app/controllers"),
            rules: &rules,
        });
    let current = Utf8Path::new("/p/app/controllers/selected_model_42s_controller.js");

    let mut group = c.benchmark_group("controller_to_models");
    for &size in LISTING_SIZES {
        let listing = model_listing(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &listing, |b, listing| {
            b.iter(|| matcher.arrange(Some(black_box(current)), listing.clone()).unwrap());
        });
    }
    group.finish();
}

fn bench_model_to_controllers(c: &mut Criterion) {
    let rules = compile_all(MODELS_TO_CONTROLLERS).unwrap();
    let matcher =
        RelatedFileMatcher::new(Category::Controllers, Utf8Path::new("/p/app/controllers"))
            .with_related(RelatedCategory {
                category: Category::Models,
                root: Utf8Path::new("/p/app/models"),
                rules: &rules,
            });
    let current = Utf8Path::new("/p/app/models/model_42.js");

    let mut group = c.benchmark_group("model_to_controllers");
    for &size in LISTING_SIZES {
        let listing = controller_listing(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &listing, |b, listing| {
            b.iter(|| matcher.arrange(Some(black_box(current)), listing.clone()).unwrap());
        });
    }
    group.finish();
}

fn bench_self_exclusion(c: &mut Criterion) {
    let matcher = RelatedFileMatcher::new(Category::Models, Utf8Path::new("/p/app/models"));
    let listing = model_listing(10_000);
    let current = Utf8Path::new("/p/app/models/group_3/model_9993.js");

    c.bench_function("self_exclusion_10000", |b| {
        b.iter(|| matcher.arrange(Some(black_box(current)), listing.clone()).unwrap());
    });
}

criterion_group!(
    benches,
    bench_controller_to_models,
    bench_model_to_controllers,
    bench_self_exclusion
);
criterion_main!(benches);
