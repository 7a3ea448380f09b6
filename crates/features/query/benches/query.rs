use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use geodex_query::*;
use std::hint::black_box;

// ============================================================================
// Benchmark: Lookups
// ============================================================================

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    group.bench_function("by_code", |b| {
        b.iter(|| black_box(get_country_by_code(black_box("fr"))));
    });

    group.bench_function("by_alpha3", |b| {
        b.iter(|| black_box(get_country_by_alpha3(black_box("zwe"))));
    });

    group.bench_function("by_phone", |b| {
        b.iter(|| black_box(get_country_by_phone(black_box("44"))));
    });

    group.finish();
}

// ============================================================================
// Benchmark: Filter + Sort
// ============================================================================

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for collation in [Collation::Natural, Collation::Ordinal] {
        let options = FilterSortOptions::new().sort(SortBy::Label, SortOrder::Asc).collation(collation);
        group.bench_with_input(BenchmarkId::new("label", collation), &options, |b, options| {
            b.iter(|| black_box(get_all_countries(options)));
        });
    }

    let europe = FilterSortOptions::new()
        .filter(|c| c.continent == "Europe")
        .sort(SortBy::Phone, SortOrder::Desc);
    group.bench_function("europe_by_phone", |b| {
        b.iter(|| black_box(get_all_countries(&europe)));
    });

    group.bench_function("with_flags", |b| {
        b.iter(|| black_box(get_all_countries_with_flags(&europe)));
    });

    group.finish();
}

criterion_group!(benches, bench_lookup, bench_sort);
criterion_main!(benches);
