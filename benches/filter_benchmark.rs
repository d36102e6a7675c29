/// Benchmarks for dataset filtering and summary computation.
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use subdash::analysis::{compute_summaries, filter_records, Dataset};
use subdash::{FilterParams, SubscriptionRecord, TypeSelection, YearMonth};

/// Build a dataset with monthly readings for several types over many years
fn setup_large_dataset() -> Dataset {
    let types = ["Basic", "Standard", "Premium", "Family", "Student"];
    let mut records = Vec::new();
    for year in 1990..2025 {
        for month in 1..=12 {
            let date = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
            for (i, name) in types.iter().enumerate() {
                records.push(SubscriptionRecord {
                    date,
                    subscription_type: name.to_string(),
                    active_subscriptions: (year as u64 - 1980) * 100 + month as u64 * 7 + i as u64,
                });
            }
        }
    }
    Dataset::from_records(records)
}

fn bench_filtering(c: &mut Criterion) {
    let dataset = setup_large_dataset();
    let all = FilterParams {
        subscription_type: TypeSelection::All,
        start: YearMonth::new(2000, 1).unwrap(),
        end: YearMonth::new(2020, 12).unwrap(),
    };
    let single = FilterParams {
        subscription_type: TypeSelection::from_label("Premium"),
        ..all.clone()
    };

    c.bench_function("filter_all_types", |b| {
        b.iter(|| filter_records(black_box(&dataset), black_box(&all)))
    });
    c.bench_function("filter_single_type", |b| {
        b.iter(|| filter_records(black_box(&dataset), black_box(&single)))
    });
}

fn bench_summaries(c: &mut Criterion) {
    let dataset = setup_large_dataset();
    c.bench_function("compute_summaries", |b| {
        b.iter(|| compute_summaries(black_box(&dataset)))
    });
}

criterion_group!(benches, bench_filtering, bench_summaries);
criterion_main!(benches);
