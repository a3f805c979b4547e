use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use gridiron_terminal::filter::{FacetSelection, apply_filters};
use gridiron_terminal::sort::{SortDirection, sort_rows};
use gridiron_terminal::store::{Row, RowStore};

const ROWS: usize = 5_000;

const TEAMS: [&str; 8] = ["KC", "BUF", "DET", "BAL", "CIN", "PHI", "SF", "DAL"];

fn sample_store() -> RowStore {
    let fields: Vec<String> = ["Player", "Team", "Conference", "ATT", "YDS", "TD"]
        .iter()
        .map(|f| f.to_string())
        .collect();
    let rows: Vec<Row> = (0..ROWS)
        .map(|i| {
            let mut row = Row::new();
            row.insert("Player".to_string(), format!("Player {i}"));
            row.insert("Team".to_string(), TEAMS[i % TEAMS.len()].to_string());
            row.insert(
                "Conference".to_string(),
                if i % 2 == 0 { "AFC" } else { "NFC" }.to_string(),
            );
            row.insert("ATT".to_string(), ((i * 7) % 600).to_string());
            row.insert("YDS".to_string(), format!("{}.{}", (i * 13) % 5000, i % 10));
            row.insert("TD".to_string(), ((i * 3) % 50).to_string());
            row
        })
        .collect();
    RowStore::new(fields, rows)
}

fn bench_filter_pipeline(c: &mut Criterion) {
    let store = sample_store();
    let mut selection = FacetSelection::new();
    selection.set("Conference", Some("AFC".to_string()));

    c.bench_function("filter_facet_and_search", |b| {
        b.iter(|| {
            let view = apply_filters(black_box(&store), &selection, "player 42");
            black_box(view.len());
        })
    });
}

fn bench_numeric_sort(c: &mut Criterion) {
    let store = sample_store();

    c.bench_function("sort_numeric_column", |b| {
        b.iter(|| {
            let sorted = sort_rows(black_box(&store.rows), "YDS", SortDirection::Descending);
            black_box(sorted.len());
        })
    });
}

fn bench_filter_then_sort(c: &mut Criterion) {
    let store = sample_store();
    let mut selection = FacetSelection::new();
    selection.set("Team", Some("KC".to_string()));

    c.bench_function("filter_then_sort", |b| {
        b.iter(|| {
            let view = apply_filters(black_box(&store), &selection, "");
            let sorted = sort_rows(&view.rows, "TD", SortDirection::Ascending);
            black_box(sorted.len());
        })
    });
}

criterion_group!(
    benches,
    bench_filter_pipeline,
    bench_numeric_sort,
    bench_filter_then_sort
);
criterion_main!(benches);
