use std::collections::{HashMap, HashSet};

use crate::store::{RowStore, cell};

/// Distinct values for one facet column, in first-seen row order. Duplicate
/// detection is exact string equality; empty cells contribute no option.
pub fn distinct_values(store: &RowStore, column: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for row in &store.rows {
        let value = cell(row, column);
        if value.is_empty() {
            continue;
        }
        if seen.insert(value.to_string()) {
            values.push(value.to_string());
        }
    }
    values
}

/// Facet option lists for a resource. Must always be fed the full unfiltered
/// store so the option lists stay stable while other facets are active.
pub fn extract_facets(store: &RowStore, facet_columns: &[&str]) -> HashMap<String, Vec<String>> {
    facet_columns
        .iter()
        .map(|column| (column.to_string(), distinct_values(store, column)))
        .collect()
}
